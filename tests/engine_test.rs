/// Engine-level integration tests
///
/// Covers validation, the event stream contract, cancellation, detached
/// tasks, and the parallel strategy comparison.
use route_search::{
    run_all_strategies, run_search, CancelToken, EngineError, GridGraph, NodeId, SearchConfig,
    SearchEngine, SearchEvent, SearchStatus, StrategyKind,
};
use std::sync::Arc;

#[test]
fn rejects_invalid_arguments_before_searching() {
    let grid = GridGraph::new(3, 3);
    let engine = SearchEngine::new(SearchConfig::default());
    let sink = SearchConfig::default().sink();
    let cancel = CancelToken::new();

    let err = engine
        .run(
            &grid,
            grid.node_id(1, 1),
            grid.node_id(1, 1),
            StrategyKind::DepthFirst,
            &sink,
            &cancel,
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::StartEqualsEnd));

    let err = engine
        .run(
            &grid,
            NodeId::new(100),
            grid.node_id(1, 1),
            StrategyKind::DepthFirst,
            &sink,
            &cancel,
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::IdOutOfRange { .. }));

    // Nothing was emitted: the searches never began.
    assert!(sink.is_empty());
}

#[test]
fn completed_is_the_final_event_and_carries_the_result() {
    let grid = GridGraph::new(3, 3);
    let (result, events) = run_search(
        &grid,
        grid.node_id(0, 0),
        grid.node_id(2, 2),
        StrategyKind::BreadthFirst,
        SearchConfig::default(),
    )
    .unwrap();

    assert!(!events.is_empty());
    match events.last().unwrap() {
        SearchEvent::Completed { result: emitted } => assert_eq!(emitted, &result),
        other => panic!("expected Completed, got {other:?}"),
    }
    // No terminal event other than the last one.
    for event in &events[..events.len() - 1] {
        assert!(!matches!(
            event,
            SearchEvent::Completed { .. } | SearchEvent::Cancelled
        ));
    }
}

#[test]
fn probe_events_can_be_suppressed() {
    let grid = GridGraph::new(4, 4);
    let run = |emit_probe_events| {
        run_search(
            &grid,
            grid.node_id(0, 0),
            grid.node_id(3, 3),
            StrategyKind::BreadthFirst,
            SearchConfig {
                emit_probe_events,
                ..SearchConfig::default()
            },
        )
        .unwrap()
    };

    let (_, with_probes) = run(true);
    assert!(with_probes
        .iter()
        .any(|e| matches!(e, SearchEvent::Probed { .. })));

    let (result, without_probes) = run(false);
    assert!(!without_probes
        .iter()
        .any(|e| matches!(e, SearchEvent::Probed { .. })));
    // Suppressing probes never changes the outcome.
    assert_eq!(result.status, SearchStatus::Found);
}

#[test]
fn weighted_strategies_emit_path_previews() {
    let grid = GridGraph::new(4, 4);
    for kind in [StrategyKind::Dijkstra, StrategyKind::AStar] {
        let (_, events) = run_search(
            &grid,
            grid.node_id(0, 0),
            grid.node_id(3, 3),
            kind,
            SearchConfig::default(),
        )
        .unwrap();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, SearchEvent::PathStep { .. })),
            "strategy {kind}"
        );
    }
}

#[test]
fn pre_set_cancellation_yields_cancelled_and_empty_path() {
    let grid = GridGraph::new(8, 8);
    let engine = SearchEngine::new(SearchConfig::default());
    let sink = SearchConfig::default().sink();
    let cancel = CancelToken::new();
    cancel.cancel();

    for kind in StrategyKind::ALL {
        let result = engine
            .run(
                &grid,
                grid.node_id(0, 0),
                grid.node_id(7, 7),
                kind,
                &sink,
                &cancel,
            )
            .unwrap();
        assert_eq!(result.status, SearchStatus::Cancelled, "strategy {kind}");
        assert!(result.path.is_empty());
        assert_eq!(result.steps_explored, 0);
        assert_eq!(sink.drain(), vec![SearchEvent::Cancelled]);
    }
}

#[test]
fn detached_task_can_be_cancelled_mid_run() {
    let grid = Arc::new(GridGraph::new(48, 48));
    let start = grid.node_id(0, 0);
    let end = grid.node_id(47, 47);
    let task = route_search::SearchTask::spawn(
        grid,
        start,
        end,
        StrategyKind::BreadthFirst,
        SearchConfig {
            step_delay: std::time::Duration::from_millis(1),
            ..SearchConfig::default()
        },
    );

    // Let a few steps happen, then pull the plug.
    while task.events().is_empty() && !task.is_finished() {
        std::thread::yield_now();
    }
    let sink = task.events().clone();
    task.cancel();
    let result = task.join().unwrap();

    assert_eq!(result.status, SearchStatus::Cancelled);
    assert!(result.path.is_empty());
    assert_eq!(sink.drain().last(), Some(&SearchEvent::Cancelled));
}

#[test]
fn detached_task_completes_unhindered() {
    let grid = Arc::new(GridGraph::new(10, 10));
    let start = grid.node_id(0, 0);
    let end = grid.node_id(9, 9);
    let task = route_search::SearchTask::spawn(
        grid,
        start,
        end,
        StrategyKind::AStar,
        SearchConfig::default(),
    );
    let result = task.join().unwrap();
    assert_eq!(result.status, SearchStatus::Found);
    assert_eq!(*result.path.first().unwrap(), start);
    assert_eq!(*result.path.last().unwrap(), end);
}

#[test]
fn parallel_comparison_covers_every_strategy() {
    let grid = GridGraph::new(6, 6);
    let results = run_all_strategies(
        &grid,
        grid.node_id(0, 0),
        grid.node_id(5, 5),
        &SearchConfig::default(),
    );

    assert_eq!(results.len(), 5);
    let kinds: Vec<StrategyKind> = results.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, StrategyKind::ALL.to_vec());

    let dijkstra = results
        .iter()
        .find(|(kind, _)| *kind == StrategyKind::Dijkstra)
        .and_then(|(_, r)| r.as_ref().ok())
        .unwrap();
    assert_eq!(dijkstra.status, SearchStatus::Found);
    for (kind, result) in &results {
        let result = result.as_ref().unwrap();
        if result.status == SearchStatus::Found {
            assert!(
                result.total_weight >= dijkstra.total_weight,
                "strategy {kind}"
            );
        }
    }
}
