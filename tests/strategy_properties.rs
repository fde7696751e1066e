/// Strategy-level property tests
///
/// Verifies the documented guarantees of each traversal strategy against
/// brute-force enumeration on small graphs.
use route_search::graph::edge_weight;
use route_search::{
    run_search, GraphModel, GridGraph, MatrixGraph, NodeId, Point, SearchConfig, SearchStatus,
    StrategyKind, NO_EDGE,
};

/// Enumerate every simple path from `start` to `end`, returning
/// `(hops, total_weight)` per path
fn all_simple_paths(
    graph: &dyn GraphModel,
    start: NodeId,
    end: NodeId,
) -> Vec<(usize, f64)> {
    fn recurse(
        graph: &dyn GraphModel,
        current: NodeId,
        end: NodeId,
        visited: &mut Vec<bool>,
        hops: usize,
        weight: f64,
        out: &mut Vec<(usize, f64)>,
    ) {
        if current == end {
            out.push((hops, weight));
            return;
        }
        visited[current.index()] = true;
        let mut buf = Vec::new();
        graph.neighbors(current, &mut buf);
        for (neighbor, w) in buf {
            if !visited[neighbor.index()] {
                recurse(graph, neighbor, end, visited, hops + 1, weight + w, out);
            }
        }
        visited[current.index()] = false;
    }

    let mut out = Vec::new();
    let mut visited = vec![false; graph.node_count()];
    recurse(graph, start, end, &mut visited, 0, 0.0, &mut out);
    out
}

/// An irregular 7-node graph with several competing routes
fn test_matrix() -> MatrixGraph {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 4.0),
        Point::new(5.0, 2.0),
        Point::new(4.0, 5.0),
        Point::new(7.0, 6.0),
        Point::new(8.0, 1.0),
    ];
    MatrixGraph::with_edges(
        points,
        &[
            (0, 1),
            (0, 2),
            (1, 3),
            (2, 4),
            (3, 4),
            (3, 6),
            (4, 5),
            (5, 6),
        ],
    )
    .unwrap()
}

#[test]
fn bfs_hop_count_is_minimal() {
    let graph = test_matrix();
    let start = NodeId::new(0);
    let end = NodeId::new(5);

    let (result, _) = run_search(
        &graph,
        start,
        end,
        StrategyKind::BreadthFirst,
        SearchConfig::default(),
    )
    .unwrap();
    assert_eq!(result.status, SearchStatus::Found);

    let min_hops = all_simple_paths(&graph, start, end)
        .into_iter()
        .map(|(hops, _)| hops)
        .min()
        .unwrap();
    assert_eq!(result.hop_count, min_hops);
}

#[test]
fn bfs_on_open_3x3_grid() {
    let grid = GridGraph::new(3, 3);
    let (result, _) = run_search(
        &grid,
        grid.node_id(0, 0),
        grid.node_id(2, 2),
        StrategyKind::BreadthFirst,
        SearchConfig::default(),
    )
    .unwrap();
    assert_eq!(result.status, SearchStatus::Found);
    assert_eq!(result.hop_count, 4);
    assert_eq!(result.total_weight, 4.0);
}

#[test]
fn dijkstra_weight_is_minimal_over_all_simple_paths() {
    let graph = test_matrix();
    let start = NodeId::new(0);
    let end = NodeId::new(5);

    let (result, _) = run_search(
        &graph,
        start,
        end,
        StrategyKind::Dijkstra,
        SearchConfig::default(),
    )
    .unwrap();
    assert_eq!(result.status, SearchStatus::Found);

    for (_, weight) in all_simple_paths(&graph, start, end) {
        assert!(result.total_weight <= weight + 1e-9);
    }
}

#[test]
fn astar_with_admissible_scale_matches_dijkstra() {
    let graph = test_matrix();
    let start = NodeId::new(0);
    let end = NodeId::new(5);

    let (dijkstra, _) = run_search(
        &graph,
        start,
        end,
        StrategyKind::Dijkstra,
        SearchConfig::default(),
    )
    .unwrap();

    for scale in [0.0, 0.5, 1.0] {
        let (astar, _) = run_search(
            &graph,
            start,
            end,
            StrategyKind::AStar,
            SearchConfig {
                heuristic_scale: scale,
                ..SearchConfig::default()
            },
        )
        .unwrap();
        assert_eq!(astar.status, SearchStatus::Found);
        assert!(
            (astar.total_weight - dijkstra.total_weight).abs() < 1e-9,
            "scale {scale}: {} vs {}",
            astar.total_weight,
            dijkstra.total_weight
        );
    }
}

#[test]
fn greedy_dead_ends_even_when_goal_is_reachable() {
    // The cheapest edge from 0 leads into a cul-de-sac; the goal hangs off
    // the pricier first hop.
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 3.0),
        Point::new(0.0, 4.0),
    ];
    let graph = MatrixGraph::with_edges(points, &[(0, 1), (0, 2), (2, 3)]).unwrap();
    let start = NodeId::new(0);
    let end = NodeId::new(3);

    let (greedy, _) = run_search(
        &graph,
        start,
        end,
        StrategyKind::Greedy,
        SearchConfig::default(),
    )
    .unwrap();
    assert_eq!(greedy.status, SearchStatus::Unreachable);
    assert!(greedy.path.is_empty());

    // The goal is genuinely reachable: Dijkstra finds it.
    let (dijkstra, _) = run_search(
        &graph,
        start,
        end,
        StrategyKind::Dijkstra,
        SearchConfig::default(),
    )
    .unwrap();
    assert_eq!(dijkstra.status, SearchStatus::Found);
}

#[test]
fn found_paths_are_edge_connected_and_weights_add_up() {
    let graph = test_matrix();
    let start = NodeId::new(0);
    let end = NodeId::new(5);

    for kind in StrategyKind::ALL {
        let (result, _) =
            run_search(&graph, start, end, kind, SearchConfig::default()).unwrap();
        if result.status != SearchStatus::Found {
            continue;
        }
        assert_eq!(*result.path.first().unwrap(), start, "strategy {kind}");
        assert_eq!(*result.path.last().unwrap(), end, "strategy {kind}");
        assert_eq!(result.hop_count, result.path.len() - 1);

        let mut sum = 0.0;
        for pair in result.path.windows(2) {
            let weight = edge_weight(&graph, pair[0], pair[1])
                .unwrap_or_else(|| panic!("strategy {kind}: missing edge {}-{}", pair[0], pair[1]));
            assert_ne!(weight, NO_EDGE);
            sum += weight;
        }
        assert_eq!(sum, result.total_weight, "strategy {kind}");
    }
}

#[test]
fn identical_runs_are_deterministic() {
    let graph = test_matrix();
    let grid = {
        let mut grid = GridGraph::new(6, 6);
        grid.set_wall(2, 2, true);
        grid.set_wall(2, 3, true);
        grid.set_wall(3, 2, true);
        grid
    };

    for kind in StrategyKind::ALL {
        let a = run_search(
            &graph,
            NodeId::new(0),
            NodeId::new(5),
            kind,
            SearchConfig::default(),
        )
        .unwrap();
        let b = run_search(
            &graph,
            NodeId::new(0),
            NodeId::new(5),
            kind,
            SearchConfig::default(),
        )
        .unwrap();
        assert_eq!(a, b, "matrix, strategy {kind}");

        let a = run_search(
            &grid,
            grid.node_id(0, 0),
            grid.node_id(5, 5),
            kind,
            SearchConfig::default(),
        )
        .unwrap();
        let b = run_search(
            &grid,
            grid.node_id(0, 0),
            grid.node_id(5, 5),
            kind,
            SearchConfig::default(),
        )
        .unwrap();
        assert_eq!(a, b, "grid, strategy {kind}");
    }
}

#[test]
fn disconnected_graph_is_unreachable_for_every_strategy() {
    // 4 nodes, edges only 0-1 and 2-3.
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(11.0, 0.0),
    ];
    let graph = MatrixGraph::with_edges(points, &[(0, 1), (2, 3)]).unwrap();

    for kind in StrategyKind::ALL {
        let (result, _) = run_search(
            &graph,
            NodeId::new(0),
            NodeId::new(2),
            kind,
            SearchConfig::default(),
        )
        .unwrap();
        assert_eq!(result.status, SearchStatus::Unreachable, "strategy {kind}");
        assert!(result.path.is_empty());
        assert_eq!(result.total_weight, 0.0);
    }
}
