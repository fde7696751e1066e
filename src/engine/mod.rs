/// Search engine
///
/// Drives one strategy step by step over a graph until it terminates or is
/// cancelled, streaming `SearchEvent`s to an [`EventSink`] as it goes, then
/// reconstructs the path and assembles the [`SearchResult`].

pub mod cancel;
pub mod parallel;
pub mod sink;
pub mod task;

pub use cancel::CancelToken;
pub use parallel::run_all_strategies;
pub use sink::EventSink;
pub use task::SearchTask;

use crate::graph::{edge_weight, GraphModel};
use crate::state::SearchState;
use crate::strategy::{self, StepOutcome, StrategyKind};
use crate::types::{NodeId, SearchEvent, SearchResult, SearchStatus};
use std::time::Duration;
use thiserror::Error;

/// Engine errors: invalid arguments detected before any search work begins
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("start and end node must differ")]
    StartEqualsEnd,

    #[error("node {id} out of range for graph of {count} nodes")]
    IdOutOfRange { id: NodeId, count: usize },

    #[error("heuristic scale {0} must be finite and non-negative")]
    InvalidHeuristicScale(f64),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Per-run tunables
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Multiplier applied to the A* straight-line estimate. The default of
    /// 100 trades optimality for speed on typical inputs; use 1 or less to keep
    /// the Euclidean heuristic admissible when weights are Euclidean.
    pub heuristic_scale: f64,
    /// Pause inserted after each expansion, purely to pace visualization
    pub step_delay: Duration,
    /// Whether `Probed` events are emitted at all
    pub emit_probe_events: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic_scale: 100.0,
            step_delay: Duration::ZERO,
            emit_probe_events: true,
        }
    }
}

impl SearchConfig {
    /// Build the sink this config asks for
    pub fn sink(&self) -> EventSink {
        EventSink::new(self.emit_probe_events)
    }
}

/// Drives one strategy to completion or cancellation
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one search over `graph` from `start` to `end` with the strategy
    /// `kind`, pushing events to `sink` and honoring `cancel` between steps
    pub fn run(
        &self,
        graph: &dyn GraphModel,
        start: NodeId,
        end: NodeId,
        kind: StrategyKind,
        sink: &EventSink,
        cancel: &CancelToken,
    ) -> EngineResult<SearchResult> {
        let count = graph.node_count();
        for id in [start, end] {
            if id.index() >= count {
                return Err(EngineError::IdOutOfRange { id, count });
            }
        }
        if start == end {
            return Err(EngineError::StartEqualsEnd);
        }
        if !self.config.heuristic_scale.is_finite() || self.config.heuristic_scale < 0.0 {
            return Err(EngineError::InvalidHeuristicScale(
                self.config.heuristic_scale,
            ));
        }

        tracing::debug!(
            strategy = kind.name(),
            nodes = count,
            %start,
            %end,
            "starting search"
        );

        let mut state = SearchState::new(count);
        let mut strategy = strategy::build(kind, start, end, &self.config);
        strategy.initialize(graph, &mut state);

        let mut steps_explored = 0usize;
        let status = loop {
            // Cooperative cancellation, checked between steps only.
            if cancel.is_cancelled() {
                sink.push(SearchEvent::Cancelled);
                tracing::debug!(strategy = kind.name(), steps_explored, "search cancelled");
                return Ok(SearchResult::terminal(
                    SearchStatus::Cancelled,
                    steps_explored,
                ));
            }

            match strategy.step(graph, &mut state, sink) {
                StepOutcome::Expanded => {
                    steps_explored += 1;
                    if !self.config.step_delay.is_zero() {
                        std::thread::sleep(self.config.step_delay);
                    }
                }
                StepOutcome::Skipped => {}
                StepOutcome::Found => break SearchStatus::Found,
                StepOutcome::Exhausted => break SearchStatus::Unreachable,
            }
        };

        let result = match status {
            SearchStatus::Found => match reconstruct_path(graph, &state, start, end) {
                Some((path, total_weight)) => SearchResult {
                    hop_count: path.len() - 1,
                    path,
                    total_weight,
                    steps_explored,
                    status: SearchStatus::Found,
                },
                // The strategy reported Found but no predecessor chain
                // reaches the end node; treat as unreachable.
                None => SearchResult::terminal(SearchStatus::Unreachable, steps_explored),
            },
            _ => SearchResult::terminal(status, steps_explored),
        };

        tracing::debug!(
            strategy = kind.name(),
            status = ?result.status,
            steps = result.steps_explored,
            hops = result.hop_count,
            weight = result.total_weight,
            "search finished"
        );
        sink.push(SearchEvent::Completed {
            result: result.clone(),
        });
        Ok(result)
    }
}

/// Walk predecessor links backward from `end`, reverse into start -> end
/// order and re-derive the total weight from the graph itself
///
/// Returns `None` when `end` was never claimed (no predecessor), when the
/// chain does not lead back to `start`, or when a consecutive pair has no
/// edge. Each of these downgrades a claimed Found to Unreachable.
fn reconstruct_path(
    graph: &dyn GraphModel,
    state: &SearchState,
    start: NodeId,
    end: NodeId,
) -> Option<(Vec<NodeId>, f64)> {
    state.predecessor(end)?;

    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = state.predecessor(current) {
        path.push(prev);
        current = prev;
        if path.len() > graph.node_count() {
            // Predecessor cycle; state is corrupt.
            return None;
        }
    }
    if current != start {
        return None;
    }
    path.reverse();

    let mut total_weight = 0.0;
    for pair in path.windows(2) {
        total_weight += edge_weight(graph, pair[0], pair[1])?;
    }
    Some((path, total_weight))
}

/// Convenience entry point: run one search with a fresh sink and no
/// cancellation, returning the result together with every emitted event
pub fn run_search(
    graph: &dyn GraphModel,
    start: NodeId,
    end: NodeId,
    kind: StrategyKind,
    config: SearchConfig,
) -> EngineResult<(SearchResult, Vec<SearchEvent>)> {
    let sink = config.sink();
    let engine = SearchEngine::new(config);
    let result = engine.run(graph, start, end, kind, &sink, &CancelToken::new())?;
    Ok((result, sink.drain()))
}
