/// Parallel strategy comparison
///
/// Runs every strategy over the same immutable graph in parallel using
/// rayon. Each run gets its own SearchState and sink, so no synchronization
/// is needed beyond the shared read-only graph.
use super::{EngineResult, SearchConfig, SearchEngine};
use crate::engine::CancelToken;
use crate::graph::GraphModel;
use crate::strategy::StrategyKind;
use crate::types::{NodeId, SearchResult};
use rayon::prelude::*;

/// Run all five strategies for the same `start` -> `end` query
///
/// Results come back in [`StrategyKind::ALL`] order regardless of which
/// run finished first.
pub fn run_all_strategies<G>(
    graph: &G,
    start: NodeId,
    end: NodeId,
    config: &SearchConfig,
) -> Vec<(StrategyKind, EngineResult<SearchResult>)>
where
    G: GraphModel + Sync,
{
    StrategyKind::ALL
        .par_iter()
        .map(|&kind| {
            let sink = config.sink();
            let engine = SearchEngine::new(config.clone());
            let result = engine.run(graph, start, end, kind, &sink, &CancelToken::new());
            (kind, result)
        })
        .collect()
}
