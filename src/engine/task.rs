use super::{CancelToken, EngineResult, EventSink, SearchConfig, SearchEngine};
use crate::graph::GraphModel;
use crate::strategy::StrategyKind;
use crate::types::{NodeId, SearchResult};
use std::sync::Arc;
use std::thread::JoinHandle;

/// One search running on its own worker thread
///
/// The caller keeps the sink and token: drain events while the search runs,
/// cancel it cooperatively, and `join` for the result. Each task owns its
/// SearchState exclusively, so unrelated tasks over different graphs need no
/// synchronization.
pub struct SearchTask {
    handle: JoinHandle<EngineResult<SearchResult>>,
    sink: EventSink,
    cancel: CancelToken,
}

impl SearchTask {
    /// Spawn the search on a new thread
    pub fn spawn<G>(
        graph: Arc<G>,
        start: NodeId,
        end: NodeId,
        kind: StrategyKind,
        config: SearchConfig,
    ) -> Self
    where
        G: GraphModel + Send + Sync + 'static,
    {
        let sink = config.sink();
        let cancel = CancelToken::new();
        let handle = {
            let sink = sink.clone();
            let cancel = cancel.clone();
            std::thread::spawn(move || {
                SearchEngine::new(config).run(graph.as_ref(), start, end, kind, &sink, &cancel)
            })
        };
        Self {
            handle,
            sink,
            cancel,
        }
    }

    /// Event queue of the running search
    pub fn events(&self) -> &EventSink {
        &self.sink
    }

    /// Token shared with the worker; also see [`SearchTask::cancel`]
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Request cooperative cancellation
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker and return its result
    ///
    /// # Panics
    /// Panics if the worker thread itself panicked.
    pub fn join(self) -> EngineResult<SearchResult> {
        self.handle
            .join()
            .expect("search worker thread panicked")
    }
}
