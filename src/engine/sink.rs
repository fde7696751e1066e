use crate::types::{NodeId, SearchEvent};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Ordered, unbounded queue of search events
///
/// The engine pushes, a consumer drains; neither side ever blocks on the
/// other, so a slow renderer cannot stall or reorder the search. Cloning
/// the sink yields another handle to the same queue.
#[derive(Clone)]
pub struct EventSink {
    queue: Arc<Mutex<VecDeque<SearchEvent>>>,
    emit_probes: bool,
}

impl EventSink {
    pub fn new(emit_probes: bool) -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
            emit_probes,
        }
    }

    /// Whether `Probed` events are recorded
    pub fn probes_enabled(&self) -> bool {
        self.emit_probes
    }

    pub fn push(&self, event: SearchEvent) {
        self.queue.lock().push_back(event);
    }

    /// Record a `Probed` event unless probe emission is disabled
    pub fn probe(&self, from: NodeId, to: NodeId) {
        if self.emit_probes {
            self.push(SearchEvent::Probed { from, to });
        }
    }

    /// Pop the oldest pending event, if any
    pub fn try_pop(&self) -> Option<SearchEvent> {
        self.queue.lock().pop_front()
    }

    /// Take every pending event, oldest first
    pub fn drain(&self) -> Vec<SearchEvent> {
        self.queue.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl Default for EventSink {
    fn default() -> Self {
        Self::new(true)
    }
}
