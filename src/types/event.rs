use super::{NodeId, SearchResult};
use serde::{Deserialize, Serialize};

/// A visualization event emitted while a search runs
///
/// Events are pushed to the run's `EventSink` in the order they occur, so a
/// consumer replaying them sees exactly the progression the strategy took.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchEvent {
    /// An edge was relaxed (or claimed) for the first time
    Probed { from: NodeId, to: NodeId },
    /// A node was expanded
    Visited { node: NodeId },
    /// An edge belongs to the path currently under consideration; weighted
    /// strategies re-emit the chain on every frontier pop, greedy emits one
    /// per move
    PathStep { from: NodeId, to: NodeId },
    /// The run terminated with a result
    Completed { result: SearchResult },
    /// The run was cancelled before terminating
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_serialization() {
        let ev = SearchEvent::Probed {
            from: NodeId::new(0),
            to: NodeId::new(3),
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(json, r#"{"type":"probed","from":0,"to":3}"#);
    }
}
