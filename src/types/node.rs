use serde::{Deserialize, Serialize};
use std::fmt;

/// NodeId: index of a node within one graph's node set
///
/// A NodeId is only meaningful for the `GraphModel` it was obtained from; ids
/// are stable for that graph's lifetime and are not reused across graphs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a NodeId from a raw index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_display() {
        let id = NodeId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id, NodeId::from(42));
        assert_eq!(id.to_string(), "#42");
    }

    #[test]
    fn test_ordering() {
        assert!(NodeId::new(1) < NodeId::new(2));
    }
}
