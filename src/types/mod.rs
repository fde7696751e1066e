/// Core data types for the search engine
///
/// This module defines the fundamental types used throughout the system:
/// - NodeId: index-based node identifier, stable for a graph's lifetime
/// - Point: 2D coordinate used for positions and heuristics
/// - SearchEvent: visualization events streamed while a search runs
/// - SearchResult / SearchStatus: the terminal outcome of a run

pub mod event;
pub mod node;
pub mod point;
pub mod result;

pub use event::SearchEvent;
pub use node::NodeId;
pub use point::Point;
pub use result::{SearchResult, SearchStatus};
