/// Route Search
///
/// A graph-search engine for finding a route between two nodes of a weighted
/// graph under interchangeable strategies, with an observable event stream
/// for progressive visualization and cooperative cancellation.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │              Route Search Engine                 │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │  GraphModel (grid / matrix)    │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                  │
/// │  ┌────────────────────────────────┐              │
/// │  │  Strategy (DFS / BFS / greedy  │              │
/// │  │  / Dijkstra / A*) stepping     │              │
/// │  │  over SearchState              │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                  │
/// │  ┌────────────────────────────────┐              │
/// │  │  SearchEngine -> SearchResult  │              │
/// │  │  + EventSink + CancelToken     │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (NodeId, Point, SearchResult, SearchEvent)
/// - `graph`: Graph abstraction and the grid / distance-matrix models
/// - `state`: Per-run mutable search state, indexed by NodeId
/// - `strategy`: The five traversal strategies and their shared frontier
/// - `engine`: The search driver, event queue, cancellation, parallel runs
/// - `io`: Point-file and maze-file collaborators

pub mod engine;
pub mod graph;
pub mod io;
pub mod state;
pub mod strategy;
pub mod types;

// Re-export commonly used types
pub use types::{NodeId, Point, SearchEvent, SearchResult, SearchStatus};

// Re-export graph types
pub use graph::{GraphError, GraphModel, GridGraph, MatrixGraph, NO_EDGE};

// Re-export state
pub use state::SearchState;

// Re-export strategy types
pub use strategy::{StepOutcome, Strategy, StrategyKind};

// Re-export engine types
pub use engine::{
    run_all_strategies, run_search, CancelToken, EngineError, EngineResult, EventSink,
    SearchConfig, SearchEngine, SearchTask,
};

// Re-export io types
pub use io::{load_maze, load_points, save_maze, InputError, InputResult, MazeFile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
