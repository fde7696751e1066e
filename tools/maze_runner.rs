use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_search::{
    load_maze, run_search, save_maze, GridGraph, NodeId, SearchConfig, SearchResult, StrategyKind,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, ValueEnum)]
enum StrategyArg {
    Dfs,
    Bfs,
    Greedy,
    Dijkstra,
    Astar,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => StrategyKind::DepthFirst,
            StrategyArg::Bfs => StrategyKind::BreadthFirst,
            StrategyArg::Greedy => StrategyKind::Greedy,
            StrategyArg::Dijkstra => StrategyKind::Dijkstra,
            StrategyArg::Astar => StrategyKind::AStar,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "maze_runner")]
#[command(about = "Run a pathfinding strategy over a maze and render it as ASCII", long_about = None)]
struct Args {
    /// Maze file to load; omit to generate a random maze instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Traversal strategy
    #[arg(short = 'a', long, value_enum, default_value = "bfs")]
    strategy: StrategyArg,

    /// Rows of the generated maze
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Columns of the generated maze
    #[arg(long, default_value_t = 40)]
    cols: usize,

    /// Wall probability of the generated maze (0.0 - 1.0)
    #[arg(long, default_value_t = 0.3)]
    wall_density: f64,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Start cell as `row,col`; random open cell when omitted
    #[arg(long, value_parser = parse_cell)]
    start: Option<(usize, usize)>,

    /// End cell as `row,col`; random open cell when omitted
    #[arg(long, value_parser = parse_cell)]
    end: Option<(usize, usize)>,

    /// A* heuristic scale
    #[arg(long, default_value_t = 100.0)]
    heuristic_scale: f64,

    /// Pause between steps, in milliseconds (visualization pacing only)
    #[arg(long, default_value_t = 0)]
    step_delay_ms: u64,

    /// Save the maze (with chosen start/end) to this `.mz` file
    #[arg(long)]
    save: Option<PathBuf>,
}

fn parse_cell(value: &str) -> Result<(usize, usize), String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got {value:?}"))?;
    let row = row.trim().parse().map_err(|_| format!("bad row {row:?}"))?;
    let col = col.trim().parse().map_err(|_| format!("bad col {col:?}"))?;
    Ok((row, col))
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let (grid, mut start, mut end) = match &args.file {
        Some(path) => {
            let maze =
                load_maze(path).with_context(|| format!("failed to load {}", path.display()))?;
            (maze.grid, maze.start, maze.end)
        }
        None => (generate(&mut rng, args.rows, args.cols, args.wall_density), None, None),
    };

    if let Some((row, col)) = args.start {
        start = Some(grid.try_node_id(row, col).with_context(|| {
            format!(
                "start cell {row},{col} outside the {}x{} maze",
                grid.rows(),
                grid.cols()
            )
        })?);
    }
    if let Some((row, col)) = args.end {
        end = Some(grid.try_node_id(row, col).with_context(|| {
            format!(
                "end cell {row},{col} outside the {}x{} maze",
                grid.rows(),
                grid.cols()
            )
        })?);
    }
    let (start, end) = pick_endpoints(&grid, &mut rng, start, end)?;

    if let Some(path) = &args.save {
        save_maze(path, &grid, Some(start), Some(end), 20)
            .with_context(|| format!("failed to save {}", path.display()))?;
        println!("maze saved to {}", path.display());
    }

    let kind = StrategyKind::from(args.strategy);
    let config = SearchConfig {
        heuristic_scale: args.heuristic_scale,
        step_delay: Duration::from_millis(args.step_delay_ms),
        emit_probe_events: false,
    };
    let (result, _events) = run_search(&grid, start, end, kind, config)?;

    render(&grid, start, end, &result);
    println!();
    println!("strategy: {kind}");
    println!("status:   {:?}", result.status);
    println!("weight:   {}", result.total_weight);
    println!("hops:     {}", result.hop_count);
    println!("steps:    {}", result.steps_explored);

    Ok(())
}

/// Random maze with independently sampled walls
fn generate(rng: &mut StdRng, rows: usize, cols: usize, wall_density: f64) -> GridGraph {
    let mut grid = GridGraph::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(wall_density.clamp(0.0, 1.0)) {
                grid.set_wall(row, col, true);
            }
        }
    }
    grid
}

/// Fill in missing endpoints with distinct random open cells
fn pick_endpoints(
    grid: &GridGraph,
    rng: &mut StdRng,
    start: Option<NodeId>,
    end: Option<NodeId>,
) -> Result<(NodeId, NodeId)> {
    let open: Vec<NodeId> = (0..grid.rows())
        .flat_map(|row| (0..grid.cols()).map(move |col| (row, col)))
        .filter(|&(row, col)| !grid.is_wall(row, col))
        .map(|(row, col)| grid.node_id(row, col))
        .collect();
    if open.len() < 2 {
        bail!("maze has fewer than two open cells");
    }

    let mut pick = |taken: Option<NodeId>| loop {
        let candidate = open[rng.gen_range(0..open.len())];
        if Some(candidate) != taken {
            return candidate;
        }
    };
    let start = start.unwrap_or_else(|| pick(end));
    let end = end.unwrap_or_else(|| pick(Some(start)));
    if start == end {
        bail!("start and end must differ");
    }
    Ok((start, end))
}

fn render(grid: &GridGraph, start: NodeId, end: NodeId, result: &SearchResult) {
    let on_path: std::collections::HashSet<NodeId> = result.path.iter().copied().collect();
    for row in 0..grid.rows() {
        let mut line = String::with_capacity(grid.cols());
        for col in 0..grid.cols() {
            let id = grid.node_id(row, col);
            line.push(if id == start {
                'S'
            } else if id == end {
                'E'
            } else if grid.is_wall(row, col) {
                '#'
            } else if on_path.contains(&id) {
                '*'
            } else {
                '.'
            });
        }
        println!("{line}");
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
