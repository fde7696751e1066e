use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use route_search::{
    load_points, run_all_strategies, run_search, MatrixGraph, NodeId, SearchConfig, SearchEvent,
    StrategyKind,
};
use std::fs::File;
use std::io::{BufWriter, Write as IoWrite};
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
#[command(name = "route_runner")]
#[command(about = "Run a route search over a tab-separated point file", long_about = None)]
struct Args {
    /// Point file: `label	x	y` records, optionally followed by
    /// `indexA	indexB` edge records
    file: PathBuf,

    /// Traversal strategy
    #[arg(short = 'a', long, value_enum, default_value = "greedy")]
    strategy: StrategyArg,

    /// Start node index
    #[arg(short, long)]
    start: usize,

    /// End node index
    #[arg(short, long)]
    end: usize,

    /// A* heuristic scale (values at or below 1 keep the Euclidean heuristic admissible)
    #[arg(long, default_value_t = 100.0)]
    heuristic_scale: f64,

    /// Pause between steps, in milliseconds (visualization pacing only)
    #[arg(long, default_value_t = 0)]
    step_delay_ms: u64,

    /// Do not emit probe events
    #[arg(long)]
    no_probes: bool,

    /// Run every strategy (in parallel) and print a comparison table
    #[arg(long)]
    compare: bool,

    /// Write the result as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let graph = load_points(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    let start = NodeId::new(args.start);
    let end = NodeId::new(args.end);
    let config = SearchConfig {
        heuristic_scale: args.heuristic_scale,
        step_delay: Duration::from_millis(args.step_delay_ms),
        emit_probe_events: !args.no_probes,
    };

    if args.compare {
        return compare(&graph, start, end, &config);
    }

    let kind = StrategyKind::from(args.strategy);
    let (result, events) = run_search(&graph, start, end, kind, config)?;

    let route: Vec<&str> = result.path.iter().map(|&id| graph.label(id)).collect();
    let probes = events
        .iter()
        .filter(|e| matches!(e, SearchEvent::Probed { .. }))
        .count();

    println!("strategy:  {kind}");
    println!("status:    {:?}", result.status);
    if result.is_found() {
        println!("route:     {}", route.join(" -> "));
    }
    println!("weight:    {}", result.total_weight);
    println!("hops:      {}", result.hop_count);
    println!("steps:     {}", result.steps_explored);
    println!("probes:    {probes}");

    if let Some(path) = args.output {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &result)?;
        writer.flush()?;
        println!("result written to {}", path.display());
    }

    Ok(())
}

fn compare(graph: &MatrixGraph, start: NodeId, end: NodeId, config: &SearchConfig) -> Result<()> {
    println!(
        "{:<10} {:<12} {:>12} {:>6} {:>8}",
        "strategy", "status", "weight", "hops", "steps"
    );
    for (kind, result) in run_all_strategies(graph, start, end, config) {
        let result = result?;
        println!(
            "{:<10} {:<12} {:>12.3} {:>6} {:>8}",
            kind.name(),
            format!("{:?}", result.status),
            result.total_weight,
            result.hop_count,
            result.steps_explored
        );
    }
    Ok(())
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
