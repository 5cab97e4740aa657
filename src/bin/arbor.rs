//! `arbor` - compute and time minimum spanning trees.
//!
//! With no arguments, runs both algorithms on the built-in seven-vertex graph,
//! printing the adjacency matrix, each tree and each running time.
//!
//! ```bash
//! arbor
//! arbor --graph network.json --start 3 --format json
//! RUST_LOG=arbor=debug arbor --algorithm prim
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use arbor::{compare, reference_graph, Algorithm, GraphDefinition, SolveOptions, WeightedGraph};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(
    author,
    version,
    about = "Minimum spanning trees via Kruskal and Prim",
    long_about = None
)]
struct Cli {
    /// JSON graph definition (`{"vertices": N, "edges": [...]}`)
    ///
    /// Defaults to the built-in seven-vertex graph.
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Start vertex for Prim's algorithm
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Algorithms to run (repeatable); defaults to both
    #[arg(short, long, value_enum)]
    algorithm: Vec<AlgorithmArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Skip printing the adjacency matrix
    #[arg(long, default_value_t = false)]
    no_matrix: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Kruskal,
    Prim,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Kruskal => Algorithm::Kruskal,
            AlgorithmArg::Prim => Algorithm::Prim,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    /// Repeated `--algorithm` flags in order, or every solver if none were given.
    fn solve_options(&self) -> SolveOptions {
        let algorithms = if self.algorithm.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithm.iter().copied().map(Algorithm::from).collect()
        };
        SolveOptions {
            start_vertex: self.start,
            algorithms,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "arbor=debug" } else { "arbor=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let graph = load_graph(cli.graph.as_ref())?;
    let options = cli.solve_options();
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        start = options.start_vertex,
        "computing spanning trees"
    );

    let comparison = compare(&graph, &options).context("spanning tree computation failed")?;
    for report in &comparison.reports {
        if report.total_weight().is_none() {
            tracing::warn!(algorithm = %report.algorithm, "total weight overflows i64");
        }
    }
    if !comparison.weights_agree() {
        tracing::warn!("solvers disagree on total weight; check for duplicate edges");
    }

    match cli.format {
        Format::Text => {
            if !cli.no_matrix {
                println!("Adjacency Matrix:");
                println!("{}", graph.matrix());
            }
            print!("{comparison}");
        }
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&comparison).context("failed to encode report")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn load_graph(path: Option<&PathBuf>) -> Result<WeightedGraph<i64>> {
    let Some(path) = path else {
        return Ok(reference_graph());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let definition: GraphDefinition<i64> = serde_json::from_str(&content)
        .with_context(|| format!("invalid graph definition in {}", path.display()))?;
    definition
        .into_graph()
        .with_context(|| format!("invalid graph in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_run_both_on_built_in_graph() {
        let cli = Cli::try_parse_from(["arbor"]).unwrap();
        assert!(cli.graph.is_none());
        assert_eq!(cli.format, Format::Text);
        assert!(!cli.no_matrix);
        assert!(!cli.verbose);
        assert_eq!(cli.solve_options(), SolveOptions::default());
    }

    #[test]
    fn repeated_algorithms_keep_order() {
        let cli = Cli::try_parse_from([
            "arbor", "-a", "prim", "--algorithm", "kruskal", "--start", "3",
        ])
        .unwrap();
        assert_eq!(cli.algorithm, vec![AlgorithmArg::Prim, AlgorithmArg::Kruskal]);
        let options = cli.solve_options();
        assert_eq!(options.start_vertex, 3);
        assert_eq!(options.algorithms, vec![Algorithm::Prim, Algorithm::Kruskal]);
    }

    #[test]
    fn file_and_output_flags() {
        let cli = Cli::try_parse_from([
            "arbor", "-g", "net.json", "-f", "json", "--no-matrix", "-v",
        ])
        .unwrap();
        assert_eq!(cli.graph, Some(PathBuf::from("net.json")));
        assert_eq!(cli.format, Format::Json);
        assert!(cli.no_matrix);
        assert!(cli.verbose);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["arbor", "--algorithm", "dijkstra"]).is_err());
        assert!(Cli::try_parse_from(["arbor", "--start", "-1"]).is_err());
        assert!(Cli::try_parse_from(["arbor", "--format", "xml"]).is_err());
        assert!(Cli::try_parse_from(["arbor", "extra"]).is_err());
    }

    #[test]
    fn missing_graph_file_is_reported() {
        let path = PathBuf::from("does/not/exist.json");
        let err = load_graph(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
