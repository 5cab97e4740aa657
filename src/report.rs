//! Timing harness: runs the solvers, measures wall-clock time and renders reports.
//!
//! Rendering follows the layout of the classic demonstration output:
//!
//! ```text
//! Minimum Spanning Tree (Kruskal):
//! Edge: 0-3, Weight: 1
//! ...
//!
//! Running Time (Kruskal): 0 ms
//! ```

use core::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Algorithm, SpanningTree, VertexId, Weight, WeightedGraph};

/// Which solvers to run and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Start vertex for Prim's algorithm.
    pub start_vertex: VertexId,
    /// Solvers to run, in order.
    pub algorithms: Vec<Algorithm>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            start_vertex: 0,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

/// The outcome of one timed solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolverReport<W> {
    /// The solver that produced `tree`.
    pub algorithm: Algorithm,
    /// The selected edges.
    pub tree: SpanningTree<W>,
    /// Wall-clock duration of the solver call.
    #[serde(serialize_with = "serialize_millis", rename = "elapsed_ms")]
    pub elapsed: Duration,
}

fn serialize_millis<S>(elapsed: &Duration, serializer: S) -> core::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(saturating_u64(elapsed.as_millis()))
}

fn saturating_u64(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

impl<W: Weight> SolverReport<W> {
    /// Elapsed time in whole milliseconds. Small inputs usually read 0.
    pub fn elapsed_millis(&self) -> u64 {
        saturating_u64(self.elapsed.as_millis())
    }

    /// Elapsed time in whole microseconds.
    pub fn elapsed_micros(&self) -> u64 {
        saturating_u64(self.elapsed.as_micros())
    }

    /// Total weight of the tree, or `None` if the sum overflows `W`.
    pub fn total_weight(&self) -> Option<W> {
        self.tree.total_weight()
    }

    /// Writes the edge listing and the running time in the text layout.
    pub fn render_tree(&self, f: &mut impl fmt::Write) -> fmt::Result
    where
        W: fmt::Display,
    {
        writeln!(f, "Minimum Spanning Tree ({}):", self.algorithm)?;
        for edge in self.tree.edges() {
            writeln!(f, "{edge}")?;
        }
        writeln!(f)
    }
}

/// Runs one solver under a timer.
///
/// # Errors
/// Propagates the solver's [`GraphError`](crate::GraphError).
pub fn run<W: Weight>(
    graph: &WeightedGraph<W>,
    algorithm: Algorithm,
    options: &SolveOptions,
) -> Result<SolverReport<W>> {
    let span = tracing::debug_span!("solve", %algorithm, vertices = graph.vertex_count());
    let _guard = span.enter();

    let started = Instant::now();
    let tree = algorithm.solve(graph, options.start_vertex)?;
    let elapsed = started.elapsed();

    tracing::debug!(
        edges = tree.len(),
        total = ?tree.total_weight(),
        elapsed_us = saturating_u64(elapsed.as_micros()),
        "solver finished"
    );
    Ok(SolverReport {
        algorithm,
        tree,
        elapsed,
    })
}

/// Reports for several solvers over the same graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison<W> {
    /// One report per requested solver, in request order.
    pub reports: Vec<SolverReport<W>>,
}

impl<W: Weight> Comparison<W> {
    /// Returns the report for `algorithm`, if it was run.
    pub fn get(&self, algorithm: Algorithm) -> Option<&SolverReport<W>> {
        self.reports.iter().find(|r| r.algorithm == algorithm)
    }

    /// Returns `true` if every report has the same total weight.
    ///
    /// An overflowed total never agrees with anything, including another
    /// overflowed total.
    pub fn weights_agree(&self) -> bool {
        let mut totals = self.reports.iter().map(SolverReport::total_weight);
        match totals.next() {
            Some(Some(first)) => totals.all(|w| w == Some(first)),
            Some(None) => false,
            None => true,
        }
    }
}

/// Renders every tree, then every running time.
impl<W: Weight + fmt::Display> fmt::Display for Comparison<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            report.render_tree(f)?;
        }
        for report in &self.reports {
            writeln!(
                f,
                "Running Time ({}): {} ms",
                report.algorithm,
                report.elapsed_millis()
            )?;
        }
        Ok(())
    }
}

/// Runs the requested solvers one after another, each timed independently.
///
/// # Errors
/// Returns the first solver error encountered.
pub fn compare<W: Weight>(
    graph: &WeightedGraph<W>,
    options: &SolveOptions,
) -> Result<Comparison<W>> {
    let reports = options
        .algorithms
        .iter()
        .map(|&algorithm| run(graph, algorithm, options))
        .collect::<Result<Vec<_>>>()?;
    Ok(Comparison { reports })
}

/// Runs Kruskal and Prim concurrently on the shared graph.
///
/// Both solvers only read the graph, so no synchronisation is needed.
///
/// # Errors
/// Returns Kruskal's error if both fail, otherwise whichever failed.
#[cfg(feature = "parallel")]
pub fn compare_parallel<W>(
    graph: &WeightedGraph<W>,
    options: &SolveOptions,
) -> Result<Comparison<W>>
where
    W: Weight + Send + Sync,
{
    let (kruskal, prim) = rayon::join(
        || run(graph, Algorithm::Kruskal, options),
        || run(graph, Algorithm::Prim, options),
    );
    Ok(Comparison {
        reports: vec![kruskal?, prim?],
    })
}
