//! CLI entry point.
//!
//! Generates a G(n, p) graph, enumerates its maximum cliques exactly, runs the
//! GA on it and reports whether the two agree.

mod logging;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clique_ga::compare::{compare, Comparison};
use clique_ga::ga::{GaConfig, GaResult, GaRunner};
use clique_ga::graph::{gnp_random_graph, AdjacencyMatrix};
use clique_ga::oracle::{BronKerbosch, ExactCliqueOracle, ExactCliques};
use clique_ga::CliqueError;
use tracing::error;

/// Search for a maximum clique with a genetic algorithm and cross-check it.
#[derive(Debug, Parser)]
#[command(name = "clique-ga", version, about)]
struct Cli {
    /// Number of vertices in the random graph.
    #[arg(long, default_value_t = 10)]
    nodes: usize,

    /// Probability of each edge in the random graph.
    #[arg(long, default_value_t = 0.5)]
    edge_probability: f64,

    /// Seed for graph generation.
    #[arg(long, default_value_t = 50)]
    graph_seed: u64,

    /// Population size (even, at least 2).
    #[arg(long, default_value_t = 20)]
    population_size: usize,

    /// Per-bit mutation probability.
    #[arg(long, default_value_t = 0.01)]
    mutation_rate: f64,

    /// Crossover probability per parent pair.
    #[arg(long, default_value_t = 0.9)]
    crossover_rate: f64,

    /// Number of generations.
    #[arg(long, default_value_t = 50)]
    generations: usize,

    /// Contestants per tournament.
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// Seed for the GA.
    #[arg(long, default_value_t = 50)]
    seed: u64,

    /// Evaluate fitness in parallel (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,

    /// Print the graph in Graphviz DOT format before the report.
    #[arg(long)]
    dot: bool,
}

impl Cli {
    fn ga_config(&self) -> GaConfig {
        GaConfig::default()
            .with_population_size(self.population_size)
            .with_mutation_rate(self.mutation_rate)
            .with_crossover_rate(self.crossover_rate)
            .with_generations(self.generations)
            .with_tournament_size(self.tournament_size)
            .with_seed(self.seed)
            .with_parallel(self.parallel)
    }
}

struct Report {
    graph: AdjacencyMatrix,
    exact: ExactCliques,
    result: GaResult,
    comparison: Comparison,
}

fn run(cli: &Cli) -> Result<Report, CliqueError> {
    let config = cli.ga_config();
    config.validate()?;
    let graph = gnp_random_graph(cli.nodes, cli.edge_probability, cli.graph_seed)?;
    let exact = BronKerbosch.maximum_cliques(&graph);
    let result = GaRunner::run(&graph, &config)?;
    let comparison = compare(&result.best, &exact);
    Ok(Report {
        graph,
        exact,
        result,
        comparison,
    })
}

fn render<W: Write>(cli: &Cli, report: &Report, out: &mut W) -> io::Result<()> {
    if cli.dot {
        write!(out, "{}", report.graph.to_dot())?;
    }
    writeln!(
        out,
        "Exact maximum cliques (size {}): {:?}",
        report.exact.max_size(),
        report.exact.cliques()
    )?;
    for (i, clique) in report.exact.cliques().iter().enumerate() {
        writeln!(out, "Maximum clique {}: {clique:?}", i + 1)?;
    }
    writeln!(out, "Best individual found by the GA: {}", report.result.best)?;
    writeln!(out, "Clique size: {}", report.result.best.selected_count())?;
    writeln!(out, "Fitness: {}", report.result.best_fitness)?;
    writeln!(out, "Clique vertices: {:?}", report.comparison.found)?;
    writeln!(out, "Verdict: {}", report.comparison.verdict)?;
    Ok(())
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run(&cli).context("failed to run clique search")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render(&cli, &report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliqueError>()
            .map(CliqueError::code)
            .unwrap_or("UNKNOWN");
        error!(error = %format!("{err:#}"), code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_match_library_defaults() {
        let cli = Cli::parse_from(["clique-ga"]);
        assert_eq!(cli.ga_config(), GaConfig::default());
        assert_eq!(cli.nodes, 10);
        assert_eq!(cli.graph_seed, 50);
    }

    #[test]
    fn test_odd_population_rejected() {
        let cli = Cli::parse_from(["clique-ga", "--population-size", "5"]);
        let err = run(&cli).err().unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_report_renders() {
        let cli = Cli::parse_from(["clique-ga", "--nodes", "6", "--dot"]);
        let report = run(&cli).unwrap();
        let mut buf = Vec::new();
        render(&cli, &report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("graph G {"));
        assert!(text.contains("Verdict: "));
    }
}
