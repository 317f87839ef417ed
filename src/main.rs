use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use multigraph_enumeration::classifier::progress_bar;
use multigraph_enumeration::export::save_representatives;
use multigraph_enumeration::{
    classify_graphs, labeled_count, Classifier, ClassifierOptions, SignatureFilter,
};

/// Enumerate undirected multigraphs (loops and parallel edges allowed) up to isomorphism.
#[derive(Parser, Debug)]
#[command(name = "noniso", version, about, long_about = None)]
struct Cli {
    /// Number of vertices (at least 1)
    vertices: usize,

    /// Total number of edges, counted with multiplicity
    edges: usize,

    /// Print every representative's reduced vector and matrix
    #[arg(short, long)]
    verbose: bool,

    /// Invariant compared before the orbit membership test
    #[arg(long, value_enum, default_value_t = FilterArg::Multiplicity)]
    filter: FilterArg,

    /// Show a progress bar over all labeled graphs
    #[arg(long)]
    progress: bool,

    /// Write the representatives as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    Multiplicity,
    Degree,
}

impl From<FilterArg> for SignatureFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Multiplicity => SignatureFilter::Multiplicity,
            FilterArg::Degree => SignatureFilter::Degree,
        }
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let total = labeled_count(cli.vertices, cli.edges)?;
    info!(vertices = cli.vertices, edges = cli.edges, labeled = ?total, "starting enumeration");

    let mut classifier = Classifier::new(ClassifierOptions {
        filter: cli.filter.into(),
        verbose: false,
    });
    if cli.progress {
        classifier = classifier.with_progress(progress_bar(total));
    }

    let before = Instant::now();
    let classification = classify_graphs(cli.vertices, cli.edges, &classifier)?;
    let elapsed = before.elapsed();

    if cli.verbose {
        for rep in &classification.representatives {
            let graph = rep.graph();
            println!("{:?}\n{}\n", graph.reduced(), graph);
        }
    }
    println!(
        "{} non-isomorphic graphs found.",
        classification.representatives.len()
    );
    println!("Elapsed: {} seconds.", elapsed.as_secs_f64());
    info!(elapsed_ms = elapsed.as_millis() as u64, "enumeration timed");

    if let Some(path) = &cli.output {
        save_representatives(path, &classification.representatives)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
