//! trigraph CLI - Command-line interface for the trigraph triple store
//!
//! Keeps a subject-predicate-object graph in a JSON file and answers quick
//! (direct neighbor) and deep (bounded DFS) queries over it.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod store;

use commands::export::ExportFormat;
use commands::*;
use config::TrigraphConfig;
use output::{OutputConfig, OutputFormat};
use trigraph_core::DfsOptions;

/// In-memory triple store with quick and deep search.
#[derive(Parser)]
#[command(name = "trigraph")]
#[command(author, version)]
#[command(about = "In-memory triple store with quick and deep search")]
#[command(propagate_version = true)]
#[command(after_help = "Quick Start:
  trigraph demo                          Build the example graph
  trigraph add Katze ist Tier            Insert a triple
  trigraph neighbors Katze               Direct neighbors
  trigraph search Katze -d 3             All paths up to depth 3
  trigraph export --to dot -o graph.dot  Graphviz output")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Single-line JSON and borderless tables
    #[arg(long, global = true)]
    compact: bool,

    /// Graph file (overrides [graph].file in .trigraphrc.toml)
    #[arg(short, long, global = true, env = "TRIGRAPH_FILE")]
    file: Option<PathBuf>,

    /// Show detailed version information
    #[arg(long = "version-verbose")]
    version_verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the example graph, run every query and write graph.json/graph.dot
    Demo {
        /// Directory for graph.json and graph.dot
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Insert a subject-predicate-object triple
    Add {
        subject: String,
        predicate: String,
        object: String,
    },

    /// Attach a resource URL to a node (last write wins)
    Url {
        /// Node label
        id: String,
        url: String,
    },

    /// Quick search: direct neighbors of a node
    #[command(visible_alias = "n")]
    Neighbors {
        /// Start node
        start: String,

        /// Only edges with this predicate
        #[arg(short, long)]
        predicate: Option<String>,
    },

    /// Deep search: every path up to --depth edges
    #[command(visible_alias = "s")]
    Search {
        /// Start node
        start: String,

        /// Maximum path length (default: [search].max_depth or 3)
        #[arg(short, long)]
        depth: Option<usize>,

        /// Only follow edges with this predicate
        #[arg(short, long)]
        predicate: Option<String>,
    },

    /// Export the graph as JSON, DOT or an ASCII tree
    Export {
        /// Target format
        #[arg(long, value_enum)]
        to: ExportFormat,

        /// Root node (required for ascii)
        #[arg(short, long)]
        start: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show node/edge counts and predicates
    Stats,

    /// Prompt for start nodes and run quick or deep searches
    #[command(visible_alias = "i")]
    Interactive,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Print verbose version information
fn print_verbose_version() {
    use colored::Colorize;

    let cli_version = env!("CARGO_PKG_VERSION");
    let platform = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    println!("trigraph {}", cli_version);
    println!("  {:<15} {}", "trigraph-cli:".cyan(), cli_version);
    println!("  {:<15} {}", "trigraph-core:".cyan(), trigraph_core::version());
    println!("  {:<15} {}", "Platform:".cyan(), platform);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version_verbose {
        print_verbose_version();
        return Ok(());
    }

    setup_logging(cli.verbose, cli.quiet);

    let root = Path::new(".");
    let config = TrigraphConfig::load(root);

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    let output_config =
        OutputConfig::new(format).with_compact(cli.compact || config.compact());

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    let graph_file = config.graph_file(root, cli.file.as_deref());
    tracing::debug!(
        graph_file = %graph_file.display(),
        ?format,
        compact = output_config.compact,
        "resolved settings"
    );

    match command {
        Commands::Demo { out_dir } => demo::run(&out_dir),
        Commands::Add {
            subject,
            predicate,
            object,
        } => edit::run_add(&graph_file, &subject, &predicate, &object, &output_config),
        Commands::Url { id, url } => edit::run_url(&graph_file, &id, &url, &output_config),
        Commands::Neighbors { start, predicate } => {
            neighbors::run(&graph_file, &start, predicate.as_deref(), &output_config)
        }
        Commands::Search {
            start,
            depth,
            predicate,
        } => {
            let mut options = DfsOptions::new(depth.unwrap_or_else(|| config.max_depth()));
            if let Some(predicate) = predicate {
                options = options.with_predicate(predicate);
            }
            search::run(&graph_file, &start, &options, &output_config)
        }
        Commands::Export { to, start, output } => {
            export::run(&graph_file, to, start.as_deref(), output.as_deref())
        }
        Commands::Stats => stats::run(&graph_file, &output_config),
        Commands::Interactive => interactive::run(&graph_file, config.max_depth()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "trigraph", "search", "Katze", "-d", "2", "--format", "json", "-f", "kb.json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.file, Some(PathBuf::from("kb.json")));
        assert!(!cli.compact);
        match cli.command {
            Some(Commands::Search { start, depth, .. }) => {
                assert_eq!(start, "Katze");
                assert_eq!(depth, Some(2));
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_compact_flag_is_global() {
        let cli = Cli::try_parse_from(["trigraph", "stats", "--compact"]).unwrap();
        assert!(cli.compact);
    }

    #[test]
    fn test_export_format_parsing() {
        let cli = Cli::try_parse_from(["trigraph", "export", "--to", "dot"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Export {
                to: ExportFormat::Dot,
                ..
            })
        ));
        assert!(Cli::try_parse_from(["trigraph", "export", "--to", "svg"]).is_err());
    }
}
