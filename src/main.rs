use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use cutscope::analysis::{analyze, articulation_points, bridges};
use cutscope::export::{export, ExportData, ExportFormat};
use cutscope::graph::UndirectedGraph;
use cutscope::parser::{discover_graph_files, load_graph, parse_file, ValidationPolicy};

#[derive(Parser)]
#[command(name = "cutscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Bridge and articulation point analysis for undirected graphs", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report bridges and articulation points of one or more graphs
    Analyze {
        /// Graph file, or a directory to search for graph files
        path: PathBuf,

        /// Output format (json, csv, markdown)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// List the bridges of a graph as u-v pairs
    Bridges {
        /// Graph file
        path: PathBuf,

        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// List the articulation points of a graph
    ArticulationPoints {
        /// Graph file
        path: PathBuf,

        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Show version information
    Version,
}

/// Input validation switches.
#[derive(Args)]
struct PolicyArgs {
    /// Accept graphs without edges
    #[arg(long)]
    allow_empty_edges: bool,

    /// Reject edges from a vertex to itself
    #[arg(long)]
    reject_self_loops: bool,

    /// Reject repeated vertex pairs
    #[arg(long)]
    reject_parallel_edges: bool,
}

impl PolicyArgs {
    fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            allow_empty_edges: self.allow_empty_edges,
            allow_self_loops: !self.reject_self_loops,
            allow_parallel_edges: !self.reject_parallel_edges,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // cutscope info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("cutscope", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    match &cli.command {
        Some(Commands::Analyze {
            path,
            format,
            output,
            policy,
        }) => run_analyze(path, *format, output.as_deref(), &policy.policy()),
        Some(Commands::Bridges { path, policy }) => {
            let graph = read_graph(path, &policy.policy())?;
            let mut out = io::stdout().lock();
            for edge in bridges(&graph)? {
                writeln!(out, "{}", edge)?;
            }
            Ok(())
        }
        Some(Commands::ArticulationPoints { path, policy }) => {
            let graph = read_graph(path, &policy.policy())?;
            let mut out = io::stdout().lock();
            for vertex in articulation_points(&graph)? {
                writeln!(out, "{}", vertex)?;
            }
            Ok(())
        }
        Some(Commands::Version) => {
            println!("cutscope v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("CutScope - Bridge and Articulation Point Analyzer");
            println!("Run 'cutscope analyze <PATH>' to analyze a graph file or directory");
            println!("Run 'cutscope --help' for more information");
            Ok(())
        }
    }
}

fn read_graph(path: &Path, policy: &ValidationPolicy) -> anyhow::Result<UndirectedGraph> {
    let request =
        parse_file(path).with_context(|| format!("cannot read graph from {}", path.display()))?;
    load_graph(request, policy).with_context(|| format!("rejected graph {}", path.display()))
}

/// Names a graph by its path below the searched directory, or by its file
/// name when a single file was given.
fn graph_name(root: &Path, file: &Path) -> String {
    match file.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string()),
    }
}

fn run_analyze(
    path: &Path,
    format: ExportFormat,
    output: Option<&Path>,
    policy: &ValidationPolicy,
) -> anyhow::Result<()> {
    let files = if path.is_dir() {
        discover_graph_files(path)
    } else {
        vec![path.to_path_buf()]
    };
    if files.is_empty() {
        bail!("no graph files found under {}", path.display());
    }

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        log::info!("Analyzing {}", file.display());
        let graph = read_graph(file, policy)?;
        let report = analyze(&graph)
            .with_context(|| format!("analysis of {} failed", file.display()))?;

        reports.push(ExportData::new(graph_name(path, file), &graph, report));
    }

    let mut writer: Box<dyn Write> = match output {
        Some(file) => Box::new(BufWriter::new(
            File::create(file).with_context(|| format!("cannot create {}", file.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    export(format, &reports, &mut writer)?;
    writer.flush()?;
    log::info!("Analyzed {} graph file(s)", files.len());
    Ok(())
}
