//! mindmap / edges subcommands

use crate::console;
use clap::Subcommand;
use ribs::{RibsAnalyzer, RibsConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const STRUCTURE_FAILURE: &str = "Cannot create structure. Check the target path.";

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a PlantUML mindmap of the RIBs tree
    Mindmap {
        /// Swift files, directories, or SourceKitten structure dumps (.json)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Root RIB name
        #[arg(short, long)]
        root: String,
        /// Max tree depth (root is 1; 0 = unlimited)
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,
        /// Directory names to skip (comma separated)
        #[arg(long, value_delimiter = ',')]
        skip_dirs: Option<Vec<String>>,
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List inheritance edges
    Edges {
        /// Swift files, directories, or SourceKitten structure dumps (.json)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Directory names to skip (comma separated)
        #[arg(long, value_delimiter = ',')]
        skip_dirs: Option<Vec<String>>,
        /// JSON output
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Mindmap { paths, root, max_depth, skip_dirs, output } => {
            let mut config = RibsConfig::from_env();
            if let Some(depth) = max_depth {
                config.max_depth = (depth > 0).then_some(depth);
            }
            if let Some(dirs) = skip_dirs {
                config.skip_dirs = dirs;
            }
            cmd_mindmap(&paths, &root, config, output.as_deref())
        }
        Commands::Edges { paths, skip_dirs, json } => {
            let mut config = RibsConfig::from_env();
            if let Some(dirs) = skip_dirs {
                config.skip_dirs = dirs;
            }
            cmd_edges(&paths, config, json)
        }
    }
}

/// Reports an acquisition failure; no tree is rendered after this.
fn structure_failure(e: ribs::RibsError) -> anyhow::Error {
    println!("{}", STRUCTURE_FAILURE);
    e.into()
}

fn cmd_mindmap(
    paths: &[PathBuf],
    root: &str,
    config: RibsConfig,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut analyzer = RibsAnalyzer::new(config);
    let files = analyzer.collect_sources(paths).map_err(structure_failure)?;

    println!();
    println!("{}", console::bold(&format!("Analyze {} swift files.", files.len())));
    println!();
    println!("{}", console::underline(&format!("Make RIBs tree under {} RIB.", root)));
    println!();

    analyzer.load(&files).map_err(structure_failure)?;
    tracing::info!("{} edges from {} files", analyzer.edges().len(), files.len());

    match output {
        Some(file) => {
            let mut writer = BufWriter::new(File::create(file)?);
            analyzer.write_mindmap(root, &mut writer)?;
            writer.flush()?;
            println!("Saved to: {}", file.display());
        }
        None => {
            let mut handle = io::stdout().lock();
            analyzer.write_mindmap(root, &mut handle)?;
            handle.flush()?;
        }
    }

    println!();
    println!("{}", console::success("Successfully completed."));
    Ok(())
}

fn cmd_edges(paths: &[PathBuf], config: RibsConfig, json: bool) -> anyhow::Result<()> {
    let mut analyzer = RibsAnalyzer::new(config);
    let files = analyzer.collect_sources(paths).map_err(structure_failure)?;
    analyzer.load(&files).map_err(structure_failure)?;
    tracing::info!("Analyzed {} files", files.len());

    if json {
        println!("{}", serde_json::to_string_pretty(analyzer.edges())?);
    } else {
        for edge in analyzer.edges() {
            println!("{}", edge);
        }
    }

    Ok(())
}
