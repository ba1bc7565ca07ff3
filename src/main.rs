use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use render_patch::{PatchPlan, Patcher, SUCCESS_MESSAGE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to patch (defaults to RenderWindow.cpp, or the plan's target)
    file: Option<PathBuf>,

    /// TOML file overriding the target, line index, needle and replacement
    #[arg(short, long)]
    plan: Option<PathBuf>,

    /// Print a unified diff of the change instead of writing it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    render_patch::init_with_logger(cli.verbose);

    let stdout = io::stdout();
    execute(cli, &mut stdout.lock())
}

/// Apply (or preview) the patch described by `cli`, writing user output to `out`
fn execute(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mut plan = match &cli.plan {
        Some(path) => PatchPlan::load(path)
            .with_context(|| format!("Failed to load patch plan {}", path.display()))?,
        None => PatchPlan::default(),
    };
    if let Some(file) = cli.file {
        plan = plan.with_target(file);
    }

    let patcher = Patcher::new(plan);

    if cli.dry_run {
        let preview = patcher
            .preview()
            .with_context(|| format!("Failed to preview {}", patcher.plan().target.display()))?;
        if preview.is_noop() {
            info!("Nothing to change in {}", preview.target.display());
        } else {
            info!(
                "Dry run: line removed: {}, replacements: {}",
                preview.line_removed, preview.occurrences
            );
        }
        write!(out, "{}", preview.diff())?;
        return Ok(());
    }

    let target = patcher.plan().target.clone();
    patcher
        .run()
        .with_context(|| format!("Failed to patch {}", target.display()))?;

    writeln!(out, "{}", SUCCESS_MESSAGE)?;
    Ok(())
}
