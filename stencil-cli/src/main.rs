use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use stencil_core::SiteBuilder;

/// Templated static website generator
#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Templated static website generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Source directory containing config.json and templates/
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Output directory, shared by every page
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Print more output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = SimpleLogger::new().with_level(level).init();

    if let Err(e) = run(&cli) {
        eprintln!("stencil error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input_dir.is_dir() {
        bail!("'{}' is not a directory", cli.input_dir.display());
    }

    let mut builder = SiteBuilder::new().input_dir(&cli.input_dir);
    if let Some(output) = &cli.output {
        builder = builder.output_override(output);
    }

    let site = builder.build()?;
    site.generate()?;

    log::info!(
        "Built {} pages from {}",
        site.pages().len(),
        cli.input_dir.display()
    );

    Ok(())
}
