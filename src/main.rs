use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cropkit",
    version,
    about = "Replay recorded crop drags and print the resulting crop as JSON"
)]
struct Cli {
    /// Drag script (JSON) to replay
    script: PathBuf,
    /// Editor config file; defaults to the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let outcome = cropkit::run(&cli.script, cli.config.as_deref())
        .with_context(|| format!("failed to replay {}", cli.script.display()))?;
    let json = serde_json::to_string_pretty(&outcome).context("failed to encode crop outcome")?;
    println!("{json}");
    Ok(())
}
