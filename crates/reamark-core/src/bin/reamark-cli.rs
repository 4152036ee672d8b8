use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use reamark_core::{
    EventToMarkerString,
    diagnostics::init_tracing,
    fixtures::demo_event,
    persistence::{load_event, save_event, save_marker_fragment},
};

#[derive(Debug, Parser)]
#[command(name = "reamark-cli")]
#[command(about = "Headless tools for converting event trees into Reaper marker fragments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write the demo event tree and its marker fragment.
    DemoExport {
        #[arg(long, default_value = "data/exports")]
        output_dir: PathBuf,
    },
    /// Convert an event tree JSON file into a marker fragment.
    Convert {
        #[arg(long)]
        input: PathBuf,

        #[arg(long, default_value = "markers.txt")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _telemetry = init_tracing(&cli.log_dir)?;

    match cli.command {
        Commands::DemoExport { output_dir } => {
            let event = demo_event();
            save_event(&output_dir.join("demo.reamark.json"), &event)?;

            let fragment = EventToMarkerString::new().convert(&event);
            save_marker_fragment(&output_dir.join("demo-markers.txt"), &fragment)?;
            tracing::info!(output_dir = %output_dir.display(), "demo export completed");
        }
        Commands::Convert { input, output } => {
            let event = load_event(&input)?;
            event
                .validate()
                .with_context(|| format!("rejected event tree: {}", input.display()))?;

            let fragment = EventToMarkerString::new().convert(&event);
            if fragment.is_empty() {
                tracing::warn!("no leaf carried both a name and a color; fragment is empty");
            }
            save_marker_fragment(&output, &fragment)?;
            tracing::info!(path = %output.display(), "marker fragment written");
        }
    }

    Ok(())
}
