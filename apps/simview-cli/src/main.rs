use clap::{Parser, Subcommand, ValueEnum};
use simview_result::{DemoKind, demo_result, load_result};
use simview_scene::{describe, map_result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simview-cli", about = "CLI tool for simulation result payloads")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Summarize a result payload and the drawable it maps to
    Inspect {
        /// Result payload (JSON)
        file: PathBuf,
    },
    /// Emit a demo payload as JSON on stdout
    Demo {
        /// Result kind to generate
        #[arg(value_enum)]
        kind: CliDemoKind,
        /// Element count; defaults to the kind's mock-backend count
        #[arg(short, long)]
        count: Option<usize>,
        /// RNG seed for reproducible payloads
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDemoKind {
    StressAnalysis,
    FluidDynamics,
    Electromagnetic,
}

impl From<CliDemoKind> for DemoKind {
    fn from(kind: CliDemoKind) -> Self {
        match kind {
            CliDemoKind::StressAnalysis => DemoKind::StressAnalysis,
            CliDemoKind::FluidDynamics => DemoKind::FluidDynamics,
            CliDemoKind::Electromagnetic => DemoKind::Electromagnetic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("simview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("result: {}", simview_result::crate_info());
            println!("scene: {}", simview_scene::crate_info());
        }
        Commands::Inspect { file } => {
            let result = load_result(&file)?;
            println!("{}", result.summary());
            match map_result(&result)? {
                Some(mapped) => {
                    println!("{}", describe(&mapped.drawable));
                    println!(
                        "camera reset: {}",
                        if mapped.reset_camera { "yes" } else { "no" }
                    );
                }
                None => println!("maps to nothing (unrecognized type)"),
            }
        }
        Commands::Demo { kind, count, seed } => {
            let kind = DemoKind::from(kind);
            let count = count.unwrap_or_else(|| kind.default_count());
            let result = demo_result(kind, count, seed);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
