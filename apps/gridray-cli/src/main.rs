use anyhow::Context;
use clap::{Parser, Subcommand};
use gridray_common::Pose;
use gridray_input::IntentSnapshot;
use gridray_kernel::{GridMap, MotionTuning, Session};
use gridray_render::{DrawSurface, FrameRenderer, RenderConfig, TextSurface};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridray-cli", about = "Headless driver for the gridray pipeline")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON tuning file overriding the default configuration
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print workspace crate info
    Info,
    /// Render one frame of the demo level as text
    Trace {
        /// Player x position in cells
        #[arg(long, default_value = "2.5")]
        x: f32,
        /// Player y position in cells
        #[arg(long, default_value = "2.5")]
        y: f32,
        /// Heading in degrees
        #[arg(long, default_value = "0")]
        heading: f32,
    },
    /// Walk the demo level with scripted intents
    Walk {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "120")]
        ticks: u32,
        /// Heading in degrees at spawn
        #[arg(long, default_value = "20")]
        heading: f32,
    },
}

/// Optional JSON tuning file: any subset of fields, defaults fill the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    motion: MotionTuning,
    render: RenderConfig,
}

fn load_config(path: Option<&str>) -> anyhow::Result<FileConfig> {
    match path {
        Some(p) => {
            let text =
                std::fs::read_to_string(p).with_context(|| format!("reading config file {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config file {p}"))
        }
        None => Ok(FileConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("gridray-cli v{}", env!("CARGO_PKG_VERSION"));
            let demo = GridMap::demo();
            println!("kernel: demo level {}x{}", demo.width(), demo.height());
            println!("render: {}", gridray_render::crate_info());
            println!("input: {}", gridray_input::crate_info());
            println!("timing: {}", gridray_timing::crate_info());
        }
        Commands::Trace { x, y, heading } => {
            let pose = Pose::facing(x, y, heading.to_radians());
            let grid = GridMap::demo();
            let session = Session::with_tuning(grid, pose, config.motion)?;
            let renderer = FrameRenderer::new(config.render)?;

            println!(
                "Trace: pos=({:.2}, {:.2}) heading={:.1}deg fov={}",
                x, y, heading, renderer.config().fov_degrees
            );
            let pose = session.pose();
            let mut surface = TextSurface::new();
            print!("{}", surface.draw(renderer.render_frame(&pose, session.grid())));
        }
        Commands::Walk { ticks, heading } => {
            let spawn = Pose::facing(2.0, 2.0, heading.to_radians());
            let mut session = Session::with_tuning(GridMap::demo(), spawn, config.motion)?;

            println!("Walk: {ticks} ticks, heading {heading}deg, sprint after halfway");
            let forward = IntentSnapshot {
                move_forward: true,
                ..Default::default()
            };
            let sprinting = IntentSnapshot {
                sprint: true,
                ..forward
            };

            for tick in 0..ticks {
                let intent = if tick < ticks / 2 { forward } else { sprinting };
                session.advance(&intent, 1.0);
                if tick % 15 == 0 || tick + 1 == ticks {
                    let p = session.pose().position;
                    println!("tick {:>4}: pos=({:.3}, {:.3})", tick + 1, p.x, p.y);
                }
            }
            let end = session.pose().position;
            println!(
                "Final: pos=({:.3}, {:.3}), walls clamp motion on the blocked axis only",
                end.x, end.y
            );
        }
    }

    Ok(())
}
