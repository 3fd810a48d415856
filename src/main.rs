use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use raycaster::{render, Scene};
use tracing::{error, info, Level};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Render a JSON scene of spheres to a PNG file.
#[derive(Debug, Parser)]
#[command(name = "raycaster")]
struct Args {
    /// Scene file
    #[arg(short, long)]
    input: PathBuf,

    /// PNG file to write
    #[arg(short, long)]
    output: PathBuf,

    /// Number of image bands rendered in parallel, values below 1 mean 1
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    jobs: i64,

    /// Number of times the scene is rendered, only the last image is kept
    #[arg(short, long, default_value_t = 1)]
    loops: usize,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Args {
    fn jobs(&self) -> usize {
        usize::try_from(self.jobs.max(1)).unwrap_or(usize::MAX)
    }
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(Level::from(args.log_level))
        .init();

    if let Err(err) = run(&args) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let scene = Scene::load(&args.input)
        .with_context(|| format!("can not load scene {}", args.input.display()))?;
    info!(
        "loaded {} objects from {}",
        scene.objects.len(),
        args.input.display()
    );

    let jobs = args.jobs();
    for _ in 1..args.loops {
        render(&scene, jobs).context("can not render scene")?;
    }
    let frame = render(&scene, jobs).context("can not render scene")?;

    frame
        .save_png(&args.output)
        .with_context(|| format!("can not write {}", args.output.display()))?;
    info!("wrote {}", args.output.display());
    Ok(())
}
