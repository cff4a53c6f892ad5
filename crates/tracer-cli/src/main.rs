mod cli;
mod output;
mod progress;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use cli::Cli;
use utils::{AvailableScene, AvailableShader, Dimensions, ExecutionMode};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Built-in scene selector
    scene: AvailableScene,

    #[arg(long)]
    /// Path to a TOML scene description, takes precedence over --scene
    scene_file: Option<PathBuf>,

    #[arg(short, long, default_value = "1280x720")]
    /// Image dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(short, long, default_value = "output/render.png")]
    /// Where to save the image, the format is guessed from the extension
    output: PathBuf,

    #[arg(short, long, value_enum, default_value_t)]
    shader: AvailableShader,

    #[arg(short, long, value_enum, default_value_t)]
    execution_mode: ExecutionMode,

    #[arg(long)]
    /// Number of worker threads in multithreaded mode, defaults to the number of cores
    threads: Option<usize>,

    #[arg(long)]
    /// Ignore intersections behind the eye
    cull_behind_eye: bool,

    #[arg(long)]
    /// Do not print the progress bar
    no_progress: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args)?.run()
}
