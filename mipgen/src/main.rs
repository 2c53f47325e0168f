use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use mip_pyramid::{PixelComponent, PyramidBuffer, PyramidLayout};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Width of the square base image, in pixels
    #[clap(short, long, value_parser, default_value_t = 512)]
    size: u32,

    /// Storage type of pixel channels
    #[clap(short, long, value_enum, default_value_t = Precision::F32)]
    precision: Precision,

    /// Count of repetitions of the build
    #[clap(short, long, value_parser, default_value_t = 1)]
    iterations: u32,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Precision {
    F32,
    F64,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if cli.size == 0 {
        bail!("Size of the base image must be greater than zero");
    }
    if !cli.size.is_power_of_two() {
        debug!(
            "Size {} is not a power of two, widths of levels are truncated by integer halving",
            cli.size
        );
    }

    match cli.precision {
        Precision::F32 => build_pyramids::<f32>(&cli),
        Precision::F64 => build_pyramids::<f64>(&cli),
    }
    Ok(())
}

fn build_pyramids<T: PixelComponent>(cli: &Cli) {
    let layout = PyramidLayout::new(cli.size);
    debug!(
        "Build {} mip levels over {} channel values",
        layout.level_count(),
        layout.total_components()
    );
    let mut pyramid = PyramidBuffer::<T>::new(layout);

    for _ in 0..cli.iterations {
        let start = Instant::now();
        pyramid.init_base_level();
        println!("init base level: {:.6} ms", elapsed_ms(start));

        let start = Instant::now();
        pyramid.generate_pyramid();
        println!("generate pyramid: {:.6} ms", elapsed_ms(start));
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
