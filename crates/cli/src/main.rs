use std::process::ExitCode;

use anyhow::{Context, Result};
use raster2svg::options::Options;
use raster2svg::raster::RasterImage;
use raster2svg::render::{RenderSettings, raster_pixels_to_svg};
use raster2svg_argparse::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let mut parser = Parser::new(Options::default());
    let parsed = parser.parse(args);

    if parser.help.is_set() {
        print!("{}", parser.help()?);
        return Ok(ExitCode::SUCCESS);
    }
    if let Err(err) = parsed {
        eprintln!("error: {err}");
        print!("{}", parser.help()?);
        return Ok(ExitCode::FAILURE);
    }

    convert(&parser.into_options())?;
    Ok(ExitCode::SUCCESS)
}

fn convert(options: &Options) -> Result<()> {
    let input = options.input_file.value();
    let output = options.output_file.value();
    eprintln!("Converting {} to {}", input.display(), output.display());

    let image = RasterImage::load(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    eprintln!(
        "Image is {}x{} with {} channel(s)",
        image.width(),
        image.height(),
        image.channel_count()
    );
    debug!(
        has_color = image.has_color(),
        has_alpha = image.has_alpha(),
        "decoded input"
    );

    let doc = raster_pixels_to_svg(&image, &RenderSettings::from(options));
    doc.save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    eprintln!("Wrote: {} ({} polygons)", output.display(), doc.len());

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
