use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::options::{Options, StrokeColor};
use crate::raster::RasterImage;
use crate::svg::{Document, Fill, Polygon, Stroke};

/// Conversions predicted to take longer than this get an up-front estimate.
const SLOW_ESTIMATE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub scale: f64,
    pub stroke_width: f64,
    pub stroke_color: StrokeColor,
}

impl From<&Options> for RenderSettings {
    fn from(options: &Options) -> Self {
        Self {
            scale: *options.scale.value(),
            stroke_width: *options.stroke_width.value(),
            stroke_color: options.stroke_color.value(),
        }
    }
}

/// One square polygon per pixel, filled with the pixel's color. Pixels
/// that are not fully opaque get no fill.
pub fn raster_pixels_to_svg(image: &RasterImage, settings: &RenderSettings) -> Document {
    let stroke = Stroke {
        width: settings.stroke_width,
        color: StrokeColor::names().name(settings.stroke_color),
    };
    let mut doc = Document::with_capacity(image.width(), image.height(), settings.scale);

    let start = Instant::now();
    let mut estimate = None;
    for row in 0..image.height() {
        for col in 0..image.width() {
            let pixel = image.rgba(row, col).unwrap_or_default();
            let fill = if pixel.is_opaque() {
                Fill::Rgb(pixel.red, pixel.green, pixel.blue)
            } else {
                Fill::Transparent
            };
            doc.push(Polygon::pixel(col, row, fill, stroke));
        }

        if row == 0 {
            let predicted = start.elapsed() * image.height();
            if predicted > SLOW_ESTIMATE {
                info!(
                    "estimated path construction time: {:.1} s",
                    predicted.as_secs_f64()
                );
                estimate = Some(predicted);
            }
        }
    }

    let elapsed = start.elapsed();
    match estimate {
        Some(predicted) => {
            let deviation =
                (elapsed.as_secs_f64() - predicted.as_secs_f64()) / elapsed.as_secs_f64();
            info!(
                "path construction took {:.1} s, {:+.0}% against the estimate",
                elapsed.as_secs_f64(),
                deviation * 100.0
            );
        }
        None => debug!("path construction took {} ms", elapsed.as_millis()),
    }

    doc
}
