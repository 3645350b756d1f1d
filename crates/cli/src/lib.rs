//! Convert a raster image into an SVG with one square polygon per pixel.
//!
//! [`options::Options`] is the command line, [`raster::RasterImage`] the
//! decoded input, [`render::raster_pixels_to_svg`] the conversion and
//! [`svg::Document`] the output.

pub mod options;
pub mod raster;
pub mod render;
pub mod svg;
