use std::path::PathBuf;
use std::sync::LazyLock;

use raster2svg_argparse::{
    DeclarationError, EnumScalar, NameMap, OptSpec, OptionSet, Registry, Scalar, Switch,
};

/// Outline drawn around every pixel square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum StrokeColor {
    #[default]
    Black,
    White,
    Transparent,
}

impl StrokeColor {
    pub fn names() -> &'static NameMap<Self> {
        static NAMES: LazyLock<NameMap<StrokeColor>> = LazyLock::new(|| {
            NameMap::new(&[
                (StrokeColor::Black, "black"),
                (StrokeColor::White, "white"),
                (StrokeColor::Transparent, "none"),
            ])
            .expect("stroke color names are unique")
        });
        &NAMES
    }
}

pub struct Options {
    pub input_file: Scalar<PathBuf>,
    pub output_file: Scalar<PathBuf>,
    pub scale: Scalar<f64>,
    pub stroke_width: Scalar<f64>,
    pub stroke_color: EnumScalar<StrokeColor>,
    pub help: Switch,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_file: Scalar::new(OptSpec::both(
                "-i",
                "--inputFile",
                "Name of input file, a raster image (the \"-i\" is optional).",
            )),
            output_file: Scalar::new(OptSpec::both(
                "-o",
                "--outputFile",
                "Name of output file, an SVG file (default is input file changed to .svg).",
            )),
            scale: Scalar::new(OptSpec::both("-s", "--scale", "Scale factor. Default is 10."))
                .with_default(10.0),
            stroke_width: Scalar::new(OptSpec::both(
                "-w",
                "--strokeWidth",
                "Width of strokes to use for all paths. Default is 0.01.",
            ))
            .with_default(0.01),
            stroke_color: EnumScalar::new(
                OptSpec::both("-k", "--strokeColor", "Stroke color around each pixel."),
                StrokeColor::names(),
            ),
            help: Switch::new(OptSpec::both("-h", "--help", "Show this help text.")),
        }
    }
}

impl OptionSet for Options {
    fn register<'a>(&'a mut self, is: &mut Registry<'a>) -> Result<(), DeclarationError> {
        is.register(&mut self.input_file)?;
        is.register(&mut self.output_file)?;
        is.register(&mut self.scale)?;
        is.register(&mut self.stroke_width)?;
        is.register(&mut self.stroke_color)?;
        is.register(&mut self.help)
    }

    fn validate(&mut self, positional: &[String]) -> Result<(), String> {
        // The input file may be given as the only positional argument.
        match positional {
            [input] if !self.input_file.specified() => {
                self.input_file.set_value(PathBuf::from(input));
                self.input_file.set_specified();
            }
            _ if !self.input_file.specified() => {
                return Err("an input file is required".to_string());
            }
            [] => {}
            [first, ..] => return Err(format!("unexpected argument '{first}'")),
        }

        if !self.output_file.specified() {
            let output = self.input_file.value().with_extension("svg");
            self.output_file.set_value(output);
        }

        let scale = *self.scale.value();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(format!("scale must be a positive number, got {scale}"));
        }
        let stroke_width = *self.stroke_width.value();
        if !stroke_width.is_finite() || stroke_width < 0.0 {
            return Err(format!("stroke width must not be negative, got {stroke_width}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use raster2svg_argparse::{ParseError, Parser};
    use std::path::Path;

    fn parse(args: &[&str]) -> Parser<Options> {
        let argv = std::iter::once("raster2svg").chain(args.iter().copied());
        Parser::from_args(Options::default(), argv)
    }

    #[test]
    fn positional_input_derives_output() {
        let p = parse(&["art/photo.png"]);
        assert!(p.is_valid(), "{:?}", p.error());
        assert!(p.input_file.specified());
        assert_eq!(p.input_file.value(), Path::new("art/photo.png"));
        assert_eq!(p.output_file.value(), Path::new("art/photo.svg"));
        assert_eq!(*p.scale.value(), 10.0);
        assert_eq!(*p.stroke_width.value(), 0.01);
        assert_eq!(p.stroke_color.value(), StrokeColor::Black);
    }

    #[test]
    fn explicit_options() {
        let p = parse(&[
            "-i", "in.bmp", "--outputFile", "out.svg", "-s", "2.5", "-w", "0", "-k", "none",
        ]);
        assert!(p.is_valid(), "{:?}", p.error());
        assert_eq!(p.input_file.value(), Path::new("in.bmp"));
        assert_eq!(p.output_file.value(), Path::new("out.svg"));
        assert_eq!(*p.scale.value(), 2.5);
        assert_eq!(*p.stroke_width.value(), 0.0);
        assert_eq!(p.stroke_color.value(), StrokeColor::Transparent);
    }

    #[test]
    fn input_is_required() {
        let p = parse(&[]);
        assert_eq!(
            p.error(),
            Some(&ParseError::Validation("an input file is required".to_string()))
        );

        let p = parse(&["a.png", "b.png"]);
        assert!(!p.is_valid());
    }

    #[test]
    fn leftover_positional_is_rejected() {
        let p = parse(&["-i", "a.png", "b.png"]);
        assert_eq!(
            p.error(),
            Some(&ParseError::Validation("unexpected argument 'b.png'".to_string()))
        );
    }

    #[test]
    fn scale_and_stroke_limits() {
        assert!(!parse(&["a.png", "-s", "0"]).is_valid());
        assert!(!parse(&["a.png", "-s", "-1"]).is_valid());
        assert!(!parse(&["a.png", "-s", "NaN"]).is_valid());
        assert!(!parse(&["a.png", "-w", "-0.5"]).is_valid());
        assert!(parse(&["a.png", "-w", "0"]).is_valid());
    }

    #[test]
    fn help_switch_is_seen_even_when_invalid() {
        let p = parse(&["--help"]);
        assert!(!p.is_valid());
        assert!(p.help.is_set());
    }

    #[test]
    fn help_lists_stroke_colors() {
        let mut p = parse(&["-h"]);
        let text = p.help().unwrap();
        assert!(text.contains("--strokeColor <value>"));
        assert!(text.contains("Default is black. Choices:"));
        assert!(text.contains("- none"));
    }
}
