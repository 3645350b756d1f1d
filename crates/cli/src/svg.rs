use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Rgb(u8, u8, u8),
    Transparent,
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Self::Transparent => f.write_str("none"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    /// Any SVG paint keyword, e.g. `black` or `none`.
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<(f64, f64)>,
    fill: Fill,
    stroke: Stroke,
}

impl Polygon {
    pub fn new(points: Vec<(f64, f64)>, fill: Fill, stroke: Stroke) -> Self {
        Self {
            points,
            fill,
            stroke,
        }
    }

    /// The unit square covering pixel (`col`, `row`), corners clockwise
    /// from the top left.
    pub fn pixel(col: u32, row: u32, fill: Fill, stroke: Stroke) -> Self {
        let (x, y) = (f64::from(col), f64::from(row));
        Self::new(
            vec![(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0)],
            fill,
            stroke,
        )
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<polygon points=\"")?;
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x},{y}")?;
        }
        write!(
            f,
            "\" style=\"fill:{};stroke:{};stroke-width:{}\"/>",
            self.fill, self.stroke.color, self.stroke.width
        )
    }
}

/// An SVG document whose user units are source pixels, drawn `scale`
/// times larger.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    width: u32,
    height: u32,
    scale: f64,
    shapes: Vec<Polygon>,
}

impl Document {
    pub fn new(width: u32, height: u32, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            shapes: Vec::new(),
        }
    }

    pub fn with_capacity(width: u32, height: u32, scale: f64) -> Self {
        let mut doc = Self::new(width, height, scale);
        doc.shapes.reserve(width as usize * height as usize);
        doc
    }

    pub fn push(&mut self, shape: Polygon) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Polygon] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(
            out,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
        )?;
        let scaled_width = self.scale * f64::from(self.width);
        let scaled_height = self.scale * f64::from(self.height);
        write!(
            out,
            r#"<svg width="{scaled_width}" height="{scaled_height}" viewBox="0 0 {} {}""#,
            self.width, self.height
        )?;
        writeln!(out, r#" xmlns="{SVG_NAMESPACE}" version="1.1">"#)?;
        for shape in &self.shapes {
            writeln!(out, "{shape}")?;
        }
        writeln!(out, "</svg>")
    }

    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()
    }
}
