//! Command line arguments

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use drawing::{ColorMode, MechanismParams, PRESETS, StrokeStyle, find_preset, palette_color};

/// Draw one spirograph stroke and save the canvas
#[derive(Parser, Debug)]
#[command(name = "spiro-app")]
#[command(version)]
pub struct Cli {
    /// Named mechanism preset (overridden by --outer/--inner/--offset)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Outer ring radius
    #[arg(long)]
    pub outer: Option<f64>,

    /// Inner wheel radius
    #[arg(long)]
    pub inner: Option<f64>,

    /// Pen distance from the wheel center
    #[arg(long)]
    pub offset: Option<f64>,

    /// Segments drawn per tick
    #[arg(short, long, default_value_t = 5)]
    pub speed: u32,

    /// Stroke width in pixels
    #[arg(short = 'w', long, default_value_t = 1.0)]
    pub line_width: f32,

    /// Palette color name, or "rainbow"
    #[arg(short, long, default_value = "White")]
    pub color: String,

    /// Engine configuration (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "spirograph.png")]
    pub output: PathBuf,
}

impl Cli {
    /// Mechanism from the preset, with explicit radii taking precedence
    pub fn mechanism(&self) -> Result<MechanismParams> {
        let base = match &self.preset {
            Some(name) => match find_preset(name) {
                Some(preset) => preset.mechanism,
                None => {
                    let known: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
                    bail!("unknown preset '{}', expected one of: {}", name, known.join(", "));
                }
            },
            None => MechanismParams::default(),
        };

        Ok(MechanismParams::new(
            self.outer.unwrap_or(base.outer_radius),
            self.inner.unwrap_or(base.inner_radius),
            self.offset.unwrap_or(base.pen_offset),
        ))
    }

    pub fn style(&self) -> Result<StrokeStyle> {
        let color_mode = if self.color.eq_ignore_ascii_case("rainbow") {
            ColorMode::Rainbow
        } else {
            match palette_color(&self.color) {
                Some(color) => ColorMode::Solid(color),
                None => bail!("unknown color '{}'", self.color),
            }
        };
        Ok(StrokeStyle::new(self.speed, self.line_width, color_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("spiro-app").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.mechanism().unwrap(), MechanismParams::default());
        assert_eq!(cli.style().unwrap().speed, 5);
    }

    #[test]
    fn test_radii_override_preset() {
        let cli = parse(&["--preset", "star", "--inner", "90"]);
        assert_eq!(cli.mechanism().unwrap(), MechanismParams::new(200.0, 90.0, 150.0));
    }

    #[test]
    fn test_unknown_names() {
        assert!(parse(&["--preset", "blob"]).mechanism().is_err());
        assert!(parse(&["--color", "mauve"]).style().is_err());
    }

    #[test]
    fn test_rainbow() {
        let style = parse(&["--color", "Rainbow"]).style().unwrap();
        assert_eq!(style.color_mode, ColorMode::Rainbow);
    }
}
