use std::fmt::Display;

use crate::color::Color;
use crate::config::GeneratorConfig;
use crate::image::Canvas;

pub mod circle;
pub mod tiles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Stripes,
    Checker,
    SolidCircle,
    HollowCircle,
}

impl Pattern {
    /// In the order they are generated.
    pub const ALL: [Pattern; 4] = [
        Self::Stripes,
        Self::Checker,
        Self::SolidCircle,
        Self::HollowCircle,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Stripes => "stripes.ppm",
            Self::Checker => "checker.ppm",
            Self::SolidCircle => "solid_circle.ppm",
            Self::HollowCircle => "hollow_circle.ppm",
        }
    }

    /// The color the canvas is reset to before painting.
    pub fn background(&self, config: &GeneratorConfig) -> Color {
        match self {
            Self::HollowCircle => config.outline_background,
            _ => config.background,
        }
    }

    pub fn paint(&self, canvas: &mut Canvas, config: &GeneratorConfig) -> crate::Result<()> {
        match self {
            Self::Stripes => tiles::paint_stripes(
                canvas,
                config.tile_size,
                config.background,
                config.foreground,
            ),
            Self::Checker => tiles::paint_checker(
                canvas,
                config.tile_size,
                config.background,
                config.foreground,
            ),
            Self::SolidCircle => circle::paint_solid_circle(
                canvas,
                config.radius,
                config.background,
                config.foreground,
            ),
            Self::HollowCircle => {
                circle::paint_hollow_circle(canvas, config.radius, config.foreground)
            }
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stripes => write!(f, "Stripes"),
            Self::Checker => write!(f, "Checker"),
            Self::SolidCircle => write!(f, "Solid Circle"),
            Self::HollowCircle => write!(f, "Hollow Circle"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::color::Color;
    use crate::config::GeneratorConfig;
    use crate::image::Canvas;

    use super::Pattern;

    #[test]
    fn hollow_circle_resets_to_outline_background() {
        let config = GeneratorConfig::default();
        assert_eq!(Pattern::HollowCircle.background(&config), Color::GREEN);
        assert_eq!(Pattern::Checker.background(&config), Color::BLACK);
    }

    #[test]
    fn every_pattern_paints_default_canvas() {
        let config = GeneratorConfig::default();
        for pattern in Pattern::ALL {
            let mut canvas = Canvas::filled(
                config.width,
                config.height,
                pattern.background(&config),
            )
            .unwrap();
            pattern.paint(&mut canvas, &config).unwrap();
            assert!(
                canvas.dots().iter().any(|dot| *dot == config.foreground),
                "{} left no foreground",
                pattern
            );
        }
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<&str> = Pattern::ALL.iter().map(Pattern::file_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
