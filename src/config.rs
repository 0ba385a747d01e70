use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::error::Error;
use crate::pattern::Pattern;
use crate::Arguments;

const DEFAULT_WIDTH: usize = 16;
const DEFAULT_HEIGHT: usize = 16;
const DEFAULT_TILE_SIZE: usize = 8;
const DEFAULT_RADIUS: usize = DEFAULT_WIDTH / 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub stripes: PathBuf,
    pub checker: PathBuf,
    pub solid_circle: PathBuf,
    pub hollow_circle: PathBuf,
}

impl OutputPaths {
    pub fn in_directory(directory: &Path) -> Self {
        Self {
            stripes: directory.join(Pattern::Stripes.file_name()),
            checker: directory.join(Pattern::Checker.file_name()),
            solid_circle: directory.join(Pattern::SolidCircle.file_name()),
            hollow_circle: directory.join(Pattern::HollowCircle.file_name()),
        }
    }

    pub fn for_pattern(&self, pattern: Pattern) -> &Path {
        match pattern {
            Pattern::Stripes => &self.stripes,
            Pattern::Checker => &self.checker,
            Pattern::SolidCircle => &self.solid_circle,
            Pattern::HollowCircle => &self.hollow_circle,
        }
    }
}

/// Relative to the working directory.
impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            stripes: PathBuf::from(Pattern::Stripes.file_name()),
            checker: PathBuf::from(Pattern::Checker.file_name()),
            solid_circle: PathBuf::from(Pattern::SolidCircle.file_name()),
            hollow_circle: PathBuf::from(Pattern::HollowCircle.file_name()),
        }
    }
}

/// Everything a generation run needs. All four patterns share one canvas size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// stripes and checker
    pub tile_size: usize,
    /// solid and hollow circle
    pub radius: usize,
    pub background: Color,
    pub foreground: Color,
    /// canvas color behind the hollow circle
    pub outline_background: Color,
    pub output_paths: OutputPaths,
}

impl GeneratorConfig {
    pub fn with_output_directory(mut self, directory: &Path) -> Self {
        self.output_paths = OutputPaths::in_directory(directory);
        self
    }

    /// Checks every painter precondition before anything is written.
    pub fn validate(&self) -> crate::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidCanvasSize(self.width, self.height));
        }
        if self.tile_size == 0 {
            return Err(Error::InvalidTileSize);
        }
        if self.radius == 0 {
            return Err(Error::InvalidRadius);
        }
        if self.width != self.height {
            return Err(Error::NonSquareCanvas(self.width, self.height));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            radius: DEFAULT_RADIUS,
            background: Color::BLACK,
            foreground: Color::MAGENTA,
            outline_background: Color::GREEN,
            output_paths: OutputPaths::default(),
        }
    }
}

impl From<&Arguments> for GeneratorConfig {
    fn from(value: &Arguments) -> Self {
        Self::default().with_output_directory(&value.output_directory)
    }
}
