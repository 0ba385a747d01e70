use std::io;
use std::slice::ChunksExact;

use crate::color::Color;
use crate::error::Error;

pub mod reader;
pub mod writer;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Canvas>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> io::Result<()>;
}

/// A fixed size grid of colors, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    dots: Vec<Color>,
}

impl Canvas {
    /// Allocates a black canvas.
    pub fn new(width: usize, height: usize) -> crate::Result<Self> {
        Self::filled(width, height, Color::default())
    }

    pub fn filled(width: usize, height: usize, color: Color) -> crate::Result<Self> {
        let length = Self::check_size(width, height)?;
        Ok(Canvas {
            width,
            height,
            dots: vec![color; length],
        })
    }

    pub fn from_dots(width: usize, height: usize, dots: Vec<Color>) -> crate::Result<Self> {
        let length = Self::check_size(width, height)?;
        if dots.len() != length {
            return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
        }
        Ok(Canvas {
            width,
            height,
            dots,
        })
    }

    /// Returns the number of dots.
    fn check_size(width: usize, height: usize) -> crate::Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvasSize(width, height));
        }
        width
            .checked_mul(height)
            .ok_or(Error::InvalidCanvasSize(width, height))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn dots(&self) -> &[Color] {
        &self.dots
    }

    pub fn rows(&self) -> ChunksExact<'_, Color> {
        self.dots.chunks_exact(self.width)
    }

    pub fn fill(&mut self, color: Color) {
        self.dots.fill(color);
    }

    /// Panics if `(x, y)` lies outside of the canvas, in every build profile.
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.dots[self.index(x, y)]
    }

    /// Panics if `(x, y)` lies outside of the canvas, in every build profile.
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        let index = self.index(x, y);
        self.dots[index] = color;
    }

    /// Stores `color` only if `(x, y)` lies on the canvas. Returns whether it did.
    pub fn try_set(&mut self, x: i64, y: i64, color: Color) -> bool {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) if x < self.width && y < self.height => {
                self.set(x, y, color);
                true
            }
            _ => false,
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) is outside of the {}x{} canvas",
            x,
            y,
            self.width,
            self.height
        );
        x + y * self.width
    }
}
