use std::io;
use std::io::Write;

use crate::image::{Canvas, ImageWriter};

const MAGIC_NUMBER: &str = "P6";
const MAX_VALUE: u8 = u8::MAX;

/// Writes a canvas as binary (P6) portable pixmap.
pub struct PpmImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Canvas,
}

impl<'a, T: Write> PpmImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Canvas) -> Self {
        Self { writer, image }
    }

    pub fn header(&self) -> Vec<u8> {
        format!(
            "{}\n{} {}\n{}\n",
            MAGIC_NUMBER,
            self.image.width(),
            self.image.height(),
            MAX_VALUE
        )
        .into_bytes()
    }

    fn write_header(&mut self) -> io::Result<()> {
        let header = self.header();
        self.writer.write_all(&header)
    }

    fn write_raster(&mut self) -> io::Result<()> {
        let mut row_bytes = Vec::with_capacity(self.image.width() * 3);
        for row in self.image.rows() {
            row_bytes.clear();
            row_bytes.extend(row.iter().flat_map(|dot| dot.to_bytes()));
            self.writer.write_all(&row_bytes)?;
        }
        Ok(())
    }
}

impl<T: Write> ImageWriter for PpmImageWriter<'_, T> {
    fn write_image(&mut self) -> io::Result<()> {
        self.write_header()?;
        self.write_raster()?;
        self.writer.flush()
    }
}
