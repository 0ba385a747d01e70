use std::{
    fs::{self, File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use color::Color;
pub use config::{GeneratorConfig, OutputPaths};
pub use error::Error;
pub use image::Canvas;
pub use pattern::Pattern;

use image::{
    reader::ppm::PpmImageReader, writer::ppm::PpmImageWriter, ImageReader, ImageWriter,
};

mod cli;
mod color;
mod config;
mod error;
pub mod image;
mod logger;
pub mod pattern;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    output_directory: PathBuf,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

/// Writes `canvas` as binary PPM, replacing any existing file. A file that
/// could not be written completely is removed again.
pub fn write_ppm(file_path: &Path, canvas: &Canvas) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let mut image_writer = PpmImageWriter::new(BufWriter::new(&output_file), canvas);
    logger::log_header(file_path, &image_writer.header());
    let result = image_writer
        .write_image()
        .and_then(|_| output_file.sync_all());
    if let Err(e) = result {
        if let Err(remove_error) = fs::remove_file(file_path) {
            log::warn!(
                "Unable to remove incomplete file '{}': {}",
                file_path.display(),
                remove_error
            );
        }
        return Err(Error::FailedToWriteImageData(
            file_path.display().to_string(),
            e,
        ));
    }
    Ok(())
}

pub fn read_ppm(file_path: &Path) -> Result<Canvas> {
    let input_file = open_input_file(file_path)?;
    PpmImageReader::new(BufReader::new(input_file)).read_image()
}

/// Resets `canvas` to the pattern's background, paints it and writes it to the
/// pattern's output path.
pub fn generate(pattern: Pattern, canvas: &mut Canvas, config: &GeneratorConfig) -> Result<()> {
    canvas.fill(pattern.background(config));
    pattern.paint(canvas, config)?;
    write_ppm(config.output_paths.for_pattern(pattern), canvas)
}

/// Generates every pattern in turn on one shared canvas. Stops at the first
/// error.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let mut canvas = Canvas::new(config.width, config.height)?;
    let mut written = Vec::with_capacity(Pattern::ALL.len());
    for pattern in Pattern::ALL {
        log::debug!("Generating {}", pattern);
        generate(pattern, &mut canvas, config)?;
        written.push(config.output_paths.for_pattern(pattern).to_path_buf());
    }
    Ok(written)
}

pub fn generate_patterns(arguments: &Arguments) -> Result<Vec<PathBuf>> {
    let config = GeneratorConfig::from(arguments);
    generate_all(&config)
}
