use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidCanvasSize(usize, usize),
    InvalidTileSize,
    InvalidRadius,
    NonSquareCanvas(usize, usize),
    PPMFileDoesNotContainRequiredToken(&'static str),
    ParsingOfTokenFailed(&'static str),
    UnsupportedMaxValue(u16),
    MismatchOfSizeBetweenHeaderAndValues,
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadImageData(std::io::Error),
    FailedToWriteImageData(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCanvasSize(width, height) => {
                write!(
                    f,
                    "Canvas size {}x{} is invalid. Width and height must be positive.",
                    width, height
                )
            }
            Self::InvalidTileSize => write!(f, "Tile size must be greater than zero"),
            Self::InvalidRadius => write!(f, "Radius must be greater than zero"),
            Self::NonSquareCanvas(width, height) => {
                write!(
                    f,
                    "Hollow circle requires a square canvas, but canvas is {}x{}",
                    width, height
                )
            }
            Self::PPMFileDoesNotContainRequiredToken(token_name) => {
                write!(f, "Expected token '{}' not found in PPM file", token_name)
            }
            Self::ParsingOfTokenFailed(token_name) => {
                write!(f, "Parsing of token '{}' failed", token_name)
            }
            Self::UnsupportedMaxValue(max_value) => {
                write!(
                    f,
                    "Max value {} is not supported. Only 8 bit channels (255) can be read.",
                    max_value
                )
            }
            Self::MismatchOfSizeBetweenHeaderAndValues => {
                write!(
                    f,
                    "Number of pixels does not match the size provided in header"
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadImageData(error) => {
                write!(f, "Failed to read image data: {}", error)
            }
            Self::FailedToWriteImageData(path, error) => {
                write!(f, "Failed to write image data to '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToReadImageData(error)
            | Self::FailedToWriteImageData(_, error) => Some(error),
            _ => None,
        }
    }
}
