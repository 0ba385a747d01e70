use std::io::Read;

use crate::color::Color;
use crate::error::Error;
use crate::image::{Canvas, ImageReader};

/// Reads binary (P6) portable pixmaps with 8 bit channels.
pub struct PpmImageReader<T: Read> {
    reader: T,
}

impl<T: Read> PpmImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: Read> ImageReader for PpmImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Canvas> {
        let header = {
            let mut tokenizer = PPMTokenizer::new(&mut self.reader);
            let mut parser = PPMHeaderParser::new(&mut tokenizer);
            parser.parse_header()?
        };
        let dots = read_raster(&mut self.reader, &header)?;
        Canvas::from_dots(header.width, header.height, dots)
    }
}

struct PPMTokenizer<'a, R: Read> {
    reader: &'a mut R,
    buffer: Vec<u8>,
}

impl<'a, R: Read> PPMTokenizer<'a, R> {
    pub fn new(reader: &'a mut R) -> Self {
        PPMTokenizer {
            reader,
            buffer: Vec::new(),
        }
    }
}

/// Yields whitespace separated header tokens. The single whitespace byte
/// terminating a token is consumed, so after the max value token the reader
/// is positioned on the first raster byte.
impl<R: Read> Iterator for PPMTokenizer<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let mut byte = [0; 1];
        let mut in_comment = false;

        while self.reader.read(&mut byte).unwrap_or(0) > 0 {
            if in_comment {
                if byte[0] == b'\n' {
                    in_comment = false;
                }
                continue;
            }
            if byte[0] == b'#' {
                in_comment = true;
                continue;
            }
            if byte[0].is_ascii_whitespace() {
                if !self.buffer.is_empty() {
                    break;
                }
            } else {
                self.buffer.push(byte[0]);
            }
        }

        if self.buffer.is_empty() {
            return None;
        }

        Some(String::from_utf8_lossy(&self.buffer).into_owned())
    }
}

const P6_HEADER_TOKEN_NAME: &str = "P6 Header";
const WIDTH_HEADER_TOKEN_NAME: &str = "Width Header";
const HEIGHT_HEADER_TOKEN_NAME: &str = "Height Header";
const MAX_VALUE_HEADER_TOKEN_NAME: &str = "Max Value Header";

struct PPMHeader {
    width: usize,
    height: usize,
}

struct PPMHeaderParser<'a, T> {
    tokenizer: &'a mut T,
}

impl<'a, T> PPMHeaderParser<'a, T>
where
    T: Iterator<Item = String>,
{
    fn new(tokenizer: &'a mut T) -> Self {
        Self { tokenizer }
    }

    fn parse_header(&mut self) -> crate::Result<PPMHeader> {
        let magic = self.next_token(P6_HEADER_TOKEN_NAME)?;
        Self::check_header_version(&magic)?;
        let width = self.parse_number(WIDTH_HEADER_TOKEN_NAME)?;
        let height = self.parse_number(HEIGHT_HEADER_TOKEN_NAME)?;
        let max_value: u16 = self.parse_number(MAX_VALUE_HEADER_TOKEN_NAME)?;
        Self::check_max_value(max_value)?;
        Ok(PPMHeader { width, height })
    }

    fn check_header_version(header: &str) -> crate::Result<()> {
        if header != "P6" {
            return Err(Error::PPMFileDoesNotContainRequiredToken(
                P6_HEADER_TOKEN_NAME,
            ));
        }
        Ok(())
    }

    fn check_max_value(max_value: u16) -> crate::Result<()> {
        if max_value != u8::MAX as u16 {
            return Err(Error::UnsupportedMaxValue(max_value));
        }
        Ok(())
    }

    fn next_token(&mut self, token_name: &'static str) -> crate::Result<String> {
        self.tokenizer
            .next()
            .ok_or(Error::PPMFileDoesNotContainRequiredToken(token_name))
    }

    fn parse_number<N>(&mut self, token_name: &'static str) -> crate::Result<N>
    where
        N: std::str::FromStr,
    {
        self.next_token(token_name)?
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(token_name))
    }
}

fn read_raster<R: Read>(reader: &mut R, header: &PPMHeader) -> crate::Result<Vec<Color>> {
    let expected_length = header
        .width
        .checked_mul(header.height)
        .and_then(|dots| dots.checked_mul(3))
        .ok_or(Error::MismatchOfSizeBetweenHeaderAndValues)?;
    let mut raster = Vec::new();
    // one extra byte to detect trailing data
    reader
        .take(expected_length as u64 + 1)
        .read_to_end(&mut raster)
        .map_err(Error::FailedToReadImageData)?;
    if raster.len() != expected_length {
        return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
    }
    Ok(raster
        .chunks_exact(3)
        .map(|rgb| Color::new(rgb[0], rgb[1], rgb[2]))
        .collect())
}
