use ppm_patterns::{
    generate_all, read_ppm, write_ppm, Canvas, Color, Error, GeneratorConfig, Pattern,
};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

const HEADER_16X16: &[u8] = b"P6\n16 16\n255\n";

fn get_scratch_directory(test_name: &str) -> PathBuf {
    let mut directory = env::temp_dir();
    directory.push(format!("ppm-patterns-{}-{}", test_name, process::id()));
    cleanup(&directory);
    fs::create_dir_all(&directory).expect("Creation of scratch directory failed");
    directory
}

fn cleanup(directory: &Path) {
    if directory.exists() && directory.is_dir() {
        fs::remove_dir_all(directory).expect("Deletion of scratch directory failed");
    }
}

#[test]
fn test_generate_all_patterns() {
    let directory = get_scratch_directory("all");
    let config = GeneratorConfig::default().with_output_directory(&directory);
    let written = generate_all(&config).expect("Generation failed");
    assert_eq!(written.len(), 4);
    for pattern in Pattern::ALL {
        let path = directory.join(pattern.file_name());
        assert!(written.contains(&path), "{} was not reported", pattern);
        let bytes = fs::read(&path).expect("Output file was not created");
        assert!(bytes.starts_with(HEADER_16X16), "{} header is wrong", pattern);
        assert_eq!(bytes.len(), HEADER_16X16.len() + 3 * 16 * 16);
    }
    cleanup(&directory);
}

#[test]
fn test_stripes_file_content() {
    let directory = get_scratch_directory("stripes");
    let config = GeneratorConfig::default().with_output_directory(&directory);
    generate_all(&config).expect("Generation failed");

    let bytes = fs::read(directory.join("stripes.ppm")).expect("Stripes file missing");
    assert_eq!(HEADER_16X16.len(), 13);
    assert_eq!(bytes.len(), 781);
    let raster = &bytes[HEADER_16X16.len()..];
    for (index, rgb) in raster.chunks_exact(3).enumerate() {
        let (x, y) = (index % 16, index / 16);
        let expected = if ((x + y) / 8) % 2 == 0 {
            Color::MAGENTA
        } else {
            Color::BLACK
        };
        assert_eq!(rgb, expected.to_bytes(), "dot ({}, {})", x, y);
    }
    cleanup(&directory);
}

#[test]
fn test_hollow_circle_is_drawn_on_green() {
    let directory = get_scratch_directory("hollow");
    let config = GeneratorConfig::default().with_output_directory(&directory);
    generate_all(&config).expect("Generation failed");

    let canvas = read_ppm(&directory.join("hollow_circle.ppm")).expect("Reading failed");
    assert_eq!(canvas.get(8, 8), Color::GREEN);
    assert_eq!(canvas.get(8, 0), Color::MAGENTA);
    assert!(canvas
        .dots()
        .iter()
        .all(|dot| *dot == Color::GREEN || *dot == Color::MAGENTA));
    cleanup(&directory);
}

#[test]
fn test_round_trip() {
    let directory = get_scratch_directory("round-trip");
    let path = directory.join("gradient.ppm");
    let mut canvas = Canvas::new(7, 5).expect("Canvas creation failed");
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let packed = (x as u32 * 36) << 16 | (y as u32 * 60) << 8 | (x * y) as u32;
            canvas.set(x, y, Color::from_packed(packed));
        }
    }
    write_ppm(&path, &canvas).expect("Writing failed");
    let read = read_ppm(&path).expect("Reading failed");
    assert_eq!(read, canvas);
    cleanup(&directory);
}

#[test]
fn test_existing_file_is_truncated() {
    let directory = get_scratch_directory("truncate");
    let path = directory.join("small.ppm");
    fs::write(&path, vec![0xAA; 4096]).expect("Preparing file failed");
    let canvas = Canvas::filled(1, 1, Color::GREEN).expect("Canvas creation failed");
    write_ppm(&path, &canvas).expect("Writing failed");
    let bytes = fs::read(&path).expect("Output file missing");
    assert_eq!(bytes, b"P6\n1 1\n255\n\x00\xFF\x00");
    cleanup(&directory);
}

#[test]
fn test_missing_directory_fails() {
    let directory = get_scratch_directory("missing");
    let missing = directory.join("does").join("not").join("exist");
    let path = missing.join("stripes.ppm");
    let canvas = Canvas::new(16, 16).expect("Canvas creation failed");
    match write_ppm(&path, &canvas) {
        Err(Error::UnableToOpenOutputFileForWriting(reported, _)) => {
            assert!(reported.ends_with("stripes.ppm"), "was {}", reported);
        }
        Err(e) => panic!("Unexpected error {}", e),
        Ok(_) => panic!("Writing into a missing directory succeeded"),
    }
    assert!(!path.exists(), "Partial file was left behind");

    let config = GeneratorConfig::default().with_output_directory(&missing);
    assert!(generate_all(&config).is_err());
    assert!(!missing.exists());
    cleanup(&directory);
}

#[test]
fn test_invalid_config_writes_nothing() {
    let directory = get_scratch_directory("invalid");
    let config = GeneratorConfig {
        tile_size: 0,
        ..GeneratorConfig::default().with_output_directory(&directory)
    };
    assert!(matches!(generate_all(&config), Err(Error::InvalidTileSize)));
    let entries = fs::read_dir(&directory)
        .expect("Listing scratch directory failed")
        .count();
    assert_eq!(entries, 0);
    cleanup(&directory);
}
