use crate::color::Color;
use crate::error::Error;
use crate::image::Canvas;

/// Diagonal bands of width `tile_size`, starting with `foreground` in the
/// top left corner.
pub fn paint_stripes(
    canvas: &mut Canvas,
    tile_size: usize,
    background: Color,
    foreground: Color,
) -> crate::Result<()> {
    paint_tiles(canvas, tile_size, background, foreground, |x, y| {
        (x + y) / tile_size
    })
}

/// A checkerboard of `tile_size` squares, `foreground` in the top left corner.
pub fn paint_checker(
    canvas: &mut Canvas,
    tile_size: usize,
    background: Color,
    foreground: Color,
) -> crate::Result<()> {
    paint_tiles(canvas, tile_size, background, foreground, |x, y| {
        x / tile_size + y / tile_size
    })
}

fn paint_tiles<F>(
    canvas: &mut Canvas,
    tile_size: usize,
    background: Color,
    foreground: Color,
    tile_index: F,
) -> crate::Result<()>
where
    F: Fn(usize, usize) -> usize,
{
    if tile_size == 0 {
        return Err(Error::InvalidTileSize);
    }
    log::debug!(
        "painting {} px tiles on {}x{} canvas",
        tile_size,
        canvas.width(),
        canvas.height()
    );
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let color = if tile_index(x, y) % 2 == 0 {
                foreground
            } else {
                background
            };
            canvas.set(x, y, color);
        }
    }
    Ok(())
}
