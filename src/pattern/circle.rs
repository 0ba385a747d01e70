use crate::color::Color;
use crate::error::Error;
use crate::image::Canvas;

/// Fills a disk of `radius` pixels centered on the canvas.
///
/// Distances are measured between doubled pixel centers, `dx = width - 2x - 1`,
/// so even and odd canvas sizes are centered without a half pixel bias.
/// A radius reaching past every corner paints the whole canvas.
pub fn paint_solid_circle(
    canvas: &mut Canvas,
    radius: usize,
    background: Color,
    foreground: Color,
) -> crate::Result<()> {
    if radius == 0 {
        return Err(Error::InvalidRadius);
    }
    log::debug!(
        "painting solid circle of radius {} on {}x{} canvas",
        radius,
        canvas.width(),
        canvas.height()
    );
    let center_x = canvas.width() as i128;
    let center_y = canvas.height() as i128;
    // no corner is further away than width + height
    let radius = radius.min(canvas.width().saturating_add(canvas.height()));
    let doubled_radius = radius as i128 * 2;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let dx = center_x - x as i128 * 2 - 1;
            let dy = center_y - y as i128 * 2 - 1;
            let color = if dx * dx + dy * dy <= doubled_radius * doubled_radius {
                foreground
            } else {
                background
            };
            canvas.set(x, y, color);
        }
    }
    Ok(())
}

/// The first octant of a circle outline, from `(0, radius)` until `x > y`,
/// in integer arithmetic. Yields one point per column, so the radius must be
/// small enough for the outline to fit in memory.
pub fn trace_octant(radius: usize) -> Vec<(i64, i64)> {
    let radius = radius as i128;
    let mut points = Vec::new();
    let (mut x, mut y) = (0_i128, radius);
    while x <= y {
        points.push((x as i64, y as i64));
        x += 1;
        if x * x + y * y > radius * radius {
            y -= 1;
        }
    }
    points
}

/// How an octant point is carried into one of the eight octants:
/// swap axes, mirror column, mirror row.
const OCTANTS: [(bool, bool, bool); 8] = [
    (false, false, false),
    (true, false, false),
    (false, false, true),
    (true, true, false),
    (false, true, false),
    (true, false, true),
    (true, true, true),
    (false, true, true),
];

/// Signed offset from the circle center.
fn reflect(
    (x, y): (i64, i64),
    (swap, mirror_column, mirror_row): (bool, bool, bool),
) -> (i64, i64) {
    let (column, row) = if swap { (y, x) } else { (x, y) };
    (
        if mirror_column { -column } else { column },
        if mirror_row { -row } else { row },
    )
}

fn symmetric_offsets(radius: usize) -> impl Iterator<Item = (i64, i64)> {
    trace_octant(radius)
        .into_iter()
        .flat_map(|point| OCTANTS.into_iter().map(move |octant| reflect(point, octant)))
}

/// Offsets of every outline pixel relative to the circle center, sorted.
pub fn circle_outline(radius: usize) -> Vec<(i64, i64)> {
    let mut offsets: Vec<(i64, i64)> = symmetric_offsets(radius).collect();
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

/// Draws the one pixel wide outline of a circle centered at
/// `(width / 2, height / 2)`, leaving every other pixel untouched.
///
/// Negative offsets land on `size - (center + |v|)`. Outline pixels that
/// fall outside of the canvas, e.g. for `radius == width / 2`, are skipped.
pub fn paint_hollow_circle(
    canvas: &mut Canvas,
    radius: usize,
    color: Color,
) -> crate::Result<()> {
    if !canvas.is_square() {
        return Err(Error::NonSquareCanvas(canvas.width(), canvas.height()));
    }
    if radius == 0 {
        return Err(Error::InvalidRadius);
    }
    // every octant point has y >= radius / sqrt(2), beyond the canvas on both sides
    if radius / 2 > canvas.width() {
        log::debug!(
            "hollow circle of radius {} lies outside of {}x{} canvas",
            radius,
            canvas.width(),
            canvas.height()
        );
        return Ok(());
    }
    let size = canvas.width() as i64;
    let center = size / 2;
    let place = |offset: i64| {
        if offset < 0 {
            size - (center - offset)
        } else {
            center + offset
        }
    };

    let mut clipped = 0;
    for (column, row) in symmetric_offsets(radius) {
        if !canvas.try_set(place(column), place(row), color) {
            clipped += 1;
        }
    }
    log::debug!(
        "painted hollow circle of radius {} on {}x{} canvas, {} points clipped",
        radius,
        canvas.width(),
        canvas.height(),
        clipped
    );
    Ok(())
}
