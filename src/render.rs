//! Text and image output of a [`GridMap`].
//!
//! Segment markers cycle through four colors in route order. Segments beyond the fourth are
//! drawn green.

use crate::{grid::Cell, grid::GridMap, Result};

use std::fs;
use std::path::Path;

const SEGMENT_GLYPHS: [char; 4] = ['🟧', '🟨', '🟩', '🟦'];
const EXTRA_SEGMENT_GLYPH: char = '🟩';

/// The glyph used for `cell` in [`to_text`]
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Free => '⬜',
        Cell::Obstacle => '⬛',
        Cell::Start | Cell::Goal => '🟥',
        Cell::Waypoint => '🟦',
        Cell::SegmentMarker(index) => SEGMENT_GLYPHS
            .get(index)
            .copied()
            .unwrap_or(EXTRA_SEGMENT_GLYPH),
    }
}

/// Renders the Grid as text: one line per row, cells separated by a space.
///
/// ```
/// use waypoint_pathfinding::{grid::{Cell, GridMap}, render};
///
/// let mut grid = GridMap::new(2, 3);
/// grid[(0, 1)] = Cell::Obstacle;
/// grid.mark_endpoints((1, 0), (1, 2));
///
/// assert_eq!(render::to_text(&grid), "⬜ ⬛ ⬜\n🟥 ⬜ 🟥\n");
/// ```
pub fn to_text(grid: &GridMap) -> String {
    let mut text = String::with_capacity(grid.height() * grid.width() * 5);
    for row in grid.rows() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push(glyph(*cell));
        }
        text.push('\n');
    }
    text
}

/// Writes [`to_text`] to a file
pub fn write_text(grid: &GridMap, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path.as_ref(), to_text(grid))?;
    debug!("wrote text grid to {}", path.as_ref().display());
    Ok(())
}

#[cfg(feature = "image")]
pub use self::raster::{color, export_image, to_image};

#[cfg(feature = "image")]
mod raster {
    use super::*;
    use crate::Error;
    use image::{Rgb, RgbImage};

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    const ORANGE: Rgb<u8> = Rgb([255, 165, 0]);
    const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 128, 0]);
    const LIGHT_GREY: Rgb<u8> = Rgb([211, 211, 211]);

    const SEGMENT_COLORS: [Rgb<u8>; 4] = [ORANGE, YELLOW, GREEN, BLUE];

    /// The fill color used for `cell` in [`to_image`]
    pub fn color(cell: Cell) -> Rgb<u8> {
        match cell {
            Cell::Free => WHITE,
            Cell::Obstacle => BLACK,
            Cell::Start | Cell::Goal => RED,
            Cell::Waypoint => BLUE,
            Cell::SegmentMarker(index) => SEGMENT_COLORS.get(index).copied().unwrap_or(GREEN),
        }
    }

    /// Draws every cell as a filled `cell_size` square with a light grey outline.
    ///
    /// Returns [`Error::ImageTooLarge`] if the image would not fit `u32` dimensions.
    pub fn to_image(grid: &GridMap, cell_size: u32) -> Result<RgbImage> {
        let cell_size = cell_size.max(1);
        let scale = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(cell_size))
        };
        let (width, height) = match (scale(grid.width()), scale(grid.height())) {
            (Some(width), Some(height)) => (width, height),
            _ => {
                return Err(Error::ImageTooLarge {
                    height: grid.height(),
                    width: grid.width(),
                    cell_size,
                })
            }
        };
        Ok(RgbImage::from_fn(width, height, |x, y| {
            let (row, col) = ((y / cell_size) as usize, (x / cell_size) as usize);
            let (dx, dy) = (x % cell_size, y % cell_size);
            if dx == 0 || dy == 0 || dx == cell_size - 1 || dy == cell_size - 1 {
                LIGHT_GREY
            } else {
                color(grid[(row, col)])
            }
        }))
    }

    /// Writes [`to_image`] to a file. The format is taken from the file extension.
    pub fn export_image(grid: &GridMap, path: impl AsRef<Path>, cell_size: u32) -> Result<()> {
        to_image(grid, cell_size)?.save(path.as_ref())?;
        debug!("wrote grid image to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_glyphs() {
        assert_eq!(glyph(Cell::SegmentMarker(0)), '🟧');
        assert_eq!(glyph(Cell::SegmentMarker(1)), '🟨');
        assert_eq!(glyph(Cell::SegmentMarker(3)), '🟦');
        assert_eq!(glyph(Cell::SegmentMarker(4)), '🟩');
        assert_eq!(glyph(Cell::SegmentMarker(40)), '🟩');
    }

    #[test]
    fn text_shape() {
        let grid = GridMap::new(3, 4);
        let text = to_text(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().filter(|c| *c == '⬜').count() == 4));
    }

    #[test]
    fn write_text_file() {
        let mut grid = GridMap::new(2, 2);
        grid.mark_waypoint((1, 1));
        let path = std::env::temp_dir().join(format!("waypoint_grid_{}.txt", std::process::id()));

        write_text(&grid, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(written, "⬜ ⬜\n⬜ 🟦\n");
    }

    #[cfg(feature = "image")]
    #[test]
    fn image_cells() {
        let mut grid = GridMap::new(2, 3);
        grid[(0, 1)] = Cell::Obstacle;
        grid[(1, 2)] = Cell::SegmentMarker(1);

        let image = to_image(&grid, 10).unwrap();
        assert_eq!(image.dimensions(), (30, 20));
        assert_eq!(*image.get_pixel(5, 5), color(Cell::Free));
        assert_eq!(*image.get_pixel(15, 5), color(Cell::Obstacle));
        assert_eq!(*image.get_pixel(25, 15), color(Cell::SegmentMarker(1)));
        assert_eq!(*image.get_pixel(10, 5), image::Rgb([211, 211, 211]));
    }

    #[cfg(feature = "image")]
    #[test]
    fn oversized_image() {
        let grid = GridMap::new(50, 100);
        assert!(matches!(
            to_image(&grid, u32::MAX / 64),
            Err(crate::Error::ImageTooLarge {
                height: 50,
                width: 100,
                ..
            })
        ));
    }
}
