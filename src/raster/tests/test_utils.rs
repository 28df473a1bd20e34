use std::collections::BTreeSet;

use crate::pnm::{Grid, Rgb};

/// Coordinates of every non-zero sample
pub fn lit(grid: &Grid<u8>) -> BTreeSet<(usize, usize)> {
    let mut set = BTreeSet::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v != 0 {
                set.insert((x, y));
            }
        }
    }
    set
}

/// Coordinates of every pixel equal to `color`
pub fn lit_color(grid: &Grid<Rgb>, color: Rgb) -> BTreeSet<(usize, usize)> {
    let mut set = BTreeSet::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v == color {
                set.insert((x, y));
            }
        }
    }
    set
}

/// Rectangle of coordinates [x0, x0 + w) x [y0, y0 + h)
pub fn block(x0: usize, y0: usize, w: usize, h: usize) -> BTreeSet<(usize, usize)> {
    let mut set = BTreeSet::new();
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            set.insert((x, y));
        }
    }
    set
}
