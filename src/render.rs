//! Terminal presentation helpers. Nothing in the encoder depends on this module.

use std::fmt::Write;

use crate::grid::Grid;
use crate::shape::DirectionType;
use crate::variables::DirectionVariables;

/// The box-drawing character for a flow of type `direction`.
pub fn glyph(direction: DirectionType) -> char {
    match direction {
        DirectionType::LeftRight => '─',
        DirectionType::TopBottom => '│',
        DirectionType::TopLeft => '┘',
        DirectionType::TopRight => '└',
        DirectionType::BottomLeft => '┐',
        DirectionType::BottomRight => '┌',
    }
}

/// The ANSI SGR background code conventionally used for the color letter `symbol`, if it has one.
pub fn ansi_background(symbol: char) -> Option<u8> {
    Some(match symbol {
        'R' => 101, // red
        'B' => 104, // blue
        'Y' => 103, // yellow
        'G' => 42,  // green
        'O' => 43,  // orange
        'C' => 106, // cyan
        'M' => 105, // magenta
        'm' => 41,  // maroon
        'P' => 45,  // purple
        'A' => 100, // gray
        'W' => 107, // white
        'g' => 102, // bright green
        'T' => 47,  // tan
        'b' => 44,  // dark blue
        'c' => 46,  // dark cyan
        'p' => 35,  // pink
        _ => return None,
    })
}

/// The puzzle with each endpoint on its ANSI background color, one row per line.
///
/// Empty cells and endpoints without a known color are printed plainly.
pub fn colored_grid(grid: &Grid) -> String {
    let mut out = String::new();
    let mut row = 0;

    for (location, cell) in grid.cells() {
        if location.row != row {
            out.push('\n');
            row = location.row;
        }

        let symbol = cell.endpoint_color()
            .and_then(|color| grid.colors().symbol(color));
        let _ = match symbol.and_then(|symbol| ansi_background(symbol).map(|code| (symbol, code))) {
            Some((symbol, code)) => write!(out, "\x1b[{}m {} \x1b[0m", code, symbol),
            None => write!(out, " {} ", symbol.unwrap_or('.')),
        };
    }
    out.push('\n');

    out
}

/// One line per non-endpoint cell listing its direction variables as `glyph=id`, in allocation order.
pub fn direction_table(directions: &DirectionVariables) -> String {
    let mut out = String::new();

    for (location, vars) in directions.iter() {
        let _ = write!(out, "{}:", location);
        for (direction, var) in vars {
            let _ = write!(out, " {}={}", glyph(*direction), var.to_dimacs());
        }
        out.push('\n');
    }

    out
}
