/*
draw.rs

Copyright 2025 The Stargrid contributors

This file is part of Stargrid.

Stargrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Stargrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Stargrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Draw the grid as text.
//!
//! Each row of the grid is a line of characters:
//!
//! ```text
//! *..x.
//! xx*xx
//! ```
//!
//! * `*` is a star.
//! * `.` is an empty cell that can still receive a star.
//! * `x` is an empty cell that cannot receive a star.

use crate::generator::cell::{Cell, Position};
use crate::generator::column_generator::GeneratorSnapshot;
use crate::generator::grid::Grid;

const STAR: char = '*';
const ELIGIBLE: char = '.';
const INELIGIBLE: char = 'x';

/// Return the character that represents the cell.
pub fn cell_char(cell: &Cell) -> char {
    if cell.is_star() {
        STAR
    } else if cell.eligible {
        ELIGIBLE
    } else {
        INELIGIBLE
    }
}

/// Draw the grid, one line per row.
pub fn draw_grid(grid: &Grid) -> String {
    let mut s: String = String::with_capacity((grid.cols() + 1) * grid.rows());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if let Some(cell) = grid.cell(Position::new(col, row)) {
                s.push(cell_char(cell));
            }
        }
        s.push('\n');
    }
    s
}

/// Draw the grid followed by a status line.
pub fn draw_snapshot(snapshot: &GeneratorSnapshot) -> String {
    format!(
        "{}step {}  column {}/{}  backtracks {}  status {}\n",
        draw_grid(&snapshot.grid),
        snapshot.steps,
        snapshot.current_column,
        snapshot.parameters.cols,
        snapshot.backtrack_count,
        snapshot.status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::column_generator::ColumnGenerator;
    use crate::generator::parameters::Parameters;
    use crate::generator::propagation::mark_ineligible;

    #[test]
    fn characters_follow_the_cell_state() {
        let mut grid = Grid::new(3, 4);
        let star = Position::new(1, 1);
        grid.place_star(star);
        mark_ineligible(&mut grid, star, 2);

        assert_eq!(draw_grid(&grid), "xxx.\n.*x.\nxxx.\n");
    }

    #[test]
    fn completed_layout() {
        let mut generator = ColumnGenerator::new(Parameters::new(5, 5, 1, 42)).unwrap();
        generator.run();
        let text = draw_snapshot(&generator.snapshot());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].chars().next(), Some('*'));
        for line in &lines[..5] {
            assert_eq!(line.chars().filter(|c| *c == '*').count(), 1);
        }
        assert_eq!(lines[5], "step 6  column 5/5  backtracks 0  status done");
    }
}
