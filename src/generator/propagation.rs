/*
propagation.rs

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

//! Propagate the constraints of a newly placed star.
//!
//! When a star is placed, the cells around it can no longer receive a star. The generator moves
//! from left to right and never goes back to the columns on the left of the current column, so
//! the cell on the left of the star is not marked.
//!
//! When the row of the star reaches its quota, the rest of the row, from the star to the last
//! column, is closed. Cells of that row on the left of the star are not touched.

use log::debug;

use super::cell::Position;
use super::grid::Grid;

/// Offsets `(column, row)` of the neighbours to mark: above, above right, above left, below,
/// below right, below left, and right.
const NEIGHBOURS: [(isize, isize); 7] = [(0, -1), (1, -1), (-1, -1), (0, 1), (1, 1), (-1, 1), (1, 0)];

/// Mark the given cell and its neighbourhood as ineligible.
///
/// The operation is idempotent and never makes a cell eligible again.
pub fn mark_ineligible(grid: &mut Grid, position: Position, stars_per_line: usize) {
    grid.set_ineligible(position);

    let (row_count, column_count) = grid.count_stars(position);
    debug!("    Star {position}: row count = {row_count}  column count = {column_count}");

    // The row is complete: close the rest of it
    if row_count == stars_per_line {
        for col in position.col..grid.cols() {
            grid.set_ineligible(Position::new(col, position.row));
        }
    }

    for (dc, dr) in NEIGHBOURS {
        if let (Some(col), Some(row)) = (
            position.col.checked_add_signed(dc),
            position.row.checked_add_signed(dr),
        ) {
            // Positions outside the grid are ignored by the grid itself
            grid.set_ineligible(Position::new(col, row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eligibility(grid: &Grid) -> Vec<Vec<bool>> {
        (0..grid.rows())
            .map(|row| {
                (0..grid.cols())
                    .map(|col| grid.is_eligible(Position::new(col, row)))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn marks_neighbours_but_not_the_left_cell() {
        let mut grid = Grid::new(5, 5);
        let star = Position::new(2, 2);
        grid.place_star(star);
        mark_ineligible(&mut grid, star, 2);

        let expected = vec![
            vec![true, true, true, true, true],
            vec![true, false, false, false, true],
            vec![true, true, false, false, true],
            vec![true, false, false, false, true],
            vec![true, true, true, true, true],
        ];
        assert_eq!(eligibility(&grid), expected);
    }

    #[test]
    fn full_row_is_closed_to_the_right() {
        let mut grid = Grid::new(3, 6);
        let star = Position::new(2, 1);
        grid.place_star(star);
        mark_ineligible(&mut grid, star, 1);

        // Left of the star stays open, right of the star is closed
        assert!(grid.is_eligible(Position::new(0, 1)));
        assert!(grid.is_eligible(Position::new(1, 1)));
        for col in 2..6 {
            assert!(!grid.is_eligible(Position::new(col, 1)));
        }
        // Other rows only lose the neighbours
        assert!(!grid.is_eligible(Position::new(3, 0)));
        assert!(grid.is_eligible(Position::new(4, 0)));
        assert!(grid.is_eligible(Position::new(4, 2)));
    }

    #[test]
    fn row_below_quota_stays_open() {
        let mut grid = Grid::new(3, 6);
        let star = Position::new(0, 0);
        grid.place_star(star);
        mark_ineligible(&mut grid, star, 2);
        assert!(grid.is_eligible(Position::new(2, 0)));
        assert!(grid.is_eligible(Position::new(5, 0)));
    }

    #[test]
    fn corners_stay_inside_the_grid() {
        let mut grid = Grid::new(3, 3);
        for star in [Position::new(0, 0), Position::new(2, 2)] {
            grid.place_star(star);
            mark_ineligible(&mut grid, star, 3);
        }
        assert!(!grid.is_eligible(Position::new(1, 1)));
        assert!(!grid.is_eligible(Position::new(1, 0)));
        assert!(!grid.is_eligible(Position::new(2, 1)));
        // Left of (2, 2) is not marked
        assert!(grid.is_eligible(Position::new(1, 2)));
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let mut grid = Grid::new(4, 4);
        let star = Position::new(1, 1);
        grid.place_star(star);
        mark_ineligible(&mut grid, star, 1);
        let once = grid.clone();
        mark_ineligible(&mut grid, star, 1);
        assert_eq!(grid, once);
    }
}
