/*
grid.rs

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

//! Grid of cells.

use log::debug;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellState, Position};

/// Fixed-size grid of cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,

    /// Cells stored column by column: the cell at `(col, row)` is at index `col * rows + row`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a [`Grid`] object with all the cells empty and eligible.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the given coordinates are inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.col < self.cols && position.row < self.rows
    }

    fn index(&self, position: Position) -> usize {
        position.col * self.rows + position.row
    }

    /// Return the cell at the given position, or None if the position is outside the grid.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if self.contains(position) {
            Some(&self.cells[self.index(position)])
        } else {
            None
        }
    }

    /// Whether a star may be placed at the given position.
    pub fn is_eligible(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|c| c.eligible)
    }

    /// Whether the cell at the given position holds a star.
    pub fn is_star(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|c| c.is_star())
    }

    /// Put a star at the given position. Positions outside the grid are ignored.
    pub fn place_star(&mut self, position: Position) {
        if self.contains(position) {
            let i: usize = self.index(position);
            self.cells[i].state = CellState::Star;
        }
    }

    /// Mark the cell at the given position as ineligible. Positions outside the grid are
    /// ignored.
    pub fn set_ineligible(&mut self, position: Position) {
        if self.contains(position) {
            let i: usize = self.index(position);
            self.cells[i].eligible = false;
        }
    }

    /// Number of stars in the given row.
    pub fn row_count(&self, row: usize) -> usize {
        (0..self.cols)
            .filter(|&col| self.is_star(Position::new(col, row)))
            .count()
    }

    /// Number of stars in the given column.
    pub fn column_count(&self, col: usize) -> usize {
        self.column_cells(col).iter().filter(|c| c.is_star()).count()
    }

    /// Return the row count and the column count of the lines that go through the given cell.
    pub fn count_stars(&self, position: Position) -> (usize, usize) {
        (self.row_count(position.row), self.column_count(position.col))
    }

    /// Return the cells of the given column, from top to bottom.
    pub fn column_cells(&self, col: usize) -> &[Cell] {
        if col >= self.cols {
            return &[];
        }
        let start: usize = col * self.rows;
        &self.cells[start..start + self.rows]
    }

    /// Return the rows of the stars in the given column, from top to bottom.
    pub fn stars_in_column(&self, col: usize) -> Vec<usize> {
        self.column_cells(col)
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_star())
            .map(|(row, _)| row)
            .collect()
    }

    /// Return the positions of all the stars, column by column.
    pub fn stars(&self) -> Vec<Position> {
        (0..self.cols)
            .flat_map(|col| {
                self.stars_in_column(col)
                    .into_iter()
                    .map(move |row| Position::new(col, row))
            })
            .collect()
    }

    /// Reset the cells of all the columns from `col` to the last column, inclusive.
    ///
    /// The cells become empty and eligible again.
    pub fn clear_columns_from(&mut self, col: usize) {
        if col >= self.cols {
            return;
        }
        debug!("    Clearing columns {col} to {}", self.cols - 1);
        let start: usize = col * self.rows;
        for cell in self.cells[start..].iter_mut() {
            cell.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty_and_eligible() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        for col in 0..4 {
            for row in 0..3 {
                let cell = grid.cell(Position::new(col, row)).unwrap();
                assert_eq!(*cell, Cell::new());
            }
        }
        assert!(grid.stars().is_empty());
    }

    #[test]
    fn out_of_bounds_access() {
        let mut grid = Grid::new(3, 4);
        assert!(grid.cell(Position::new(4, 0)).is_none());
        assert!(grid.cell(Position::new(0, 3)).is_none());
        assert!(!grid.is_eligible(Position::new(9, 9)));
        grid.place_star(Position::new(4, 0));
        grid.set_ineligible(Position::new(0, 3));
        assert!(grid.stars().is_empty());
        assert!(grid.column_cells(4).is_empty());
    }

    #[test]
    fn row_and_column_counts() {
        let mut grid = Grid::new(4, 5);
        grid.place_star(Position::new(0, 1));
        grid.place_star(Position::new(3, 1));
        grid.place_star(Position::new(3, 3));

        assert_eq!(grid.row_count(1), 2);
        assert_eq!(grid.row_count(3), 1);
        assert_eq!(grid.row_count(0), 0);
        assert_eq!(grid.column_count(3), 2);
        assert_eq!(grid.column_count(0), 1);
        assert_eq!(grid.count_stars(Position::new(3, 1)), (2, 2));
        assert_eq!(grid.count_stars(Position::new(4, 3)), (1, 0));
        assert_eq!(grid.stars_in_column(3), vec![1, 3]);
        assert_eq!(
            grid.stars(),
            vec![
                Position::new(0, 1),
                Position::new(3, 1),
                Position::new(3, 3)
            ]
        );
    }

    #[test]
    fn clear_columns_resets_the_right_part_only() {
        let mut grid = Grid::new(3, 4);
        for col in 0..4 {
            grid.place_star(Position::new(col, col % 3));
            grid.set_ineligible(Position::new(col, 2));
        }

        grid.clear_columns_from(2);

        assert!(grid.is_star(Position::new(0, 0)));
        assert!(grid.is_star(Position::new(1, 1)));
        assert!(!grid.is_eligible(Position::new(1, 2)));
        for col in 2..4 {
            for row in 0..3 {
                assert_eq!(*grid.cell(Position::new(col, row)).unwrap(), Cell::new());
            }
        }

        // Clearing past the last column does nothing
        let before = grid.clone();
        grid.clear_columns_from(4);
        assert_eq!(grid, before);
    }
}
