/*
cell.rs

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

//! Grid cells and their coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement state of a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Star,
}

/// Coordinates of a cell. Columns come first because the grid is processed column by column.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A cell of the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Whether the cell holds a star.
    pub state: CellState,

    /// Whether a star may still be placed in the cell.
    ///
    /// Only the constraint propagation clears this flag, and only a column clear sets it back.
    pub eligible: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Create an empty, eligible [`Cell`].
    pub fn new() -> Self {
        Self {
            state: CellState::Empty,
            eligible: true,
        }
    }

    pub fn is_star(&self) -> bool {
        self.state == CellState::Star
    }

    /// Put the cell back to its initial state.
    pub fn reset(&mut self) {
        self.state = CellState::Empty;
        self.eligible = true;
    }
}
