/*
parameters.rs

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

//! Layout parameters.
//!
//! A [`Parameters`] object is given once to the generator, which keeps its own copy for the
//! whole generation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Maximum number of random draws when looking for a row in a column.
pub const MAX_ATTEMPTS: usize = 20;

/// Maximum number of backtracks before the generation gives up.
pub const MAX_BACKTRACKS: usize = 20;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ParameterError {
    /// The grid has no rows.
    ZeroRows,

    /// The grid has no columns.
    ZeroColumns,

    /// More stars per line than the shortest line can hold.
    TooManyStars { stars_per_line: usize, max: usize },

    /// The row total and the column total can never be equal.
    UnbalancedGrid { rows: usize, cols: usize },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParameterError::ZeroRows => write!(f, "the grid must have at least one row"),
            ParameterError::ZeroColumns => write!(f, "the grid must have at least one column"),
            ParameterError::TooManyStars {
                stars_per_line,
                max,
            } => write!(
                f,
                "{stars_per_line} stars per line do not fit in the grid (maximum is {max})"
            ),
            ParameterError::UnbalancedGrid { rows, cols } => write!(
                f,
                "a {rows}x{cols} grid cannot hold the same number of stars in every row and \
                 every column; use a square grid"
            ),
        }
    }
}

impl Error for ParameterError {}

/// Parameters of a layout.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Number of stars in every row and in every column (difficulty).
    pub stars_per_line: usize,

    /// Seed of the pseudo-random sequence.
    pub seed: i64,
}

impl Parameters {
    /// Create a [`Parameters`] object. The values are not verified: see
    /// [`Parameters::validate`].
    pub fn new(rows: usize, cols: usize, stars_per_line: usize, seed: i64) -> Self {
        Self {
            rows,
            cols,
            stars_per_line,
            seed,
        }
    }

    /// Verify that a layout can be built from the parameters.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid is empty, if the number of stars per line is
    /// greater than the number of rows or columns, or if the grid is not square while stars are
    /// requested (the number of stars in the rows would differ from the number of stars in the
    /// columns).
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.rows == 0 {
            return Err(ParameterError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ParameterError::ZeroColumns);
        }
        let max: usize = self.rows.min(self.cols);
        if self.stars_per_line > max {
            return Err(ParameterError::TooManyStars {
                stars_per_line: self.stars_per_line,
                max,
            });
        }
        if self.stars_per_line > 0 && self.rows != self.cols {
            return Err(ParameterError::UnbalancedGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters() {
        assert_eq!(Parameters::new(15, 15, 3, 12346).validate(), Ok(()));
        assert_eq!(Parameters::new(1, 1, 1, 0).validate(), Ok(()));
        // Without stars, any grid shape works
        assert_eq!(Parameters::new(2, 7, 0, -1).validate(), Ok(()));
    }

    #[test]
    fn empty_grids_are_rejected() {
        assert_eq!(
            Parameters::new(0, 5, 0, 1).validate(),
            Err(ParameterError::ZeroRows)
        );
        assert_eq!(
            Parameters::new(5, 0, 0, 1).validate(),
            Err(ParameterError::ZeroColumns)
        );
    }

    #[test]
    fn too_many_stars() {
        assert_eq!(
            Parameters::new(4, 4, 5, 1).validate(),
            Err(ParameterError::TooManyStars {
                stars_per_line: 5,
                max: 4
            })
        );
        assert_eq!(
            Parameters::new(6, 3, 4, 1).validate(),
            Err(ParameterError::TooManyStars {
                stars_per_line: 4,
                max: 3
            })
        );
    }

    #[test]
    fn unbalanced_grid() {
        let err = Parameters::new(6, 5, 1, 1).validate().unwrap_err();
        assert_eq!(err, ParameterError::UnbalancedGrid { rows: 6, cols: 5 });
        assert!(err.to_string().contains("6x5"));
    }

    #[test]
    fn read_from_json() {
        let p: Parameters =
            serde_json::from_str(r#"{"rows": 8, "cols": 8, "stars_per_line": 1, "seed": -4}"#)
                .unwrap();
        assert_eq!(p, Parameters::new(8, 8, 1, -4));
    }
}
