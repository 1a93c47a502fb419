/*
column_generator.rs

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

//! Generate a star layout column by column.
//!
//! The [`ColumnGenerator`] object fills the grid from the left column to the right column.
//! Each column is first seeded with a random star, which is queued. Processing the queued star
//! completes its column with more random stars, then seeds the next column.
//! When a column cannot be completed after [`MAX_ATTEMPTS`] failed draws, the generator backs up
//! one column, clears everything from there, and seeds that column again.
//! After [`MAX_BACKTRACKS`] backtracks the generator gives up.
//!
//! The work is split in steps: every call to [`ColumnGenerator::step`] does one unit of work and
//! returns, so that the caller can display or inspect the grid between steps.

use log::{Level, debug, info, log_enabled, warn};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::cell::Position;
use super::grid::Grid;
use super::parameters::{MAX_ATTEMPTS, MAX_BACKTRACKS, ParameterError, Parameters};
use super::propagation;
use super::seeded_random::SeededRandom;
use super::star_queue::StarQueue;

/// Status of the generation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum GenerationStatus {
    /// The generator moves forward.
    Generating,

    /// The last step backed up one column. The next step moves forward again.
    Backtracking,

    /// The layout is complete.
    Done,

    /// Too many backtracks. The grid is left as it was at that point.
    Failed,
}

impl GenerationStatus {
    /// Whether the generation is over. Further steps do nothing.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationStatus::Done | GenerationStatus::Failed)
    }
}

/// Copy of the generator state, for display or export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratorSnapshot {
    pub parameters: Parameters,
    pub status: GenerationStatus,
    pub current_column: usize,
    pub backtrack_count: usize,
    pub steps: usize,
    pub queued_stars: Vec<Position>,
    pub grid: Grid,
}

/// Step-by-step layout generator.
#[derive(Debug, Clone)]
pub struct ColumnGenerator {
    /// Parameters given when the object was created.
    parameters: Parameters,

    /// Source of all the random draws.
    rng: SeededRandom,

    grid: Grid,

    /// Seeded stars whose column is not yet complete.
    queue: StarQueue,

    /// Column being filled. Equal to the number of columns when all the columns are complete.
    current_column: usize,

    /// Number of backtracks so far.
    backtrack_count: usize,

    status: GenerationStatus,

    /// Number of steps that did some work.
    steps: usize,
}

impl ColumnGenerator {
    /// Create the object and seed the first column.
    ///
    /// # Errors
    ///
    /// The method returns an error if the parameters cannot produce a layout. See
    /// [`Parameters::validate`].
    pub fn new(parameters: Parameters) -> Result<Self, ParameterError> {
        parameters.validate()?;

        let mut generator: Self = Self {
            parameters,
            rng: SeededRandom::new(parameters.seed),
            grid: Grid::new(parameters.rows, parameters.cols),
            queue: StarQueue::new(),
            current_column: 0,
            backtrack_count: 0,
            status: GenerationStatus::Generating,
            steps: 0,
        };

        debug!(
            "Grid = {}x{}  Stars per line = {}  Seed = {}",
            parameters.rows, parameters.cols, parameters.stars_per_line, parameters.seed
        );

        // Without stars there is nothing to place: every column is already complete
        if parameters.stars_per_line == 0 {
            generator.current_column = parameters.cols;
        } else {
            generator.seed_column();
        }
        Ok(generator)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Read-only access to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn current_column(&self) -> usize {
        self.current_column
    }

    pub fn backtrack_count(&self) -> usize {
        self.backtrack_count
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Return the queued stars, oldest first.
    pub fn queued_stars(&self) -> Vec<Position> {
        self.queue.get()
    }

    /// Whether the generation is over.
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Return a copy of the current state.
    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot {
            parameters: self.parameters,
            status: self.status,
            current_column: self.current_column,
            backtrack_count: self.backtrack_count,
            steps: self.steps,
            queued_stars: self.queue.get(),
            grid: self.grid.clone(),
        }
    }

    /// Try to put a star in a random row of the current column.
    ///
    /// The star is queued. Return `false` if no row could be found after [`MAX_ATTEMPTS`] draws;
    /// the column then stays empty and the next step backtracks.
    pub fn seed_column(&mut self) -> bool {
        let col: usize = self.current_column;
        if col >= self.parameters.cols {
            return false;
        }
        let stars_per_line: usize = self.parameters.stars_per_line;

        for _ in 0..MAX_ATTEMPTS {
            let position: Position = Position::new(col, self.rng.next_index(self.parameters.rows));
            let (row_count, column_count) = self.grid.count_stars(position);

            if self.grid.is_eligible(position)
                && row_count < stars_per_line
                && column_count < stars_per_line
            {
                self.grid.place_star(position);
                propagation::mark_ineligible(&mut self.grid, position, stars_per_line);
                self.queue.push(position);
                debug!("    Column {col} seeded with star {position}");
                return true;
            }
        }
        debug!("    Cannot seed column {col}");
        false
    }

    /// Reset all the columns from `col` to the last column.
    pub fn clear_columns_from(&mut self, col: usize) {
        self.grid.clear_columns_from(col);
    }

    /// Do one unit of work and return the new status.
    ///
    /// A step either completes the column of the oldest queued star and seeds the next column,
    /// or backtracks. Once the status is [`GenerationStatus::Done`] or
    /// [`GenerationStatus::Failed`], the method does nothing.
    pub fn step(&mut self) -> GenerationStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        self.steps += 1;

        let Some(position) = self.queue.pop() else {
            if self.current_column >= self.parameters.cols {
                info!(
                    "Layout complete after {} steps and {} backtracks",
                    self.steps, self.backtrack_count
                );
                self.status = GenerationStatus::Done;
            } else {
                debug!("== Column {} has no star", self.current_column);
                self.backtrack();
            }
            return self.status;
        };

        debug!("== Step {}: processing star {position}", self.steps);

        let stars_per_line: usize = self.parameters.stars_per_line;
        let needed: usize = stars_per_line.saturating_sub(self.grid.column_count(position.col));
        let mut placed: usize = 0;
        let mut attempts: usize = 0;

        // Only failed draws use up the attempts
        while placed < needed && attempts < MAX_ATTEMPTS {
            let row: usize = self.rng.next_index(self.parameters.rows);
            let candidate: Position = Position::new(position.col, row);

            if self.grid.is_eligible(candidate) && self.grid.row_count(row) < stars_per_line {
                self.grid.place_star(candidate);
                propagation::mark_ineligible(&mut self.grid, candidate, stars_per_line);
                placed += 1;
                debug!("    Star {candidate} added");
            } else {
                attempts += 1;
            }
        }

        if placed < needed {
            debug!(
                "    Column {} incomplete: {placed} of {needed} stars added",
                position.col
            );
            self.backtrack();
            return self.status;
        }

        self.current_column += 1;
        if self.current_column < self.parameters.cols {
            self.seed_column();
        }
        self.status = GenerationStatus::Generating;

        if log_enabled!(Level::Debug) {
            debug!(
                "    Column {} complete: rows {:?}",
                position.col,
                self.grid.stars_in_column(position.col)
            );
        }
        self.status
    }

    /// Step until the generation is over and return the final status.
    pub fn run(&mut self) -> GenerationStatus {
        while !self.status.is_terminal() {
            self.step();
        }
        self.status
    }

    /// Back up one column and seed it again, or give up when the budget is spent.
    fn backtrack(&mut self) {
        self.backtrack_count += 1;
        if self.backtrack_count >= MAX_BACKTRACKS {
            warn!(
                "Too many backtracks ({}): giving up at column {}",
                self.backtrack_count, self.current_column
            );
            self.status = GenerationStatus::Failed;
            return;
        }

        // There is no column before the first one: retry it
        self.current_column = self.current_column.saturating_sub(1);
        debug!(
            "    Backtrack {}: back to column {}",
            self.backtrack_count, self.current_column
        );
        self.clear_columns_from(self.current_column);

        // The clear also removed the exclusions that the stars of the previous column had set
        if let Some(previous) = self.current_column.checked_sub(1) {
            for row in self.grid.stars_in_column(previous) {
                propagation::mark_ineligible(
                    &mut self.grid,
                    Position::new(previous, row),
                    self.parameters.stars_per_line,
                );
            }
        }

        self.seed_column();
        self.status = GenerationStatus::Backtracking;
    }
}
