/*
star_queue.rs

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

//! Stars waiting for their column to be completed.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::cell::Position;

/// First-in first-out list of placed stars.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct StarQueue {
    queue: VecDeque<Position>,
}

impl StarQueue {
    /// Create an empty [`StarQueue`] object.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Add a star at the end of the queue.
    pub fn push(&mut self, position: Position) {
        self.queue.push_back(position);
    }

    /// Remove and return the oldest star.
    pub fn pop(&mut self) -> Option<Position> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Return the queued stars, oldest first.
    pub fn get(&self) -> Vec<Position> {
        self.queue.iter().copied().collect()
    }
}
