/*
generator.rs

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

//! Generate star layouts.
//!
//! A layout is a square grid where every row and every column holds the same number of stars,
//! and where no two stars touch, not even diagonally.
//!
//! Create a [`column_generator::ColumnGenerator`] object from a [`parameters::Parameters`]
//! object, then call [`column_generator::ColumnGenerator::step`] until the returned
//! [`column_generator::GenerationStatus`] is terminal, or call
//! [`column_generator::ColumnGenerator::run`] to do all the steps at once.
//! The generator owns a [`grid::Grid`] object that can be inspected between steps.
//!
//! All the random draws come from a [`seeded_random::SeededRandom`] object built from the seed
//! in the parameters. The same parameters always produce the same layout.
//!
//! If the generator backtracks too many times, it stops with the
//! [`column_generator::GenerationStatus::Failed`] status. Some parameters, such as two stars per
//! line in a 3x3 grid, can never produce a layout.

pub mod cell;
pub mod column_generator;
pub mod grid;
pub mod parameters;
pub mod propagation;
pub mod seeded_random;
pub mod star_queue;
