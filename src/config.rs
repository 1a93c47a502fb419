/*
config.rs

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

//! Build-time settings and default values.

/// Text printed by `--version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 The Stargrid contributors
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 15;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 15;

/// Default number of stars per row and per column.
pub const DEFAULT_STARS_PER_LINE: usize = 3;

/// Upper bound (exclusive) for the seeds drawn when the user does not provide one.
pub const MAX_RANDOM_SEED: i64 = 2_147_483_647;
