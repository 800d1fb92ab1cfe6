/*
 * Epidemic Vaccination Campaign Simulation (EVCS)
 * Copyright (c)  2022. Sam Ralph
 *
 * This file is part of EVCS.
 *
 * EVCS is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, version 3 of the License.
 *
 * EVCS is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with EVCS.  If not, see <https://www.gnu.org/licenses/>.
 *
 */

use num_format::Locale;

/// The exclusive upper bound on Citizen ages
///
/// Used to size the per age lookup buckets during allocation
pub const MAX_AGE: usize = 120;

/// How many Citizens are infected at the start of a run
pub const STARTING_INFECTED_COUNT: u32 = 10;

/// The chance a Citizen is willing/able to be vaccinated at all
pub const DEFAULT_VACCINABLE_PERCENTAGE: f64 = 0.9;

/// How many days a booster is withheld after the first dose, if no per type value is set
pub const DEFAULT_BOOST_WAIT_PERIOD: u32 = 150;

/// How often to print debug statements (in simulated days)
pub const DEBUG_ITERATION_PRINT: usize = 10;

pub const NUMBER_FORMATTING: Locale = Locale::en;
