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

use std::fmt::{Debug, Display, Formatter};

pub enum SimError {
    Default {
        message: String,
    },
    Simulation {
        message: String,
    },
    InitializationError {
        message: String,
    },
    /// An age group table is empty, or contains overlapping/inverted ranges
    InvalidAgeGroup {
        message: String,
    },
    /// A rate table entry does not line up with the declared age groups
    InvalidRateEntry {
        message: String,
        date: String,
    },
}

impl SimError {
    pub fn new_simulation_error(message: String) -> SimError {
        SimError::Simulation { message }
    }
}

impl Default for SimError {
    fn default() -> Self {
        SimError::Default {
            message: String::from("An error occurred!"),
        }
    }
}

impl Debug for SimError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::Default { message } => {
                write!(f, "Error: {}", message)
            }
            SimError::Simulation { message } => {
                write!(f, "Simulation Error Occurred: {}", message)
            }
            SimError::InitializationError { message } => {
                write!(f, "{} has not been Initialized", message)
            }
            SimError::InvalidAgeGroup { message } => {
                write!(f, "Invalid age group table: {}", message)
            }
            SimError::InvalidRateEntry { message, date } => {
                write!(f, "Invalid rate entry for date ({}): {}", date, message)
            }
        }
    }
}

impl Display for SimError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {:?}", self)
    }
}

impl std::error::Error for SimError {}
