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

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The disease state of a single Citizen
///
/// The full progression model is owned by the external infection machinery; the
/// vaccination allocator only ever reads `Susceptible`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub enum DiseaseStatus {
    Susceptible,
    /// The amount of steps (days) the citizen has been exposed for
    Exposed(u16),
    /// The amount of steps (days) the citizen has been infected for
    Infected(u16),
    Recovered,
}

impl DiseaseStatus {
    pub fn execute_time_step(
        status: &DiseaseStatus,
        disease_model: &DiseaseModel,
    ) -> DiseaseStatus {
        match status {
            DiseaseStatus::Susceptible => DiseaseStatus::Susceptible,
            DiseaseStatus::Exposed(time) => {
                if disease_model.exposed_time <= *time {
                    DiseaseStatus::Infected(0)
                } else {
                    DiseaseStatus::Exposed(time + 1)
                }
            }
            DiseaseStatus::Infected(time) => {
                if disease_model.infected_time <= *time {
                    DiseaseStatus::Recovered
                } else {
                    DiseaseStatus::Infected(time + 1)
                }
            }
            DiseaseStatus::Recovered => DiseaseStatus::Recovered,
        }
    }
}

impl Display for DiseaseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseStatus::Susceptible => write!(f, "Susceptible"),
            DiseaseStatus::Exposed(duration) => write!(f, "Exposed for {} days", duration),
            DiseaseStatus::Infected(duration) => write!(f, "Infected for {} days", duration),
            DiseaseStatus::Recovered => write!(f, "Recovered"),
        }
    }
}

/// The timing constants of the disease being simulated, in days
pub struct DiseaseModel {
    pub exposed_time: u16,
    pub infected_time: u16,
}

impl DiseaseModel {
    /// Creates a new disease model representative of COVID-19
    ///
    /// Exposure Time - 4 days
    /// Infected Time - 14 days
    pub fn covid() -> DiseaseModel {
        DiseaseModel {
            exposed_time: 4,
            infected_time: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::disease::{DiseaseModel, DiseaseStatus};

    #[test]
    fn exposed_citizen_progresses_to_recovery() {
        let disease = DiseaseModel::covid();
        let mut status = DiseaseStatus::Exposed(0);
        for _ in 0..disease.exposed_time + 1 {
            status = DiseaseStatus::execute_time_step(&status, &disease);
        }
        assert_eq!(
            status,
            DiseaseStatus::Infected(0),
            "Citizen should be infected after the exposure period"
        );
        for _ in 0..disease.infected_time + 1 {
            status = DiseaseStatus::execute_time_step(&status, &disease);
        }
        assert_eq!(
            status,
            DiseaseStatus::Recovered,
            "Citizen should recover after the infection period"
        );
    }
}
