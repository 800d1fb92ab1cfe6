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

use lazy_static::lazy_static;
use rand::distributions::Distribution;
use rand::distributions::Uniform;
use rand::{Rng, RngCore};
use serde::Serialize;
use uuid::Uuid;

use crate::disease::DiseaseStatus;
use crate::vaccination::{VaccinationStatus, VaccinationType};

lazy_static! {
    /// This is a random uniform distribution, for fast random generation
    static ref RANDOM_DISTRUBUTION: Uniform<f64> = Uniform::new_inclusive(0.0, 1.0);
}

#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Serialize)]
pub struct CitizenID {
    id: Uuid,
}

impl CitizenID {
    /// Generates an ID from the simulation RNG, so that a seeded run always
    /// produces the same set of IDs
    pub fn from_rng(rng: &mut dyn RngCore) -> CitizenID {
        CitizenID {
            id: Uuid::from_u128(rng.gen()),
        }
    }
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Display for CitizenID {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Citizen ID: {}", self.id)
    }
}

/// This is used to represent a single Citizen in the simulation
#[derive(Debug, Serialize, Clone)]
pub struct Citizen {
    /// A unique identifier for this Citizen
    id: CitizenID,
    /// Age in whole years, at the start of the run
    pub age: u8,
    /// Disease Status
    pub disease_status: DiseaseStatus,
    /// Whether this Citizen has received a first vaccination dose
    pub vaccination_status: VaccinationStatus,
    /// Whether this Citizen has received a booster dose
    pub booster_status: VaccinationStatus,
    /// The product the first dose was drawn from, reused for boosters
    pub vaccine_type: Option<VaccinationType>,
    /// The simulation day the first dose was given
    vaccination_day: Option<u32>,
    /// Whether this Citizen can currently be scheduled for a dose at all
    pub is_vaccinable: bool,
}

impl Citizen {
    /// Generates a new Citizen, drawing their willingness to be vaccinated
    pub fn generate(age: u8, vaccinable_percentage: f64, rng: &mut dyn RngCore) -> Citizen {
        Citizen {
            id: CitizenID::from_rng(rng),
            age,
            disease_status: DiseaseStatus::Susceptible,
            vaccination_status: VaccinationStatus::No,
            booster_status: VaccinationStatus::No,
            vaccine_type: None,
            vaccination_day: None,
            is_vaccinable: RANDOM_DISTRUBUTION.sample(rng) < vaccinable_percentage,
        }
    }
    /// Returns the ID of this Citizen
    pub fn id(&self) -> CitizenID {
        self.id
    }

    pub fn is_susceptible(&self) -> bool {
        self.disease_status == DiseaseStatus::Susceptible
    }
    pub fn is_vaccinated(&self) -> bool {
        self.vaccination_status == VaccinationStatus::Yes
    }
    pub fn is_boosted(&self) -> bool {
        self.booster_status == VaccinationStatus::Yes
    }
    pub fn vaccination_day(&self) -> Option<u32> {
        self.vaccination_day
    }
    /// How many days have passed since the first dose, if one was given
    pub fn days_since_vaccination(&self, current_day: u32) -> Option<u32> {
        self.vaccination_day
            .map(|day| current_day.saturating_sub(day))
    }

    /// Administers the first dose
    ///
    /// `vaccine_type` is `None` when no product share data exists for the day
    pub fn vaccinate(&mut self, current_day: u32, vaccine_type: Option<VaccinationType>) {
        self.vaccination_status = VaccinationStatus::Yes;
        self.vaccine_type = vaccine_type;
        self.vaccination_day = Some(current_day);
    }
    /// Administers a booster dose, keeping the product of the first dose
    pub fn boost(&mut self) {
        self.booster_status = VaccinationStatus::Yes;
    }
}

impl Display for Citizen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Citizen {} Aged {}, Has Disease Status {}, Vaccinated: {}, Boosted: {}",
            self.id, self.age, self.disease_status, self.vaccination_status, self.booster_status
        )
    }
}
