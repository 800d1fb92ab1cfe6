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

use chrono::NaiveDate;
use enum_map::{Enum, EnumMap};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::models::citizen::Citizen;
use crate::models::population::Population;
use crate::vaccination::config::VaccinationConfig;

pub mod config;
pub mod from_data;
pub mod random;
pub mod rate_table;

/// The vaccine product classes reported in the public vaccination datasets
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Enum, EnumIter, Deserialize, Serialize)]
pub enum VaccinationType {
    /// Placeholder product, used when no share data exists for a day
    Generic,
    MRna,
    Vector,
    Subunit,
}

impl Default for VaccinationType {
    fn default() -> Self {
        VaccinationType::Generic
    }
}

impl Display for VaccinationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VaccinationType::Generic => write!(f, "Generic"),
            VaccinationType::MRna => write!(f, "mRNA"),
            VaccinationType::Vector => write!(f, "Vector"),
            VaccinationType::Subunit => write!(f, "Subunit"),
        }
    }
}

/// Whether a Citizen has received a given dose
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum VaccinationStatus {
    No,
    Yes,
}

impl Display for VaccinationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VaccinationStatus::No => write!(f, "No"),
            VaccinationStatus::Yes => write!(f, "Yes"),
        }
    }
}

/// The interface the daily simulation loop drives vaccinations through
///
/// `handle_vaccination` is invoked once per simulated day and campaign, and
/// returns the number of Citizens that received a dose during the call. All
/// randomness is drawn from the caller supplied generator, so that a run is
/// reproducible for a fixed seed
pub trait VaccinationModel {
    /// Called once before the first simulated day, with the starting population
    fn init(&mut self, _rng: &mut dyn RngCore, _population: &Population) {}

    /// Executes one day of the first dose (`re_vaccination == false`) or
    /// booster (`re_vaccination == true`) campaign
    ///
    /// When `available_vaccinations` is given, exactly that many doses are
    /// administered at random, ignoring any data driven rates
    fn handle_vaccination(
        &mut self,
        rng: &mut dyn RngCore,
        population: &mut Population,
        re_vaccination: bool,
        available_vaccinations: Option<usize>,
        date: NaiveDate,
        current_day: u32,
    ) -> usize;
}

/// Whether the Citizen already counts as fully covered by the given campaign
pub(crate) fn has_completed_campaign(citizen: &Citizen, re_vaccination: bool) -> bool {
    citizen.is_vaccinated() && (!re_vaccination || citizen.is_boosted())
}

/// Whether the Citizen can receive a dose from the given campaign today
///
/// Boosters additionally require the per product wait period to have elapsed
/// since the first dose
pub(crate) fn is_campaign_eligible(
    citizen: &Citizen,
    re_vaccination: bool,
    current_day: u32,
    config: &VaccinationConfig,
) -> bool {
    if !citizen.is_vaccinable || !citizen.is_susceptible() {
        return false;
    }
    if re_vaccination {
        if !citizen.is_vaccinated() || citizen.is_boosted() {
            return false;
        }
        let wait = config
            .params(citizen.vaccine_type.unwrap_or_default())
            .boost_wait_period;
        matches!(citizen.days_since_vaccination(current_day), Some(days) if days >= wait)
    } else {
        !citizen.is_vaccinated()
    }
}

/// Draws a vaccine product from the given share distribution
///
/// Returns `None` if every share is zero, rather than producing a garbage draw
pub fn choose_vaccination_type(
    shares: &EnumMap<VaccinationType, f64>,
    rng: &mut dyn RngCore,
) -> Option<VaccinationType> {
    let total: f64 = shares.iter().map(|(_, share)| *share).sum();
    if total <= 0.0 {
        return None;
    }
    let draw = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for (vaccine_type, share) in shares.iter() {
        cumulative += *share;
        if draw < cumulative {
            return Some(vaccine_type);
        }
    }
    // Floating point slack can push the draw past the last bucket
    shares
        .iter()
        .filter(|(_, share)| **share > 0.0)
        .map(|(vaccine_type, _)| vaccine_type)
        .last()
}

#[cfg(test)]
mod tests {
    use enum_map::enum_map;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use strum::IntoEnumIterator;

    use crate::vaccination::{choose_vaccination_type, VaccinationType};

    #[test]
    fn all_zero_shares_produce_no_type() {
        let mut rng = StdRng::seed_from_u64(0);
        let shares = enum_map! { _ => 0.0 };
        assert!(
            choose_vaccination_type(&shares, &mut rng).is_none(),
            "A distribution with no data should never assign a type"
        );
    }

    #[test]
    fn single_product_is_always_drawn() {
        let mut rng = StdRng::seed_from_u64(0);
        let shares = enum_map! {
            VaccinationType::MRna => 1.0,
            _ => 0.0,
        };
        for _ in 0..100 {
            assert_eq!(
                choose_vaccination_type(&shares, &mut rng),
                Some(VaccinationType::MRna)
            );
        }
    }

    #[test]
    fn unnormalized_shares_are_scaled() {
        // 700 / 200 doses rather than 0.78 / 0.22, the draw must still work
        let mut rng = StdRng::seed_from_u64(3);
        let shares = enum_map! {
            VaccinationType::MRna => 700.0,
            VaccinationType::Vector => 200.0,
            _ => 0.0,
        };
        let mut seen = Vec::new();
        for _ in 0..200 {
            let drawn = choose_vaccination_type(&shares, &mut rng)
                .expect("Non empty distribution should always draw");
            assert!(drawn == VaccinationType::MRna || drawn == VaccinationType::Vector);
            if !seen.contains(&drawn) {
                seen.push(drawn);
            }
        }
        assert_eq!(seen.len(), 2, "Both products should appear over 200 draws");
        // Every variant is reachable through the strum iterator
        assert_eq!(VaccinationType::iter().count(), 4);
    }
}
