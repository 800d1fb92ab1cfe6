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

use chrono::NaiveDate;
use rand::prelude::SliceRandom;
use rand::RngCore;

use crate::models::citizen::{Citizen, CitizenID};
use crate::models::population::Population;
use crate::vaccination::config::VaccinationConfig;
use crate::vaccination::{
    choose_vaccination_type, is_campaign_eligible, VaccinationModel,
};

/// Vaccinates a fixed number of eligible Citizens, chosen uniformly at random
///
/// Used directly when an external capacity is known but no empirical rates are,
/// and as the fallback of [`VaccinationFromData`](super::from_data::VaccinationFromData).
/// The draw is age blind: eligibility still applies, age group targets do not
pub struct RandomVaccination {
    config: VaccinationConfig,
}

impl RandomVaccination {
    pub fn new(config: VaccinationConfig) -> RandomVaccination {
        RandomVaccination { config }
    }
}

impl VaccinationModel for RandomVaccination {
    fn handle_vaccination(
        &mut self,
        rng: &mut dyn RngCore,
        population: &mut Population,
        re_vaccination: bool,
        available_vaccinations: Option<usize>,
        date: NaiveDate,
        current_day: u32,
    ) -> usize {
        let available = match available_vaccinations {
            Some(available) => available,
            // No capacity supplied means nothing to hand out
            None => return 0,
        };
        if available == 0 {
            return 0;
        }
        let mut candidates: Vec<CitizenID> = population
            .iter()
            .filter(|citizen| {
                is_campaign_eligible(citizen, re_vaccination, current_day, &self.config)
            })
            .map(Citizen::id)
            .collect();
        if candidates.len() > available {
            candidates.shuffle(rng);
            candidates.truncate(available);
        }
        let shares = self.config.type_shares_at(date).cloned();
        let mut total_vaccinations = 0;
        for id in candidates {
            if let Some(citizen) = population.get_mut(&id) {
                if re_vaccination {
                    citizen.boost();
                } else {
                    let vaccine_type = shares
                        .as_ref()
                        .and_then(|shares| choose_vaccination_type(shares, rng));
                    citizen.vaccinate(current_day, vaccine_type);
                }
                total_vaccinations += 1;
            }
        }
        total_vaccinations
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::citizen::Citizen;
    use crate::models::population::Population;
    use crate::vaccination::config::VaccinationConfig;
    use crate::vaccination::random::RandomVaccination;
    use crate::vaccination::VaccinationModel;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, 1).expect("Invalid test date")
    }

    #[test]
    fn vaccinates_exactly_the_available_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut population = Population::default();
        for _ in 0..50 {
            population.add_citizen(Citizen::generate(40, 1.0, &mut rng));
        }
        let mut model = RandomVaccination::new(VaccinationConfig::default());
        let count =
            model.handle_vaccination(&mut rng, &mut population, false, Some(5), date(), 0);
        assert_eq!(count, 5);
        assert_eq!(population.vaccinated_count(), 5);
    }

    #[test]
    fn capacity_larger_than_pool_drains_the_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut population = Population::default();
        for _ in 0..3 {
            population.add_citizen(Citizen::generate(40, 1.0, &mut rng));
        }
        let mut model = RandomVaccination::new(VaccinationConfig::default());
        let count =
            model.handle_vaccination(&mut rng, &mut population, false, Some(10), date(), 0);
        assert_eq!(count, 3, "Only eligible Citizens can be vaccinated");
    }

    #[test]
    fn no_capacity_means_no_vaccinations() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut population = Population::default();
        population.add_citizen(Citizen::generate(40, 1.0, &mut rng));
        let mut model = RandomVaccination::new(VaccinationConfig::default());
        assert_eq!(
            model.handle_vaccination(&mut rng, &mut population, false, None, date(), 0),
            0
        );
        assert_eq!(
            model.handle_vaccination(&mut rng, &mut population, false, Some(0), date(), 0),
            0
        );
        assert_eq!(population.vaccinated_count(), 0);
    }
}
