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

use std::cmp::min;
use std::fmt::{Debug, Display, Formatter};

use chrono::NaiveDate;
use log::{info, warn};
use rand::prelude::SliceRandom;
use rand::RngCore;

use crate::config::MAX_AGE;
use crate::error::SimError;
use crate::models::citizen::CitizenID;
use crate::models::population::Population;
use crate::vaccination::config::VaccinationConfig;
use crate::vaccination::random::RandomVaccination;
use crate::vaccination::rate_table::RateTable;
use crate::vaccination::{
    choose_vaccination_type, has_completed_campaign, is_campaign_eligible, VaccinationModel,
};

/// An age group with its day local tallies
///
/// `size` is counted once from the starting population; `vaccinated` is
/// recomputed from scratch at the start of every allocation call and never
/// persisted across days
struct AgeGroup {
    from: u8,
    to: u8,
    size: u32,
    vaccinated: u32,
}

impl Display for AgeGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AgeGroup{{from={}, to={}, size={}}}", self.from, self.to, self.size)
    }
}

impl Debug for AgeGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Allocates vaccinations from per age group coverage targets read from data
///
/// Each day the valid rate entry gives every age group a target coverage
/// fraction; the difference between the target and the group's current
/// vaccinated tally is handed out oldest age first. Citizens outside every
/// group are never vaccinated by this model
pub struct VaccinationFromData {
    /// All known age groups
    age_groups: Vec<AgeGroup>,
    /// Entries with first dose coverage for each day
    entries: RateTable,
    /// Entries with booster coverage for each day
    booster: RateTable,
    config: VaccinationConfig,
    /// Fallback to random vaccinations, when an explicit capacity is supplied
    random: RandomVaccination,
}

impl VaccinationFromData {
    pub fn new(
        entries: RateTable,
        booster: RateTable,
        config: VaccinationConfig,
    ) -> Result<VaccinationFromData, SimError> {
        if entries.groups() != booster.groups() {
            return Err(SimError::InvalidAgeGroup {
                message: String::from(
                    "First dose and booster tables must share the same age groups",
                ),
            });
        }
        let age_groups = entries
            .groups()
            .iter()
            .map(|group| AgeGroup {
                from: group.from,
                to: group.to,
                size: 0,
                vaccinated: 0,
            })
            .collect();
        Ok(VaccinationFromData {
            age_groups,
            entries,
            booster,
            random: RandomVaccination::new(config.clone()),
            config,
        })
    }

    fn find_age_group(&self, age: u8) -> Option<usize> {
        self.age_groups
            .iter()
            .position(|group| group.from <= age && age <= group.to)
    }
}

impl VaccinationModel for VaccinationFromData {
    fn init(&mut self, _rng: &mut dyn RngCore, population: &Population) {
        if population.is_empty() {
            warn!("Population is empty, no vaccinations will ever be allocated");
        }
        // collect population sizes
        for group in &mut self.age_groups {
            group.size = 0;
        }
        for citizen in population.iter() {
            if let Some(index) = self.find_age_group(citizen.age) {
                self.age_groups[index].size += 1;
            }
        }
        if self.age_groups.iter().all(|group| group.size == 0) {
            warn!("No Citizen falls into any age group, no vaccinations will ever be allocated");
        }
        info!("Using age-groups: {:?}", self.age_groups);
    }

    fn handle_vaccination(
        &mut self,
        rng: &mut dyn RngCore,
        population: &mut Population,
        re_vaccination: bool,
        available_vaccinations: Option<usize>,
        date: NaiveDate,
        current_day: u32,
    ) -> usize {
        // If an available capacity is given, the data is ignored and random vaccination executed
        if available_vaccinations.is_some() {
            return self.random.handle_vaccination(
                rng,
                population,
                re_vaccination,
                available_vaccinations,
                date,
                current_day,
            );
        }
        let table = if re_vaccination {
            &self.booster
        } else {
            &self.entries
        };
        let entry: Vec<f64> = match table.find_valid_entry(date) {
            Some(entry) => entry.to_vec(),
            // No vaccinations today
            None => return 0,
        };

        // reset counts
        for group in &mut self.age_groups {
            group.vaccinated = 0;
        }
        let mut per_age: Vec<Vec<CitizenID>> = vec![Vec::new(); MAX_AGE];
        for citizen in population.iter() {
            let index = match self.find_age_group(citizen.age) {
                Some(index) => index,
                None => continue,
            };
            if has_completed_campaign(citizen, re_vaccination) {
                self.age_groups[index].vaccinated += 1;
                continue;
            }
            if is_campaign_eligible(citizen, re_vaccination, current_day, &self.config)
                && (citizen.age as usize) < MAX_AGE
            {
                per_age[citizen.age as usize].push(citizen.id());
            }
        }

        let shares = self.config.type_shares_at(date).cloned();
        let mut total_vaccinations = 0;
        for (index, group) in self.age_groups.iter().enumerate() {
            let target =
                (group.size as f64 * entry[index]).round() as i64 - i64::from(group.vaccinated);
            if target <= 0 {
                continue;
            }
            let mut vaccinations_left = target as usize;
            // Groups may declare an open ended upper bound past the last bucket
            let mut age = min(group.to as usize, MAX_AGE - 1);
            while vaccinations_left > 0 && age >= group.from as usize {
                let candidates = &mut per_age[age];

                // list is shuffled to avoid eventual bias
                if candidates.len() > vaccinations_left {
                    candidates.shuffle(rng);
                }
                let take = min(candidates.len(), vaccinations_left);
                for id in candidates.drain(..take) {
                    if let Some(citizen) = population.get_mut(&id) {
                        if re_vaccination {
                            citizen.boost();
                        } else {
                            let vaccine_type = shares
                                .as_ref()
                                .and_then(|shares| choose_vaccination_type(shares, rng));
                            citizen.vaccinate(current_day, vaccine_type);
                        }
                    }
                    vaccinations_left -= 1;
                    total_vaccinations += 1;
                }
                if age == 0 {
                    break;
                }
                age -= 1;
            }
        }
        total_vaccinations
    }
}
