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

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{DEFAULT_VACCINABLE_PERCENTAGE, STARTING_INFECTED_COUNT};
use crate::disease::{DiseaseModel, DiseaseStatus};
use crate::models::citizen::{Citizen, CitizenID};
use crate::models::population::Population;
use crate::simulator::Simulator;
use crate::vaccination::config::VaccinationConfig;
use crate::vaccination::from_data::VaccinationFromData;
use crate::vaccination::rate_table::RateTable;
use crate::vaccination::VaccinationModel;

/// Builds a synthetic population and wires the vaccination model up to it
///
/// Everything stochastic (ages, willingness, IDs, initial infections) is drawn
/// from one generator seeded with `seed`, so a run is fully reproducible
pub struct SimulatorBuilder {
    pub seed: u64,
    pub population_size: u32,
    pub vaccinable_percentage: f64,
    pub starting_infected: u32,
    pub start_date: NaiveDate,
    pub max_days: u32,
    /// Fixed daily dose capacity; when set the rate data is bypassed entirely
    pub daily_capacity: Option<usize>,
}

impl SimulatorBuilder {
    pub fn new(
        seed: u64,
        population_size: u32,
        start_date: NaiveDate,
        max_days: u32,
    ) -> SimulatorBuilder {
        SimulatorBuilder {
            seed,
            population_size,
            vaccinable_percentage: DEFAULT_VACCINABLE_PERCENTAGE,
            starting_infected: STARTING_INFECTED_COUNT,
            start_date,
            max_days,
            daily_capacity: None,
        }
    }

    pub fn build(
        self,
        entries: RateTable,
        booster: RateTable,
        config: VaccinationConfig,
    ) -> Result<Simulator> {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut population = Population::default();
        for _ in 0..self.population_size {
            let age = rng.gen_range(0..=100u8);
            population.add_citizen(Citizen::generate(
                age,
                self.vaccinable_percentage,
                &mut rng,
            ));
        }
        info!(
            "Built population of {} Citizens in {:?}",
            population.len(),
            start.elapsed()
        );
        apply_initial_infections(&mut population, self.starting_infected, &mut rng);

        let mut vaccination_model = VaccinationFromData::new(entries, booster, config)
            .context("Failed to construct the vaccination model")?;
        vaccination_model.init(&mut rng, &population);

        info!("Initialization completed in {:?}", start.elapsed());
        Ok(Simulator::new(
            population,
            Box::new(vaccination_model),
            DiseaseModel::covid(),
            self.start_date,
            self.daily_capacity,
            self.max_days,
            rng,
        ))
    }
}

/// Infects a handful of random Citizens, so a run starts with some disease
fn apply_initial_infections(population: &mut Population, count: u32, rng: &mut StdRng) {
    let ids: Vec<CitizenID> = population.iter().map(Citizen::id).collect();
    for id in ids.choose_multiple(rng, count as usize) {
        if let Some(citizen) = population.get_mut(id) {
            citizen.disease_status = DiseaseStatus::Infected(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::simulator_builder::SimulatorBuilder;
    use crate::vaccination::config::VaccinationConfig;
    use crate::vaccination::rate_table::{AgeGroupDef, RateTable};

    #[test]
    fn builder_produces_the_requested_population() {
        let groups = vec![AgeGroupDef::new(0, 100)];
        let entries = RateTable::new(groups.clone()).unwrap();
        let booster = RateTable::new(groups).unwrap();
        let mut builder = SimulatorBuilder::new(
            1,
            250,
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            5,
        );
        builder.starting_infected = 10;
        let simulator = builder
            .build(entries, booster, VaccinationConfig::default())
            .expect("Builder should succeed");
        assert_eq!(simulator.population().len(), 250);
        assert_eq!(
            simulator
                .population()
                .iter()
                .filter(|citizen| !citizen.is_susceptible())
                .count(),
            10,
            "Exactly the requested number of Citizens start infected"
        );
    }
}
