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
use chrono::{Duration, NaiveDate};
use log::info;
use num_format::ToFormattedString;
use rand::rngs::StdRng;

use crate::config::{DEBUG_ITERATION_PRINT, NUMBER_FORMATTING};
use crate::disease::{DiseaseModel, DiseaseStatus};
use crate::models::population::Population;
use crate::statistics::{StatisticEntry, StatisticsRecorder};
use crate::vaccination::VaccinationModel;

/// Drives one vaccination campaign, one simulated day per step
///
/// Single threaded and synchronous: the allocator's mutable tallies and the
/// shared seeded RNG are not safe for concurrent stepping
pub struct Simulator {
    /// The total size of the population
    current_population: u32,
    population: Population,
    vaccination_model: Box<dyn VaccinationModel>,
    statistics_recorder: StatisticsRecorder,
    disease_model: DiseaseModel,
    start_date: NaiveDate,
    /// Externally known daily dose capacity; bypasses the rate data when set
    daily_capacity: Option<usize>,
    max_days: u32,
    rng: StdRng,
}

impl Simulator {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        population: Population,
        vaccination_model: Box<dyn VaccinationModel>,
        disease_model: DiseaseModel,
        start_date: NaiveDate,
        daily_capacity: Option<usize>,
        max_days: u32,
        rng: StdRng,
    ) -> Simulator {
        Simulator {
            current_population: population.len() as u32,
            population,
            vaccination_model,
            statistics_recorder: StatisticsRecorder::default(),
            disease_model,
            start_date,
            daily_capacity,
            max_days,
            rng,
        }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }
    pub fn statistics_recorder(&self) -> &StatisticsRecorder {
        &self.statistics_recorder
    }

    pub fn simulate(&mut self) -> Result<()> {
        let start_time = Instant::now();
        info!(
            "Starting simulation with {} Citizens...",
            self.current_population
                .to_formatted_string(&NUMBER_FORMATTING)
        );
        for day in 0..self.max_days {
            let entry = self.execute_time_step()?;
            if day as usize % DEBUG_ITERATION_PRINT == 0 {
                info!("{:?}       - {}", start_time.elapsed(), entry);
            }
        }
        info!(
            "Simulation of {} days completed in {:.2} seconds",
            self.max_days,
            start_time.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Executes one simulated day: disease tick, then the first dose campaign,
    /// then the booster campaign
    pub fn execute_time_step(&mut self) -> Result<StatisticEntry> {
        let day = self.statistics_recorder.current_day();
        let date = self.start_date + Duration::days(i64::from(day));

        for citizen in self.population.iter_mut() {
            citizen.disease_status =
                DiseaseStatus::execute_time_step(&citizen.disease_status, &self.disease_model);
        }
        self.statistics_recorder.next(date, &self.population);

        let first_doses = self.vaccination_model.handle_vaccination(
            &mut self.rng,
            &mut self.population,
            false,
            self.daily_capacity,
            date,
            day,
        );
        let booster_doses = self.vaccination_model.handle_vaccination(
            &mut self.rng,
            &mut self.population,
            true,
            self.daily_capacity,
            date,
            day,
        );
        self.statistics_recorder
            .record_doses(first_doses, booster_doses);
        self.statistics_recorder
            .last()
            .cloned()
            .context("No statistics entry was recorded for the day")
    }

    pub fn dump_statistics(&self, filename: &str) -> Result<()> {
        self.statistics_recorder.dump_to_file(filename)
    }
}
