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

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use enum_map::enum_map;
use log::info;

use sim::simulator_builder::SimulatorBuilder;
use sim::vaccination::config::VaccinationConfig;
use sim::vaccination::rate_table::{AgeGroupDef, RateTable};
use sim::vaccination::VaccinationType;

mod arguments;

/// Builds a weekly ramping coverage series for a demonstration run
///
/// Real campaigns feed the tables from external public health data; that
/// ingestion lives outside this repository
fn demo_rate_tables(start_date: NaiveDate, days: u32) -> anyhow::Result<(RateTable, RateTable)> {
    let groups = vec![
        AgeGroupDef::new(12, 17),
        AgeGroupDef::new(18, 59),
        AgeGroupDef::new(60, 99),
    ];
    // Coverage climbs each week towards a per group ceiling, oldest groups fastest
    let first_ceilings = [0.65, 0.85, 0.95];
    let first_increments = [0.02, 0.035, 0.05];
    let booster_ceilings = [0.3, 0.55, 0.8];
    let booster_increments = [0.015, 0.025, 0.04];
    // Boosters only start ramping up half a year into the campaign
    let booster_start_week = 26u32;

    let mut entries = RateTable::new(groups.clone())?;
    let mut booster = RateTable::new(groups)?;
    for week in 0..=(days / 7) {
        let date = start_date + Duration::days(i64::from(week) * 7);
        let first_rates = first_ceilings
            .iter()
            .zip(first_increments.iter())
            .map(|(ceiling, increment)| (increment * f64::from(week)).min(*ceiling))
            .collect();
        entries.add_entry(date, first_rates)?;
        let booster_week = week.saturating_sub(booster_start_week);
        let booster_rates = booster_ceilings
            .iter()
            .zip(booster_increments.iter())
            .map(|(ceiling, increment)| (increment * f64::from(booster_week)).min(*ceiling))
            .collect();
        booster.add_entry(date, booster_rates)?;
    }
    Ok((entries, booster))
}

/// Synthetic daily product counts, aggregated into weekly shares by the config
fn demo_vaccination_config(start_date: NaiveDate, days: u32) -> VaccinationConfig {
    let mut daily_doses = BTreeMap::new();
    for day in 0..days {
        let date = start_date + Duration::days(i64::from(day));
        // The vector product is phased out over the run
        let vector = if day < days / 2 { 250.0 } else { 50.0 };
        daily_doses.insert(
            date,
            enum_map! {
                VaccinationType::MRna => 700.0,
                VaccinationType::Vector => vector,
                VaccinationType::Subunit => 25.0,
                VaccinationType::Generic => 0.0,
            },
        );
    }
    let mut config = VaccinationConfig::default();
    config.set_weekly_shares(&daily_doses);
    config
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    pretty_env_logger::init_timed();
    let arguments = arguments::load_arguments()?;
    info!(
        "Simulating a {} day campaign over {} Citizens (seed {})",
        arguments.days, arguments.population_size, arguments.seed
    );

    let (entries, booster) = demo_rate_tables(arguments.start_date, arguments.days)?;
    let config = demo_vaccination_config(arguments.start_date, arguments.days);

    let mut builder = SimulatorBuilder::new(
        arguments.seed,
        arguments.population_size,
        arguments.start_date,
        arguments.days,
    );
    builder.vaccinable_percentage = arguments.vaccinable_percentage;
    builder.daily_capacity = arguments.capacity;

    let mut simulator = builder.build(entries, booster, config)?;
    simulator.simulate()?;

    if let Some(parent) = Path::new(&arguments.output_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create output directory {:?}", parent))?;
        }
    }
    simulator.dump_statistics(&arguments.output_file)?;
    info!("Finished");
    Ok(())
}
