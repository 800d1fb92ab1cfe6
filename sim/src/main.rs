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

extern crate dotenv;
#[macro_use]
extern crate log;
extern crate pretty_env_logger;

use chrono::NaiveDate;

use sim::simulator_builder::SimulatorBuilder;
use sim::vaccination::config::VaccinationConfig;
use sim::vaccination::rate_table::{AgeGroupDef, RateTable};

/// Quick demo entry point with fixed defaults; the `run` crate exposes the
/// full command line interface
fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    info!("Epidemic vaccination simulator");

    let start_date = NaiveDate::from_ymd_opt(2021, 6, 1).expect("Invalid start date");
    let groups = vec![
        AgeGroupDef::new(12, 17),
        AgeGroupDef::new(18, 59),
        AgeGroupDef::new(60, 99),
    ];
    let mut entries = RateTable::new(groups.clone())?;
    entries.add_entry(start_date, vec![0.1, 0.4, 0.6])?;
    let mut booster = RateTable::new(groups)?;
    booster.add_entry(start_date, vec![0.0, 0.05, 0.1])?;

    let builder = SimulatorBuilder::new(42, 10_000, start_date, 60);
    let mut simulator = builder.build(entries, booster, VaccinationConfig::default())?;
    simulator.simulate()?;
    info!("Finished");
    Ok(())
}
