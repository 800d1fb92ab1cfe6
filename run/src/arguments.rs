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

use anyhow::Context;
use chrono::NaiveDate;
use clap::{App, Arg};

pub struct Arguments {
    pub population_size: u32,
    pub seed: u64,
    pub days: u32,
    pub start_date: NaiveDate,
    pub vaccinable_percentage: f64,
    /// Fixed daily dose capacity; bypasses the data driven rates when given
    pub capacity: Option<usize>,
    pub output_file: String,
}

pub fn load_arguments() -> anyhow::Result<Arguments> {
    let matches = App::new("Epidemic Vaccination Campaign Simulation (EVCS)")
        .version("1.0")
        .author("Sam Ralph <sr1474@york.ac.uk")
        .about("Simulates a data driven vaccination campaign over a synthetic population")
        .arg(
            Arg::with_name("population")
                .short("p")
                .long("population")
                .help("The number of Citizens to generate")
                .require_equals(true)
                .takes_value(true)
                .default_value("10000"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .help("The seed for the random generator, fixed seeds give reproducible runs")
                .require_equals(true)
                .takes_value(true)
                .default_value("42"),
        )
        .arg(
            Arg::with_name("days")
                .long("days")
                .help("How many days to simulate")
                .require_equals(true)
                .takes_value(true)
                .default_value("180"),
        )
        .arg(
            Arg::with_name("start-date")
                .long("start-date")
                .help("The calendar date of simulation day zero (YYYY-MM-DD)")
                .require_equals(true)
                .takes_value(true)
                .default_value("2021-06-01"),
        )
        .arg(
            Arg::with_name("vaccinable")
                .long("vaccinable")
                .help("The fraction of Citizens willing/able to be vaccinated")
                .require_equals(true)
                .takes_value(true)
                .default_value("0.9"),
        )
        .arg(
            Arg::with_name("capacity")
                .long("capacity")
                .help("Fixed daily dose capacity, replaces the data driven rates entirely")
                .require_equals(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("Where to write the campaign statistics JSON")
                .require_equals(true)
                .takes_value(true)
                .default_value("recordings/campaign.json"),
        )
        .get_matches();

    let population_size = matches
        .value_of("population")
        .expect("Defaulted argument")
        .parse()
        .context("'population' is not a positive integer!")?;
    let seed = matches
        .value_of("seed")
        .expect("Defaulted argument")
        .parse()
        .context("'seed' is not an integer!")?;
    let days = matches
        .value_of("days")
        .expect("Defaulted argument")
        .parse()
        .context("'days' is not a positive integer!")?;
    let start_date = NaiveDate::parse_from_str(
        matches.value_of("start-date").expect("Defaulted argument"),
        "%Y-%m-%d",
    )
    .context("'start-date' is not a YYYY-MM-DD date!")?;
    let vaccinable_percentage: f64 = matches
        .value_of("vaccinable")
        .expect("Defaulted argument")
        .parse()
        .context("'vaccinable' is not a number!")?;
    let capacity = match matches.value_of("capacity") {
        Some(value) => Some(value.parse().context("'capacity' is not an integer!")?),
        None => None,
    };
    let output_file = matches
        .value_of("output")
        .expect("Defaulted argument")
        .to_string();

    Ok(Arguments {
        population_size,
        seed,
        days,
        start_date,
        vaccinable_percentage,
        capacity,
        output_file,
    })
}
