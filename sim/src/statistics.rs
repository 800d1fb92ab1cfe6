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
use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use chrono::NaiveDate;
use log::info;
use num_format::ToFormattedString;
use serde::{Deserialize, Serialize};
use serde_json::to_writer;

use crate::config::NUMBER_FORMATTING;
use crate::models::population::Population;

/// Records one [`StatisticEntry`] per simulated day of the campaign
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StatisticsRecorder {
    entries: Vec<StatisticEntry>,
}

impl StatisticsRecorder {
    /// The day index the next entry will be recorded under
    pub fn current_day(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Opens the entry for a new day, snapshotting the population state
    pub fn next(&mut self, date: NaiveDate, population: &Population) {
        let entry = StatisticEntry {
            day: self.current_day(),
            date,
            susceptible: population.susceptible_count(),
            vaccinated: population.vaccinated_count(),
            boosted: population.boosted_count(),
            first_doses: 0,
            booster_doses: 0,
        };
        self.entries.push(entry);
    }

    /// Adds the doses administered today to the open entry
    pub fn record_doses(&mut self, first_doses: usize, booster_doses: usize) {
        let entry = self
            .entries
            .last_mut()
            .expect("Need to call next() to start a recording!");
        entry.first_doses += first_doses as u32;
        entry.booster_doses += booster_doses as u32;
        entry.vaccinated += first_doses as u32;
        entry.boosted += booster_doses as u32;
    }

    pub fn last(&self) -> Option<&StatisticEntry> {
        self.entries.last()
    }

    pub fn dump_to_file(&self, filename: &str) -> anyhow::Result<()> {
        let file = File::create(filename)
            .context(format!("Failed to create results file: {}", filename))?;
        let file_writer = BufWriter::new(file);
        to_writer(file_writer, &self.entries).context("Failed to write statistics to file!")?;
        info!("Dumped data to file: {}", filename);
        Ok(())
    }
}

/// A snapshot of the vaccination campaign per simulated day
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StatisticEntry {
    day: u32,
    date: NaiveDate,
    susceptible: u32,
    vaccinated: u32,
    boosted: u32,
    first_doses: u32,
    booster_doses: u32,
}

impl StatisticEntry {
    pub fn day(&self) -> u32 {
        self.day
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn susceptible(&self) -> u32 {
        self.susceptible
    }
    pub fn vaccinated(&self) -> u32 {
        self.vaccinated
    }
    pub fn boosted(&self) -> u32 {
        self.boosted
    }
    pub fn first_doses(&self) -> u32 {
        self.first_doses
    }
    pub fn booster_doses(&self) -> u32 {
        self.booster_doses
    }
}

impl Display for StatisticEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Day: {: >4} ({}), Susceptible: {: >10}, Vaccinated: {: >10}, Boosted: {: >10}, Doses Today: {: >6} first, {: >6} booster",
            self.day,
            self.date,
            self.susceptible.to_formatted_string(&NUMBER_FORMATTING),
            self.vaccinated.to_formatted_string(&NUMBER_FORMATTING),
            self.boosted.to_formatted_string(&NUMBER_FORMATTING),
            self.first_doses.to_formatted_string(&NUMBER_FORMATTING),
            self.booster_doses.to_formatted_string(&NUMBER_FORMATTING),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::citizen::Citizen;
    use crate::models::population::Population;
    use crate::statistics::StatisticsRecorder;

    #[test]
    fn doses_accumulate_into_the_open_day() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut population = Population::default();
        for _ in 0..20 {
            population.add_citizen(Citizen::generate(40, 1.0, &mut rng));
        }
        let mut recorder = StatisticsRecorder::default();
        assert_eq!(recorder.current_day(), 0);
        recorder.next(
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            &population,
        );
        recorder.record_doses(3, 1);
        let entry = recorder.last().expect("An entry was just started");
        assert_eq!(entry.first_doses(), 3);
        assert_eq!(entry.booster_doses(), 1);
        assert_eq!(entry.vaccinated(), 3);
        assert_eq!(recorder.current_day(), 1);
    }
}
