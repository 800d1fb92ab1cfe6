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

use chrono::{Duration, NaiveDate};
use enum_map::{enum_map, EnumMap};
use log::debug;

use crate::config::DEFAULT_BOOST_WAIT_PERIOD;
use crate::vaccination::VaccinationType;

/// Per product configuration values
#[derive(Clone, Copy, Debug)]
pub struct VaccinationParams {
    /// Minimum days between the first dose and booster eligibility
    pub boost_wait_period: u32,
}

/// Holds the per product parameters, and the date keyed product share table
/// used to assign a vaccine type to newly vaccinated Citizens
#[derive(Clone, Debug)]
pub struct VaccinationConfig {
    params: EnumMap<VaccinationType, VaccinationParams>,
    type_shares: BTreeMap<NaiveDate, EnumMap<VaccinationType, f64>>,
}

impl Default for VaccinationConfig {
    fn default() -> Self {
        VaccinationConfig {
            params: enum_map! {
                _ => VaccinationParams {
                    boost_wait_period: DEFAULT_BOOST_WAIT_PERIOD,
                },
            },
            type_shares: BTreeMap::new(),
        }
    }
}

impl VaccinationConfig {
    pub fn params(&self, vaccine_type: VaccinationType) -> VaccinationParams {
        self.params[vaccine_type]
    }
    pub fn set_boost_wait_period(&mut self, vaccine_type: VaccinationType, days: u32) {
        self.params[vaccine_type].boost_wait_period = days;
    }

    /// Directly sets the product share distribution from the given date onwards
    pub fn set_type_share(&mut self, date: NaiveDate, shares: EnumMap<VaccinationType, f64>) {
        self.type_shares.insert(date, shares);
    }

    /// Returns the product share distribution valid on `date`
    /// (the most recent entry on or before it)
    pub fn type_shares_at(&self, date: NaiveDate) -> Option<&EnumMap<VaccinationType, f64>> {
        self.type_shares
            .range(..=date)
            .next_back()
            .map(|(_, shares)| shares)
    }

    /// Aggregates daily per product dose counts into normalized weekly shares,
    /// keyed by the start of each seven day window
    ///
    /// A week with a zero dose total contributes no entry at all, so the share
    /// table never holds NaN values
    pub fn set_weekly_shares(
        &mut self,
        daily_doses: &BTreeMap<NaiveDate, EnumMap<VaccinationType, f64>>,
    ) {
        let mut week_start = match daily_doses.keys().next() {
            Some(date) => *date,
            None => return,
        };
        let mut week_end = week_start + Duration::days(7);
        let mut week: EnumMap<VaccinationType, f64> = EnumMap::default();
        for (date, counts) in daily_doses {
            while *date >= week_end {
                self.flush_week(week_start, &week);
                week = EnumMap::default();
                week_start = week_end;
                week_end = week_start + Duration::days(7);
            }
            for (vaccine_type, count) in counts.iter() {
                week[vaccine_type] += *count;
            }
        }
        self.flush_week(week_start, &week);
    }

    fn flush_week(&mut self, week_start: NaiveDate, week: &EnumMap<VaccinationType, f64>) {
        let total: f64 = week.iter().map(|(_, count)| *count).sum();
        if total <= 0.0 {
            debug!("No product data for the week starting {}", week_start);
            return;
        }
        let mut shares: EnumMap<VaccinationType, f64> = EnumMap::default();
        for (vaccine_type, count) in week.iter() {
            shares[vaccine_type] = *count / total;
        }
        self.type_shares.insert(week_start, shares);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use enum_map::enum_map;

    use crate::vaccination::config::VaccinationConfig;
    use crate::vaccination::VaccinationType;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
    }

    #[test]
    fn weekly_shares_are_normalized() {
        let mut config = VaccinationConfig::default();
        let mut daily = BTreeMap::new();
        for day in 1..=7 {
            daily.insert(
                date(2021, 6, day),
                enum_map! {
                    VaccinationType::MRna => 70.0,
                    VaccinationType::Vector => 30.0,
                    _ => 0.0,
                },
            );
        }
        config.set_weekly_shares(&daily);
        let shares = config
            .type_shares_at(date(2021, 6, 10))
            .expect("Week starting at the first date should exist");
        assert!((shares[VaccinationType::MRna] - 0.7).abs() < 1e-9);
        assert!((shares[VaccinationType::Vector] - 0.3).abs() < 1e-9);
        assert_eq!(shares[VaccinationType::Subunit], 0.0);
    }

    #[test]
    fn zero_total_week_is_skipped() {
        let mut config = VaccinationConfig::default();
        let mut daily = BTreeMap::new();
        // First week has no doses at all, second week does
        daily.insert(date(2021, 6, 1), enum_map! { _ => 0.0 });
        daily.insert(
            date(2021, 6, 8),
            enum_map! { VaccinationType::MRna => 10.0, _ => 0.0 },
        );
        config.set_weekly_shares(&daily);
        assert!(
            config.type_shares_at(date(2021, 6, 7)).is_none(),
            "An all zero week must not produce a share entry"
        );
        let shares = config
            .type_shares_at(date(2021, 6, 8))
            .expect("Second week should have an entry");
        assert!((shares[VaccinationType::MRna] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lookup_uses_most_recent_entry_on_or_before() {
        let mut config = VaccinationConfig::default();
        config.set_type_share(
            date(2021, 1, 4),
            enum_map! { VaccinationType::Vector => 1.0, _ => 0.0 },
        );
        config.set_type_share(
            date(2021, 2, 1),
            enum_map! { VaccinationType::MRna => 1.0, _ => 0.0 },
        );
        assert!(config.type_shares_at(date(2021, 1, 3)).is_none());
        let january = config.type_shares_at(date(2021, 1, 20)).unwrap();
        assert_eq!(january[VaccinationType::Vector], 1.0);
        let february = config.type_shares_at(date(2021, 3, 1)).unwrap();
        assert_eq!(february[VaccinationType::MRna], 1.0);
    }
}
