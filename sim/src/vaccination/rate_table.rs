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
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::error::SimError;

/// An inclusive age range, fixed for the whole run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AgeGroupDef {
    pub from: u8,
    pub to: u8,
}

impl AgeGroupDef {
    pub fn new(from: u8, to: u8) -> AgeGroupDef {
        AgeGroupDef { from, to }
    }
    pub fn contains(&self, age: u8) -> bool {
        self.from <= age && age <= self.to
    }
    fn overlaps(&self, other: &AgeGroupDef) -> bool {
        self.from <= other.to && other.from <= self.to
    }
}

impl Display for AgeGroupDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// A sparse, date keyed series of target coverage fractions, one per age group
///
/// Entries are typically weekly; looking up a day returns the most recent entry
/// on or before it, and `None` when the table holds nothing for the day, which
/// is a normal outcome and not an error
#[derive(Clone, Debug)]
pub struct RateTable {
    groups: Vec<AgeGroupDef>,
    entries: BTreeMap<NaiveDate, Vec<f64>>,
}

impl RateTable {
    /// Validates the age groups: the table must be non empty, every range the
    /// right way round, and no two ranges overlapping. Declared order is kept
    pub fn new(groups: Vec<AgeGroupDef>) -> Result<RateTable, SimError> {
        if groups.is_empty() {
            return Err(SimError::InvalidAgeGroup {
                message: String::from("No age groups were defined"),
            });
        }
        for group in &groups {
            if group.from > group.to {
                return Err(SimError::InvalidAgeGroup {
                    message: format!("Age group {} is inverted", group),
                });
            }
        }
        for (index, group) in groups.iter().enumerate() {
            for other in &groups[index + 1..] {
                if group.overlaps(other) {
                    return Err(SimError::InvalidAgeGroup {
                        message: format!("Age groups {} and {} overlap", group, other),
                    });
                }
            }
        }
        Ok(RateTable {
            groups,
            entries: BTreeMap::new(),
        })
    }

    pub fn groups(&self) -> &[AgeGroupDef] {
        &self.groups
    }

    /// Adds the coverage fractions that apply from `date` onwards
    pub fn add_entry(&mut self, date: NaiveDate, rates: Vec<f64>) -> Result<(), SimError> {
        if rates.len() != self.groups.len() {
            return Err(SimError::InvalidRateEntry {
                message: format!(
                    "Expected {} rates but got {}",
                    self.groups.len(),
                    rates.len()
                ),
                date: date.to_string(),
            });
        }
        if let Some(rate) = rates.iter().find(|rate| !(0.0..=1.0).contains(*rate)) {
            return Err(SimError::InvalidRateEntry {
                message: format!("Coverage fraction {} is outside [0, 1]", rate),
                date: date.to_string(),
            });
        }
        self.entries.insert(date, rates);
        Ok(())
    }

    /// Returns the entry valid on `date`, or `None` if the table is empty or
    /// the date precedes the first entry
    pub fn find_valid_entry(&self, date: NaiveDate) -> Option<&[f64]> {
        self.entries
            .range(..=date)
            .next_back()
            .map(|(_, rates)| rates.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::vaccination::rate_table::{AgeGroupDef, RateTable};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
    }

    #[test]
    fn empty_group_table_is_rejected() {
        assert!(
            RateTable::new(Vec::new()).is_err(),
            "A rate table needs at least one age group"
        );
    }

    #[test]
    fn overlapping_groups_are_rejected() {
        let groups = vec![AgeGroupDef::new(12, 17), AgeGroupDef::new(17, 59)];
        assert!(
            RateTable::new(groups).is_err(),
            "Age 17 belongs to two groups"
        );
    }

    #[test]
    fn inverted_group_is_rejected() {
        assert!(RateTable::new(vec![AgeGroupDef::new(59, 18)]).is_err());
    }

    #[test]
    fn entry_width_must_match_groups() {
        let mut table =
            RateTable::new(vec![AgeGroupDef::new(12, 17), AgeGroupDef::new(18, 59)]).unwrap();
        assert!(table.add_entry(date(2021, 6, 1), vec![0.1]).is_err());
        assert!(table
            .add_entry(date(2021, 6, 1), vec![0.1, 1.2])
            .is_err());
        assert!(table.add_entry(date(2021, 6, 1), vec![0.1, 0.2]).is_ok());
    }

    #[test]
    fn lookup_is_most_recent_on_or_before() {
        let mut table = RateTable::new(vec![AgeGroupDef::new(18, 59)]).unwrap();
        table.add_entry(date(2021, 6, 7), vec![0.1]).unwrap();
        table.add_entry(date(2021, 6, 14), vec![0.25]).unwrap();

        assert!(
            table.find_valid_entry(date(2021, 6, 6)).is_none(),
            "Days before the first entry have no valid rates"
        );
        assert_eq!(table.find_valid_entry(date(2021, 6, 7)), Some(&[0.1][..]));
        assert_eq!(table.find_valid_entry(date(2021, 6, 13)), Some(&[0.1][..]));
        assert_eq!(
            table.find_valid_entry(date(2021, 7, 1)),
            Some(&[0.25][..]),
            "Later days fall back to the latest entry"
        );
    }
}
