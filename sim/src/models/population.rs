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

use serde::Serialize;

use crate::models::citizen::{Citizen, CitizenID};

/// The full set of Citizens being simulated
///
/// Citizens are kept in a `BTreeMap`, so iteration order is stable for a given
/// set of IDs and seeded runs stay reproducible
#[derive(Debug, Default, Serialize)]
pub struct Population {
    citizens: BTreeMap<CitizenID, Citizen>,
}

impl Population {
    pub fn add_citizen(&mut self, citizen: Citizen) {
        self.citizens.insert(citizen.id(), citizen);
    }
    pub fn len(&self) -> usize {
        self.citizens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.citizens.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Citizen> {
        self.citizens.values()
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Citizen> {
        self.citizens.values_mut()
    }
    pub fn get(&self, id: &CitizenID) -> Option<&Citizen> {
        self.citizens.get(id)
    }
    pub fn get_mut(&mut self, id: &CitizenID) -> Option<&mut Citizen> {
        self.citizens.get_mut(id)
    }

    pub fn susceptible_count(&self) -> u32 {
        self.iter().filter(|c| c.is_susceptible()).count() as u32
    }
    pub fn vaccinated_count(&self) -> u32 {
        self.iter().filter(|c| c.is_vaccinated()).count() as u32
    }
    pub fn boosted_count(&self) -> u32 {
        self.iter().filter(|c| c.is_boosted()).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::citizen::Citizen;
    use crate::models::population::Population;

    #[test]
    fn counts_track_vaccinations() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut population = Population::default();
        for age in 0..10 {
            population.add_citizen(Citizen::generate(age, 1.0, &mut rng));
        }
        assert_eq!(population.len(), 10);
        assert_eq!(population.vaccinated_count(), 0);
        let id = population.iter().next().expect("Population is empty").id();
        population
            .get_mut(&id)
            .expect("Citizen should exist")
            .vaccinate(0, None);
        assert_eq!(population.vaccinated_count(), 1);
        assert_eq!(population.boosted_count(), 0);
    }
}
