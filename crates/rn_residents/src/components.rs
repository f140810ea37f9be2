use bevy::prelude::*;

/// Building eligible to receive residents, with a declared capacity.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct PotentialHome {
    /// Maximum number of residents this building houses.
    pub max_residents: u32,
    /// Residents currently living here, in no particular order.
    pub residents: Vec<Entity>,
}

impl PotentialHome {
    pub fn new(max_residents: u32) -> Self {
        Self {
            max_residents,
            residents: Vec::new(),
        }
    }

    pub fn has_vacancy(&self) -> bool {
        self.residents.len() < self.max_residents as usize
    }

    /// Record a new resident. Returns false if it was already recorded.
    pub fn add_resident(&mut self, resident: Entity) -> bool {
        if self.residents.contains(&resident) {
            return false;
        }
        self.residents.push(resident);
        true
    }
}

/// Links a resident to the building it lives in.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Home {
    pub building: Entity,
}
