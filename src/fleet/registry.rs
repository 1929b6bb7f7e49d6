//! Ordered collection of guns owned by a single driver

use crate::core::error::{FleetError, Result};
use crate::core::types::GunId;
use crate::fleet::gun::GunRecord;
use crate::fleet::random::RandomSource;

/// Registry of guns in insertion order. Ids are unique within a registry.
#[derive(Debug, Default)]
pub struct GunRegistry {
    guns: Vec<GunRecord>,
}

impl GunRegistry {
    pub fn new() -> Self {
        Self { guns: Vec::new() }
    }

    pub fn contains(&self, id: &GunId) -> bool {
        self.guns.iter().any(|g| g.id() == id)
    }

    /// Draw identifiers until one is not already taken
    pub fn generate_unique_identifier(&self, rng: &mut RandomSource) -> GunId {
        loop {
            let id = rng.generate_identifier();
            if !self.contains(&id) {
                return id;
            }
            tracing::debug!(%id, "id collision, redrawing");
        }
    }

    pub fn add(&mut self, gun: GunRecord) -> Result<()> {
        if self.contains(gun.id()) {
            return Err(FleetError::DuplicateId(gun.id().clone()));
        }
        self.guns.push(gun);
        Ok(())
    }

    /// The gun holding the most ammo. Ties go to the earliest gun.
    pub fn most_ammo(&self) -> Result<&GunRecord> {
        self.guns
            .iter()
            .reduce(|best, gun| if gun.ammo() > best.ammo() { gun } else { best })
            .ok_or(FleetError::EmptyRegistry)
    }

    pub fn get(&self, index: usize) -> Option<&GunRecord> {
        self.guns.get(index)
    }

    pub fn len(&self) -> usize {
        self.guns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GunRecord> {
        self.guns.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GunRecord> {
        self.guns.iter_mut()
    }
}
