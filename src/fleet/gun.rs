//! A single dart gun and the things that can happen to it
//!
//! Firing and reloading never fail: every request resolves to an outcome
//! value describing what happened, and the caller decides how to report it.

use std::fmt;

use crate::core::config::RECOMMENDED_MIN_CAPACITY;
use crate::core::types::{GunId, GunModel};
use crate::fleet::random::RandomSource;

/// Problems noticed at construction. The gun is still built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionWarning {
    CapacityBelowMinimum { capacity: u32 },
    ZeroRange,
}

impl fmt::Display for ConstructionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionWarning::CapacityBelowMinimum { .. } => write!(
                f,
                "Error, capacity is less than {}",
                RECOMMENDED_MIN_CAPACITY
            ),
            ConstructionWarning::ZeroRange => write!(f, "Error, range is zero"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Warning(ConstructionWarning),
}

/// Result of a single trigger pull
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// No ammo left; nothing changed
    Empty,
    /// One dart spent. `distance` is cosmetic and not stored.
    Fired { ammo: u32, capacity: u32, distance: u32 },
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireOutcome::Empty => write!(f, "Gun is empty"),
            FireOutcome::Fired {
                ammo,
                capacity,
                distance,
            } => {
                writeln!(f, "Firing gun({}/{})", ammo, capacity)?;
                write!(f, "The dart flew {} miles away", distance)
            }
        }
    }
}

/// Result of a reload request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    AlreadyLoaded,
    /// Requested amount would overshoot capacity; rejected outright, not clamped
    Overflow {
        requested: u32,
        ammo: u32,
        capacity: u32,
    },
    Reloaded { ammo: u32, capacity: u32 },
}

impl ReloadOutcome {
    /// Overflow is the only outcome reported on the error stream
    pub fn is_error(&self) -> bool {
        matches!(self, ReloadOutcome::Overflow { .. })
    }
}

impl fmt::Display for ReloadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReloadOutcome::AlreadyLoaded => write!(f, "Gun is already loaded"),
            ReloadOutcome::Overflow { .. } => {
                write!(f, "Error: Amount is greater than capacity!")
            }
            ReloadOutcome::Reloaded { .. } => write!(f, "Reloading gun"),
        }
    }
}

/// One dart gun. Invariant: `ammo <= capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GunRecord {
    model: GunModel,
    id: GunId,
    range: u32,
    capacity: u32,
    ammo: u32,
}

impl GunRecord {
    /// Build a fully loaded gun.
    ///
    /// A capacity under the recommended minimum only logs a warning;
    /// construction always succeeds. Use `validate` to get the status.
    pub fn new(model: GunModel, id: GunId, range: u32, capacity: u32) -> Self {
        let gun = Self {
            model,
            id,
            range,
            capacity,
            ammo: capacity,
        };

        if let Validation::Warning(warning) = gun.validate() {
            tracing::warn!(id = %gun.id, "{}", warning);
        }

        gun
    }

    pub fn validate(&self) -> Validation {
        if self.capacity < RECOMMENDED_MIN_CAPACITY {
            Validation::Warning(ConstructionWarning::CapacityBelowMinimum {
                capacity: self.capacity,
            })
        } else if self.range == 0 {
            Validation::Warning(ConstructionWarning::ZeroRange)
        } else {
            Validation::Valid
        }
    }

    /// Spend one dart and roll a distance in `[1, range]`.
    ///
    /// A zero-range gun still spends the dart; it lands at distance 0.
    pub fn fire(&mut self, rng: &mut RandomSource) -> FireOutcome {
        if self.ammo == 0 {
            tracing::debug!(id = %self.id, "fire on empty gun");
            return FireOutcome::Empty;
        }

        let distance = rng.random_int(1, self.range).unwrap_or(0);
        self.ammo -= 1;

        tracing::debug!(id = %self.id, ammo = self.ammo, distance, "fired");
        FireOutcome::Fired {
            ammo: self.ammo,
            capacity: self.capacity,
            distance,
        }
    }

    pub fn reload(&mut self, amount: u32) -> ReloadOutcome {
        if self.ammo == self.capacity {
            tracing::debug!(id = %self.id, "reload on full gun");
            return ReloadOutcome::AlreadyLoaded;
        }

        match self.ammo.checked_add(amount) {
            Some(total) if total <= self.capacity => {
                self.ammo = total;
                tracing::debug!(id = %self.id, ammo = self.ammo, "reloaded");
                ReloadOutcome::Reloaded {
                    ammo: self.ammo,
                    capacity: self.capacity,
                }
            }
            _ => {
                tracing::debug!(
                    id = %self.id,
                    requested = amount,
                    ammo = self.ammo,
                    capacity = self.capacity,
                    "reload would exceed capacity"
                );
                ReloadOutcome::Overflow {
                    requested: amount,
                    ammo: self.ammo,
                    capacity: self.capacity,
                }
            }
        }
    }

    pub fn model(&self) -> GunModel {
        self.model
    }

    pub fn id(&self) -> &GunId {
        &self.id
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn is_loaded(&self) -> bool {
        self.ammo == self.capacity
    }
}

impl fmt::Display for GunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}", self.model)?;
        writeln!(f, "Ammo: {}/{}", self.ammo, self.capacity)?;
        writeln!(f, "Max range: {}", self.range)?;
        write!(f, "ID: {}", self.id)
    }
}
