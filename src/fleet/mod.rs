//! Dart gun fleet: generation, firing, reloading

pub mod gun;
pub mod operations;
pub mod random;
pub mod registry;

pub use gun::{ConstructionWarning, FireOutcome, GunRecord, ReloadOutcome, Validation};
pub use operations::{
    create_fleet, fire_all, reload_all, run, FireSummary, FleetPlan, FleetRun, ReloadSummary,
};
pub use random::RandomSource;
pub use registry::GunRegistry;
