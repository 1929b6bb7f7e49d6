//! Fleet configuration with documented constants
//!
//! All magic numbers used when generating and reporting on a fleet are
//! collected here. Nothing is read from disk or the environment; the only
//! runtime inputs are the three command-line counts.

use crate::core::types::GunModel;

/// Capacity below which a gun is reported as suspicious at construction.
///
/// Construction still succeeds below this value; see `GunRecord::validate`.
pub const RECOMMENDED_MIN_CAPACITY: u32 = 144;

/// Number of lowercase letters in a generated gun id
pub const ID_LENGTH: usize = 5;

/// Configuration for fleet generation and reporting
#[derive(Debug, Clone)]
pub struct FleetConfig {
    // === GENERATION ===
    /// Models a generated gun may be assigned, picked uniformly
    pub models: Vec<GunModel>,

    /// Inclusive bounds for a generated gun's capacity
    ///
    /// The lower bound sits just above `RECOMMENDED_MIN_CAPACITY`, so
    /// generated guns never trigger the construction warning.
    pub capacity_range: (u32, u32),

    /// Inclusive bounds for a generated gun's maximum dart distance
    pub range_range: (u32, u32),

    // === REPORTING ===
    /// Width of the dashed separator framing each report section
    pub separator_width: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            models: GunModel::ALL.to_vec(),
            capacity_range: (145, 200),
            range_range: (100, 200),
            separator_width: 50,
        }
    }
}

impl FleetConfig {
    /// The dashed line printed around each report section
    pub fn separator(&self) -> String {
        "-".repeat(self.separator_width)
    }
}
