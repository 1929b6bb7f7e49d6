//! Batch operations over a whole fleet
//!
//! Each operation writes its human-readable report to the given sinks:
//! status lines go to `out`, rejected reloads go to `err`. Per-gun
//! outcomes never abort a batch; only bad arguments and I/O failures do.

use std::io::Write;

use crate::core::config::FleetConfig;
use crate::core::error::{FleetError, Result};
use crate::core::types::GunModel;
use crate::fleet::gun::{FireOutcome, GunRecord, Validation};
use crate::fleet::random::RandomSource;
use crate::fleet::registry::GunRegistry;

/// Counts gathered while firing every gun
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireSummary {
    pub shots: u64,
    pub dry_fires: u64,
}

/// Counts gathered while reloading every gun
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadSummary {
    pub reloaded: usize,
    pub already_loaded: usize,
    pub rejected: usize,
}

/// The three command-line inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlan {
    pub guns: i64,
    pub fire_count: i64,
    pub reload_amount: i64,
}

/// What a full create/fire/reload run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetRun {
    pub created: usize,
    pub fired: FireSummary,
    pub reloaded: ReloadSummary,
}

fn non_negative(name: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| FleetError::InvalidArgument { name, value })
}

/// Generate `count` random guns, list them, and report the one with the most ammo.
///
/// An empty fleet skips the most-ammo query rather than failing.
pub fn create_fleet(
    registry: &mut GunRegistry,
    rng: &mut RandomSource,
    config: &FleetConfig,
    count: usize,
    out: &mut impl Write,
) -> Result<()> {
    let separator = config.separator();

    for _ in 0..count {
        let id = registry.generate_unique_identifier(rng);
        let model = rng
            .pick(&config.models)
            .copied()
            .unwrap_or(GunModel::Elite);
        let capacity = rng.random_int(config.capacity_range.0, config.capacity_range.1)?;
        let range = rng.random_int(config.range_range.0, config.range_range.1)?;

        let gun = GunRecord::new(model, id, range, capacity);
        if let Validation::Warning(warning) = gun.validate() {
            writeln!(out, "{}", warning)?;
            writeln!(out, "There may be a few problems with this object")?;
        }
        registry.add(gun)?;
    }

    tracing::debug!(count = registry.len(), "fleet created");

    for gun in registry.iter() {
        writeln!(out, "{}", separator)?;
        writeln!(out, "{}", gun)?;
        writeln!(out, "{}", separator)?;
    }

    if registry.is_empty() {
        writeln!(out, "No guns were created")?;
        return Ok(());
    }

    let best = registry.most_ammo()?;
    writeln!(out, "The gun with the most ammo is currently: ")?;
    writeln!(out, "{}", best)?;

    Ok(())
}

/// Pull every gun's trigger `times` times, in insertion order.
pub fn fire_all(
    registry: &mut GunRegistry,
    rng: &mut RandomSource,
    config: &FleetConfig,
    times: i64,
    out: &mut impl Write,
) -> Result<FireSummary> {
    let times = non_negative("times", times)?;
    let separator = config.separator();
    let mut summary = FireSummary::default();

    for gun in registry.iter_mut() {
        writeln!(out, "{}", separator)?;
        writeln!(out, "Firing: {} ({})", gun.model(), gun.id())?;
        for _ in 0..times {
            let outcome = gun.fire(rng);
            match outcome {
                FireOutcome::Fired { .. } => summary.shots += 1,
                FireOutcome::Empty => summary.dry_fires += 1,
            }
            writeln!(out, "{}", outcome)?;
        }
        writeln!(out, "{}", separator)?;
    }

    Ok(summary)
}

/// Reload every gun once by `amount`, in insertion order.
pub fn reload_all(
    registry: &mut GunRegistry,
    config: &FleetConfig,
    amount: i64,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ReloadSummary> {
    let amount = non_negative("amount", amount)?;
    // Anything past u32::MAX overflows every gun anyway
    let amount = u32::try_from(amount).unwrap_or(u32::MAX);
    let separator = config.separator();
    let mut summary = ReloadSummary::default();

    for gun in registry.iter_mut() {
        writeln!(out, "{}", separator)?;
        writeln!(out, "Reload: {} ({})", gun.model(), gun.id())?;

        let was_loaded = gun.is_loaded();
        let outcome = gun.reload(amount);
        if outcome.is_error() {
            summary.rejected += 1;
            writeln!(err, "{}", outcome)?;
        } else {
            if was_loaded {
                summary.already_loaded += 1;
            } else {
                summary.reloaded += 1;
            }
            writeln!(out, "{}", outcome)?;
        }

        writeln!(out, "{}", separator)?;
    }

    Ok(summary)
}

/// Create, fire, then reload, stopping at the first batch-level error.
pub fn run(
    plan: FleetPlan,
    registry: &mut GunRegistry,
    rng: &mut RandomSource,
    config: &FleetConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<FleetRun> {
    let count = non_negative("guns", plan.guns)?;
    let count = usize::try_from(count).map_err(|_| FleetError::InvalidArgument {
        name: "guns",
        value: plan.guns,
    })?;

    create_fleet(registry, rng, config, count, out)?;
    let fired = fire_all(registry, rng, config, plan.fire_count, out)?;
    let reloaded = reload_all(registry, config, plan.reload_amount, out, err)?;

    Ok(FleetRun {
        created: registry.len(),
        fired,
        reloaded,
    })
}
