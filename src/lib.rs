//! Synthetic 2D point datasets: a "known" set of points carrying a value and
//! an "unknown" set of bare query locations, written as JSON arrays.

pub mod config;
pub mod error;
pub mod output;
pub mod point;
pub mod sampler;

use std::path::PathBuf;

use log::{info, warn};
use rand::Rng;

pub use config::{Config, ConfigOverrides, Preset, Uniqueness};
pub use error::{Collection, Error, Result};
pub use point::{KnownPoint, UnknownPoint};
pub use sampler::{generate_known, generate_unknown};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub known_count: usize,
    pub unknown_count: usize,
    pub known_path: PathBuf,
    pub unknown_path: PathBuf,
}

/// Generates both collections and writes them next to each other in
/// `config.output_dir`, overwriting existing files.
pub fn run<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Summary> {
    config.validate()?;

    if config.uniqueness != Uniqueness::Exact {
        warn!(
            "Using {:?} uniqueness, the domain may run out well before the requested counts",
            config.uniqueness
        );
    }

    info!(
        "Generating {} known and {} unknown points in [{}, {}]^2",
        config.known_count, config.unknown_count, config.coord_min, config.coord_max
    );

    let known = generate_known(config, rng)?;
    let known_path = config.known_points_path();
    output::write_points(&known_path, &known, config.json_indent)?;

    let unknown = generate_unknown(config, &known, rng)?;
    let unknown_path = config.unknown_points_path();
    output::write_points(&unknown_path, &unknown, config.json_indent)?;

    Ok(Summary {
        known_count: known.len(),
        unknown_count: unknown.len(),
        known_path,
        unknown_path,
    })
}
