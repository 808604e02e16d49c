//! Generator configuration: the recognized options, the presets matching the
//! two stock dataset sizes, and loading overrides from a JSON file.

use std::{fs, path::Path, path::PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rule deciding whether a sampled `(x, y)` collides with an accepted point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Uniqueness {
    /// Reject only the identical coordinate pair.
    #[default]
    Exact,
    /// Reject when both coordinates appear in an accepted point, in either
    /// order. Mirrors `(1, 2)` onto `(2, 1)`.
    Unordered,
    /// Reject when either coordinate appears anywhere in an accepted point.
    SharedAxis,
}

/// Stock dataset sizes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 10000 known points, 1000 unknown points.
    #[default]
    Full,
    /// 300 known points, 10 unknown points.
    Small,
}

impl Preset {
    pub fn config(self) -> Config {
        match self {
            Preset::Full => Config::default(),
            Preset::Small => Config {
                known_count: 300,
                unknown_count: 10,
                ..Config::default()
            },
        }
    }
}

pub const MAX_VALUE_PRECISION: u32 = 15;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub known_count: usize,
    pub unknown_count: usize,
    pub coord_min: i32,
    pub coord_max: i32,
    pub value_min: f64,
    pub value_max: f64,
    /// Decimal places kept on known point values.
    pub value_precision: u32,
    pub uniqueness: Uniqueness,
    /// Consecutive rejected draws allowed before a single point is given up on.
    pub max_attempts: u64,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub known_points_fn: String,
    pub unknown_points_fn: String,
    pub json_indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            known_count: 10_000,
            unknown_count: 1_000,
            coord_min: -100,
            coord_max: 100,
            value_min: -100.0,
            value_max: 100.0,
            value_precision: 8,
            uniqueness: Uniqueness::Exact,
            max_attempts: 1_000_000,
            seed: None,
            output_dir: PathBuf::from("."),
            known_points_fn: "known_points.json".to_string(),
            unknown_points_fn: "unknown_points.json".to_string(),
            json_indent: 4,
        }
    }
}

/// A set of options to lay over a base [`Config`]. Every field is optional so
/// a config file or the command line can name only what it changes.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub known_count: Option<usize>,
    pub unknown_count: Option<usize>,
    pub coord_min: Option<i32>,
    pub coord_max: Option<i32>,
    pub value_min: Option<f64>,
    pub value_max: Option<f64>,
    pub value_precision: Option<u32>,
    pub uniqueness: Option<Uniqueness>,
    pub max_attempts: Option<u64>,
    pub seed: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub known_points_fn: Option<String>,
    pub unknown_points_fn: Option<String>,
    pub json_indent: Option<usize>,
}

impl ConfigOverrides {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.known_count {
            self.known_count = v;
        }
        if let Some(v) = overrides.unknown_count {
            self.unknown_count = v;
        }
        if let Some(v) = overrides.coord_min {
            self.coord_min = v;
        }
        if let Some(v) = overrides.coord_max {
            self.coord_max = v;
        }
        if let Some(v) = overrides.value_min {
            self.value_min = v;
        }
        if let Some(v) = overrides.value_max {
            self.value_max = v;
        }
        if let Some(v) = overrides.value_precision {
            self.value_precision = v;
        }
        if let Some(v) = overrides.uniqueness {
            self.uniqueness = v;
        }
        if let Some(v) = overrides.max_attempts {
            self.max_attempts = v;
        }
        if let Some(v) = overrides.output_dir {
            self.output_dir = v;
        }
        if let Some(v) = overrides.known_points_fn {
            self.known_points_fn = v;
        }
        if let Some(v) = overrides.unknown_points_fn {
            self.unknown_points_fn = v;
        }
        if let Some(v) = overrides.json_indent {
            self.json_indent = v;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.coord_min > self.coord_max {
            return Err(Error::InvalidConfig(format!(
                "coord_min ({}) is greater than coord_max ({})",
                self.coord_min, self.coord_max
            )));
        }

        if !self.value_min.is_finite() || !self.value_max.is_finite() {
            return Err(Error::InvalidConfig(
                "value bounds must be finite".to_string(),
            ));
        }

        if self.value_min > self.value_max {
            return Err(Error::InvalidConfig(format!(
                "value_min ({}) is greater than value_max ({})",
                self.value_min, self.value_max
            )));
        }

        if self.value_precision > MAX_VALUE_PRECISION {
            return Err(Error::InvalidConfig(format!(
                "value_precision ({}) exceeds {MAX_VALUE_PRECISION}",
                self.value_precision
            )));
        }

        if !(self.value_max - self.value_min).is_finite() {
            return Err(Error::InvalidConfig(format!(
                "value range [{}, {}] is too wide",
                self.value_min, self.value_max
            )));
        }

        if self.value_grid().is_none() {
            return Err(Error::InvalidConfig(format!(
                "no value with {} decimal places lies in [{}, {}]",
                self.value_precision, self.value_min, self.value_max
            )));
        }

        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        if self.known_points_fn.is_empty() || self.unknown_points_fn.is_empty() {
            return Err(Error::InvalidConfig(
                "output file names must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Smallest and largest values in `[value_min, value_max]` that carry at
    /// most `value_precision` decimal places.
    pub fn value_grid(&self) -> Option<(f64, f64)> {
        let scale = 10f64.powi(self.value_precision as i32);
        let lo = (self.value_min * scale).ceil();
        let hi = (self.value_max * scale).floor();

        if lo > hi {
            return None;
        }

        Some((lo / scale, hi / scale))
    }

    /// Distinct integer cells in the coordinate square.
    pub fn cells(&self) -> u64 {
        let side = (i64::from(self.coord_max) - i64::from(self.coord_min) + 1).max(0) as u64;
        side.saturating_mul(side)
    }

    pub fn known_points_path(&self) -> PathBuf {
        self.output_dir.join(&self.known_points_fn)
    }

    pub fn unknown_points_path(&self) -> PathBuf {
        self.output_dir.join(&self.unknown_points_fn)
    }
}
