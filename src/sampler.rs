//! Rejection sampling of the known and unknown point collections.
//!
//! Both generators draw integer cells uniformly from the configured square
//! and throw away candidates that collide with already accepted points. A
//! single point may be retried at most `max_attempts` times; past that the
//! domain is considered exhausted and the generator gives up.

use log::debug;
use rand::{distributions::Uniform, prelude::*};

use crate::{
    config::{Config, Uniqueness},
    error::{Collection, Error, Result},
    point::{KnownPoint, Occupancy, UnknownPoint},
};

/// Rounds `value` to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

struct CellSampler<'a> {
    coords: Uniform<i32>,
    rule: Uniqueness,
    max_attempts: u64,
    occupancy: &'a mut Occupancy,
}

impl<'a> CellSampler<'a> {
    fn new(config: &Config, occupancy: &'a mut Occupancy) -> Self {
        Self {
            coords: Uniform::new_inclusive(config.coord_min, config.coord_max),
            rule: config.uniqueness,
            max_attempts: config.max_attempts,
            occupancy,
        }
    }

    /// Draws until a free cell turns up, marks it taken and returns it.
    fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(i32, i32)> {
        for _ in 0..self.max_attempts {
            let x = self.coords.sample(rng);
            let y = self.coords.sample(rng);

            if !self.occupancy.collides(self.rule, x, y) {
                self.occupancy.insert(x, y);
                return Some((x, y));
            }
        }

        None
    }
}

fn check_capacity(collection: Collection, requested: usize, free_cells: u64) -> Result<()> {
    if requested as u64 > free_cells {
        return Err(Error::DomainExhausted {
            collection,
            accepted: 0,
            requested,
        });
    }
    Ok(())
}

/// Samples `config.known_count` points, each carrying a value drawn from
/// `[value_min, value_max]` and rounded to `value_precision` places.
pub fn generate_known<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Vec<KnownPoint>> {
    config.validate()?;
    check_capacity(Collection::Known, config.known_count, config.cells())?;

    let values = Uniform::new_inclusive(config.value_min, config.value_max);
    let (value_lo, value_hi) = config
        .value_grid()
        .ok_or_else(|| Error::InvalidConfig("empty value grid".to_string()))?;
    let mut occupancy = Occupancy::with_capacity(config.known_count);
    let mut cells = CellSampler::new(config, &mut occupancy);
    let mut points = Vec::with_capacity(config.known_count);

    while points.len() < config.known_count {
        let Some((x, y)) = cells.next(rng) else {
            return Err(Error::DomainExhausted {
                collection: Collection::Known,
                accepted: points.len(),
                requested: config.known_count,
            });
        };

        let value = round_to(values.sample(rng), config.value_precision)
            .clamp(value_lo, value_hi);

        points.push(KnownPoint { x, y, value });
    }

    debug!("Sampled {} known points", points.len());

    Ok(points)
}

/// Samples `config.unknown_count` points that collide with neither `known`
/// nor each other.
pub fn generate_unknown<R: Rng + ?Sized>(
    config: &Config,
    known: &[KnownPoint],
    rng: &mut R,
) -> Result<Vec<UnknownPoint>> {
    config.validate()?;

    let mut occupancy: Occupancy = known.iter().collect();
    let free_cells = config.cells().saturating_sub(occupancy.len() as u64);
    check_capacity(Collection::Unknown, config.unknown_count, free_cells)?;

    let mut cells = CellSampler::new(config, &mut occupancy);
    let mut points = Vec::with_capacity(config.unknown_count);

    while points.len() < config.unknown_count {
        let Some((x, y)) = cells.next(rng) else {
            return Err(Error::DomainExhausted {
                collection: Collection::Unknown,
                accepted: points.len(),
                requested: config.unknown_count,
            });
        };

        points.push(UnknownPoint { x, y });
    }

    debug!("Sampled {} unknown points", points.len());

    Ok(points)
}
