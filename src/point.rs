use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::Uniqueness;

/// Reference point with an attached value. Field order is the serialized order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnownPoint {
    pub x: i32,
    pub y: i32,
    pub value: f64,
}

/// Query location without a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnknownPoint {
    pub x: i32,
    pub y: i32,
}

/// Coordinates already taken by accepted points, indexed for the collision
/// check of each uniqueness predicate.
#[derive(Default, Debug)]
pub struct Occupancy {
    pairs: HashSet<(i32, i32)>,
    components: HashSet<i32>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: HashSet::with_capacity(capacity),
            components: HashSet::new(),
        }
    }

    /// Number of distinct cells taken.
    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn insert(&mut self, x: i32, y: i32) {
        self.pairs.insert((x, y));
        self.components.insert(x);
        self.components.insert(y);
    }

    /// True when `(x, y)` collides with an accepted point under `rule`.
    pub fn collides(&self, rule: Uniqueness, x: i32, y: i32) -> bool {
        match rule {
            Uniqueness::Exact => self.pairs.contains(&(x, y)),
            Uniqueness::Unordered => {
                // With x == y, a point holding x on either axis contains both.
                if x == y {
                    self.components.contains(&x)
                } else {
                    self.pairs.contains(&(x, y)) || self.pairs.contains(&(y, x))
                }
            }
            Uniqueness::SharedAxis => {
                self.components.contains(&x) || self.components.contains(&y)
            }
        }
    }
}

impl<'a> FromIterator<&'a KnownPoint> for Occupancy {
    fn from_iter<I: IntoIterator<Item = &'a KnownPoint>>(iter: I) -> Self {
        let mut occupancy = Occupancy::new();
        for p in iter {
            occupancy.insert(p.x, p.y);
        }
        occupancy
    }
}
