use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Number of elements a block holds. Always at least 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Capacity(u32);

impl Capacity {
    pub const ONE: Capacity = Capacity(1);

    pub fn new(value: i64) -> Result<Capacity> {
        match u32::try_from(value) {
            Ok(n) if n > 0 => Ok(Capacity(n)),
            _ => Err(Error::InvalidCapacity { value }),
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for Capacity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Capacity> {
        Capacity::new(value)
    }
}

impl From<Capacity> for i64 {
    fn from(c: Capacity) -> i64 {
        c.0 as i64
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sizes that always get a block, whether requested or not.
pub const BASE_CAPACITIES: [Capacity; 3] = [Capacity(1), Capacity(2), Capacity(3)];

/// Every capacity one generation pass has to produce, kept sorted and free of
/// duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityRegistry {
    capacities: BTreeSet<Capacity>,
}

impl Default for CapacityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CapacityRegistry {
    pub fn new() -> CapacityRegistry {
        CapacityRegistry {
            capacities: BASE_CAPACITIES.into_iter().collect(),
        }
    }

    /// Returns `false` if the capacity was already registered.
    pub fn add(&mut self, value: i64) -> Result<bool> {
        let capacity = Capacity::new(value)?;
        Ok(self.capacities.insert(capacity))
    }

    pub fn extend<I: IntoIterator<Item = i64>>(&mut self, values: I) -> Result<()> {
        for value in values {
            self.add(value)?;
        }

        Ok(())
    }

    pub fn contains(&self, capacity: Capacity) -> bool {
        self.capacities.contains(&capacity)
    }

    pub fn len(&self) -> usize {
        self.capacities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capacities.is_empty()
    }

    /// Ascending order, which is the order blocks must be generated in.
    pub fn iter(&self) -> impl Iterator<Item = Capacity> + '_ {
        self.capacities.iter().copied()
    }
}
