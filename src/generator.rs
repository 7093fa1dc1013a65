use crate::capacity::{Capacity, CapacityRegistry, BASE_CAPACITIES};
use crate::decompose::decompose;
use crate::error::{Error, Result};
use crate::layout::{compose, BlockSet};
use tracing::info;

/// Builds blocks one capacity at a time. Each new block can reuse every block
/// generated before it, so capacities have to arrive in ascending order.
pub struct Generator {
    blocks: BlockSet,
}

impl Generator {
    /// A generator that already holds the base blocks.
    pub fn new() -> Result<Generator> {
        let mut generator = Generator {
            blocks: BlockSet::new(),
        };

        for capacity in BASE_CAPACITIES {
            generator.extend(capacity)?;
        }

        Ok(generator)
    }

    /// Generates the block for `capacity`. Returns `false` if it already
    /// existed.
    pub fn extend(&mut self, capacity: Capacity) -> Result<bool> {
        if self.blocks.contains(capacity) {
            return Ok(false);
        }

        if let Some(last) = self.blocks.last() {
            if capacity < last {
                return Err(Error::OutOfOrder { capacity, last });
            }
        }

        let plan = decompose(capacity, &self.blocks)?;
        let block = compose(&plan);

        info!(%block, "generated block");

        self.blocks.insert(block)?;

        Ok(true)
    }

    pub fn blocks(&self) -> &BlockSet {
        &self.blocks
    }

    pub fn finish(self) -> BlockSet {
        self.blocks
    }
}

/// Runs one full generation pass over every capacity in the registry.
pub fn generate(registry: &CapacityRegistry) -> Result<BlockSet> {
    let mut generator = Generator::new()?;

    for capacity in registry.iter() {
        generator.extend(capacity)?;
    }

    Ok(generator.finish())
}
