use crate::capacity::Capacity;
use crate::error::{Error, Result};
use crate::layout::BlockSet;
use tracing::debug;

/// The sizes that fill a block after its leading element, in field order.
/// A size of 1 stands for a raw element, anything larger for a nested block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecompositionPlan {
    pub target: Capacity,
    pub parts: Vec<Capacity>,
}

impl DecompositionPlan {
    /// Elements covered by the plan, not counting the leading element.
    pub fn covered(&self) -> usize {
        self.parts.iter().map(|c| c.get()).sum()
    }
}

/// Splits `target - 1` elements into the largest already generated blocks
/// that fit, reusing the last choice for as long as it still fits.
pub fn decompose(target: Capacity, available: &BlockSet) -> Result<DecompositionPlan> {
    let mut parts = Vec::new();
    let mut remaining = target.get() - 1;
    let mut current: Option<Capacity> = None;

    while remaining > 0 {
        let choice = match current {
            Some(size) if size.get() <= remaining => size,
            _ => {
                let found = if remaining == 1 || available.is_empty() {
                    Some(Capacity::ONE)
                } else {
                    available.largest_fitting(remaining)
                };

                let Some(size) = found else {
                    return Err(Error::DecompositionInvariantViolation {
                        capacity: target,
                        remaining,
                        partial: parts,
                    });
                };

                debug!(capacity = %target, remaining, size = %size, "picked block");

                size
            }
        };

        parts.push(choice);
        remaining -= choice.get();
        current = Some(choice);
    }

    Ok(DecompositionPlan { target, parts })
}
