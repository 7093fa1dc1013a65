use crate::capacity::Capacity;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid capacity {value}: capacities must be between 1 and 4294967295")]
    InvalidCapacity { value: i64 },

    #[error(
        "no available block fits the {remaining} remaining element(s) of Array{capacity} \
         (partial plan: {partial:?})"
    )]
    DecompositionInvariantViolation {
        capacity: Capacity,
        remaining: usize,
        partial: Vec<Capacity>,
    },

    #[error("layout of Array{capacity} is inconsistent: {reason}")]
    LayoutInvariantViolation { capacity: Capacity, reason: String },

    #[error("capacity {capacity} requested after {last}, blocks must be generated in ascending order")]
    OutOfOrder { capacity: Capacity, last: Capacity },
}

pub type Result<T> = std::result::Result<T, Error>;
