#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Price cannot be empty")]
    EmptyPrice,
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Count must be a positive number less than 1000, got {0}")]
    CountOutOfRange(u32),
    #[error("No more products to sell in this group")]
    SoldOut,
    #[error("Sell amount {requested} must be positive and not exceed {available}")]
    InvalidSellAmount { requested: u32, available: u32 },
}

/// Outcome of a failed challenge sequence. A rejection aborts the operation
/// before any state is touched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
    #[error("Operation cancelled")]
    Cancelled,
    #[error("Password cannot be empty")]
    RejectedEmpty,
    #[error("Incorrect password")]
    RejectedMismatch,
    #[error("Declined at confirmation")]
    CancelledAtConfirmation,
}

/// Umbrella error for every public ledger operation. Failures are
/// discriminated so the caller can surface them without downcasting.
#[derive(thiserror::Error, Debug)]
pub enum OpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Guard(#[from] GuardRejection),
    #[error("No product group at index {0}")]
    NoSuchGroup(usize),
    #[error("Group identifier alphabet exhausted past 'Z'")]
    IdSpaceExhausted,
    #[error("Failed to write to the store")]
    Persistence(#[from] sled::Error),
    #[error("Failed to encode inventory snapshot: {0}")]
    Encode(String),
}
