use crate::responsive::Category;

/// A structural problem in a [`Breakpoints`](crate::Breakpoints) table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreakpointError {
    #[error("{category} breakpoint is inverted: min width {min} exceeds max width {max}")]
    Inverted { category: Category, min: u32, max: u32 },
    #[error("{first} and {second} breakpoints overlap at width {width}")]
    Overlap {
        first: Category,
        second: Category,
        width: u32,
    },
    #[error("no breakpoint covers width {width}")]
    Gap { width: u32 },
}

/// Failure to load a breakpoint table.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    #[error("failed to parse breakpoint table: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] BreakpointError),
}
