pub mod context;
pub mod violation;

pub use context::{ValidationContext, ViolationSink};
pub use violation::{
    ADDITIONAL_DATA_NOT_ALLOWED, SLUG_SOURCE_NOT_EXISTS, SLUG_STILL_EXISTS, Violation,
    ViolationKind, Violations,
};
