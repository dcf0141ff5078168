pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::{DocumentView, SpecificationService};
