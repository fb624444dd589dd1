//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod time;
pub mod todo;
pub mod validation;

pub use time::{utc_now_iso, TIMESTAMP_FORMAT};
pub use todo::TodoTitle;
pub use validation::ValidationError;
