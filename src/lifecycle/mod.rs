//! System startup, shutdown and tracing setup.

pub mod error;
pub mod registration_system;
pub mod tracing;

pub use error::*;
pub use registration_system::*;
pub use self::tracing::setup_tracing;
