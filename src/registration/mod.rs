//! # User Registration
//!
//! The decision pipeline that turns raw input into a stored [`User`](crate::model::User)
//! or a rejection.
//!
//! ## Structure
//!
//! - [`validator`] - Field checks and the [`UserValidator`]
//! - [`pipeline`] - [`RegistrationPipeline`], the orchestrator
//! - [`outcome`] - [`RegistrationOutcome`] and [`Rejection`]
//! - [`error`] - [`RegistrationError`] for collaborator failures

pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod validator;

pub use error::*;
pub use outcome::*;
pub use pipeline::*;
pub use validator::*;
