//! # User Onboarding
//!
//! > **Validate a new user, apply a client-specific credit limit policy, store the record.**
//!
//! This crate implements the registration decision pipeline: field validation, credit
//! limit strategy selection, and the eligibility check that together decide whether a
//! user is created. The stateful collaborators (client directory, credit bureau, user
//! store) run as in-process Tokio actors behind narrow async traits.
//!
//! ## 🚀 Core Concepts
//!
//! ### The decision
//! A call to [`register_user`](registration::RegistrationPipeline::register_user) either
//! stores exactly one user and returns `Ok(true)`, or rejects with `Ok(false)` and no side
//! effects. A failing collaborator is never masked: it comes back as
//! [`RegistrationError`](registration::RegistrationError).
//!
//! ### Strategies instead of branches
//! The client's `name` is a classification key. The [`StrategyRegistry`](credit::StrategyRegistry)
//! maps it to a [`CreditLimitStrategy`](credit::CreditLimitStrategy), falling back to the
//! default for unknown names. Registries are listed explicitly and refuse to build without
//! exactly one default.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each collaborator defines its own error type (`ClientError`, `CreditError`, `UserError`).
//! `RegistrationError` wraps them through `#[from]` so the pipeline propagates with `?`.
//!
//! ### 2. Concurrency Model
//! Each [`StoreActor`](framework::StoreActor) runs in its own task and processes requests
//! sequentially. The pipeline itself keeps no state between calls.
//!
//! ### 3. Observability
//! `tracing` everywhere, with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`registration`] - the pipeline, the validator and the outcome types
//! - [`credit`] - credit limit strategies and their registry
//! - [`clients`] - collaborator traits and the store-backed clients implementing them
//! - [`framework`] - the generic store actor, its client and a mock for tests
//! - [`client_store`], [`user_store`], [`credit_bureau`] - the concrete stores
//! - [`lifecycle`] - [`RegistrationSystem`](lifecycle::RegistrationSystem) wiring and shutdown
//! - [`clock`], [`config`], [`model`] - supporting types
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=info cargo test
//! ```

pub mod client_store;
pub mod clients;
pub mod clock;
pub mod config;
pub mod credit;
pub mod credit_bureau;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod registration;
pub mod user_store;
