//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by the
//! `RUST_LOG` environment variable. Module paths are hidden (`with_target(false)`); store
//! actors tag their events with a `record_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final size of each store
//! - **Registration**: one `try_register` span per call, carrying the `client_id`
//! - **Rejections**: logged at `info` with a `reason` field
//! - **Collaborator failures**: logged at `warn` with the error
//!
//! ## Usage
//!
//! ```bash
//! # Decisions and store inserts
//! RUST_LOG=info cargo test
//!
//! # Requests, drafts and strategy selection
//! RUST_LOG=debug cargo test
//! ```
//!
//! With `RUST_LOG=info` a successful registration reads:
//!
//! ```text
//! INFO Registration system started minimum_age=21 minimum_credit_limit=500
//! INFO Inserted record_type="User" key=user_1 size=1
//! INFO try_register: User registered user_id=user_1 has_credit_limit=true credit_limit=600
//! ```
//!
//! Email addresses are never recorded as span fields.

/// Installs the global subscriber. Later calls are no-ops, so every test may call it.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
