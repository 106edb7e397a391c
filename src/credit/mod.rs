//! # Credit Limit Strategies
//!
//! Each client classification (the client's `name`) selects one [`CreditLimitStrategy`]
//! through the [`StrategyRegistry`]. Unknown classifications get the default strategy.
//!
//! | Classification | Result |
//! |---|---|
//! | anything else | `(true, base)` |
//! | `ImportantClient` | `(true, base * 2)` |
//! | `VeryImportantClient` | `(false, 0)`, bureau not queried |

pub mod error;
pub mod registry;
pub mod strategy;

pub use error::*;
pub use registry::*;
pub use strategy::*;
