use crate::clients::{ClientDirectoryClient, CreditBureauClient, UserStoreClient};
use crate::clock::{Clock, SystemClock};
use crate::config::RegistrationConfig;
use crate::credit::StrategyRegistry;
use crate::lifecycle::SystemError;
use crate::registration::{RegistrationPipeline, UserValidator};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for user registration.
///
/// `RegistrationSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store actors
/// - **Dependency Wiring**: Handing the store clients, the clock and the strategy
///   registry to the [`RegistrationPipeline`]
///
/// # Architecture
///
/// - **Client directory**: `Client` records by id
/// - **Credit bureau**: base credit limits by identity
/// - **User store**: accepted registrations
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use user_onboarding::lifecycle::RegistrationSystem;
/// use user_onboarding::model::{Client, ClientId};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = RegistrationSystem::new()?;
///     system
///         .client_directory
///         .register_client(Client::new(7, "VeryImportantClient"))
///         .await?;
///
///     let dob = NaiveDate::from_ymd_opt(1980, 5, 1).unwrap();
///     let stored = system
///         .pipeline
///         .register_user("Grace", "Hopper", "grace@navy.mil", dob, ClientId(7))
///         .await?;
///     assert!(stored);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct RegistrationSystem {
    pub pipeline: RegistrationPipeline,

    /// Seed and inspect clients.
    pub client_directory: ClientDirectoryClient,

    /// Read back stored users.
    pub user_store: UserStoreClient,

    /// Seed base credit limits.
    pub credit_bureau: CreditBureauClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegistrationSystem {
    /// Starts the system with the default configuration and the system clock.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Result<Self, SystemError> {
        Self::with_config(RegistrationConfig::default())
    }

    pub fn with_config(config: RegistrationConfig) -> Result<Self, SystemError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Starts the system with an injected clock.
    pub fn with_clock(
        config: RegistrationConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SystemError> {
        config.validate()?;

        // 1. Create actors
        let (client_actor, client_directory) = crate::client_store::new(config.store_buffer_size);
        let (user_actor, user_store) = crate::user_store::new(config.store_buffer_size);
        let (credit_actor, credit_bureau) = crate::credit_bureau::new(config.store_buffer_size);

        // 2. Wire the pipeline before anything is spawned
        let strategies = StrategyRegistry::builtin(Arc::new(credit_bureau.clone()))?;
        let pipeline = RegistrationPipeline::new(
            Arc::new(client_directory.clone()),
            Arc::new(user_store.clone()),
            UserValidator::from_config(clock, &config),
            strategies,
        );

        // 3. Start actors
        let handles = vec![
            tokio::spawn(client_actor.run()),
            tokio::spawn(user_actor.run()),
            tokio::spawn(credit_actor.run()),
        ];
        info!(
            minimum_age = config.minimum_age,
            minimum_credit_limit = config.minimum_credit_limit,
            "Registration system started"
        );

        Ok(Self {
            pipeline,
            client_directory,
            user_store,
            credit_bureau,
            handles,
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the pipeline and the clients closes every actor channel; each actor then
    /// finishes its loop. Clones of the clients held elsewhere keep their actor alive, so
    /// drop them before calling this.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.pipeline);
        drop(self.client_directory);
        drop(self.user_store);
        drop(self.credit_bureau);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::ActorFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
