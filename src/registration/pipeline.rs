//! # Registration Pipeline
//!
//! Sequences one registration: validation, client lookup, credit limit strategy,
//! eligibility check, persistence. Steps run one after another and the first failure
//! ends the call.
//!
//! The pipeline keeps no per-call state. Every call builds its own [`User`] draft, so one
//! pipeline can be shared (behind an `Arc`) between any number of concurrent callers.

use crate::clients::{ClientDirectory, PersistenceSink};
use crate::credit::StrategyRegistry;
use crate::model::{ClientId, RegistrationInput, User};
use crate::registration::{
    has_valid_email, has_valid_full_name, RegistrationError, RegistrationOutcome, Rejection,
    UserValidator,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct RegistrationPipeline {
    client_directory: Arc<dyn ClientDirectory>,
    persistence: Arc<dyn PersistenceSink>,
    validator: UserValidator,
    strategies: StrategyRegistry,
}

impl RegistrationPipeline {
    pub fn new(
        client_directory: Arc<dyn ClientDirectory>,
        persistence: Arc<dyn PersistenceSink>,
        validator: UserValidator,
        strategies: StrategyRegistry,
    ) -> Self {
        Self {
            client_directory,
            persistence,
            validator,
            strategies,
        }
    }

    /// Registers a user and reports whether the record was stored.
    ///
    /// `Ok(false)` is a rejection with no side effects. Collaborator failures come back
    /// as `Err`.
    pub async fn register_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: NaiveDate,
        client_id: ClientId,
    ) -> Result<bool, RegistrationError> {
        let input = RegistrationInput::new(first_name, last_name, email, date_of_birth, client_id);
        self.try_register(&input)
            .await
            .map(|outcome| outcome.is_registered())
    }

    /// Name, email and age checks only. No collaborator is contacted.
    pub fn is_registration_data_valid(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: NaiveDate,
    ) -> bool {
        has_valid_full_name(first_name, last_name)
            && has_valid_email(email)
            && self.validator.is_old_enough(date_of_birth)
    }

    /// Runs the full pipeline and reports why a registration was rejected.
    #[instrument(skip(self, input), fields(client_id = %input.client_id))]
    pub async fn try_register(
        &self,
        input: &RegistrationInput,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        if let Err(rejection) = self.validator.validate(input) {
            info!(reason = %rejection, "Registration rejected");
            return Ok(RegistrationOutcome::Rejected(rejection));
        }

        let client = self
            .client_directory
            .get_by_id(input.client_id)
            .await
            .inspect_err(|e| warn!(error = %e, "Client lookup failed"))?;

        let mut user = User::draft(input, client);
        let strategy = self.strategies.resolve(&user.client.name);
        debug!(
            classification = %user.client.name,
            strategy = strategy.name_requirement(),
            "Applying credit limit strategy"
        );
        let decision = strategy
            .compute_limit(&mut user)
            .await
            .inspect_err(|e| warn!(error = %e, "Credit limit lookup failed"))?;
        user.has_credit_limit = decision.has_credit_limit;
        user.credit_limit = decision.credit_limit;

        if self.validator.is_credit_ineligible(&user) {
            let rejection = Rejection::CreditLimitTooLow {
                limit: user.credit_limit,
            };
            info!(reason = %rejection, "Registration rejected");
            return Ok(RegistrationOutcome::Rejected(rejection));
        }

        let has_credit_limit = user.has_credit_limit;
        let credit_limit = user.credit_limit;
        let id = self
            .persistence
            .add(user)
            .await
            .inspect_err(|e| warn!(error = %e, "Persisting user failed"))?;
        info!(user_id = %id, has_credit_limit, credit_limit, "User registered");
        Ok(RegistrationOutcome::Registered(id))
    }
}

impl std::fmt::Debug for RegistrationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationPipeline")
            .field("validator", &self.validator)
            .field("strategies", &self.strategies)
            .finish_non_exhaustive()
    }
}
