//! Credit limit policies, one per client classification.

use crate::clients::CreditService;
use crate::credit_bureau::CreditError;
use crate::model::User;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Name requirement of the fallback strategy.
pub const DEFAULT_CLASSIFICATION: &str = "";
pub const IMPORTANT_CLIENT: &str = "ImportantClient";
pub const VERY_IMPORTANT_CLIENT: &str = "VeryImportantClient";

/// The credit fields a strategy decided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditDecision {
    pub has_credit_limit: bool,
    pub credit_limit: i64,
}

impl CreditDecision {
    pub fn limited(credit_limit: i64) -> Self {
        Self {
            has_credit_limit: true,
            credit_limit,
        }
    }

    pub fn unlimited() -> Self {
        Self {
            has_credit_limit: false,
            credit_limit: 0,
        }
    }
}

/// A policy computing whether, and how much, credit limit a user receives.
///
/// Strategies may touch the draft while they run, but the pipeline applies the returned
/// [`CreditDecision`] afterwards, so the decision is what counts.
#[async_trait]
pub trait CreditLimitStrategy: Send + Sync {
    /// Client classification this strategy serves. The empty string marks the default.
    fn name_requirement(&self) -> &str;

    async fn compute_limit(&self, user: &mut User) -> Result<CreditDecision, CreditError>;
}

async fn query_base_limit(
    credit_service: &dyn CreditService,
    user: &mut User,
) -> Result<i64, CreditError> {
    user.has_credit_limit = true;
    let base = credit_service
        .get_credit_limit(&user.first_name, &user.surname, user.date_of_birth)
        .await?;
    if base < 0 {
        return Err(CreditError::NegativeLimit {
            identity: format!(
                "{} {} ({})",
                user.first_name, user.surname, user.date_of_birth
            ),
            limit: base,
        });
    }
    debug!(base, "Base credit limit");
    Ok(base)
}

/// Grants the bureau's base limit as-is.
pub struct DefaultCreditLimitStrategy {
    credit_service: Arc<dyn CreditService>,
}

impl DefaultCreditLimitStrategy {
    pub fn new(credit_service: Arc<dyn CreditService>) -> Self {
        Self { credit_service }
    }
}

#[async_trait]
impl CreditLimitStrategy for DefaultCreditLimitStrategy {
    fn name_requirement(&self) -> &str {
        DEFAULT_CLASSIFICATION
    }

    async fn compute_limit(&self, user: &mut User) -> Result<CreditDecision, CreditError> {
        let base = query_base_limit(self.credit_service.as_ref(), user).await?;
        Ok(CreditDecision::limited(base))
    }
}

/// Doubles the bureau's base limit.
pub struct ImportantClientStrategy {
    credit_service: Arc<dyn CreditService>,
}

impl ImportantClientStrategy {
    pub fn new(credit_service: Arc<dyn CreditService>) -> Self {
        Self { credit_service }
    }
}

#[async_trait]
impl CreditLimitStrategy for ImportantClientStrategy {
    fn name_requirement(&self) -> &str {
        IMPORTANT_CLIENT
    }

    async fn compute_limit(&self, user: &mut User) -> Result<CreditDecision, CreditError> {
        let base = query_base_limit(self.credit_service.as_ref(), user).await?;
        Ok(CreditDecision::limited(base.saturating_mul(2)))
    }
}

/// No limit at all; the bureau is never asked.
#[derive(Debug, Default)]
pub struct VeryImportantClientStrategy;

#[async_trait]
impl CreditLimitStrategy for VeryImportantClientStrategy {
    fn name_requirement(&self) -> &str {
        VERY_IMPORTANT_CLIENT
    }

    async fn compute_limit(&self, _user: &mut User) -> Result<CreditDecision, CreditError> {
        Ok(CreditDecision::unlimited())
    }
}
