//! Lookup from client classification to credit limit strategy.

use crate::clients::CreditService;
use crate::credit::{
    CreditLimitStrategy, DefaultCreditLimitStrategy, ImportantClientStrategy, RegistryError,
    VeryImportantClientStrategy, DEFAULT_CLASSIFICATION,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps name requirements to strategies, falling back to the default one.
///
/// Built once through [`StrategyRegistry::builder`] and read-only afterwards.
pub struct StrategyRegistry {
    default: Box<dyn CreditLimitStrategy>,
    named: HashMap<String, Box<dyn CreditLimitStrategy>>,
}

impl StrategyRegistry {
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::default()
    }

    /// The three stock strategies: default, `ImportantClient` and `VeryImportantClient`.
    pub fn builtin(credit_service: Arc<dyn CreditService>) -> Result<Self, RegistryError> {
        Self::builder()
            .register(DefaultCreditLimitStrategy::new(credit_service.clone()))
            .register(ImportantClientStrategy::new(credit_service))
            .register(VeryImportantClientStrategy)
            .build()
    }

    /// Returns the strategy whose name requirement equals `classification`, or the default.
    pub fn resolve(&self, classification: &str) -> &dyn CreditLimitStrategy {
        match self.named.get(classification) {
            Some(strategy) => strategy.as_ref(),
            None => self.default.as_ref(),
        }
    }

    /// Number of registered strategies, default included.
    pub fn len(&self) -> usize {
        self.named.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.named.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("StrategyRegistry")
            .field("named", &names)
            .finish_non_exhaustive()
    }
}

/// Collects strategies; [`build`](Self::build) checks them.
#[derive(Default)]
pub struct StrategyRegistryBuilder {
    strategies: Vec<Box<dyn CreditLimitStrategy>>,
}

impl StrategyRegistryBuilder {
    pub fn register(mut self, strategy: impl CreditLimitStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn register_boxed(mut self, strategy: Box<dyn CreditLimitStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn build(self) -> Result<StrategyRegistry, RegistryError> {
        let mut default = None;
        let mut named: HashMap<String, Box<dyn CreditLimitStrategy>> = HashMap::new();

        for strategy in self.strategies {
            let requirement = strategy.name_requirement().to_string();
            if requirement == DEFAULT_CLASSIFICATION {
                if default.is_some() {
                    return Err(RegistryError::DuplicateDefault);
                }
                default = Some(strategy);
            } else if named.contains_key(&requirement) {
                return Err(RegistryError::DuplicateRequirement(requirement));
            } else {
                named.insert(requirement, strategy);
            }
        }

        let default = default.ok_or(RegistryError::MissingDefault)?;
        Ok(StrategyRegistry { default, named })
    }
}
