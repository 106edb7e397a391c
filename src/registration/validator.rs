//! Field checks over registration input.
//!
//! The free functions are pure and use the fixed thresholds; [`UserValidator`] bundles
//! them with a [`Clock`] and configurable thresholds for the pipeline.

use crate::clock::Clock;
use crate::config::RegistrationConfig;
use crate::model::{RegistrationInput, User};
use crate::registration::Rejection;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::sync::Arc;

pub const MINIMUM_AGE: i32 = 21;
pub const MINIMUM_CREDIT_LIMIT: i64 = 500;

/// Both names must be non-empty.
pub fn has_valid_full_name(first_name: &str, last_name: &str) -> bool {
    !first_name.is_empty() && !last_name.is_empty()
}

/// Passes when the address contains `@` or `.`. Either one is enough.
pub fn has_valid_email(email: &str) -> bool {
    email.contains('@') || email.contains('.')
}

/// Whole years between `date_of_birth` and `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn is_at_least_21(date_of_birth: NaiveDate, now: NaiveDateTime) -> bool {
    age_on(date_of_birth, now.date()) >= MINIMUM_AGE
}

/// A granted limit below 500 disqualifies the user. Users without a limit never are.
pub fn is_credit_ineligible(user: &User) -> bool {
    user.has_credit_limit && user.credit_limit < MINIMUM_CREDIT_LIMIT
}

/// Validator used by the pipeline.
#[derive(Clone)]
pub struct UserValidator {
    clock: Arc<dyn Clock>,
    minimum_age: i32,
    minimum_credit_limit: i64,
}

impl UserValidator {
    /// A validator with the standard thresholds.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            minimum_age: MINIMUM_AGE,
            minimum_credit_limit: MINIMUM_CREDIT_LIMIT,
        }
    }

    pub fn from_config(clock: Arc<dyn Clock>, config: &RegistrationConfig) -> Self {
        Self {
            clock,
            minimum_age: config.minimum_age,
            minimum_credit_limit: config.minimum_credit_limit,
        }
    }

    pub fn is_old_enough(&self, date_of_birth: NaiveDate) -> bool {
        age_on(date_of_birth, self.clock.now().date()) >= self.minimum_age
    }

    pub fn is_credit_ineligible(&self, user: &User) -> bool {
        user.has_credit_limit && user.credit_limit < self.minimum_credit_limit
    }

    /// Runs the name, email and age checks in that order and reports the first failure.
    pub fn validate(&self, input: &RegistrationInput) -> Result<(), Rejection> {
        if !has_valid_full_name(&input.first_name, &input.last_name) {
            return Err(Rejection::InvalidName);
        }
        if !has_valid_email(&input.email) {
            return Err(Rejection::InvalidEmail);
        }
        if !self.is_old_enough(input.date_of_birth) {
            return Err(Rejection::Underage);
        }
        Ok(())
    }
}

impl std::fmt::Debug for UserValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserValidator")
            .field("now", &self.clock.now())
            .field("minimum_age", &self.minimum_age)
            .field("minimum_credit_limit", &self.minimum_credit_limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::Client;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        FixedClock::on(date(2021, 2, 16)).now()
    }

    #[test]
    fn test_full_name() {
        assert!(has_valid_full_name("Ada", "Lovelace"));
        assert!(!has_valid_full_name("", "Lovelace"));
        assert!(!has_valid_full_name("Ada", ""));
        assert!(!has_valid_full_name("", ""));
    }

    #[test]
    fn test_email_is_permissive() {
        assert!(has_valid_email("a@b"));
        assert!(has_valid_email("a.b"));
        assert!(!has_valid_email("ab"));
        assert!(!has_valid_email("andrecom"));
        assert!(!has_valid_email(""));
    }

    #[test]
    fn test_age_boundary() {
        assert!(is_at_least_21(date(2000, 2, 16), now()));
        assert!(!is_at_least_21(date(2000, 2, 17), now()));
        assert!(is_at_least_21(date(1950, 1, 1), now()));
    }

    #[test]
    fn test_age_on_counts_whole_years() {
        assert_eq!(age_on(date(2000, 2, 16), date(2021, 2, 16)), 21);
        assert_eq!(age_on(date(2000, 2, 17), date(2021, 2, 16)), 20);
        assert_eq!(age_on(date(2000, 3, 1), date(2021, 2, 28)), 20);
        assert_eq!(age_on(date(2000, 2, 29), date(2021, 3, 1)), 21);
    }

    #[test]
    fn test_credit_eligibility() {
        let input = RegistrationInput::new("Ada", "Lovelace", "a@b", date(1990, 1, 1), 1);
        let mut user = User::draft(&input, Client::new(1, "RandomClientName"));

        user.has_credit_limit = true;
        user.credit_limit = 499;
        assert!(is_credit_ineligible(&user));
        user.credit_limit = 500;
        assert!(!is_credit_ineligible(&user));

        user.has_credit_limit = false;
        user.credit_limit = 0;
        assert!(!is_credit_ineligible(&user));
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let validator = UserValidator::new(Arc::new(FixedClock::on(date(2021, 2, 16))));
        let input = |first: &str, email: &str, dob| {
            RegistrationInput::new(first, "Lovelace", email, dob, 1)
        };

        assert_eq!(validator.validate(&input("Ada", "a@b", date(2000, 2, 16))), Ok(()));
        assert_eq!(
            validator.validate(&input("", "ab", date(2010, 1, 1))),
            Err(Rejection::InvalidName)
        );
        assert_eq!(
            validator.validate(&input("Ada", "ab", date(2010, 1, 1))),
            Err(Rejection::InvalidEmail)
        );
        assert_eq!(
            validator.validate(&input("Ada", "a@b", date(2000, 2, 17))),
            Err(Rejection::Underage)
        );
    }

    #[test]
    fn test_config_thresholds() {
        let config = RegistrationConfig::default()
            .with_minimum_age(18)
            .with_minimum_credit_limit(1000);
        let validator =
            UserValidator::from_config(Arc::new(FixedClock::on(date(2021, 2, 16))), &config);

        assert!(validator.is_old_enough(date(2003, 2, 16)));

        let input = RegistrationInput::new("Ada", "Lovelace", "a@b", date(1990, 1, 1), 1);
        let mut user = User::draft(&input, Client::new(1, ""));
        user.has_credit_limit = true;
        user.credit_limit = 999;
        assert!(validator.is_credit_ineligible(&user));
    }
}
