use chrono::NaiveDate;
use std::sync::Arc;
use user_onboarding::clients::{ClientDirectoryClient, CreditBureauClient, UserStoreClient};
use user_onboarding::clock::FixedClock;
use user_onboarding::credit::StrategyRegistry;
use user_onboarding::framework::mock::MockStore;
use user_onboarding::framework::StoreError;
use user_onboarding::model::{
    Client, ClientId, CreditIdentity, CreditProfile, RegistrationInput, User, UserId,
};
use user_onboarding::registration::{
    RegistrationError, RegistrationOutcome, RegistrationPipeline, Rejection, UserValidator,
};
use user_onboarding::user_store::UserError;

/// Real pipeline with every store mocked.
///
/// Each mock answers only the requests queued on it, so a collaborator that must not be
/// contacted simply gets no expectations and `verify()` catches any call.
struct Harness {
    clients: MockStore<Client>,
    credit: MockStore<CreditProfile>,
    users: MockStore<User>,
}

impl Harness {
    fn new() -> Self {
        Self {
            clients: MockStore::new(),
            credit: MockStore::new(),
            users: MockStore::new(),
        }
    }

    fn pipeline(&self) -> RegistrationPipeline {
        let credit_service = Arc::new(CreditBureauClient::new(self.credit.client()));
        RegistrationPipeline::new(
            Arc::new(ClientDirectoryClient::new(self.clients.client())),
            Arc::new(UserStoreClient::new(self.users.client())),
            UserValidator::new(Arc::new(FixedClock::on(date(2021, 2, 16)))),
            StrategyRegistry::builtin(credit_service).unwrap(),
        )
    }

    fn expect_client(&mut self, name: &str) {
        self.clients
            .expect_get(ClientId(1))
            .return_ok(Some(Client::new(1, name)));
    }

    fn expect_base_limit(&mut self, limit: i64) {
        let identity = CreditIdentity::new("Ada", "Lovelace", dob());
        self.credit
            .expect_get(identity.clone())
            .return_ok(Some(CreditProfile::new(identity, limit)));
    }

    fn verify(&self) {
        self.clients.verify();
        self.credit.verify();
        self.users.verify();
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dob() -> NaiveDate {
    date(1990, 12, 10)
}

fn ada() -> RegistrationInput {
    RegistrationInput::new("Ada", "Lovelace", "ada@example.com", dob(), 1)
}

#[tokio::test]
async fn test_default_strategy_grants_base_limit() {
    let mut h = Harness::new();
    h.expect_client("RandomClientName");
    h.expect_base_limit(600);
    h.users.expect_insert().return_ok(UserId(1));

    let outcome = h.pipeline().try_register(&ada()).await.unwrap();
    assert_eq!(outcome, RegistrationOutcome::Registered(UserId(1)));

    let stored = h.users.take_inserted();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, None);
    assert_eq!(stored[0].email, "ada@example.com");
    assert_eq!((stored[0].has_credit_limit, stored[0].credit_limit), (true, 600));
    h.verify();
}

#[tokio::test]
async fn test_important_client_doubles_limit() {
    let mut h = Harness::new();
    h.expect_client("ImportantClient");
    h.expect_base_limit(600);
    h.users.expect_insert().return_ok(UserId(1));

    assert!(h
        .pipeline()
        .register_user("Ada", "Lovelace", "ada@example.com", dob(), ClientId(1))
        .await
        .unwrap());

    let stored = h.users.take_inserted();
    assert_eq!((stored[0].has_credit_limit, stored[0].credit_limit), (true, 1200));
    h.verify();
}

#[tokio::test]
async fn test_very_important_client_skips_credit_service() {
    let mut h = Harness::new();
    h.expect_client("VeryImportantClient");
    h.users.expect_insert().return_ok(UserId(1));

    assert!(h.pipeline().try_register(&ada()).await.unwrap().is_registered());

    let stored = h.users.take_inserted();
    assert_eq!((stored[0].has_credit_limit, stored[0].credit_limit), (false, 0));
    // No credit expectations were queued; any query would show up here.
    h.verify();
}

#[tokio::test]
async fn test_limit_threshold() {
    let mut h = Harness::new();
    h.expect_client("RandomClientName");
    h.expect_base_limit(499);

    let outcome = h.pipeline().try_register(&ada()).await.unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::Rejected(Rejection::CreditLimitTooLow { limit: 499 })
    );
    assert!(h.users.take_inserted().is_empty());
    h.verify();

    let mut h = Harness::new();
    h.expect_client("RandomClientName");
    h.expect_base_limit(500);
    h.users.expect_insert().return_ok(UserId(1));

    assert!(h.pipeline().try_register(&ada()).await.unwrap().is_registered());
    h.verify();
}

#[tokio::test]
async fn test_invalid_fields_never_reach_collaborators() {
    let h = Harness::new();
    let pipeline = h.pipeline();

    let cases = [
        ("", "Lovelace", "ada@example.com", dob(), Rejection::InvalidName),
        ("Ada", "", "ada@example.com", dob(), Rejection::InvalidName),
        ("Ada", "Lovelace", "andrecom", dob(), Rejection::InvalidEmail),
        ("Ada", "Lovelace", "ab", dob(), Rejection::InvalidEmail),
        ("Ada", "Lovelace", "a@b", date(2000, 2, 17), Rejection::Underage),
    ];

    for (first, last, email, born, expected) in cases {
        let input = RegistrationInput::new(first, last, email, born, 1);
        let outcome = pipeline.try_register(&input).await.unwrap();
        assert_eq!(outcome, RegistrationOutcome::Rejected(expected));
        assert!(!pipeline
            .register_user(first, last, email, born, ClientId(1))
            .await
            .unwrap());
    }

    assert!(h.users.take_inserted().is_empty());
    h.verify();
}

#[tokio::test]
async fn test_birthday_today_is_old_enough() {
    let mut h = Harness::new();
    h.clients
        .expect_get(ClientId(1))
        .return_ok(Some(Client::new(1, "VeryImportantClient")));
    h.users.expect_insert().return_ok(UserId(1));

    let stored = h
        .pipeline()
        .register_user("Ada", "Lovelace", "a.b", date(2000, 2, 16), ClientId(1))
        .await
        .unwrap();
    assert!(stored);
    h.verify();
}

#[tokio::test]
async fn test_registration_data_check_is_local() {
    let h = Harness::new();
    let pipeline = h.pipeline();

    assert!(pipeline.is_registration_data_valid("Ada", "Lovelace", "a@b", date(2000, 2, 16)));
    assert!(!pipeline.is_registration_data_valid("Ada", "Lovelace", "a@b", date(2000, 2, 17)));
    assert!(!pipeline.is_registration_data_valid("Ada", "", "a@b", dob()));
    assert!(!pipeline.is_registration_data_valid("Ada", "Lovelace", "ab", dob()));
    h.verify();
}

#[tokio::test]
async fn test_persistence_failure_propagates() {
    let mut h = Harness::new();
    h.expect_client("VeryImportantClient");
    h.users.expect_insert().return_err(StoreError::ActorClosed);

    let err = h.pipeline().try_register(&ada()).await.unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::Persistence(UserError::ActorCommunicationError(_))
    ));
    h.verify();
}

#[tokio::test]
async fn test_missing_client_propagates() {
    let mut h = Harness::new();
    h.clients.expect_get(ClientId(1)).return_ok(None);

    let err = h.pipeline().try_register(&ada()).await.unwrap_err();
    assert_eq!(
        err,
        RegistrationError::Client(user_onboarding::client_store::ClientError::NotFound(
            ClientId(1)
        ))
    );
    assert!(h.users.take_inserted().is_empty());
    h.verify();
}

#[tokio::test]
async fn test_two_calls_insert_twice() {
    let mut h = Harness::new();
    for id in [1, 2] {
        h.expect_client("VeryImportantClient");
        h.users.expect_insert().return_ok(UserId(id));
    }

    let pipeline = h.pipeline();
    let first = pipeline.try_register(&ada()).await.unwrap();
    let second = pipeline.try_register(&ada()).await.unwrap();
    assert_eq!(first, RegistrationOutcome::Registered(UserId(1)));
    assert_eq!(second, RegistrationOutcome::Registered(UserId(2)));

    let stored = h.users.take_inserted();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0], stored[1]);
    h.verify();
}
