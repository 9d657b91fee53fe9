use anyhow::anyhow;
use tracing::{debug, info};

use crate::{
    modules::users::{
        model::{User, UserInput},
        store::{StoreError, UserStore},
    },
    utils::errors::AppError,
    validator::check_payload,
};
use usermgmt_config::UsersConfig;

pub const NO_CHANGES_MESSAGE: &str =
    "No changes detected. Please modify user data before updating.";

fn store_error(err: StoreError) -> AppError {
    match err {
        StoreError::NotFound(_) => AppError::not_found(err),
        StoreError::Poisoned | StoreError::IdSpaceExhausted => AppError::internal(err),
    }
}

fn not_found(id: i64) -> AppError {
    store_error(StoreError::NotFound(id))
}

pub struct UserService;

impl UserService {
    pub fn list_users(store: &dyn UserStore) -> Result<Vec<User>, AppError> {
        store.list().map_err(store_error)
    }

    pub fn get_user(store: &dyn UserStore, id: i64) -> Result<User, AppError> {
        store
            .get(id)
            .map_err(store_error)?
            .ok_or_else(|| not_found(id))
    }

    /// `input` must already have passed [`check_payload`].
    pub fn create_user(store: &dyn UserStore, input: UserInput) -> Result<User, AppError> {
        let user = store.insert(input.name, input.email).map_err(store_error)?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Looks the user up before judging the payload, so an unknown id is a 404
    /// whatever the body holds. `input` is the raw parse result of the body.
    pub fn update_user(
        store: &dyn UserStore,
        config: &UsersConfig,
        id: i64,
        input: Result<UserInput, AppError>,
    ) -> Result<User, AppError> {
        let current = Self::get_user(store, id)?;
        let input = input?;
        check_payload(&input)?;

        if config.reject_noop_updates && input.matches(&current) {
            debug!(user_id = id, "Rejected no-op update");
            return Err(AppError::bad_request(anyhow!(NO_CHANGES_MESSAGE)));
        }

        let user = store
            .update(id, input.name, input.email)
            .map_err(store_error)?;
        info!(user_id = user.id, "User updated");
        Ok(user)
    }

    pub fn delete_user(store: &dyn UserStore, id: i64) -> Result<(), AppError> {
        store.delete(id).map_err(store_error)?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::store::InMemoryUserStore;
    use axum::http::StatusCode;
    use fake::Fake;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use serde_json::json;

    fn strict() -> UsersConfig {
        UsersConfig::default()
    }

    fn lenient() -> UsersConfig {
        UsersConfig {
            reject_noop_updates: false,
            ..UsersConfig::default()
        }
    }

    fn seeded() -> (InMemoryUserStore, User) {
        let store = InMemoryUserStore::default();
        let ann = UserService::create_user(&store, UserInput::new("Ann", "ann@x.com")).unwrap();
        (store, ann)
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let store = InMemoryUserStore::default();
        for _ in 0..20 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let input = UserInput::new(name.clone(), email.clone());
            check_payload(&input).unwrap();

            let created = UserService::create_user(&store, input).unwrap();
            let fetched = UserService::get_user(&store, created.id).unwrap();
            assert_eq!(fetched.name, name);
            assert_eq!(fetched.email, email);
        }
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = InMemoryUserStore::default();
        let err = UserService::get_user(&store, 999).unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "User with ID 999 not found.");
    }

    #[test]
    fn test_update_missing_is_not_found_before_validation() {
        let (store, _) = seeded();
        let before = store.list().unwrap();

        let mut bad = UserInput::new("", "nope");
        bad.extra_fields.insert("x".to_string(), json!(1));
        let err = UserService::update_user(&store, &strict(), 5, Ok(bad)).unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = UserService::update_user(
            &store,
            &strict(),
            5,
            Err(AppError::bad_request(anyhow!("Invalid request body"))),
        )
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_update_rejects_invalid_payload() {
        let (store, ann) = seeded();
        let err = UserService::update_user(
            &store,
            &strict(),
            ann.id,
            Ok(UserInput::new("Ann", "ann-at-x")),
        )
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(UserService::get_user(&store, ann.id).unwrap(), ann);
    }

    #[test]
    fn test_noop_update_follows_policy() {
        let (store, ann) = seeded();
        let same = || Ok(UserInput::new(ann.name.clone(), ann.email.clone()));

        let err = UserService::update_user(&store, &strict(), ann.id, same()).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), NO_CHANGES_MESSAGE);

        let user = UserService::update_user(&store, &lenient(), ann.id, same()).unwrap();
        assert_eq!(user, ann);
    }

    #[test]
    fn test_update_changes_fields_and_keeps_id() {
        let (store, ann) = seeded();
        let user = UserService::update_user(
            &store,
            &strict(),
            ann.id,
            Ok(UserInput::new("Annie", "annie@x.com")),
        )
        .unwrap();

        assert_eq!(user.id, ann.id);
        assert_eq!(user.name, "Annie");
        assert_eq!(UserService::get_user(&store, ann.id).unwrap(), user);
    }

    #[test]
    fn test_delete_then_delete_again() {
        let (store, ann) = seeded();
        assert!(UserService::delete_user(&store, ann.id).is_ok());
        let err = UserService::delete_user(&store, ann.id).unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_faults_are_internal() {
        assert_eq!(
            store_error(StoreError::Poisoned).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            store_error(StoreError::IdSpaceExhausted).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
