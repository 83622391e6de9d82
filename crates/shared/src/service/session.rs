//! Rebuilds a [`Session`] from persisted state.
//!
//! Both entry points treat anything unreadable as "no session": a missing
//! value, malformed JSON, a missing field or a role outside the known set.

use crate::{
    abstract_trait::ClientStorageTrait,
    model::{Session, SessionUser, StoredUser, TOKEN_KEY, USER_KEY},
};
use tracing::debug;

/// Reads the value of the `session` cookie.
pub fn resolve_cookie(value: Option<&str>) -> Option<Session> {
    let raw = value?;

    match serde_json::from_str::<SessionUser>(raw) {
        Ok(user) => Some(user.into()),
        Err(e) => {
            debug!("Ignoring unreadable session cookie: {e}");
            None
        }
    }
}

/// Reads the `user` and `token` keys; both have to be present.
pub fn resolve_storage(storage: &dyn ClientStorageTrait) -> Option<Session> {
    let raw_user = storage.get_item(USER_KEY)?;
    let token = storage.get_item(TOKEN_KEY)?;

    match serde_json::from_str::<StoredUser>(&raw_user) {
        Ok(user) => Some(Session::from_stored(user, token)),
        Err(e) => {
            debug!("Ignoring unreadable stored user: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::MemoryStorage, model::Role};
    use proptest::prelude::*;

    #[test]
    fn reads_well_formed_cookie() {
        let session = resolve_cookie(Some(
            r#"{"id":"3","name":"Klinik","email":"k@klinik.com","role":"faskes"}"#,
        ))
        .unwrap();

        assert_eq!(session.role, Role::Faskes);
        assert_eq!(session.name, "Klinik");
        assert_eq!(session.token, None);
    }

    #[test]
    fn missing_cookie_is_no_session() {
        assert_eq!(resolve_cookie(None), None);
    }

    #[test]
    fn malformed_or_incomplete_cookie_is_no_session() {
        assert_eq!(resolve_cookie(Some("not json")), None);
        assert_eq!(resolve_cookie(Some("{}")), None);
        assert_eq!(resolve_cookie(Some(r#"{"id":"1","role":"admin"}"#)), None);
        assert_eq!(
            resolve_cookie(Some(
                r#"{"id":"1","name":"x","email":"x@y","role":"auditor"}"#
            )),
            None
        );
        assert_eq!(
            resolve_cookie(Some(r#"{"id":1,"name":"x","email":"x@y","role":"admin"}"#)),
            None
        );
    }

    #[test]
    fn storage_needs_user_and_token() {
        let storage = MemoryStorage::new();
        let user = r#"{"id":"1","username":"admin","email":"admin@klinik.com","full_name":"Administrator System","role":"admin","facility_id":"1"}"#;

        storage.set_item(USER_KEY, user);
        assert_eq!(resolve_storage(&storage), None);

        storage.set_item(TOKEN_KEY, "demo_token_123456");
        let session = resolve_storage(&storage).unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.name, "Administrator System");
        assert_eq!(session.token.as_deref(), Some("demo_token_123456"));

        storage.remove_item(USER_KEY);
        assert_eq!(resolve_storage(&storage), None);
    }

    #[test]
    fn garbage_stored_user_is_no_session() {
        let storage = MemoryStorage::new();
        storage.set_item(USER_KEY, "{\"id\":");
        storage.set_item(TOKEN_KEY, "t");
        assert_eq!(resolve_storage(&storage), None);
    }

    proptest! {
        #[test]
        fn arbitrary_cookie_values_never_panic(raw in ".{0,64}") {
            let _ = resolve_cookie(Some(&raw));
        }
    }
}
