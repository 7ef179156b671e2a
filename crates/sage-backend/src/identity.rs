//! Client identity persistence.
//!
//! The web client keeps `userId`, `isAdmin`, and `showOnboarding` in
//! cookies/local storage. Here the same three keys live in the injected
//! key-value store.

use sage_core::kv::KeyValueStore;

const USER_ID_KEY: &str = "userId";
const IS_ADMIN_KEY: &str = "isAdmin";
const SHOW_ONBOARDING_KEY: &str = "showOnboarding";

/// Who is signed in on this client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientIdentity {
    pub user_id: Option<String>,
    pub is_admin: bool,
}

impl ClientIdentity {
    /// Loads the stored identity; absent keys mean signed out.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            user_id: store.get(USER_ID_KEY),
            is_admin: store.get(IS_ADMIN_KEY).as_deref() == Some("true"),
        }
    }

    /// Persists the identity (sign-in).
    pub fn save(&self, store: &dyn KeyValueStore) -> anyhow::Result<()> {
        match &self.user_id {
            Some(user_id) => store.set(USER_ID_KEY, user_id)?,
            None => store.remove(USER_ID_KEY)?,
        }
        store.set(IS_ADMIN_KEY, if self.is_admin { "true" } else { "false" })
    }

    /// Removes the identity (sign-out). The onboarding flag is left alone.
    pub fn clear(store: &dyn KeyValueStore) -> anyhow::Result<()> {
        store.remove(USER_ID_KEY)?;
        store.remove(IS_ADMIN_KEY)
    }
}

/// One-shot onboarding check: returns true exactly once per store, flipping
/// the flag so later checks return false.
pub fn take_show_onboarding(store: &dyn KeyValueStore) -> bool {
    let first_visit = store.get(SHOW_ONBOARDING_KEY).as_deref() != Some("false");
    if first_visit {
        if let Err(err) = store.set(SHOW_ONBOARDING_KEY, "false") {
            tracing::warn!("failed to persist onboarding flag: {err}");
        }
    }
    first_visit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_identity_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(ClientIdentity::load(&store), ClientIdentity::default());

        let identity = ClientIdentity {
            user_id: Some("user-1".to_string()),
            is_admin: true,
        };
        identity.save(&store).unwrap();
        assert_eq!(ClientIdentity::load(&store), identity);

        ClientIdentity::clear(&store).unwrap();
        assert_eq!(ClientIdentity::load(&store).user_id, None);
    }

    #[test]
    fn test_onboarding_is_one_shot() {
        let store = MemoryStore::new();
        assert!(take_show_onboarding(&store));
        assert!(!take_show_onboarding(&store));
        assert!(!take_show_onboarding(&store));
    }

    #[test]
    fn test_sign_out_preserves_onboarding() {
        let store = MemoryStore::new();
        assert!(take_show_onboarding(&store));
        ClientIdentity::clear(&store).unwrap();
        assert!(!take_show_onboarding(&store));
    }
}
