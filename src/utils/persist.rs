//! localStorage persistence for the auth snapshot and the revalidation
//! visit counter.
//!
//! Storage access is best-effort: a browser with storage disabled degrades
//! to an anonymous session that revalidates on every visit.

use crate::config::{AUTH_FLAG_KEY, AUTH_USER_KEY, PAGE_VISITS_KEY};
use crate::core::session::AuthSnapshot;
use crate::models::User;
use crate::utils::dom;

/// Rehydrate the persisted auth snapshot. Both keys must be present and the
/// user JSON must parse, otherwise the session starts anonymous.
pub fn load_auth() -> AuthSnapshot {
    let Some(storage) = dom::local_storage() else {
        return AuthSnapshot::anonymous();
    };

    let flag = storage.get_item(AUTH_FLAG_KEY).ok().flatten();
    let user_json = storage.get_item(AUTH_USER_KEY).ok().flatten();

    if let (Some(_), Some(json)) = (flag, user_json)
        && let Ok(user) = serde_json::from_str::<User>(&json)
    {
        return AuthSnapshot::authenticated(user);
    }
    AuthSnapshot::anonymous()
}

/// Persist a logged-in user.
pub fn save_auth(user: &User) {
    if let Some(storage) = dom::local_storage()
        && let Ok(json) = serde_json::to_string(user)
    {
        let _ = storage.set_item(AUTH_FLAG_KEY, "true");
        let _ = storage.set_item(AUTH_USER_KEY, &json);
    }
}

/// Remove the persisted auth keys.
pub fn clear_auth() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(AUTH_FLAG_KEY);
        let _ = storage.remove_item(AUTH_USER_KEY);
    }
}

/// Current revalidation visit counter (0 when unset or unparsable).
pub fn page_visits() -> u32 {
    dom::local_storage()
        .and_then(|storage| storage.get_item(PAGE_VISITS_KEY).ok().flatten())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

pub fn set_page_visits(visits: u32) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(PAGE_VISITS_KEY, &visits.to_string());
    }
}
