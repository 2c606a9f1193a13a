//! Account data returned by the auth endpoints.

use serde::{Deserialize, Serialize};

/// The authenticated user, as reported by `/api/user/info` and the
/// sign-in/sign-up endpoints. Also persisted to localStorage as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trip() {
        let user = User {
            username: "alice".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"username":"alice"}"#);
        assert_eq!(serde_json::from_str::<User>(&json).unwrap(), user);
    }
}
