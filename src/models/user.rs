//! User record served by the demo service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub team: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, team: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            email: format!("{}@example.com", name.to_lowercase()),
            name,
            team: team.into(),
            created_at: Utc::now(),
        }
    }
}

/// Query string for `GET /users/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub team: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_roundtrip() {
        let user = User::new(1, "Ada", "core");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert_eq!(back.email, "ada@example.com");
    }

    #[test]
    fn test_search_query_deserialize() {
        let query: SearchQuery = serde_json::from_str(r#"{"team":"ops","name":"bob"}"#).unwrap();
        assert_eq!(query.team, "ops");
        assert_eq!(query.name, "bob");
    }
}
