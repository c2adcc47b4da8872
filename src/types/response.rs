use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Outbound user shape. Deliberately has no password member so no handler
/// can serialize one, hashed or not.
#[derive(Serialize, ToSchema, Clone, Debug)]
pub(crate) struct User {
    pub(crate) id: i32,
    pub(crate) username: String,
    pub(crate) status: String,
    pub(crate) firstname: Option<String>,
    pub(crate) fullname: Option<String>,
    pub(crate) lastname: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) sex: Option<String>,
    pub(crate) birthday: Option<String>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub(crate) struct Login {
    pub(crate) message: String,
    pub(crate) token: String,
    pub(crate) user: User,
}

#[derive(Serialize, ToSchema)]
pub(crate) struct Message {
    pub(crate) message: String,
}

#[derive(Serialize, ToSchema)]
pub(crate) struct Health {
    pub(crate) status: String,
    pub(crate) time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::user::UserRecord;

    fn record() -> UserRecord {
        UserRecord {
            id: 1,
            username: "john".to_string(),
            password: "$2b$12$secret-hash".to_string(),
            status: "active".to_string(),
            firstname: None,
            fullname: Some("John Doe".to_string()),
            lastname: Some("Doe".to_string()),
            address: None,
            sex: None,
            birthday: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_payload_has_no_password() {
        let serialized = serde_json::to_string(&record().public()).unwrap();

        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("secret-hash"));
        assert!(serialized.contains("\"username\":\"john\""));
    }

    #[test]
    fn test_login_payload_has_no_password() {
        let login = Login {
            message: "Login successful".to_string(),
            token: "abc.def.ghi".to_string(),
            user: record().public(),
        };

        let serialized = serde_json::to_string(&login).unwrap();

        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("secret-hash"));
        assert!(serialized.contains("\"token\":\"abc.def.ghi\""));
    }
}
