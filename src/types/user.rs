use chrono::{DateTime, Utc};

use crate::types::response;

/// Full row from the users table. The password column holds either a bcrypt
/// hash or a not-yet-migrated plaintext value; it never crosses the HTTP
/// boundary — handlers respond with [`response::User`] instead.
#[derive(Clone, Debug)]
pub(crate) struct UserRecord {
    pub(crate) id: i32,
    pub(crate) username: String,
    pub(crate) password: String,
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

impl UserRecord {
    pub(crate) fn public(&self) -> response::User {
        response::User {
            id: self.id,
            username: self.username.clone(),
            status: self.status.clone(),
            firstname: self.firstname.clone(),
            fullname: self.fullname.clone(),
            lastname: self.lastname.clone(),
            address: self.address.clone(),
            sex: self.sex.clone(),
            birthday: self.birthday.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
