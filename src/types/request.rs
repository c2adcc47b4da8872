use serde::Deserialize;
use utoipa::ToSchema;

use crate::core::error::Error;

#[derive(Deserialize, ToSchema)]
pub(crate) struct LoginData {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl LoginData {
    /// Username is trimmed, the password is used verbatim. Either one empty
    /// means the store is never consulted.
    pub(crate) fn credentials(&self) -> Result<(&str, &str), Error> {
        let username = self.username.trim();

        if username.is_empty() || self.password.is_empty() {
            return Err(Error::MissingCredentials);
        }

        Ok((username, &self.password))
    }
}

#[derive(Deserialize, ToSchema)]
pub(crate) struct RegisterData {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) firstname: Option<String>,
    pub(crate) fullname: Option<String>,
    pub(crate) lastname: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) sex: Option<String>,
    pub(crate) birthday: Option<String>,
}

impl RegisterData {
    pub(crate) fn credentials(&self) -> Result<(&str, &str), Error> {
        let username = self.username.trim();

        if username.is_empty() || self.password.is_empty() {
            return Err(Error::MissingCredentials);
        }

        Ok((username, &self.password))
    }
}

/// Any subset of updatable columns; absent fields keep their stored value.
#[derive(Deserialize, ToSchema)]
pub(crate) struct UpdateUserData {
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) firstname: Option<String>,
    pub(crate) fullname: Option<String>,
    pub(crate) lastname: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) sex: Option<String>,
    pub(crate) birthday: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_credentials() {
        let data = LoginData {
            username: "  john  ".to_string(),
            password: " 1234 ".to_string(),
        };

        let (username, password) = data.credentials().unwrap();

        assert_eq!(username, "john");
        // the password keeps its whitespace
        assert_eq!(password, " 1234 ");
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let data = LoginData {
            username: "   ".to_string(),
            password: "1234".to_string(),
        };
        assert!(matches!(data.credentials(), Err(Error::MissingCredentials)));

        let data = LoginData {
            username: "john".to_string(),
            password: String::new(),
        };
        assert!(matches!(data.credentials(), Err(Error::MissingCredentials)));
    }
}
