use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{self, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::user::UserRecord;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub(crate) struct Claims {
    pub(crate) role: String,
    pub(crate) id: i32,
    pub(crate) fullname: Option<String>,
    pub(crate) lastname: Option<String>,
    pub(crate) status: String,
    pub(crate) iat: usize,
    pub(crate) exp: usize,
}

pub(crate) fn encode_jwt(user: &UserRecord, key: &EncodingKey) -> Result<String, Error> {
    let current_time = Utc::now();
    let expiration_time = current_time + Duration::hours(1);

    let claims = Claims {
        role: "user".to_string(),
        id: user.id,
        fullname: user.fullname.clone(),
        lastname: user.lastname.clone(),
        status: user.status.clone(),
        iat: current_time.timestamp() as usize,
        exp: expiration_time.timestamp() as usize,
    };

    Ok(jsonwebtoken::encode(&Header::default(), &claims, key)?)
}

/// Expired, tampered and structurally invalid tokens all collapse into the
/// same client-facing rejection; the distinction only reaches the log.
pub(crate) fn decode_jwt(token: &str, key: &DecodingKey) -> Result<TokenData<Claims>, Error> {
    match jsonwebtoken::decode::<Claims>(token, key, &Validation::default()) {
        Ok(token_data) => Ok(token_data),
        Err(e) => {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    tracing::debug!("rejected expired token");
                }
                _ => tracing::debug!("rejected token: {}", e),
            }

            Err(Error::InvalidToken)
        }
    }
}

/// Strict `Bearer <token>` shape: case-sensitive scheme, single space,
/// non-empty token. Anything else is treated as no token at all.
pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}

pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(Error::MissingToken)?;

    let token = header
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or(Error::MissingToken)?;

    let token_data = state.user_controller.decode_jwt(token)?;

    request.extensions_mut().insert(token_data.claims);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(secret: &str) -> (EncodingKey, DecodingKey) {
        (
            EncodingKey::from_secret(secret.as_bytes()),
            DecodingKey::from_secret(secret.as_bytes()),
        )
    }

    fn user() -> UserRecord {
        UserRecord {
            id: 7,
            username: "john".to_string(),
            password: "$2b$12$irrelevant".to_string(),
            status: "active".to_string(),
            firstname: Some("John".to_string()),
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
    fn test_token_roundtrip() {
        let (encoding_key, decoding_key) = keys("test-secret");

        let token = encode_jwt(&user(), &encoding_key).unwrap();
        let decoded = decode_jwt(&token, &decoding_key).unwrap().claims;

        assert_eq!(decoded.role, "user");
        assert_eq!(decoded.id, 7);
        assert_eq!(decoded.fullname.as_deref(), Some("John Doe"));
        assert_eq!(decoded.lastname.as_deref(), Some("Doe"));
        assert_eq!(decoded.status, "active");
        assert_eq!(decoded.exp, decoded.iat + 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let (encoding_key, decoding_key) = keys("test-secret");

        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            role: "user".to_string(),
            id: 7,
            fullname: None,
            lastname: None,
            status: "active".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &encoding_key).unwrap();

        assert!(matches!(
            decode_jwt(&token, &decoding_key),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let (encoding_key, _) = keys("test-secret");
        let (_, other_decoding_key) = keys("other-secret");

        let token = encode_jwt(&user(), &encoding_key).unwrap();

        assert!(matches!(
            decode_jwt(&token, &other_decoding_key),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let (_, decoding_key) = keys("test-secret");

        assert!(matches!(
            decode_jwt("not-a-real-token", &decoding_key),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));

        assert_eq!(bearer_token("bearer abc.def.ghi"), None);
        assert_eq!(bearer_token("Token abc.def.ghi"), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer  abc"), None);
        assert_eq!(bearer_token("Bearer abc def"), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
        assert_eq!(bearer_token(""), None);
    }
}
