use jsonwebtoken::{DecodingKey, EncodingKey, TokenData};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::core::error::Error;
use crate::types::request::{RegisterData, UpdateUserData};
use crate::types::user::UserRecord;
use crate::utils::auth::{self, Claims};
use crate::utils::password::{self, CredentialCheck};

#[derive(Clone)]
pub(crate) struct UserController {
    pool: PgPool,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for UserController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserController").finish()
    }
}

impl UserController {
    pub(crate) fn new(pool: PgPool, secret: &str) -> Self {
        Self {
            pool,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub(crate) async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, Error> {
        match sqlx::query(
            "SELECT
                id,
                username,
                password,
                status,
                firstname,
                fullname,
                lastname,
                address,
                sex,
                birthday,
                created_at,
                updated_at
            FROM users
            WHERE username = $1;",
        )
        .bind(username)
        .map(map_user)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => Ok(Some(user)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    /// Verifies the credentials and issues a one-hour token. A match against
    /// a legacy plaintext value additionally schedules the write-back that
    /// replaces it with a bcrypt hash.
    pub(crate) async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(UserRecord, String), Error> {
        let user = self
            .get_by_username(username)
            .await?
            .ok_or(Error::UserNotFound)?;

        match password::check(password, &user.password) {
            CredentialCheck::Valid => (),
            CredentialCheck::ValidLegacy => self.migrate_password(user.id, password.to_owned()),
            CredentialCheck::Rejected => return Err(Error::InvalidPassword),
        }

        let token = auth::encode_jwt(&user, &self.encoding_key)?;

        Ok((user, token))
    }

    // Best-effort: the plaintext match already authenticated this request,
    // so a failed write-back is logged and the login still succeeds. Two
    // concurrent logins racing through here both win; last write sticks.
    fn migrate_password(&self, id: i32, password: String) {
        let pool = self.pool.clone();

        tokio::spawn(async move {
            let hashed = match password::hash(&password) {
                Ok(hashed) => hashed,
                Err(e) => {
                    tracing::error!(user_id = id, "password migration failed: {:?}", e);
                    return;
                }
            };

            match sqlx::query("UPDATE users SET password = $1, updated_at = now() WHERE id = $2;")
                .bind(&hashed)
                .bind(id)
                .execute(&pool)
                .await
            {
                Ok(_) => tracing::info!(user_id = id, "migrated legacy password"),
                Err(e) => tracing::error!(user_id = id, "password migration failed: {:?}", e),
            }
        });
    }

    pub(crate) async fn register(&self, data: &RegisterData) -> Result<UserRecord, Error> {
        let (username, password) = data.credentials()?;

        let hashed = password::hash(password)?;

        match sqlx::query(
            "INSERT INTO users (username, password, firstname, fullname, lastname, address, sex, birthday)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id,
                username,
                password,
                status,
                firstname,
                fullname,
                lastname,
                address,
                sex,
                birthday,
                created_at,
                updated_at;",
        )
        .bind(username)
        .bind(&hashed)
        .bind(&data.firstname)
        .bind(&data.fullname)
        .bind(&data.lastname)
        .bind(&data.address)
        .bind(&data.sex)
        .bind(&data.birthday)
        .map(map_user)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::UserAlreadyExists)
            }
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn list(&self) -> Result<Vec<UserRecord>, Error> {
        let users = sqlx::query(
            "SELECT
                id,
                username,
                password,
                status,
                firstname,
                fullname,
                lastname,
                address,
                sex,
                birthday,
                created_at,
                updated_at
            FROM users
            ORDER BY id;",
        )
        .map(map_user)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub(crate) async fn get(&self, id: i32) -> Result<UserRecord, Error> {
        match sqlx::query(
            "SELECT
                id,
                username,
                password,
                status,
                firstname,
                fullname,
                lastname,
                address,
                sex,
                birthday,
                created_at,
                updated_at
            FROM users
            WHERE id = $1;",
        )
        .bind(id)
        .map(map_user)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => Ok(user),
            Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    /// Partial update; absent fields keep their stored value. A new password
    /// is hashed before it touches the store.
    pub(crate) async fn update(&self, id: i32, data: &UpdateUserData) -> Result<(), Error> {
        let hashed = match &data.password {
            Some(password) => Some(password::hash(password)?),
            None => None,
        };

        match sqlx::query(
            "UPDATE users SET
                username = COALESCE($2, username),
                password = COALESCE($3, password),
                status = COALESCE($4, status),
                firstname = COALESCE($5, firstname),
                fullname = COALESCE($6, fullname),
                lastname = COALESCE($7, lastname),
                address = COALESCE($8, address),
                sex = COALESCE($9, sex),
                birthday = COALESCE($10, birthday),
                updated_at = now()
            WHERE id = $1
            RETURNING id;",
        )
        .bind(id)
        .bind(&data.username)
        .bind(&hashed)
        .bind(&data.status)
        .bind(&data.firstname)
        .bind(&data.fullname)
        .bind(&data.lastname)
        .bind(&data.address)
        .bind(&data.sex)
        .bind(&data.birthday)
        .map(|row: PgRow| row.get::<i32, _>("id"))
        .fetch_one(&self.pool)
        .await
        {
            Ok(_) => Ok(()),
            Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::UserAlreadyExists)
            }
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    pub(crate) fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, Error> {
        auth::decode_jwt(token, &self.decoding_key)
    }
}

fn map_user(row: PgRow) -> UserRecord {
    UserRecord {
        id: row.get("id"),
        username: row.get("username"),
        password: row.get("password"),
        status: row.get("status"),
        firstname: row.get("firstname"),
        fullname: row.get("fullname"),
        lastname: row.get("lastname"),
        address: row.get("address"),
        sex: row.get("sex"),
        birthday: row.get("birthday"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
