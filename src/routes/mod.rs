pub(crate) mod auth;
pub(crate) mod docs;
pub(crate) mod ping;
pub(crate) mod router;
pub(crate) mod user;
