use crate::core::error::Error;

/// Prefix of every bcrypt-encoded hash; anything else in the password
/// column is a legacy plaintext credential awaiting migration.
pub(crate) const HASH_PREFIX: &str = "$2";

const COST: u32 = bcrypt::DEFAULT_COST;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CredentialCheck {
    /// Matched against a stored bcrypt hash.
    Valid,
    /// Matched by plain equality against a legacy value; the caller must
    /// schedule a rewrite of the stored credential.
    ValidLegacy,
    Rejected,
}

pub(crate) fn hash(plain: &str) -> Result<String, Error> {
    bcrypt::hash(plain, COST).map_err(Error::Bcrypt)
}

/// Never errors towards the caller: a malformed stored value is a mismatch.
pub(crate) fn verify(plain: &str, stored: &str) -> bool {
    bcrypt::verify(plain, stored).unwrap_or(false)
}

pub(crate) fn is_hashed(stored: &str) -> bool {
    stored.starts_with(HASH_PREFIX)
}

pub(crate) fn check(plain: &str, stored: &str) -> CredentialCheck {
    if is_hashed(stored) {
        if verify(plain, stored) {
            CredentialCheck::Valid
        } else {
            CredentialCheck::Rejected
        }
    } else if plain == stored {
        CredentialCheck::ValidLegacy
    } else {
        CredentialCheck::Rejected
    }
}
