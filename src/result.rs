use std::fmt;

use crate::link::AuthorizationLink;
use crate::status::{AccessBucket, AccessStatus};

/// Frozen outcome of one authorization check.
///
/// Pairs the access status returned by the list adapter with the link that
/// produced it. Validity is computed once at construction and never changes,
/// even if the link or its collaborators are mutated afterwards.
pub struct AuthorizationResult<'a> {
    access_status: AccessStatus,
    auth_link: &'a AuthorizationLink,
    valid: bool,
}

impl<'a> AuthorizationResult<'a> {
    /// Derives validity from the status code: `PUBLIC` is always valid, `OK`
    /// is valid iff the link currently reports authenticated (queried here,
    /// independently of any check the link already ran), everything else is
    /// invalid.
    pub fn new(access_status: AccessStatus, auth_link: &'a AuthorizationLink) -> Self {
        let valid = match access_status.bucket() {
            Some(AccessBucket::Public) => true,
            Some(AccessBucket::Ok) => auth_link.is_authenticated(),
            _ => false,
        };
        Self {
            access_status,
            auth_link,
            valid,
        }
    }

    pub fn access_status(&self) -> &AccessStatus {
        &self.access_status
    }

    pub fn auth_link(&self) -> &'a AuthorizationLink {
        self.auth_link
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Debug for AuthorizationResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationResult")
            .field("access_status", &self.access_status)
            .field("auth_link", &self.auth_link.name())
            .field("valid", &self.valid)
            .finish()
    }
}
