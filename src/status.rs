/// Semantic bucket of an access code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessBucket {
    /// Access requires authentication and there is none
    Unauthorized,
    /// Access is denied regardless of authentication
    Rejected,
    /// Access is open to everyone
    Public,
    /// Access is granted, provided a principal is authenticated
    Ok,
}

/// Outcome of an access-control list lookup.
///
/// Carries an integer access code and optional messages explaining how the
/// adapter arrived at it. The code is only meaningful when it matches one of
/// the four bucket constants; adapters returning anything else are treated
/// as misconfigured by [`AuthorizationLink`](crate::AuthorizationLink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessStatus {
    code: i64,
    messages: Vec<String>,
}

impl AccessStatus {
    pub const UNAUTHORIZED: i64 = 0;
    pub const REJECTED: i64 = 1;
    pub const PUBLIC: i64 = 2;
    pub const OK: i64 = 3;

    /// Inclusive bounds of the legal code range. Range containment does not
    /// imply validity; a code must also match one of the bucket constants.
    pub const CODE_MIN: i64 = Self::UNAUTHORIZED;
    pub const CODE_MAX: i64 = Self::OK;

    pub fn new(code: i64) -> Self {
        Self {
            code,
            messages: Vec::new(),
        }
    }

    pub fn with_messages(code: i64, messages: Vec<String>) -> Self {
        Self { code, messages }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Maps the code to its bucket, or `None` for an unrecognized code.
    ///
    /// The four buckets are enumerated explicitly rather than derived from
    /// the [CODE_MIN, CODE_MAX] range, so a future in-range code without a
    /// bucket assignment stays invalid.
    pub fn bucket(&self) -> Option<AccessBucket> {
        match self.code {
            Self::UNAUTHORIZED => Some(AccessBucket::Unauthorized),
            Self::REJECTED => Some(AccessBucket::Rejected),
            Self::PUBLIC => Some(AccessBucket::Public),
            Self::OK => Some(AccessBucket::Ok),
            _ => None,
        }
    }

    pub fn is_valid_code(&self) -> bool {
        self.bucket().is_some()
    }
}
