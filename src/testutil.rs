//! Mock collaborators for unit tests. The call counters exist because the
//! number of collaborator queries per decision is part of the contract, not
//! an implementation detail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::acl::ListAdapter;
use crate::authn::AuthenticationService;
use crate::status::AccessStatus;

pub struct MockAuthService {
    identity: Option<String>,
    has_identity: bool,
    identity_calls: AtomicUsize,
    has_identity_calls: AtomicUsize,
}

impl MockAuthService {
    pub fn new(identity: Option<&str>, has_identity: bool) -> Arc<Self> {
        Arc::new(Self {
            identity: identity.map(str::to_string),
            has_identity,
            identity_calls: AtomicUsize::new(0),
            has_identity_calls: AtomicUsize::new(0),
        })
    }

    /// A service with the given identity that reports authenticated.
    pub fn authenticated(identity: &str) -> Arc<Self> {
        Self::new(Some(identity), true)
    }

    /// A service with no identity that reports unauthenticated.
    pub fn anonymous() -> Arc<Self> {
        Self::new(None, false)
    }

    /// A service holding an identity but leaving has_identity false, for
    /// exercising the two-method split.
    pub fn with_identity(identity: &str) -> Arc<Self> {
        Self::new(Some(identity), false)
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }

    pub fn has_identity_calls(&self) -> usize {
        self.has_identity_calls.load(Ordering::SeqCst)
    }
}

impl AuthenticationService for MockAuthService {
    fn has_identity(&self) -> bool {
        self.has_identity_calls.fetch_add(1, Ordering::SeqCst);
        self.has_identity
    }

    fn identity(&self) -> Option<String> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        self.identity.clone()
    }
}

type SeenRequest = (Option<String>, Option<String>, Option<String>);

pub struct MockListAdapter {
    code: i64,
    calls: AtomicUsize,
    seen: Mutex<Vec<SeenRequest>>,
}

impl MockListAdapter {
    /// An adapter that answers every lookup with the given code.
    pub fn returning(code: i64) -> Arc<Self> {
        Arc::new(Self {
            code,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (identity, controller, action) triple of the most recent lookup.
    pub fn last_request(&self) -> SeenRequest {
        self.seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no lookup recorded")
    }
}

impl ListAdapter for MockListAdapter {
    fn access_status(
        &self,
        identity: Option<&str>,
        controller: Option<&str>,
        action: Option<&str>,
    ) -> AccessStatus {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((
            identity.map(str::to_string),
            controller.map(str::to_string),
            action.map(str::to_string),
        ));
        AccessStatus::new(self.code)
    }
}
