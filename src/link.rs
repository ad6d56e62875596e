use std::sync::Arc;

use log::{debug, error};

use crate::acl::ListAdapter;
use crate::authn::AuthenticationService;
use crate::errors::AuthorizationError;
use crate::result::AuthorizationResult;
use crate::status::AccessBucket;

/// The controller/action pair a caller wants to invoke.
///
/// Both parts are optional and opaque; they are handed to the list adapter
/// verbatim.
#[derive(Debug, Clone, Default)]
pub struct Resource {
    pub controller: Option<String>,
    pub action: Option<String>,
}

impl Resource {
    pub fn new(controller: Option<&str>, action: Option<&str>) -> Self {
        Self {
            controller: controller.map(str::to_string),
            action: action.map(str::to_string),
        }
    }
}

/// A single authorization binding: one authentication service and one list
/// adapter under a name, with an optional redirect route for unauthenticated
/// callers.
///
/// The link owns neither collaborator; both are shared references that the
/// surrounding application may also hand to other links or swap out via the
/// setters. The link provides no internal locking: callers that mutate a
/// shared link concurrently with decisions must synchronize externally.
pub struct AuthorizationLink {
    name: String,
    authentication_service: Arc<dyn AuthenticationService>,
    list_adapter: Arc<dyn ListAdapter>,
    redirect_route: Option<String>,
}

impl std::fmt::Debug for AuthorizationLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationLink")
            .field("name", &self.name)
            .field("redirect_route", &self.redirect_route)
            .finish_non_exhaustive()
    }
}

impl AuthorizationLink {
    /// Creates a new link with no redirect route configured.
    pub fn new<S: AsRef<str>>(
        name: S,
        authentication_service: Arc<dyn AuthenticationService>,
        list_adapter: Arc<dyn ListAdapter>,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            authentication_service,
            list_adapter,
            redirect_route: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: AsRef<str>>(&mut self, name: S) {
        self.name = name.as_ref().to_string();
    }

    pub fn authentication_service(&self) -> &Arc<dyn AuthenticationService> {
        &self.authentication_service
    }

    pub fn set_authentication_service(&mut self, service: Arc<dyn AuthenticationService>) {
        self.authentication_service = service;
    }

    pub fn list_adapter(&self) -> &Arc<dyn ListAdapter> {
        &self.list_adapter
    }

    pub fn set_list_adapter(&mut self, adapter: Arc<dyn ListAdapter>) {
        self.list_adapter = adapter;
    }

    /// The route unauthenticated callers should be redirected to, if any.
    /// Redirection itself is up to the surrounding framework.
    pub fn redirect_route(&self) -> Option<&str> {
        self.redirect_route.as_deref()
    }

    pub fn set_redirect_route(&mut self, route: Option<String>) {
        self.redirect_route = route;
    }

    /// Reports whether a principal is currently authenticated.
    ///
    /// Delegates to the authentication service on every call, with no
    /// caching; the service's state may change externally between calls.
    pub fn is_authenticated(&self) -> bool {
        self.authentication_service.has_identity()
    }

    /// Decides whether the current identity may invoke `resource`.
    ///
    /// Fetches the identity once, asks the list adapter for an access status
    /// once, and renders the verdict from the returned code. For the `OK`
    /// bucket the verdict additionally depends on a fresh
    /// [`is_authenticated`](Self::is_authenticated) query rather than on the
    /// already-fetched identity: the identity only determines what the
    /// adapter sees, while `has_identity` stays authoritative for whether
    /// anyone is actually logged in.
    ///
    /// Fails with [`AuthorizationError::InvalidStatusCode`] when the adapter
    /// returns a code outside the four recognized buckets; in that case the
    /// authentication service is never asked about `has_identity` and no
    /// result is constructed.
    pub fn is_authorized(
        &self,
        resource: &Resource,
    ) -> Result<AuthorizationResult<'_>, AuthorizationError> {
        let identity = self.authentication_service.identity();
        let status = self.list_adapter.access_status(
            identity.as_deref(),
            resource.controller.as_deref(),
            resource.action.as_deref(),
        );

        let code = status.code();
        match status.bucket() {
            Some(AccessBucket::Ok) => {
                let authenticated = self.is_authenticated();
                debug!(
                    "link '{}': code OK for {:?}, authenticated={}",
                    self.name, resource, authenticated
                );
            }
            Some(bucket) => {
                debug!(
                    "link '{}': code {} ({:?}) for {:?}",
                    self.name, code, bucket, resource
                );
            }
            None => {
                error!(
                    "link '{}': list adapter returned invalid access code {}",
                    self.name, code
                );
                return Err(AuthorizationError::InvalidStatusCode {
                    link: self.name.clone(),
                    code,
                });
            }
        }

        // The result re-derives validity from the code on its own; it does
        // not trust the check above.
        Ok(AuthorizationResult::new(status, self))
    }
}
