//! Authorization links: bind an authentication service to an access-control
//! list adapter and decide whether the current identity may invoke a given
//! controller/action pair.
//!
//! The crate does not compute permissions itself. The list adapter is an
//! external collaborator that returns an opaque access code; the
//! authentication service is an external collaborator that knows whether a
//! principal is currently authenticated. An [`AuthorizationLink`] combines
//! the two into a single pass/fail decision, and an [`AuthorizationChain`]
//! combines several links under an and/or operator.

pub mod acl;
pub mod authn;
pub mod chain;
pub mod config;
pub mod errors;
pub mod link;
pub mod result;
pub mod status;

#[cfg(test)]
pub(crate) mod testutil;

pub use acl::ListAdapter;
pub use authn::AuthenticationService;
pub use chain::{AuthorizationChain, Operator};
pub use config::{AuthorizationConfig, ChainConfig, LinkConfig};
pub use errors::AuthorizationError;
pub use link::{AuthorizationLink, Resource};
pub use result::AuthorizationResult;
pub use status::{AccessBucket, AccessStatus};
