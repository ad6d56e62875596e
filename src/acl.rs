use crate::status::AccessStatus;

/// Trait for access-control list adapter collaborators.
///
/// How permissions are computed, stored or matched to resources is entirely
/// the adapter's business; this crate only consumes the returned
/// [`AccessStatus`] code.
pub trait ListAdapter: Send + Sync {
    /// Looks up the access status for an identity on a controller/action
    /// pair.
    ///
    /// All three arguments are passed through verbatim by the link, with no
    /// normalization: an absent identity, controller or action reaches the
    /// adapter as `None`, and an empty-string identity as `Some("")`.
    fn access_status(
        &self,
        identity: Option<&str>,
        controller: Option<&str>,
        action: Option<&str>,
    ) -> AccessStatus;
}
