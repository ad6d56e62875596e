/// Trait for authentication service collaborators.
///
/// Implementors wrap whatever session or credential store knows about the
/// current principal. The two methods are deliberately distinct and are
/// never conflated by this crate: `identity` answers "what identity is
/// this", `has_identity` answers "is a principal currently authenticated",
/// and the two may disagree (for example a stale or partially initialized
/// identity). `has_identity` is authoritative for access decisions.
pub trait AuthenticationService: Send + Sync {
    /// Reports whether a principal is currently authenticated.
    ///
    /// Queried fresh on every call; results are never cached by the link.
    fn has_identity(&self) -> bool;

    /// Returns the current identity, if any.
    ///
    /// `None` and `Some("")` are distinct, meaningful states: an adapter may
    /// legitimately authenticate the empty string as an identity.
    fn identity(&self) -> Option<String>;
}
