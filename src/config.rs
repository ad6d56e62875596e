use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::acl::ListAdapter;
use crate::authn::AuthenticationService;
use crate::chain::{AuthorizationChain, Operator};
use crate::errors::AuthorizationError;
use crate::link::AuthorizationLink;

/// Configuration for a single authorization link.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkConfig {
    /// Link name, used in decision logs and error messages.
    pub name: String,

    /// Route to redirect unauthenticated callers to. Defaults to none;
    /// redirection itself is up to the surrounding framework.
    #[serde(default)]
    pub redirect_route: Option<String>,
}

/// Configuration for an authorization chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainConfig {
    /// Chain name.
    pub name: String,

    /// Operator combining link verdicts. Defaults to `and`.
    #[serde(default)]
    pub operator: Operator,

    /// Links in evaluation order. Must not be empty.
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

impl ChainConfig {
    pub fn validate(&self) -> Result<(), AuthorizationError> {
        if self.links.is_empty() {
            return Err(AuthorizationError::InvalidConfig {
                reason: format!("chain '{}' has no links", self.name),
            });
        }
        Ok(())
    }

    /// Materializes the chain. Every link shares the same two collaborators;
    /// callers wiring different collaborators per link construct the links
    /// directly instead.
    pub fn build(
        &self,
        authentication_service: Arc<dyn AuthenticationService>,
        list_adapter: Arc<dyn ListAdapter>,
    ) -> Result<AuthorizationChain, AuthorizationError> {
        self.validate()?;

        let links = self
            .links
            .iter()
            .map(|lc| {
                let mut link = AuthorizationLink::new(
                    &lc.name,
                    authentication_service.clone(),
                    list_adapter.clone(),
                );
                link.set_redirect_route(lc.redirect_route.clone());
                link
            })
            .collect();

        Ok(AuthorizationChain::new(&self.name, self.operator, links))
    }
}

/// Top-level authorization configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthorizationConfig {
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

impl AuthorizationConfig {
    /// Parses and validates a TOML document.
    pub fn parse(data: &str) -> Result<Self, AuthorizationError> {
        let config: Self = toml::from_str(data)?;
        for chain in config.chains.iter() {
            chain.validate()?;
        }
        Ok(config)
    }

    pub fn chain(&self, name: &str) -> Option<&ChainConfig> {
        self.chains.iter().find(|c| c.name == name)
    }
}
