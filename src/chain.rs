use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::AuthorizationError;
use crate::link::{AuthorizationLink, Resource};
use crate::result::AuthorizationResult;

/// Binary operator combining link verdicts in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Every link must authorize; the first invalid verdict decides.
    #[default]
    And,
    /// Any link may authorize; the first valid verdict decides.
    Or,
}

/// An ordered collection of authorization links evaluated under a binary
/// operator.
///
/// Links are tried in order and the chain short-circuits as soon as the
/// operator is decided: `Or` returns the first valid result, `And` the first
/// invalid one. When no link short-circuits, the last result stands. Any
/// link failing with an invalid status code aborts the whole chain with that
/// error.
#[derive(Debug)]
pub struct AuthorizationChain {
    name: String,
    operator: Operator,
    links: Vec<AuthorizationLink>,
}

impl AuthorizationChain {
    pub fn new<S: AsRef<str>>(name: S, operator: Operator, links: Vec<AuthorizationLink>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            operator,
            links,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: AsRef<str>>(&mut self, name: S) {
        self.name = name.as_ref().to_string();
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = operator;
    }

    pub fn links(&self) -> &[AuthorizationLink] {
        &self.links
    }

    pub fn add_link(&mut self, link: AuthorizationLink) {
        self.links.push(link);
    }

    /// True iff every link in the chain reports authenticated. Links built
    /// from one shared authentication service always agree.
    pub fn is_authenticated(&self) -> bool {
        self.links.iter().all(|link| link.is_authenticated())
    }

    /// Evaluates the chain for `resource` and returns the deciding result.
    ///
    /// Fails with [`AuthorizationError::EmptyChain`] when the chain holds no
    /// links; a chain that can decide nothing is a configuration defect.
    pub fn is_authorized(
        &self,
        resource: &Resource,
    ) -> Result<AuthorizationResult<'_>, AuthorizationError> {
        let mut last: Option<AuthorizationResult<'_>> = None;
        for link in self.links.iter() {
            let result = link.is_authorized(resource)?;
            let decided = match self.operator {
                Operator::Or => result.is_valid(),
                Operator::And => !result.is_valid(),
            };
            if decided {
                debug!(
                    "chain '{}': link '{}' decided, valid={}",
                    self.name,
                    link.name(),
                    result.is_valid()
                );
                return Ok(result);
            }
            last = Some(result);
        }

        match last {
            Some(result) => Ok(result),
            None => Err(AuthorizationError::EmptyChain {
                chain: self.name.clone(),
            }),
        }
    }
}
