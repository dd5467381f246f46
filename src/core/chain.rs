//! Chain parsing.
//!
//! A chain is the small configuration DSL used for both rules and filters:
//! identifiers separated by `|`, each optionally followed by a bracketed
//! parameter, e.g. `required|numeric|less_than[60]`.
//!
//! Chains are parsed once, when a field is configured, and stages iterate the
//! parsed [`ChainLink`]s afterwards.
//!
//! Parameter semantics:
//! - `id` has no parameter (`None`)
//! - `id[]` has an explicitly empty parameter (`Some("")`)
//! - `id[p]` has parameter `Some("p")`, everything between the first `[` and
//!   the next `]`
//!
//! Anything else (`[p]`, `id[p`, `id[p]x`, `a||b`) is a [`ChainError`].

use crate::core::error::{ChainError, ChainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between chain entries.
pub const CHAIN_SEPARATOR: char = '|';

/// One entry of a chain: an identifier and its optional parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainLink {
    /// Rule or filter identifier
    pub identifier: String,
    /// Bracketed parameter, if any
    pub parameter: Option<String>,
}

impl ChainLink {
    /// Create a link without parameter.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            parameter: None,
        }
    }

    /// Set the parameter.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Borrow the parameter as `&str`.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Parse a single token such as `less_than[60]`.
    ///
    /// Surrounding whitespace is ignored. A `|` inside the token is rejected,
    /// use [`Chain::parse`] for whole chains.
    pub fn parse(token: &str) -> ChainResult<Self> {
        let token = token.trim();

        let Some(open) = token.find('[') else {
            validate_identifier(token, token)?;
            return Ok(Self::new(token));
        };

        if open == 0 {
            return Err(ChainError::MissingIdentifier {
                token: token.to_string(),
            });
        }

        let identifier = &token[..open];
        validate_identifier(identifier, token)?;

        let rest = &token[open + 1..];
        let close = rest.find(']').ok_or_else(|| ChainError::UnclosedParameter {
            token: token.to_string(),
        })?;

        if !rest[close + 1..].is_empty() {
            return Err(ChainError::TrailingCharacters {
                token: token.to_string(),
            });
        }

        Ok(Self::new(identifier).with_parameter(&rest[..close]))
    }
}

fn validate_identifier(identifier: &str, token: &str) -> ChainResult<()> {
    let invalid = identifier.is_empty()
        || identifier
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '[' | ']' | CHAIN_SEPARATOR));

    if invalid {
        Err(ChainError::InvalidIdentifier {
            token: token.to_string(),
        })
    } else {
        Ok(())
    }
}

impl fmt::Display for ChainLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(param) => write!(f, "{}[{}]", self.identifier, param),
            None => f.write_str(&self.identifier),
        }
    }
}

impl FromStr for ChainLink {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An ordered sequence of chain links.
///
/// Order is execution order: links run left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Chain {
    links: Vec<ChainLink>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a pipe-delimited chain string.
    ///
    /// An empty or whitespace-only string yields an empty chain.
    pub fn parse(chain: &str) -> ChainResult<Self> {
        if chain.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut links = Vec::new();
        for (index, token) in chain.split(CHAIN_SEPARATOR).enumerate() {
            if token.trim().is_empty() {
                return Err(ChainError::EmptyToken {
                    chain: chain.to_string(),
                    index,
                });
            }
            links.push(ChainLink::parse(token)?);
        }

        Ok(Self { links })
    }

    /// Append a link at the end of the chain.
    pub fn push(&mut self, link: ChainLink) {
        self.links.push(link);
    }

    /// Get the links in execution order.
    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    /// Iterate over the links in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChainLink> {
        self.links.iter()
    }

    /// Get the identifiers in execution order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|l| l.identifier.as_str())
    }

    /// Check whether the chain references an identifier.
    pub fn contains(&self, identifier: &str) -> bool {
        self.links.iter().any(|l| l.identifier == identifier)
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", CHAIN_SEPARATOR)?;
            }
            write!(f, "{}", link)?;
        }
        Ok(())
    }
}

impl FromStr for Chain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Chain {
    type Error = ChainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Chain> for String {
    fn from(chain: Chain) -> Self {
        chain.to_string()
    }
}

impl FromIterator<ChainLink> for Chain {
    fn from_iter<I: IntoIterator<Item = ChainLink>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a ChainLink;
    type IntoIter = std::slice::Iter<'a, ChainLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

/// Parse a chain string. Shorthand for [`Chain::parse`].
pub fn parse_chain(chain: &str) -> ChainResult<Chain> {
    Chain::parse(chain)
}
