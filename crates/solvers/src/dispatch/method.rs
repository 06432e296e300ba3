use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::InvalidArgument;

/// The root-finding method to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Newton-Raphson; requires a derivative.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "newton_raphson",
            alias = "n",
            alias = "newton",
            alias = "newton-raphson"
        )
    )]
    NewtonRaphson,

    /// Secant; derivative-free.
    #[cfg_attr(feature = "serde", serde(rename = "secant", alias = "s", alias = "sec"))]
    Secant,
}

/// Accepted method names. Matching is case-sensitive.
const ALIASES: [(&str, Method); 7] = [
    ("n", Method::NewtonRaphson),
    ("newton", Method::NewtonRaphson),
    ("newton_raphson", Method::NewtonRaphson),
    ("newton-raphson", Method::NewtonRaphson),
    ("s", Method::Secant),
    ("sec", Method::Secant),
    ("secant", Method::Secant),
];

impl Method {
    /// Looks up a method by name or alias.
    #[must_use]
    pub fn from_alias(name: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, method)| *method)
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NewtonRaphson => "newton_raphson",
            Self::Secant => "secant",
        }
    }
}

impl FromStr for Method {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| InvalidArgument::UnknownMethod(s.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A method as given to [`RootFor::method`]: already resolved, or a name to
/// resolve when the solve starts.
///
/// [`RootFor::method`]: crate::RootFor::method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodArg {
    Resolved(Method),
    Named(String),
}

impl MethodArg {
    pub(crate) fn resolve(&self) -> Result<Method, InvalidArgument> {
        match self {
            Self::Resolved(method) => Ok(*method),
            Self::Named(name) => name.parse(),
        }
    }
}

impl From<Method> for MethodArg {
    fn from(method: Method) -> Self {
        Self::Resolved(method)
    }
}

impl From<&str> for MethodArg {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for MethodArg {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}
