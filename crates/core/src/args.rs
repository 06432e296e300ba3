use std::{collections::BTreeMap, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extra arguments forwarded to a function alongside `x`.
///
/// Captured once when a solve starts and handed unchanged to every call of
/// the target function (or derivative) for the rest of that solve.
///
/// An empty positional list or an empty map carries no arguments and is
/// accepted wherever [`Args::None`] is.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Args {
    /// No extra arguments: the function is called as `f(x)`.
    #[default]
    None,

    /// Ordered values passed after `x`: `f(x, a, b, ...)`.
    Positional(Vec<f64>),

    /// Named values: `f(x, a = .., b = ..)`.
    Keyed(BTreeMap<String, f64>),
}

impl Args {
    /// Builds keyed arguments from `(name, value)` pairs.
    pub fn keyed<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self::Keyed(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns true if no values are carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Positional(values) => values.is_empty(),
            Self::Keyed(map) => map.is_empty(),
        }
    }

    /// Returns the call shape of these arguments.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::None => Shape::None,
            Self::Positional(values) => Shape::Positional(values.len()),
            Self::Keyed(map) => Shape::Keyed(map.len()),
        }
    }
}

impl From<f64> for Args {
    fn from(value: f64) -> Self {
        Self::Positional(vec![value])
    }
}

impl From<Vec<f64>> for Args {
    fn from(values: Vec<f64>) -> Self {
        Self::Positional(values)
    }
}

impl From<&[f64]> for Args {
    fn from(values: &[f64]) -> Self {
        Self::Positional(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Args {
    fn from(values: [f64; N]) -> Self {
        Self::Positional(values.to_vec())
    }
}

impl From<BTreeMap<String, f64>> for Args {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self::Keyed(map)
    }
}

impl<T: Into<Args>> From<Option<T>> for Args {
    fn from(args: Option<T>) -> Self {
        args.map_or(Self::None, Into::into)
    }
}

/// The call shape of an [`Args`] value, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    None,
    Positional(usize),
    Keyed(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "no extra arguments"),
            Self::Positional(n) => write!(f, "{n} positional argument(s)"),
            Self::Keyed(n) => write!(f, "{n} keyed argument(s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_becomes_single_positional() {
        assert_eq!(Args::from(2.0), Args::Positional(vec![2.0]));
    }

    #[test]
    fn none_option_is_no_args() {
        assert_eq!(Args::from(None::<f64>), Args::None);
        assert_eq!(Args::from(Some([1.0, -2.0])), Args::Positional(vec![1.0, -2.0]));
    }

    #[test]
    fn keyed_collects_pairs() {
        let args = Args::keyed([("b", -2.0), ("a", 1.0)]);
        let Args::Keyed(map) = &args else {
            panic!("expected keyed args");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 1.0);
        assert_eq!(args.shape(), Shape::Keyed(2));
    }

    #[test]
    fn empty_collections_are_empty() {
        assert!(Args::None.is_empty());
        assert!(Args::Positional(Vec::new()).is_empty());
        assert!(Args::Keyed(BTreeMap::new()).is_empty());
        assert!(!Args::from(1.0).is_empty());
    }
}
