use crate::Args;

/// Describes which extra arguments a function can be called with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    /// Only `x`; accepts empty arguments.
    Unary,

    /// `x` followed by exactly this many positional values.
    Positional(usize),

    /// `x` plus exactly these named values.
    Keyed(Vec<&'static str>),

    /// Any extra arguments; the function sorts them out itself.
    Variadic,
}

impl Signature {
    /// Returns true if a function with this signature can be called with `args`.
    #[must_use]
    pub fn accepts(&self, args: &Args) -> bool {
        match (self, args) {
            (Self::Variadic, _) => true,
            (Self::Unary, args) => args.is_empty(),
            (Self::Positional(n), Args::Positional(values)) => values.len() == *n,
            (Self::Keyed(names), Args::Keyed(map)) => {
                map.len() == names.len() && names.iter().all(|name| map.contains_key(*name))
            }
            (Self::Positional(0), args) => args.is_empty(),
            (Self::Keyed(names), args) => names.is_empty() && args.is_empty(),
            (Self::Positional(_), _) => false,
        }
    }
}
