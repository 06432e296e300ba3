use crate::InvalidArgument;

/// A numeric setting as supplied by the caller.
///
/// Numbers pass through; text is parsed when the solve starts, so a bad
/// value surfaces as [`InvalidArgument::NotNumeric`] before any iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Converts to `f64`, naming the setting in the error.
    pub(crate) fn coerce(&self, name: &'static str) -> Result<f64, InvalidArgument> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| InvalidArgument::NotNumeric {
                    name,
                    value: text.clone(),
                }),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for Scalar {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
