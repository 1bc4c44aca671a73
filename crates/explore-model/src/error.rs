use thiserror::Error;

/// Errors raised while constructing explore state values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("location name must not be empty")]
    EmptyLocationName,
    #[error("'{name}' is reserved and cannot be used as a country name")]
    ReservedCountryName { name: String },
    #[error("country name '{name}' must not contain '--' or end with '-'")]
    InvalidCountryName { name: String },
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("date range starts after it ends: {from} > {to}")]
    InvertedDateRange { from: String, to: String },
    #[error("unknown {kind}: {value}")]
    UnknownName { kind: &'static str, value: String },
}

impl ModelError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
