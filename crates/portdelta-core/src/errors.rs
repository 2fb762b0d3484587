use thiserror::Error;

/// Result type alias using the canonical `ExError`
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can use for
/// programmatic handling, testing and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Analysis
    /// A month key is unknown to the snapshot source or cannot be parsed
    InvalidInput,
    /// The start month is not strictly before the end month
    Ordering,
    /// Snapshot data cannot be compared (non-finite or negative metrics)
    Computation,

    // Store and import
    /// A snapshot file cannot be read or written
    Io,
    /// A snapshot file is not valid snapshot JSON
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Ordering => "ERR_ORDERING",
            ExErrorKind::Computation => "ERR_COMPUTATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus
/// optional context (operation, month key, ISIN) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    month_key: Option<String>,
    isin: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            month_key: None,
            isin: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add month key context
    pub fn with_month_key(mut self, month_key: impl Into<String>) -> Self {
        self.month_key = Some(month_key.into());
        self
    }

    /// Add security identifier context
    pub fn with_isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn month_key(&self) -> Option<&str> {
        self.month_key.as_deref()
    }

    pub fn isin(&self) -> Option<&str> {
        self.isin.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(month_key) = &self.month_key {
            write!(f, " (month: {})", month_key)?;
        }
        if let Some(isin) = &self.isin {
            write!(f, " (isin: {})", isin)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised while resolving, validating and comparing snapshots
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortDeltaError {
    /// The month key does not resolve to a snapshot
    #[error("Unknown month: {month_key}")]
    UnknownMonth { month_key: String },

    /// A known month key cannot be parsed as "<MonthName> <Year>"
    #[error("Invalid month key: {month_key}")]
    InvalidMonthKey { month_key: String },

    /// Start month is not strictly before end month
    #[error("Start month {start_month} must precede end month {end_month}")]
    MonthOrder {
        start_month: String,
        end_month: String,
    },

    /// Snapshot structure is inconsistent
    #[error("Malformed snapshot {month_key}: {reason}")]
    MalformedSnapshot { month_key: String, reason: String },

    /// A metric is NaN or infinite
    #[error("Non-finite {field} for {isin} in {month_key}")]
    NonFiniteMetric {
        month_key: String,
        isin: String,
        field: &'static str,
    },

    /// Holding quantities must not be negative
    #[error("Negative quantity {quantity} for {isin} in {month_key}")]
    NegativeQuantity {
        month_key: String,
        isin: String,
        quantity: f64,
    },
}

impl From<PortDeltaError> for ExError {
    fn from(err: PortDeltaError) -> Self {
        let message = err.to_string();
        match err {
            PortDeltaError::UnknownMonth { month_key } => ExError::new(ExErrorKind::InvalidInput)
                .with_month_key(month_key)
                .with_message(message),

            PortDeltaError::InvalidMonthKey { month_key } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_month_key(month_key)
                    .with_message(message)
            }

            PortDeltaError::MonthOrder { start_month, .. } => ExError::new(ExErrorKind::Ordering)
                .with_month_key(start_month)
                .with_message(message),

            PortDeltaError::MalformedSnapshot { month_key, .. } => {
                ExError::new(ExErrorKind::Computation)
                    .with_month_key(month_key)
                    .with_message(message)
            }

            PortDeltaError::NonFiniteMetric {
                month_key, isin, ..
            }
            | PortDeltaError::NegativeQuantity {
                month_key, isin, ..
            } => ExError::new(ExErrorKind::Computation)
                .with_month_key(month_key)
                .with_isin(isin)
                .with_message(message),
        }
    }
}
