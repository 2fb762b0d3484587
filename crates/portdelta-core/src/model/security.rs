use serde::{Deserialize, Serialize};

/// Point-in-time metrics for one holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityMetrics {
    /// Units held (non-negative)
    pub quantity: f64,
    /// Signed currency amount
    pub market_value: f64,
    /// Share of net asset value, in percentage points
    pub nav_percentage: f64,
    pub industry: String,
}

impl SecurityMetrics {
    pub fn new(
        quantity: f64,
        market_value: f64,
        nav_percentage: f64,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            quantity,
            market_value,
            nav_percentage,
            industry: industry.into(),
        }
    }
}

/// One security within a snapshot, keyed externally by ISIN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRecord {
    pub name: String,
    pub industry: String,
    pub metrics: SecurityMetrics,
}

impl SecurityRecord {
    /// Create a record whose metrics carry the same industry label
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        quantity: f64,
        market_value: f64,
        nav_percentage: f64,
    ) -> Self {
        let industry = industry.into();
        Self {
            name: name.into(),
            metrics: SecurityMetrics::new(quantity, market_value, nav_percentage, industry.clone()),
            industry,
        }
    }

    pub fn market_value(&self) -> f64 {
        self.metrics.market_value
    }
}
