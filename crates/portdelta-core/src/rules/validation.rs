use crate::errors::{PortDeltaError, Result};
use crate::model::Snapshot;

/// Validate that a snapshot can take part in a comparison
///
/// Checks, in ISIN order:
///
/// 1. The reported total value is finite
/// 2. Every quantity is finite and non-negative
/// 3. Every market value and NAV percentage is finite
///
/// `total_value` is not reconciled against the detail rows; the two may
/// legitimately differ.
///
/// # Errors
///
/// Returns a `Computation` error for the first violation found, carrying the
/// month key and, where applicable, the ISIN.
pub fn validate_snapshot(month_key: &str, snapshot: &Snapshot) -> Result<()> {
    if !snapshot.total_value().is_finite() {
        return Err(PortDeltaError::MalformedSnapshot {
            month_key: month_key.to_string(),
            reason: format!("total_value is {}", snapshot.total_value()),
        }
        .into());
    }

    for (isin, record) in snapshot.securities() {
        let metrics = &record.metrics;
        let non_finite = |field: &'static str| PortDeltaError::NonFiniteMetric {
            month_key: month_key.to_string(),
            isin: isin.clone(),
            field,
        };

        if !metrics.quantity.is_finite() {
            return Err(non_finite("quantity").into());
        }
        if metrics.quantity < 0.0 {
            return Err(PortDeltaError::NegativeQuantity {
                month_key: month_key.to_string(),
                isin: isin.clone(),
                quantity: metrics.quantity,
            }
            .into());
        }
        if !metrics.market_value.is_finite() {
            return Err(non_finite("market_value").into());
        }
        if !metrics.nav_percentage.is_finite() {
            return Err(non_finite("nav_percentage").into());
        }
    }

    Ok(())
}
