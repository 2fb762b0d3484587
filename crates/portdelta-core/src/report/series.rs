//! Per-month counter series extracted from a range result.
//!
//! These are the data behind change-type bar and stacked-area charts, the
//! value-change line chart, and the change-type correlation heatmap.
//! Drawing the charts is left to presentation layers.

use serde::Serialize;

use crate::model::{ChangeType, RangeResult};

/// Counter series over the month pairs of a range, in chronological order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeSeries {
    /// End month of each compared pair
    pub months: Vec<String>,
    pub new_entries: Vec<usize>,
    pub exits: Vec<usize>,
    pub increases: Vec<usize>,
    pub decreases: Vec<usize>,
    pub no_change: Vec<usize>,
    pub total_value_change: Vec<f64>,
}

impl ChangeSeries {
    pub fn from_range(result: &RangeResult) -> Self {
        let months = &result.monthly_changes;
        let column = |change_type: ChangeType| -> Vec<usize> {
            months.iter().map(|m| m.summary.count(change_type)).collect()
        };

        Self {
            months: months.iter().map(|m| m.end_month.clone()).collect(),
            new_entries: column(ChangeType::NewEntry),
            exits: column(ChangeType::Exit),
            increases: column(ChangeType::Increased),
            decreases: column(ChangeType::Decreased),
            no_change: column(ChangeType::NoChange),
            total_value_change: months.iter().map(|m| m.summary.total_value_change).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn counts(&self, change_type: ChangeType) -> &[usize] {
        match change_type {
            ChangeType::NewEntry => &self.new_entries,
            ChangeType::Exit => &self.exits,
            ChangeType::Increased => &self.increases,
            ChangeType::Decreased => &self.decreases,
            ChangeType::NoChange => &self.no_change,
        }
    }

    /// Pearson correlations between the five counter series
    ///
    /// A cell is `None` when either series has zero variance, which includes
    /// every cell for fewer than two months.
    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        let mut values = [[None; 5]; 5];
        for (i, a) in ChangeType::ALL.iter().enumerate() {
            for (j, b) in ChangeType::ALL.iter().enumerate() {
                values[i][j] = pearson(self.counts(*a), self.counts(*b));
            }
        }
        CorrelationMatrix {
            labels: ChangeType::ALL,
            values,
        }
    }
}

/// Square correlation matrix over [`ChangeType::ALL`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: [ChangeType; 5],
    pub values: [[Option<f64>; 5]; 5],
}

impl CorrelationMatrix {
    pub fn get(&self, row: ChangeType, col: ChangeType) -> Option<f64> {
        let index = |t: ChangeType| ChangeType::ALL.iter().position(|x| *x == t);
        self.values[index(row)?][index(col)?]
    }
}

fn pearson(xs: &[usize], ys: &[usize]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let xs: Vec<f64> = xs[..n].iter().map(|&x| x as f64).collect();
    let ys: Vec<f64> = ys[..n].iter().map(|&y| y as f64).collect();

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfect_correlations() {
        let r = pearson(&[1, 2, 3], &[2, 4, 6]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        let r = pearson(&[1, 2, 3], &[3, 2, 1]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_undefined_for_constant_or_short_series() {
        assert!(pearson(&[4, 4, 4], &[1, 2, 3]).is_none());
        assert!(pearson(&[1], &[1]).is_none());
        assert!(pearson(&[], &[]).is_none());
    }
}
