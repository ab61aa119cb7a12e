use super::dto::{AggregateStats, FiscalRecord};

/// Aggregate figures for the state overview.
///
/// Single pass over the slice. An empty slice yields zero sums, `count == 0`
/// and a NaN `average_growth`; callers holding a `RecordStore` never hit that case.
pub fn compute_stats(records: &[FiscalRecord]) -> AggregateStats {
    let mut total_revenue_projection = 0.0;
    let mut variation_sum = 0.0;
    let mut total_contribution = 0.0;

    for record in records {
        total_revenue_projection += record.revenue_projection;
        variation_sum += record.definitive_variation2024;
        total_contribution += record.total_contribution;
    }

    let count = records.len();

    AggregateStats {
        total_revenue_projection,
        average_growth: variation_sum / count as f64,
        total_contribution,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_fiscal_outlook::store::test_support::record;

    #[test]
    fn test_single_record() {
        let stats = compute_stats(&[record("X", 4.0, 100.0)]);
        assert_eq!(stats.total_revenue_projection, 100.0);
        assert_eq!(stats.average_growth, 4.0);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_sums_and_mean() {
        let mut a = record("Alpha", 5.0, 1_000.0);
        a.total_contribution = 250.0;
        let mut b = record("Beta", 10.0, 500.5);
        b.total_contribution = 0.0;
        let c = record("Gamma", -6.0, 0.0);

        let stats = compute_stats(&[a, b, c]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_revenue_projection, 1_500.5);
        assert_eq!(stats.total_contribution, 250.0);
        assert!((stats.average_growth - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_is_nan_average() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_revenue_projection, 0.0);
        assert!(stats.average_growth.is_nan());
    }
}
