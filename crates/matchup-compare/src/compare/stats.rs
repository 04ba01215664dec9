// Pure numeric aggregation over weekly value series.
//
// Every function here works on raw measurements; formatting to a category's
// decimal precision happens at render time only. Aggregates over an empty
// series are `None`, never a sentinel value.

/// Drop missing and non-finite entries from a weekly series, preserving
/// order.
pub fn filter_valid(series: &[Option<f64>]) -> Vec<f64> {
    series
        .iter()
        .copied()
        .filter_map(|slot| slot.filter(|v| v.is_finite()))
        .collect()
}

/// Arithmetic mean. `None` on empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (N-1 denominator). `None` with fewer than two
/// values, where the sample deviation is undefined.
pub fn stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Smallest value. `None` on empty input.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest value. `None` on empty input.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}
