//! Scalar statistics: mean and Pearson correlation.

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson linear-correlation coefficient of two equally long sequences.
///
/// Returns NaN when either column has zero variance or fewer than two
/// observations; callers decide whether to filter degenerate results.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n < 2 {
        return f64::NAN;
    }

    let x_mean = mean(x);
    let y_mean = mean(y);

    let mut cov_sum = 0.0;
    let mut x_var_sum = 0.0;
    let mut y_var_sum = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        cov_sum += dx * dy;
        x_var_sum += dx * dx;
        y_var_sum += dy * dy;
    }

    // Zero variance makes the coefficient undefined; surface NaN rather
    // than failing or clamping.
    cov_sum / (x_var_sum.sqrt() * y_var_sum.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_basic() {
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-12);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn perfect_positive_and_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &up) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &down) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn two_points_form_a_perfect_line() {
        assert!((pearson(&[1.0, 38.0], &[2.0, 39.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn symmetry() {
        let x = [1.0, 5.0, 2.0, 9.0, 3.0];
        let y = [4.0, 1.0, 8.0, 2.0, 6.0];
        assert_eq!(pearson(&x, &y).to_bits(), pearson(&y, &x).to_bits());
    }

    #[test]
    fn zero_variance_yields_nan() {
        assert!(pearson(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson(&[1.0], &[2.0]).is_nan());
    }
}
