//! Dunning log-likelihood scores
//!
//! Both functions take counts as `f64` and never panic: zero denominators
//! and logarithms of zero collapse the affected term to zero.

const ALT_PROBABILITY: f64 = 0.99;

fn xlogy(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * y.ln()
    }
}

fn binomial_term(k1: f64, p1: f64, k2: f64, p2: f64) -> f64 {
    let sum = xlogy(k1, p1) + xlogy(k2, p2);
    if sum.is_finite() {
        sum
    } else {
        0.0
    }
}

/// Log-likelihood that a type and a trailing period form one unit
///
/// `count_a` is the type count (with and without period), `count_b` the
/// number of period-final tokens, `count_ab` the count of the type with its
/// period and `n` the corpus size. The alternative hypothesis assumes the
/// period follows the type 99% of the time.
pub fn modified_log_likelihood(count_a: f64, count_b: f64, count_ab: f64, n: f64) -> f64 {
    if n <= 0.0 {
        return 0.0;
    }

    let p = count_b / n;
    let null = xlogy(count_ab, p) + xlogy(count_a - count_ab, 1.0 - p);
    let alt = xlogy(count_ab, ALT_PROBABILITY) + xlogy(count_a - count_ab, 1.0 - ALT_PROBABILITY);

    -2.0 * (null - alt)
}

/// Classic Dunning log-likelihood for two co-occurring events
pub fn col_log_likelihood(count_a: f64, count_b: f64, count_ab: f64, n: f64) -> f64 {
    if n <= 0.0 {
        return 0.0;
    }

    let p = count_b / n;
    let p1 = if count_a > 0.0 { count_ab / count_a } else { 0.0 };
    let p2 = if n - count_a > 0.0 {
        (count_b - count_ab) / (n - count_a)
    } else {
        1.0
    };
    let rest = n - count_a - count_b + count_ab;

    let summand1 = binomial_term(count_ab, p, count_a - count_ab, 1.0 - p);
    let summand2 = binomial_term(count_b - count_ab, p, rest, 1.0 - p);
    let summand3 = if count_a == count_ab {
        0.0
    } else {
        binomial_term(count_ab, p1, count_a - count_ab, 1.0 - p1)
    };
    let summand4 = if count_b == count_ab {
        0.0
    } else {
        binomial_term(count_b - count_ab, p2, rest, 1.0 - p2)
    };

    -2.0 * (summand1 + summand2 - summand3 - summand4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_modified_log_likelihood() {
        assert_close(modified_log_likelihood(2.0, 4.0, 2.0, 8.0), 2.732_387_378_8);
    }

    #[test]
    fn test_modified_log_likelihood_without_periods_is_negative() {
        assert!(modified_log_likelihood(2.0, 2.0, 0.0, 9.0) < 0.0);
    }

    #[test]
    fn test_col_log_likelihood() {
        assert_close(col_log_likelihood(20.0, 10.0, 10.0, 100.0), 37.290_707_455_9);
        assert_close(col_log_likelihood(10.0, 10.0, 9.0, 100.0), 47.526_468_363_3);
        assert_close(col_log_likelihood(20.0, 10.0, 9.0, 100.0), 26.739_541_271_7);
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        assert_eq!(modified_log_likelihood(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(col_log_likelihood(0.0, 0.0, 0.0, 0.0), 0.0);
        assert!(col_log_likelihood(5.0, 0.0, 0.0, 5.0).is_finite());
        assert!(col_log_likelihood(5.0, 5.0, 5.0, 5.0).is_finite());
    }
}
