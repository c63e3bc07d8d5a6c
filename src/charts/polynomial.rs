use crate::error::{PlotError, Result};
use std::fmt;

/// Single variable polynomial.
///
/// Result files store coefficients lowest degree first; they are kept here
/// highest degree first, the order Horner's scheme consumes them in.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    descending: Vec<f64>,
}

impl Polynomial {
    pub fn from_ascending(coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(PlotError::EmptyPolynomial);
        }
        let mut descending = coefficients;
        descending.reverse();
        Ok(Self { descending })
    }

    pub fn degree(&self) -> usize {
        self.descending.len() - 1
    }

    /// Coefficients highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.descending
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.descending.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    pub fn sample(&self, xs: &[f64]) -> Vec<[f64; 2]> {
        xs.iter().map(|&x| [x, self.evaluate(x)]).collect()
    }
}

/// Highest degree first, `x^1` included, e.g. `0.25x^3 - 2.50x^1 + 1.00`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut started = false;

        for (idx, &c) in self.descending.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            match (started, c < 0.0) {
                (false, true) => write!(f, "-")?,
                (true, true) => write!(f, " - ")?,
                (true, false) => write!(f, " + ")?,
                (false, false) => {}
            }
            write!(f, "{:.2}", c.abs())?;

            let power = degree - idx;
            if power != 0 {
                write!(f, "x^{}", power)?;
            }
            started = true;
        }

        if !started {
            write!(f, "0")?;
        }
        Ok(())
    }
}

/// `count` evenly spaced values over the closed interval `[start, end]`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_matches_power_sum() {
        // 2 + 3x + x^2
        let poly = Polynomial::from_ascending(vec![2.0, 3.0, 1.0]).unwrap();
        assert_eq!(poly.evaluate(2.0), 12.0);
        assert_eq!(poly.coefficients(), &[1.0, 3.0, 2.0]);
        assert_eq!(poly.degree(), 2);
    }

    #[test]
    fn test_constant_term_at_zero() {
        for coeffs in [vec![4.5], vec![-1.25, 7.0], vec![0.5, 0.0, 0.0, 0.0, 15.75]] {
            let expected = coeffs[0];
            let poly = Polynomial::from_ascending(coeffs).unwrap();
            assert_eq!(poly.evaluate(0.0), expected);
        }
    }

    #[test]
    fn test_zero_polynomial_is_flat() {
        let poly = Polynomial::from_ascending(vec![0.0, 0.0, 0.0]).unwrap();
        for x in linspace(-10.0, 10.0, 11) {
            assert_eq!(poly.evaluate(x), 0.0);
        }
        assert_eq!(poly.to_string(), "0");
    }

    #[test]
    fn test_empty_coefficients_rejected() {
        assert!(matches!(
            Polynomial::from_ascending(Vec::new()),
            Err(PlotError::EmptyPolynomial)
        ));
    }

    #[test]
    fn test_display() {
        let poly = Polynomial::from_ascending(vec![1.0, -2.5, 0.0, 0.25]).unwrap();
        assert_eq!(poly.to_string(), "0.25x^3 - 2.50x^1 + 1.00");

        let poly = Polynomial::from_ascending(vec![0.0, 0.0, -3.0]).unwrap();
        assert_eq!(poly.to_string(), "-3.00x^2");
    }

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-10.0, 10.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], -10.0);
        assert_eq!(xs[999], 10.0);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
        assert!(linspace(3.0, 4.0, 0).is_empty());
    }
}
