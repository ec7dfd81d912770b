use super::{LAMBERT_W_LN_Z_MAX, LAMBERT_W_MAX_ITERATIONS, LAMBERT_W_TOLERANCE};
use crate::StrError;
use std::f64::consts::E;

/// Evaluates the principal branch of the Lambert W function
///
/// Solves:
///
/// ```text
/// W(z) exp(W(z)) = z     with z > 0
/// ```
///
/// The initial guess is `ln(1 + z)` for `z < e` and the asymptotic expansion
/// `L1 - L2 + L2/L1` (with `L1 = ln(z)` and `L2 = ln(L1)`) otherwise. The guess is then
/// refined by Halley's method until the update is below [LAMBERT_W_TOLERANCE] relative to W.
///
/// # Errors
///
/// * `z ≤ 0`, NaN, or infinite
/// * the iterations do not converge within [LAMBERT_W_MAX_ITERATIONS]
pub fn lambert_w(z: f64) -> Result<f64, StrError> {
    if !(z > 0.0) {
        return Err("lambert_w requires a positive argument");
    }
    if !z.is_finite() {
        return Err("lambert_w requires a finite argument");
    }
    let mut w = if z < E {
        f64::ln_1p(z)
    } else {
        let l1 = f64::ln(z);
        let l2 = f64::ln(l1);
        l1 - l2 + l2 / l1
    };
    for _ in 0..LAMBERT_W_MAX_ITERATIONS {
        let ew = f64::exp(w);
        let f = w * ew - z;
        let dw = f / (ew * (w + 1.0) - (w + 2.0) * f / (2.0 * w + 2.0));
        w -= dw;
        if !w.is_finite() {
            return Err("lambert_w iterate is not finite");
        }
        if f64::abs(dw) <= LAMBERT_W_TOLERANCE * f64::abs(w) {
            return Ok(w);
        }
    }
    Err("lambert_w did not converge")
}

/// Evaluates W(exp(y)) without forming exp(y) when it would overflow
///
/// For `y ≤ LAMBERT_W_LN_Z_MAX` this is simply `lambert_w(exp(y))`. Otherwise, the
/// equivalent equation `W + ln(W) = y` is solved by Newton's method starting from `y - ln(y)`.
pub fn lambert_w_exp(y: f64) -> Result<f64, StrError> {
    if y.is_nan() {
        return Err("lambert_w_exp requires a finite argument");
    }
    if y <= LAMBERT_W_LN_Z_MAX {
        return lambert_w(f64::exp(y));
    }
    if y.is_infinite() {
        return Err("lambert_w_exp requires a finite argument");
    }
    let mut w = y - f64::ln(y);
    for _ in 0..LAMBERT_W_MAX_ITERATIONS {
        let f = w + f64::ln(w) - y;
        let dw = f / (1.0 + 1.0 / w);
        w -= dw;
        if !w.is_finite() || w <= 0.0 {
            return Err("lambert_w_exp iterate is not finite");
        }
        if f64::abs(dw) <= LAMBERT_W_TOLERANCE * w {
            return Ok(w);
        }
    }
    Err("lambert_w_exp did not converge")
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{lambert_w, lambert_w_exp};
    use russell_lab::approx_eq;

    #[test]
    fn lambert_w_captures_errors() {
        assert_eq!(lambert_w(0.0).err(), Some("lambert_w requires a positive argument"));
        assert_eq!(lambert_w(-1.0).err(), Some("lambert_w requires a positive argument"));
        assert_eq!(lambert_w(f64::NAN).err(), Some("lambert_w requires a positive argument"));
        assert_eq!(lambert_w(f64::INFINITY).err(), Some("lambert_w requires a finite argument"));
    }

    #[test]
    fn lambert_w_works() {
        // reference values from Mathematica's ProductLog
        approx_eq(lambert_w(1.0).unwrap(), 0.5671432904097838, 1e-15);
        approx_eq(lambert_w(std::f64::consts::E).unwrap(), 1.0, 1e-15);
        approx_eq(lambert_w(2.0).unwrap(), 0.8526055020137255, 1e-15);
        approx_eq(lambert_w(10.0).unwrap(), 1.7455280027406994, 1e-14);
        approx_eq(lambert_w(100.0).unwrap(), 3.3856301402900502, 1e-14);
    }

    #[test]
    fn lambert_w_satisfies_definition() {
        for z in [1e-300, 1e-10, 0.01, 0.5, 1.0, 2.0, 2.7, 10.0, 100.0, 1e5, 1e20, 1e300] {
            let w = lambert_w(z).unwrap();
            let residual = f64::abs(w * f64::exp(w) - z);
            // println!("z = {:e}, W = {}, residual = {:e}", z, w, residual);
            // the residual amplifies the rounding of W by (1 + W) for large z
            assert!(residual <= 1e-14 * z * (1.0 + w) * (1.0 + w));
        }
    }

    #[test]
    fn lambert_w_handles_tiny_arguments() {
        // W(z) ≈ z - z² for small z
        let z = 1e-12;
        approx_eq(lambert_w(z).unwrap(), z - z * z, 1e-24);
    }

    #[test]
    fn lambert_w_exp_captures_errors() {
        assert_eq!(lambert_w_exp(f64::NAN).err(), Some("lambert_w_exp requires a finite argument"));
        assert_eq!(
            lambert_w_exp(f64::INFINITY).err(),
            Some("lambert_w_exp requires a finite argument")
        );
        assert_eq!(
            lambert_w_exp(-800.0).err(),
            Some("lambert_w requires a positive argument")
        );
    }

    #[test]
    fn lambert_w_exp_works() {
        for y in [-5.0, 0.0, 1.0, 5.0, 100.0] {
            approx_eq(lambert_w_exp(y).unwrap(), lambert_w(f64::exp(y)).unwrap(), 1e-15);
        }
        for y in [699.9, 700.1, 800.0, 1e4, 1e8] {
            let w = lambert_w_exp(y).unwrap();
            assert!(f64::abs(w + f64::ln(w) - y) <= 1e-12 * y);
        }
    }
}
