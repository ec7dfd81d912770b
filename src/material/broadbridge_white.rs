use crate::base::{check_c_sn_ss, check_c_sn_ss_relperm, check_kn_ks, check_las, lambert_w_exp};
use crate::StrError;

/// Evaluates W(x) with x = (c-1) exp(c - 1 - c pc / λₛ)
///
/// The logarithm of x is passed to [lambert_w_exp] so that very negative capillary
/// pressures do not overflow.
#[inline]
fn lambert_w_of_pc(pc: f64, c: f64, las: f64) -> Result<f64, StrError> {
    let ln_x = f64::ln(c - 1.0) + c - 1.0 - c * pc / las;
    lambert_w_exp(ln_x)
}

/// Calculates the effective saturation as a function of capillary pressure
///
/// ```text
/// seff = 1                      if pc ≥ 0
/// seff = sn + (ss - sn) θ       otherwise
///
/// θ = c / (1 + W(x))
/// x = (c - 1) exp(c - 1 - c pc / λₛ)
/// ```
///
/// where W is the Lambert W function. As pc → 0⁻ the result tends to ss and as pc → -∞ it
/// tends to sn. Note that seff jumps to one at pc = 0 if ss < 1.
///
/// In floating point, θ is capped at one so that seff ≤ ss. For extremely negative pc
/// (θ ≈ λₛ / |pc| below the precision of sn), the term (ss - sn) θ is lost and the result
/// equals sn, i.e., the lower bound seff > sn is only strict while |pc| is moderate.
///
/// # Input
///
/// * `pc` -- capillary pressure
/// * `c` -- BW's C parameter (> 1)
/// * `sn` -- BW's Sₙ parameter
/// * `ss` -- BW's Sₛ parameter (> sn)
/// * `las` -- BW's λₛ parameter (> 0)
pub fn seff(pc: f64, c: f64, sn: f64, ss: f64, las: f64) -> Result<f64, StrError> {
    check_c_sn_ss(c, sn, ss)?;
    check_las(las)?;
    if pc >= 0.0 {
        return Ok(1.0);
    }
    let w = lambert_w_of_pc(pc, c, las)?;
    // W may round just below c - 1 as pc → 0⁻
    let theta = f64::min(1.0, c / (1.0 + w));
    Ok(sn + (ss - sn) * theta)
}

/// Calculates the derivative of the effective saturation with respect to capillary pressure
///
/// Using W'(x) = W / (x (1 + W)):
///
/// ```text
/// dseff/dpc = (ss - sn) c² W / (λₛ (1 + W)³)
/// ```
///
/// The result is zero for pc ≥ 0.
pub fn dseff(pc: f64, c: f64, sn: f64, ss: f64, las: f64) -> Result<f64, StrError> {
    check_c_sn_ss(c, sn, ss)?;
    check_las(las)?;
    if pc >= 0.0 {
        return Ok(0.0);
    }
    let w = lambert_w_of_pc(pc, c, las)?;
    let den = 1.0 + w;
    Ok((ss - sn) * c * c / las * w / (den * den * den))
}

/// Calculates the second derivative of the effective saturation with respect to capillary pressure
///
/// ```text
/// d²seff/dpc² = -(ss - sn) c³ W (1 - 2W) / (λₛ² (1 + W)⁵)
/// ```
///
/// The result is zero for pc ≥ 0.
pub fn d2seff(pc: f64, c: f64, sn: f64, ss: f64, las: f64) -> Result<f64, StrError> {
    check_c_sn_ss(c, sn, ss)?;
    check_las(las)?;
    if pc >= 0.0 {
        return Ok(0.0);
    }
    let w = lambert_w_of_pc(pc, c, las)?;
    let den = 1.0 + w;
    Ok(-(ss - sn) * c * c * c / (las * las) * w * (1.0 - 2.0 * w) / f64::powi(den, 5))
}

/// Calculates the capillary pressure corresponding to an effective saturation
///
/// This is the inverse of [seff] on the unsaturated branch:
///
/// ```text
/// θ  = (sl - sn) / (ss - sn)
/// W  = c / θ - 1
/// pc = (λₛ / c) (c - 1 + ln(c - 1) - ln(W) - W)
/// ```
///
/// Returns zero for `sl ≥ ss`.
///
/// # Errors
///
/// * `sl ≤ sn` since the capillary pressure would be -∞
pub fn capillary_pressure(sl: f64, c: f64, sn: f64, ss: f64, las: f64) -> Result<f64, StrError> {
    check_c_sn_ss(c, sn, ss)?;
    check_las(las)?;
    if sl.is_nan() {
        return Err("saturation must not be NaN");
    }
    if sl <= sn {
        return Err("saturation must be greater than sn to compute the capillary pressure");
    }
    if sl >= ss {
        return Ok(0.0);
    }
    let theta = (sl - sn) / (ss - sn);
    let w = c / theta - 1.0;
    let ln_x = f64::ln(w) + w;
    Ok(las / c * (c - 1.0 + f64::ln(c - 1.0) - ln_x))
}

/// Calculates the relative permeability as a function of saturation
///
/// ```text
/// krel = kn + (ks - kn) (c - 1) θ² / (c - θ)
/// θ    = (s - sn) / (ss - sn)
/// ```
///
/// The result is clamped to kn for s ≤ sn and to ks for s ≥ ss.
///
/// # Input
///
/// * `s` -- saturation
/// * `c` -- BW's C parameter (≥ 1)
/// * `sn` -- BW's Sₙ parameter
/// * `ss` -- BW's Sₛ parameter (> sn)
/// * `kn` -- BW's Kₙ parameter
/// * `ks` -- BW's Kₛ parameter
pub fn relperm(s: f64, c: f64, sn: f64, ss: f64, kn: f64, ks: f64) -> Result<f64, StrError> {
    check_c_sn_ss_relperm(c, sn, ss)?;
    check_kn_ks(kn, ks)?;
    if s <= sn {
        return Ok(kn);
    }
    if s >= ss {
        return Ok(ks);
    }
    let coef = (ks - kn) * (c - 1.0);
    let theta = (s - sn) / (ss - sn);
    Ok(kn + coef * theta * theta / (c - theta))
}

/// Calculates the derivative of the relative permeability with respect to saturation
///
/// ```text
/// dkrel/ds = (ks - kn) (c - 1) (2θ / (c - θ) + θ² / (c - θ)²) / (ss - sn)
/// ```
///
/// The result is zero outside (sn, ss).
pub fn drelperm(s: f64, c: f64, sn: f64, ss: f64, kn: f64, ks: f64) -> Result<f64, StrError> {
    check_c_sn_ss_relperm(c, sn, ss)?;
    check_kn_ks(kn, ks)?;
    if s <= sn || s >= ss {
        return Ok(0.0);
    }
    let coef = (ks - kn) * (c - 1.0);
    let theta = (s - sn) / (ss - sn);
    let d = c - theta;
    let dkrel_dtheta = coef * (2.0 * theta / d + theta * theta / (d * d));
    Ok(dkrel_dtheta / (ss - sn))
}

/// Calculates the second derivative of the relative permeability with respect to saturation
///
/// ```text
/// d²krel/ds² = (ks - kn) (c - 1) (2 / (c - θ) + 4θ / (c - θ)² + 2θ² / (c - θ)³) / (ss - sn)²
/// ```
///
/// The result is zero outside (sn, ss).
pub fn d2relperm(s: f64, c: f64, sn: f64, ss: f64, kn: f64, ks: f64) -> Result<f64, StrError> {
    check_c_sn_ss_relperm(c, sn, ss)?;
    check_kn_ks(kn, ks)?;
    if s <= sn || s >= ss {
        return Ok(0.0);
    }
    let coef = (ks - kn) * (c - 1.0);
    let theta = (s - sn) / (ss - sn);
    let d = c - theta;
    let d2krel_dtheta2 = coef * (2.0 / d + 4.0 * theta / (d * d) + 2.0 * theta * theta / (d * d * d));
    let delta = ss - sn;
    Ok(d2krel_dtheta2 / (delta * delta))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
