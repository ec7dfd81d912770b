use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds parameters for the Broadbridge-White model of unsaturated flow
///
/// The same parameter set drives the effective saturation (c, sn, ss, las) and
/// the relative permeability (c, sn, ss, kn, ks) relations.
///
/// # Reference
///
/// * Broadbridge P and White I (1988) Constant rate rainfall infiltration: A versatile
///   nonlinear model, 1. Analytical solution. Water Resources Research, 24(1), 145-154.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamBroadbridgeWhite {
    /// C parameter (shape; greater than one for seff, at least one for krel)
    pub c: f64,

    /// Sₙ parameter (residual saturation)
    pub sn: f64,

    /// Sₛ parameter (saturation at zero capillary pressure)
    pub ss: f64,

    /// λₛ parameter (capillary length scale)
    pub las: f64,

    /// Kₙ parameter (relative permeability at Sₙ)
    pub kn: f64,

    /// Kₛ parameter (relative permeability at Sₛ)
    pub ks: f64,
}

impl ParamBroadbridgeWhite {
    /// Checks the parameters required by the effective saturation relation
    pub fn validate_saturation(&self) -> Result<(), StrError> {
        check_c_sn_ss(self.c, self.sn, self.ss)?;
        check_las(self.las)
    }

    /// Checks the parameters required by the relative permeability relation
    pub fn validate_relperm(&self) -> Result<(), StrError> {
        check_c_sn_ss_relperm(self.c, self.sn, self.ss)?;
        check_kn_ks(self.kn, self.ks)
    }

    /// Checks all parameters
    pub fn validate(&self) -> Result<(), StrError> {
        check_c_sn_ss(self.c, self.sn, self.ss)?;
        check_las(self.las)?;
        check_kn_ks(self.kn, self.ks)
    }

    /// Reads a JSON file containing the parameters
    ///
    /// The parameters are validated after reading.
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let param: ParamBroadbridgeWhite = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        param.validate()?;
        Ok(param)
    }

    /// Writes a JSON file with the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Checks C, Sₙ, and Sₛ for the effective saturation relation (C > 1)
///
/// The Lambert W argument (C - 1) exp(…) must be positive.
/// The negated comparisons also reject NaN values.
#[inline]
pub(crate) fn check_c_sn_ss(c: f64, sn: f64, ss: f64) -> Result<(), StrError> {
    if !(c > 1.0) || !c.is_finite() {
        return Err("c parameter for the Broadbridge-White model is invalid");
    }
    check_sn_ss(sn, ss)
}

/// Checks C, Sₙ, and Sₛ for the relative permeability relation (C ≥ 1)
///
/// With θ < 1 inside (Sₙ, Sₛ), C - θ stays positive for C = 1.
#[inline]
pub(crate) fn check_c_sn_ss_relperm(c: f64, sn: f64, ss: f64) -> Result<(), StrError> {
    if !(c >= 1.0) || !c.is_finite() {
        return Err("c parameter for the Broadbridge-White model is invalid");
    }
    check_sn_ss(sn, ss)
}

/// Checks Sₙ and Sₛ
#[inline]
fn check_sn_ss(sn: f64, ss: f64) -> Result<(), StrError> {
    if !sn.is_finite() {
        return Err("sn parameter for the Broadbridge-White model is invalid");
    }
    if !(ss > sn) || !ss.is_finite() {
        return Err("ss parameter for the Broadbridge-White model is invalid (must be > sn)");
    }
    Ok(())
}

/// Checks λₛ
#[inline]
pub(crate) fn check_las(las: f64) -> Result<(), StrError> {
    if !(las > 0.0) || !las.is_finite() {
        return Err("las parameter for the Broadbridge-White model is invalid");
    }
    Ok(())
}

/// Checks Kₙ and Kₛ
#[inline]
pub(crate) fn check_kn_ks(kn: f64, ks: f64) -> Result<(), StrError> {
    if !kn.is_finite() {
        return Err("kn parameter for the Broadbridge-White model is invalid");
    }
    if !ks.is_finite() {
        return Err("ks parameter for the Broadbridge-White model is invalid");
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
