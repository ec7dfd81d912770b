use super::{capillary_pressure, d2relperm, d2seff, drelperm, dseff, relperm, seff};
use crate::base::ParamBroadbridgeWhite;
use crate::util::CurveData;
use crate::StrError;
use russell_lab::Vector;

/// Implements the Broadbridge-White model for liquid retention and relative permeability
///
/// The parameters are validated once by [ModelBroadbridgeWhite::new]; the methods then
/// forward to the free functions in this module.
///
/// # Reference
///
/// * Broadbridge P and White I (1988) Constant rate rainfall infiltration: A versatile
///   nonlinear model, 1. Analytical solution. Water Resources Research, 24(1), 145-154.
#[derive(Clone, Copy, Debug)]
pub struct ModelBroadbridgeWhite {
    c: f64,   // C parameter
    sn: f64,  // residual saturation
    ss: f64,  // saturation at pc = 0
    las: f64, // λₛ parameter
    kn: f64,  // relative permeability at sn
    ks: f64,  // relative permeability at ss
}

impl ModelBroadbridgeWhite {
    /// Allocates a new instance
    pub fn new(param: &ParamBroadbridgeWhite) -> Result<Self, StrError> {
        param.validate()?;
        Ok(ModelBroadbridgeWhite {
            c: param.c,
            sn: param.sn,
            ss: param.ss,
            las: param.las,
            kn: param.kn,
            ks: param.ks,
        })
    }

    /// Returns the saturation limits (sn, ss)
    pub fn saturation_limits(&self) -> (f64, f64) {
        (self.sn, self.ss)
    }

    /// Calculates the effective saturation
    pub fn seff(&self, pc: f64) -> Result<f64, StrError> {
        seff(pc, self.c, self.sn, self.ss, self.las)
    }

    /// Calculates dseff/dpc
    pub fn dseff(&self, pc: f64) -> Result<f64, StrError> {
        dseff(pc, self.c, self.sn, self.ss, self.las)
    }

    /// Calculates d²seff/dpc²
    pub fn d2seff(&self, pc: f64) -> Result<f64, StrError> {
        d2seff(pc, self.c, self.sn, self.ss, self.las)
    }

    /// Calculates the capillary pressure corresponding to the saturation sl
    pub fn capillary_pressure(&self, sl: f64) -> Result<f64, StrError> {
        capillary_pressure(sl, self.c, self.sn, self.ss, self.las)
    }

    /// Calculates the relative permeability
    pub fn relperm(&self, sl: f64) -> Result<f64, StrError> {
        relperm(sl, self.c, self.sn, self.ss, self.kn, self.ks)
    }

    /// Calculates dkrel/dsl
    pub fn drelperm(&self, sl: f64) -> Result<f64, StrError> {
        drelperm(sl, self.c, self.sn, self.ss, self.kn, self.ks)
    }

    /// Calculates d²krel/dsl²
    pub fn d2relperm(&self, sl: f64) -> Result<f64, StrError> {
        d2relperm(sl, self.c, self.sn, self.ss, self.kn, self.ks)
    }

    /// Generates seff(pc) with derivatives for pc from `pc_start` to `pc_stop`
    pub fn generate_saturation_curve(&self, pc_start: f64, pc_stop: f64, npoint: usize) -> Result<CurveData, StrError> {
        if npoint < 2 {
            return Err("npoint must be at least 2");
        }
        let pc = Vector::linspace(pc_start, pc_stop, npoint)?;
        let mut data = CurveData::new("seff", npoint);
        for i in 0..npoint {
            data.x[i] = pc[i];
            data.y[i] = self.seff(pc[i])?;
            data.dy_dx[i] = self.dseff(pc[i])?;
            data.d2y_dx2[i] = self.d2seff(pc[i])?;
        }
        Ok(data)
    }

    /// Generates krel(sl) with derivatives for sl from sn to ss
    pub fn generate_relperm_curve(&self, npoint: usize) -> Result<CurveData, StrError> {
        if npoint < 2 {
            return Err("npoint must be at least 2");
        }
        let sl = Vector::linspace(self.sn, self.ss, npoint)?;
        let mut data = CurveData::new("krel", npoint);
        for i in 0..npoint {
            data.x[i] = sl[i];
            data.y[i] = self.relperm(sl[i])?;
            data.dy_dx[i] = self.drelperm(sl[i])?;
            data.d2y_dx2[i] = self.d2relperm(sl[i])?;
        }
        Ok(data)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelBroadbridgeWhite;
    use crate::base::{ParamBroadbridgeWhite, SampleParams};
    use russell_lab::{approx_eq, deriv1_central5};

    #[test]
    fn new_captures_errors() {
        let mut param = SampleParams::param_broadbridge_white();
        param.c = 0.9;
        assert_eq!(
            ModelBroadbridgeWhite::new(&param).err(),
            Some("c parameter for the Broadbridge-White model is invalid")
        );
        param.c = 1.5;
        param.las = -1.0;
        assert_eq!(
            ModelBroadbridgeWhite::new(&param).err(),
            Some("las parameter for the Broadbridge-White model is invalid")
        );
    }

    #[test]
    fn methods_match_free_functions() {
        let p = ParamBroadbridgeWhite {
            c: 3.0,
            sn: 0.05,
            ss: 0.9,
            las: 0.5,
            kn: 0.01,
            ks: 0.8,
        };
        let model = ModelBroadbridgeWhite::new(&p).unwrap();
        assert_eq!(model.saturation_limits(), (0.05, 0.9));
        for pc in [-3.0, -0.5, 0.0, 1.0] {
            assert_eq!(model.seff(pc).unwrap(), super::seff(pc, p.c, p.sn, p.ss, p.las).unwrap());
            assert_eq!(model.dseff(pc).unwrap(), super::dseff(pc, p.c, p.sn, p.ss, p.las).unwrap());
            assert_eq!(model.d2seff(pc).unwrap(), super::d2seff(pc, p.c, p.sn, p.ss, p.las).unwrap());
        }
        for sl in [0.0, 0.05, 0.3, 0.9, 1.0] {
            assert_eq!(model.relperm(sl).unwrap(), super::relperm(sl, p.c, p.sn, p.ss, p.kn, p.ks).unwrap());
            assert_eq!(model.drelperm(sl).unwrap(), super::drelperm(sl, p.c, p.sn, p.ss, p.kn, p.ks).unwrap());
            assert_eq!(model.d2relperm(sl).unwrap(), super::d2relperm(sl, p.c, p.sn, p.ss, p.kn, p.ks).unwrap());
        }
    }

    #[test]
    fn capillary_pressure_inverts_seff() {
        let model = ModelBroadbridgeWhite::new(&SampleParams::param_broadbridge_white_partial()).unwrap();
        for pc in [-5.0, -1.0, -0.2] {
            let sl = model.seff(pc).unwrap();
            approx_eq(model.capillary_pressure(sl).unwrap(), pc, 1e-9);
        }
        // seff is one for pc ≥ 0, above ss = 0.9
        assert_eq!(model.capillary_pressure(model.seff(0.0).unwrap()).unwrap(), 0.0);
    }

    #[test]
    fn generate_curves_capture_errors() {
        let model = ModelBroadbridgeWhite::new(&SampleParams::param_broadbridge_white()).unwrap();
        assert_eq!(
            model.generate_saturation_curve(-1.0, 0.0, 1).err(),
            Some("npoint must be at least 2")
        );
        assert_eq!(model.generate_relperm_curve(0).err(), Some("npoint must be at least 2"));
    }

    #[test]
    fn generate_saturation_curve_works() {
        let model = ModelBroadbridgeWhite::new(&SampleParams::param_broadbridge_white()).unwrap();
        let data = model.generate_saturation_curve(-4.0, 1.0, 6).unwrap();
        assert_eq!(data.name, "seff");
        assert_eq!(data.x, &[-4.0, -3.0, -2.0, -1.0, 0.0, 1.0]);
        for i in 0..4 {
            assert!(data.y[i] < data.y[i + 1]);
            assert!(data.dy_dx[i] > 0.0);
        }
        assert_eq!(data.y[4], 1.0);
        assert_eq!(data.y[5], 1.0);
        assert_eq!(data.dy_dx[4], 0.0);
        assert_eq!(data.d2y_dx2[5], 0.0);
    }

    #[test]
    fn generate_relperm_curve_works() {
        let model = ModelBroadbridgeWhite::new(&SampleParams::param_broadbridge_white_partial()).unwrap();
        let data = model.generate_relperm_curve(11).unwrap();
        assert_eq!(data.name, "krel");
        assert_eq!(data.x[0], 0.05);
        approx_eq(data.x[10], 0.9, 1e-15);
        assert_eq!(data.y[0], 0.01);
        approx_eq(data.y[10], 0.8, 1e-14);
        for i in 1..10 {
            let num = deriv1_central5(data.x[i], &mut (), |x, _| model.relperm(x)).unwrap();
            approx_eq(data.dy_dx[i], num, 1e-8);
        }
    }
}
