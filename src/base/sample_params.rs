use super::ParamBroadbridgeWhite;

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for the Broadbridge-White model
    ///
    /// These are dimensionless values typical of the verification problems in the literature
    /// (C = 1.5, residual saturation 0.1, full saturation 1.0).
    pub fn param_broadbridge_white() -> ParamBroadbridgeWhite {
        ParamBroadbridgeWhite {
            c: 1.5,
            sn: 0.1,
            ss: 1.0,
            las: 2.0,
            kn: 0.0,
            ks: 1.0,
        }
    }

    /// Returns Broadbridge-White parameters for a soil that is not fully saturated at pc = 0
    ///
    /// Here Sₛ < 1 and Kₙ > 0, thus seff jumps from Sₛ to one at pc = 0.
    pub fn param_broadbridge_white_partial() -> ParamBroadbridgeWhite {
        ParamBroadbridgeWhite {
            c: 3.0,
            sn: 0.05,
            ss: 0.9,
            las: 0.5,
            kn: 0.01,
            ks: 0.8,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
