//! Makes available common structures and functions needed to evaluate the models
//!
//! You may write `use pmflow::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{lambert_w, lambert_w_exp, ParamBroadbridgeWhite, SampleParams};
pub use crate::material::{capillary_pressure, d2relperm, d2seff, drelperm, dseff, relperm, seff};
pub use crate::material::ModelBroadbridgeWhite;
pub use crate::util::CurveData;
