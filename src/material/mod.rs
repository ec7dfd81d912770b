//! Implements the Broadbridge-White constitutive relations for unsaturated flow

mod broadbridge_white;
mod model_broadbridge_white;
pub use crate::material::broadbridge_white::*;
pub use crate::material::model_broadbridge_white::*;
