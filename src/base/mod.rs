//! Implements the base structures: constants, parameters, and special functions

mod constants;
mod lambert_w;
mod parameters;
mod sample_params;
pub use crate::base::constants::*;
pub use crate::base::lambert_w::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
pub(crate) use crate::base::parameters::{check_c_sn_ss, check_c_sn_ss_relperm, check_kn_ks, check_las};
