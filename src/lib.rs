//! Porous media flow constitutive models
//!
//! This crate implements the Broadbridge-White relations for unsaturated flow:
//! the Lambert W function, the effective saturation seff(pc), and the relative
//! permeability krel(sl), all with analytical first and second derivatives.
//!
//! # Example
//!
//! ```
//! use pmflow::prelude::*;
//! use pmflow::StrError;
//!
//! fn main() -> Result<(), StrError> {
//!     let (c, sn, ss, las) = (1.5, 0.1, 1.0, 2.0);
//!     assert_eq!(seff(0.0, c, sn, ss, las)?, 1.0);
//!     let s = seff(-1.0, c, sn, ss, las)?;
//!     assert!(s > sn && s < ss);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
pub mod util;
