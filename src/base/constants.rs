/// Defines the directory where the curve files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/pmflow/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/pmflow/test";

/// Relative tolerance on the Lambert-W update |ΔW| ≤ tol |W|
pub const LAMBERT_W_TOLERANCE: f64 = 1e-13;

/// Maximum number of Halley (or Newton) iterations in the Lambert-W solvers
pub const LAMBERT_W_MAX_ITERATIONS: usize = 50;

/// Largest y such that exp(y) is safely representable (used by lambert_w_exp)
pub const LAMBERT_W_LN_Z_MAX: f64 = 700.0;
