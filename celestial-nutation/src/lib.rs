//! IAU 2000 nutation series in pure Rust.
//!
//! `celestial-nutation` evaluates the nutation of Earth's axis: the
//! nutation in longitude Δψ and in obliquity Δε, in radians, for an epoch
//! given in Julian centuries of TT since J2000.0 or as a two-part Julian
//! Date.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`nutation`] | IAU 2000A/2000B models, fundamental arguments, coefficient tables |
//! | [`obliquity`] | Mean (IAU 2006) and true obliquity of the ecliptic |
//! | [`config`] | [`NutationConfig`]: argument order and series truncation |
//! | [`constants`] | Epochs and unit conversions |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Coefficient data
//!
//! The 77 luni-solar rows of IAU 2000B are compiled in. The full IAU 2000A
//! series (678 luni-solar and 687 planetary rows) is read from a JSON
//! coefficient dump; building the full model over anything shorter is an
//! error:
//!
//! ```no_run
//! use std::sync::Arc;
//! use celestial_nutation::{CoefficientTables, NutationIAU2000A};
//!
//! let tables = Arc::new(CoefficientTables::load("nutation.json")?);
//! let nutation = NutationIAU2000A::new(tables)?.compute(2460385.0, 0.000800741);
//! println!("Δψ = {:e} rad, Δε = {:e} rad", nutation.delta_psi, nutation.delta_eps);
//! # Ok::<(), celestial_nutation::AstroError>(())
//! ```
//!
//! # Design Notes
//!
//! - **Evaluation cannot fail**: malformed data is rejected when tables are
//!   built. `compute` returns a plain value; NaN input yields NaN output.
//! - **Shared, immutable tables**: evaluators hold an `Arc` to validated
//!   tables and are `Send + Sync`.
//! - **Bit-reproducible sums**: products are accumulated one at a time in
//!   ascending row order and sines come from `libm`, so results do not depend
//!   on the platform's math library.

pub mod config;
pub mod constants;
pub mod errors;
pub mod math;
pub mod nutation;
pub mod obliquity;
pub mod utils;

pub use config::NutationConfig;
pub use errors::{AstroError, AstroResult};
pub use nutation::{
    CoefficientTables, NutationIAU2000A, NutationIAU2000B, NutationModel, NutationResult,
    RawNutation,
};

#[doc(hidden)]
pub mod test_helpers;
