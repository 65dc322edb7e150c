//! Nutation models for the oscillation of Earth's rotational axis.
//!
//! Nutation is the short-period oscillation of Earth's rotational axis about
//! its mean position, on top of precession. It comes from lunar, solar and
//! planetary torques on the equatorial bulge. The principal term has the
//! 18.6-year period of the lunar node and an amplitude of about 9″ in
//! obliquity.
//!
//! | Model | Luni-solar rows | Planetary rows | Precision | Tables |
//! |-------|-----------------|----------------|-----------|--------|
//! | [`NutationIAU2000A`] | 678 | 687 | ~0.1 µas | loaded ([`CoefficientTables::load`]) |
//! | [`NutationIAU2000B`] | 77 | 0 (fixed offset) | ~1 mas | built in |
//!
//! # Output
//!
//! Both models return [`NutationResult`] with `delta_psi` (Δψ) and
//! `delta_eps` (Δε) in radians. `compute_raw` gives the same pair as
//! [`RawNutation`] in the native series unit of 0.1 µas.
//!
//! # Time Argument
//!
//! `compute(jd1, jd2)` takes a two-part Julian Date in TT; `compute_centuries(t)`
//! takes Julian centuries since J2000.0 directly.
//!
//! # Example
//!
//! ```
//! use celestial_nutation::nutation::NutationIAU2000B;
//!
//! let result = NutationIAU2000B::new().compute(2451545.0, 0.0);
//! // At J2000.0: Δψ ≈ -14", Δε ≈ -6"
//! assert!(result.delta_psi < 0.0);
//! assert!(result.delta_eps < 0.0);
//! ```
//!
//! # Sub-modules
//!
//! - [`iau2000a`]: the full series over loaded [`tables`]
//! - [`iau2000b`]: the truncated series over the built-in rows
//! - [`equinoxes`]: complementary terms of the equation of the equinoxes
//! - [`fundamental_args`]: Delaunay and planetary arguments
//! - [`tables`]: coefficient tables, their loader and validation
//! - [`lunisolar_terms`]: the compiled-in luni-solar rows
//! - [`types`]: [`NutationResult`], [`RawNutation`] and [`NutationModel`]

pub mod equinoxes;
pub mod fundamental_args;
pub mod iau2000a;
pub mod iau2000b;
pub mod lunisolar_terms;
pub mod tables;
pub mod types;

pub use equinoxes::{complementary_terms, equation_of_the_equinoxes_complementary_terms};
pub use fundamental_args::{
    fundamental_arguments, fundamental_arguments_truncated, planetary_arguments, FundamentalArgs,
};
pub use iau2000a::NutationIAU2000A;
pub use iau2000b::NutationIAU2000B;
pub use tables::{CoefficientTables, LunisolarTerm, PlanetaryTerm};
pub use types::{NutationModel, NutationResult, RawNutation};
