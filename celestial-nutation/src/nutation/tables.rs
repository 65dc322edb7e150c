//! Coefficient tables for the luni-solar and planetary nutation series.
//!
//! A [`CoefficientTables`] value is always validated: the only ways to build
//! one are [`CoefficientTables::new`], the JSON loaders, and
//! [`CoefficientTables::builtin`], and each rejects malformed data before an
//! evaluator can see it. After construction the tables are immutable and are
//! shared between evaluators through [`Arc`].
//!
//! # Data sources
//!
//! - [`CoefficientTables::builtin`]: compiled-in rows covering the IAU 2000B
//!   series (77 luni-solar rows, no planetary rows). Built once per process.
//! - [`CoefficientTables::load`]: a JSON coefficient dump with the full
//!   IAU 2000A series (678 luni-solar and 687 planetary rows), in the layout
//!   produced by exporting Skyfield's `nutation.npz` arrays:
//!
//! ```text
//! {
//!   "nals_t":                           [[l, l', F, D, Ω], ...],
//!   "lunisolar_longitude_coefficients": [[S, S', C], ...],
//!   "lunisolar_obliquity_coefficients": [[C, C', S], ...],
//!   "napl_t":                           [[l, l', F, D, Ω, Me, ..., Ne, pA], ...],
//!   "nutation_coefficients_longitude":  [[S, C], ...],
//!   "nutation_coefficients_obliquity":  [[S, C], ...]
//! }
//! ```
//!
//! Other keys in the dump are ignored. The planetary keys may be absent, in
//! which case only the luni-solar series is available.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use log::debug;
use serde::Deserialize;

use super::lunisolar_terms::LUNISOLAR_TERMS;
use crate::constants::{IAU2000A_LUNISOLAR_TERMS, IAU2000A_PLANETARY_TERMS};
use crate::errors::{AstroError, AstroResult};

/// One row of the luni-solar series. Amplitudes are in 0.1 µas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarTerm {
    /// Multipliers of `l, l', F, D, Ω`.
    pub multipliers: [i8; 5],
    /// Δψ amplitudes: sine, sine × t, cosine.
    pub longitude: [f64; 3],
    /// Δε amplitudes: cosine, cosine × t, sine.
    pub obliquity: [f64; 3],
}

/// One row of the planetary series. Amplitudes are in 0.1 µas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryTerm {
    /// Multipliers of the fourteen planetary arguments.
    pub multipliers: [i8; 14],
    /// Δψ amplitudes: sine, cosine.
    pub longitude: [f64; 2],
    /// Δε amplitudes: sine, cosine.
    pub obliquity: [f64; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTables {
    lunisolar: Vec<LunisolarTerm>,
    planetary: Vec<PlanetaryTerm>,
}

static BUILTIN: OnceLock<Arc<CoefficientTables>> = OnceLock::new();

impl CoefficientTables {
    /// Builds tables from already-typed rows.
    ///
    /// Fails if there is no luni-solar row or an amplitude is not finite.
    pub fn new(lunisolar: Vec<LunisolarTerm>, planetary: Vec<PlanetaryTerm>) -> AstroResult<Self> {
        if lunisolar.is_empty() {
            return Err(AstroError::malformed_table(
                "lunisolar",
                "table has no rows",
            ));
        }
        for (row, term) in lunisolar.iter().enumerate() {
            check_finite("lunisolar", row, term.longitude.iter().chain(&term.obliquity))?;
        }
        for (row, term) in planetary.iter().enumerate() {
            check_finite("planetary", row, term.longitude.iter().chain(&term.obliquity))?;
        }
        debug!(
            "validated nutation coefficient tables: {} luni-solar rows, {} planetary rows",
            lunisolar.len(),
            planetary.len()
        );
        Ok(Self {
            lunisolar,
            planetary,
        })
    }

    /// The compiled-in IAU 2000B rows, built on first use.
    pub fn builtin() -> Arc<Self> {
        BUILTIN
            .get_or_init(|| {
                let lunisolar = LUNISOLAR_TERMS
                    .iter()
                    .map(|&(nl, nlp, nf, nd, nom, sp, spt, cp, ce, cet, se)| LunisolarTerm {
                        multipliers: [nl, nlp, nf, nd, nom],
                        longitude: [sp, spt, cp],
                        obliquity: [ce, cet, se],
                    })
                    .collect();
                Arc::new(Self {
                    lunisolar,
                    planetary: Vec::new(),
                })
            })
            .clone()
    }

    /// Parses and validates a JSON coefficient dump.
    pub fn from_json_str(json: &str) -> AstroResult<Self> {
        let dump: CoefficientDump = serde_json::from_str(json)
            .map_err(|e| AstroError::data_error("coefficient dump", "parse", &e.to_string()))?;
        Self::from_dump(dump)
    }

    /// Reads, parses and validates a JSON coefficient dump.
    pub fn from_reader<R: Read>(reader: R) -> AstroResult<Self> {
        let dump: CoefficientDump = serde_json::from_reader(reader)
            .map_err(|e| AstroError::data_error("coefficient dump", "parse", &e.to_string()))?;
        Self::from_dump(dump)
    }

    /// Loads a JSON coefficient dump from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> AstroResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AstroError::data_error(
                "coefficient dump",
                "open",
                &format!("{}: {}", path.display(), e),
            )
        })?;
        debug!("loading nutation coefficients from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    pub fn lunisolar(&self) -> &[LunisolarTerm] {
        &self.lunisolar
    }

    pub fn planetary(&self) -> &[PlanetaryTerm] {
        &self.planetary
    }

    /// `true` when both series carry every IAU 2000A row.
    pub fn is_complete(&self) -> bool {
        self.lunisolar.len() >= IAU2000A_LUNISOLAR_TERMS
            && self.planetary.len() >= IAU2000A_PLANETARY_TERMS
    }
}

#[derive(Debug, Deserialize)]
struct CoefficientDump {
    nals_t: Vec<Vec<f64>>,
    lunisolar_longitude_coefficients: Vec<Vec<f64>>,
    lunisolar_obliquity_coefficients: Vec<Vec<f64>>,
    #[serde(default)]
    napl_t: Vec<Vec<f64>>,
    #[serde(default)]
    nutation_coefficients_longitude: Vec<Vec<f64>>,
    #[serde(default)]
    nutation_coefficients_obliquity: Vec<Vec<f64>>,
}

impl CoefficientTables {
    fn from_dump(dump: CoefficientDump) -> AstroResult<Self> {
        let rows = dump.nals_t.len();
        check_row_count("lunisolar_longitude_coefficients", rows, &dump.lunisolar_longitude_coefficients)?;
        check_row_count("lunisolar_obliquity_coefficients", rows, &dump.lunisolar_obliquity_coefficients)?;

        let mut lunisolar = Vec::with_capacity(rows);
        for row in 0..rows {
            lunisolar.push(LunisolarTerm {
                multipliers: multipliers("nals_t", row, &dump.nals_t[row])?,
                longitude: amplitudes(
                    "lunisolar_longitude_coefficients",
                    row,
                    &dump.lunisolar_longitude_coefficients[row],
                )?,
                obliquity: amplitudes(
                    "lunisolar_obliquity_coefficients",
                    row,
                    &dump.lunisolar_obliquity_coefficients[row],
                )?,
            });
        }

        let rows = dump.napl_t.len();
        check_row_count("nutation_coefficients_longitude", rows, &dump.nutation_coefficients_longitude)?;
        check_row_count("nutation_coefficients_obliquity", rows, &dump.nutation_coefficients_obliquity)?;

        let mut planetary = Vec::with_capacity(rows);
        for row in 0..rows {
            planetary.push(PlanetaryTerm {
                multipliers: multipliers("napl_t", row, &dump.napl_t[row])?,
                longitude: amplitudes(
                    "nutation_coefficients_longitude",
                    row,
                    &dump.nutation_coefficients_longitude[row],
                )?,
                obliquity: amplitudes(
                    "nutation_coefficients_obliquity",
                    row,
                    &dump.nutation_coefficients_obliquity[row],
                )?,
            });
        }

        Self::new(lunisolar, planetary)
    }
}

fn check_row_count(table: &str, expected: usize, rows: &[Vec<f64>]) -> AstroResult<()> {
    if rows.len() != expected {
        return Err(AstroError::malformed_table(
            table,
            &format!("{} rows, expected {} to match the multiplier table", rows.len(), expected),
        ));
    }
    Ok(())
}

fn check_columns(table: &str, row: usize, values: &[f64], expected: usize) -> AstroResult<()> {
    if values.len() != expected {
        return Err(AstroError::malformed_table(
            table,
            &format!("row {} has {} columns, expected {}", row, values.len(), expected),
        ));
    }
    Ok(())
}

fn check_finite<'a>(
    table: &str,
    row: usize,
    values: impl IntoIterator<Item = &'a f64>,
) -> AstroResult<()> {
    if values.into_iter().any(|v| !v.is_finite()) {
        return Err(AstroError::malformed_table(
            table,
            &format!("row {} has a non-finite amplitude", row),
        ));
    }
    Ok(())
}

fn multipliers<const N: usize>(table: &str, row: usize, values: &[f64]) -> AstroResult<[i8; N]> {
    check_columns(table, row, values, N)?;
    let mut out = [0i8; N];
    for (slot, &value) in out.iter_mut().zip(values) {
        if value.fract() != 0.0 || value < i8::MIN as f64 || value > i8::MAX as f64 {
            return Err(AstroError::malformed_table(
                table,
                &format!("row {} has non-integral or out-of-range multiplier {}", row, value),
            ));
        }
        *slot = value as i8;
    }
    Ok(out)
}

fn amplitudes<const N: usize>(table: &str, row: usize, values: &[f64]) -> AstroResult<[f64; N]> {
    check_columns(table, row, values, N)?;
    let mut out = [0.0; N];
    out.copy_from_slice(values);
    Ok(out)
}
