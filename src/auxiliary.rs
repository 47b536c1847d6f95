// Released under MIT License.
// Copyright (c) 2023-2025 Ladislav Bartos

//! Constants used through the `gromol_rs` library.

/// Smallest coordinate supported by GRO. The actual minimal supported coordinate is
/// -999.999 nm but due to floating point shenanigans, we are slightly more restrictive to be safe.
pub(crate) const GRO_MIN_COORDINATE: f32 = -999.0;
/// Largest coordinate supported by GRO. The actual maximal supported coordinate is
/// 9999.999 nm but due to floating point shenanigans, we are slightly more restrictive to be safe.
pub(crate) const GRO_MAX_COORDINATE: f32 = 9999.0;

/// Smallest box dimension supported by GRO. Box dimensions are written as `{:>10.5}`
/// and must leave at least one space separating them from the preceding value.
pub(crate) const GRO_MIN_BOX: f32 = -99.0;
/// Largest box dimension supported by GRO. Box dimensions are written as `{:>10.5}`
/// and must leave at least one space separating them from the preceding value.
pub(crate) const GRO_MAX_BOX: f32 = 999.0;

/// Atom numbers written into a gro file wrap around this value.
pub(crate) const GRO_MAX_ATOM_NUMBER: usize = 99999;

/// Maximal number of characters of a residue or atom name in a gro file.
pub(crate) const GRO_MAX_NAME_LENGTH: usize = 5;

/// Title written into gro files if no other title is requested.
pub const GRO_DEFAULT_TITLE: &str = "Generated by gromol_rs";

/// Symbol assigned to atoms whose gro label is not present in the symbol table.
pub const UNKNOWN_SYMBOL: &str = "Unknown";
