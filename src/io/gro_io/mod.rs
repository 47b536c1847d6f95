// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of functions for reading and writing gro files.

mod grouping;
pub mod line;
mod writer;

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub use line::{parse_gro_line, AtomRecord, GroField, GroLine, Motion};
pub use writer::write_gro;

use crate::errors::ParseGroError;
use crate::structures::export::{AtomExport, MoleculeExport};
use crate::structures::formula::make_formula;
use crate::structures::symbols::GroSymbols;
use crate::structures::{simbox::SimBox, vector3d::Vector3D};
use crate::system::System;

use grouping::group_molecules;

/// Symbol table used by `read_gro`. Parsed on first use.
static DEFAULT_SYMBOLS: OnceLock<GroSymbols> = OnceLock::new();

/// Read a gro file and construct a System structure.
/// Atom names are translated to chemical symbols using the default `GroSymbols`.
///
/// ## Example
/// ```no_run
/// # use gromol_rs::prelude::*;
/// #
/// let system = match read_gro("system.gro") {
///     Ok(x) => x,
///     Err(e) => {
///         eprintln!("{}", e);
///         return;
///     }
/// };
///
/// println!("{} molecules", system.n_mol());
/// ```
///
/// ## Notes
/// - The residue name of each molecule is stored as `groname` in the molecule's export metadata.
/// - The atom name of each atom is stored as `grotype` in the atom's export metadata.
/// - Everything following the box line is ignored. Multi-frame gro files are not supported.
pub fn read_gro(filename: impl AsRef<Path>) -> Result<System, ParseGroError> {
    read_gro_with_symbols(filename, DEFAULT_SYMBOLS.get_or_init(GroSymbols::default))
}

/// Read a gro file and construct a System structure using the provided symbol table.
pub fn read_gro_with_symbols(
    filename: impl AsRef<Path>,
    symbols: &GroSymbols,
) -> Result<System, ParseGroError> {
    let content = fs::read_to_string(filename.as_ref())
        .map_err(|_| ParseGroError::FileNotFound(Box::from(filename.as_ref())))?;

    parse_gro(&content, symbols)
}

/// Parse the content of a gro file and construct a System structure.
///
/// ## Example
/// ```
/// # use gromol_rs::prelude::*;
/// #
/// let content = "Water\n\
///     3\n    \
///     1SOL     OW    1   0.000   0.000   0.000\n    \
///     1SOL    HW1    2   0.100   0.000   0.000\n    \
///     1SOL    HW2    3  -0.033   0.094   0.000\n   \
///     1.00000   1.00000   1.00000\n";
///
/// let system = parse_gro(content, &GroSymbols::default()).unwrap();
/// assert_eq!(system.n_mol(), 1);
/// assert_eq!(system.mol_formula()[0], "H2O");
/// ```
pub fn parse_gro(content: &str, symbols: &GroSymbols) -> Result<System, ParseGroError> {
    let mut lines = content.split_inclusive('\n');

    // title is not stored
    lines.next().ok_or(ParseGroError::LineNotFound(1))?;
    let n_atoms = get_natoms(lines.next().ok_or(ParseGroError::LineNotFound(2))?)?;

    // the number of atoms from the header is only a hint
    let mut records = Vec::with_capacity(n_atoms.min(content.len() / line::ATOM_LINE_WIDTH));
    let mut simulation_box = None;

    for (i, raw_line) in lines.enumerate() {
        match parse_gro_line(raw_line, i + 3)? {
            GroLine::Atom(record) => records.push(record),
            GroLine::Box(simbox) => {
                simulation_box = Some(simbox);
                break;
            }
        }
    }

    let simulation_box = simulation_box.ok_or(ParseGroError::MissingBoxLine)?;

    assemble_system(records, simulation_box, symbols)
}

/// Parse a line as the number of atoms.
fn get_natoms(line: &str) -> Result<usize, ParseGroError> {
    line.trim()
        .parse::<usize>()
        .map_err(|_| ParseGroError::ParseNatomsErr(line.trim().to_owned()))
}

/// Construct a System structure from parsed atom records and box.
fn assemble_system(
    records: Vec<AtomRecord>,
    simulation_box: SimBox,
    symbols: &GroSymbols,
) -> Result<System, ParseGroError> {
    let type_array: Vec<String> = records
        .iter()
        .map(|record| symbols.resolve(&record.atom_name).to_owned())
        .collect();

    let groups = group_molecules(&records);
    let mol_indices: Vec<usize> = groups.iter().map(|group| group.atoms.start).collect();
    let mol_export: Vec<MoleculeExport> = groups
        .iter()
        .map(|group| MoleculeExport::gro(group.name))
        .collect();
    let mol_formula: Vec<String> = groups
        .iter()
        .map(|group| make_formula(&type_array[group.atoms.clone()]))
        .collect();

    // velocities are only kept if all atoms have them
    let velocities: Option<Vec<Vector3D>> = if records.is_empty() {
        None
    } else {
        records.iter().map(|record| record.velocity().copied()).collect()
    };

    let (positions, atom_export): (Vec<Vector3D>, Vec<AtomExport>) = records
        .into_iter()
        .map(|record| {
            (
                record.position,
                AtomExport {
                    grotype: Some(record.atom_name),
                },
            )
        })
        .unzip();

    let system = System::from_arrays(
        positions,
        mol_indices,
        type_array,
        atom_export,
        mol_export,
        mol_formula,
        Some(simulation_box),
    )?;

    match velocities {
        Some(velocities) => Ok(system.with_velocities(velocities)?),
        None => Ok(system),
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
