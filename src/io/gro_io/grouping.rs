// Released under MIT License.
// Copyright (c) 2024 Ladislav Bartos

//! Collapsing atom records into molecules.

use std::ops::Range;

use super::line::AtomRecord;

/// Contiguous run of atom records sharing the same residue number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MoleculeGroup<'a> {
    /// Residue name of the first atom of the molecule.
    pub(crate) name: &'a str,
    /// Indices of the atoms forming the molecule.
    pub(crate) atoms: Range<usize>,
}

/// Get indices of atoms starting a new molecule.
///
/// A new molecule starts whenever the residue number differs from the residue number
/// of the previous atom. The same residue number appearing again later in the file
/// therefore starts a new molecule.
pub(crate) fn molecule_starts(records: &[AtomRecord]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|&(i, record)| i == 0 || records[i - 1].residue_number != record.residue_number)
        .map(|(i, _)| i)
        .collect()
}

/// Split atom records into molecules.
pub(crate) fn group_molecules(records: &[AtomRecord]) -> Vec<MoleculeGroup<'_>> {
    let starts = molecule_starts(records);

    starts
        .iter()
        .enumerate()
        .map(|(g, &start)| {
            let end = starts.get(g + 1).copied().unwrap_or(records.len());
            MoleculeGroup {
                name: &records[start].residue_name,
                atoms: start..end,
            }
        })
        .collect()
}
