// Released under MIT License.
// Copyright (c) 2024 Ladislav Bartos

//! Format-specific metadata attached to atoms and molecules of a `System`.

/// Export metadata of a single atom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomExport {
    /// Name of the atom as written in a gro file.
    pub grotype: Option<String>,
}

/// Export metadata of a single molecule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoleculeExport {
    /// Name of the residue as written in a gro file.
    pub groname: Option<String>,
}

impl AtomExport {
    /// Create export metadata carrying the provided gro atom name.
    pub fn gro(grotype: &str) -> Self {
        AtomExport {
            grotype: Some(grotype.to_owned()),
        }
    }
}

impl MoleculeExport {
    /// Create export metadata carrying the provided gro residue name.
    pub fn gro(groname: &str) -> Self {
        MoleculeExport {
            groname: Some(groname.to_owned()),
        }
    }
}
