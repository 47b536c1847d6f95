// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of the System structure and its methods.

use getset::Getters;
use std::ops::Range;

use crate::errors::SystemError;
use crate::structures::export::{AtomExport, MoleculeExport};
use crate::structures::{simbox::SimBox, vector3d::Vector3D};

pub mod guess;

/// Molecular system: atoms with positions grouped into molecules.
///
/// All per-atom arrays have the same length (the number of atoms) and all
/// per-molecule arrays have the same length (the number of molecules).
/// Molecule `i` consists of atoms `mol_indices[i]..mol_indices[i + 1]`
/// (the last molecule ends at the last atom of the system).
#[derive(Debug, Clone, PartialEq, Getters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct System {
    /// Positions of the atoms.
    #[getset(get = "pub")]
    positions: Vec<Vector3D>,
    /// Velocities of the atoms. (Optional.)
    #[getset(get = "pub")]
    velocities: Option<Vec<Vector3D>>,
    /// Index of the first atom of each molecule.
    #[getset(get = "pub")]
    mol_indices: Vec<usize>,
    /// Chemical symbol of each atom.
    #[getset(get = "pub")]
    type_array: Vec<String>,
    /// Format-specific metadata of each atom.
    #[getset(get = "pub")]
    atom_export: Vec<AtomExport>,
    /// Format-specific metadata of each molecule.
    #[getset(get = "pub")]
    mol_export: Vec<MoleculeExport>,
    /// Formula of each molecule.
    #[getset(get = "pub")]
    mol_formula: Vec<String>,
    /// Box vectors of the simulation cell. (Optional.)
    #[getset(get = "pub")]
    box_vectors: Option<SimBox>,
}

/// ## Methods for creating `System` structures and accessing their properties.
impl System {
    /// Create a new `System` structure from flat arrays.
    ///
    /// ## Returns
    /// `System` if the arrays are mutually consistent. `SystemError` otherwise.
    ///
    /// ## Example
    /// ```
    /// # use gromol_rs::prelude::*;
    /// #
    /// let system = System::from_arrays(
    ///     vec![[0.0, 0.0, 0.0].into(), [0.1, 0.0, 0.0].into(), [-0.033, 0.094, 0.0].into()],
    ///     vec![0],
    ///     vec!["O".to_owned(), "H".to_owned(), "H".to_owned()],
    ///     vec![AtomExport::gro("OW"), AtomExport::gro("HW1"), AtomExport::gro("HW2")],
    ///     vec![MoleculeExport::gro("SOL")],
    ///     vec!["H2O".to_owned()],
    ///     Some(SimBox::from([1.0, 1.0, 1.0])),
    /// ).unwrap();
    ///
    /// assert_eq!(system.n_atoms(), 3);
    /// assert_eq!(system.n_mol(), 1);
    /// ```
    ///
    /// ## Notes
    /// - Molecule offsets must start at 0 (unless the system is empty),
    ///   be strictly increasing, and be smaller than the number of atoms.
    pub fn from_arrays(
        positions: Vec<Vector3D>,
        mol_indices: Vec<usize>,
        type_array: Vec<String>,
        atom_export: Vec<AtomExport>,
        mol_export: Vec<MoleculeExport>,
        mol_formula: Vec<String>,
        box_vectors: Option<SimBox>,
    ) -> Result<Self, SystemError> {
        let n_atoms = positions.len();
        let n_mol = mol_indices.len();

        for (array, len) in [("type array", type_array.len()), ("atom export array", atom_export.len())] {
            if len != n_atoms {
                return Err(SystemError::AtomArrayMismatch { array, len, n_atoms });
            }
        }

        for (array, len) in [("molecule export array", mol_export.len()), ("molecule formula array", mol_formula.len())] {
            if len != n_mol {
                return Err(SystemError::MoleculeArrayMismatch { array, len, n_mol });
            }
        }

        System::validate_offsets(&mol_indices, n_atoms)?;

        Ok(System {
            positions,
            velocities: None,
            mol_indices,
            type_array,
            atom_export,
            mol_export,
            mol_formula,
            box_vectors,
        })
    }

    /// Attach velocities to the atoms of the system.
    ///
    /// ## Returns
    /// `System` with velocities if there is exactly one velocity per atom. `SystemError` otherwise.
    pub fn with_velocities(mut self, velocities: Vec<Vector3D>) -> Result<Self, SystemError> {
        if velocities.len() != self.n_atoms() {
            return Err(SystemError::AtomArrayMismatch {
                array: "velocity array",
                len: velocities.len(),
                n_atoms: self.n_atoms(),
            });
        }

        self.velocities = Some(velocities);
        Ok(self)
    }

    /// Check that molecule offsets describe contiguous, non-empty molecules.
    fn validate_offsets(mol_indices: &[usize], n_atoms: usize) -> Result<(), SystemError> {
        match mol_indices.first() {
            None if n_atoms == 0 => return Ok(()),
            // atoms exist but no molecule contains them
            None => {
                return Err(SystemError::MoleculeArrayMismatch {
                    array: "molecule offsets",
                    len: 0,
                    n_mol: 0,
                })
            }
            Some(&first) if first != 0 => return Err(SystemError::InvalidFirstOffset(first)),
            Some(_) => (),
        }

        for window in mol_indices.windows(2) {
            if window[1] <= window[0] {
                return Err(SystemError::UnorderedOffsets(window[0], window[1]));
            }
        }

        match mol_indices.last() {
            Some(&last) if last >= n_atoms => Err(SystemError::OffsetOutOfRange(last, n_atoms)),
            _ => Ok(()),
        }
    }

    /// Get the number of atoms in the system.
    #[inline]
    pub fn n_atoms(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of molecules in the system.
    #[inline]
    pub fn n_mol(&self) -> usize {
        self.mol_indices.len()
    }

    /// Get the range of atom indices forming the molecule with the given index.
    /// Returns `None` if the molecule does not exist.
    pub fn mol_atom_range(&self, index: usize) -> Option<Range<usize>> {
        let start = *self.mol_indices.get(index)?;
        let end = self
            .mol_indices
            .get(index + 1)
            .copied()
            .unwrap_or(self.n_atoms());

        Some(start..end)
    }

    /// Get the number of atoms of each molecule.
    pub fn mol_n_atoms(&self) -> Vec<usize> {
        (0..self.n_mol())
            .map(|i| {
                self.mol_atom_range(i)
                    .expect("FATAL GROMOL ERROR | System::mol_n_atoms | Molecule should exist.")
                    .len()
            })
            .collect()
    }

    /// Get mutable access to the positions of the atoms.
    /// The number of atoms cannot be changed this way.
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Vector3D] {
        &mut self.positions
    }

    /// Check whether the system has box vectors.
    #[inline]
    pub fn has_box(&self) -> bool {
        self.box_vectors.is_some()
    }

    /// Set box vectors of the system.
    #[inline]
    pub fn set_box(&mut self, simbox: SimBox) {
        self.box_vectors = Some(simbox);
    }

    /// Remove box vectors from the system.
    #[inline]
    pub fn reset_box(&mut self) {
        self.box_vectors = None;
    }

    /// Replace the export metadata of the atom with the given index.
    /// Returns `false` if the atom does not exist.
    pub fn set_atom_export(&mut self, index: usize, export: AtomExport) -> bool {
        match self.atom_export.get_mut(index) {
            Some(x) => {
                *x = export;
                true
            }
            None => false,
        }
    }

    /// Replace the export metadata of the molecule with the given index.
    /// Returns `false` if the molecule does not exist.
    pub fn set_mol_export(&mut self, index: usize, export: MoleculeExport) -> bool {
        match self.mol_export.get_mut(index) {
            Some(x) => {
                *x = export;
                true
            }
            None => false,
        }
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::utilities::water;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn molecules() {
        let system = water(3);

        assert_eq!(system.n_atoms(), 9);
        assert_eq!(system.n_mol(), 3);
        assert_eq!(system.mol_n_atoms(), vec![3, 3, 3]);
        assert_eq!(system.mol_atom_range(1), Some(3..6));
        assert_eq!(system.mol_atom_range(2), Some(6..9));
        assert_eq!(system.mol_atom_range(3), None);
    }

    #[test]
    fn empty() {
        let system = System::from_arrays(vec![], vec![], vec![], vec![], vec![], vec![], None).unwrap();

        assert_eq!(system.n_atoms(), 0);
        assert_eq!(system.n_mol(), 0);
        assert!(system.mol_n_atoms().is_empty());
        assert!(!system.has_box());
    }

    #[test]
    fn uneven_molecules() {
        let system = System::from_arrays(
            vec![Vector3D::default(); 6],
            vec![0, 2, 5],
            strings(&["C"; 6]),
            vec![AtomExport::default(); 6],
            vec![MoleculeExport::default(); 3],
            strings(&["C2", "C3", "C"]),
            None,
        )
        .unwrap();

        assert_eq!(system.mol_n_atoms(), vec![2, 3, 1]);
    }

    #[test]
    fn type_array_mismatch() {
        let result = System::from_arrays(
            vec![Vector3D::default(); 3],
            vec![0],
            strings(&["O", "H"]),
            vec![AtomExport::default(); 3],
            vec![MoleculeExport::default()],
            strings(&["H2O"]),
            None,
        );

        assert_eq!(
            result,
            Err(SystemError::AtomArrayMismatch {
                array: "type array",
                len: 2,
                n_atoms: 3
            })
        );
    }

    #[test]
    fn formula_mismatch() {
        let result = System::from_arrays(
            vec![Vector3D::default(); 3],
            vec![0],
            strings(&["O", "H", "H"]),
            vec![AtomExport::default(); 3],
            vec![MoleculeExport::default()],
            vec![],
            None,
        );

        assert_eq!(
            result,
            Err(SystemError::MoleculeArrayMismatch {
                array: "molecule formula array",
                len: 0,
                n_mol: 1
            })
        );
    }

    #[test]
    fn invalid_offsets() {
        let build = |offsets: Vec<usize>| {
            let n_mol = offsets.len();
            System::from_arrays(
                vec![Vector3D::default(); 4],
                offsets,
                strings(&["C"; 4]),
                vec![AtomExport::default(); 4],
                vec![MoleculeExport::default(); n_mol],
                vec![String::new(); n_mol],
                None,
            )
        };

        assert_eq!(build(vec![1, 2]), Err(SystemError::InvalidFirstOffset(1)));
        assert_eq!(build(vec![0, 2, 2]), Err(SystemError::UnorderedOffsets(2, 2)));
        assert_eq!(build(vec![0, 3, 1]), Err(SystemError::UnorderedOffsets(3, 1)));
        assert_eq!(build(vec![0, 4]), Err(SystemError::OffsetOutOfRange(4, 4)));
        assert!(matches!(
            build(vec![]),
            Err(SystemError::MoleculeArrayMismatch { .. })
        ));
        assert!(build(vec![0, 1, 3]).is_ok());
    }

    #[test]
    fn velocities() {
        let system = water(1);
        assert!(system.velocities().is_none());

        let with = system
            .clone()
            .with_velocities(vec![Vector3D::new(0.1, 0.2, 0.3); 3])
            .unwrap();
        assert_eq!(with.velocities().as_ref().unwrap().len(), 3);

        assert_eq!(
            system.with_velocities(vec![Vector3D::default(); 2]),
            Err(SystemError::AtomArrayMismatch {
                array: "velocity array",
                len: 2,
                n_atoms: 3
            })
        );
    }

    #[test]
    fn positions_mut() {
        let mut system = water(2);

        system.positions_mut()[4] = Vector3D::new(1.0, 2.0, 3.0);
        for position in system.positions_mut().iter_mut() {
            position.z += 0.5;
        }

        assert_eq!(system.positions()[4], Vector3D::new(1.0, 2.0, 3.5));
        assert_eq!(system.positions()[0], Vector3D::new(0.0, 0.0, 0.5));

        assert_eq!(system.positions_mut().len(), 6);
        assert_eq!(system.n_atoms(), system.atom_export().len());
        assert!(system.gro_lines().is_ok());
    }

    #[test]
    fn box_and_exports() {
        let mut system = water(2);
        assert!(system.has_box());

        system.reset_box();
        assert!(!system.has_box());
        system.set_box(SimBox::from([2.0, 2.0, 2.0]));
        assert!(system.has_box());

        assert!(system.set_atom_export(4, AtomExport::default()));
        assert!(!system.set_atom_export(6, AtomExport::default()));
        assert_eq!(system.atom_export()[4].grotype, None);

        assert!(system.set_mol_export(0, MoleculeExport::gro("WAT")));
        assert!(!system.set_mol_export(2, MoleculeExport::default()));
        assert_eq!(system.mol_export()[0].groname.as_deref(), Some("WAT"));
    }
}
