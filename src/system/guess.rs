// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of System methods for guessing gro names of atoms.

use crate::structures::export::AtomExport;
use crate::structures::symbols::GroSymbols;
use crate::system::System;

/// ## Methods for guessing export metadata of the System.
impl System {
    /// Assign gro atom names to atoms that do not have any, based on their chemical symbols.
    ///
    /// ## Returns
    /// Number of atoms that were assigned a gro atom name.
    ///
    /// ## Example
    /// ```no_run
    /// # use gromol_rs::prelude::*;
    /// #
    /// let mut system = read_gro("system.gro").unwrap();
    /// system.guess_gro_labels(&GroSymbols::default());
    /// ```
    ///
    /// ## Notes
    /// - The gro atom name is taken from the `reverse` section of the symbol table.
    ///   If the symbol is not listed there, the symbol itself is used.
    /// - Atoms which already have a gro atom name assigned are not changed.
    pub fn guess_gro_labels(&mut self, symbols: &GroSymbols) -> usize {
        let mut assigned = 0;

        for (export, symbol) in self.atom_export.iter_mut().zip(self.type_array.iter()) {
            if export.grotype.is_some() {
                continue;
            }

            *export = AtomExport::gro(symbols.to_gro(symbol).unwrap_or(symbol.as_str()));
            assigned += 1;
        }

        assigned
    }
}
