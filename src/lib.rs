// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! # gromol_rs: Reading and Writing Gro Files in Rust
//!
//! Rust library for converting between Gromacs gro files and a molecular system
//! composed of atoms grouped into molecules.
//!
//! ## Usage
//!
//! Run
//!
//! ```bash
//! $ cargo add gromol_rs
//! ```
//!
//! Import the crate in your Rust code:
//! ```
//! use gromol_rs::prelude::*;
//! ```
//!
//! ## Examples
//!
//! #### Reading a gro file
//!
//! Read a gro file and print the formula of every molecule.
//!
//! ```no_run
//! use gromol_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     // read a gro file
//!     let system = read_gro("system.gro")?;
//!
//!     // atoms with the same residue number following each other form a molecule
//!     for (i, formula) in system.mol_formula().iter().enumerate() {
//!         println!("molecule {}: {} ({} atoms)", i + 1, formula, system.mol_n_atoms()[i]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Using a custom symbol table
//!
//! Atom labels (e.g. `OW`, `HW1`) are converted to chemical symbols using a symbol table.
//! The default table can be extended by labels loaded from a yaml file.
//!
//! ```no_run
//! use gromol_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let mut symbols = GroSymbols::default();
//!     symbols.update(GroSymbols::from_file("my_symbols.yaml")?);
//!
//!     let system = read_gro_with_symbols("system.gro", &symbols)?;
//!     println!("{:?}", system.mol_formula());
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Writing a gro file
//!
//! Construct a system from arrays and write it into a gro file.
//!
//! ```no_run
//! use gromol_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let system = System::from_arrays(
//!         vec![[0.0, 0.0, 0.0].into(), [0.1, 0.0, 0.0].into(), [-0.033, 0.094, 0.0].into()],
//!         vec![0],
//!         vec!["O".to_owned(), "H".to_owned(), "H".to_owned()],
//!         vec![AtomExport::gro("OW"), AtomExport::gro("HW1"), AtomExport::gro("HW2")],
//!         vec![MoleculeExport::gro("SOL")],
//!         vec!["H2O".to_owned()],
//!         Some(SimBox::from([1.0, 1.0, 1.0])),
//!     )?;
//!
//!     system.write_gro_with_title("water.gro", "A single water molecule")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//! The individual error types provided by the `gromol_rs` are not exported into the `prelude` module.
//! If you want to use a specific error type, include it explicitly from the `errors` module:
//! ```
//! use gromol_rs::errors::ParseGroError;
//! ```
//!
//! ## Limitations
//! - Only the first frame of a gro file is read.
//! - Only orthogonal simulation boxes are supported.
//! - Residue numbers are not preserved: molecules are renumbered from 1 on write.
//!
//! ## License
//! This library is released under the MIT License.

/// Current version of the `gromol_rs` library.
pub const GROMOL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod auxiliary;
pub mod errors;
pub mod io;
pub mod structures {
    pub mod export;
    pub mod formula;
    pub mod simbox;
    pub mod symbols;
    pub mod vector3d;
}
pub mod system;
mod test_utilities;

/// Reexported basic `gromol_rs` structures and functions.
pub mod prelude {
    pub use crate::io::gro_io::{
        parse_gro, parse_gro_line, read_gro, read_gro_with_symbols, write_gro, AtomRecord,
        GroField, GroLine, Motion,
    };
    pub use crate::structures::export::{AtomExport, MoleculeExport};
    pub use crate::structures::formula::make_formula;
    pub use crate::structures::simbox::SimBox;
    pub use crate::structures::symbols::GroSymbols;
    pub use crate::structures::vector3d::Vector3D;
    pub use crate::system::System;
}
