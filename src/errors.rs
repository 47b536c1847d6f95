// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Error types that can be returned by the `gromol_rs` library.

use colored::{ColoredString, Colorize};
use std::path::Path;
use thiserror::Error;

use crate::io::gro_io::GroField;

/// Render a path as a yellow string.
fn path_to_yellow(path: &Path) -> ColoredString {
    path.to_str().unwrap_or("<non-utf8 path>").yellow()
}

/// Errors that can occur when reading and parsing gro file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseGroError {
    #[error("{} file '{}' was not found or could not be read", "error:".red().bold(), path_to_yellow(.0))]
    FileNotFound(Box<Path>),
    #[error("{} gro input ended unexpectedly before line {}", "error:".red().bold(), .0.to_string().yellow())]
    LineNotFound(usize),
    #[error("{} could not parse line '{}' as the number of atoms", "error:".red().bold(), .0.yellow())]
    ParseNatomsErr(String),
    #[error("{} could not parse {} of atom on line {}: '{}'", "error:".red().bold(), .field.to_string().yellow(), .line.to_string().yellow(), .content.yellow())]
    ParseFieldErr {
        line: usize,
        field: GroField,
        content: String,
    },
    #[error("{} could not parse line '{}' as box dimensions (expected exactly three numbers)", "error:".red().bold(), .0.yellow())]
    ParseBoxLineErr(String),
    #[error("{} gro input does not contain a box line", "error:".red().bold())]
    MissingBoxLine,
    #[error("{}", .0)]
    InvalidSystem(#[from] SystemError),
}

/// Errors that can occur when writing gro file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WriteGroError {
    #[error("{} gro writer needs box vectors (set them using `System::set_box`)", "error:".red().bold())]
    MissingBox,
    #[error("{} gro writer needs the residue name as {} (missing for molecule {})", "error:".red().bold(), "groname".yellow(), .0.to_string().yellow())]
    MissingResidueName(usize),
    #[error("{} gro writer needs the atom type as {} (missing for atom {})", "error:".red().bold(), "grotype".yellow(), .0.to_string().yellow())]
    MissingAtomName(usize),
    #[error("{} system contains coordinates that are too large to be written in gro format", "error:".red().bold())]
    CoordinateTooLarge,
    #[error("{} system contains velocities that are too large to be written in gro format", "error:".red().bold())]
    VelocityTooLarge,
    #[error("{} box dimensions are too large to be written in gro format", "error:".red().bold())]
    BoxTooLarge,
    #[error("{} file '{}' could not be created", "error:".red().bold(), path_to_yellow(.0))]
    CouldNotCreate(Box<Path>),
    #[error("{} could not write line into file", "error:".red().bold())]
    CouldNotWrite,
}

/// Errors that can occur when assembling a `System` structure from arrays.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SystemError {
    #[error("{} {} has {} entries but the system contains {} atoms", "error:".red().bold(), .array.yellow(), .len.to_string().yellow(), .n_atoms.to_string().yellow())]
    AtomArrayMismatch {
        array: &'static str,
        len: usize,
        n_atoms: usize,
    },
    #[error("{} {} has {} entries but the system contains {} molecules", "error:".red().bold(), .array.yellow(), .len.to_string().yellow(), .n_mol.to_string().yellow())]
    MoleculeArrayMismatch {
        array: &'static str,
        len: usize,
        n_mol: usize,
    },
    #[error("{} first molecule must start at atom 0, not at atom {}", "error:".red().bold(), .0.to_string().yellow())]
    InvalidFirstOffset(usize),
    #[error("{} molecule offsets must be strictly increasing (offset {} follows {})", "error:".red().bold(), .1.to_string().yellow(), .0.to_string().yellow())]
    UnorderedOffsets(usize, usize),
    #[error("{} molecule offset {} is out of range for a system with {} atoms", "error:".red().bold(), .0.to_string().yellow(), .1.to_string().yellow())]
    OffsetOutOfRange(usize, usize),
}

/// Errors that can occur when reading a gro symbol table.
#[derive(Error, Debug)]
pub enum ParseSymbolsError {
    #[error("{} file '{}' was not found", "error:".red().bold(), path_to_yellow(.0))]
    FileNotFound(Box<Path>),
    #[error("{} file '{}' could not be read", "error:".red().bold(), path_to_yellow(.0))]
    FileNotRead(Box<Path>),
    #[error("{} could not parse the symbol table: {}", "error:".red().bold(), .0)]
    CouldNotParseYaml(serde_yaml::Error),
    #[error("{} gro label '{}' is assigned an empty symbol", "error:".red().bold(), .0.yellow())]
    EmptySymbol(String),
}
