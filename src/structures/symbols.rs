// Released under MIT License.
// Copyright (c) 2024 Ladislav Bartos

//! Implementation of the GroSymbols structure translating gro atom names to chemical symbols.

use hashbrown::HashMap;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::auxiliary::UNKNOWN_SYMBOL;
use crate::errors::ParseSymbolsError;

/// Layout of a YAML symbol table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SymbolTableFile {
    #[serde(default)]
    labels: IndexMap<String, String>,
    #[serde(default)]
    reverse: IndexMap<String, String>,
}

/// Lookup tables translating atom names used in gro files into chemical symbols and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroSymbols {
    /// Gro atom name -> chemical symbol.
    labels: HashMap<String, String>,
    /// Chemical symbol -> gro atom name.
    reverse: HashMap<String, String>,
}

impl Default for GroSymbols {
    /// Construct the default symbol table.
    ///
    /// ## Notes
    /// - This function parses YAML content from `src/config/gro_symbols.yaml`
    ///   which is included in the library at compile time.
    /// - Parsing is not free. If you need the table repeatedly, clone it.
    fn default() -> Self {
        let yaml = include_str!("../config/gro_symbols.yaml");

        GroSymbols::new_from_string(yaml)
            .expect("FATAL GROMOL ERROR | GroSymbols::default | Default `gro_symbols.yaml` file could not be parsed.")
    }
}

impl GroSymbols {
    /// Construct a new `GroSymbols` structure from the provided YAML file.
    ///
    /// ## Example
    /// The YAML file should look something like this:
    /// ```yaml
    /// ---
    /// labels:
    ///   OW: O
    ///   HW1: H
    ///   HW2: H
    /// reverse:
    ///   O: OW
    ///   H: HW
    /// ...
    /// ```
    /// Both sections are optional.
    pub fn from_file(filename: impl AsRef<Path>) -> Result<Self, ParseSymbolsError> {
        let mut file = File::open(filename.as_ref())
            .map_err(|_| ParseSymbolsError::FileNotFound(Box::from(filename.as_ref())))?;

        let mut yaml = String::new();
        file.read_to_string(&mut yaml)
            .map_err(|_| ParseSymbolsError::FileNotRead(Box::from(filename.as_ref())))?;

        GroSymbols::new_from_string(&yaml)
    }

    /// Parse yaml string into `GroSymbols` structure.
    fn new_from_string(yaml: &str) -> Result<Self, ParseSymbolsError> {
        let table: SymbolTableFile =
            serde_yaml::from_str(yaml).map_err(ParseSymbolsError::CouldNotParseYaml)?;

        if let Some((label, _)) = table.labels.iter().find(|(_, symbol)| symbol.trim().is_empty()) {
            return Err(ParseSymbolsError::EmptySymbol(label.to_owned()));
        }

        Ok(GroSymbols {
            labels: table.labels.into_iter().collect(),
            reverse: table.reverse.into_iter().collect(),
        })
    }

    /// Merge another symbol table into `self`.
    /// Entries of `other` overwrite the entries of `self` with the same key.
    ///
    /// ## Example
    /// ```no_run
    /// # use gromol_rs::prelude::*;
    /// #
    /// let mut symbols = GroSymbols::default();
    /// symbols.update(GroSymbols::from_file("my_symbols.yaml").unwrap());
    /// ```
    pub fn update(&mut self, other: GroSymbols) {
        self.labels.extend(other.labels);
        self.reverse.extend(other.reverse);
    }

    /// Get the chemical symbol for a gro atom name.
    /// Matching is exact, including case.
    #[inline]
    pub fn lookup(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(String::as_str)
    }

    /// Get the chemical symbol for a gro atom name.
    /// Atom names that are not in the table resolve to `Unknown`.
    #[inline]
    pub fn resolve(&self, label: &str) -> &str {
        self.lookup(label).unwrap_or(UNKNOWN_SYMBOL)
    }

    /// Get the gro atom name that should be used for the provided chemical symbol.
    #[inline]
    pub fn to_gro(&self, symbol: &str) -> Option<&str> {
        self.reverse.get(symbol).map(String::as_str)
    }
}
