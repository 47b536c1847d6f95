// Released under MIT License.
// Copyright (c) 2024 Ladislav Bartos

//! Summarizing chemical symbols of a molecule into a formula.

use indexmap::IndexMap;

/// Construct a formula from the chemical symbols of the atoms of a molecule.
///
/// Symbols are sorted alphabetically and followed by their count.
/// The count is omitted if the symbol occurs only once.
///
/// ## Example
/// ```
/// # use gromol_rs::prelude::*;
/// #
/// assert_eq!(make_formula(["O", "H", "H"]), "H2O");
/// assert_eq!(make_formula(["Na"]), "Na");
/// assert_eq!(make_formula(["O", "Unknown", "Unknown"]), "OUnknown2");
/// ```
pub fn make_formula<S: AsRef<str>>(symbols: impl IntoIterator<Item = S>) -> String {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for symbol in symbols {
        *counts.entry(symbol.as_ref().to_owned()).or_default() += 1;
    }

    counts.sort_keys();

    counts
        .iter()
        .map(|(symbol, &count)| match count {
            1 => symbol.to_owned(),
            n => format!("{}{}", symbol, n),
        })
        .collect()
}
