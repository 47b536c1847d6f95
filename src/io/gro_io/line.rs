// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Classification of gro lines and extraction of atom fields from fixed columns.

use std::fmt;
use std::iter;
use std::ops::Range;
use std::str::FromStr;

use crate::errors::ParseGroError;
use crate::structures::{simbox::SimBox, vector3d::Vector3D};

/// Width of an atom line without velocities (including the newline character).
pub const ATOM_LINE_WIDTH: usize = 45;
/// Width of an atom line with velocities (including the newline character).
pub const ATOM_LINE_WIDTH_VELOCITIES: usize = 69;

/// Fields of an atom line in a gro file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroField {
    ResidueNumber,
    ResidueName,
    AtomName,
    AtomNumber,
    PositionX,
    PositionY,
    PositionZ,
    VelocityX,
    VelocityY,
    VelocityZ,
}

const POSITION_FIELDS: [GroField; 3] = [GroField::PositionX, GroField::PositionY, GroField::PositionZ];
const VELOCITY_FIELDS: [GroField; 3] = [GroField::VelocityX, GroField::VelocityY, GroField::VelocityZ];

impl GroField {
    /// Columns occupied by the field (0-indexed, half-open, in characters).
    pub const fn columns(self) -> Range<usize> {
        match self {
            GroField::ResidueNumber => 0..5,
            GroField::ResidueName => 5..10,
            GroField::AtomName => 10..15,
            GroField::AtomNumber => 15..20,
            GroField::PositionX => 20..28,
            GroField::PositionY => 28..36,
            GroField::PositionZ => 36..44,
            GroField::VelocityX => 44..52,
            GroField::VelocityY => 52..60,
            GroField::VelocityZ => 60..68,
        }
    }
}

impl fmt::Display for GroField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroField::ResidueNumber => "residue number",
            GroField::ResidueName => "residue name",
            GroField::AtomName => "atom name",
            GroField::AtomNumber => "atom number",
            GroField::PositionX => "x coordinate",
            GroField::PositionY => "y coordinate",
            GroField::PositionZ => "z coordinate",
            GroField::VelocityX => "x velocity",
            GroField::VelocityY => "y velocity",
            GroField::VelocityZ => "z velocity",
        };

        write!(f, "{}", name)
    }
}

/// Velocity information of an atom line. Selected by the width of the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    WithoutVelocity,
    WithVelocity(Vector3D),
}

/// A single atom line of a gro file.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Residue number as written in the file.
    pub residue_number: usize,
    pub residue_name: String,
    pub atom_name: String,
    /// Atom number as written in the file. Not used for anything.
    pub atom_number: usize,
    pub position: Vector3D,
    pub motion: Motion,
}

impl AtomRecord {
    /// Get the velocity of the atom, if it was provided.
    #[inline]
    pub fn velocity(&self) -> Option<&Vector3D> {
        match &self.motion {
            Motion::WithVelocity(v) => Some(v),
            Motion::WithoutVelocity => None,
        }
    }
}

/// Kind of a parsed gro line.
#[derive(Debug, Clone, PartialEq)]
pub enum GroLine {
    Atom(AtomRecord),
    Box(SimBox),
}

/// Parse a line following the title and the number of atoms.
/// `line_number` is the 1-based number of the line in the file and is only used for error reporting.
///
/// ## Notes
/// - Lines 45 characters wide are atoms without velocities, lines 69 characters wide are atoms
///   with velocities. The width includes the terminating newline, which may be missing.
/// - Any other line is parsed as the box line.
pub fn parse_gro_line(line: &str, line_number: usize) -> Result<GroLine, ParseGroError> {
    match line_width(line) {
        ATOM_LINE_WIDTH => Ok(GroLine::Atom(line_as_atom(line, line_number, false)?)),
        ATOM_LINE_WIDTH_VELOCITIES => Ok(GroLine::Atom(line_as_atom(line, line_number, true)?)),
        _ => Ok(GroLine::Box(line_as_box(line)?)),
    }
}

/// Strip the line terminator (`\n` or `\r\n`) from the line.
#[inline]
fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Number of characters of the line counting one newline character.
#[inline]
fn line_width(line: &str) -> usize {
    strip_newline(line).chars().count() + 1
}

/// Get the content of the given columns of the line.
/// Columns are counted in characters, not bytes.
fn columns(line: &str, range: Range<usize>) -> &str {
    let mut bounds = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(line.len()));

    let start = bounds.nth(range.start).unwrap_or(line.len());
    let end = bounds
        .nth(range.end - range.start - 1)
        .unwrap_or(line.len());

    &line[start..end]
}

/// Parse a numeric field of an atom line.
fn parse_field<T: FromStr>(
    line: &str,
    line_number: usize,
    field: GroField,
) -> Result<T, ParseGroError> {
    let content = columns(line, field.columns()).trim();

    content.parse::<T>().map_err(|_| ParseGroError::ParseFieldErr {
        line: line_number,
        field,
        content: content.to_owned(),
    })
}

/// Parse three consecutive fields as a vector.
fn parse_vector(
    line: &str,
    line_number: usize,
    fields: [GroField; 3],
) -> Result<Vector3D, ParseGroError> {
    let mut vector = [0.0f32; 3];
    for (item, field) in vector.iter_mut().zip(fields) {
        *item = parse_field(line, line_number, field)?;
    }

    Ok(vector.into())
}

/// Parse a line as atom.
fn line_as_atom(
    line: &str,
    line_number: usize,
    velocities: bool,
) -> Result<AtomRecord, ParseGroError> {
    let line = strip_newline(line);

    let residue_number = parse_field::<usize>(line, line_number, GroField::ResidueNumber)?;
    let residue_name = columns(line, GroField::ResidueName.columns()).trim().to_owned();
    let atom_name = columns(line, GroField::AtomName.columns()).trim().to_owned();
    let atom_number = parse_field::<usize>(line, line_number, GroField::AtomNumber)?;
    let position = parse_vector(line, line_number, POSITION_FIELDS)?;

    let motion = if velocities {
        Motion::WithVelocity(parse_vector(line, line_number, VELOCITY_FIELDS)?)
    } else {
        Motion::WithoutVelocity
    };

    Ok(AtomRecord {
        residue_number,
        residue_name,
        atom_name,
        atom_number,
        position,
        motion,
    })
}

/// Parse a line as simulation box dimensions.
fn line_as_box(line: &str) -> Result<SimBox, ParseGroError> {
    let line = strip_newline(line);
    let error = || ParseGroError::ParseBoxLineErr(line.to_owned());

    let values = line
        .split_whitespace()
        .map(|value| value.parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .map_err(|_| error())?;

    match values[..] {
        [a, b, c] => Ok(SimBox::from([a, b, c])),
        _ => Err(error()),
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
