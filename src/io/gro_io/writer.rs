// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of functions for writing gro files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::auxiliary::{
    GRO_DEFAULT_TITLE, GRO_MAX_ATOM_NUMBER, GRO_MAX_BOX, GRO_MAX_COORDINATE, GRO_MAX_NAME_LENGTH,
    GRO_MIN_BOX, GRO_MIN_COORDINATE,
};
use crate::errors::WriteGroError;
use crate::io::check_coordinate_sizes;
use crate::structures::vector3d::Vector3D;
use crate::system::System;

/// Write the `System` into a gro file with the given name.
///
/// Equivalent to [`System::write_gro`].
pub fn write_gro(filename: impl AsRef<Path>, system: &System) -> Result<(), WriteGroError> {
    system.write_gro(filename)
}

/// ## Methods for writing gro files.
impl System {
    /// Write the `System` into a gro file with the given name.
    ///
    /// ## Returns
    /// `Ok` if writing has been successful. Otherwise `WriteGroError`.
    ///
    /// ## Example
    /// ```no_run
    /// # use gromol_rs::prelude::*;
    /// #
    /// let system = read_gro("system.gro").unwrap();
    /// if let Err(e) = system.write_gro("system_copy.gro") {
    ///     eprintln!("{}", e);
    ///     return;
    /// }
    /// ```
    ///
    /// ## Notes
    /// - The system must have box vectors and every molecule must have `groname`
    ///   and every atom must have `grotype` export metadata.
    /// - The whole file is constructed in memory first. If an error occurs,
    ///   the output file is not created.
    /// - Velocities are written only if the system has them.
    pub fn write_gro(&self, filename: impl AsRef<Path>) -> Result<(), WriteGroError> {
        self.write_gro_with_title(filename, GRO_DEFAULT_TITLE)
    }

    /// Write the `System` into a gro file with the given name, using a custom title line.
    pub fn write_gro_with_title(
        &self,
        filename: impl AsRef<Path>,
        title: &str,
    ) -> Result<(), WriteGroError> {
        let lines = self.gro_lines_with_title(title)?;

        let output = File::create(&filename)
            .map_err(|_| WriteGroError::CouldNotCreate(Box::from(filename.as_ref())))?;

        let mut writer = BufWriter::new(output);

        for line in lines.iter() {
            writeln!(writer, "{}", line).map_err(|_| WriteGroError::CouldNotWrite)?;
        }

        writer.flush().map_err(|_| WriteGroError::CouldNotWrite)?;

        Ok(())
    }

    /// Construct the lines of a gro file describing the `System`.
    /// The lines do not contain newline characters.
    pub fn gro_lines(&self) -> Result<Vec<String>, WriteGroError> {
        self.gro_lines_with_title(GRO_DEFAULT_TITLE)
    }

    /// Construct the lines of a gro file describing the `System`, using a custom title line.
    /// Only the first line of `title` is used.
    pub fn gro_lines_with_title(&self, title: &str) -> Result<Vec<String>, WriteGroError> {
        let simbox = self.box_vectors().as_ref().ok_or(WriteGroError::MissingBox)?;

        if !Vector3D::new(simbox.x(), simbox.y(), simbox.z()).is_within(GRO_MIN_BOX, GRO_MAX_BOX) {
            return Err(WriteGroError::BoxTooLarge);
        }

        if !check_coordinate_sizes(self.positions(), GRO_MIN_COORDINATE, GRO_MAX_COORDINATE) {
            return Err(WriteGroError::CoordinateTooLarge);
        }

        let velocities = self.velocities().as_deref();
        if let Some(vel) = velocities {
            if !check_coordinate_sizes(vel, GRO_MIN_VELOCITY, GRO_MAX_VELOCITY) {
                return Err(WriteGroError::VelocityTooLarge);
            }
        }

        let mut lines = Vec::with_capacity(self.n_atoms() + 3);
        lines.push(title.lines().next().unwrap_or_default().to_owned());
        lines.push(format!("{:>5}", self.n_atoms()));

        let mut atom_number = 0usize;
        for mol in 0..self.n_mol() {
            let residue_name = self.mol_export()[mol]
                .groname
                .as_deref()
                .ok_or(WriteGroError::MissingResidueName(mol + 1))?;

            let atoms = self
                .mol_atom_range(mol)
                .expect("FATAL GROMOL ERROR | System::gro_lines | Molecule should exist.");

            for atom in atoms {
                let atom_name = self.atom_export()[atom]
                    .grotype
                    .as_deref()
                    .ok_or(WriteGroError::MissingAtomName(atom + 1))?;

                atom_number += 1;

                lines.push(format_atom_line(
                    mol + 1,
                    residue_name,
                    atom_name,
                    atom_number % GRO_MAX_ATOM_NUMBER,
                    &self.positions()[atom],
                    velocities.map(|vel| &vel[atom]),
                ));
            }
        }

        lines.push(format!(
            "{:>10.5}{:>10.5}{:>10.5}",
            simbox.x(),
            simbox.y(),
            simbox.z()
        ));

        Ok(lines)
    }
}

/// Smallest velocity that fits into a gro file.
const GRO_MIN_VELOCITY: f32 = -99.0;
/// Largest velocity that fits into a gro file.
const GRO_MAX_VELOCITY: f32 = 999.0;

/// Shorten the name so that it fits into its gro column.
#[inline]
fn fit_name(name: &str) -> &str {
    match name.char_indices().nth(GRO_MAX_NAME_LENGTH) {
        Some((i, _)) => &name[..i],
        None => name,
    }
}

/// Format a single atom line of a gro file.
fn format_atom_line(
    residue_number: usize,
    residue_name: &str,
    atom_name: &str,
    atom_number: usize,
    position: &Vector3D,
    velocity: Option<&Vector3D>,
) -> String {
    let mut line = format!(
        "{:>5}{:<5}{:>5}{:>5}{:>8.3}{:>8.3}{:>8.3}",
        residue_number,
        fit_name(residue_name),
        fit_name(atom_name),
        atom_number,
        position.x,
        position.y,
        position.z,
    );

    if let Some(v) = velocity {
        line.push_str(&format!("{:>8.4}{:>8.4}{:>8.4}", v.x, v.y, v.z));
    }

    line
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests_write {
    use super::*;
    use crate::io::gro_io::{parse_gro, read_gro};
    use crate::structures::export::{AtomExport, MoleculeExport};
    use crate::structures::simbox::SimBox;
    use crate::structures::symbols::GroSymbols;
    use crate::test_utilities::utilities::{compare_systems, water};
    use float_cmp::assert_approx_eq;
    use rand::Rng;
    use tempfile::NamedTempFile;

    #[test]
    fn lines_spc() {
        let lines = water(1).gro_lines().unwrap();

        assert_eq!(
            lines,
            vec![
                "Generated by gromol_rs",
                "    3",
                "    1SOL     OW    1   0.000   0.000   0.000",
                "    1SOL    HW1    2   0.100   0.000   0.000",
                "    1SOL    HW2    3  -0.033   0.094   0.000",
                "   1.00000   1.00000   1.00000",
            ]
        );

        for line in &lines[2..5] {
            assert_eq!(line.len() + 1, 45);
        }
    }

    #[test]
    fn write_spc() {
        let system = read_gro("test_files/spc.gro").unwrap();

        let gro_output = NamedTempFile::new().unwrap();
        let path_to_output = gro_output.path();

        if system.write_gro(path_to_output).is_err() {
            panic!("Writing gro file failed.");
        }

        let mut result = File::open(path_to_output).unwrap();
        let mut expected = File::open("test_files/spc.gro").unwrap();

        assert!(file_diff::diff_files(&mut result, &mut expected));
    }

    #[test]
    fn write_velocities() {
        let system = read_gro("test_files/velocities.gro").unwrap();

        let gro_output = NamedTempFile::new().unwrap();
        let path_to_output = gro_output.path();

        crate::io::gro_io::write_gro(path_to_output, &system).unwrap();

        let mut result = File::open(path_to_output).unwrap();
        let mut expected = File::open("test_files/velocities.gro").unwrap();

        assert!(file_diff::diff_files(&mut result, &mut expected));
    }

    #[test]
    fn write_groups() {
        let system = read_gro("test_files/groups.gro").unwrap();

        let gro_output = NamedTempFile::new().unwrap();
        let path_to_output = gro_output.path();

        system.write_gro(path_to_output).unwrap();

        let mut result = File::open(path_to_output).unwrap();
        let mut expected = File::open("test_files/groups.gro").unwrap();

        assert!(file_diff::diff_files(&mut result, &mut expected));
    }

    #[test]
    fn residue_numbers_are_renumbered() {
        // residue numbers 1, 2, 1 are written as 1, 2, 3
        let system = read_gro("test_files/reused_resid.gro").unwrap();
        let lines = system.gro_lines().unwrap();

        let resids: Vec<&str> = lines[2..9].iter().map(|l| l[0..5].trim()).collect();
        assert_eq!(resids, vec!["1", "1", "1", "2", "3", "3", "3"]);
    }

    #[test]
    fn custom_title() {
        let lines = water(1)
            .gro_lines_with_title("Water box\nsecond line")
            .unwrap();
        assert_eq!(lines[0], "Water box");
    }

    #[test]
    fn round_trip_random() {
        let mut rng = rand::thread_rng();
        let mut system = water(50);

        let positions: Vec<Vector3D> = (0..system.n_atoms())
            .map(|_| {
                Vector3D::new(
                    rng.gen_range(-999.0..9999.0),
                    rng.gen_range(-999.0..9999.0),
                    rng.gen_range(-999.0..9999.0),
                )
            })
            .collect();
        system.positions_mut().copy_from_slice(&positions);
        system.set_box(SimBox::from([
            rng.gen_range(0.0..999.0),
            rng.gen_range(0.0..999.0),
            rng.gen_range(0.0..999.0),
        ]));

        let text = system.gro_lines().unwrap().join("\n") + "\n";
        let parsed = parse_gro(&text, &GroSymbols::default()).unwrap();

        compare_systems(&system, &parsed);

        for (original, new) in system.positions().iter().zip(parsed.positions().iter()) {
            assert_approx_eq!(f32, original.x, new.x, epsilon = 0.002);
            assert_approx_eq!(f32, original.y, new.y, epsilon = 0.002);
            assert_approx_eq!(f32, original.z, new.z, epsilon = 0.002);
        }

        let original = system.box_vectors().as_ref().unwrap();
        let new = parsed.box_vectors().as_ref().unwrap();
        assert_approx_eq!(f32, original.x(), new.x(), epsilon = 0.002);
        assert_approx_eq!(f32, original.y(), new.y(), epsilon = 0.002);
        assert_approx_eq!(f32, original.z(), new.z(), epsilon = 0.002);
    }

    #[test]
    fn largest_box_round_trip() {
        let mut system = water(1);
        system.set_box(SimBox::from([999.0, -99.0, 12.5]));

        let lines = system.gro_lines().unwrap();
        assert_eq!(lines[5], " 999.00000 -99.00000  12.50000");

        let parsed = parse_gro(&(lines.join("\n") + "\n"), &GroSymbols::default()).unwrap();
        let simbox = parsed.box_vectors().as_ref().unwrap();
        assert_approx_eq!(f32, simbox.x(), 999.0);
        assert_approx_eq!(f32, simbox.y(), -99.0);
        assert_approx_eq!(f32, simbox.z(), 12.5);
    }

    #[test]
    fn atom_number_wraps() {
        let n_atoms = 100_001;
        let system = System::from_arrays(
            vec![Vector3D::default(); n_atoms],
            vec![0],
            vec!["C".to_owned(); n_atoms],
            vec![AtomExport::gro("C"); n_atoms],
            vec![MoleculeExport::gro("BIG")],
            vec![format!("C{}", n_atoms)],
            Some(SimBox::from([10.0, 10.0, 10.0])),
        )
        .unwrap();

        let lines = system.gro_lines().unwrap();
        assert_eq!(lines.len(), n_atoms + 3);
        assert_eq!(lines[1], "100001");

        // atom number 99999 is written as 0
        assert_eq!(&lines[2 + 99998][15..20], "    0");
        assert_eq!(&lines[2 + 99999][15..20], "    1");
        assert_eq!(&lines[2 + 100000][15..20], "    2");

        for line in &lines[2..lines.len() - 1] {
            assert_eq!(line.len(), 44);
        }
    }

    #[test]
    fn long_names_are_shortened() {
        let mut system = water(1);
        system.set_mol_export(0, MoleculeExport::gro("WATERS"));
        system.set_atom_export(0, AtomExport::gro("OXYGEN"));

        let lines = system.gro_lines().unwrap();
        assert_eq!(lines[2], "    1WATEROXYGE    1   0.000   0.000   0.000");
    }

    #[test]
    fn empty_system() {
        let mut system = System::from_arrays(vec![], vec![], vec![], vec![], vec![], vec![], None).unwrap();
        system.set_box(SimBox::from([2.5, 2.5, 2.5]));

        assert_eq!(
            system.gro_lines().unwrap(),
            vec!["Generated by gromol_rs", "    0", "   2.50000   2.50000   2.50000"]
        );
    }

    macro_rules! write_gro_fails {
        ($name:ident, $modify:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let mut system = water(2);
                $modify(&mut system);

                let dir = tempfile::tempdir().unwrap();
                let path = dir.path().join("output.gro");

                match system.write_gro(&path) {
                    Err(e) => assert_eq!(e, $expected),
                    Ok(_) => panic!("Writing should have failed, but it did not."),
                }

                // no output is produced
                assert!(!path.exists());
            }
        };
    }

    write_gro_fails!(
        write_no_box,
        |system: &mut System| system.reset_box(),
        WriteGroError::MissingBox
    );

    write_gro_fails!(
        write_missing_groname,
        |system: &mut System| {
            system.set_mol_export(1, MoleculeExport::default());
        },
        WriteGroError::MissingResidueName(2)
    );

    write_gro_fails!(
        write_missing_grotype,
        |system: &mut System| {
            system.set_atom_export(4, AtomExport::default());
        },
        WriteGroError::MissingAtomName(5)
    );

    write_gro_fails!(
        write_too_large_coordinate,
        |system: &mut System| system.positions_mut()[2] = Vector3D::new(0.0, 10000.0, 0.0),
        WriteGroError::CoordinateTooLarge
    );

    write_gro_fails!(
        write_too_small_coordinate,
        |system: &mut System| system.positions_mut()[0] = Vector3D::new(-9999.0, 0.0, 0.0),
        WriteGroError::CoordinateTooLarge
    );

    write_gro_fails!(
        write_too_large_box,
        |system: &mut System| system.set_box(SimBox::from([1234.5, 2000.0, 3000.0])),
        WriteGroError::BoxTooLarge
    );

    write_gro_fails!(
        write_too_small_box,
        |system: &mut System| system.set_box(SimBox::from([1.0, -100.0, 1.0])),
        WriteGroError::BoxTooLarge
    );

    write_gro_fails!(
        write_too_large_velocity,
        |system: &mut System| {
            *system = system
                .clone()
                .with_velocities(vec![Vector3D::new(0.0, 0.0, 1000.0); 6])
                .unwrap();
        },
        WriteGroError::VelocityTooLarge
    );

    #[test]
    fn write_fails_to_create() {
        let system = water(1);

        match system.write_gro("Xhfguiedhqueiowhd/nonexistent.gro") {
            Err(WriteGroError::CouldNotCreate(e)) => {
                assert_eq!(e, Box::from(Path::new("Xhfguiedhqueiowhd/nonexistent.gro")))
            }
            Ok(_) => panic!("Writing should have failed, but it did not."),
            Err(e) => panic!("Incorrect error type `{:?}` was returned.", e),
        }
    }

    #[test]
    fn guessed_labels_can_be_written() {
        let mut system = water(1);
        for i in 0..3 {
            system.set_atom_export(i, AtomExport::default());
        }
        assert!(system.gro_lines().is_err());

        system.guess_gro_labels(&GroSymbols::default());
        let lines = system.gro_lines().unwrap();
        assert_eq!(lines[2], "    1SOL     OW    1   0.000   0.000   0.000");
        assert_eq!(lines[3], "    1SOL     HW    2   0.100   0.000   0.000");
    }
}
