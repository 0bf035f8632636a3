//! ORCA `.engrad` files: atom count, energy, gradient and geometry in a fixed layout.

use super::error::{ParseErrorKind, QmParseError};
use super::traits::{QmReader, QmWriter, collect_lines};
use crate::core::models::record::{EnergyGradient, EngradData};
use nalgebra::{Point3, Vector3};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const ATOM_COUNT_BANNER: &str = "#\n# Number of atoms\n#";
const ENERGY_BANNER: &str = "#\n# The current total energy in Eh\n#";
const GRADIENT_BANNER: &str = "#\n# The current gradient in Eh/bohr\n#";
const GEOMETRY_BANNER: &str = "#\n# The atomic numbers and current coordinates in Bohr\n#";

#[derive(Debug, Clone, Copy, Default)]
pub struct EngradFile;

impl QmWriter for EngradFile {
    type Input = EnergyGradient;

    fn write_to(&self, input: &Self::Input, writer: &mut impl Write) -> io::Result<()> {
        let record = &input.record;

        writeln!(writer, "{}", ATOM_COUNT_BANNER)?;
        writeln!(writer, "{:3}", record.n_atoms())?;

        writeln!(writer, "{}", ENERGY_BANNER)?;
        writeln!(writer, "{:20.12}", input.energy.total_energy)?;

        writeln!(writer, "{}", GRADIENT_BANNER)?;
        for component in record.gradient().iter().flat_map(|g| g.iter()) {
            writeln!(writer, "{:21.12}", component)?;
        }

        writeln!(writer, "{}", GEOMETRY_BANNER)?;
        for entry in record.geometry() {
            let p = &entry.position;
            writeln!(
                writer,
                "{:4} {:13.7} {:13.7} {:13.7}",
                entry.atomic_number, p.x, p.y, p.z
            )?;
        }
        Ok(())
    }
}

fn parse_float(value: &str, line_num: usize, field: &'static str) -> Result<f64, QmParseError> {
    let value = value.trim();
    value.parse().map_err(|_| {
        QmParseError::at(
            line_num,
            ParseErrorKind::InvalidFloat {
                field,
                value: value.to_string(),
            },
        )
    })
}

fn parse_int<T: FromStr>(
    value: &str,
    line_num: usize,
    field: &'static str,
) -> Result<T, QmParseError> {
    let value = value.trim();
    value.parse().map_err(|_| {
        QmParseError::at(
            line_num,
            ParseErrorKind::InvalidInt {
                field,
                value: value.to_string(),
            },
        )
    })
}

impl QmReader for EngradFile {
    type Output = EngradData;

    /// Reads the data lines in order, skipping `#` comment lines: the atom
    /// count, the energy, `3 * n_atoms` gradient components and `n_atoms`
    /// geometry rows.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, QmParseError> {
        let lines = collect_lines(reader)?;
        let mut data_lines = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|(index, line)| (index + 1, line.as_str()));

        let mut next = |what: &'static str| {
            data_lines.next().ok_or_else(|| {
                QmParseError::whole_file(ParseErrorKind::Inconsistent(format!(
                    "File ended before the {} section was complete",
                    what
                )))
            })
        };

        let (line_num, line) = next("atom count")?;
        let n_atoms: usize = parse_int(line, line_num, "atom count")?;
        if n_atoms == 0 {
            return Err(QmParseError::at(line_num, ParseErrorKind::NoAtoms));
        }

        let (line_num, line) = next("energy")?;
        let total_energy = parse_float(line, line_num, "energy")?;

        let mut components = Vec::with_capacity(3 * n_atoms);
        for _ in 0..3 * n_atoms {
            let (line_num, line) = next("gradient")?;
            components.push(parse_float(line, line_num, "gradient component")?);
        }
        let gradient = components
            .chunks_exact(3)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
            .collect();

        let mut atomic_numbers = Vec::with_capacity(n_atoms);
        let mut positions = Vec::with_capacity(n_atoms);
        for _ in 0..n_atoms {
            let (line_num, line) = next("geometry")?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 4 {
                return Err(QmParseError::at(
                    line_num,
                    ParseErrorKind::MissingField {
                        field: "geometry row",
                        expected: 4,
                    },
                ));
            }
            atomic_numbers.push(parse_int::<u8>(tokens[0], line_num, "atomic number")?);
            positions.push(Point3::new(
                parse_float(tokens[1], line_num, "x coordinate")?,
                parse_float(tokens[2], line_num, "y coordinate")?,
                parse_float(tokens[3], line_num, "z coordinate")?,
            ));
        }

        Ok(EngradData {
            total_energy,
            gradient,
            atomic_numbers,
            positions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::{EnergyRecord, GeometryEntry, GradientRecord};
    use std::io::Cursor;

    fn water_like() -> EnergyGradient {
        let record = GradientRecord::new(
            vec![
                GeometryEntry {
                    symbol: "O".into(),
                    atomic_number: 8,
                    position: Point3::new(0.0, 0.0, 0.0),
                },
                GeometryEntry {
                    symbol: "H".into(),
                    atomic_number: 1,
                    position: Point3::new(0.0, 0.0, 1.0),
                },
            ],
            vec![Vector3::new(0.01, 0.0, 0.0), Vector3::new(-0.01, 0.0, 0.0)],
        )
        .unwrap();
        EnergyGradient {
            energy: EnergyRecord {
                total_energy: -76.123456789012,
            },
            record,
        }
    }

    fn render(input: &EnergyGradient) -> String {
        String::from_utf8(EngradFile.render(input).unwrap()).unwrap()
    }

    #[test]
    fn write_to_produces_fixed_width_layout() {
        let text = render(&water_like());
        let expected = "\
#
# Number of atoms
#
  2
#
# The current total energy in Eh
#
    -76.123456789012
#
# The current gradient in Eh/bohr
#
       0.010000000000
       0.000000000000
       0.000000000000
      -0.010000000000
       0.000000000000
       0.000000000000
#
# The atomic numbers and current coordinates in Bohr
#
   8     0.0000000     0.0000000     0.0000000
   1     0.0000000     0.0000000     1.0000000
";
        assert_eq!(text, expected);
    }

    #[test]
    fn read_from_recovers_written_values() {
        let input = water_like();
        let bytes = EngradFile.render(&input).unwrap();
        let data = EngradFile.read_from(&mut Cursor::new(bytes)).unwrap();

        assert_eq!(data.n_atoms(), 2);
        assert!((data.total_energy - input.energy.total_energy).abs() < 5e-13);
        assert_eq!(data.atomic_numbers, vec![8, 1]);
        assert_eq!(data.gradient[1], Vector3::new(-0.01, 0.0, 0.0));
        assert_eq!(data.positions[1], Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn read_from_rejects_truncated_file() {
        let text = render(&water_like());
        let truncated: String = text.lines().take(16).collect::<Vec<_>>().join("\n");
        let err = EngradFile
            .read_from(&mut Cursor::new(truncated))
            .unwrap_err();
        assert!(matches!(
            err,
            QmParseError::Parse {
                line: None,
                kind: ParseErrorKind::Inconsistent(_)
            }
        ));
    }

    #[test]
    fn read_from_rejects_non_numeric_energy() {
        let text = "#\n  1\n#\nnot-a-number\n";
        let err = EngradFile.read_from(&mut Cursor::new(text)).unwrap_err();
        assert!(matches!(
            err,
            QmParseError::Parse {
                line: Some(4),
                kind: ParseErrorKind::InvalidFloat { field: "energy", .. }
            }
        ));
    }
}
