//! Readers for the `energy` and `gradient` control files written by xtb and Turbomole.

use super::error::{ParseErrorKind, QmParseError};
use super::fortran::parse_fortran_f64;
use super::traits::{QmReader, collect_lines};
use crate::core::elements;
use crate::core::models::record::{EnergyRecord, GeometryEntry, GradientRecord};
use nalgebra::{Point3, Vector3};
use std::io::BufRead;
use tracing::{debug, trace};

/// Header lines preceding the geometry block when the file has no trailer.
pub const HEADER_LINES: usize = 3;
/// Header lines of the native Turbomole layout (`$grad`, `cycle = ...`), which
/// is closed by a `$end` trailer instead.
pub const TURBOMOLE_HEADER_LINES: usize = 2;

/// Which line of the `energy` file carries the total energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnergyLineSelector {
    /// The line right after `$energy`, as written by xtb.
    #[default]
    Second,
    /// The last cycle before `$end`, as accumulated by Turbomole.
    SecondToLast,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyFile {
    pub selector: EnergyLineSelector,
}

impl EnergyFile {
    pub fn new(selector: EnergyLineSelector) -> Self {
        Self { selector }
    }
}

impl QmReader for EnergyFile {
    type Output = EnergyRecord;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, QmParseError> {
        let lines = collect_lines(reader)?;
        if lines.len() < 2 {
            return Err(QmParseError::whole_file(ParseErrorKind::TooFewLines {
                found: lines.len(),
                required: 2,
            }));
        }

        let index = match self.selector {
            EnergyLineSelector::Second => 1,
            EnergyLineSelector::SecondToLast => lines.len() - 2,
        };
        let line_num = index + 1;

        let token = lines[index].split_whitespace().nth(1).ok_or_else(|| {
            QmParseError::at(
                line_num,
                ParseErrorKind::MissingField {
                    field: "energy",
                    expected: 2,
                },
            )
        })?;
        let total_energy = parse_fortran_f64(token).map_err(|_| {
            QmParseError::at(
                line_num,
                ParseErrorKind::InvalidFloat {
                    field: "energy",
                    value: token.to_string(),
                },
            )
        })?;

        debug!("Read total energy {} Eh from line {}", total_energy, line_num);
        Ok(EnergyRecord { total_energy })
    }
}

/// Number of atoms implied by the line count of a gradient file.
///
/// The file must hold exactly `2 * n_atoms + 3` lines with `n_atoms > 0`.
pub fn atom_count(total_lines: usize) -> Result<usize, QmParseError> {
    if total_lines < HEADER_LINES {
        return Err(QmParseError::whole_file(ParseErrorKind::TooFewLines {
            found: total_lines,
            required: HEADER_LINES,
        }));
    }
    let body = total_lines - HEADER_LINES;
    if body % 2 != 0 {
        return Err(QmParseError::whole_file(ParseErrorKind::UnpairedBlocks {
            lines: total_lines,
        }));
    }
    if body == 0 {
        return Err(QmParseError::whole_file(ParseErrorKind::NoAtoms));
    }
    Ok(body / 2)
}

/// Index of the first geometry line.
///
/// A `$`-keyword on the last line marks the native Turbomole layout, whose
/// header is one line shorter because the trailer takes the third slot.
fn body_offset(lines: &[String]) -> usize {
    match lines.last() {
        Some(last) if last.trim_start().starts_with('$') => TURBOMOLE_HEADER_LINES,
        _ => HEADER_LINES,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GradientFile;

impl GradientFile {
    fn parse_geometry_line(line: &str, line_num: usize) -> Result<GeometryEntry, QmParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(QmParseError::at(
                line_num,
                ParseErrorKind::MissingField {
                    field: "geometry entry",
                    expected: 4,
                },
            ));
        }

        let mut coords = [0.0; 3];
        for (axis, (slot, token)) in coords.iter_mut().zip(&tokens[..3]).enumerate() {
            *slot = parse_fortran_f64(token).map_err(|_| {
                QmParseError::at(
                    line_num,
                    ParseErrorKind::InvalidFloat {
                        field: COORD_FIELDS[axis],
                        value: token.to_string(),
                    },
                )
            })?;
        }

        let symbol = tokens[3];
        let atomic_number =
            elements::atomic_number(symbol).ok_or_else(|| QmParseError::UnknownElement {
                line: line_num,
                symbol: symbol.to_string(),
            })?;

        Ok(GeometryEntry {
            symbol: symbol.to_string(),
            atomic_number,
            position: Point3::new(coords[0], coords[1], coords[2]),
        })
    }

    fn parse_gradient_line(line: &str, line_num: usize) -> Result<Vector3<f64>, QmParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(QmParseError::at(
                line_num,
                ParseErrorKind::MissingField {
                    field: "gradient entry",
                    expected: 3,
                },
            ));
        }

        let mut components = [0.0; 3];
        for (axis, (slot, token)) in components.iter_mut().zip(&tokens[..3]).enumerate() {
            *slot = parse_fortran_f64(token).map_err(|_| {
                QmParseError::at(
                    line_num,
                    ParseErrorKind::InvalidFloat {
                        field: GRAD_FIELDS[axis],
                        value: token.to_string(),
                    },
                )
            })?;
        }
        Ok(Vector3::new(components[0], components[1], components[2]))
    }
}

const COORD_FIELDS: [&str; 3] = ["x coordinate", "y coordinate", "z coordinate"];
const GRAD_FIELDS: [&str; 3] = ["x gradient", "y gradient", "z gradient"];

impl QmReader for GradientFile {
    type Output = GradientRecord;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, QmParseError> {
        let lines = collect_lines(reader)?;
        let n_atoms = atom_count(lines.len())?;
        let offset = body_offset(&lines);
        debug!(
            "Gradient file has {} lines: {} atoms, geometry block at line {}",
            lines.len(),
            n_atoms,
            offset + 1
        );

        let geometry_range = offset..offset + n_atoms;
        let gradient_range = offset + n_atoms..offset + 2 * n_atoms;

        let geometry = lines[geometry_range.clone()]
            .iter()
            .zip(geometry_range)
            .map(|(line, index)| Self::parse_geometry_line(line, index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let gradient = lines[gradient_range.clone()]
            .iter()
            .zip(gradient_range)
            .map(|(line, index)| Self::parse_gradient_line(line, index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        trace!("Parsed geometry: {:?}", geometry);

        GradientRecord::new(geometry, gradient)
            .map_err(|e| QmParseError::whole_file(ParseErrorKind::Inconsistent(e.to_string())))
    }
}
