use super::traits::QmWriter;
use crate::core::models::record::EnergyGradient;
use std::io::{self, Write};

const BANNER: &str = "ORCA-Dummy output for GSM TS Optimizer. Not a real ORCA-Output";
const GRADIENT_HEADER: &str = "------------------\nCARTESIAN GRADIENT\n------------------\n";

/// Minimal stand-in for an ORCA log: just the lines the GSM driver scrapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrcaOutFile;

impl QmWriter for OrcaOutFile {
    type Input = EnergyGradient;

    fn write_to(&self, input: &Self::Input, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", BANNER)?;
        writeln!(
            writer,
            "Total Energy       :  {:20.8}",
            input.energy.total_energy
        )?;
        writeln!(writer, "{}", GRADIENT_HEADER)?;

        for (index, (entry, grad)) in input.record.atoms().enumerate() {
            writeln!(
                writer,
                "{:4}{:>4}   :{:15.9}{:15.9}{:15.9}",
                index, entry.symbol, grad.x, grad.y, grad.z
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::{EnergyRecord, GeometryEntry, GradientRecord};
    use nalgebra::{Point3, Vector3};

    #[test]
    fn write_to_produces_summary_table() {
        let input = EnergyGradient {
            energy: EnergyRecord {
                total_energy: -76.123456789012,
            },
            record: GradientRecord::new(
                vec![
                    GeometryEntry {
                        symbol: "O".into(),
                        atomic_number: 8,
                        position: Point3::origin(),
                    },
                    GeometryEntry {
                        symbol: "h".into(),
                        atomic_number: 1,
                        position: Point3::new(0.0, 0.0, 1.0),
                    },
                ],
                vec![Vector3::new(0.01, 0.0, 0.0), Vector3::new(-0.01, 0.0, 0.0)],
            )
            .unwrap(),
        };

        let text = String::from_utf8(OrcaOutFile.render(&input).unwrap()).unwrap();
        let expected = "\
ORCA-Dummy output for GSM TS Optimizer. Not a real ORCA-Output
Total Energy       :          -76.12345679
------------------
CARTESIAN GRADIENT
------------------

   0   O   :    0.010000000    0.000000000    0.000000000
   1   h   :   -0.010000000    0.000000000    0.000000000
";
        assert_eq!(text, expected);
    }
}
