use nalgebra::{Point3, Vector3};
use thiserror::Error;

/// Total electronic energy of a single-point calculation, in Hartree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRecord {
    pub total_energy: f64,
}

/// One atom of the geometry block of a gradient file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryEntry {
    /// The element symbol exactly as it appeared in the source file.
    pub symbol: String,
    /// Atomic number resolved from the element table.
    pub atomic_number: u8,
    /// Cartesian position in Bohr.
    pub position: Point3<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Geometry block has {geometry} atoms but gradient block has {gradient}")]
pub struct LengthMismatch {
    pub geometry: usize,
    pub gradient: usize,
}

/// Geometry and Cartesian gradient of a molecule, aligned by atom index.
///
/// The two blocks always have the same length; the constructor refuses
/// anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRecord {
    geometry: Vec<GeometryEntry>,
    gradient: Vec<Vector3<f64>>,
}

impl GradientRecord {
    pub fn new(
        geometry: Vec<GeometryEntry>,
        gradient: Vec<Vector3<f64>>,
    ) -> Result<Self, LengthMismatch> {
        if geometry.len() != gradient.len() {
            return Err(LengthMismatch {
                geometry: geometry.len(),
                gradient: gradient.len(),
            });
        }
        Ok(Self { geometry, gradient })
    }

    #[inline]
    pub fn n_atoms(&self) -> usize {
        self.geometry.len()
    }

    pub fn geometry(&self) -> &[GeometryEntry] {
        &self.geometry
    }

    /// Gradient components in Hartree/Bohr, one vector per atom.
    pub fn gradient(&self) -> &[Vector3<f64>] {
        &self.gradient
    }

    pub fn atoms(&self) -> impl Iterator<Item = (&GeometryEntry, &Vector3<f64>)> {
        self.geometry.iter().zip(self.gradient.iter())
    }
}

/// Everything one converter step needs: the energy and the per-atom gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyGradient {
    pub energy: EnergyRecord,
    pub record: GradientRecord,
}

/// Contents of an ORCA `.engrad` file as read back from disk.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngradData {
    pub total_energy: f64,
    pub gradient: Vec<Vector3<f64>>,
    pub atomic_numbers: Vec<u8>,
    pub positions: Vec<Point3<f64>>,
}

impl EngradData {
    pub fn n_atoms(&self) -> usize {
        self.atomic_numbers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: &str, atomic_number: u8, z: f64) -> GeometryEntry {
        GeometryEntry {
            symbol: symbol.to_string(),
            atomic_number,
            position: Point3::new(0.0, 0.0, z),
        }
    }

    #[test]
    fn new_accepts_blocks_of_equal_length() {
        let record = GradientRecord::new(
            vec![entry("O", 8, 0.0), entry("H", 1, 1.0)],
            vec![Vector3::new(0.01, 0.0, 0.0), Vector3::new(-0.01, 0.0, 0.0)],
        )
        .unwrap();

        assert_eq!(record.n_atoms(), 2);
        assert_eq!(record.geometry().len(), record.gradient().len());
        let symbols: Vec<_> = record.atoms().map(|(g, _)| g.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["O", "H"]);
    }

    #[test]
    fn new_rejects_blocks_of_different_length() {
        let err = GradientRecord::new(vec![entry("O", 8, 0.0)], vec![]).unwrap_err();
        assert_eq!(
            err,
            LengthMismatch {
                geometry: 1,
                gradient: 0
            }
        );
    }
}
