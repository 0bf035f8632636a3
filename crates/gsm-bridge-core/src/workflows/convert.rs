use crate::core::io::engrad::EngradFile;
use crate::core::io::orca_out::OrcaOutFile;
use crate::core::io::traits::{QmReader, QmWriter};
use crate::core::io::turbomole::{EnergyFile, GradientFile};
use crate::core::models::record::EnergyGradient;
use crate::engine::config::ConversionConfig;
use crate::engine::error::ConvertError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Decimal places of the energy line in a written `.engrad`.
const ENGRAD_ENERGY_DECIMALS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub n_atoms: usize,
    pub total_energy: f64,
    pub engrad_path: PathBuf,
    pub out_path: PathBuf,
    /// `(from, to)` pairs of the source files that were renamed; empty when
    /// renaming was disabled.
    pub renamed: Vec<(PathBuf, PathBuf)>,
}

/// Converts one xtb/Turbomole single point into the ORCA pair read by GSM.
///
/// Every input is validated and both outputs are formatted in memory before
/// anything is written, so a failed run leaves the working directory exactly
/// as it found it.
#[instrument(skip_all, name = "convert_workflow", fields(basename = %config.basename))]
pub fn run(config: &ConversionConfig) -> Result<ConversionReport, ConvertError> {
    // === Phase 1: Input validation ===
    let energy_path = config.energy_path();
    let gradient_path = config.gradient_path();
    let required = config
        .marker_path()
        .into_iter()
        .chain([energy_path.clone(), gradient_path.clone()]);
    for path in required {
        ensure_exists(&path)?;
    }

    let energy = EnergyFile::new(config.source.energy_line())
        .read_from_path(&energy_path)
        .map_err(|e| ConvertError::from_parse(&energy_path, e))?;
    let record = GradientFile
        .read_from_path(&gradient_path)
        .map_err(|e| ConvertError::from_parse(&gradient_path, e))?;
    info!(
        "Read {} atoms with total energy {:.12} Eh from {} output.",
        record.n_atoms(),
        energy.total_energy,
        config.source
    );
    let snapshot = EnergyGradient { energy, record };

    // === Phase 2: Formatting ===
    let engrad_path = config.engrad_path();
    let out_path = config.out_path();
    let engrad_bytes = EngradFile
        .render(&snapshot)
        .map_err(|e| ConvertError::io(&engrad_path, e))?;
    let out_bytes = OrcaOutFile
        .render(&snapshot)
        .map_err(|e| ConvertError::io(&out_path, e))?;

    // === Phase 3: Output ===
    fs::write(&engrad_path, engrad_bytes).map_err(|e| ConvertError::io(&engrad_path, e))?;
    fs::write(&out_path, out_bytes).map_err(|e| ConvertError::io(&out_path, e))?;
    debug!("Wrote {:?} and {:?}", &engrad_path, &out_path);

    if config.verify {
        verify_engrad(&engrad_path, &snapshot)?;
    }

    // === Phase 4: Completion marker ===
    let mut renamed = Vec::new();
    if config.rename_inputs {
        for (from, to) in [
            (energy_path, config.renamed_energy_path()),
            (gradient_path, config.renamed_gradient_path()),
        ] {
            fs::rename(&from, &to).map_err(|e| ConvertError::io(&from, e))?;
            debug!("Renamed {:?} -> {:?}", &from, &to);
            renamed.push((from, to));
        }
    } else {
        warn!("Input renaming disabled; GSM will not see this step as complete.");
    }

    Ok(ConversionReport {
        n_atoms: snapshot.record.n_atoms(),
        total_energy: snapshot.energy.total_energy,
        engrad_path,
        out_path,
        renamed,
    })
}

fn ensure_exists(path: &Path) -> Result<(), ConvertError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConvertError::MissingFile {
            path: path.to_path_buf(),
        })
    }
}

fn verify_engrad(path: &Path, expected: &EnergyGradient) -> Result<(), ConvertError> {
    let data = EngradFile
        .read_from_path(path)
        .map_err(|e| ConvertError::from_parse(path, e))?;

    if data.n_atoms() != expected.record.n_atoms() {
        return Err(ConvertError::Verification(format!(
            "{:?} holds {} atoms, expected {}",
            path,
            data.n_atoms(),
            expected.record.n_atoms()
        )));
    }
    let read_back = format!("{:.*}", ENGRAD_ENERGY_DECIMALS, data.total_energy);
    let written = format!("{:.*}", ENGRAD_ENERGY_DECIMALS, expected.energy.total_energy);
    if read_back != written {
        return Err(ConvertError::Verification(format!(
            "energy read back as {} but {} was written",
            read_back, written
        )));
    }
    let expected_numbers = expected.record.geometry().iter().map(|g| g.atomic_number);
    if !data.atomic_numbers.iter().copied().eq(expected_numbers) {
        return Err(ConvertError::Verification(
            "atomic numbers differ from the source geometry".to_string(),
        ));
    }
    debug!("Verified {:?} (energy {})", path, written);
    Ok(())
}
