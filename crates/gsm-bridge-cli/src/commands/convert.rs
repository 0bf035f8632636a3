use crate::cli::Cli;
use crate::config;
use crate::error::Result;
use gsm_bridge::workflows;
use tracing::info;

pub fn run(args: &Cli) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = config::build_config(args)?;

    info!(
        "Converting {} output for '{}' in {:?}",
        config.source, config.basename, &config.workdir
    );
    let report = workflows::convert::run(&config)?;

    info!(
        "Wrote {} atoms (E = {:.12} Eh) to {:?} and {:?}",
        report.n_atoms, report.total_energy, &report.engrad_path, &report.out_path
    );
    for (from, to) in &report.renamed {
        info!("Renamed {:?} -> {:?}", from, to);
    }

    println!(
        "✓ {} atoms, E = {:.8} Eh written to: {}",
        report.n_atoms,
        report.total_energy,
        report.engrad_path.display()
    );
    Ok(())
}
