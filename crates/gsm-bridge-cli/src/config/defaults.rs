use gsm_bridge::engine::config::SourceFlavor;

pub struct DefaultsConfig {
    pub source: SourceFlavor,
    pub verify: bool,
    pub rename_inputs: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source: SourceFlavor::Xtb,
            verify: false,
            rename_inputs: true,
        }
    }
}
