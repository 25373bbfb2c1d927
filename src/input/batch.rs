use std::path::Path;

use anyhow::Context;
use log::info;
use serde::Deserialize;

use crate::input::{Calculation, CalculationResult};
use crate::utils;

/// A list of calculations, read from a toml file with `[[calculation]]` tables.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Batch {
    #[serde(default, rename = "calculation")]
    calculations: Vec<Calculation>,
}

impl Batch {
    #[must_use]
    pub fn new(calculations: Vec<Calculation>) -> Self {
        Self { calculations }
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let contents = utils::read_to_string(path)
            .with_context(|| format!("failed to read batch file \"{}\"", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("invalid batch file \"{}\"", path.display()))
    }

    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    #[must_use]
    pub fn evaluate(&self) -> Vec<CalculationResult> {
        info!("evaluating {} calculations", self.calculations.len());

        self.calculations
            .iter()
            .map(Calculation::evaluate)
            .collect()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.evaluate())?)
    }

    /// Writes the results as json to `output`.
    pub fn write_json(&self, output: impl AsRef<Path>) -> anyhow::Result<()> {
        let output = output.as_ref();

        utils::write(output, self.to_json()?)
            .with_context(|| format!("failed to write results to \"{}\"", output.display()))
    }
}
