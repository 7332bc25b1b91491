use std::io::Write;

use openstride_algos::{CalculationResult, read_package};

use crate::Package;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct OpenStride {
    pub format: OutputFormat,
}

impl OpenStride {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn handle_package(&self, package: Package<'_>) -> anyhow::Result<CalculationResult> {
        let training = read_package(package.code, package.data)?;
        Ok(training.show_training_info())
    }

    pub fn render(&self, info: &CalculationResult) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(info.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(info)?),
        }
    }

    /// Writes one line per package. Stops at the first package that cannot be read.
    pub fn run<W: Write>(&self, packages: &[Package<'_>], out: &mut W) -> anyhow::Result<()> {
        for package in packages {
            let info = match self.handle_package(*package) {
                Ok(info) => info,
                Err(e) => {
                    error!("{}: {}", package.code, e);
                    return Err(e);
                }
            };

            writeln!(out, "{}", self.render(&info)?)?;
        }

        info!("Reported {} packages", packages.len());
        Ok(())
    }
}
