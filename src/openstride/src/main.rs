#[macro_use]
extern crate log;

use std::io::stdout;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use openstride::{OpenStride, OutputFormat, Package, SAMPLE_PACKAGES};

#[derive(Parser)]
pub struct OpenStrideCli {
    /// Print reports as JSON lines
    #[arg(env = "OPENSTRIDE_JSON", long, global = true)]
    pub json: bool,
    #[clap(subcommand)]
    pub subcommand: OpenStrideCommand,
}

#[derive(Subcommand)]
pub enum OpenStrideCommand {
    ///
    /// Report the built-in sensor packages
    ///
    Samples,
    ///
    /// Report a single sensor package, e.g. `report RUN 15000 1 75`
    ///
    Report {
        /// RUN, WLK or SWM
        code: String,
        #[arg(allow_negative_numbers = true)]
        data: Vec<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = dotenv_result {
        debug!(".env not loaded: {}", error);
    }

    let cli = OpenStrideCli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stride = OpenStride::new(format);
    let mut out = stdout().lock();

    match cli.subcommand {
        OpenStrideCommand::Samples => stride.run(&SAMPLE_PACKAGES, &mut out),
        OpenStrideCommand::Report { code, data } => {
            stride.run(&[Package::new(&code, &data)], &mut out)
        }
    }
}
