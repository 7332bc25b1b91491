#[macro_use]
extern crate log;

mod openstride;
pub use openstride::{OpenStride, OutputFormat};

mod packages;
pub use packages::{Package, SAMPLE_PACKAGES};

pub mod algo {
    pub use openstride_algos::*;
}

pub mod types {
    pub use openstride_types::*;
}
