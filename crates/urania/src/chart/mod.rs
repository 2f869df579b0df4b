pub mod data;

pub use data::{ChartData, ChartDataError};

use crate::aspects::AspectCalculator;
use crate::ephemeris::{ChartRequest, PositionsProvider, ProviderError};
use crate::rendering::ConfigError;
use thiserror::Error;

/// Any failure on the way from a request to a rendered chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] ChartDataError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ChartData {
    /// Fill in `aspects` from the planets when the input carried none
    pub fn ensure_aspects(&mut self) {
        if self.aspects.is_none() {
            self.aspects = Some(AspectCalculator::new().detect(&self.planets));
        }
    }
}

/// Ask `provider` for positions and attach the aspects between them
pub fn build_chart<P: PositionsProvider + ?Sized>(
    provider: &P,
    request: &ChartRequest,
) -> Result<ChartData, ChartError> {
    let mut data = provider.compute_positions(request)?;
    data.aspects = Some(AspectCalculator::new().detect(&data.planets));
    Ok(data)
}
