use thiserror::Error;

/// A configuration value that would make the engine produce meaningless windows.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("item extent must be a finite positive number, got {0}")]
    NonPositiveExtent(f64),
    #[error("viewport extent must be a finite positive number, got {0}")]
    NonPositiveViewport(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// A measured extent was negative, NaN or infinite. The ledger was left untouched.
    #[error("invalid measurement: extent {extent} is not a finite non-negative number")]
    InvalidMeasurement { extent: f64 },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

pub(crate) fn check_extent(extent: f64) -> Result<f64> {
    if extent.is_finite() && extent >= 0.0 {
        Ok(extent)
    } else {
        Err(Error::InvalidMeasurement { extent })
    }
}
