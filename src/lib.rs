pub mod math;
pub mod means;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use means::mean::Mean;
pub use means::zero::ZeroMean;
pub use means::constant::ConstantMean;
pub use means::linear::LinearMean;
pub use means::multitask::{BaseMeans, MultitaskMean};
pub use means::spec::MeanSpec;

/// Errors surfaced while assembling mean functions.
#[derive(thiserror::Error, Debug)]
pub enum MeanError {
    /// The caller supplied a configuration no mean can be built from,
    /// e.g. a base-mean list whose length is neither 1 nor `n_tasks`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, MeanError>;
