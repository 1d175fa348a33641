pub mod mean;
pub mod zero;
pub mod constant;
pub mod linear;
pub mod multitask;
pub mod spec;

pub use mean::Mean;
pub use zero::ZeroMean;
pub use constant::ConstantMean;
pub use linear::LinearMean;
pub use multitask::{BaseMeans, MultitaskMean};
pub use spec::MeanSpec;
