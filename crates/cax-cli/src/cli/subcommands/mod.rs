pub mod auth;
mod chart;
mod classify;
mod fraud;
mod normalize;
mod pipeline;

pub use chart::{ChartArgs, ChartKindArg};
pub use classify::ClassifyArgs;
pub use fraud::FraudArgs;
pub use normalize::NormalizeArgs;
pub use pipeline::PipelineArgs;
