pub mod analysis;
pub mod calculations;
pub mod models;
pub mod source;

pub use analysis::{
    AnalysisError, AnalysisOutcome, AnalysisRequest, SkippedTicker, TaxProfile, run_analysis,
};
pub use models::*;
pub use source::{
    AssumptionSource, SourceConfig, SourceError, SourceFactory, SourceRegistry,
};
