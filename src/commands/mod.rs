//! Command implementations

pub mod analyze;
pub mod recommend;

pub use analyze::{AnalysisResult, analyze_word};
pub use recommend::{Recommendation, recommend};
