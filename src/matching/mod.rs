pub mod experience;
pub mod github;
pub mod report;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use scoring::{
    evaluate, Category, CategoryScore, ConfidenceLevel, EvaluationConfig, EvaluationEngine,
    EvaluationResult,
};
pub use skills::SkillMatch;
pub use weights::{CategoryWeights, DEFAULT_WEIGHTS};
