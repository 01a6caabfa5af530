pub mod error;
pub mod logging;
pub mod matching;
pub mod skill_normalizer;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use error::EvaluationError;
pub use matching::report::render_summary;
pub use matching::scoring::{
    evaluate, Category, CategoryScore, ConfidenceLevel, EvaluationConfig, EvaluationEngine,
    EvaluationResult,
};
pub use matching::skills::SkillMatch;
pub use matching::weights::CategoryWeights;

// Input data models supplied by the external collaborators (job parser,
// resume parser, GitHub scanner). The engine never mutates them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Required,
    Preferred,
}

/// One weighted skill/technology requirement of a job.
///
/// Weights need not sum to anything in particular; the skills category
/// normalizes by the weight sum at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub name: String,
    pub kind: RequirementKind,
    /// Must lie in (0, 1].
    pub weight: f64,
}

impl JobRequirement {
    pub fn required(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            kind: RequirementKind::Required,
            weight,
        }
    }

    pub fn preferred(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            kind: RequirementKind::Preferred,
            weight,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    pub title: String,
    pub role_type: Option<String>,
    pub seniority_level: Option<String>,
    /// Years of experience at which the experience ramp reaches 100.
    pub min_experience_years: f64,
    pub requirements: Vec<JobRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start: NaiveDate,
    /// None means the position is ongoing; measured up to the evaluation date.
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    /// Skills as declared on the resume, not yet normalized.
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
}

/// Per-repository signal summary produced by the external GitHub scanner.
/// The relevance score is computed upstream; the engine only consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySignal {
    pub name: String,
    /// Relevance to the job in [0, 1], computed by the collaborator.
    pub relevance: f64,
    pub languages: Vec<String>,
    pub quality_indicators: Vec<String>,
}
