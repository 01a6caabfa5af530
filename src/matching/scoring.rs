use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    experience::score_experience,
    github::{filter_and_rank, score_github, DEFAULT_RELEVANCE_THRESHOLD},
    report::derive_report,
    skills::{match_requirements, skills_raw_score, SkillMatch},
    weights::CategoryWeights,
};
use crate::error::EvaluationError;
use crate::{CandidateProfile, JobSpec, RepositorySignal};

/// Evaluation configuration, passed explicitly into every call. Scoring
/// behavior never depends on process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub weights: CategoryWeights,
    /// Repositories below this relevance are excluded from scoring and from
    /// the reported list.
    pub repo_relevance_threshold: f64,
    /// Date used to close open-ended experience entries. Fixing it keeps the
    /// evaluation a pure function of its inputs.
    pub as_of: NaiveDate,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::default(),
            repo_relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            as_of: Utc::now().date_naive(),
        }
    }
}

impl EvaluationConfig {
    /// Defaults with the relevance threshold optionally overridden through
    /// `SCREENER_REPO_RELEVANCE_THRESHOLD`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(threshold) = std::env::var("SCREENER_REPO_RELEVANCE_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.repo_relevance_threshold = threshold;
        }
        config
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        self.weights.validate()?;
        let threshold = self.repo_relevance_threshold;
        if threshold.is_nan() || !(0.0..=1.0).contains(&threshold) {
            return Err(EvaluationError::Configuration(format!(
                "repo relevance threshold must be in [0, 1], got {threshold}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Experience,
    Github,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Skills => "skills",
            Category::Experience => "experience",
            Category::Github => "github",
        };
        f.write_str(name)
    }
}

/// One weighted dimension of the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub raw_score: f64,
    pub weight: f64,
}

/// Coarse indicator of how much of the scoring model was backed by actual
/// evidence. Independent of the numeric score: a low score with evidence in
/// all three categories is still `High` confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub candidate_name: String,
    pub job_title: String,
    pub overall_score: f64,
    pub probability_fit: f64,
    pub confidence_level: ConfidenceLevel,
    pub categories: Vec<CategoryScore>,
    pub skill_matches: Vec<SkillMatch>,
    /// Repositories above the relevance threshold, ranked descending by
    /// relevance (ties: indicator count desc, then name asc).
    pub relevant_repositories: Vec<RepositorySignal>,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Evaluate a candidate against a job with the given configuration.
/// Convenience wrapper over [`EvaluationEngine`].
pub fn evaluate(
    job: &JobSpec,
    candidate: &CandidateProfile,
    repositories: &[RepositorySignal],
    config: &EvaluationConfig,
) -> Result<EvaluationResult, EvaluationError> {
    EvaluationEngine::new(config.clone()).evaluate(job, candidate, repositories)
}

pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Pure scoring pass: no I/O, no shared state, safe to call concurrently
    /// for independent candidates.
    pub fn evaluate(
        &self,
        job: &JobSpec,
        candidate: &CandidateProfile,
        repositories: &[RepositorySignal],
    ) -> Result<EvaluationResult, EvaluationError> {
        self.config.validate()?;
        validate_inputs(job, repositories)?;

        let relevant = filter_and_rank(repositories, self.config.repo_relevance_threshold);

        let skill_matches = match_requirements(job, candidate, &relevant);
        let skills_raw = skills_raw_score(&job.requirements, &skill_matches);
        let experience_raw = score_experience(job, candidate, self.config.as_of);
        let github_raw = score_github(&relevant);

        let weights = self.config.weights;
        let categories = vec![
            CategoryScore {
                category: Category::Skills,
                raw_score: skills_raw,
                weight: weights.skills,
            },
            CategoryScore {
                category: Category::Experience,
                raw_score: experience_raw,
                weight: weights.experience,
            },
            CategoryScore {
                category: Category::Github,
                raw_score: github_raw,
                weight: weights.github,
            },
        ];

        // Every configured category participates, evidence or not. Dropping
        // an empty category would silently renormalize the other weights.
        let overall_score: f64 = categories
            .iter()
            .map(|c| c.raw_score * c.weight)
            .sum::<f64>()
            .clamp(0.0, 100.0);

        let has_skill_evidence = skill_matches.iter().any(|m| m.matched);
        let has_experience_evidence = !candidate.experience.is_empty();
        let has_github_evidence = !relevant.is_empty();
        let confidence_level = confidence_from_evidence(
            [
                has_skill_evidence,
                has_experience_evidence,
                has_github_evidence,
            ]
            .iter()
            .filter(|present| **present)
            .count(),
        );

        let report = derive_report(job, candidate, &skill_matches, &relevant, overall_score);

        debug!(
            candidate = %candidate.name,
            job = %job.title,
            overall_score,
            %confidence_level,
            "evaluation completed"
        );

        Ok(EvaluationResult {
            candidate_name: candidate.name.clone(),
            job_title: job.title.clone(),
            overall_score,
            probability_fit: overall_score / 100.0,
            confidence_level,
            categories,
            skill_matches,
            relevant_repositories: relevant,
            strengths: report.strengths,
            concerns: report.concerns,
            recommendations: report.recommendations,
        })
    }
}

fn validate_inputs(job: &JobSpec, repositories: &[RepositorySignal]) -> Result<(), EvaluationError> {
    if job.requirements.is_empty() {
        return Err(EvaluationError::InvalidInput(
            "job requirement set is empty".into(),
        ));
    }

    for requirement in &job.requirements {
        let weight = requirement.weight;
        if weight.is_nan() || weight <= 0.0 || weight > 1.0 {
            return Err(EvaluationError::InvalidInput(format!(
                "requirement '{}' has weight {weight}, expected (0, 1]",
                requirement.name
            )));
        }
    }

    for repo in repositories {
        let relevance = repo.relevance;
        if relevance.is_nan() || !(0.0..=1.0).contains(&relevance) {
            return Err(EvaluationError::InvalidInput(format!(
                "repository '{}' has relevance {relevance}, expected [0, 1]",
                repo.name
            )));
        }
    }

    Ok(())
}

fn confidence_from_evidence(evidenced_categories: usize) -> ConfidenceLevel {
    match evidenced_categories {
        3 => ConfidenceLevel::High,
        2 => ConfidenceLevel::Medium,
        _ => ConfidenceLevel::Low,
    }
}
