use std::fmt::Write as _;

use super::scoring::EvaluationResult;
use super::skills::{SkillMatch, GITHUB_CONFIDENCE};
use crate::{CandidateProfile, JobSpec, RepositorySignal, RequirementKind};

const MAX_RECOMMENDATIONS: usize = 5;
const HIGH_RELEVANCE: f64 = 0.7;

pub(crate) struct Report {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Derive strengths, concerns and recommendations from the evidence. Purely
/// mechanical so the same inputs always produce the same report.
pub(crate) fn derive_report(
    job: &JobSpec,
    candidate: &CandidateProfile,
    skill_matches: &[SkillMatch],
    relevant_repos: &[RepositorySignal],
    overall_score: f64,
) -> Report {
    let mut strengths = Vec::new();
    let mut concerns = Vec::new();
    let mut recommendations = Vec::new();

    let required: Vec<(&SkillMatch, bool)> = job
        .requirements
        .iter()
        .zip(skill_matches)
        .filter(|(req, _)| req.kind == RequirementKind::Required)
        .map(|(_, m)| (m, m.matched))
        .collect();
    let required_total = required.len();
    let required_matched = required.iter().filter(|(_, matched)| *matched).count();

    if required_matched > 0 {
        strengths.push(format!(
            "Matches {required_matched}/{required_total} required skills"
        ));
    }
    for (skill_match, matched) in &required {
        if !*matched {
            concerns.push(format!(
                "Missing required skill: {}",
                skill_match.requirement_name
            ));
        }
    }

    for repo in relevant_repos {
        if repo.relevance > HIGH_RELEVANCE {
            strengths.push(format!("High-relevance repository: {}", repo.name));
        }
    }
    if relevant_repos.is_empty() {
        concerns.push("No repositories relevant to the role".into());
    }

    if candidate.experience.is_empty() {
        concerns.push("No work experience provided".into());
    } else {
        strengths.push(format!(
            "Work history with {} position(s)",
            candidate.experience.len()
        ));
    }

    if overall_score > 70.0 {
        recommendations.push("Strong technical alignment, proceed to interview".into());
    } else if overall_score >= 40.0 {
        recommendations.push("Moderate fit, consider a focused technical screen".into());
    } else {
        recommendations.push("May need significant upskilling for this role".into());
    }

    let github_only: Vec<&str> = skill_matches
        .iter()
        .filter(|m| m.matched && m.confidence == GITHUB_CONFIDENCE)
        .map(|m| m.requirement_name.as_str())
        .collect();
    if !github_only.is_empty() {
        recommendations.push(format!(
            "Verify GitHub-only evidence in interview: {}",
            github_only.join(", ")
        ));
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);

    Report {
        strengths,
        concerns,
        recommendations,
    }
}

/// Render a human-readable summary block of an evaluation, for CLI or log
/// display by the caller.
pub fn render_summary(result: &EvaluationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Candidate: {}", result.candidate_name);
    let _ = writeln!(out, "Position:  {}", result.job_title);
    let _ = writeln!(out, "Overall score: {:.1}/100", result.overall_score);
    let _ = writeln!(out, "Probability of fit: {:.0}%", result.probability_fit * 100.0);
    let _ = writeln!(out, "Confidence: {}", result.confidence_level);

    let _ = writeln!(out, "\nCategory breakdown:");
    for category in &result.categories {
        let _ = writeln!(
            out,
            "  {}: {:.1}/100 (weight {:.2})",
            category.category, category.raw_score, category.weight
        );
    }

    if !result.strengths.is_empty() {
        let _ = writeln!(out, "\nStrengths:");
        for strength in &result.strengths {
            let _ = writeln!(out, "  - {strength}");
        }
    }

    if !result.concerns.is_empty() {
        let _ = writeln!(out, "\nConcerns:");
        for concern in &result.concerns {
            let _ = writeln!(out, "  - {concern}");
        }
    }

    if !result.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations:");
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            let _ = writeln!(out, "  {}. {recommendation}", i + 1);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::{evaluate, EvaluationConfig};
    use crate::matching::weights::CategoryWeights;
    use crate::JobRequirement;
    use chrono::NaiveDate;

    fn config() -> EvaluationConfig {
        EvaluationConfig {
            weights: CategoryWeights::default(),
            repo_relevance_threshold: 0.1,
            as_of: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    fn job() -> JobSpec {
        JobSpec {
            title: "Frontend Engineer".into(),
            min_experience_years: 2.0,
            requirements: vec![
                JobRequirement::required("JavaScript", 1.0),
                JobRequirement::required("React", 0.8),
                JobRequirement::preferred("TypeScript", 0.4),
            ],
            ..JobSpec::default()
        }
    }

    #[test]
    fn missing_required_skills_become_concerns() {
        let candidate = CandidateProfile {
            name: "Ari".into(),
            skills: vec!["JavaScript".into()],
            experience: vec![],
        };
        let result = evaluate(&job(), &candidate, &[], &config()).unwrap();

        assert!(result
            .strengths
            .contains(&"Matches 1/2 required skills".to_string()));
        assert!(result
            .concerns
            .contains(&"Missing required skill: React".to_string()));
        assert!(result
            .concerns
            .contains(&"No work experience provided".to_string()));
    }

    #[test]
    fn github_only_matches_are_flagged_for_verification() {
        let candidate = CandidateProfile {
            name: "Ari".into(),
            skills: vec![],
            experience: vec![],
        };
        let repos = vec![RepositorySignal {
            name: "portfolio".into(),
            relevance: 0.8,
            languages: vec!["JavaScript".into()],
            quality_indicators: vec!["documentation".into()],
        }];
        let result = evaluate(&job(), &candidate, &repos, &config()).unwrap();

        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("Verify GitHub-only evidence") && r.contains("JavaScript")));
        assert!(result
            .strengths
            .contains(&"High-relevance repository: portfolio".to_string()));
    }

    #[test]
    fn recommendation_follows_score_band() {
        let weak = CandidateProfile {
            name: "Ari".into(),
            skills: vec![],
            experience: vec![],
        };
        let result = evaluate(&job(), &weak, &[], &config()).unwrap();
        assert_eq!(
            result.recommendations[0],
            "May need significant upskilling for this role"
        );
    }

    #[test]
    fn summary_renders_all_sections() {
        let candidate = CandidateProfile {
            name: "Ari".into(),
            skills: vec!["JavaScript".into(), "React".into()],
            experience: vec![],
        };
        let result = evaluate(&job(), &candidate, &[], &config()).unwrap();
        let summary = render_summary(&result);

        assert!(summary.contains("Candidate: Ari"));
        assert!(summary.contains("Position:  Frontend Engineer"));
        assert!(summary.contains("skills:"));
        assert!(summary.contains("Concerns:"));
        assert!(summary.contains("Recommendations:"));
    }
}
