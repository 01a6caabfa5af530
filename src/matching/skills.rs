use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::skill_normalizer::normalize_skill;
use crate::{CandidateProfile, JobRequirement, JobSpec, RepositorySignal};

/// Confidence assigned when the requirement is mentioned on the resume.
pub const RESUME_CONFIDENCE: f64 = 1.0;
/// Confidence assigned when the only evidence is GitHub language/framework
/// signals.
pub const GITHUB_CONFIDENCE: f64 = 0.6;

/// Evidence lists are capped so transparency output stays readable.
const MAX_EVIDENCE: usize = 3;

/// Per-requirement match record, kept alongside the numeric result for
/// transparency and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub requirement_name: String,
    pub matched: bool,
    pub confidence: f64,
    pub evidence: Vec<String>,
}

/// Match every job requirement against the candidate's declared skills and
/// the language signals of the relevance-filtered repositories.
///
/// `relevant_repos` must already be filtered and ranked; evidence entries
/// follow that order so stronger repositories are cited first.
pub fn match_requirements(
    job: &JobSpec,
    candidate: &CandidateProfile,
    relevant_repos: &[RepositorySignal],
) -> Vec<SkillMatch> {
    // canonical form -> skill as written on the resume, first spelling wins
    let mut resume_skills: HashMap<String, &str> = HashMap::new();
    for skill in &candidate.skills {
        if skill.trim().is_empty() {
            continue;
        }
        resume_skills
            .entry(normalize_skill(skill))
            .or_insert(skill.as_str());
    }

    let repo_languages: Vec<(String, Vec<String>)> = relevant_repos
        .iter()
        .map(|repo| {
            let canonical = repo
                .languages
                .iter()
                .filter(|l| !l.trim().is_empty())
                .map(|l| normalize_skill(l))
                .collect();
            (repo.name.clone(), canonical)
        })
        .collect();

    job.requirements
        .iter()
        .map(|req| match_one(req, &resume_skills, &repo_languages))
        .collect()
}

fn match_one(
    requirement: &JobRequirement,
    resume_skills: &HashMap<String, &str>,
    repo_languages: &[(String, Vec<String>)],
) -> SkillMatch {
    let canonical = normalize_skill(&requirement.name);

    let mut evidence = Vec::new();
    let resume_hit = resume_skills.get(&canonical);
    if let Some(as_written) = resume_hit {
        evidence.push(format!("resume: {as_written}"));
    }

    for (repo_name, languages) in repo_languages {
        if evidence.len() >= MAX_EVIDENCE {
            break;
        }
        if languages.iter().any(|l| l == &canonical) {
            evidence.push(format!("github: {repo_name}"));
        }
    }

    let confidence = if resume_hit.is_some() {
        RESUME_CONFIDENCE
    } else if !evidence.is_empty() {
        GITHUB_CONFIDENCE
    } else {
        0.0
    };

    SkillMatch {
        requirement_name: requirement.name.clone(),
        matched: confidence > 0.0,
        confidence,
        evidence,
    }
}

/// Skills category raw score: confidence-weighted fraction of the total
/// requirement weight, scaled to [0, 100].
pub fn skills_raw_score(requirements: &[JobRequirement], matches: &[SkillMatch]) -> f64 {
    let weight_sum: f64 = requirements.iter().map(|r| r.weight).sum();
    if weight_sum <= 0.0 {
        return 0.0;
    }

    let contributions: f64 = requirements
        .iter()
        .zip(matches)
        .map(|(req, m)| req.weight * m.confidence)
        .sum();

    100.0 * contributions / weight_sum
}
