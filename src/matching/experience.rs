use chrono::NaiveDate;

use crate::{CandidateProfile, ExperienceEntry, JobSpec};

/// Bonus per distinct role/seniority keyword found in past titles.
pub const TITLE_KEYWORD_BONUS: f64 = 5.0;
/// Cap on the total title-keyword bonus.
pub const TITLE_BONUS_CAP: f64 = 15.0;

const DAYS_PER_YEAR: f64 = 365.25;

/// Total years covered by the experience entries, with overlapping spans
/// merged so concurrent positions are not double-counted. Open-ended entries
/// run until `as_of`.
pub fn relevant_years(entries: &[ExperienceEntry], as_of: NaiveDate) -> f64 {
    let mut spans: Vec<(NaiveDate, NaiveDate)> = entries
        .iter()
        .filter_map(|entry| {
            let end = entry.end.unwrap_or(as_of).min(as_of);
            (end > entry.start).then_some((entry.start, end))
        })
        .collect();

    spans.sort();

    let mut total_days: i64 = 0;
    let mut current: Option<(NaiveDate, NaiveDate)> = None;
    for (start, end) in spans {
        match current {
            Some((cur_start, cur_end)) if start <= cur_end => {
                current = Some((cur_start, cur_end.max(end)));
            }
            Some((cur_start, cur_end)) => {
                total_days += (cur_end - cur_start).num_days();
                current = Some((start, end));
            }
            None => current = Some((start, end)),
        }
    }
    if let Some((start, end)) = current {
        total_days += (end - start).num_days();
    }

    total_days as f64 / DAYS_PER_YEAR
}

/// Experience category raw score.
///
/// Base is a linear ramp from 0 (no experience) to 100 at the job's stated
/// minimum; exceeding the minimum is never penalized. A qualitative bonus is
/// added when role/seniority keywords from the job overlap past titles,
/// capped at [`TITLE_BONUS_CAP`], then the whole score is clamped to 100.
pub fn score_experience(job: &JobSpec, candidate: &CandidateProfile, as_of: NaiveDate) -> f64 {
    if candidate.experience.is_empty() {
        return 0.0;
    }

    let years = relevant_years(&candidate.experience, as_of);
    let base = if job.min_experience_years <= 0.0 {
        if years > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (100.0 * years / job.min_experience_years).min(100.0)
    };

    (base + title_bonus(job, candidate)).min(100.0)
}

fn title_bonus(job: &JobSpec, candidate: &CandidateProfile) -> f64 {
    let titles: Vec<String> = candidate
        .experience
        .iter()
        .map(|entry| entry.title.to_lowercase())
        .collect();

    let mut matched = 0usize;
    for keyword in role_keywords(job) {
        if titles.iter().any(|title| title.contains(&keyword)) {
            matched += 1;
        }
    }

    (matched as f64 * TITLE_KEYWORD_BONUS).min(TITLE_BONUS_CAP)
}

fn role_keywords(job: &JobSpec) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for source in [&job.role_type, &job.seniority_level] {
        let Some(text) = source else { continue };
        for token in text.split_whitespace() {
            let token = token.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            if token.len() >= 3 && !keywords.contains(&token) {
                keywords.push(token);
            }
        }
    }
    keywords
}
