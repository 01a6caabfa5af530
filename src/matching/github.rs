use std::cmp::Ordering;
use std::collections::HashSet;

use crate::RepositorySignal;

/// Repositories below this relevance are excluded from scoring and from the
/// reported list entirely, not merely down-weighted.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.1;

/// Flat bonus per distinct quality indicator (documentation, active
/// maintenance, community interest) across the passing repositories.
pub const QUALITY_INDICATOR_BONUS: f64 = 5.0;

/// Filter repositories by relevance threshold and rank them descending by
/// relevance, ties broken by quality-indicator count descending, then by
/// name ascending so the output is deterministic.
pub fn filter_and_rank(repos: &[RepositorySignal], threshold: f64) -> Vec<RepositorySignal> {
    let mut relevant: Vec<RepositorySignal> = repos
        .iter()
        .filter(|repo| repo.relevance >= threshold)
        .cloned()
        .collect();

    relevant.sort_by(|a, b| {
        match b.relevance.total_cmp(&a.relevance) {
            Ordering::Equal => {}
            other => return other,
        }
        match b.quality_indicators.len().cmp(&a.quality_indicators.len()) {
            Ordering::Equal => {}
            other => return other,
        }
        a.name.cmp(&b.name)
    });

    relevant
}

/// GitHub category raw score over the already-filtered repositories:
/// relevance-weighted average of per-repo `relevance * 100`, plus the
/// quality-indicator bonus, capped at 100. No repositories means 0.
pub fn score_github(relevant: &[RepositorySignal]) -> f64 {
    if relevant.is_empty() {
        return 0.0;
    }

    let weight_sum: f64 = relevant.iter().map(|r| r.relevance).sum();
    let base = if weight_sum > 0.0 {
        let weighted: f64 = relevant
            .iter()
            .map(|r| r.relevance * (r.relevance * 100.0))
            .sum();
        weighted / weight_sum
    } else {
        0.0
    };

    let indicators: HashSet<String> = relevant
        .iter()
        .flat_map(|r| r.quality_indicators.iter())
        .filter(|i| !i.trim().is_empty())
        .map(|i| i.trim().to_lowercase())
        .collect();

    (base + indicators.len() as f64 * QUALITY_INDICATOR_BONUS).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, relevance: f64, indicators: &[&str]) -> RepositorySignal {
        RepositorySignal {
            name: name.into(),
            relevance,
            languages: vec![],
            quality_indicators: indicators.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn below_threshold_repos_are_excluded_entirely() {
        let repos = vec![repo("weak", 0.05, &[]), repo("strong", 0.3, &[])];
        let relevant = filter_and_rank(&repos, DEFAULT_RELEVANCE_THRESHOLD);

        assert_eq!(relevant.len(), 1);
        assert_eq!(relevant[0].name, "strong");
        // score derived solely from the passing repository
        assert!((score_github(&relevant) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn ranks_by_relevance_then_indicators_then_name() {
        let repos = vec![
            repo("zeta", 0.5, &["documentation"]),
            repo("alpha", 0.5, &["documentation"]),
            repo("mid", 0.5, &["documentation", "active maintenance"]),
            repo("top", 0.9, &[]),
        ];
        let relevant = filter_and_rank(&repos, 0.1);
        let names: Vec<&str> = relevant.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["top", "mid", "alpha", "zeta"]);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(score_github(&[]), 0.0);
    }

    #[test]
    fn indicator_bonus_is_flat_and_deduplicated() {
        let repos = vec![
            repo("a", 0.4, &["documentation", "community interest"]),
            repo("b", 0.4, &["Documentation"]),
        ];
        let relevant = filter_and_rank(&repos, 0.1);
        // base 40 plus 2 distinct indicators * 5
        assert!((score_github(&relevant) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_capped_at_hundred() {
        let repos = vec![repo(
            "flagship",
            1.0,
            &["documentation", "active maintenance", "community interest"],
        )];
        let relevant = filter_and_rank(&repos, 0.1);
        assert_eq!(score_github(&relevant), 100.0);
    }

    #[test]
    fn weighted_average_favors_stronger_repos() {
        let even = vec![repo("a", 0.4, &[]), repo("b", 0.4, &[])];
        let skewed = vec![repo("a", 0.8, &[]), repo("b", 0.4, &[])];
        assert!(score_github(&filter_and_rank(&skewed, 0.1)) > score_github(&filter_and_rank(&even, 0.1)));
    }
}
