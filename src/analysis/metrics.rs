use chrono::{DateTime, Duration, Utc};

use crate::models::{Repository, StatsBlock};

/// Trailing window for the "active repositories" heuristic.
pub const ACTIVE_WINDOW_DAYS: i64 = 365;

pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| u64::from(r.stargazers_count)).sum()
}

pub fn total_forks(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| u64::from(r.forks_count)).sum()
}

/// Mean repository size rounded to whole kilobytes, expressed in bytes.
pub fn average_size_bytes(repos: &[Repository]) -> u64 {
    if repos.is_empty() {
        return 0;
    }
    let total_kb: u64 = repos.iter().map(|r| r.size).sum();
    let avg_kb = (total_kb as f64 / repos.len() as f64).round() as u64;
    avg_kb * 1024
}

/// Repositories pushed strictly after `now - days`.
pub fn pushed_within(repos: &[Repository], now: DateTime<Utc>, days: i64) -> usize {
    let cutoff = now - Duration::days(days);
    repos.iter().filter(|r| r.pushed_after(cutoff)).count()
}

pub fn compute_stats(repos: &[Repository], now: DateTime<Utc>) -> StatsBlock {
    StatsBlock {
        total_stars: total_stars(repos),
        total_forks: total_forks(repos),
        avg_repo_size_bytes: average_size_bytes(repos),
        active_repo_count: pushed_within(repos, now, ACTIVE_WINDOW_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::{now, repo};

    #[test]
    fn test_empty_repositories() {
        let stats = compute_stats(&[], now());
        assert_eq!(stats, StatsBlock::default());
    }

    #[test]
    fn test_sums_include_forks() {
        let mut forked = repo("fork", 5, Some("Rust"));
        forked.fork = true;
        forked.forks_count = 2;
        let mut original = repo("orig", 120, Some("Go"));
        original.forks_count = 9;

        let stats = compute_stats(&[original, forked], now());
        assert_eq!(stats.total_stars, 125);
        assert_eq!(stats.total_forks, 11);
    }

    #[test]
    fn test_average_size_rounds_kilobytes() {
        let mut a = repo("a", 0, None);
        a.size = 1;
        let mut b = repo("b", 0, None);
        b.size = 2;
        // 1.5 KB rounds up to 2 KB
        assert_eq!(average_size_bytes(&[a, b]), 2048);

        let mut c = repo("c", 0, None);
        c.size = 1;
        let mut d = repo("d", 0, None);
        d.size = 1;
        let mut e = repo("e", 0, None);
        e.size = 2;
        // 4/3 KB rounds down to 1 KB
        assert_eq!(average_size_bytes(&[c, d, e]), 1024);
    }

    #[test]
    fn test_active_window_is_strict() {
        let now = now();
        let mut inside = repo("inside", 0, None);
        inside.pushed_at = Some(now - Duration::days(364));
        let mut boundary = repo("boundary", 0, None);
        boundary.pushed_at = Some(now - Duration::days(ACTIVE_WINDOW_DAYS));
        let mut stale = repo("stale", 0, None);
        stale.pushed_at = Some(now - Duration::days(400));
        let mut never = repo("never", 0, None);
        never.pushed_at = None;

        let stats = compute_stats(&[inside, boundary, stale, never], now);
        assert_eq!(stats.active_repo_count, 1);
    }
}
