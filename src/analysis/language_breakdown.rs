use std::collections::HashMap;

use crate::models::{LanguageShare, Repository};
use crate::taxonomy::language_color;

pub const MAX_LANGUAGES: usize = 6;

/// Repository count per non-null language, in first-encounter order.
pub fn count_languages(repos: &[Repository]) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        match positions.get(language) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(language, counts.len());
                counts.push((language.to_string(), 1));
            }
        }
    }

    counts
}

/// Top languages by repository count. Percentages are taken over every
/// classified repository, so languages cut off past the top entries still
/// count toward the base.
pub fn language_breakdown(repos: &[Repository]) -> Vec<LanguageShare> {
    let mut counts = count_languages(repos);
    let classified: usize = counts.iter().map(|(_, c)| c).sum();
    if classified == 0 {
        return Vec::new();
    }

    // stable: ties keep encounter order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_LANGUAGES)
        .map(|(name, count)| LanguageShare {
            color: language_color(&name).to_string(),
            percentage: count as f64 / classified as f64 * 100.0,
            name,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::repo;
    use crate::taxonomy::FALLBACK_COLOR;

    fn names(shares: &[LanguageShare]) -> Vec<&str> {
        shares.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_no_classified_repositories() {
        let repos = vec![repo("a", 0, None), repo("b", 0, None)];
        assert!(language_breakdown(&repos).is_empty());
        assert!(language_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_sorted_by_count_with_stable_ties() {
        let repos = vec![
            repo("a", 0, Some("Python")),
            repo("b", 0, Some("Rust")),
            repo("c", 0, Some("Go")),
            repo("d", 0, Some("Rust")),
            repo("e", 0, None),
            repo("f", 0, Some("Go")),
            repo("g", 0, Some("Zig")),
        ];

        let shares = language_breakdown(&repos);
        assert_eq!(names(&shares), vec!["Rust", "Go", "Python", "Zig"]);
        assert_eq!(shares[0].count, 2);
        assert!((shares[0].percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(shares[0].color, "#dea584");
        assert_eq!(shares[3].color, FALLBACK_COLOR);

        // identical input, identical output
        assert_eq!(language_breakdown(&repos), shares);
    }

    #[test]
    fn test_percentages_sum_to_hundred_with_few_languages() {
        let repos = vec![
            repo("a", 0, Some("Rust")),
            repo("b", 0, Some("Go")),
            repo("c", 0, Some("Rust")),
            repo("d", 0, None),
        ];
        let total: f64 = language_breakdown(&repos).iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_truncates_to_six_without_other_bucket() {
        let langs = ["A", "B", "C", "D", "E", "F", "G", "H"];
        let mut repos: Vec<_> = langs
            .iter()
            .enumerate()
            .map(|(i, l)| repo(&format!("r{}", i), 0, Some(l)))
            .collect();
        repos.push(repo("extra", 0, Some("H")));

        let shares = language_breakdown(&repos);
        assert_eq!(shares.len(), MAX_LANGUAGES);
        assert_eq!(names(&shares), vec!["H", "A", "B", "C", "D", "E"]);

        let total: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!(total < 100.0);
        assert!((shares[0].percentage - 2.0 / 9.0 * 100.0).abs() < 1e-9);
    }
}
