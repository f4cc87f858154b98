use crate::models::{Repository, TopRepository, NO_DESCRIPTION};

pub const MAX_TOP_REPOSITORIES: usize = 5;

/// Most-starred original (non-fork) repositories.
pub fn top_repositories(repos: &[Repository]) -> Vec<TopRepository> {
    let mut originals: Vec<&Repository> = repos.iter().filter(|r| !r.fork).collect();
    originals.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

    originals
        .into_iter()
        .take(MAX_TOP_REPOSITORIES)
        .map(|r| TopRepository {
            name: r.name.clone(),
            description: r
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            url: r.html_url.clone(),
            stars: r.stargazers_count,
            forks: r.forks_count,
        })
        .collect()
}
