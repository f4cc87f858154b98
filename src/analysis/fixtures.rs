use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Repository, UserProfile};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Non-fork repository pushed at `now()`.
pub fn repo(name: &str, stars: u32, language: Option<&str>) -> Repository {
    Repository {
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        language: language.map(str::to_string),
        stargazers_count: stars,
        forks_count: 0,
        size: 0,
        fork: false,
        pushed_at: Some(now()),
        html_url: format!("https://github.com/octocat/{}", name),
    }
}

pub fn stale_repo(name: &str, stars: u32, language: Option<&str>) -> Repository {
    Repository {
        pushed_at: Some(now() - chrono::Duration::days(400)),
        ..repo(name, stars, language)
    }
}

pub fn user(followers: u32, hireable: bool) -> UserProfile {
    UserProfile {
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        bio: None,
        avatar_url: "https://avatars.example/u/583231".to_string(),
        followers,
        following: 9,
        public_repos: 8,
        hireable,
    }
}
