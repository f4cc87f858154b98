use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::analysis::metrics::{pushed_within, total_stars};
use crate::models::{Insight, InsightKind, Repository, UserProfile};

pub const POPULAR_STARS: u64 = 100;
pub const RISING_STARS: u64 = 10;
pub const POLYGLOT_LANGUAGES: usize = 5;
pub const POPULAR_REPO_STARS: u32 = 10;
pub const RECENT_WINDOW_DAYS: i64 = 30;
pub const VERY_ACTIVE_REPOS: usize = 3;
pub const INFLUENTIAL_FOLLOWERS: u32 = 100;

/// Snapshot every rule reads from.
pub struct InsightContext<'a> {
    pub user: &'a UserProfile,
    pub repos: &'a [Repository],
    pub total_stars: u64,
    pub distinct_languages: usize,
    pub recent_pushes: usize,
}

impl<'a> InsightContext<'a> {
    pub fn new(user: &'a UserProfile, repos: &'a [Repository], now: DateTime<Utc>) -> Self {
        let distinct_languages = repos
            .iter()
            .filter_map(|r| r.language.as_deref())
            .collect::<HashSet<_>>()
            .len();

        Self {
            user,
            repos,
            total_stars: total_stars(repos),
            distinct_languages,
            recent_pushes: pushed_within(repos, now, RECENT_WINDOW_DAYS),
        }
    }
}

type Rule = fn(&InsightContext<'_>) -> Option<InsightKind>;

/// Evaluated in this order; every rule that matches contributes one insight.
const RULES: &[Rule] = &[
    star_rule,
    polyglot_rule,
    popular_repo_rule,
    activity_rule,
    influence_rule,
    hireable_rule,
];

fn star_rule(ctx: &InsightContext<'_>) -> Option<InsightKind> {
    if ctx.total_stars >= POPULAR_STARS {
        Some(InsightKind::Popular { stars: ctx.total_stars })
    } else if ctx.total_stars >= RISING_STARS {
        Some(InsightKind::Rising { stars: ctx.total_stars })
    } else {
        None
    }
}

fn polyglot_rule(ctx: &InsightContext<'_>) -> Option<InsightKind> {
    (ctx.distinct_languages >= POLYGLOT_LANGUAGES).then(|| InsightKind::Polyglot {
        languages: ctx.distinct_languages,
    })
}

fn popular_repo_rule(ctx: &InsightContext<'_>) -> Option<InsightKind> {
    ctx.repos
        .iter()
        .find(|r| r.stargazers_count >= POPULAR_REPO_STARS)
        .map(|r| InsightKind::PopularRepo { name: r.name.clone() })
}

fn activity_rule(ctx: &InsightContext<'_>) -> Option<InsightKind> {
    match ctx.recent_pushes {
        0 => None,
        n if n >= VERY_ACTIVE_REPOS => Some(InsightKind::VeryActive { repos: n }),
        n => Some(InsightKind::Active { repos: n }),
    }
}

fn influence_rule(ctx: &InsightContext<'_>) -> Option<InsightKind> {
    (ctx.user.followers >= INFLUENTIAL_FOLLOWERS).then(|| InsightKind::Influential {
        followers: ctx.user.followers,
    })
}

fn hireable_rule(ctx: &InsightContext<'_>) -> Option<InsightKind> {
    ctx.user.hireable.then_some(InsightKind::Hireable)
}

/// Never empty: falls back to a single "growing developer" insight.
pub fn generate_insights(
    user: &UserProfile,
    repos: &[Repository],
    now: DateTime<Utc>,
) -> Vec<Insight> {
    let ctx = InsightContext::new(user, repos, now);

    let mut insights: Vec<Insight> = RULES
        .iter()
        .filter_map(|rule| rule(&ctx))
        .map(Insight::from)
        .collect();

    if insights.is_empty() {
        insights.push(Insight::from(InsightKind::Growing));
    }

    insights
}
