use std::collections::HashMap;
use std::sync::OnceLock;

/// Color used for languages missing from the table.
pub const FALLBACK_COLOR: &str = "#8b949e";

fn color_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            ("JavaScript", "#f1e05a"),
            ("TypeScript", "#3178c6"),
            ("Python", "#3572A5"),
            ("Java", "#b07219"),
            ("C++", "#f34b7d"),
            ("C", "#555555"),
            ("C#", "#178600"),
            ("Go", "#00ADD8"),
            ("Rust", "#dea584"),
            ("Ruby", "#701516"),
            ("PHP", "#4F5D95"),
            ("Swift", "#F05138"),
            ("Kotlin", "#A97BFF"),
            ("HTML", "#e34c26"),
            ("CSS", "#563d7c"),
            ("Shell", "#89e051"),
            ("Jupyter Notebook", "#DA5B0B"),
            ("Vue", "#41b883"),
            ("Dart", "#00B4AB"),
            ("R", "#198CE7"),
        ]
        .iter()
        .cloned()
        .collect()
    })
}

/// Display color for a language name, exact match only.
pub fn language_color(language: &str) -> &'static str {
    color_table().get(language).copied().unwrap_or(FALLBACK_COLOR)
}
