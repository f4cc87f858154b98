use crate::format::{format_bytes, format_number, format_percent};
use crate::models::DashboardViewModel;

const MARKDOWN_SPECIAL: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '#', '|', '~'];

/// Inline text: markup characters are backslash-escaped and line breaks
/// collapse to spaces, so user content stays inside its table cell, list
/// item or link label.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\r' => {}
            '\n' => out.push(' '),
            c if MARKDOWN_SPECIAL.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Every line of a multi-line value stays inside the blockquote.
fn quote(value: &str) -> String {
    value
        .lines()
        .map(|line| format!("> {}", escape(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

// Parentheses and whitespace would end the link destination early.
fn link_target(url: &str) -> String {
    url.replace(' ', "%20")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace('<', "%3C")
        .replace('>', "%3E")
}

pub fn render(view: &DashboardViewModel) -> String {
    let mut output = String::new();
    let profile = &view.profile;

    output.push_str(&format!(
        "# {} (@{})\n\n",
        escape(&profile.display_name),
        escape(&profile.login)
    ));
    output.push_str(&format!("![avatar]({})\n\n", link_target(&profile.avatar_url)));
    output.push_str(&format!("{}\n\n", quote(&profile.bio)));

    output.push_str("## Stats\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!(
        "| Followers | {} |\n",
        format_number(u64::from(profile.followers))
    ));
    output.push_str(&format!(
        "| Following | {} |\n",
        format_number(u64::from(profile.following))
    ));
    output.push_str(&format!("| Public Repos | {} |\n", profile.public_repos));
    output.push_str(&format!(
        "| Total Stars | {} |\n",
        format_number(view.stats.total_stars)
    ));
    output.push_str(&format!(
        "| Total Forks | {} |\n",
        format_number(view.stats.total_forks)
    ));
    output.push_str(&format!(
        "| Avg Repo Size | {} |\n",
        format_bytes(view.stats.avg_repo_size_bytes)
    ));
    output.push_str(&format!(
        "| Activity | {} active |\n",
        view.stats.active_repo_count
    ));

    if !view.languages.is_empty() {
        output.push_str("\n## Languages\n\n");
        output.push_str("| Language | Repos | Share |\n");
        output.push_str("|----------|-------|-------|\n");
        for share in &view.languages {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                escape(&share.name),
                share.count,
                format_percent(share.percentage)
            ));
        }
    }

    if !view.top_repositories.is_empty() {
        output.push_str("\n## Top Repositories\n\n");
        for repo in &view.top_repositories {
            output.push_str(&format!(
                "- [{}]({}) ⭐ {} 🍴 {}: {}\n",
                escape(&repo.name),
                link_target(&repo.url),
                repo.stars,
                repo.forks,
                escape(&repo.description)
            ));
        }
    }

    output.push_str("\n## Insights\n\n");
    for insight in &view.insights {
        output.push_str(&format!("- {} {}\n", insight.icon, escape(&insight.text)));
    }

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sample;

    #[test]
    fn test_markdown_sections() {
        let out = render(&sample::dashboard());
        assert!(out.starts_with("# The \\<Octo\\> Cat (@octocat)"));
        assert!(out.contains("| Total Stars | 125 |"));
        assert!(out.contains("| Go | 2 | 66.7% |"));
        assert!(out.contains("- [service](https://github.com/octocat/service) ⭐ 120 🍴 9: Fast & small"));
        assert!(out.contains("- 💼 Open to job opportunities!"));
    }

    #[test]
    fn test_escape_inline_text() {
        assert_eq!(escape("a|b\nc"), "a\\|b c");
        assert_eq!(escape("[x](y) *z*"), "\\[x\\](y) \\*z\\*");
    }

    #[test]
    fn test_user_content_cannot_break_structure() {
        let mut view = sample::dashboard();
        view.profile.bio = "line one\n# not a heading\n\nline three".into();
        view.top_repositories[0].name = "evil](http://bad)".into();
        view.top_repositories[0].description = "**bold**\n- item".into();
        view.top_repositories[0].url = "https://github.com/o/r (x)".into();

        let out = render(&view);
        assert!(out.contains("> line one\n> \\# not a heading\n> \n> line three\n"));
        assert!(out.contains(
            "- [evil\\](http://bad)](https://github.com/o/r%20%28x%29) ⭐ 120 🍴 9: \\*\\*bold\\*\\* - item\n"
        ));
    }
}
