use crate::format::{format_bytes, format_number, format_percent};
use crate::models::DashboardViewModel;

pub fn render(view: &DashboardViewModel) -> String {
    let mut output = String::new();
    let profile = &view.profile;

    output.push_str(&format!(
        "\n=== {} (@{}) ===\n\n",
        profile.display_name, profile.login
    ));
    output.push_str(&format!("{}\n\n", profile.bio));
    output.push_str(&format!(
        "Followers: {}  Following: {}  Public repos: {}\n\n",
        format_number(u64::from(profile.followers)),
        format_number(u64::from(profile.following)),
        profile.public_repos
    ));

    let stats = &view.stats;
    output.push_str("Stats:\n");
    output.push_str(&format!("  Total stars: {}\n", format_number(stats.total_stars)));
    output.push_str(&format!("  Total forks: {}\n", format_number(stats.total_forks)));
    output.push_str(&format!(
        "  Avg repo size: {}\n",
        format_bytes(stats.avg_repo_size_bytes)
    ));
    output.push_str(&format!("  Activity: {} active\n", stats.active_repo_count));

    if !view.languages.is_empty() {
        output.push_str("\nLanguages:\n");
        for share in &view.languages {
            output.push_str(&format!(
                "  {:<16} {:>6}  ({} repos)\n",
                share.name,
                format_percent(share.percentage),
                share.count
            ));
        }
    }

    if !view.top_repositories.is_empty() {
        output.push_str("\nTop Repositories:\n");
        for repo in &view.top_repositories {
            output.push_str(&format!(
                "  {} ⭐ {} 🍴 {}\n    {}\n    {}\n",
                repo.name, repo.stars, repo.forks, repo.description, repo.url
            ));
        }
    }

    output.push_str("\nInsights:\n");
    for insight in &view.insights {
        output.push_str(&format!("  {} {}\n", insight.icon, insight.text));
    }

    output.push_str(&format!(
        "\nGenerated on: {}\n",
        view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
