use std::fmt::Write;

use crate::error::Result;
use crate::format::{format_bytes, format_number, format_percent};
use crate::models::DashboardViewModel;

const STYLES: &str = r#"
body { font-family: -apple-system, "Segoe UI", sans-serif; background: #0d1117; color: #c9d1d9; margin: 0; padding: 2rem; }
.dashboard { display: grid; gap: 1.5rem; max-width: 960px; margin: 0 auto; }
.card { background: #161b22; border: 1px solid #30363d; border-radius: 8px; padding: 1.25rem; }
.profile { display: flex; gap: 1rem; align-items: center; }
.profile img { width: 96px; height: 96px; border-radius: 50%; }
.stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; text-align: center; }
.stat-value { font-size: 1.5rem; font-weight: 600; color: #58a6ff; }
.lang-bar { display: flex; height: 10px; border-radius: 5px; overflow: hidden; margin-bottom: 0.75rem; }
.legend-item { display: inline-flex; align-items: center; gap: 0.35rem; margin-right: 1rem; }
.legend-dot { width: 10px; height: 10px; border-radius: 50%; display: inline-block; }
.repo-item { display: flex; justify-content: space-between; padding: 0.6rem 0; border-bottom: 1px solid #21262d; color: inherit; text-decoration: none; }
.repo-desc { color: #8b949e; font-size: 0.9rem; }
.insight-item { padding: 0.4rem 0; }
"#;

pub fn render(view: &DashboardViewModel) -> Result<String> {
    let mut out = String::new();
    HtmlGenerator::new(&mut out, view).generate()?;
    Ok(out)
}

struct HtmlGenerator<'a, W: Write> {
    writer: &'a mut W,
    view: &'a DashboardViewModel,
}

impl<'a, W: Write> HtmlGenerator<'a, W> {
    fn new(writer: &'a mut W, view: &'a DashboardViewModel) -> Self {
        Self { writer, view }
    }

    fn generate(&mut self) -> Result<()> {
        self.write_header()?;
        writeln!(self.writer, "<body>")?;
        writeln!(self.writer, "<main class=\"dashboard\">")?;
        self.write_profile()?;
        self.write_stats()?;
        self.write_languages()?;
        self.write_top_repositories()?;
        self.write_insights()?;
        writeln!(self.writer, "</main>")?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html lang=\"en\">")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<meta charset=\"UTF-8\">")?;
        writeln!(
            self.writer,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(
            self.writer,
            "<title>DevMetrics - {}</title>",
            html_escape(&self.view.profile.login)
        )?;
        writeln!(self.writer, "<style>{}</style>", STYLES)?;
        writeln!(self.writer, "</head>")?;
        Ok(())
    }

    fn write_profile(&mut self) -> Result<()> {
        let profile = &self.view.profile;
        writeln!(self.writer, "<section class=\"card profile\">")?;
        writeln!(
            self.writer,
            "<img src=\"{}\" alt=\"avatar\">",
            html_escape(&profile.avatar_url)
        )?;
        writeln!(self.writer, "<div>")?;
        writeln!(self.writer, "<h1>{}</h1>", html_escape(&profile.display_name))?;
        writeln!(self.writer, "<div class=\"login\">@{}</div>", html_escape(&profile.login))?;
        writeln!(self.writer, "<p class=\"bio\">{}</p>", html_escape(&profile.bio))?;
        writeln!(
            self.writer,
            "<div><span>{} followers</span> · <span>{} following</span> · <span>{} repos</span></div>",
            format_number(u64::from(profile.followers)),
            format_number(u64::from(profile.following)),
            profile.public_repos
        )?;
        writeln!(self.writer, "</div>")?;
        writeln!(self.writer, "</section>")?;
        Ok(())
    }

    fn write_stats(&mut self) -> Result<()> {
        let stats = self.view.stats;
        let tiles = [
            ("Total Stars", format_number(stats.total_stars)),
            ("Total Forks", format_number(stats.total_forks)),
            ("Avg Repo Size", format_bytes(stats.avg_repo_size_bytes)),
            ("Activity", format!("{} active", stats.active_repo_count)),
        ];

        writeln!(self.writer, "<section class=\"card stats\">")?;
        for (label, value) in tiles {
            writeln!(
                self.writer,
                "<div><div class=\"stat-value\">{}</div><div class=\"stat-label\">{}</div></div>",
                html_escape(&value),
                label
            )?;
        }
        writeln!(self.writer, "</section>")?;
        Ok(())
    }

    fn write_languages(&mut self) -> Result<()> {
        writeln!(self.writer, "<section class=\"card languages\">")?;
        writeln!(self.writer, "<h2>Languages</h2>")?;

        writeln!(self.writer, "<div class=\"lang-bar\">")?;
        for share in &self.view.languages {
            let percent = format_percent(share.percentage);
            writeln!(
                self.writer,
                "<div class=\"lang-segment\" style=\"width: {}; background: {};\" title=\"{}: {}\"></div>",
                percent,
                html_escape(&share.color),
                html_escape(&share.name),
                percent
            )?;
        }
        writeln!(self.writer, "</div>")?;

        writeln!(self.writer, "<div class=\"lang-legend\">")?;
        for share in &self.view.languages {
            writeln!(
                self.writer,
                "<div class=\"legend-item\"><span class=\"legend-dot\" style=\"background: {}\"></span><span>{}</span><span class=\"legend-percent\">{}</span></div>",
                html_escape(&share.color),
                html_escape(&share.name),
                format_percent(share.percentage)
            )?;
        }
        writeln!(self.writer, "</div>")?;

        writeln!(self.writer, "</section>")?;
        Ok(())
    }

    fn write_top_repositories(&mut self) -> Result<()> {
        writeln!(self.writer, "<section class=\"card repos\">")?;
        writeln!(self.writer, "<h2>Top Repositories</h2>")?;
        for repo in &self.view.top_repositories {
            writeln!(
                self.writer,
                "<a href=\"{}\" target=\"_blank\" class=\"repo-item\">",
                html_escape(&repo.url)
            )?;
            writeln!(
                self.writer,
                "<div><div class=\"repo-name\">{}</div><div class=\"repo-desc\">{}</div></div>",
                html_escape(&repo.name),
                html_escape(&repo.description)
            )?;
            writeln!(
                self.writer,
                "<div class=\"repo-stats\"><span>⭐ {}</span> <span>🍴 {}</span></div>",
                repo.stars, repo.forks
            )?;
            writeln!(self.writer, "</a>")?;
        }
        writeln!(self.writer, "</section>")?;
        Ok(())
    }

    fn write_insights(&mut self) -> Result<()> {
        writeln!(self.writer, "<section class=\"card insights\">")?;
        writeln!(self.writer, "<h2>Insights</h2>")?;
        for insight in &self.view.insights {
            writeln!(
                self.writer,
                "<div class=\"insight-item\"><span class=\"insight-icon\">{}</span> <span class=\"insight-text\">{}</span></div>",
                insight.icon,
                html_escape(&insight.text)
            )?;
        }
        writeln!(self.writer, "</section>")?;
        Ok(())
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sample;

    #[test]
    fn test_escapes_user_content() {
        let out = render(&sample::dashboard()).unwrap();
        assert!(out.contains("<h1>The &lt;Octo&gt; Cat</h1>"));
        assert!(out.contains("Fast &amp; small"));
        assert!(!out.contains("<Octo>"));
    }

    #[test]
    fn test_language_bar_and_legend() {
        let out = render(&sample::dashboard()).unwrap();
        assert!(out.contains("style=\"width: 66.7%; background: #00ADD8;\""));
        assert!(out.contains("<span>Rust</span><span class=\"legend-percent\">33.3%</span>"));
    }

    #[test]
    fn test_sections_present() {
        let out = render(&sample::dashboard()).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>DevMetrics - octocat</title>"));
        assert!(out.contains("1.5 KB"));
        assert!(out.contains("Open to job opportunities!"));
        assert!(out.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
