pub mod html;
pub mod markdown;
pub mod text;

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::DashboardViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

pub fn render(view: &DashboardViewModel, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => text::render(view),
        OutputFormat::Markdown => markdown::render(view),
        OutputFormat::Json => serde_json::to_string_pretty(view)?,
        OutputFormat::Html => html::render(view)?,
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_output_is_view_model() {
        let out = render(&sample::dashboard(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["profile"]["login"], "octocat");
        assert_eq!(value["stats"]["total_stars"], 125);
        assert_eq!(value["insights"].as_array().unwrap().len(), 2);
    }
}
