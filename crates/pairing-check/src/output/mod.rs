mod annotations;
mod formatter;
mod json;
mod plain;

use clap::ValueEnum;

pub(crate) use annotations::GitHubAnnotationFormatter;
pub(crate) use formatter::OutputFormatter;
pub(crate) use json::JsonFormatter;
pub(crate) use plain::PlainTextFormatter;

use crate::environment::is_github_actions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// `github` inside GitHub Actions, `plain` elsewhere
    #[default]
    Auto,
    Plain,
    Github,
    Json,
}

impl OutputFormat {
    pub(crate) fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Auto if is_github_actions() => Box::new(GitHubAnnotationFormatter),
            Self::Auto | Self::Plain => Box::new(PlainTextFormatter),
            Self::Github => Box::new(GitHubAnnotationFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

/// Joined with ", " so the whole list fits in one annotation line.
pub(crate) fn join_paths(paths: &[String]) -> String {
    paths.join(", ")
}
