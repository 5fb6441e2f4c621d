//! Command-line interface for the lukman client.

mod ask;
mod health;
mod history;

use anyhow::Result;
use clap::{Parser, Subcommand};

use lukman::{format_advice, strip_markdown, ContentItem, LukmanClient, Settings};

/// Türkmen medical advice client.
#[derive(Debug, Parser)]
#[command(name = "lukman", version, about)]
pub struct Cli {
    /// Base URL of the advice API (overrides LUKMAN_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ask a medical question and print the structured advice.
    Ask {
        /// Free-text question, 10-1000 characters.
        question: String,
        /// Patient age (optional).
        #[arg(long)]
        age: Option<u32>,
        /// Patient gender (optional).
        #[arg(long, value_parser = ["erkek", "aýal"])]
        gender: Option<String>,
    },
    /// List past queries, newest first.
    History {
        /// Records per page.
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Records to skip.
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Display one past query with its stored advice.
    Show {
        /// ID of the query to display.
        id: i64,
    },
    /// Check service health.
    Health,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut settings = Settings::from_env();
        if let Some(api_url) = self.api_url {
            settings.api_url = api_url;
        }
        let client = LukmanClient::new(&settings);

        match self.command {
            Command::Ask {
                question,
                age,
                gender,
            } => ask::cmd_ask(&client, question, age, gender).await,
            Command::History { limit, offset } => {
                history::cmd_history(&client, limit, offset).await
            }
            Command::Show { id } => history::cmd_show(&client, id).await,
            Command::Health => health::cmd_health(&client).await,
        }
    }
}

/// Print advice as a structured outline.
///
/// When no numbered section is detected the formatter returns nothing, and
/// the whole text is rendered as markdown-stripped prose instead.
pub(crate) fn render_advice(advice: &str) {
    let sections = format_advice(advice);
    if sections.is_empty() {
        println!("{}", strip_markdown(advice));
        return;
    }
    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{}. {}", idx + 1, section.title);
        for item in &section.content {
            match item {
                ContentItem::Bullet { text } => println!("   • {text}"),
                ContentItem::Text { text } => println!("   {text}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_ask_with_demographics() {
        let cli = Cli::try_parse_from([
            "lukman",
            "ask",
            "Kelläm agyrýar we gyzzyrma bar, näme etmeli?",
            "--age",
            "30",
            "--gender",
            "erkek",
        ])
        .unwrap();
        match cli.command {
            Command::Ask { age, gender, .. } => {
                assert_eq!(age, Some(30));
                assert_eq!(gender.as_deref(), Some("erkek"));
            }
            other => panic!("expected Ask, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_gender() {
        let result = Cli::try_parse_from(["lukman", "ask", "soragym bar", "--gender", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_history_defaults() {
        let cli = Cli::try_parse_from(["lukman", "history"]).unwrap();
        match cli.command {
            Command::History { limit, offset } => {
                assert_eq!(limit, 10);
                assert_eq!(offset, 0);
            }
            other => panic!("expected History, got {other:?}"),
        }
    }
}
