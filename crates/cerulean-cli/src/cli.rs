//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cerulean - Normalized results from Azure AI services.
#[derive(Debug, Parser)]
#[command(name = "cerulean")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.cerulean/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log requests and results to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Console layout (default)
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sentiment, key phrases and entities for a batch of documents
    Text(TextArgs),

    /// Send a prompt to an Azure OpenAI deployment
    Chat(ChatArgs),

    /// Captions, tags and objects for one image
    Vision(VisionArgs),
}

/// Arguments for the text command.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Documents to analyze (runs the demo documents when omitted)
    pub documents: Vec<String>,

    /// Language hint sent with every document
    #[arg(short, long)]
    pub language: Option<String>,

    /// Azure AI Language endpoint
    #[arg(long, env = "AZURE_LANGUAGE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Azure AI Language key
    #[arg(long, env = "AZURE_LANGUAGE_KEY", hide_env_values = true)]
    pub key: Option<String>,
}

/// Arguments for the chat command.
#[derive(Debug, Parser)]
pub struct ChatArgs {
    /// User prompt (runs the demo conversation when omitted)
    pub prompt: Option<String>,

    /// System prompt placed before the user prompt
    #[arg(short, long)]
    pub system: Option<String>,

    /// Deployment for this call
    #[arg(short, long)]
    pub deployment: Option<String>,

    /// Deployment used when --deployment is not given
    #[arg(long, env = "AZURE_OPENAI_DEPLOYMENT")]
    pub default_deployment: Option<String>,

    /// Azure OpenAI endpoint
    #[arg(long, env = "AZURE_OPENAI_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Azure OpenAI key
    #[arg(long, env = "AZURE_OPENAI_API_KEY", hide_env_values = true)]
    pub key: Option<String>,
}

/// Arguments for the vision command.
#[derive(Debug, Parser)]
pub struct VisionArgs {
    /// Publicly reachable image URL
    #[arg(short, long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Local image file to upload
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Azure AI Vision endpoint
    #[arg(long, env = "AZURE_VISION_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Azure AI Vision key
    #[arg(long, env = "AZURE_VISION_KEY", hide_env_values = true)]
    pub key: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_command_documents() {
        let cli = Cli::parse_from(["cerulean", "text", "Azure AI is great!", "This is terrible."]);
        match cli.command {
            Command::Text(args) => assert_eq!(args.documents.len(), 2),
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_chat_command_flags() {
        let cli = Cli::parse_from([
            "cerulean",
            "chat",
            "--deployment",
            "gpt-35-turbo",
            "What is Azure AI Vision?",
        ]);
        match cli.command {
            Command::Chat(args) => {
                assert_eq!(args.deployment.as_deref(), Some("gpt-35-turbo"));
                assert_eq!(args.prompt.as_deref(), Some("What is Azure AI Vision?"));
            }
            _ => panic!("Expected Chat command"),
        }
    }

    #[test]
    fn test_vision_url_and_file_conflict() {
        let result = Cli::try_parse_from([
            "cerulean",
            "vision",
            "--url",
            "https://example.com/cat.jpg",
            "--file",
            "cat.jpg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cerulean", "vision", "--format", "json", "-v"]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Table.into();
        assert_eq!(format, crate::config::OutputFormat::Table);
    }
}
