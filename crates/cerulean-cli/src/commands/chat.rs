//! Chat command implementation.

use crate::cli::ChatArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cerulean_adapters::ChatAdapter;
use cerulean_azure::OpenAiClient;
use cerulean_domain::ChatMessage;

/// System prompt used when none is given
pub const DEMO_SYSTEM_PROMPT: &str =
    "You are a helpful AI engineering tutor who explains Azure AI services clearly and concisely.";

/// User prompt used when none is given
pub const DEMO_PROMPT: &str = "What are three Azure AI services I should learn first and why?";

/// Execute the chat command.
pub fn execute_chat(args: ChatArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let messages = build_messages(args.system, args.prompt)?;

    let openai = config.openai_config(args.endpoint, args.key, args.default_deployment)?;
    let adapter = ChatAdapter::new(OpenAiClient::new(&openai), openai.deployment.clone());

    let reply = adapter.chat(&messages, args.deployment.as_deref())?;

    if let Some(banner) = formatter.banner("Azure OpenAI: Chat Completion") {
        println!("{}", banner);
    }
    println!("{}", formatter.format_reply(&reply)?);

    Ok(())
}

/// System turn followed by the user turn.
pub fn build_messages(system: Option<String>, prompt: Option<String>) -> Result<Vec<ChatMessage>> {
    let prompt = prompt.unwrap_or_else(|| DEMO_PROMPT.to_string());
    if prompt.trim().is_empty() {
        return Err(CliError::InvalidInput("prompt must not be empty".to_string()));
    }

    Ok(vec![
        ChatMessage::system(system.unwrap_or_else(|| DEMO_SYSTEM_PROMPT.to_string())),
        ChatMessage::user(prompt),
    ])
}
