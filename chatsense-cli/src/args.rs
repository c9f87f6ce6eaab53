//! Command argument structures

use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SentimentArgs {
    /// Text to analyze (reads stdin when omitted or "-")
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Message text (reads stdin when omitted or "-")
    pub text: Vec<String>,

    /// Message ID (a random UUID when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// Skip entity extraction
    #[arg(long)]
    pub no_entities: bool,
}

#[derive(Args)]
pub struct EntitiesArgs {
    /// Text to scan (reads stdin when omitted or "-")
    pub text: Vec<String>,

    /// Only report entities of this type (email, phone, url, date)
    #[arg(long = "type", short = 't')]
    pub entity_type: Option<String>,

    /// Drop overlapping spans, keeping the strongest match
    #[arg(long)]
    pub resolve_overlaps: bool,
}

#[derive(Args)]
pub struct ConversationArgs {
    /// JSON file with an array of messages ({"id", "text"} objects or plain strings)
    pub file: PathBuf,

    /// Number of most recent messages in the rolling sentiment verdict
    #[arg(long, short)]
    pub window: Option<usize>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[clap(name = "powershell")]
    Power,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::Power => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
