use chatsense::analyzer::MessageAnalyzer;
use chatsense::config::{ChatsenseConfig, ConfigLoader};
use std::path::Path;

pub struct ChatsenseCliContext {
    pub analyzer: MessageAnalyzer,
    pub config: ChatsenseConfig,
}

impl ChatsenseCliContext {
    /// Load configuration (defaults, then `config_file`, then environment) and
    /// build the analyzer. Logging is owned by the binary.
    pub fn new(config_file: Option<&Path>) -> chatsense::Result<Self> {
        let mut loader = ConfigLoader::new();
        loader.load_default_files();
        if let Some(path) = config_file {
            loader.load_file(path)?;
        }
        let config = loader.load_env().extract()?;

        Ok(Self {
            analyzer: MessageAnalyzer::from_config(&config)?,
            config,
        })
    }

    pub fn from_config(config: ChatsenseConfig) -> chatsense::Result<Self> {
        Ok(Self {
            analyzer: MessageAnalyzer::from_config(&config)?,
            config,
        })
    }
}
