pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use context::ChatsenseCliContext;
pub use output::{
    CliColors, format_error, format_info, format_intent, format_sentiment, format_success,
    format_warning, output_error, output_error_json, print_aggregate, print_classification,
    print_entity_list, print_entity_summary, print_intent_distribution, print_json, print_sentiment,
};
pub use utils::{last_window, load_messages, parse_entity_type, resolve_text};
