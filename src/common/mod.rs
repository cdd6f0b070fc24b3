pub mod commands;
pub mod events;
pub mod types;

pub use commands::ResponderCommand;
pub use events::ResponderEvent;
pub use types::{ChatMessage, Contact, ContactId, MessageId, Sender, format_time};
