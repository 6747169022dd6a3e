//! Command implementations.

pub mod chat;
pub mod text;
pub mod vision;

pub use self::chat::execute_chat;
pub use self::text::execute_text;
pub use self::vision::execute_vision;
