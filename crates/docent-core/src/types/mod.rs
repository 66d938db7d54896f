//! Core value types for docent.

mod message;
mod session;

pub use message::{Message, MessageRole};
pub use session::{DocumentSession, SessionStore};
