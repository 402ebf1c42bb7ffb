//! Command implementations
//!
//! The interactive menu and the session it drives.

pub mod menu;
pub mod session;

pub use menu::{Flow, Menu, MenuCommand};
pub use session::{DictionaryId, Session, SessionConfig};
