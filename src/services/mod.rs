pub mod guard;
pub mod validation;

mod language;
mod session;
mod spawn;
mod storage;

pub use language::{LANGUAGE_KEY, LanguageController};
pub use session::SessionStore;
pub use spawn::Spawner;
pub use storage::{BrowserStore, LocalStore, MemoryStore};
