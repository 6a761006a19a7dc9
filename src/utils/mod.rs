pub mod calendar;
pub mod contact;
pub mod dom;
pub mod menu;
pub mod motion;
pub mod storage;
pub mod theme_state;
pub mod timer;
pub mod typewriter;

pub use calendar::current_year;
pub use contact::ContactSubmission;
pub use menu::MenuState;
pub use storage::{ KeyValueStore, LocalStore, MemoryStore };
pub use theme_state::{ Theme, ThemeState, THEME_KEY };
pub use typewriter::{ Typewriter, TypingStep };
