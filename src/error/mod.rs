mod browser;
mod config;
mod form;

pub use browser::{ DomError, StorageError };
pub(crate) use browser::browser_message;
pub use config::ConfigError;
pub use form::FormError;
