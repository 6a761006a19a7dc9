use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

/// Failures raised while talking to the document or window.
#[derive(Debug, Clone, PartialEq)]
pub enum DomError {
    NoWindow,
    NoDocument,
    MissingElement(String),
    Js(String),
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DomError::NoWindow => write!(f, "DOM Error: no global window"),
            DomError::NoDocument => write!(f, "DOM Error: window has no document"),
            DomError::MissingElement(sel) => write!(f, "DOM Error: element not found: {}", sel),
            DomError::Js(msg) => write!(f, "DOM Error: {}", msg),
        }
    }
}

impl std::error::Error for DomError {}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(browser_message(&value))
    }
}

/// Failures raised by the key-value store backing the theme preference.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable,
    Read(String),
    Write(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage Error: local storage is unavailable"),
            StorageError::Read(msg) => write!(f, "Storage Error: read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage Error: write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub(crate) fn browser_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::Write("quota exceeded".to_string()).to_string(),
            "Storage Error: write failed: quota exceeded"
        );
        assert_eq!(StorageError::Unavailable.to_string(), "Storage Error: local storage is unavailable");
    }

    #[test]
    fn test_dom_error_display() {
        assert_eq!(
            DomError::MissingElement("#year".to_string()).to_string(),
            "DOM Error: element not found: #year"
        );
    }
}
