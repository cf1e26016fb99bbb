use thiserror::Error;

/// Ошибки генерации таблицы
///
/// `InvalidInput` is caught before any request is sent. All other variants
/// come out of a settled request and are only written to the console.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("Rows must be a number between 5 and 30.")]
    InvalidInput,

    #[error("HTTP {status}{}", body_suffix(.body))]
    Http { status: u16, body: Option<String> },

    #[error("Invalid JSON from server")]
    MalformedJson,

    #[error("Request timed out after {ms} ms")]
    Timeout { ms: u32 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned unexpected format: {0}")]
    UnexpectedShape(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body.as_deref() {
        Some(text) if !text.is_empty() => format!(" - {}", text),
        _ => String::new(),
    }
}
