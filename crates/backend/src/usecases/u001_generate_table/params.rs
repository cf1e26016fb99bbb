use serde_json::Value;

use crate::shared::error::ApiError;

/// Модель по умолчанию на стороне сервера (форма всегда присылает свою)
pub const SERVER_DEFAULT_MODEL: &str = "vae";

/// Количество строк, если поле `rows` отсутствует
pub const SERVER_DEFAULT_ROWS: i64 = 5;

/// Нормализованные параметры генерации
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateParams {
    pub model: String,
    pub rows: u32,
}

impl GenerateParams {
    /// Accepts the raw JSON body leniently: `rows` may be a number (truncated),
    /// a numeric string or a bool, and is clamped to `1..=max_rows`.
    pub fn from_payload(payload: &Value, max_rows: u32) -> Result<Self, ApiError> {
        let obj = payload
            .as_object()
            .ok_or_else(|| ApiError::InvalidPayload("expected a JSON object".to_string()))?;

        let model = match obj.get("model") {
            None => SERVER_DEFAULT_MODEL.to_string(),
            Some(Value::String(s)) => s.clone(),
            // Неизвестный тип идёт в ветку "не gan"
            Some(other) => other.to_string(),
        };

        let requested = match obj.get("rows") {
            None => SERVER_DEFAULT_ROWS,
            Some(v) => coerce_rows(v)?,
        };

        let max_rows = i64::from(max_rows.max(1));
        let rows = requested.clamp(1, max_rows) as u32;

        Ok(Self { model, rows })
    }
}

fn coerce_rows(value: &Value) -> Result<i64, ApiError> {
    let invalid = |reason: String| ApiError::InvalidField {
        field: "rows",
        reason,
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                // `as` saturates, huge values end up clamped anyway
                Ok(f.trunc() as i64)
            } else {
                Err(invalid(format!("{} is out of range", n)))
            }
        }
        Value::String(s) => {
            let cleaned = s.trim().replace('_', "");
            cleaned
                .parse::<i64>()
                .map_err(|_| invalid(format!("'{}' is not an integer", s)))
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(invalid(format!("unsupported value {}", other))),
    }
}
