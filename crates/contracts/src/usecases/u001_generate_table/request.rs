use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Запрос на генерацию синтетической таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Идентификатор модели ("gan", "vae", ...)
    pub model: String,

    /// Количество строк. Целые значения уходят как `10`, дробные как `12.5`
    pub rows: Number,
}

impl GenerateRequest {
    /// Returns `None` when `rows` is not a finite number.
    pub fn new(model: impl Into<String>, rows: f64) -> Option<Self> {
        Some(Self {
            model: model.into(),
            rows: rows_to_number(rows)?,
        })
    }
}

fn rows_to_number(rows: f64) -> Option<Number> {
    if !rows.is_finite() {
        return None;
    }
    // 2^53: beyond this f64 no longer holds every integer exactly
    if rows.fract() == 0.0 && rows.abs() <= 9_007_199_254_740_992.0 {
        return Some(Number::from(rows as i64));
    }
    Number::from_f64(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_rows_serialize_without_fraction() {
        let req = GenerateRequest::new("gan", 10.0).unwrap();
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"model":"gan","rows":10}"#
        );
    }

    #[test]
    fn test_fractional_rows_are_kept() {
        let req = GenerateRequest::new("vae", 12.5).unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"model": "vae", "rows": 12.5})
        );
    }

    #[test]
    fn test_non_finite_rows_rejected() {
        assert!(GenerateRequest::new("gan", f64::NAN).is_none());
        assert!(GenerateRequest::new("gan", f64::INFINITY).is_none());
    }
}
