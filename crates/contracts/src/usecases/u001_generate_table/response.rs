use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ответ генератора: заголовки и строки таблицы
///
/// Порядок `columns` задаёт порядок отображения. Строки не обязаны совпадать
/// по длине с `columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}
