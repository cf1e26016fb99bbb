//! Table preview built from a generator payload.
//!
//! Everything here is plain data; the view turns it into text nodes, so cell
//! contents coming from the server are never interpreted as markup.

use serde_json::Value;

use super::error::GenerateError;

/// Заголовки и ячейки, готовые к выводу
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TablePreview {
    pub header: Vec<String>,
    pub body: Vec<Vec<String>>,
}

impl TablePreview {
    /// One header cell per column and one row per data row, in the given order.
    ///
    /// Row lengths are not checked against the column count.
    pub fn build(columns: &[Value], rows: &[Vec<Value>]) -> Self {
        Self {
            header: columns.iter().map(cell_text).collect(),
            body: rows
                .iter()
                .map(|row| row.iter().map(cell_text).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.body.len()
    }

    pub fn summary(&self) -> String {
        format!("Showing {} rows — model output preview", self.row_count())
    }
}

/// Shape check of a generator payload: `columns` must be an array and `rows`
/// an array of arrays.
pub fn split_payload(payload: &Value) -> Result<(&[Value], Vec<Vec<Value>>), GenerateError> {
    let shape = |what: &str| GenerateError::UnexpectedShape(what.to_string());

    let obj = payload
        .as_object()
        .ok_or_else(|| shape("response is not an object"))?;
    let columns = obj
        .get("columns")
        .and_then(Value::as_array)
        .ok_or_else(|| shape("missing or non-array 'columns'"))?;
    let rows = obj
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| shape("missing or non-array 'rows'"))?;

    let rows = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.as_array()
                .cloned()
                .ok_or_else(|| GenerateError::UnexpectedShape(format!("row {} is not an array", i)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((columns.as_slice(), rows))
}

/// Text of a cell as the browser's `String(value)` would print it
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // в Array.prototype.join null превращается в пустую строку
                Value::Null => String::new(),
                other => cell_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // 1.0 -> "1", как в JS
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
