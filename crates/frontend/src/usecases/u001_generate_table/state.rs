use contracts::usecases::u001_generate_table::DEFAULT_MODEL;
use serde_json::Value;

use super::error::GenerateError;
use super::table::{split_payload, TablePreview};
use super::validation::validate_rows_input;

pub const BUTTON_IDLE_LABEL: &str = "Generate";
pub const BUTTON_BUSY_LABEL: &str = "Generating...";
pub const NO_DATA_TEXT: &str = "No data yet.";
pub const FAILURE_TEXT: &str = "Error: could not generate data. See console for details.";

/// Состояние формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Busy,
    Error,
}

impl UiState {
    pub fn label(self) -> &'static str {
        match self {
            UiState::Idle => "Idle",
            UiState::Busy => "Running",
            UiState::Error => "Error",
        }
    }

    pub fn is_busy(self) -> bool {
        self == UiState::Busy
    }
}

/// Status text plus the trigger button's label and enablement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub label: String,
    pub busy: bool,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            label: UiState::Idle.label().to_string(),
            busy: false,
        }
    }
}

impl StatusLine {
    pub fn set(&mut self, label: impl Into<String>, busy: bool) {
        self.label = label.into();
        self.busy = busy;
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy {
            BUTTON_BUSY_LABEL
        } else {
            BUTTON_IDLE_LABEL
        }
    }

    pub fn button_disabled(&self) -> bool {
        self.busy
    }
}

/// Что показывает блок результатов
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    #[default]
    Empty,
    Table(TablePreview),
    Failed,
}

impl ResultsView {
    pub fn is_hidden(&self) -> bool {
        !matches!(self, ResultsView::Table(_))
    }

    pub fn summary(&self) -> String {
        match self {
            ResultsView::Empty => NO_DATA_TEXT.to_string(),
            ResultsView::Table(table) => table.summary(),
            ResultsView::Failed => FAILURE_TEXT.to_string(),
        }
    }

    pub fn table(&self) -> Option<&TablePreview> {
        match self {
            ResultsView::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Result of a click on the trigger
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Validation passed, the form is now Busy and exactly this request must be sent
    Send { model: String, rows: f64 },
    /// Row count rejected; nothing in the form changed
    Rejected(GenerateError),
    /// A request is already outstanding
    Ignored,
}

/// The generate form's state machine, free of any DOM or network access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateForm {
    state: UiState,
    status: StatusLine,
    results: ResultsView,
}

impl GenerateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    /// Handle a click. A missing model falls back to `"gan"`.
    pub fn submit(&mut self, rows_input: &str, model: Option<&str>) -> Submission {
        if self.state.is_busy() {
            return Submission::Ignored;
        }

        let Some(rows) = validate_rows_input(rows_input) else {
            return Submission::Rejected(GenerateError::InvalidInput);
        };

        let model = model
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
            .to_string();

        self.enter(UiState::Busy);
        Submission::Send { model, rows }
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// Returns the error (already reflected in the form) so the caller can
    /// log it; the user only ever sees the generic failure text.
    pub fn settle(&mut self, outcome: Result<Value, GenerateError>) -> Result<(), GenerateError> {
        let rendered = outcome.and_then(|payload| {
            let (columns, rows) = split_payload(&payload)?;
            self.render(columns, &rows);
            Ok(())
        });

        match rendered {
            Ok(()) => {
                self.enter(UiState::Idle);
                Ok(())
            }
            Err(err) => {
                self.results = ResultsView::Failed;
                self.enter(UiState::Error);
                Err(err)
            }
        }
    }

    /// Replace whatever was rendered before with a fresh table
    pub fn render(&mut self, columns: &[Value], rows: &[Vec<Value>]) {
        self.results = ResultsView::Table(TablePreview::build(columns, rows));
    }

    fn enter(&mut self, next: UiState) {
        self.state = next;
        self.status.set(next.label(), next.is_busy());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u001_generate_table::api::request_body;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "columns": ["id", "age"],
            "rows": [["r01", 30], ["r02", 41]]
        })
    }

    #[test]
    fn test_initial_state() {
        let form = GenerateForm::new();
        assert_eq!(form.state(), UiState::Idle);
        assert_eq!(form.status().label, "Idle");
        assert_eq!(form.status().button_label(), "Generate");
        assert!(!form.status().button_disabled());
        assert!(form.results().is_hidden());
        assert_eq!(form.results().summary(), "No data yet.");
    }

    #[test]
    fn test_status_line_set() {
        let mut status = StatusLine::default();
        status.set("Running", true);
        assert_eq!(status.button_label(), "Generating...");
        assert!(status.button_disabled());

        status.set("Idle", false);
        status.set("Idle", false);
        assert_eq!(status.label, "Idle");
        assert_eq!(status.button_label(), "Generate");
        assert!(!status.button_disabled());
    }

    #[test]
    fn test_invalid_rows_do_not_touch_the_form() {
        let mut form = GenerateForm::new();
        let before = form.clone();

        for input in ["4", "31", "abc", ""] {
            assert_eq!(
                form.submit(input, Some("gan")),
                Submission::Rejected(GenerateError::InvalidInput)
            );
        }
        assert_eq!(form, before);
    }

    #[test]
    fn test_click_to_table_end_to_end() {
        let mut form = GenerateForm::new();

        let submission = form.submit("10", Some("gan"));
        let Submission::Send { model, rows } = submission else {
            panic!("expected a request, got {submission:?}");
        };
        assert_eq!(
            request_body(&model, rows).unwrap(),
            r#"{"model":"gan","rows":10}"#
        );
        assert_eq!(form.state(), UiState::Busy);
        assert_eq!(form.status().label, "Running");
        assert!(form.status().button_disabled());
        assert_eq!(form.status().button_label(), "Generating...");

        // second click while the request is outstanding sends nothing
        assert_eq!(form.submit("10", Some("gan")), Submission::Ignored);

        assert!(form.settle(Ok(sample_payload())).is_ok());
        assert_eq!(form.state(), UiState::Idle);
        assert_eq!(form.status().label, "Idle");
        assert!(!form.status().button_disabled());
        assert!(!form.results().is_hidden());

        let table = form.results().table().unwrap();
        assert_eq!(table.header, vec!["id", "age"]);
        assert_eq!(table.body, vec![vec!["r01", "30"], vec!["r02", "41"]]);
        assert_eq!(form.results().summary(), "Showing 2 rows — model output preview");
    }

    #[test]
    fn test_missing_model_falls_back_to_gan() {
        let mut form = GenerateForm::new();
        match form.submit("12", None) {
            Submission::Send { model, rows } => {
                assert_eq!(model, "gan");
                assert_eq!(rows, 12.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_fractional_rows_are_sent() {
        let mut form = GenerateForm::new();
        assert_eq!(
            form.submit("12.5", Some("vae")),
            Submission::Send {
                model: "vae".to_string(),
                rows: 12.5
            }
        );
    }

    #[test]
    fn test_every_failure_hides_results() {
        let failures = [
            GenerateError::Http {
                status: 500,
                body: Some("server down".to_string()),
            },
            GenerateError::MalformedJson,
            GenerateError::Timeout { ms: 60_000 },
            GenerateError::Network("connection refused".to_string()),
        ];

        for failure in failures {
            let mut form = GenerateForm::new();
            form.submit("10", Some("gan"));
            form.settle(Ok(sample_payload())).unwrap();

            form.submit("10", Some("gan"));
            let err = form.settle(Err(failure.clone())).unwrap_err();
            assert_eq!(err, failure);
            assert_eq!(form.state(), UiState::Error);
            assert_eq!(form.status().label, "Error");
            assert!(!form.status().button_disabled());
            assert!(form.results().is_hidden());
            assert_eq!(form.results().summary(), FAILURE_TEXT);
            assert!(!form.results().summary().contains("server down"));
        }
    }

    #[test]
    fn test_bad_shape_is_a_failure() {
        let mut form = GenerateForm::new();
        form.submit("10", Some("gan"));
        let err = form.settle(Ok(json!({"columns": ["a"]}))).unwrap_err();
        assert!(matches!(err, GenerateError::UnexpectedShape(_)));
        assert_eq!(form.state(), UiState::Error);
        assert!(form.results().is_hidden());
    }

    #[test]
    fn test_retry_after_error() {
        let mut form = GenerateForm::new();
        form.submit("10", Some("gan"));
        let _ = form.settle(Err(GenerateError::MalformedJson));

        // invalid input in Error state keeps the error on screen
        assert_eq!(
            form.submit("2", Some("gan")),
            Submission::Rejected(GenerateError::InvalidInput)
        );
        assert_eq!(form.state(), UiState::Error);

        assert!(matches!(form.submit("5", Some("gan")), Submission::Send { .. }));
        assert_eq!(form.state(), UiState::Busy);
    }

    #[test]
    fn test_render_twice_does_not_accumulate() {
        let columns = vec![json!("a"), json!("b")];
        let rows = vec![vec![json!(1), json!(2)], vec![json!(3), json!(4)]];

        let mut once = GenerateForm::new();
        once.render(&columns, &rows);

        let mut twice = GenerateForm::new();
        twice.render(&columns, &rows);
        twice.render(&columns, &rows);

        assert_eq!(once, twice);
        let table = twice.results().table().unwrap();
        assert_eq!(table.header.len(), 2);
        assert_eq!(table.row_count(), 2);
        assert!(table.summary().contains('2'));
    }
}
