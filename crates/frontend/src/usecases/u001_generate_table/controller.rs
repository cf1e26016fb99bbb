use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{self, DEFAULT_TIMEOUT_MS};
use super::state::{GenerateForm, Submission};
use contracts::usecases::u001_generate_table::DEFAULT_MODEL;

/// Reactive owner of the generate form.
///
/// Created once when the page mounts; the view binds its inputs and output
/// elements to these signals and nothing else touches them.
#[derive(Clone, Copy)]
pub struct GenerateController {
    pub form: RwSignal<GenerateForm>,
    /// Сырой текст поля rowsInput
    pub rows_input: RwSignal<String>,
    /// Отмеченная радиокнопка группы `model`
    pub model: RwSignal<Option<String>>,
    timeout_ms: u32,
}

impl GenerateController {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self {
            form: RwSignal::new(GenerateForm::new()),
            rows_input: RwSignal::new("10".to_string()),
            model: RwSignal::new(Some(DEFAULT_MODEL.to_string())),
            timeout_ms,
        }
    }

    /// Click handler of the trigger button
    pub fn on_generate(self) {
        let rows_input = self.rows_input.get_untracked();
        let model = self.model.get_untracked();

        let submission = self
            .form
            .try_update(|form| form.submit(&rows_input, model.as_deref()));

        match submission {
            Some(Submission::Send { model, rows }) => self.send(model, rows),
            Some(Submission::Rejected(err)) => show_alert(&err.to_string()),
            Some(Submission::Ignored) | None => {
                log::debug!("generate: click ignored, request already in flight");
            }
        }
    }

    fn send(self, model: String, rows: f64) {
        log::debug!("generate: model={} rows={}", model, rows);
        let timeout_ms = self.timeout_ms;

        spawn_local(async move {
            let outcome = api::generate(&model, rows, timeout_ms).await;
            if let Some(Err(err)) = self.form.try_update(|form| form.settle(outcome)) {
                log::error!("Generate API error: {}", err);
            }
        });
    }
}

impl Default for GenerateController {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking browser alert
fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}
