use contracts::usecases::u001_generate_table::{MAX_ROWS, MIN_ROWS, MODELS};
use leptos::prelude::*;

use super::controller::GenerateController;
use crate::shared::components::ui::{Button, NumberInput, RadioGroup};

/// Форма генерации синтетической таблицы
///
/// Element ids (`generateBtn`, `rowsInput`, `status`, `tableWrap`,
/// `tableHead`, `tableBody`, `resultsInfo`) and the `model` radio group are
/// what the stylesheet and page scripts key on.
#[component]
pub fn GenerateWidget() -> impl IntoView {
    let controller = GenerateController::new();
    let form = controller.form;

    let model_options: Vec<(String, String)> = MODELS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    let button_disabled = Signal::derive(move || form.with(|f| f.status().button_disabled()));
    let button_label = move || form.with(|f| f.status().button_label());
    let status_label = move || form.with(|f| f.status().label.clone());
    let summary = move || form.with(|f| f.results().summary());
    let results_hidden = move || form.with(|f| f.results().is_hidden());

    let header = move || {
        form.with(|f| f.results().table().map(|t| t.header.clone()))
            .map(|cells| {
                view! {
                    <tr>
                        {cells.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                    </tr>
                }
            })
    };

    let body = move || {
        form.with(|f| f.results().table().map(|t| t.body.clone()))
            .unwrap_or_default()
            .into_iter()
            .map(|row| {
                view! {
                    <tr>
                        {row.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div id="u001_generate_table--usecase" class="page" data-page-category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Synthetic data generator"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="form">
                    <RadioGroup
                        label="Model"
                        name="model"
                        selected=controller.model
                        options=model_options
                    />
                    <NumberInput
                        id="rowsInput"
                        label="Rows"
                        value=controller.rows_input
                        min=MIN_ROWS
                        max=MAX_ROWS
                    />
                    <div class="form__actions">
                        <Button
                            id="generateBtn"
                            disabled=button_disabled
                            on_click=Callback::new(move |_| controller.on_generate())
                        >
                            {button_label}
                        </Button>
                        <span id="status" class="form__status">
                            {status_label}
                        </span>
                    </div>
                </div>

                <p id="resultsInfo" class="results__info">
                    {summary}
                </p>

                <div id="tableWrap" class="table-wrap" hidden=results_hidden>
                    <table class="table">
                        <thead id="tableHead">{header}</thead>
                        <tbody id="tableBody">{body}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
