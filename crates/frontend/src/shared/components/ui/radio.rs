use leptos::prelude::*;

/// Radio button bound to the group's selection signal
#[component]
pub fn Radio(
    /// Label text
    #[prop(into)]
    label: String,
    /// Radio value
    #[prop(into)]
    value: String,
    /// Selected value of the whole group (`None` = nothing checked)
    selected: RwSignal<Option<String>>,
    /// Name attribute (for grouping)
    name: &'static str,
) -> impl IntoView {
    let radio_id = format!("{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    let is_checked = move || selected.get().as_deref() == Some(value_for_check.as_str());

    view! {
        <div class="form__radio-wrapper">
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                on:change=move |_| selected.set(Some(value_for_change.clone()))
            />
            <label class="form__radio-label" for=radio_id>
                {label}
            </label>
        </div>
    }
}

/// Mutually exclusive group of radio buttons
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Name attribute shared by every radio in the group
    name: &'static str,
    /// Selected value
    selected: RwSignal<Option<String>>,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group" role="radiogroup">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">
                {options
                    .into_iter()
                    .map(|(value, text)| view! {
                        <Radio label=text value=value selected=selected name=name />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
