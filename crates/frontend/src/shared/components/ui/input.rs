use leptos::prelude::*;

/// Numeric input bound to a raw text signal.
///
/// The text is stored as typed; coercion and range checks happen on submit.
#[component]
pub fn NumberInput(
    /// HTML id of the `<input>`
    id: &'static str,
    /// Label text
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Raw input text
    value: RwSignal<String>,
    /// `min` attribute
    #[prop(optional, into)]
    min: Option<f64>,
    /// `max` attribute
    #[prop(optional, into)]
    max: Option<f64>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let min_attr = min.map(|v| v.to_string());
    let max_attr = max.map(|v| v.to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=id>
                    {l}
                </label>
            })}
            <input
                id=id
                class="form__input"
                type="number"
                min=min_attr
                max=max_attr
                required=true
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
