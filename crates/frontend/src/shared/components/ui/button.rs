use leptos::prelude::*;

/// Primary action button with a stable DOM id
#[component]
pub fn Button(
    /// HTML id of the `<button>`
    id: &'static str,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button content (label)
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            id=id
            type="button"
            class=move || format!("button button--primary {}", additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
