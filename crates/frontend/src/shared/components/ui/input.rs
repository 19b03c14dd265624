use leptos::prelude::*;

/// Labelled input for the login forms.
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the input element (also binds the label)
    #[prop(into)]
    id: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Input type: "text" (default), "password", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_id = StoredValue::new(id);
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form-group">
            <label for=move || input_id.get_value()>{label}</label>
            <input
                id=move || input_id.get_value()
                type=input_t
                value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
