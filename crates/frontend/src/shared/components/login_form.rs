use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::shared::navigation::redirect_to;
use crate::shared::submit::{submit, SubmissionConfig};

/// Display metadata for one input, parallel to `SubmissionConfig::fields`.
#[derive(Debug, Clone, Copy)]
pub struct FieldView {
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    is_error: bool,
}

/// Credential form driven by a [`SubmissionConfig`].
///
/// Renders one input per configured field, runs the submission pipeline on
/// submit, shows the resulting notice inline, and navigates to the config's
/// success redirect on success. The submit button is disabled while a
/// request is in flight, so a slow server cannot collect duplicates.
#[component]
pub fn LoginForm(
    /// Page heading
    title: &'static str,
    /// Where the fields go and where success leads
    config: SubmissionConfig,
    /// One entry per `config.fields` item
    field_views: &'static [FieldView],
) -> impl IntoView {
    let values: Vec<RwSignal<String>> = config
        .fields
        .iter()
        .map(|_| RwSignal::new(String::new()))
        .collect();
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (in_flight, set_in_flight) = signal(false);

    let on_submit = {
        let values = values.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            // The button is disabled while a request is outstanding, but the
            // Enter key still fires submit events.
            if in_flight.get() {
                return;
            }

            let current: Vec<String> = values.iter().map(|v| v.get()).collect();
            set_notice.set(None);
            set_in_flight.set(true);

            spawn_local(async move {
                match submit(&config, &current).await {
                    Ok(message) => {
                        set_notice.set(Some(Notice {
                            text: message,
                            is_error: false,
                        }));
                        set_in_flight.set(false);
                        redirect_to(config.success_redirect);
                    }
                    Err(err) => {
                        set_notice.set(Some(Notice {
                            text: err.notice(),
                            is_error: true,
                        }));
                        set_in_flight.set(false);
                    }
                }
            });
        }
    };

    let inputs = config
        .fields
        .iter()
        .zip(field_views)
        .zip(values)
        .map(|((field, fv), value)| {
            view! {
                <Input
                    label=fv.label
                    id=field.input_id
                    value=value
                    on_input=Callback::new(move |text| value.set(text))
                    input_type=fv.input_type
                    placeholder=fv.placeholder
                    disabled=in_flight
                />
            }
        })
        .collect_view();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>{title}</h2>

                <Show when=move || notice.get().is_some()>
                    <div class=move || {
                        if notice.get().map(|n| n.is_error).unwrap_or(false) {
                            "error-message"
                        } else {
                            "status-message"
                        }
                    }>
                        {move || notice.get().map(|n| n.text).unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {inputs}

                    <Button button_type="submit" disabled=in_flight>
                        {move || if in_flight.get() { "Logging in..." } else { "Login" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
