use crate::usecases::u508_load_integration_data::IntegrationDataForm;
use contracts::enums::IntegrationType;
use contracts::usecases::u508_load_integration_data::Credentials;
use leptos::prelude::*;

/// Host page standing in for the parent form: picks the integration and
/// holds its credentials, then hands both to the data widget.
#[component]
pub fn App() -> impl IntoView {
    let integration_type = RwSignal::new(IntegrationType::Notion);
    let credentials = RwSignal::new(Some(Credentials::default()));
    let (credentials_text, set_credentials_text) = signal("{}".to_string());
    let (credentials_error, set_credentials_error) = signal(None::<String>);

    let on_integration_change = move |ev: leptos::ev::Event| {
        let label = event_target_value(&ev);
        match IntegrationType::from_label(&label) {
            Some(t) => integration_type.set(t),
            None => log::warn!("Unknown integration type: {}", label),
        }
    };

    // Невалидный JSON сбрасывает credentials, чтобы не отправить устаревшие
    let on_credentials_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        match Credentials::from_json_str(&text) {
            Ok(parsed) => {
                credentials.set(Some(parsed));
                set_credentials_error.set(None);
            }
            Err(e) => {
                credentials.set(None);
                set_credentials_error.set(Some(e.to_string()));
            }
        }
        set_credentials_text.set(text);
    };

    view! {
        <div class="page" style="max-width: 960px; margin: 0 auto; padding: 24px;">
            <div class="form__group">
                <label class="form__label" for="integration-type">"Integration"</label>
                <select id="integration-type" class="form__select" on:change=on_integration_change>
                    {IntegrationType::all()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <option
                                    value=t.display_name()
                                    selected=move || integration_type.get() == t
                                >
                                    {t.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form__group">
                <label class="form__label" for="integration-credentials">"Credentials (JSON)"</label>
                <textarea
                    id="integration-credentials"
                    class="form__textarea"
                    rows=4
                    prop:value=move || credentials_text.get()
                    on:input=on_credentials_input
                ></textarea>
                {move || credentials_error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}
            </div>

            <IntegrationDataForm integration_type=integration_type credentials=credentials />
        </div>
    }
}
