use super::state::{can_load, DisplayMode};
use super::view_model::IntegrationDataVm;
use crate::shared::icons::icon;
use crate::shared::json_viewer::summary_label;
use crate::shared::json_viewer::tree_view::JsonTreeView;
use crate::shared::json_viewer::widget::JsonViewer;
use contracts::enums::IntegrationType;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_load_integration_data::{Credentials, LoadIntegrationData};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

const PANEL_STYLE: &str = "padding: 16px; margin-top: 16px; max-height: 400px; overflow: auto; \
    background-color: #f8f8f8; font-family: monospace; font-size: 14px; border-radius: 8px; \
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);";

/// Loads data of an already connected integration and shows it.
///
/// The integration type and credentials belong to the parent; this widget
/// only forwards them to the backend. `None` credentials keep Load disabled.
#[component]
pub fn IntegrationDataForm(
    #[prop(into)] integration_type: Signal<IntegrationType>,
    #[prop(into)] credentials: Signal<Option<Credentials>>,
) -> impl IntoView {
    let vm = IntegrationDataVm::new();
    let has_data = vm.has_data();

    let on_load = move |_| {
        if let Some(credentials) = credentials.get_untracked() {
            vm.load_command(integration_type.get_untracked(), credentials);
        }
    };
    let load_disabled = Signal::derive(move || {
        let is_loading = vm.is_loading.get();
        credentials.with(|c| !can_load(is_loading, c.as_ref()))
    });
    let on_clear = move |_| vm.clear_command();

    view! {
        <div class="integration-data" style="display: flex; flex-direction: column; width: 100%;">
            <h2 class="section-title" style="margin-top: 16px;">{LoadIntegrationData::display_name()}</h2>

            {move || {
                vm.data
                    .with(|d| d.value().cloned())
                    .map(|value| view! { <DataPanel vm=vm integration_type=integration_type value=value /> })
            }}

            <div style="margin-top: 16px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_load
                    disabled=load_disabled
                >
                    {icon("database")}
                    {move || if vm.is_loading.get() { " Loading..." } else { " Load Data" }}
                </Button>
            </div>
            <div style="margin-top: 8px;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=on_clear
                    disabled=Signal::derive(move || !has_data())
                >
                    {icon("trash")}
                    " Clear Data"
                </Button>
            </div>

            <Show when=move || vm.is_loading.get()>
                <Flex gap=FlexGap::Small style="align-items: center; margin-top: 8px;">
                    <Spinner />
                    <span>"Loading integration data..."</span>
                </Flex>
            </Show>
        </div>
    }
}

#[component]
fn DataPanel(
    vm: IntegrationDataVm,
    integration_type: Signal<IntegrationType>,
    value: Value,
) -> impl IntoView {
    let summary = summary_label(&value);
    let title = move || format!("{} Data", integration_type.get().display_name());

    let body = move || match vm.display_mode.get() {
        DisplayMode::Tree => view! { <JsonTreeView value=value.clone() /> }.into_any(),
        DisplayMode::Raw => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => {
                let file_name = format!("{}_data.json", integration_type.get_untracked().code());
                view! {
                    <JsonViewer json_content=pretty title=file_name.clone() file_name=file_name />
                }
                .into_any()
            }
            Err(e) => view! {
                <div class="alert alert--error">{format!("Error displaying data: {}", e)}</div>
            }
            .into_any(),
        },
    };

    view! {
        <div class="integration-data__panel" style=PANEL_STYLE>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <span class="integration-data__title" style="font-weight: 600; color: var(--color-primary, #1976d2);">
                    {title}
                </span>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    {DisplayMode::all()
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=move || {
                                        if vm.display_mode.get() == mode {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Subtle
                                        }
                                    }
                                    on_click=move |_| vm.display_mode.set(mode)
                                >
                                    {icon(mode.icon_name())}
                                    {format!(" {}", mode.label())}
                                </Button>
                            }
                        })
                        .collect_view()}
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {summary}
                    </Badge>
                </Flex>
            </Flex>
            <div style="margin-top: 8px;">
                {body}
            </div>
        </div>
    }
}
