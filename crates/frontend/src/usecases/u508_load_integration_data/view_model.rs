use super::api;
use super::state::{DisplayMode, LoadedData};
use contracts::enums::IntegrationType;
use contracts::usecases::u508_load_integration_data::Credentials;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the integration data widget
#[derive(Clone, Copy)]
pub struct IntegrationDataVm {
    pub data: RwSignal<LoadedData>,
    pub is_loading: RwSignal<bool>,
    pub display_mode: RwSignal<DisplayMode>,
}

impl IntegrationDataVm {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(LoadedData::default()),
            is_loading: RwSignal::new(false),
            display_mode: RwSignal::new(DisplayMode::default()),
        }
    }

    pub fn has_data(&self) -> impl Fn() -> bool + Copy + 'static {
        let data = self.data;
        move || data.with(LoadedData::is_loaded)
    }

    /// Fetch the integration data and store it.
    ///
    /// A failure is reported with a blocking alert and leaves the currently
    /// shown data in place. In-flight requests are not cancelled: whichever
    /// response arrives last decides the state.
    pub fn load_command(&self, integration: IntegrationType, credentials: Credentials) {
        let data = self.data;
        let is_loading = self.is_loading;
        is_loading.set(true);

        spawn_local(async move {
            let result = api::load(integration, &credentials).await;
            let mut outcome = Ok(());
            data.update(|d| outcome = d.apply(result));

            match outcome {
                Ok(()) => log::debug!("{} data loaded", integration),
                Err(e) => {
                    log::error!("Loading {} data failed: {}", integration, e);
                    show_alert(&e.alert_message(integration));
                }
            }
            is_loading.set(false);
        });
    }

    pub fn clear_command(&self) {
        self.data.update(LoadedData::clear);
        log::debug!("Integration data cleared");
    }
}

impl Default for IntegrationDataVm {
    fn default() -> Self {
        Self::new()
    }
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
