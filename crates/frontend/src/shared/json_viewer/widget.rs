use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Plain preformatted JSON with copy and download actions
#[component]
pub fn JsonViewer(
    /// Pretty-printed JSON text
    json_content: String,
    /// Header title
    #[prop(optional)]
    title: Option<String>,
    /// Name of the downloaded file
    #[prop(optional)]
    file_name: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let json_content_for_copy = json_content.clone();
    let json_content_for_download = json_content.clone();
    let file_name = file_name.unwrap_or_else(|| "data.json".to_string());
    let char_count = json_content.chars().count();
    let line_count = json_content.lines().count();

    let handle_copy = move |_| {
        copy_to_clipboard_with_callback(&json_content_for_copy, move || {
            set_copied.set(true);
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                set_copied.set(false);
            });
        });
    };

    let handle_download = move |_| {
        if let Err(e) = download_json(&json_content_for_download, &file_name) {
            log::error!("JSON download failed: {}", e);
        }
    };

    view! {
        <div class="json-viewer">
            <div class="modal-header modal-header--compact">
                <h3 class="modal-title">
                    {title.unwrap_or_else(|| "JSON".to_string())}
                </h3>
                <div class="modal-header-actions">
                    <button
                        class="button button--secondary"
                        on:click=handle_copy
                        title="Copy to clipboard"
                    >
                        {move || if copied.get() {
                            view! {
                                <>
                                    {icon("check")}
                                    {"Copied!"}
                                </>
                            }.into_any()
                        } else {
                            view! {
                                <>
                                    {icon("copy")}
                                    {"Copy"}
                                </>
                            }.into_any()
                        }}
                    </button>
                    <button
                        class="button button--success"
                        on:click=handle_download
                        title="Download as file"
                    >
                        {icon("download")}
                        {"Download"}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body">
                <pre class="json-viewer__content">
                    {json_content}
                </pre>
            </div>

            <div class="json-viewer__footer">
                {"Size: "}
                <strong>{format!("{} chars", char_count)}</strong>
                {" | "}
                {"Lines: "}
                <strong>{line_count}</strong>
            </div>
        </div>
    }
}

/// Offer `content` to the browser as a `.json` file download
fn download_json(content: &str, file_name: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));

    let blob_property_bag = web_sys::BlobPropertyBag::new();
    blob_property_bag.set_type("application/json");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let link = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Not an anchor element")?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    web_sys::Url::revoke_object_url(&url).ok();
    Ok(())
}
