use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::ResumeApi;
use crate::models::resume::Resume;
use crate::state::upload::{SelectedFile, UploadFlow};

/// Read a browser file into memory so the upload flow can hold it across a
/// failed attempt and resend without reselection.
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Could not read \"{}\".", file.name()))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[component]
pub fn UploadForm(#[prop(into)] on_success: Callback<Resume>) -> impl IntoView {
    let api = expect_context::<ResumeApi>();
    let flow = RwSignal::new(UploadFlow::new());

    let select = move |file: web_sys::File| {
        spawn_local(async move {
            let name = file.name();
            let content_type = file.type_();
            match read_file_bytes(&file).await {
                Ok(bytes) => flow.update(|f| {
                    f.select_file(SelectedFile {
                        name,
                        content_type,
                        bytes,
                    })
                }),
                Err(message) => flow.update(|f| f.selection_failed(message)),
            }
        });
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select(file);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            select(file);
        }
    };

    let start = move |_| {
        let Some(file) = flow.try_update(|f| f.begin_upload()).flatten() else {
            // No selection (the flow recorded the validation error) or an
            // upload is already in flight.
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let result = api.upload(&file).await;
            if let Err(err) = &result {
                tracing::warn!("resume upload failed: {err}");
            }
            if let Some(resume) = flow.try_update(|f| f.finish(result)).flatten() {
                on_success.run(resume);
            }
        });
    };

    view! {
        <div
            class="upload-form"
            on:dragover=|ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <h2>"Upload New Resume"</h2>
            <p class="drop-hint">"Drop a PDF here, or pick a file below."</p>
            <input type="file" accept="application/pdf" on:change=on_change/>
            {move || flow.with(|f| f.file_name().map(|name| view! {
                <p class="selected-file">{name.to_string()}</p>
            }))}
            <button
                class="button"
                on:click=start
                disabled=move || flow.with(|f| f.is_uploading() || f.file_name().is_none())
            >
                {move || if flow.with(|f| f.is_uploading()) { "Uploading..." } else { "Upload" }}
            </button>
            {move || flow.with(|f| f.error().map(|message| view! {
                <p class="error">{message.to_string()}</p>
            }))}
            {move || flow.with(|f| f.uploaded().cloned()).map(|resume| view! {
                <div class="upload-result">
                    <h3>"Upload successful"</h3>
                    <p><strong>"Name: "</strong>{resume.name.clone()}</p>
                    <p><strong>"Email: "</strong>{resume.email.clone()}</p>
                    <p><strong>"City: "</strong>{resume.city.clone()}</p>
                    <p><strong>"Occupation: "</strong>{resume.occupation.clone()}</p>
                    <p><strong>"Experience: "</strong>{format!("{} years", resume.exp_years)}</p>
                    <p><strong>"Status: "</strong>{resume.status.clone()}</p>
                </div>
            })}
        </div>
    }
}
