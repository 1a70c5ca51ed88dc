use payloads::{CSV_MIME, UploadOutcome, is_csv_file};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

use super::{Modal, Spinner, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;

/// A picked file, already read into memory.
#[derive(Clone, PartialEq)]
struct PendingCsv {
    name: String,
    data: Vec<u8>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_close: Callback<()>,
}

fn outcome_message(outcome: UploadOutcome) -> &'static str {
    match outcome {
        UploadOutcome::Stored => "File uploaded.",
        UploadOutcome::Processing => "File received. The import continues in the background.",
    }
}

/// Bulk farmer import from a CSV export. The dialog closes once the
/// backend has answered, whatever the outcome.
#[function_component]
pub fn CsvUploadModal(props: &Props) -> Html {
    let pending = use_state(|| None::<PendingCsv>);
    let is_reading = use_state(|| false);
    let is_uploading = use_state(|| false);
    let toast = use_toast();

    let on_file_select = {
        let pending = pending.clone();
        let is_reading = is_reading.clone();
        let toast = toast.clone();

        Callback::from(move |e: Event| {
            pending.set(None);

            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let name = file.name();
            if !is_csv_file(&file.type_(), &name) {
                toast.warning("Only .csv files can be uploaded.");
                input.set_value("");
                return;
            }

            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(e) => {
                    tracing::error!(?e, "no file reader");
                    toast.error("Could not read the file.");
                    return;
                }
            };

            let onload = {
                let reader = reader.clone();
                let pending = pending.clone();
                let is_reading = is_reading.clone();
                let toast = toast.clone();
                Closure::once(move |_: Event| {
                    is_reading.set(false);
                    match reader.result() {
                        Ok(buffer) => {
                            let data = js_sys::Uint8Array::new(&buffer).to_vec();
                            tracing::debug!(file = %name, bytes = data.len(), "csv read");
                            pending.set(Some(PendingCsv { name, data }));
                        }
                        Err(e) => {
                            tracing::error!(?e, "reading csv failed");
                            toast.error("Could not read the file.");
                        }
                    }
                })
            };

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            if let Err(e) = reader.read_as_array_buffer(&file) {
                tracing::error!(?e, "reading csv failed");
                toast.error("Could not read the file.");
                return;
            }
            is_reading.set(true);
            onload.forget();
        })
    };

    let on_upload = {
        let pending = pending.clone();
        let is_uploading = is_uploading.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(csv) = (*pending).clone() else {
                return;
            };

            let is_uploading = is_uploading.clone();
            let toast = toast.clone();
            let on_close = on_close.clone();

            yew::platform::spawn_local(async move {
                is_uploading.set(true);
                let result = get_api_client().upload_csv(&csv.name, csv.data).await;
                is_uploading.set(false);
                match result {
                    Ok(outcome) => {
                        tracing::info!(file = %csv.name, ?outcome, "csv uploaded");
                        toast.success(outcome_message(outcome));
                    }
                    Err(e) => toast.client_error("Failed to upload file", &e),
                }
                on_close.emit(());
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let busy = *is_reading || *is_uploading;

    html! {
        <Modal title="Upload data" on_close={props.on_close.clone()} close_on_backdrop={!*is_uploading}>
            <div class="space-y-4">
                <div>
                    <label class={styles::LABEL}>{"Select a file"}</label>
                    <input
                        type="file"
                        accept={format!(".csv,{CSV_MIME}")}
                        onchange={on_file_select}
                        disabled={*is_uploading}
                        class={styles::INPUT}
                    />
                </div>
                if *is_uploading {
                    <Spinner label="Uploading..." />
                } else if let Some(csv) = &*pending {
                    <p class={styles::MUTED}>
                        {format!("{} ({} bytes)", csv.name, csv.data.len())}
                    </p>
                }
                <div class="flex justify-end gap-3">
                    <button type="button" onclick={on_cancel} class={styles::BUTTON_SECONDARY}>
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        onclick={on_upload}
                        disabled={busy || pending.is_none()}
                        class={styles::BUTTON_PRIMARY}
                    >
                        {"Send"}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_imports_say_so() {
        assert_eq!(outcome_message(UploadOutcome::Stored), "File uploaded.");
        assert!(outcome_message(UploadOutcome::Processing).contains("background"));
    }
}
