use base64::{Engine as _, engine::general_purpose};
use payloads::{MAX_PHOTO_SIZE, requests, responses};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

use crate::get_api_client;

#[derive(Clone, PartialEq)]
struct PendingUpload {
    data: Vec<u8>,
    filename: String,
    preview_url: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Called with the stored photo once the upload succeeds.
    pub on_uploaded: Callback<responses::Photo>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Photo upload widget: file selection, size validation, preview, and the
/// actual API upload with its own in-flight flag.
#[function_component]
pub fn PhotoUpload(props: &Props) -> Html {
    let file_input_ref = use_node_ref();
    let pending_upload = use_state(|| None::<PendingUpload>);
    let is_uploading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // Handle file selection
    let on_file_select = {
        let pending_upload = pending_upload.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: Event| {
            let pending_upload = pending_upload.clone();
            let error_message = error_message.clone();

            let input: HtmlInputElement = e.target_unchecked_into();
            let files = match input.files() {
                Some(f) => f,
                None => return,
            };

            let file = match files.get(0) {
                Some(f) => f,
                None => return,
            };

            // Validate file size
            let file_size = file.size() as usize;
            if file_size > MAX_PHOTO_SIZE {
                error_message.set(Some(format!(
                    "File is too large ({:.1}MB). Maximum size is 1MB.",
                    file_size as f64 / 1_048_576.0
                )));
                return;
            }

            let filename = file.name();

            // Read file as array buffer
            let reader = FileReader::new().unwrap();
            let reader_clone = reader.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let result = reader_clone.result().unwrap();
                let array = js_sys::Uint8Array::new(&result);
                let data: Vec<u8> = array.to_vec();

                let base64_data = general_purpose::STANDARD.encode(&data);
                let preview_url =
                    format!("data:image/jpeg;base64,{}", base64_data);

                pending_upload.set(Some(PendingUpload {
                    data,
                    filename: filename.clone(),
                    preview_url,
                }));
                error_message.set(None);
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.read_as_array_buffer(&file).unwrap();
            onload.forget();
        })
    };

    // Handle upload
    let on_upload = {
        let pending_upload = pending_upload.clone();
        let is_uploading = is_uploading.clone();
        let error_message = error_message.clone();
        let on_uploaded = props.on_uploaded.clone();
        let file_input_ref = file_input_ref.clone();

        Callback::from(move |_| {
            let upload = match (*pending_upload).clone() {
                Some(u) => u,
                None => return,
            };

            let pending_upload = pending_upload.clone();
            let is_uploading = is_uploading.clone();
            let error_message = error_message.clone();
            let on_uploaded = on_uploaded.clone();
            let file_input_ref = file_input_ref.clone();

            yew::platform::spawn_local(async move {
                is_uploading.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                let request = requests::UploadPhoto {
                    filename: upload.filename,
                    image_data: upload.data,
                };

                match api_client.upload_photo(&request).await {
                    Ok(photo) => {
                        pending_upload.set(None);
                        // Clear file input
                        if let Some(input) =
                            file_input_ref.cast::<HtmlInputElement>()
                        {
                            input.set_value("");
                        }
                        on_uploaded.emit(photo);
                    }
                    Err(e) => {
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_uploading.set(false);
            });
        })
    };

    // Handle cancel
    let on_cancel = {
        let pending_upload = pending_upload.clone();
        let error_message = error_message.clone();
        let file_input_ref = file_input_ref.clone();

        Callback::from(move |_| {
            pending_upload.set(None);
            error_message.set(None);
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    // Trigger file input
    let on_select_file = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let disabled = props.disabled || *is_uploading;

    html! {
        <div class="space-y-3">
            // Hidden file input
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                onchange={on_file_select}
                class="hidden"
                disabled={disabled}
            />

            // Error message
            {if let Some(error) = &*error_message {
                html! {
                    <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border
                                border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }
            } else {
                html! {}
            }}

            {if let Some(upload) = &*pending_upload {
                // Show pending upload preview
                html! {
                    <div class="flex items-start gap-4">
                        <div class="w-32 h-20 rounded-md overflow-hidden
                                    bg-neutral-100 dark:bg-neutral-700 flex-shrink-0">
                            <img
                                src={upload.preview_url.clone()}
                                alt="Preview"
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div class="flex-1 min-w-0 space-y-2">
                            <p class="text-sm text-neutral-700 dark:text-neutral-300 truncate">
                                {&upload.filename}
                            </p>
                            <div class="flex gap-2">
                                <button
                                    type="button"
                                    onclick={on_upload}
                                    disabled={disabled}
                                    class="px-3 py-1.5 text-sm font-medium text-white
                                           bg-neutral-900 hover:bg-neutral-800
                                           dark:bg-neutral-100 dark:text-neutral-900
                                           dark:hover:bg-neutral-200 rounded-md
                                           disabled:opacity-50"
                                >
                                    {if *is_uploading {
                                        "Uploading..."
                                    } else {
                                        "Upload"
                                    }}
                                </button>
                                <button
                                    type="button"
                                    onclick={on_cancel}
                                    disabled={*is_uploading}
                                    class="px-3 py-2 text-sm font-medium rounded
                                           text-neutral-600 dark:text-neutral-400
                                           hover:text-neutral-800
                                           dark:hover:text-neutral-200
                                           hover:bg-neutral-100
                                           dark:hover:bg-neutral-700"
                                >
                                    {"Cancel"}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                // Show upload button
                html! {
                    <button
                        type="button"
                        onclick={on_select_file}
                        disabled={disabled}
                        class="w-full px-4 py-4 border-2 border-dashed
                               border-neutral-300 dark:border-neutral-600
                               rounded-lg text-center hover:border-neutral-400
                               dark:hover:border-neutral-500 transition-colors
                               cursor-pointer disabled:opacity-50"
                    >
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {"Click to select a photo"}
                        </p>
                        <p class="text-xs text-neutral-500 mt-1">
                            {"Maximum file size: 1MB"}
                        </p>
                    </button>
                }
            }}
        </div>
    }
}
