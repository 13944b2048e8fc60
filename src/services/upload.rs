// ============================================================================
// MULTIPART UPLOAD - XMLHttpRequest, so upload progress can be observed
// ============================================================================

use js_sys::{Function, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, ProgressEvent, XmlHttpRequest};

use crate::error::ApiError;
use crate::models::{FileSource, UploadFile};
use crate::services::download::bytes_to_blob;

/// Form field the upload endpoint reads the spreadsheet from.
const FILE_FIELD: &str = "file";

fn form_data(file: &UploadFile) -> Result<FormData, ApiError> {
    let form = FormData::new()?;
    match &file.source {
        FileSource::Browser(browser_file) => {
            form.append_with_blob_and_filename(FILE_FIELD, browser_file, &file.name)?;
        }
        FileSource::Bytes(bytes) => {
            let blob = bytes_to_blob(bytes, &file.mime_type)?;
            form.append_with_blob_and_filename(FILE_FIELD, &blob, &file.name)?;
        }
    }
    Ok(form)
}

fn percent(loaded: f64, total: f64) -> Option<u32> {
    if total > 0.0 {
        Some(((loaded * 100.0) / total).round() as u32)
    } else {
        None
    }
}

/// POSTs `file` as `multipart/form-data` and resolves with the HTTP status.
/// Only a transport failure is an error.
pub async fn post_multipart(url: &str, bearer: &str, file: &UploadFile) -> Result<u16, ApiError> {
    let form = form_data(file)?;
    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async("POST", url, true)?;
    xhr.set_request_header("Authorization", bearer)?;

    let on_progress = Closure::<dyn FnMut(ProgressEvent)>::new(|event: ProgressEvent| {
        if event.length_computable() {
            if let Some(done) = percent(event.loaded(), event.total()) {
                log::info!("📤 Upload progress: {}%", done);
            }
        }
    });
    xhr.upload()?.set_onprogress(Some(on_progress.as_ref().unchecked_ref()));

    // Handlers must outlive the request; they are dropped after the await.
    let mut handlers: Option<(Closure<dyn FnMut()>, Closure<dyn FnMut()>)> = None;
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let xhr_loaded = xhr.clone();
        let on_load = Closure::<dyn FnMut()>::new(move || {
            let status = xhr_loaded.status().unwrap_or(0);
            let _ = resolve.call1(&JsValue::NULL, &JsValue::from(status));
        });
        let on_error = Closure::<dyn FnMut()>::new(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("upload request failed"));
        });
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        xhr.set_onabort(Some(on_error.as_ref().unchecked_ref()));
        handlers = Some((on_load, on_error));
    });

    xhr.send_with_opt_form_data(Some(&form))?;
    let result = JsFuture::from(promise).await;

    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);
    if let Ok(upload) = xhr.upload() {
        upload.set_onprogress(None);
    }
    drop(handlers);
    drop(on_progress);

    let status = result.map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    let status = status.as_f64().unwrap_or(0.0) as u16;
    log::info!("📤 Upload finished with status {}", status);
    Ok(status)
}
