// ============================================================================
// DOWNLOAD - hand bytes to the browser as a file
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::ApiError;

pub fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, ApiError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Ok(Blob::new_with_u8_array_sequence_and_options(&parts, &options)?)
}

/// Triggers a download of `bytes` named `file_name`. The object URL is
/// revoked once the click has been dispatched.
pub fn save_bytes(bytes: &[u8], file_name: &str, mime_type: &str) -> Result<(), ApiError> {
    let blob = bytes_to_blob(bytes, mime_type)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let clicked = click_link(&url, file_name);

    Timeout::new(0, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("⚠️ Could not revoke object URL: {:?}", e);
        }
    })
    .forget();

    clicked?;
    log::info!("💾 Download started: {} ({} bytes)", file_name, bytes.len());
    Ok(())
}

fn click_link(href: &str, file_name: &str) -> Result<(), ApiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("no body".to_string()))?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ApiError::Browser("<a> is not an anchor element".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
