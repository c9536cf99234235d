//! Reading a chosen picture file into a data URL.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Build a `data:` URL for `bytes` with the given MIME type.
///
/// An empty type falls back to `application/octet-stream`, as browsers do.
#[must_use]
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() { "application/octet-stream" } else { mime.trim() };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read `file` and encode it as a data URL.
///
/// # Errors
///
/// Returns the browser's error text when the file cannot be read.
#[cfg(feature = "hydrate")]
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(to_data_url(&file.type_(), &bytes))
}
