//! Client-side image encoding.
//!
//! A selected image file is read into a transport-safe base64 string before
//! submission; raw bytes never cross the wire. The browser's data-URL reader
//! does the encoding, we strip the `data:<mime>;base64,` prefix.

use web_sys::HtmlInputElement;

/// First selected file of a file input, if any.
pub fn selected_file(input: &HtmlInputElement) -> Option<web_sys::File> {
    input.files()?.get(0)
}

/// Read a file into its base64 text encoding.
pub async fn read_as_base64(file: web_sys::File) -> Result<String, String> {
    let blob = gloo_file::Blob::from(file);
    let data_url = gloo_file::futures::read_as_data_url(&blob)
        .await
        .map_err(|e| e.to_string())?;
    base64_of_data_url(&data_url).ok_or_else(|| "unrecognized data URL".to_string())
}

fn base64_of_data_url(data_url: &str) -> Option<String> {
    data_url.split_once(',').map(|(_, b64)| b64.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_prefix_is_stripped() {
        assert_eq!(
            base64_of_data_url("data:image/png;base64,iVBORw0KGgo=").as_deref(),
            Some("iVBORw0KGgo=")
        );
        assert!(base64_of_data_url("not a data url").is_none());
    }
}
