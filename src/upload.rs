//! Markdown Upload
//!
//! Reads the file chosen in an `<input type="file">` as UTF-8 text.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// A loaded upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDoc {
    pub file_name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    NoFile,
    Read(String),
    NotText,
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::NoFile => write!(f, "No file selected"),
            UploadError::Read(msg) => write!(f, "Read failed: {}", msg),
            UploadError::NotText => write!(f, "File content is not text"),
        }
    }
}

impl std::error::Error for UploadError {}

/// First file of a change event on a file input
pub fn selected_file(ev: &web_sys::Event) -> Result<web_sys::File, UploadError> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
        .ok_or(UploadError::NoFile)
}

/// Read a file's full text
pub async fn read_text(file: web_sys::File) -> Result<UploadedDoc, UploadError> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| UploadError::Read(format!("{:?}", e)))?;
    let text = value.as_string().ok_or(UploadError::NotText)?;
    Ok(UploadedDoc { file_name: file.name(), text })
}
