use gloo::file::{Blob, ObjectUrl};
use shared::EmployeeId;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

pub const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DownloadError {
    #[error("Browser document is unavailable")]
    NoDocument,
    #[error("Could not create download link: {0}")]
    Link(String),
}

/// A generated employee summary held in memory until it is saved
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SummaryDocument {
    pub fn for_employee(id: &EmployeeId, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format!("employee_{}.pdf", id),
            bytes,
        }
    }

    /// Hand the bytes to the browser as a file download.
    /// The object URL is revoked as soon as the click has been dispatched.
    pub fn save(self) -> Result<(), DownloadError> {
        let blob = Blob::new_with_options(self.bytes.as_slice(), Some(PDF_MIME_TYPE));
        let url = ObjectUrl::from(blob);

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(DownloadError::NoDocument)?;
        let anchor = document
            .create_element("a")
            .map_err(|e| DownloadError::Link(format!("{:?}", e)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| DownloadError::Link("element is not an anchor".to_string()))?;

        anchor.set_href(&url);
        anchor.set_download(&self.file_name);
        anchor.click();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_named_by_employee_id() {
        let id = EmployeeId::parse("1712345678901").unwrap();
        let document = SummaryDocument::for_employee(&id, vec![1, 2, 3]);
        assert_eq!(document.file_name, "employee_1712345678901.pdf");
        assert_eq!(document.bytes, vec![1, 2, 3]);
    }
}
