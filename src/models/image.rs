//! In-memory representation of an uploaded image

use std::fmt;

/// Bytes and metadata of an image file lifted out of a multipart request.
///
/// Carried by value from the handler into the service layer, which decides
/// whether to persist it. Not a database model.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedImage {
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

// Uploads can be megabytes; keep the raw bytes out of log output.
impl fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_omits_raw_bytes() {
        let image = UploadedImage {
            file_name: Some("front.jpg".to_string()),
            content_type: Some("image/jpeg".to_string()),
            data: vec![0u8; 4096],
        };

        let rendered = format!("{:?}", image);
        assert!(rendered.contains("front.jpg"));
        assert!(rendered.contains("size_bytes: 4096"));
        assert!(!rendered.contains("[0,"));
    }
}
