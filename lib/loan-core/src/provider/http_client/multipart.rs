//! `multipart/form-data` request parts, encoded by the [`HttpClient`](super::HttpClient)
//! implementation.
//!
//! Part names are sent exactly as given, the remote service matches them case-sensitively.

use mime::Mime;

#[derive(Clone, Debug, Default)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

#[derive(Clone, Debug)]
pub struct Part {
    pub name: String,
    pub file: Option<FilePart>,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: Mime,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(Part {
            name: name.to_owned(),
            file: None,
            data: value.into().into_bytes(),
        });
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &Mime, data: Vec<u8>) -> Self {
        self.parts.push(Part {
            name: name.to_owned(),
            file: Some(FilePart {
                file_name: file_name.to_owned(),
                content_type: content_type.clone(),
            }),
            data,
        });
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|part| part.name.as_str())
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Total size of the part contents, without encoding overhead
    pub fn data_len(&self) -> usize {
        self.parts.iter().map(|part| part.data.len()).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_field_names_keep_casing_and_order() {
        let form = MultipartForm::new()
            .text("FirstName", "a")
            .text("LastName", "b")
            .text("fullName", "c");

        assert_eq!(
            form.field_names().collect::<Vec<_>>(),
            vec!["FirstName", "LastName", "fullName"]
        );
    }

    #[test]
    fn test_file_part_keeps_name_and_media_type() {
        let form = MultipartForm::new()
            .text("IdNumber", "X1")
            .file("IdDocument", "id.png", &mime::IMAGE_PNG, vec![1, 2, 3]);

        assert_eq!(form.data_len(), 5);
        let parts = form.into_parts();
        assert!(parts[0].file.is_none());
        let file = parts[1].file.as_ref().unwrap();
        assert_eq!(file.file_name, "id.png");
        assert_eq!(file.content_type, mime::IMAGE_PNG);
        assert_eq!(parts[1].data, vec![1, 2, 3]);
    }
}
