/// Picked file as handed over by the platform
#[derive(Clone, Debug)]
pub struct DocumentDTO {
    pub content: Vec<u8>,
    pub media_type: String,
    pub file_name: String,
}
