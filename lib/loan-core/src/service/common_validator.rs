use super::common_dto::DocumentDTO;

pub(crate) fn require_text(missing: &mut Vec<&'static str>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(field);
    }
}

pub(crate) fn missing_document(document: Option<&DocumentDTO>) -> bool {
    document.is_none_or(|document| document.content.is_empty())
}
