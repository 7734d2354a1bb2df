use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub subject: String,
    pub message: String,
    pub created_at: Option<OffsetDateTime>,
    pub read: bool,
}
