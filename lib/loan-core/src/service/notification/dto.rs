use crate::model::notification::Notification;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NotificationListDTO {
    pub values: Vec<Notification>,
    pub unread_count: usize,
}

impl From<Vec<Notification>> for NotificationListDTO {
    fn from(values: Vec<Notification>) -> Self {
        let unread_count = values.iter().filter(|item| !item.read).count();
        Self {
            values,
            unread_count,
        }
    }
}
