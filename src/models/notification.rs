/// Toast shown in the top-right corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }

    pub fn class(&self) -> &'static str {
        match self.level {
            NotificationLevel::Success => "toast toast-success",
            NotificationLevel::Error => "toast toast-error",
        }
    }
}
