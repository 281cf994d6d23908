use std::fmt;
use std::time::Duration;

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Info => "Informação",
            NotificationKind::Success => "Sucesso",
            NotificationKind::Warning => "Atenção",
            NotificationKind::Error => "Erro",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// A transient user-visible message as handed to a `Notifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
}
