//! One-shot Notice

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Destructive,
}

/// A transient message shown once on the auth landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}
