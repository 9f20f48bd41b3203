//! Auth Notice Use Case
//!
//! Surfaces the one-shot error stored in the session on the auth landing page.
//! Reading the message and removing it from the record happen together, so a
//! re-render without a new write shows nothing.

use crate::domain::entity::session_record::SessionRecord;
use crate::domain::value_object::notice::Notice;

/// Auth notice output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthNoticeOutput {
    /// Notice to display on this render, if any
    pub notice: Option<Notice>,
    /// Record to commit on this response when the message was consumed
    pub commit: Option<SessionRecord>,
}

/// Auth notice use case
pub struct AuthNoticeUseCase;

impl AuthNoticeUseCase {
    pub fn execute(mut session: SessionRecord) -> AuthNoticeOutput {
        match session.take_pending_error() {
            Some(message) => {
                // An empty message is consumed but not shown
                let notice = (!message.trim().is_empty()).then(|| Notice::error(message));
                AuthNoticeOutput {
                    notice,
                    commit: Some(session),
                }
            }
            None => AuthNoticeOutput {
                notice: None,
                commit: None,
            },
        }
    }
}
