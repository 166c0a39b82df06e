//! Contact domain messages.

use iced::widget::text_editor;

/// Contact form field edits and the submission lifecycle.
#[derive(Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    /// Relay outcome: `Ok` carries optional confirmation wording,
    /// `Err` the user-facing failure reason.
    Completed(Result<Option<String>, String>),
    /// Delayed wipe after a successful send.
    Reset,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NameChanged(_) => "Contact::NameChanged",
            Self::EmailChanged(_) => "Contact::EmailChanged",
            Self::MessageEdited(_) => "Contact::MessageEdited",
            Self::Submit => "Contact::Submit",
            Self::Completed(_) => "Contact::Completed",
            Self::Reset => "Contact::Reset",
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed(outcome) => {
                write!(f, "Contact::Completed({outcome:?})")
            }
            other => write!(f, "{}", other.name()),
        }
    }
}
