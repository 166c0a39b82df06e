//! Message routing between the application domains.

use iced::Task;

use crate::domains::contact;
use crate::domains::gallery;
use crate::domains::rooms;
use crate::domains::ui;
use crate::domains::ui::layout::SectionId;
use crate::domains::ui::toast::ToastLevel;
use crate::domains::ui::ViewId;

/// Result of a domain update that includes both a task and events to emit.
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages).
    pub task: Task<DomainMessage>,
    /// Events to broadcast to the other domains immediately.
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    /// Create an empty result (no task, no events).
    pub fn none() -> Self {
        Self {
            task: Task::none(),
            events: Vec::new(),
        }
    }

    /// Create a result with just a task.
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with just events.
    pub fn events(events: Vec<CrossDomainEvent>) -> Self {
        Self {
            task: Task::none(),
            events,
        }
    }

    /// Create a result with a task and events.
    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }

    /// Add an event to this result.
    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// The main domain message router.
#[derive(Clone)]
pub enum DomainMessage {
    /// Page chrome, navigation, reveal animations, toasts
    Ui(ui::Message),

    /// Room showcase, listing cards, booking dialog
    Rooms(rooms::Message),

    /// Contact form and info card
    Contact(contact::Message),

    /// Photo gallery and lightbox
    Gallery(gallery::Message),

    /// Cross-domain coordination messages
    NoOp,
    Escape,
}

// Automatic routing from domain messages
impl From<ui::Message> for DomainMessage {
    fn from(msg: ui::Message) -> Self {
        DomainMessage::Ui(msg)
    }
}

impl From<rooms::Message> for DomainMessage {
    fn from(msg: rooms::Message) -> Self {
        DomainMessage::Rooms(msg)
    }
}

impl From<contact::Message> for DomainMessage {
    fn from(msg: contact::Message) -> Self {
        DomainMessage::Contact(msg)
    }
}

impl From<gallery::Message> for DomainMessage {
    fn from(msg: gallery::Message) -> Self {
        DomainMessage::Gallery(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ui(msg) => msg.name(),
            Self::Rooms(msg) => msg.name(),
            Self::Contact(msg) => msg.name(),
            Self::Gallery(msg) => msg.name(),
            Self::NoOp => "DomainMessage::NoOp",
            Self::Escape => "DomainMessage::Escape",
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ui(msg) => write!(f, "DomainMessage::Ui({msg:?})"),
            Self::Rooms(msg) => write!(f, "DomainMessage::Rooms({msg:?})"),
            Self::Contact(msg) => {
                write!(f, "DomainMessage::Contact({msg:?})")
            }
            Self::Gallery(msg) => {
                write!(f, "DomainMessage::Gallery({msg:?})")
            }
            Self::NoOp => write!(f, "DomainMessage::NoOp"),
            Self::Escape => write!(f, "DomainMessage::Escape"),
        }
    }
}

/// Cross-domain event bus for coordination.
///
/// Events are broadcast to every domain after the originating update;
/// domains ignore what they do not care about.
#[derive(Clone, Debug)]
pub enum CrossDomainEvent {
    /// Show a transient notification in the toast overlay.
    Notify(ToastLevel, String),

    /// Smooth-scroll the landing page to a section anchor.
    ScrollToSection(SectionId),

    /// The top-level view changed (landing page or gallery).
    ViewOpened(ViewId),
}
