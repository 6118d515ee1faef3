//! Direct-message drafts composed before poking a friend.

/// Quick messages offered as one-tap pills.
pub const QUICK_MESSAGES: [&str; 3] = [
    "Hey! What's up? 👋",
    "Want to hang out? 🎉",
    "Miss you! 💕",
];

/// A message being composed for one recipient.
///
/// A selected pill takes precedence over typed text. Selecting a pill clears
/// the typed text; selecting the same pill again deselects it.
///
/// # Examples
/// ```
/// use notigasm_client::domain::{MessageDraft, QUICK_MESSAGES};
///
/// let mut draft = MessageDraft::default();
/// draft.set_text("see you at 8");
/// assert_eq!(draft.resolve(), Some("see you at 8"));
///
/// draft.toggle_pill(QUICK_MESSAGES[0]);
/// assert_eq!(draft.resolve(), Some(QUICK_MESSAGES[0]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    text: String,
    selected_pill: Option<String>,
}

impl MessageDraft {
    /// Start a draft from typed text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected_pill: None,
        }
    }

    /// Replace the typed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Select `pill`, or deselect it when it is already selected.
    pub fn toggle_pill(&mut self, pill: &str) {
        if self.selected_pill.as_deref() == Some(pill) {
            self.selected_pill = None;
        } else {
            self.selected_pill = Some(pill.to_owned());
        }
        self.text.clear();
    }

    /// Currently selected pill.
    pub fn selected_pill(&self) -> Option<&str> {
        self.selected_pill.as_deref()
    }

    /// Text that would be sent, or `None` when the draft is blank.
    pub fn resolve(&self) -> Option<&str> {
        let message = self.selected_pill.as_deref().unwrap_or(self.text.as_str());
        (!message.trim().is_empty()).then_some(message)
    }
}
