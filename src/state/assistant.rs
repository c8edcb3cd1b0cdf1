//! State and canned answers for the floating assistant widget.
//!
//! DESIGN
//! ======
//! There is no model behind the assistant. `compose_reply` answers from the
//! static content tables and the widget delivers the answer after a fixed
//! delay so the conversation feels like a network round trip.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use std::fmt::Write as _;

use crate::content::{about, characters, stories};

pub const ASSISTANT_NAME: &str = "Assistant Mr. Effort";

const GREETING: &str = "Hi! I'm **Assistant Mr. Effort**. Ask me about the stories, the characters, \
    the universe, or the author.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantMessage {
    pub id: String,
    pub role: Role,
    /// Markdown for assistant messages, plain text for user messages.
    pub content: String,
}

impl AssistantMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    #[error("Type a question first.")]
    EmptyPrompt,
    #[error("Assistant Mr. Effort is still answering.")]
    Busy,
}

#[derive(Clone, Debug)]
pub struct AssistantState {
    pub open: bool,
    pub messages: Vec<AssistantMessage>,
    /// A reply is on its way.
    pub pending: bool,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self { open: false, messages: vec![AssistantMessage::new(Role::Assistant, GREETING)], pending: false }
    }
}

impl AssistantState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Record the visitor's question and mark a reply as pending.
    ///
    /// # Errors
    ///
    /// [`AssistantError::EmptyPrompt`] for blank input, [`AssistantError::Busy`]
    /// while a previous reply is pending.
    pub fn submit(&mut self, prompt: &str) -> Result<String, AssistantError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }
        if self.pending {
            return Err(AssistantError::Busy);
        }
        self.messages.push(AssistantMessage::new(Role::User, prompt));
        self.pending = true;
        Ok(prompt.to_owned())
    }

    /// Append the assistant's reply.
    pub fn deliver(&mut self, reply: impl Into<String>) {
        self.messages.push(AssistantMessage::new(Role::Assistant, reply));
        self.pending = false;
    }

    /// Reset the conversation, keeping the widget open state.
    pub fn clear(&mut self) {
        let open = self.open;
        *self = Self { open, ..Self::default() };
    }
}

/// Answer a question from the content catalogue.
///
/// `base` is the router base (e.g. `/LCBAD`). Reply links are raw anchors
/// rendered outside the router, so they carry it themselves.
pub fn compose_reply(prompt: &str, base: &str) -> String {
    let lower = prompt.to_lowercase();

    if let Some(story) = stories::STORIES
        .iter()
        .find(|s| lower.contains(s.id) || lower.contains(&s.title.to_lowercase()))
    {
        return format!(
            "**{}** ({} arc): {}\n\nRead it at [/read/{}]({}/read/{}).",
            story.title,
            story.arc,
            story.summary,
            story.id,
            base.trim_end_matches('/'),
            story.id
        );
    }

    let asks_about_arc = lower.contains("arc") || lower.contains("stor");
    if asks_about_arc {
        if let Some(arc) = stories::ARCS.iter().find(|a| lower.contains(&a.to_lowercase())) {
            let mut out = format!("The **{arc}** arc so far:\n\n");
            for s in stories::stories_in_arc(arc) {
                let _ = writeln!(out, "- **{}**: {}", s.title, s.summary);
            }
            return out;
        }
    }

    if let Some(c) = characters::mentioned_in(&lower).first() {
        return format!(
            "**{}** ({}): {}\n\nPowers: {}. First appears in `{}`.",
            c.name,
            c.role,
            c.bio,
            c.powers.join(", "),
            c.first_appearance
        );
    }

    if lower.contains("power") {
        return about::POWER_SYSTEM.to_owned();
    }
    if lower.contains("theme") {
        return format!("The core themes are: {}.", about::THEMES.join(", "));
    }
    if lower.contains("timeline") || lower.contains("history") {
        let mut out = String::from("Timeline of the universe:\n\n");
        for entry in about::TIMELINE {
            let _ = writeln!(out, "- **{}**: {}", entry.era, entry.event);
        }
        return out;
    }
    if lower.contains("contact") {
        return about::CONTACT.to_owned();
    }
    if lower.contains("style") {
        return about::WRITING_STYLE.to_owned();
    }
    if lower.contains("author") || lower.contains("jashan") || lower.contains("bansal") || lower.contains("who wrote") {
        return format!("**{}**: {}", about::AUTHOR, about::AUTHOR_BIO);
    }
    if matches!(lower.trim_end_matches(['!', '.', '?']).trim(), "hi" | "hello" | "hey") {
        return GREETING.to_owned();
    }

    "I'm not sure about that one. Try asking about a story (like `atom-1`), a character \
     (like The Kid), the power system, the timeline, or the author."
        .to_owned()
}
