//! State for the demo anonymous chat screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is local to the page. Peers are a fixed roster, identities
//! are random labels, and "burning" a message only flips a flag. Nothing is
//! sent anywhere.

#[cfg(test)]
#[path = "anon_chat_test.rs"]
mod anon_chat_test;

/// How long an ephemeral message stays readable.
pub const EPHEMERAL_TTL_MS: f64 = 60_000.0;

const ADDRESS_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connection {
    #[default]
    Disconnected,
    /// Generating an identity.
    Connecting,
    Connected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnonymousIdentity {
    pub address: String,
    pub pseudonym: String,
    pub reputation: u32,
}

impl AnonymousIdentity {
    /// Derive a demo identity from random bits.
    #[allow(clippy::cast_possible_truncation)]
    pub fn generate(entropy: u128) -> Self {
        let mut bits = entropy;
        let mut address = String::from("demo_");
        for _ in 0..9 {
            address.push(ADDRESS_ALPHABET[(bits % 36) as usize] as char);
            bits /= 36;
        }
        Self {
            address,
            pseudonym: format!("AnonymousUser{}", (entropy >> 64) % 1000),
            reputation: ((entropy >> 96) % 100) as u32,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnonymousUser {
    pub address: String,
    pub pseudonym: String,
    pub reputation: u32,
    pub is_online: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub receiver: String,
    pub timestamp_ms: f64,
    /// Set for ephemeral messages.
    pub expires_at_ms: Option<f64>,
    pub is_burned: bool,
}

impl ChatMessage {
    pub fn is_ephemeral(&self) -> bool {
        self.expires_at_ms.is_some()
    }
}

/// Badge shown next to a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStatus {
    Burned,
    Ephemeral,
    Visible,
}

impl MessageStatus {
    pub fn of(message: &ChatMessage) -> Self {
        if message.is_burned {
            Self::Burned
        } else if message.is_ephemeral() {
            Self::Ephemeral
        } else {
            Self::Visible
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("Start a chat first.")]
    NotConnected,
    #[error("Already connected.")]
    AlreadyConnected,
    #[error("Select a user to chat with.")]
    NoRecipient,
    #[error("Message is empty.")]
    EmptyMessage,
    #[error("Pseudonym cannot be empty.")]
    EmptyPseudonym,
    #[error("No such user: {0}")]
    UnknownUser(String),
}

/// The fixed roster of demo peers.
pub fn demo_peers() -> Vec<AnonymousUser> {
    [("user1", "ShadowTraveler#1234", 85), ("user2", "MysterySeeker#5678", 92), ("user3", "PhantomVoyager#9012", 78)]
        .into_iter()
        .map(|(address, pseudonym, reputation)| AnonymousUser {
            address: address.to_owned(),
            pseudonym: pseudonym.to_owned(),
            reputation,
            is_online: true,
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct AnonChatState {
    pub connection: Connection,
    pub identity: Option<AnonymousIdentity>,
    pub messages: Vec<ChatMessage>,
    pub online_users: Vec<AnonymousUser>,
    pub selected_user: Option<String>,
    /// New messages get an expiry.
    pub ephemeral: bool,
    pub show_settings: bool,
    pub error: Option<String>,
}

impl Default for AnonChatState {
    fn default() -> Self {
        Self {
            connection: Connection::Disconnected,
            identity: None,
            messages: Vec::new(),
            online_users: demo_peers(),
            selected_user: None,
            ephemeral: false,
            show_settings: false,
            error: None,
        }
    }
}

impl AnonChatState {
    /// Begin generating an identity.
    ///
    /// # Errors
    ///
    /// [`ChatError::AlreadyConnected`] unless disconnected.
    pub fn begin_connect(&mut self) -> Result<(), ChatError> {
        if self.connection != Connection::Disconnected {
            return Err(ChatError::AlreadyConnected);
        }
        self.connection = Connection::Connecting;
        self.error = None;
        Ok(())
    }

    /// Finish connecting with a generated identity. Ignored unless connecting.
    pub fn complete_connect(&mut self, identity: AnonymousIdentity) {
        if self.connection != Connection::Connecting {
            return;
        }
        log::info!("anon-chat: connected as {}", identity.pseudonym);
        self.identity = Some(identity);
        self.connection = Connection::Connected;
        if self.online_users.is_empty() {
            self.online_users = demo_peers();
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection == Connection::Connected && self.identity.is_some()
    }

    /// Pick the peer to talk to.
    ///
    /// # Errors
    ///
    /// [`ChatError::UnknownUser`] if `address` is not in the online list.
    pub fn select_user(&mut self, address: &str) -> Result<(), ChatError> {
        if !self.online_users.iter().any(|u| u.address == address) {
            return Err(ChatError::UnknownUser(address.to_owned()));
        }
        self.selected_user = Some(address.to_owned());
        Ok(())
    }

    pub fn selected_peer(&self) -> Option<&AnonymousUser> {
        let selected = self.selected_user.as_deref()?;
        self.online_users.iter().find(|u| u.address == selected)
    }

    /// Send a message to the selected peer.
    ///
    /// # Errors
    ///
    /// [`ChatError::NotConnected`], [`ChatError::NoRecipient`], or
    /// [`ChatError::EmptyMessage`].
    pub fn send_message(&mut self, content: &str, now_ms: f64, id: String) -> Result<&ChatMessage, ChatError> {
        let sender = self.identity.as_ref().map(|i| i.address.clone()).ok_or(ChatError::NotConnected)?;
        let receiver = self.selected_user.clone().ok_or(ChatError::NoRecipient)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        self.messages.push(ChatMessage {
            id,
            content: content.to_owned(),
            sender,
            receiver,
            timestamp_ms: now_ms,
            expires_at_ms: self.ephemeral.then_some(now_ms + EPHEMERAL_TTL_MS),
            is_burned: false,
        });
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Mark a message burned. Returns `false` if it was not found or already burned.
    pub fn burn_message(&mut self, id: &str) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id && !m.is_burned) {
            Some(message) => {
                message.is_burned = true;
                true
            }
            None => false,
        }
    }

    /// Burn every ephemeral message past its expiry. Returns how many burned.
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let mut burned = 0;
        for m in &mut self.messages {
            if !m.is_burned && m.expires_at_ms.is_some_and(|at| at <= now_ms) {
                m.is_burned = true;
                burned += 1;
            }
        }
        burned
    }

    /// Rename the local identity and close the settings dialog.
    ///
    /// # Errors
    ///
    /// [`ChatError::EmptyPseudonym`] or [`ChatError::NotConnected`].
    pub fn update_pseudonym(&mut self, name: &str) -> Result<(), ChatError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChatError::EmptyPseudonym);
        }
        let identity = self.identity.as_mut().ok_or(ChatError::NotConnected)?;
        identity.pseudonym = name.to_owned();
        self.show_settings = false;
        Ok(())
    }

    /// Refresh the peer list. The roster is fixed, so this only reports its size.
    pub fn discover_users(&mut self) -> usize {
        log::debug!("anon-chat: {} peers online", self.online_users.len());
        self.online_users.len()
    }

    /// Drop identity, messages, peers, selection and error.
    pub fn disconnect(&mut self) {
        self.connection = Connection::Disconnected;
        self.identity = None;
        self.messages.clear();
        self.online_users.clear();
        self.selected_user = None;
        self.show_settings = false;
        self.error = None;
    }

    /// Messages between the local identity and the selected peer, both directions.
    pub fn conversation(&self) -> Vec<&ChatMessage> {
        let (Some(me), Some(peer)) = (self.identity.as_ref(), self.selected_user.as_deref()) else {
            return Vec::new();
        };
        self.messages
            .iter()
            .filter(|m| {
                (m.sender == me.address && m.receiver == peer) || (m.sender == peer && m.receiver == me.address)
            })
            .collect()
    }

    pub fn is_own(&self, message: &ChatMessage) -> bool {
        self.identity.as_ref().is_some_and(|i| i.address == message.sender)
    }

    /// Display name for a message's sender.
    pub fn sender_name(&self, message: &ChatMessage) -> String {
        if let Some(me) = self.identity.as_ref().filter(|i| i.address == message.sender) {
            return me.pseudonym.clone();
        }
        self.online_users
            .iter()
            .find(|u| u.address == message.sender)
            .map_or_else(|| "Unknown".to_owned(), |u| u.pseudonym.clone())
    }
}
