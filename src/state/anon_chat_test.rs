use super::*;

fn connected() -> AnonChatState {
    let mut state = AnonChatState::default();
    state.begin_connect().unwrap();
    state.complete_connect(AnonymousIdentity::generate(0x1234_5678_9abc_def0_1122_3344_5566_7788));
    state
}

// =============================================================
// Identity and connection
// =============================================================

#[test]
fn generated_identity_shape() {
    let id = AnonymousIdentity::generate(u128::MAX);
    assert!(id.address.starts_with("demo_"));
    assert_eq!(id.address.len(), 14);
    assert!(id.address[5..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    assert!(id.pseudonym.starts_with("AnonymousUser"));
    assert!(id.reputation < 100);
}

#[test]
fn identity_generation_is_deterministic_per_entropy() {
    assert_eq!(AnonymousIdentity::generate(42), AnonymousIdentity::generate(42));
    assert_eq!(AnonymousIdentity::generate(0).address, "demo_000000000");
}

#[test]
fn connect_flow() {
    let mut state = AnonChatState::default();
    assert_eq!(state.connection, Connection::Disconnected);
    state.begin_connect().unwrap();
    assert_eq!(state.connection, Connection::Connecting);
    assert!(!state.is_connected());
    assert_eq!(state.begin_connect(), Err(ChatError::AlreadyConnected));

    state.complete_connect(AnonymousIdentity::generate(7));
    assert!(state.is_connected());
    assert_eq!(state.online_users.len(), 3);
}

#[test]
fn late_identity_after_disconnect_is_ignored() {
    let mut state = AnonChatState::default();
    state.begin_connect().unwrap();
    state.disconnect();
    state.complete_connect(AnonymousIdentity::generate(7));
    assert!(!state.is_connected());
    assert!(state.identity.is_none());
}

// =============================================================
// Messaging
// =============================================================

#[test]
fn send_requires_connection_recipient_and_content() {
    let mut state = AnonChatState::default();
    assert_eq!(state.send_message("hi", 0.0, "m1".into()).unwrap_err(), ChatError::NotConnected);

    let mut state = connected();
    assert_eq!(state.send_message("hi", 0.0, "m1".into()).unwrap_err(), ChatError::NoRecipient);

    state.select_user("user1").unwrap();
    assert_eq!(state.send_message("   ", 0.0, "m1".into()).unwrap_err(), ChatError::EmptyMessage);

    let msg = state.send_message("  hello  ", 5.0, "m1".into()).unwrap();
    assert_eq!(msg.content, "hello");
    assert_eq!(msg.receiver, "user1");
    assert_eq!(MessageStatus::of(msg), MessageStatus::Visible);
}

#[test]
fn select_unknown_user_fails() {
    let mut state = connected();
    assert_eq!(state.select_user("ghost"), Err(ChatError::UnknownUser("ghost".to_owned())));
    assert!(state.selected_user.is_none());
}

#[test]
fn conversation_is_scoped_to_selected_peer() {
    let mut state = connected();
    state.select_user("user1").unwrap();
    state.send_message("to one", 1.0, "a".into()).unwrap();
    state.select_user("user2").unwrap();
    state.send_message("to two", 2.0, "b".into()).unwrap();

    let me = state.identity.clone().unwrap().address;
    state.messages.push(ChatMessage {
        id: "c".into(),
        content: "from two".into(),
        sender: "user2".into(),
        receiver: me,
        timestamp_ms: 3.0,
        expires_at_ms: None,
        is_burned: false,
    });

    let convo: Vec<_> = state.conversation().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(convo, vec!["b", "c"]);
}

#[test]
fn burn_marks_once() {
    let mut state = connected();
    state.select_user("user1").unwrap();
    state.send_message("secret", 1.0, "m1".into()).unwrap();

    assert!(state.burn_message("m1"));
    assert!(!state.burn_message("m1"));
    assert!(!state.burn_message("missing"));
    assert_eq!(MessageStatus::of(&state.messages[0]), MessageStatus::Burned);
}

#[test]
fn ephemeral_messages_expire() {
    let mut state = connected();
    state.ephemeral = true;
    state.select_user("user1").unwrap();
    let msg = state.send_message("soon gone", 1_000.0, "m1".into()).unwrap();
    assert_eq!(msg.expires_at_ms, Some(1_000.0 + EPHEMERAL_TTL_MS));
    assert_eq!(MessageStatus::of(msg), MessageStatus::Ephemeral);

    assert_eq!(state.expire(1_000.0), 0);
    assert_eq!(state.expire(1_000.0 + EPHEMERAL_TTL_MS), 1);
    assert!(state.messages[0].is_burned);
}

// =============================================================
// Identity management and teardown
// =============================================================

#[test]
fn update_pseudonym_trims_and_closes_settings() {
    let mut state = connected();
    state.show_settings = true;
    state.update_pseudonym("  Dreamer  ").unwrap();
    assert_eq!(state.identity.as_ref().unwrap().pseudonym, "Dreamer");
    assert!(!state.show_settings);
    assert_eq!(state.update_pseudonym(" "), Err(ChatError::EmptyPseudonym));
}

#[test]
fn update_pseudonym_requires_identity() {
    let mut state = AnonChatState::default();
    assert_eq!(state.update_pseudonym("x"), Err(ChatError::NotConnected));
}

#[test]
fn disconnect_clears_everything() {
    let mut state = connected();
    state.select_user("user1").unwrap();
    state.send_message("bye", 1.0, "m1".into()).unwrap();
    state.error = Some("oops".into());

    state.disconnect();
    assert_eq!(state.connection, Connection::Disconnected);
    assert!(state.identity.is_none());
    assert!(state.messages.is_empty());
    assert!(state.online_users.is_empty());
    assert!(state.selected_user.is_none());
    assert!(state.error.is_none());
    assert_eq!(state.discover_users(), 0);
}

#[test]
fn reconnect_restores_roster() {
    let mut state = connected();
    state.disconnect();
    state.begin_connect().unwrap();
    state.complete_connect(AnonymousIdentity::generate(9));
    assert_eq!(state.discover_users(), 3);
}

#[test]
fn sender_names() {
    let mut state = connected();
    state.select_user("user2").unwrap();
    state.send_message("hi", 1.0, "m1".into()).unwrap();
    let mine = state.messages[0].clone();
    assert!(state.is_own(&mine));
    assert_eq!(state.sender_name(&mine), state.identity.as_ref().unwrap().pseudonym);

    let theirs = ChatMessage { sender: "user2".into(), ..mine.clone() };
    assert_eq!(state.sender_name(&theirs), "MysterySeeker#5678");

    let stranger = ChatMessage { sender: "nobody".into(), ..mine };
    assert_eq!(state.sender_name(&stranger), "Unknown");
}
