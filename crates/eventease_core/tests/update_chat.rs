use std::sync::Once;

use eventease_core::{
    update, AppState, Effect, Message, Msg, Sender, CHAT_FAILURE_TEXT, EMPTY_ANSWER_TEXT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(eventease_logging::initialize_for_tests);
}

fn type_and_send(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SendClicked)
}

fn answer(state: AppState, text: &str) -> AppState {
    update(
        state,
        Msg::ChatAnswered {
            answer: Some(text.to_string()),
        },
    )
    .0
}

#[test]
fn send_appends_user_message_and_clears_input() {
    init_logging();
    let (mut state, effects) = type_and_send(AppState::new(), "Where is the venue?");

    assert_eq!(
        effects,
        vec![Effect::SendChat {
            query: "Where is the venue?".to_string()
        }]
    );
    assert_eq!(state.chat().messages(), &[Message::user("Where is the venue?")]);
    assert_eq!(state.chat().input(), "");
    assert!(state.chat().is_sending());
    assert!(state.consume_dirty());

    let view = state.view();
    assert!(!view.chat.input_enabled);
    assert!(!view.chat.send_enabled);
}

#[test]
fn blank_input_is_noop() {
    init_logging();
    for input in ["", "   ", "\t \n"] {
        let (state, effects) = type_and_send(AppState::new(), input);
        assert!(effects.is_empty());
        assert!(state.chat().messages().is_empty());
        assert!(!state.chat().is_sending());
    }
}

#[test]
fn send_while_pending_is_noop() {
    init_logging();
    let (state, _) = type_and_send(AppState::new(), "first");
    let (mut state, _) = update(state, Msg::InputChanged("second".to_string()));
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::SendClicked);
    assert!(effects.is_empty());
    assert_eq!(state.chat().messages().len(), 1);
    assert_eq!(state.chat().input(), "");
    assert!(!state.consume_dirty());
}

#[test]
fn answer_is_appended_verbatim() {
    init_logging();
    let (state, _) = type_and_send(AppState::new(), "Any party venues?");
    let state = answer(state, "Party venues near you: ...");

    let last = state.chat().messages().last().unwrap();
    assert_eq!(last.sender(), Sender::Bot);
    assert_eq!(last.text(), "Party venues near you: ...");
    assert!(!state.chat().is_sending());
}

#[test]
fn missing_or_empty_answer_uses_fallback() {
    init_logging();
    for reply in [None, Some(String::new())] {
        let (state, _) = type_and_send(AppState::new(), "hello");
        let (state, _) = update(state, Msg::ChatAnswered { answer: reply });
        assert_eq!(
            state.chat().messages().last().unwrap(),
            &Message::bot(EMPTY_ANSWER_TEXT)
        );
    }
}

#[test]
fn failure_appends_apology_and_clears_pending() {
    init_logging();
    let (state, _) = type_and_send(AppState::new(), "hello");
    let (state, effects) = update(
        state,
        Msg::ChatFailed {
            message: "connection refused".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.chat().messages(),
        &[Message::user("hello"), Message::bot(CHAT_FAILURE_TEXT)]
    );
    assert!(!state.chat().is_sending());
    assert!(state.view().chat.input_enabled);
}

#[test]
fn conversation_alternates_user_and_bot() {
    init_logging();
    let mut state = AppState::new();
    let sends = 5;
    for i in 0..sends {
        let (next, effects) = type_and_send(state, &format!("question {i}"));
        assert_eq!(effects.len(), 1);
        state = if i % 2 == 0 {
            answer(next, &format!("answer {i}"))
        } else {
            update(
                next,
                Msg::ChatFailed {
                    message: "boom".to_string(),
                },
            )
            .0
        };
    }

    let messages = state.chat().messages();
    assert_eq!(messages.len(), sends * 2);
    for (index, message) in messages.iter().enumerate() {
        let expected = if index % 2 == 0 {
            Sender::User
        } else {
            Sender::Bot
        };
        assert_eq!(message.sender(), expected, "message {index}");
    }
}

#[test]
fn reply_without_pending_request_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::ChatAnswered {
            answer: Some("late".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn chat_does_not_touch_upload_panel() {
    init_logging();
    let (state, _) = type_and_send(AppState::new(), "hello");
    assert!(state.upload().status().is_none());
    assert!(!state.upload().is_uploading());
    assert!(state.has_pending_request());
}
