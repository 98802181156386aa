//! # Runner Tests
//!
//! Runs complete forms on a headless session: question order, cancellation,
//! typed answers and session release.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{accept, accept_all, run_scripted};
use crossterm::event::KeyCode;
use tuiform::{
    commands::demo,
    form::{runner, Answer, Form, FormBuilder, FormError, InputFilter},
    tui::{
        event::TuiEvent,
        script::{ctrl, key, paste, typed, ScriptedSession},
        theme::Theme,
    },
};

/// One question of every kind.
fn mixed_form() -> Form {
    FormBuilder::new()
        .text_input("name", "Name", "Your name")
        .radio_list("level", "Level", "Experience", ["Beginner", "Intermediate", "Advanced"])
        .checkbox_list("interests", "Interests", "Topics", ["Cloud", "Database", "AI/ML"])
        .filtered_text_input("age", "Age", "Digits only", InputFilter::digits())
        .confirmation("subscribe", "Newsletter", "Subscribe?")
        .build()
        .expect("valid form")
}

fn events(groups: Vec<Vec<TuiEvent>>) -> Vec<TuiEvent> {
    groups.concat()
}

// =============================================================================
// Key Set and Cancellation
// =============================================================================

#[test]
fn test_result_keys_equal_question_keys() {
    let forms = [
        FormBuilder::new().build().unwrap(),
        FormBuilder::new().confirmation("only", "Only", "?").build().unwrap(),
        FormBuilder::new()
            .checkbox_list("a", "A", "", ["x", "y"])
            .text_input("b", "B", "")
            .radio_list("c", "C", "", ["p"])
            .build()
            .unwrap(),
        mixed_form(),
    ];

    for form in &forms {
        let run = run_scripted(form, accept_all(form));
        let result = run.result.unwrap().expect("completed");

        let expected: Vec<&str> = form.questions().iter().map(|q| q.key()).collect();
        let actual: Vec<&str> = result.keys().collect();
        assert_eq!(actual, expected);
        assert_eq!(run.releases, 1);
    }
}

#[test]
fn test_cancel_at_any_step_yields_no_result() {
    let form = mixed_form();
    let questions = form.questions();

    for step in 0..questions.len() {
        let mut script: Vec<TuiEvent> = questions[..step]
            .iter()
            .flat_map(|q| accept(q.kind()))
            .collect();
        script.push(key(KeyCode::Esc));

        let run = run_scripted(&form, script);
        assert_eq!(run.result.unwrap(), None, "cancel at step {step}");
        assert_eq!(run.releases, 1, "release at step {step}");
    }
}

#[test]
fn test_ctrl_c_cancels() {
    let form = mixed_form();
    let run = run_scripted(&form, events(vec![typed("Ada"), vec![ctrl('c')]]));
    assert_eq!(run.result.unwrap(), None);
}

#[test]
fn test_cancel_button_cancels_form() {
    let form = mixed_form();
    let run = run_scripted(
        &form,
        vec![key(KeyCode::Tab), key(KeyCode::Right), key(KeyCode::Enter)],
    );
    assert_eq!(run.result.unwrap(), None);
}

#[test]
fn test_questions_after_cancel_are_not_shown() {
    let form = mixed_form();
    let mut session = ScriptedSession::new([key(KeyCode::Esc), key(KeyCode::Enter)]).unwrap();
    let result = runner::run(&form, &mut session, &Theme::default()).unwrap();
    assert_eq!(result, None);
    assert_eq!(session.remaining(), 1);
    assert_eq!(session.frames(), 1);
}

// =============================================================================
// Session Release
// =============================================================================

#[test]
fn test_session_released_once_on_error() {
    let form = mixed_form();
    // Script ends in the middle of the form
    let run = run_scripted(&form, typed("Ada"));
    assert!(run.result.is_err());
    assert_eq!(run.releases, 1);
}

#[test]
fn test_session_released_once_for_empty_form() {
    let form = FormBuilder::new().build().unwrap();
    let run = run_scripted(&form, vec![]);
    assert!(run.result.unwrap().unwrap().is_empty());
    assert_eq!(run.releases, 1);
}

// =============================================================================
// Typed Answers
// =============================================================================

#[test]
fn test_radio_default_is_first_option() {
    let form = mixed_form();
    let result = run_scripted(&form, accept_all(&form)).result.unwrap().unwrap();
    assert_eq!(result.get_string("level"), Some("Beginner"));
}

#[test]
fn test_checkbox_toggle_keeps_option_order() {
    let form = FormBuilder::new()
        .checkbox_list("interests", "Interests", "", ["Cloud", "Database", "AI/ML"])
        .build()
        .unwrap();
    let run = run_scripted(
        &form,
        vec![key(KeyCode::Down), key(KeyCode::Char(' ')), key(KeyCode::Enter)],
    );
    let result = run.result.unwrap().unwrap();
    assert_eq!(result.get_list("interests"), Some(&["Database".to_string()][..]));
}

#[test]
fn test_digits_filter_rejects_letters() {
    let form = FormBuilder::new()
        .filtered_text_input("age", "Age", "", InputFilter::digits())
        .build()
        .unwrap();
    let run = run_scripted(&form, events(vec![typed("4a2"), vec![key(KeyCode::Enter)]]));
    let result = run.result.unwrap().unwrap();
    assert_eq!(result.get_string("age"), Some("42"));
}

#[test]
fn test_paste_into_text_question() {
    let form = FormBuilder::new().text_input("bio", "Bio", "").build().unwrap();
    let run = run_scripted(&form, vec![paste("line one\nline two"), key(KeyCode::Enter)]);
    assert_eq!(
        run.result.unwrap().unwrap().get_string("bio"),
        Some("line one line two")
    );
}

#[test]
fn test_empty_text_answer_is_recorded() {
    let form = FormBuilder::new().text_input("note", "Note", "").build().unwrap();
    let result = run_scripted(&form, vec![key(KeyCode::Enter)])
        .result
        .unwrap()
        .unwrap();
    assert_eq!(result.get("note"), Some(&Answer::Text(String::new())));
}

#[test]
fn test_confirmation_no_cancels_form() {
    let form = FormBuilder::new()
        .text_input("name", "Name", "")
        .confirmation("subscribe", "Newsletter", "Subscribe?")
        .build()
        .unwrap();
    let run = run_scripted(&form, vec![key(KeyCode::Enter), key(KeyCode::Char('n'))]);
    assert_eq!(run.result.unwrap(), None);
    assert_eq!(run.releases, 1);
}

#[test]
fn test_confirmation_enter_on_default_no_cancels_form() {
    let form = FormBuilder::new()
        .confirmation("a", "A", "?")
        .confirmation("b", "B", "?")
        .build()
        .unwrap();
    // "No" is highlighted first
    let mut session = ScriptedSession::new([key(KeyCode::Enter), key(KeyCode::Enter)]).unwrap();
    let result = runner::run(&form, &mut session, &Theme::default()).unwrap();
    assert_eq!(result, None);
    assert_eq!(session.remaining(), 1);
}

#[test]
fn test_confirmation_enter_uses_highlighted_button() {
    let form = FormBuilder::new()
        .confirmation("a", "A", "?")
        .confirmation("b", "B", "?")
        .build()
        .unwrap();
    // Left moves from "No" to "Yes"
    let run = run_scripted(
        &form,
        vec![
            key(KeyCode::Left),
            key(KeyCode::Enter),
            key(KeyCode::Tab),
            key(KeyCode::Enter),
        ],
    );
    let result = run.result.unwrap().unwrap();
    assert!(result.get_bool("a"));
    assert!(result.get_bool("b"));
}

#[test]
fn test_confirmation_yes_records_true() {
    let form = FormBuilder::new()
        .confirmation("terms", "Terms", "Accept?")
        .build()
        .unwrap();
    let run = run_scripted(&form, vec![key(KeyCode::Char('y'))]);
    assert_eq!(
        run.result.unwrap().unwrap().get("terms"),
        Some(&Answer::Bool(true))
    );
}

#[test]
fn test_yes_no_records_false_and_continues() {
    let form = FormBuilder::new()
        .yes_no("subscribe", "Newsletter", "Subscribe?")
        .text_input("name", "Name", "")
        .build()
        .unwrap();
    let result = run_scripted(&form, vec![key(KeyCode::Char('n')), key(KeyCode::Enter)])
        .result
        .unwrap()
        .unwrap();

    assert_eq!(result.get("subscribe"), Some(&Answer::Bool(false)));
    assert_eq!(result.get_string("name"), Some(""));
}

#[test]
fn test_get_bool_false_for_no_and_for_absent_key() {
    let form = FormBuilder::new()
        .yes_no("subscribe", "Newsletter", "Subscribe?")
        .build()
        .unwrap();
    let result = run_scripted(&form, vec![key(KeyCode::Char('n'))])
        .result
        .unwrap()
        .unwrap();

    assert!(!result.get_bool("subscribe"));
    assert!(!result.get_bool("never_asked"));
}

// =============================================================================
// Definition Errors
// =============================================================================

#[test]
fn test_duplicate_keys_rejected_at_build() {
    let err = FormBuilder::new()
        .text_input("name", "Name", "")
        .confirmation("name", "Name again", "")
        .build()
        .unwrap_err();
    assert_eq!(err, FormError::DuplicateKey("name".to_string()));
}

#[test]
fn test_radio_without_options_rejected() {
    let err = FormBuilder::new()
        .radio_list("level", "Level", "", Vec::<String>::new())
        .build()
        .unwrap_err();
    assert_eq!(err, FormError::NoOptions("level".to_string()));
}

// =============================================================================
// Demo Survey
// =============================================================================

#[test]
fn test_demo_survey_end_to_end() {
    let form = demo::survey().unwrap();
    let script = events(vec![
        typed("Ada"),
        vec![key(KeyCode::Enter)],
        // Experience: Intermediate
        vec![key(KeyCode::Down), key(KeyCode::Enter)],
        // Interests: Database
        vec![key(KeyCode::Down), key(KeyCode::Char(' ')), key(KeyCode::Enter)],
        typed("36"),
        vec![key(KeyCode::Enter)],
        vec![key(KeyCode::Char('y'))],
    ]);

    let run = run_scripted(&form, script);
    let result = run.result.unwrap().unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "name": "Ada",
            "level": "Intermediate",
            "interests": ["Database"],
            "age": "36",
            "subscribe": true,
        })
    );
    assert_eq!(demo::farewell(&result), "Thanks for subscribing, Ada!");
    assert_eq!(run.releases, 1);
}

#[test]
fn test_first_dialog_shows_title_and_progress() {
    let form = demo::survey().unwrap();
    let mut session = ScriptedSession::new([key(KeyCode::Esc)]).unwrap();
    runner::run(&form, &mut session, &Theme::default()).unwrap();

    let screen = session.screen();
    assert!(screen.contains(" Name "));
    assert!(screen.contains("What should we call you?"));
    assert!(screen.contains(" 1/5 "));
}
