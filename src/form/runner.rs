//! Sequential form runner.
//!
//! Asks each question of a [`Form`] in order, one dialog at a time, and
//! collects the answers. The first cancellation ends the run without a
//! result.

use anyhow::Result;
use indexmap::IndexMap;
use tracing::{debug, info, info_span};

use super::{
    answer::{Answer, FormResult},
    builder::Form,
    question::{Question, QuestionKind},
};
use crate::tui::{
    drive,
    screens::{CheckboxDialog, ConfirmDialog, DialogChrome, RadioDialog, TextDialog},
    theme::Theme,
    Session,
};

/// Run `form` on `session`.
///
/// Returns `Ok(Some(result))` with one answer per question when every
/// dialog was confirmed, and `Ok(None)` as soon as one is cancelled.
/// The session is consumed and dropped before returning on every path,
/// errors included.
pub fn run<S: Session>(form: &Form, mut session: S, theme: &Theme) -> Result<Option<FormResult>> {
    let span = info_span!("form", questions = form.len());
    let _enter = span.enter();

    let total = form.len();
    let mut answers = IndexMap::with_capacity(total);

    for (index, question) in form.questions().iter().enumerate() {
        let step = index + 1;
        debug!(
            key = question.key(),
            kind = question.kind().name(),
            step,
            total,
            "Asking question"
        );

        let Some(answer) = ask(&mut session, question, step, total, theme)? else {
            info!(key = question.key(), step, total, "Form cancelled");
            return Ok(None);
        };
        debug!(key = question.key(), %answer, "Answered");
        answers.insert(question.key().to_string(), answer);
    }

    info!(answers = answers.len(), "Form completed");
    Ok(Some(FormResult::new(answers)))
}

/// Show the dialog for one question and wait for its outcome.
fn ask<S: Session + ?Sized>(
    session: &mut S,
    question: &Question,
    step: usize,
    total: usize,
    theme: &Theme,
) -> Result<Option<Answer>> {
    let chrome =
        DialogChrome::new(question.title(), question.prompt()).with_progress(step, total);

    let answer = match question.kind() {
        QuestionKind::Text { filter } => {
            let mut dialog = TextDialog::new(chrome, *theme).with_filter(filter.clone());
            drive(session, &mut dialog)?.map(Answer::Text)
        }
        QuestionKind::SingleSelect { options } => {
            let mut dialog = RadioDialog::new(chrome, options.clone(), *theme);
            drive(session, &mut dialog)?.map(Answer::Text)
        }
        QuestionKind::MultiSelect { options } => {
            let mut dialog = CheckboxDialog::new(chrome, options.clone(), *theme);
            drive(session, &mut dialog)?.map(Answer::List)
        }
        QuestionKind::Confirm { decline_cancels } => {
            let mut dialog = ConfirmDialog::new(chrome, *theme);
            match drive(session, &mut dialog)? {
                Some(false) if *decline_cancels => None,
                confirmed => confirmed.map(Answer::Bool),
            }
        }
    };

    Ok(answer)
}
