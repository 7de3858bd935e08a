use std::time::Duration;

use careweave_contact::SubmitFormInput;
use tokio::sync::watch;

use crate::Transport;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);
pub const SUBMIT_LABEL: &str = "送信する";
pub const SUBMITTING_LABEL: &str = "送信中...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmitButton {
    fn ready() -> Self {
        Self {
            label: SUBMIT_LABEL,
            disabled: false,
        }
    }

    fn busy() -> Self {
        Self {
            label: SUBMITTING_LABEL,
            disabled: true,
        }
    }
}

/// What the page shows after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Confirmation(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub phase: Phase,
    pub button: SubmitButton,
    pub form: SubmitFormInput,
    pub notice: Option<Notice>,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            button: SubmitButton::ready(),
            form: SubmitFormInput::default(),
            notice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(String),
    Failed(String),
}

/// Drives one contact form through `Idle -> Submitting -> Completed | Failed`
/// and back to `Idle` once the outcome has been seen.
///
/// The visible state is published on a watch channel. A submission always
/// takes at least `delay` and cannot be cancelled once started; a second
/// submit while one is in flight is ignored.
pub struct FormController<T> {
    transport: T,
    delay: Duration,
    view: watch::Sender<FormView>,
}

impl<T: Transport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self::with_delay(transport, DEFAULT_SUBMIT_DELAY)
    }

    pub fn with_delay(transport: T, delay: Duration) -> Self {
        Self {
            transport,
            delay,
            view: watch::Sender::new(FormView::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        self.view.subscribe()
    }

    pub fn view(&self) -> FormView {
        self.view.borrow().clone()
    }

    /// Replaces the form content. Ignored while submitting.
    ///
    /// Editing after an outcome dismisses its notice and returns to `Idle`.
    pub fn fill(&self, form: SubmitFormInput) {
        self.view.send_if_modified(|view| {
            if view.phase == Phase::Submitting {
                return false;
            }

            view.form = form;
            settle(view);
            true
        });
    }

    /// Dismisses the surfaced outcome. Returns `false` unless the form was
    /// showing one.
    pub fn acknowledge(&self) -> bool {
        self.view.send_if_modified(|view| {
            if !matches!(view.phase, Phase::Completed | Phase::Failed) {
                return false;
            }

            settle(view);
            true
        })
    }

    /// Returns `None` when a submission is already in flight.
    pub async fn submit(&self) -> Option<Outcome> {
        let mut form = None;
        self.view.send_if_modified(|view| {
            if view.phase == Phase::Submitting {
                return false;
            }

            view.phase = Phase::Submitting;
            view.button = SubmitButton::busy();
            view.notice = None;
            form = Some(view.form.clone());
            true
        });

        let Some(form) = form else {
            tracing::debug!("submit ignored while a submission is in flight");
            return None;
        };

        let (result, _) = tokio::join!(
            self.transport.send(&form),
            tokio::time::sleep(self.delay)
        );

        let outcome = match result {
            Ok(ack) => Outcome::Completed(ack.message),
            Err(err) => {
                tracing::warn!(err = %err, "contact submission failed");
                Outcome::Failed(err.to_string())
            }
        };

        self.view.send_modify(|view| {
            view.button = SubmitButton::ready();
            match &outcome {
                Outcome::Completed(message) => {
                    view.phase = Phase::Completed;
                    view.form = SubmitFormInput::default();
                    view.notice = Some(Notice::Confirmation(message.to_owned()));
                }
                Outcome::Failed(message) => {
                    view.phase = Phase::Failed;
                    view.notice = Some(Notice::Error(message.to_owned()));
                }
            }
        });

        Some(outcome)
    }
}

fn settle(view: &mut FormView) {
    if matches!(view.phase, Phase::Completed | Phase::Failed) {
        view.phase = Phase::Idle;
        view.notice = None;
    }
}
