//! The ephemeral status area under the signup form.
//!
//! Every transition to visible takes a fresh ticket. A hide only applies to
//! the ticket it was armed for, so an older message's timer can never hide
//! a newer message.

use std::rc::Rc;

use yew::prelude::*;

use crate::error::ApiError;

pub const SIGNUP_FALLBACK: &str = "An error occurred";
pub const SIGNUP_TRANSPORT: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_FALLBACK: &str = "Failed to remove participant";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Success,
    Error,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusArea {
    pub text: String,
    pub tone: Tone,
    pub visible: bool,
    pub ticket: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusAction {
    Show { tone: Tone, text: String },
    Hide { ticket: u64 },
}

impl StatusAction {
    pub fn success(text: impl Into<String>) -> Self {
        StatusAction::Show {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusAction::Show {
            tone: Tone::Error,
            text: text.into(),
        }
    }

    pub fn for_signup(result: &Result<String, ApiError>) -> Self {
        match result {
            Ok(message) => Self::success(message.clone()),
            Err(e) if e.is_transport() => Self::error(SIGNUP_TRANSPORT),
            Err(e) => Self::error(e.detail_or(SIGNUP_FALLBACK)),
        }
    }

    /// Transport failures on removal are only logged, so they yield nothing.
    pub fn for_removal_failure(err: &ApiError) -> Option<Self> {
        if err.is_transport() {
            None
        } else {
            Some(Self::error(err.detail_or(REMOVAL_FALLBACK)))
        }
    }
}

impl Reducible for StatusArea {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StatusAction::Show { tone, text } => Rc::new(StatusArea {
                text,
                tone,
                visible: true,
                ticket: self.ticket + 1,
            }),
            StatusAction::Hide { ticket } if ticket == self.ticket && self.visible => {
                Rc::new(StatusArea {
                    visible: false,
                    ..(*self).clone()
                })
            }
            StatusAction::Hide { .. } => self,
        }
    }
}
