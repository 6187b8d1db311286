//! What the activity list currently shows.
//!
//! Loads are numbered by `Loads`. Only the newest issued load may write its
//! result; anything older that resolves late is dropped before it reaches
//! the reducer.

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::model::{Activities, Activity};

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Loading,
    Ready(Activities),
    Failed,
}

/// Identifies one participant entry. Carried by the removal control itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalKey {
    pub activity: String,
    pub email: String,
}

impl RemovalKey {
    pub fn for_activity(name: &str, activity: &Activity) -> Vec<RemovalKey> {
        activity
            .participants
            .iter()
            .map(|email| RemovalKey {
                activity: name.to_string(),
                email: email.clone(),
            })
            .collect()
    }
}

/// Hands out load ids. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct Loads(Rc<Cell<u64>>);

impl Loads {
    pub fn issue(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, request: u64) -> bool {
        self.0.get() == request
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub listing: Listing,
    /// Selectable activity names for the signup form, placeholder excluded.
    pub options: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            listing: Listing::Loading,
            options: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    Loaded(Activities),
    Failed,
}

impl Reducible for Roster {
    type Action = RosterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RosterAction::Loaded(activities) => Rc::new(Roster {
                options: activities.names(),
                listing: Listing::Ready(activities),
            }),
            // The select keeps whatever options it had.
            RosterAction::Failed => Rc::new(Roster {
                listing: Listing::Failed,
                options: self.options.clone(),
            }),
        }
    }
}
