//! Selection state machine for the skip step.
//!
//! # Design
//! The controller never fetches anything. `mount` and `reset` hand out a
//! `FetchTicket`; the host performs the fetch and calls `resolve` with the
//! ticket and the result. Each reset bumps the generation, so a result that
//! arrives for an older ticket is dropped instead of overwriting fresh state.

use tracing::{debug, info};

use crate::error::SkipError;
use crate::types::{Selection, SkipId, SkipOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Loaded,
    Empty,
    Error(String),
}

/// User intent against the loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select `id`, or clear the selection if `id` is already selected.
    Select(SkipId),
    Deselect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub status: Status,
    /// Sorted ascending by size; empty unless `status` is `Loaded`.
    pub catalog: Vec<SkipOption>,
    pub selected_id: Option<SkipId>,
}

impl SelectionState {
    fn loading() -> Self {
        Self {
            status: Status::Loading,
            catalog: Vec::new(),
            selected_id: None,
        }
    }

    pub fn find(&self, id: SkipId) -> Option<&SkipOption> {
        self.catalog.iter().find(|option| option.id == id)
    }

    pub fn selected(&self) -> Option<&SkipOption> {
        self.selected_id.and_then(|id| self.find(id))
    }

    /// The selected option, if it may be carried to the next step.
    pub fn proceedable(&self) -> Option<&SkipOption> {
        self.selected().filter(|option| option.is_selectable())
    }

    pub fn can_proceed(&self) -> bool {
        self.proceedable().is_some()
    }
}

/// Proof that a fetch was requested for a particular generation of state.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the fetch result must be passed back through `resolve`"]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug)]
pub struct SelectionController {
    state: SelectionState,
    generation: u64,
}

impl SelectionController {
    /// Start in `Loading` and request the initial fetch.
    pub fn mount() -> (Self, FetchTicket) {
        let controller = Self {
            state: SelectionState::loading(),
            generation: 0,
        };
        let ticket = FetchTicket { generation: 0 };
        (controller, ticket)
    }

    /// Discard everything and start over from `Loading`. Results for tickets
    /// issued before the reset are ignored by `resolve`.
    pub fn reset(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = SelectionState::loading();
        debug!(generation = self.generation, "selection state reset");
        FetchTicket {
            generation: self.generation,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Apply a fetch result. Returns `false` when the result was stale and
    /// nothing changed.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Vec<SkipOption>, SkipError>) -> bool {
        if ticket.generation != self.generation || self.state.status != Status::Loading {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(mut options) if !options.is_empty() => {
                options.sort_by_key(|option| option.size);
                info!(count = options.len(), "skip catalog loaded");
                self.state.catalog = options;
                self.state.status = Status::Loaded;
            }
            Ok(_) => {
                self.state.status = Status::Empty;
            }
            Err(e) => {
                self.state.status = Status::Error(e.user_message());
            }
        }
        true
    }

    /// Apply a selection action. Returns whether `selected_id` changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if self.state.status != Status::Loaded {
            return false;
        }
        let before = self.state.selected_id;
        match action {
            Action::Deselect => self.state.selected_id = None,
            Action::Select(id) if before == Some(id) => self.state.selected_id = None,
            Action::Select(id) => match self.state.find(id).map(SkipOption::is_selectable) {
                Some(true) => self.state.selected_id = Some(id),
                Some(false) => debug!(id, "ignoring selection of forbidden skip"),
                None => debug!(id, "ignoring selection of unknown skip"),
            },
        }
        before != self.state.selected_id
    }

    pub fn can_proceed(&self) -> bool {
        self.state.can_proceed()
    }

    /// The resolved selection for the next step, or `None` when nothing
    /// valid is selected.
    pub fn proceed(&self) -> Option<Selection> {
        let selected = self.state.proceedable()?;
        let selection = Selection::from(selected);
        info!(id = selected.id, size = selected.size, total = selection.total_price, "proceeding with skip");
        Some(selection)
    }
}
