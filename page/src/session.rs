//! One page session: the controller plus the fetch it depends on.
//!
//! # Design
//! `Session` owns the only `SelectionController`. Mounting and retrying only
//! leave a pending `FetchTicket`, so the caller can show the `Loading` view
//! before calling `load`, which performs exactly one fetch per ticket. The
//! executor is injected so tests can stand in for the network.

use skip_core::{
    Action, FetchTicket, HttpOutcome, HttpRequest, PageView, Selection, SelectionController, SkipClient, SkipError,
    SkipOption,
};
use tracing::info;

use crate::command::Command;
use crate::config::PageConfig;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Re-render the page.
    Render,
    /// Re-render and show a short notice.
    Notice(String),
    /// Hand the selection to the next step.
    Proceed(Selection),
    Quit,
}

pub struct Session<E> {
    client: SkipClient,
    postcode: String,
    area: Option<String>,
    controller: SelectionController,
    pending: Option<FetchTicket>,
    execute: E,
}

impl<E> Session<E>
where
    E: FnMut(&HttpRequest) -> HttpOutcome,
{
    /// Mount the page in `Loading` with the initial fetch pending.
    pub fn mount(config: &PageConfig, execute: E) -> Self {
        let (controller, ticket) = SelectionController::mount();
        Self {
            client: SkipClient::new(config.client.clone()),
            postcode: config.postcode.clone(),
            area: config.area.clone(),
            controller,
            pending: Some(ticket),
            execute,
        }
    }

    /// Mount and run the initial fetch straight away.
    pub fn start(config: &PageConfig, execute: E) -> Self {
        let mut session = Self::mount(config, execute);
        session.load();
        session
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the pending fetch, if any, and apply its result. Returns whether
    /// the state changed.
    pub fn load(&mut self) -> bool {
        let Some(ticket) = self.pending.take() else {
            return false;
        };
        let result = self.fetch();
        self.controller.resolve(ticket, result)
    }

    fn fetch(&mut self) -> Result<Vec<SkipOption>, SkipError> {
        info!(postcode = %self.postcode, area = ?self.area, "loading skip options");
        let request = self.client.build_fetch_skips(&self.postcode, self.area.as_deref())?;
        let outcome = (self.execute)(&request);
        self.client.parse_fetch_skips(outcome)
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn view(&self) -> PageView {
        PageView::from_state(self.controller.state())
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => Flow::Quit,
            Command::Retry => {
                self.pending = Some(self.controller.reset());
                Flow::Render
            }
            Command::Deselect => {
                self.controller.dispatch(Action::Deselect);
                Flow::Render
            }
            Command::Select(position) => {
                let catalog = &self.controller.state().catalog;
                let Some(option) = position.checked_sub(1).and_then(|index| catalog.get(index)) else {
                    return Flow::Notice(format!("There is no skip number {position}."));
                };
                if !option.is_selectable() {
                    return Flow::Notice(format!("The {} yard skip is not available here.", option.size));
                }
                let id = option.id;
                self.controller.dispatch(Action::Select(id));
                Flow::Render
            }
            Command::Proceed => match self.controller.proceed() {
                Some(selection) => Flow::Proceed(selection),
                None => Flow::Notice("Select a skip to continue.".to_string()),
            },
        }
    }
}
