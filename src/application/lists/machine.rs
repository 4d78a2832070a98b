//! Pure list-synchronization state machine.
//!
//! The machine owns the list state for one screen instance and answers
//! every event with the commands a driver must run against a
//! `ResourceSource`. All transitions are synchronous; the async side lives
//! in `controller`.
//!
//! In-flight mutual exclusion is enforced by a guard, not a lock: there is
//! one logical thread of control per list instance, and a request ticket
//! makes responses that were superseded before completion inert.

use crate::application::lists::source::{PageWindow, SourceError};
use crate::domain::ListEntry;

/// Which request, if any, is logically in flight for this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inflight {
    Idle,
    Initial,
    More,
    Search,
}

/// Event fed into the machine by the driver or the presentation layer.
#[derive(Debug, Clone)]
pub enum ListEvent<T> {
    /// The owning screen became active, or the user asked for a reload.
    Activated,
    /// The consumer scrolled near the end of the rendered sequence.
    EndReached,
    /// The search field changed.
    QueryChanged(String),
    /// The debounce interval elapsed without further query changes.
    QueryQuiesced { token: u32 },
    /// A page fetch completed.
    PageLoaded {
        ticket: u32,
        outcome: Result<Vec<T>, SourceError>,
    },
    /// A search request completed.
    SearchLoaded {
        ticket: u32,
        outcome: Result<Vec<T>, SourceError>,
    },
    /// A remote delete was confirmed for the given identifier.
    Removed { id: String },
}

/// Side effect the driver must perform after applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    FetchPage { ticket: u32, window: PageWindow },
    Search { ticket: u32, query: String },
    /// Cancel any pending quiescence timer and start a fresh one.
    RestartQuiescence { token: u32 },
}

/// Immutable view of the list state for a presentation layer to bind to.
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    pub search_query: String,
    pub last_error: Option<String>,
}

#[derive(Debug)]
pub struct ListMachine<T> {
    entries: Vec<T>,
    current_page: u32,
    page_size: u32,
    query: String,
    inflight: Inflight,
    ticket: u32,
    quiescence_token: u32,
    last_error: Option<String>,
}

impl<T: ListEntry + Clone> ListMachine<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            entries: Vec::new(),
            current_page: 1,
            page_size,
            query: String::new(),
            inflight: Inflight::Idle,
            ticket: 0,
            quiescence_token: 0,
            last_error: None,
        }
    }

    pub fn snapshot(&self) -> ListSnapshot<T> {
        ListSnapshot {
            items: self.entries.clone(),
            current_page: self.current_page,
            // A search in flight presents as a full reload, matching the
            // initial-load treatment.
            is_loading_initial: matches!(self.inflight, Inflight::Initial | Inflight::Search),
            is_loading_more: self.inflight == Inflight::More,
            search_query: self.query.clone(),
            last_error: self.last_error.clone(),
        }
    }

    fn searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    fn begin_initial(&mut self) -> Vec<ListCommand> {
        self.ticket += 1;
        self.inflight = Inflight::Initial;
        self.entries.clear();
        self.current_page = 1;
        self.last_error = None;
        vec![ListCommand::FetchPage {
            ticket: self.ticket,
            window: PageWindow::first(self.page_size),
        }]
    }

    pub fn apply(&mut self, event: ListEvent<T>) -> Vec<ListCommand> {
        match event {
            ListEvent::Activated => self.begin_initial(),
            ListEvent::EndReached => {
                // Load-more is a no-op while anything is in flight or while
                // a search query is active.
                if self.inflight != Inflight::Idle || self.searching() {
                    return Vec::new();
                }
                self.ticket += 1;
                self.inflight = Inflight::More;
                vec![ListCommand::FetchPage {
                    ticket: self.ticket,
                    window: PageWindow::new(self.current_page + 1, self.page_size),
                }]
            }
            ListEvent::QueryChanged(query) => {
                self.query = query;
                self.quiescence_token += 1;
                vec![ListCommand::RestartQuiescence {
                    token: self.quiescence_token,
                }]
            }
            ListEvent::QueryQuiesced { token } => {
                if token != self.quiescence_token {
                    // Superseded by a later keystroke.
                    return Vec::new();
                }
                let trimmed = self.query.trim();
                if trimmed.is_empty() {
                    // Clearing the query is a full reload, not a filter of
                    // the existing items.
                    self.begin_initial()
                } else {
                    let query = trimmed.to_owned();
                    self.ticket += 1;
                    self.inflight = Inflight::Search;
                    vec![ListCommand::Search {
                        ticket: self.ticket,
                        query,
                    }]
                }
            }
            ListEvent::PageLoaded { ticket, outcome } => {
                if ticket != self.ticket
                    || !matches!(self.inflight, Inflight::Initial | Inflight::More)
                {
                    // Stale response: the owning request was superseded.
                    return Vec::new();
                }
                let was_initial = self.inflight == Inflight::Initial;
                self.inflight = Inflight::Idle;
                match outcome {
                    Ok(batch) if was_initial => {
                        self.entries = batch;
                        self.current_page = 1;
                    }
                    Ok(batch) => {
                        // An empty page marks the end of the collection; the
                        // page number only advances on a confirmed non-empty
                        // append.
                        if !batch.is_empty() {
                            self.entries.extend(batch);
                            self.current_page += 1;
                        }
                    }
                    Err(err) => self.last_error = Some(err.to_string()),
                }
                Vec::new()
            }
            ListEvent::SearchLoaded { ticket, outcome } => {
                if ticket != self.ticket || self.inflight != Inflight::Search {
                    return Vec::new();
                }
                self.inflight = Inflight::Idle;
                match outcome {
                    Ok(batch) => self.entries = batch,
                    Err(err) => self.last_error = Some(err.to_string()),
                }
                Vec::new()
            }
            ListEvent::Removed { id } => {
                self.entries.retain(|entry| entry.entry_id() != id);
                Vec::new()
            }
        }
    }
}
