//! Async driver binding a `ListMachine` to a `ResourceSource`.
//!
//! The controller exposes the surface a presentation layer binds to and
//! owns the one piece of scheduling in the protocol: the search debounce
//! timer, represented as a cancellable task that is restarted on every
//! query change and aborted on teardown.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::application::lists::machine::{ListCommand, ListEvent, ListMachine, ListSnapshot};
use crate::application::lists::source::{ResourceSource, SourceError};

/// Tunables for one list screen instance.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub page_size: u32,
    /// How long the query must stay unchanged before a search fires.
    pub search_quiescence: Duration,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            search_quiescence: Duration::from_millis(400),
        }
    }
}

pub struct ListController<S: ResourceSource> {
    inner: Arc<Inner<S>>,
}

struct Inner<S: ResourceSource> {
    source: S,
    machine: Mutex<ListMachine<S::Item>>,
    quiescence: Duration,
    debounce: Mutex<Option<JoinHandle<()>>>,
}

impl<S: ResourceSource + 'static> ListController<S> {
    pub fn new(source: S, options: ListOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                machine: Mutex::new(ListMachine::new(options.page_size)),
                quiescence: options.search_quiescence,
                debounce: Mutex::new(None),
            }),
        }
    }

    /// Current list state for the presentation layer.
    pub fn snapshot(&self) -> ListSnapshot<S::Item> {
        self.inner.machine().snapshot()
    }

    /// Reload the list from the first page, replacing any loaded items.
    pub async fn refresh(&self) {
        let commands = self.inner.machine().apply(ListEvent::Activated);
        run(&self.inner, commands).await;
    }

    /// Signal proximity to the end of the rendered sequence. A no-op while
    /// any request is in flight or while a search query is active.
    pub async fn trigger_load_more(&self) {
        let commands = self.inner.machine().apply(ListEvent::EndReached);
        run(&self.inner, commands).await;
    }

    /// Record a query change and restart the quiescence timer. The search
    /// itself fires only once the query has been stable for the configured
    /// interval; an emptied query reloads the unfiltered list instead.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let commands = self
            .inner
            .machine()
            .apply(ListEvent::QueryChanged(query.into()));
        for command in commands {
            if let ListCommand::RestartQuiescence { token } = command {
                restart_quiescence(&self.inner, token);
            }
        }
    }

    /// Delete `id` remotely, then drop it from the local list without a
    /// re-fetch. On failure the entry stays in place.
    pub async fn request_delete(&self, id: &str) -> Result<(), SourceError> {
        self.inner.source.delete(id).await?;
        self.inner
            .machine()
            .apply(ListEvent::Removed { id: id.to_owned() });
        Ok(())
    }
}

impl<S: ResourceSource> Clone for ListController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ResourceSource> Inner<S> {
    fn machine(&self) -> MutexGuard<'_, ListMachine<S::Item>> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn run<S: ResourceSource + 'static>(inner: &Arc<Inner<S>>, commands: Vec<ListCommand>) {
    for command in commands {
        match command {
            ListCommand::FetchPage { ticket, window } => {
                debug!(
                    target: "taskclass::lists",
                    page = window.page,
                    limit = window.limit,
                    "fetching page"
                );
                let outcome = inner.source.fetch_page(window).await;
                // Completions never fan out into further requests.
                inner
                    .machine()
                    .apply(ListEvent::PageLoaded { ticket, outcome });
            }
            ListCommand::Search { ticket, query } => {
                debug!(target: "taskclass::lists", query = %query, "searching");
                let outcome = inner.source.search(&query).await;
                inner
                    .machine()
                    .apply(ListEvent::SearchLoaded { ticket, outcome });
            }
            ListCommand::RestartQuiescence { token } => restart_quiescence(inner, token),
        }
    }
}

fn restart_quiescence<S: ResourceSource + 'static>(inner: &Arc<Inner<S>>, token: u32) {
    let weak = Arc::downgrade(inner);
    let delay = inner.quiescence;
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // The owning list may have been torn down while the timer ran.
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let commands = inner.machine().apply(ListEvent::QueryQuiesced { token });
        run(&inner, commands).await;
    });

    let mut slot = inner
        .debounce
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(previous) = slot.replace(task) {
        previous.abort();
    }
}

impl<S: ResourceSource> Drop for Inner<S> {
    fn drop(&mut self) {
        // A pending timer must never fire against a destroyed list.
        if let Some(task) = self
            .debounce
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.abort();
        }
    }
}
