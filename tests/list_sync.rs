//! End-to-end properties of the list synchronizer against a scripted
//! in-memory source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use taskclass::application::lists::{
    ListController, ListOptions, PageWindow, ResourceSource, SourceError,
};
use taskclass::domain::ListEntry;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: String,
}

impl ListEntry for Item {
    fn entry_id(&self) -> &str {
        &self.id
    }
}

fn item(id: &str) -> Item {
    Item { id: id.to_owned() }
}

fn items(ids: &[&str]) -> Vec<Item> {
    ids.iter().map(|id| item(id)).collect()
}

/// Scripted source: pages and search results are fixed up front, every
/// call is counted, and an optional delay keeps requests in flight long
/// enough to observe the concurrency guard. Clones share state so a test
/// can keep a handle while the controller owns the other.
#[derive(Clone, Default)]
struct ScriptedSource {
    state: Arc<SourceState>,
}

#[derive(Default)]
struct SourceState {
    pages: Mutex<HashMap<u32, Vec<Item>>>,
    search_results: Mutex<HashMap<String, Vec<Item>>>,
    delay_ms: AtomicUsize,
    fail_deletes: AtomicBool,
    fetch_calls: AtomicUsize,
    search_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    search_terms: Mutex<Vec<String>>,
}

impl ScriptedSource {
    fn with_pages(pages: &[(u32, &[&str])]) -> Self {
        let source = Self::default();
        {
            let mut stored = source.state.pages.lock().expect("pages lock");
            for (page, ids) in pages {
                stored.insert(*page, items(ids));
            }
        }
        source
    }

    fn script_search(&self, term: &str, ids: &[&str]) {
        self.state
            .search_results
            .lock()
            .expect("search lock")
            .insert(term.to_owned(), items(ids));
    }

    fn slow_by(&self, delay: Duration) {
        self.state
            .delay_ms
            .store(delay.as_millis() as usize, Ordering::SeqCst);
    }

    fn fail_deletes(&self) {
        self.state.fail_deletes.store(true, Ordering::SeqCst);
    }

    fn fetches(&self) -> usize {
        self.state.fetch_calls.load(Ordering::SeqCst)
    }

    fn searches(&self) -> usize {
        self.state.search_calls.load(Ordering::SeqCst)
    }

    fn deletes(&self) -> usize {
        self.state.delete_calls.load(Ordering::SeqCst)
    }

    fn search_terms(&self) -> Vec<String> {
        self.state.search_terms.lock().expect("terms lock").clone()
    }
}

#[async_trait]
impl ResourceSource for ScriptedSource {
    type Item = Item;

    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<Item>, SourceError> {
        self.state.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.state.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }
        let pages = self.state.pages.lock().expect("pages lock");
        Ok(pages.get(&window.page).cloned().unwrap_or_default())
    }

    async fn search(&self, query: &str) -> Result<Vec<Item>, SourceError> {
        self.state.search_calls.fetch_add(1, Ordering::SeqCst);
        self.state
            .search_terms
            .lock()
            .expect("terms lock")
            .push(query.to_owned());
        let results = self.state.search_results.lock().expect("search lock");
        Ok(results.get(query).cloned().unwrap_or_default())
    }

    async fn delete(&self, _id: &str) -> Result<(), SourceError> {
        self.state.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_deletes.load(Ordering::SeqCst) {
            return Err(SourceError::Unauthorized);
        }
        Ok(())
    }
}

fn controller(source: &ScriptedSource) -> ListController<ScriptedSource> {
    ListController::new(
        source.clone(),
        ListOptions {
            page_size: 10,
            search_quiescence: Duration::from_millis(25),
        },
    )
}

/// Long enough for a 25 ms quiescence timer to have fired, with margin for
/// slow machines.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(300)).await;
}

#[tokio::test]
async fn items_accumulate_in_fetch_order_across_pages() {
    let source = ScriptedSource::with_pages(&[(1, &["a", "b"]), (2, &["c", "d"]), (3, &["e"])]);
    let controller = controller(&source);

    controller.refresh().await;
    controller.trigger_load_more().await;
    controller.trigger_load_more().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items, items(&["a", "b", "c", "d", "e"]));
    assert_eq!(snapshot.current_page, 3);
    assert_eq!(source.fetches(), 3);
}

#[tokio::test]
async fn empty_page_is_end_of_collection_and_may_be_retried() {
    let source = ScriptedSource::with_pages(&[(1, &["a", "b"])]);
    let controller = controller(&source);

    controller.refresh().await;
    controller.trigger_load_more().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items, items(&["a", "b"]));
    assert_eq!(snapshot.current_page, 1);

    // No exhausted flag: another end-reach signal re-issues page 2.
    controller.trigger_load_more().await;
    assert_eq!(source.fetches(), 3);
    assert_eq!(controller.snapshot().current_page, 1);
}

#[tokio::test]
async fn concurrent_load_more_issues_a_single_request() {
    let source = ScriptedSource::with_pages(&[(1, &["a"]), (2, &["b"])]);
    let controller = controller(&source);

    controller.refresh().await;
    source.slow_by(Duration::from_millis(30));

    // Both triggers run concurrently; the second sees the first in flight
    // and must not issue a request.
    tokio::join!(controller.trigger_load_more(), controller.trigger_load_more());

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items, items(&["a", "b"]));
    assert_eq!(snapshot.current_page, 2);
    // One fetch for the refresh, exactly one for the two triggers.
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn search_replaces_items_and_disables_load_more() {
    let source = ScriptedSource::with_pages(&[(1, &["a", "b"]), (2, &["c"])]);
    source.script_search("zzz", &[]);
    let controller = controller(&source);

    controller.refresh().await;
    controller.set_search_query("zzz");
    settle().await;

    let snapshot = controller.snapshot();
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.search_query, "zzz");

    // Load-more has no effect while a query is active.
    let fetches_before = source.fetches();
    controller.trigger_load_more().await;
    assert_eq!(source.fetches(), fetches_before);
    assert!(controller.snapshot().items.is_empty());
}

#[tokio::test]
async fn clearing_the_query_reloads_from_page_one() {
    let source = ScriptedSource::with_pages(&[(1, &["a", "b"])]);
    source.script_search("mat", &["m1"]);
    let controller = controller(&source);

    controller.refresh().await;
    controller.set_search_query("mat");
    settle().await;
    assert_eq!(controller.snapshot().items, items(&["m1"]));

    controller.set_search_query("");
    settle().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items, items(&["a", "b"]));
    assert_eq!(snapshot.current_page, 1);
    // The reload is a fresh page-one fetch, not a filter of loaded items.
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn rapid_typing_coalesces_into_one_search() {
    let source = ScriptedSource::with_pages(&[(1, &["a"])]);
    source.script_search("mat", &["m1"]);
    let controller = controller(&source);

    controller.refresh().await;
    controller.set_search_query("m");
    controller.set_search_query("ma");
    controller.set_search_query("mat");
    settle().await;

    assert_eq!(controller.snapshot().items, items(&["m1"]));
    // Only the final, stable query value reached the source.
    assert_eq!(source.searches(), 1);
    assert_eq!(source.search_terms(), vec!["mat".to_owned()]);
}

#[tokio::test]
async fn delete_removes_locally_without_a_refetch() {
    let source = ScriptedSource::with_pages(&[(1, &["1", "2", "3"])]);
    let controller = controller(&source);

    controller.refresh().await;
    let fetches_before = source.fetches();
    controller
        .request_delete("2")
        .await
        .expect("delete accepted");

    assert_eq!(controller.snapshot().items, items(&["1", "3"]));
    assert_eq!(source.deletes(), 1);
    assert_eq!(source.fetches(), fetches_before);
}

#[tokio::test]
async fn failed_delete_keeps_the_entry_in_place() {
    let source = ScriptedSource::with_pages(&[(1, &["1", "2"])]);
    source.fail_deletes();
    let controller = controller(&source);

    controller.refresh().await;
    let err = controller
        .request_delete("2")
        .await
        .expect_err("delete rejected");
    assert!(matches!(err, SourceError::Unauthorized));
    assert_eq!(controller.snapshot().items, items(&["1", "2"]));
}
