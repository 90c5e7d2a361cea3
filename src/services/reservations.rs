use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::config::storage_keys;
use crate::services::storage::{session_storage, KeyValueStore, StorageError};
use crate::utils::clock::{Clock, SystemClock};

/// What the customer filled in. Serialized with the Spanish field names the
/// page has always stored, so existing lists keep loading.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReservationRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    /// ISO-8601 travel date.
    #[serde(rename = "fecha")]
    pub travel_date: String,
    #[serde(rename = "pasajeros")]
    pub passengers: u32,
    #[serde(rename = "comentarios", default)]
    pub comments: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Reservation {
    pub id: String,
    #[serde(flatten)]
    pub details: ReservationRequest,
}

type Listener = Rc<dyn Fn(&[Reservation])>;

#[derive(Default)]
struct FeedInner {
    next_id: usize,
    listeners: Vec<(usize, Listener)>,
}

/// Publish/subscribe channel carrying the full reservation list after each write.
#[derive(Clone, Default)]
pub struct ReservationFeed {
    inner: Rc<RefCell<FeedInner>>,
}

impl ReservationFeed {
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[Reservation]) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            feed: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn publish(&self, snapshot: &[Reservation]) {
        // Listeners may subscribe/unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Unsubscribes when dropped.
pub struct Subscription {
    feed: Weak<RefCell<FeedInner>>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(feed) = self.feed.upgrade() {
            feed.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Reservation list stored as one JSON array under a single key.
///
/// Every write is read-modify-write of the whole array. Two tabs writing at
/// the same time race and the last write wins; there is no locking.
pub struct ReservationStore<S: KeyValueStore, C: Clock> {
    storage: S,
    clock: C,
    feed: ReservationFeed,
}

impl<S: KeyValueStore, C: Clock> ReservationStore<S, C> {
    pub fn new(storage: S, clock: C, feed: ReservationFeed) -> Self {
        Self { storage, clock, feed }
    }

    pub fn feed(&self) -> &ReservationFeed {
        &self.feed
    }

    pub fn list(&self) -> Result<Vec<Reservation>, StorageError> {
        match self.storage.get_item(storage_keys::RESERVATIONS)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    pub fn submit(&self, request: ReservationRequest) -> Result<Reservation, StorageError> {
        let mut all = self.list()?;
        let reservation = Reservation {
            id: self.next_id(&all),
            details: request,
        };
        all.push(reservation.clone());
        self.save(&all)?;
        log::info!(
            "Stored reservation {} ({} -> {})",
            reservation.id,
            reservation.details.origin,
            reservation.details.destination
        );
        Ok(reservation)
    }

    /// Returns false when no reservation had that id. Subscribers still get
    /// the current list then, since their copy is out of date.
    pub fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut all = self.list()?;
        let before = all.len();
        all.retain(|r| r.id != id);
        if all.len() == before {
            self.feed.publish(&all);
            return Ok(false);
        }
        self.save(&all)?;
        log::info!("Deleted reservation {}", id);
        Ok(true)
    }

    /// Re-reads storage and notifies subscribers, for writes made elsewhere.
    pub fn refresh(&self) -> Result<(), StorageError> {
        let all = self.list()?;
        self.feed.publish(&all);
        Ok(())
    }

    fn save(&self, all: &[Reservation]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(all)?;
        self.storage.set_item(storage_keys::RESERVATIONS, &raw)?;
        self.feed.publish(all);
        Ok(())
    }

    fn next_id(&self, existing: &[Reservation]) -> String {
        let mut candidate = self.clock.now_millis();
        while existing.iter().any(|r| r.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

pub type BrowserReservationStore = ReservationStore<Rc<dyn KeyValueStore>, SystemClock>;

thread_local! {
    static FEED: ReservationFeed = ReservationFeed::default();
}

/// Store over the page's local storage. All instances share one feed, so a
/// write from the reservation form reaches an open admin view.
pub fn browser_store() -> BrowserReservationStore {
    let feed = FEED.with(ReservationFeed::clone);
    ReservationStore::new(session_storage(), SystemClock, feed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::{MemoryStorage, MockKeyValueStore};
    use crate::utils::clock::testing::ManualClock;
    use std::cell::Cell;

    fn request(name: &str) -> ReservationRequest {
        ReservationRequest {
            name: name.to_string(),
            email: "ana@example.com".to_string(),
            phone: "+51 999 888 777".to_string(),
            origin: "Lima".to_string(),
            destination: "Cusco".to_string(),
            travel_date: "2025-07-28".to_string(),
            passengers: 3,
            comments: String::new(),
        }
    }

    fn memory_store(clock: &ManualClock) -> ReservationStore<MemoryStorage, &ManualClock> {
        ReservationStore::new(MemoryStorage::default(), clock, ReservationFeed::default())
    }

    #[test]
    fn submit_then_list_returns_record_with_generated_id() {
        let clock = ManualClock::at(1_700_000_000_000);
        let store = memory_store(&clock);

        let stored = store.submit(request("Ana")).unwrap();
        let all = store.list().unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0], stored);
        assert_eq!(all[0].details, request("Ana"));
        assert_eq!(all[0].id, "1700000000000");
    }

    #[test]
    fn delete_removes_only_that_record() {
        let clock = ManualClock::at(10);
        let store = memory_store(&clock);
        let first = store.submit(request("Ana")).unwrap();
        clock.advance(5);
        let second = store.submit(request("Luis")).unwrap();

        assert!(store.delete(&first.id).unwrap());
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id]);

        assert!(!store.delete(&first.id).unwrap());
    }

    #[test]
    fn deleting_a_record_removed_elsewhere_republishes_the_list() {
        let clock = ManualClock::at(10);
        let storage = MemoryStorage::default();
        let store = ReservationStore::new(storage.clone(), &clock, ReservationFeed::default());
        let gone = store.submit(request("Ana")).unwrap();
        clock.advance(1);
        let kept = store.submit(request("Luis")).unwrap();

        // Another tab wrote a list without `gone`
        let other_tab = ReservationStore::new(storage, &clock, ReservationFeed::default());
        assert!(other_tab.delete(&gone.id).unwrap());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = seen.clone();
            store
                .feed()
                .subscribe(move |all| *seen.borrow_mut() = all.iter().map(|r| r.id.clone()).collect())
        };

        assert!(!store.delete(&gone.id).unwrap());
        assert_eq!(*seen.borrow(), vec![kept.id]);
    }

    #[test]
    fn ids_stay_unique_within_the_same_millisecond() {
        let clock = ManualClock::at(42);
        let store = memory_store(&clock);
        let a = store.submit(request("Ana")).unwrap();
        let b = store.submit(request("Luis")).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(b.id, "43");
    }

    #[test]
    fn persisted_layout_uses_spanish_keys() {
        let clock = ManualClock::at(1);
        let storage = MemoryStorage::default();
        let store = ReservationStore::new(storage.clone(), &clock, ReservationFeed::default());
        store.submit(request("Ana")).unwrap();

        let raw = storage.get_item(storage_keys::RESERVATIONS).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &json[0];
        assert_eq!(record["id"], "1");
        assert_eq!(record["nombre"], "Ana");
        assert_eq!(record["telefono"], "+51 999 888 777");
        assert_eq!(record["fecha"], "2025-07-28");
        assert_eq!(record["pasajeros"], 3);
    }

    #[test]
    fn reads_records_written_by_older_pages() {
        let storage = MemoryStorage::default();
        storage
            .set_item(
                storage_keys::RESERVATIONS,
                r#"[{"id":"1","nombre":"Eva","email":"e@x.pe","telefono":"987654321",
                    "origen":"Lima","destino":"Ica","fecha":"2025-01-01T00:00:00.000Z","pasajeros":2}]"#,
            )
            .unwrap();
        let clock = ManualClock::at(0);
        let store = ReservationStore::new(storage, &clock, ReservationFeed::default());

        let all = store.list().unwrap();
        assert_eq!(all[0].details.destination, "Ica");
        assert_eq!(all[0].details.comments, "");
    }

    #[test]
    fn writes_are_published_to_subscribers() {
        let clock = ManualClock::at(1);
        let store = memory_store(&clock);
        let seen = Rc::new(Cell::new(0usize));

        let subscription = {
            let seen = seen.clone();
            store.feed().subscribe(move |all| seen.set(all.len()))
        };

        store.submit(request("Ana")).unwrap();
        assert_eq!(seen.get(), 1);
        store.submit(request("Luis")).unwrap();
        assert_eq!(seen.get(), 2);

        drop(subscription);
        assert_eq!(store.feed().listener_count(), 0);
        store.submit(request("Eva")).unwrap();
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn refresh_publishes_current_snapshot() {
        let clock = ManualClock::at(1);
        let storage = MemoryStorage::default();
        let store = ReservationStore::new(storage.clone(), &clock, ReservationFeed::default());
        let other_tab = ReservationStore::new(storage, &clock, ReservationFeed::default());

        let seen = Rc::new(Cell::new(0usize));
        let _subscription = {
            let seen = seen.clone();
            store.feed().subscribe(move |all| seen.set(all.len()))
        };

        other_tab.submit(request("Ana")).unwrap();
        assert_eq!(seen.get(), 0);
        store.refresh().unwrap();
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn corrupt_storage_is_reported_and_not_overwritten() {
        let mut storage = MockKeyValueStore::new();
        storage
            .expect_get_item()
            .returning(|_| Ok(Some("[{not json".to_string())));
        storage.expect_set_item().never();

        let clock = ManualClock::at(1);
        let store = ReservationStore::new(storage, &clock, ReservationFeed::default());

        assert!(matches!(store.list(), Err(StorageError::Corrupt(_))));
        assert!(matches!(store.submit(request("Ana")), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn unavailable_storage_propagates() {
        let mut storage = MockKeyValueStore::new();
        storage
            .expect_get_item()
            .returning(|_| Err(StorageError::Unavailable));

        let clock = ManualClock::at(1);
        let store = ReservationStore::new(storage, &clock, ReservationFeed::default());
        assert!(matches!(store.delete("1"), Err(StorageError::Unavailable)));
    }

    #[test]
    fn failed_write_does_not_publish() {
        let mut storage = MockKeyValueStore::new();
        storage.expect_get_item().returning(|_| Ok(None));
        storage
            .expect_set_item()
            .times(1)
            .returning(|_, _| Err(StorageError::Backend("QuotaExceededError".into())));

        let clock = ManualClock::at(1);
        let store = ReservationStore::new(storage, &clock, ReservationFeed::default());
        let published = Rc::new(Cell::new(false));
        let _subscription = {
            let published = published.clone();
            store.feed().subscribe(move |_| published.set(true))
        };

        assert!(store.submit(request("Ana")).is_err());
        assert!(!published.get());
    }

    #[test]
    fn empty_or_missing_key_lists_nothing() {
        let clock = ManualClock::at(1);
        let storage = MemoryStorage::default();
        let store = ReservationStore::new(storage.clone(), &clock, ReservationFeed::default());
        assert!(store.list().unwrap().is_empty());

        storage.set_item(storage_keys::RESERVATIONS, "  ").unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
