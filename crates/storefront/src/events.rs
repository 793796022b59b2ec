//! Analytics event tracking.
//!
//! Events are recorded in a bounded in-memory ring and, when a collector is
//! configured, forwarded to it on a background task. Forwarding is strictly
//! fire-and-forget: a collector failure is logged and never surfaces to the
//! client that tracked the event.

use std::collections::VecDeque;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use torres_core::ProductId;

use crate::config::EventsForwardConfig;

/// Events retained in memory for the list endpoint.
const MAX_RETAINED_EVENTS: usize = 1024;

/// The tracked event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ViewProduct,
    AddToCart,
    Purchase,
    Search,
    Login,
    Logout,
    WhatsappClick,
}

/// Incoming event payload, as posted by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A recorded event.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

/// Error from the event store.
#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("event store poisoned: {0}")]
    Poisoned(String),
}

struct Inner {
    next_id: u64,
    events: VecDeque<Event>,
}

/// In-memory event store with optional collector forwarding.
pub struct EventStore {
    inner: RwLock<Inner>,
    forward: Option<Forwarder>,
}

struct Forwarder {
    client: reqwest::Client,
    config: EventsForwardConfig,
}

impl EventStore {
    /// Create an event store; forwarding is enabled when a collector is
    /// configured.
    #[must_use]
    pub fn new(forward: Option<EventsForwardConfig>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                events: VecDeque::new(),
            }),
            forward: forward.map(|config| Forwarder {
                client: reqwest::Client::new(),
                config,
            }),
        }
    }

    /// Record an event and kick off best-effort forwarding.
    ///
    /// # Errors
    ///
    /// Returns [`EventStoreError`] only if the in-memory store is unusable;
    /// forwarding failures never surface here.
    pub fn track(&self, new: NewEvent) -> Result<Event, EventStoreError> {
        let event = {
            let mut inner = self
                .inner
                .write()
                .map_err(|e| EventStoreError::Poisoned(e.to_string()))?;
            let event = Event {
                id: inner.next_id,
                user_id: new.user_id,
                customer_id: new.customer_id,
                product_id: new.product_id,
                event_type: new.event_type,
                metadata: new.metadata,
                timestamp: Utc::now(),
            };
            inner.next_id += 1;
            inner.events.push_back(event.clone());
            if inner.events.len() > MAX_RETAINED_EVENTS {
                inner.events.pop_front();
            }
            event
        };

        if let Some(forwarder) = &self.forward {
            forwarder.spawn_forward(event.clone());
        }

        Ok(event)
    }

    /// List recorded events, newest last, optionally filtered by type.
    ///
    /// # Errors
    ///
    /// Returns [`EventStoreError`] if the in-memory store is unusable.
    pub fn list(&self, event_type: Option<EventType>) -> Result<Vec<Event>, EventStoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| EventStoreError::Poisoned(e.to_string()))?;
        Ok(inner
            .events
            .iter()
            .filter(|e| event_type.is_none_or(|t| e.event_type == t))
            .cloned()
            .collect())
    }
}

impl Forwarder {
    /// Ship one event to the collector on a background task.
    fn spawn_forward(&self, event: Event) {
        let client = self.client.clone();
        let endpoint = self.config.endpoint.clone();
        let api_key = self.config.api_key.clone();

        tokio::spawn(async move {
            let result = client
                .post(&endpoint)
                .bearer_auth(api_key.expose_secret())
                .json(&event)
                .send()
                .await;

            match result {
                Ok(response) if !response.status().is_success() => {
                    tracing::warn!(
                        status = %response.status(),
                        event_id = event.id,
                        "collector rejected event"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(event_id = event.id, "failed to forward event: {e}");
                }
            }
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_event(event_type: EventType) -> NewEvent {
        NewEvent {
            user_id: None,
            customer_id: None,
            product_id: Some(ProductId::new(1)),
            event_type,
            metadata: None,
        }
    }

    #[test]
    fn test_track_assigns_sequential_ids() {
        let store = EventStore::new(None);
        let a = store.track(new_event(EventType::ViewProduct)).unwrap();
        let b = store.track(new_event(EventType::AddToCart)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_list_filters_by_type() {
        let store = EventStore::new(None);
        store.track(new_event(EventType::ViewProduct)).unwrap();
        store.track(new_event(EventType::Purchase)).unwrap();
        store.track(new_event(EventType::ViewProduct)).unwrap();

        let all = store.list(None).unwrap();
        assert_eq!(all.len(), 3);

        let views = store.list(Some(EventType::ViewProduct)).unwrap();
        assert_eq!(views.len(), 2);
        assert!(views.iter().all(|e| e.event_type == EventType::ViewProduct));
    }

    #[test]
    fn test_ring_drops_oldest() {
        let store = EventStore::new(None);
        for _ in 0..=MAX_RETAINED_EVENTS {
            store.track(new_event(EventType::Search)).unwrap();
        }
        let events = store.list(None).unwrap();
        assert_eq!(events.len(), MAX_RETAINED_EVENTS);
        // The first event was evicted
        assert_eq!(events.first().unwrap().id, 2);
    }

    #[test]
    fn test_event_type_wire_labels() {
        assert_eq!(
            serde_json::to_string(&EventType::WhatsappClick).unwrap(),
            "\"whatsapp_click\""
        );
        let parsed: EventType = serde_json::from_str("\"add_to_cart\"").unwrap();
        assert_eq!(parsed, EventType::AddToCart);
    }
}
