//! Fire-and-forget analytics tracking.
//!
//! Every user action ships at most one event; a failure to deliver is logged
//! at debug and never surfaces. The cart and checkout never wait on analytics
//! to complete their own work.

use serde_json::json;
use torres_core::ProductId;

use crate::api::ApiClient;
use crate::session::Session;

/// Ship one event, swallowing any failure.
pub async fn track(
    api: &ApiClient,
    session: Option<&Session>,
    event_type: &str,
    product_id: Option<ProductId>,
    metadata: Option<serde_json::Value>,
) {
    let mut event = json!({ "event_type": event_type });
    if let Some(email) = session.map(|s| s.email.as_str()) {
        event["user_id"] = json!(email);
    }
    if let Some(id) = product_id {
        event["product_id"] = json!(id);
    }
    if let Some(metadata) = metadata {
        event["metadata"] = metadata;
    }

    if let Err(e) = api.track_event(&event).await {
        tracing::debug!("analytics event dropped: {e}");
    }
}
