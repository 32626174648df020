//! Shared fixtures: a stateful in-memory tag store behind wiremock
//! responders, so count checks observe earlier creations the way a real
//! server would.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use finrec_sdk::client::{ClientConfig, FinrecClient};

/// Server-side tag state for one organization.
#[derive(Default)]
pub struct TagStore {
    count: AtomicU64,
}

impl TagStore {
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Pre-populate the store, as if earlier runs created tags.
    pub fn seed(&self, count: u64) {
        self.count.store(count, Ordering::SeqCst);
    }

    fn tags_json(&self) -> serde_json::Value {
        let count = self.count();
        let data: Vec<serde_json::Value> = (1..=count)
            .map(|id| serde_json::json!({"ID": id, "name": format!("Tag {}", id)}))
            .collect();
        serde_json::json!({
            "data": data,
            "pagination": {
                "current_page": 1,
                "page_size": count,
                "total_items": count,
                "total_pages": 1
            }
        })
    }
}

struct ListTagsResponder(Arc<TagStore>);

impl Respond for ListTagsResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(self.0.tags_json())
    }
}

struct CreateTagResponder(Arc<TagStore>);

impl Respond for CreateTagResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let id = self.0.count.fetch_add(1, Ordering::SeqCst) + 1;
        ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": id}))
    }
}

/// Mount the stateful tag endpoints for one organization.
pub async fn mount_tag_store(server: &MockServer, org: u32) -> Arc<TagStore> {
    let store = Arc::new(TagStore::default());

    Mock::given(method("GET"))
        .and(path(format!("/organizations/{}/tags", org)))
        .respond_with(ListTagsResponder(Arc::clone(&store)))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/organizations/{}/tags", org)))
        .respond_with(CreateTagResponder(Arc::clone(&store)))
        .mount(server)
        .await;

    store
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> FinrecClient {
    FinrecClient::new(ClientConfig::default().with_base_url(server.uri())).expect("client")
}

/// Requests received by the server for the given method and path.
pub async fn requests_for(server: &MockServer, http_method: &str, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .filter(|request| {
            request.method.as_str() == http_method && request.url.path() == request_path
        })
        .count()
}
