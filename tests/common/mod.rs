#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use course_catalog::client::{ClientConfig, HttpCoursesService};

/// Serves `app` on an ephemeral port and returns its base url.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    format!("http://{}", addr)
}

pub fn http_service(base_url: &str) -> HttpCoursesService {
    let config = ClientConfig::new(base_url).expect("client config");
    HttpCoursesService::new(config).expect("http client")
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub params: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
}

/// A fake courses backend that records every request and answers with
/// whatever reply the test scripted.
#[derive(Clone)]
pub struct RecordingBackend {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    reply: Arc<Mutex<(StatusCode, String)>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new((StatusCode::OK, "{}".to_string()))),
        }
    }

    pub async fn start(&self) -> String {
        let app = Router::new().fallback(record).with_state(self.clone());
        spawn(app).await
    }

    pub fn flush_json(&self, body: serde_json::Value) {
        *self.reply.lock().unwrap() = (StatusCode::OK, body.to_string());
    }

    pub fn flush_error(&self, status: StatusCode, body: &str) {
        *self.reply.lock().unwrap() = (status, body.to_string());
    }

    pub fn flush_raw(&self, body: &str) {
        *self.reply.lock().unwrap() = (StatusCode::OK, body.to_string());
    }

    /// Asserts exactly one request was made to `path` and returns it.
    pub fn expect_one(&self, path: &str) -> RecordedRequest {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected one request, got {:?}", *requests);
        let request = requests[0].clone();
        assert_eq!(request.path, path);
        request
    }
}

async fn record(
    State(backend): State<RecordingBackend>,
    method: Method,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let body = serde_json::from_slice(&body).ok();
    backend.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        params,
        body,
    });

    let (status, body) = backend.reply.lock().unwrap().clone();
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
