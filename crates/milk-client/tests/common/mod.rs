//! In-process fake of the CeialMilk API built on `tiny_http`.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use serde_json::Value;

/// One request as seen by the fake server.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    /// Path plus query string.
    pub url: String,
    pub cookie: Option<String>,
    pub body: String,
}

impl Hit {
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> &str {
        self.url.split_once('?').map_or("", |(_, q)| q)
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

pub struct Reply {
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
}

impl Reply {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: vec![("Content-Type".into(), "application/json".into())],
        }
    }

    pub fn data(value: Value) -> Self {
        Self::json(200, &serde_json::json!({ "data": value }))
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

pub struct FakeApi {
    server: Arc<tiny_http::Server>,
    hits: Arc<Mutex<Vec<Hit>>>,
    handle: Option<JoinHandle<()>>,
    pub base_url: String,
}

impl FakeApi {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Hit) -> Reply + Send + 'static,
    {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind fake api"));
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("tcp listener");
        let hits = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let hits = Arc::clone(&hits);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let hit = Hit {
                        method: request.method().to_string(),
                        url: request.url().to_string(),
                        cookie: request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv("Cookie"))
                            .map(|h| h.value.to_string()),
                        body,
                    };
                    let reply = handler(&hit);
                    hits.lock().unwrap_or_else(PoisonError::into_inner).push(hit);

                    let mut response =
                        tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
                    for (name, value) in reply.headers {
                        response = response.with_header(
                            tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes())
                                .expect("valid header"),
                        );
                    }
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            hits,
            handle: Some(handle),
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.hits().iter().map(|h| h.path().to_string()).collect()
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn farm_json(id: i64, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "nome": name,
        "quantidade_vacas": 0,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}
