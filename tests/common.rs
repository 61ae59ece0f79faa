#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

/// Binary under test, isolated from the caller's environment overrides.
pub fn rta() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env_remove("RECOGNITION_URL")
        .env_remove("FIREBASE_PROJECT_ID")
        .env_remove("FIREBASE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config file inside `dir` and return its path
pub fn write_config(dir: &Path, recognition_url: &str, firestore_url: &str) -> PathBuf {
    let path = dir.join("rattendance.conf");
    let yaml = format!(
        "recognition_url: {recognition_url}\n\
         firestore_url: {firestore_url}\n\
         firestore_project: demo\n\
         request_timeout_secs: 5\n\
         profile_name: Demo User\n\
         profile_email: demo@example.com\n"
    );
    fs::write(&path, yaml).expect("write config");
    path
}

/// Smallest byte sequence sniffed as a PNG
pub fn png_bytes() -> Vec<u8> {
    let mut v = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    v.extend_from_slice(&[0, 0, 0, 13, b'I', b'H', b'D', b'R']);
    v.extend_from_slice(&[0; 17]);
    v
}

pub fn write_photo(dir: &Path) -> PathBuf {
    let path = dir.join("class.png");
    fs::write(&path, png_bytes()).expect("write photo");
    path
}

/// One request as seen by the stub
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub target: String,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Arc<str>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Loopback axum app answering every route with the same canned reply and
/// recording each request before it answers.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    pub fn start(status: u16, body: &str) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub");
        listener.set_nonblocking(true).expect("nonblocking");
        let url = format!("http://{}", listener.local_addr().expect("addr"));

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).expect("status code"),
            body: Arc::from(body),
            requests: Arc::clone(&requests),
        };

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("listener");
                let app = Router::new().fallback(record).with_state(state);
                axum::serve(listener, app).await.expect("serve stub");
            });
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("lock").clone()
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    state.requests.lock().expect("lock").push(Recorded {
        method: method.to_string(),
        target: uri.to_string(),
        body: body.to_vec(),
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.to_string(),
    )
}

pub const FULL_CLASS: [&str; 10] = [
    "--department",
    "Engineering",
    "--course",
    "B.Tech",
    "--branch",
    "Computer Science",
    "--year",
    "1st Year",
    "--semester",
    "Semester 1",
];
