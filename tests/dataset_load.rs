// tests/dataset_load.rs
mod common;

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

use tourism_dash::config::options::Source;
use tourism_dash::core::net;
use tourism_dash::dataset::{self, Origin};
use tourism_dash::progress::{NullProgress, Progress};
use tourism_dash::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tourism_dash_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Answers a single HTTP request with `status` and `body`, then closes.
fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let reply = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => req.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(reply.as_bytes());
        }
    });
    format!("http://{addr}/tourism.csv")
}

/// A local URL nothing listens on.
fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/tourism.csv")
}

#[derive(Default)]
struct Recorder {
    began: Option<String>,
    lines: Vec<String>,
    finished: Option<bool>,
}

impl Progress for Recorder {
    fn begin(&mut self, source: &str) { self.began = Some(source.to_string()); }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn finish(&mut self, ok: bool) { self.finished = Some(ok); }
}

#[test]
fn loads_from_local_file() {
    let dir = tmp_dir("file");
    let path = dir.join("tourism.csv");
    fs::write(&path, common::FIXTURE).unwrap();

    let mut rec = Recorder::default();
    let loaded = dataset::load(&Source::File(path.clone()), Some(&mut rec)).unwrap();

    assert_eq!(loaded.origin, Origin::File);
    assert_eq!(loaded.table.row_count(), 7);
    assert_eq!(rec.began.as_deref(), Some(path.display().to_string().as_str()));
    assert_eq!(rec.finished, Some(true));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tmp_dir("missing");
    let res = dataset::load(&Source::File(dir.join("nope.csv")), Some(&mut NullProgress));
    assert!(res.is_err());
}

#[test]
fn schema_is_checked() {
    let dir = tmp_dir("schema");
    let path = dir.join("partial.csv");
    fs::write(&path, "Town,Total number of hotels\nTyre,1\n").unwrap();

    let err = dataset::load(&Source::File(path), None).unwrap_err();
    assert!(err.to_string().contains("Total number of guest houses"));
}

#[test]
fn cache_roundtrip() {
    let dir = tmp_dir("cache");
    let path = dir.join("nested").join("tourism.csv");
    store::save_raw_at(&path, common::FIXTURE).unwrap();

    let text = store::load_raw_at(&path).unwrap();
    let table = dataset::parse_validated(&text).unwrap();
    assert_eq!(table, common::table());
}

#[test]
fn remote_fetch_is_cached() {
    let dir = tmp_dir("remote_ok");
    let cache = dir.join("tourism.csv");
    let url = serve_once("200 OK", common::FIXTURE);

    let mut rec = Recorder::default();
    let loaded = dataset::load_with_cache(&Source::Remote(url.clone()), &cache, Some(&mut rec)).unwrap();

    assert_eq!(loaded.origin, Origin::Remote);
    assert_eq!(loaded.table, common::table());
    assert_eq!(rec.began.as_deref(), Some(url.as_str()));
    assert_eq!(rec.finished, Some(true));
    assert_eq!(store::load_raw_at(&cache).unwrap(), common::FIXTURE);
}

#[test]
fn failed_fetch_falls_back_to_cache() {
    let dir = tmp_dir("remote_fallback");
    let cache = dir.join("tourism.csv");
    store::save_raw_at(&cache, common::FIXTURE).unwrap();

    let mut rec = Recorder::default();
    let loaded = dataset::load_with_cache(&Source::Remote(dead_url()), &cache, Some(&mut rec)).unwrap();

    assert_eq!(loaded.origin, Origin::Cache);
    assert_eq!(loaded.table.row_count(), 7);
    assert!(rec.lines.iter().any(|l| l.starts_with("Fetch failed")));
    assert_eq!(rec.finished, Some(true));
}

#[test]
fn failed_fetch_without_cache_is_an_error() {
    let dir = tmp_dir("remote_nocache");
    let cache = dir.join("tourism.csv");

    let mut rec = Recorder::default();
    let res = dataset::load_with_cache(&Source::Remote(dead_url()), &cache, Some(&mut rec));

    assert!(res.is_err());
    assert_eq!(rec.finished, Some(false));
    assert!(!cache.exists());
}

#[test]
fn http_error_status_is_an_error() {
    let url = serve_once("404 Not Found", "gone");
    let err = net::http_get(&url).unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[test]
fn http_error_falls_back_to_cache_too() {
    let dir = tmp_dir("remote_404");
    let cache = dir.join("tourism.csv");
    store::save_raw_at(&cache, common::FIXTURE).unwrap();

    let url = serve_once("500 Internal Server Error", "");
    let loaded = dataset::load_with_cache(&Source::Remote(url), &cache, None).unwrap();
    assert_eq!(loaded.origin, Origin::Cache);
}
