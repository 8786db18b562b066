//! Transport to the remote listing service.
//!
//! Every request runs on its own worker thread and reports back over an mpsc
//! channel; the UI thread drains those channels once per frame. Events carry
//! the request id and target path they were issued for, so the navigation
//! controller can discard results that arrive after a newer navigation.

use std::fmt::Write as _;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;

use crate::logger;
use crate::model::DirectoryEntry;
use crate::path;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

static AGENT: Lazy<ureq::Agent> =
    Lazy::new(|| ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build());

#[derive(Debug)]
pub enum ListEvent {
    Listed {
        request_id: u64,
        path: String,
        entries: Vec<DirectoryEntry>,
        /// Malformed elements dropped while parsing the response.
        skipped: usize,
    },
    Failed {
        request_id: u64,
        path: String,
        message: String,
    },
}

#[derive(Debug)]
pub enum TransferEvent {
    Finished { name: String, local_path: String },
    Failed { name: String, message: String },
}

fn results_url(base_url: &str) -> String {
    format!("{}/results", base_url.trim_end_matches('/'))
}

/// Download resource for a remote path, fully encoded and ready to hand to a
/// browser or to the HTTP agent.
pub fn download_url(base_url: &str, remote_path: &str) -> String {
    format!(
        "{}/download?path={}",
        base_url.trim_end_matches('/'),
        percent_encode(remote_path)
    )
}

/// RFC 3986 unreserved characters pass through, everything else becomes a
/// %XX-encoded UTF-8 byte, so the whole path survives as one query value.
pub fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Parse a listing response. One malformed element never fails the batch; it
/// is skipped with a logged warning. Entry paths are re-normalized so the
/// table only ever holds resolver-form paths.
fn parse_entries(raw: &serde_json::Value) -> Result<(Vec<DirectoryEntry>, usize)> {
    let items = raw
        .as_array()
        .ok_or_else(|| anyhow!("listing response is not a JSON array"))?;

    let mut entries = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match serde_json::from_value::<DirectoryEntry>(item.clone()) {
            Ok(mut entry) => {
                entry.path = path::resolve(&entry.path);
                entries.push(entry);
            }
            Err(err) => {
                skipped += 1;
                logger::log_line(
                    logger::APP_LOG,
                    &format!("Skipping malformed listing entry: {err}"),
                );
            }
        }
    }
    Ok((entries, skipped))
}

fn fetch_listing(base_url: &str, subfolder: &str) -> Result<(Vec<DirectoryEntry>, usize)> {
    let response = AGENT
        .get(&results_url(base_url))
        .query("subfolder", subfolder)
        .call()
        .context("listing request failed")?;
    let raw: serde_json::Value = response
        .into_json()
        .context("listing response is not valid JSON")?;
    parse_entries(&raw)
}

/// Fire a listing request for `path` on a worker thread. The eventual
/// `ListEvent` carries `request_id` so the caller can reconcile it against
/// whatever navigation is current by then.
pub fn spawn_list(base_url: String, path: String, request_id: u64, tx: Sender<ListEvent>) {
    thread::spawn(move || {
        let event = match fetch_listing(&base_url, &path) {
            Ok((entries, skipped)) => ListEvent::Listed {
                request_id,
                path,
                entries,
                skipped,
            },
            Err(err) => {
                logger::log_line(
                    logger::APP_LOG,
                    &format!("Listing {path:?} failed: {err:#}"),
                );
                ListEvent::Failed {
                    request_id,
                    path,
                    message: format!("{err:#}"),
                }
            }
        };
        let _ = tx.send(event);
    });
}

fn save_resource(base_url: &str, remote_path: &str, dest: &std::path::Path) -> Result<()> {
    let response = AGENT
        .get(&download_url(base_url, remote_path))
        .call()
        .context("download request failed")?;
    let mut reader = response.into_reader();
    let mut file = std::fs::File::create(dest)
        .with_context(|| format!("cannot create {}", dest.display()))?;
    std::io::copy(&mut reader, &mut file).context("writing download to disk failed")?;
    Ok(())
}

/// Fetch the download resource for `remote_path` and write it to `dest`.
pub fn spawn_download(
    base_url: String,
    remote_path: String,
    name: String,
    dest: std::path::PathBuf,
    tx: Sender<TransferEvent>,
) {
    thread::spawn(move || {
        let event = match save_resource(&base_url, &remote_path, &dest) {
            Ok(()) => TransferEvent::Finished {
                name,
                local_path: dest.display().to_string(),
            },
            Err(err) => {
                logger::log_line(
                    logger::APP_LOG,
                    &format!("Download of {remote_path:?} failed: {err:#}"),
                );
                TransferEvent::Failed {
                    name,
                    message: format!("{err:#}"),
                }
            }
        };
        let _ = tx.send(event);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_construction_trims_trailing_slash() {
        assert_eq!(
            results_url("http://host:8070/base/"),
            "http://host:8070/base/results"
        );
        assert_eq!(
            download_url("http://host:8070", "a/b.txt"),
            "http://host:8070/download?path=a%2Fb.txt"
        );
    }

    #[test]
    fn percent_encoding_covers_reserved_and_utf8() {
        assert_eq!(percent_encode("a/b c.txt"), "a%2Fb%20c.txt");
        assert_eq!(percent_encode("plain-name_1.txt"), "plain-name_1.txt");
        assert_eq!(percent_encode("ä"), "%C3%A4");
    }

    #[test]
    fn parse_skips_malformed_elements() {
        let raw = json!([
            {"name": "runs", "path": "runs", "size": 0, "modified": "", "isDirectory": true},
            {"name": "broken"},
            {"name": "out.txt", "path": "/runs//out.txt", "size": 42, "modified": "2024-01-01", "isDirectory": false},
        ]);
        let (entries, skipped) = parse_entries(&raw).unwrap();
        assert_eq!(skipped, 1);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "runs");
        // Paths are re-normalized on the way in.
        assert_eq!(entries[1].path, "runs/out.txt");
    }

    #[test]
    fn parse_tolerates_missing_optional_fields() {
        let raw = json!([{"name": "x.bin", "path": "x.bin", "isDirectory": false}]);
        let (entries, skipped) = parse_entries(&raw).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(entries[0].size, 0);
        assert_eq!(entries[0].modified, "");
    }

    #[test]
    fn parse_rejects_non_array_payloads() {
        assert!(parse_entries(&json!({"error": "nope"})).is_err());
    }
}
