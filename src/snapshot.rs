//! Snapshot persistence
//!
//! Detections may carry an embedded image as a data URI. The image is a
//! side payload: any decode or write failure is logged and the
//! ingestion proceeds as if no image was supplied.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

const BASE64_MARKER: &str = "base64,";

/// Decode an embedded image and write it into `dir`.
///
/// Returns the relative path to store on the record, or `None` when the
/// input has no base64 payload or persisting it failed. Two ingests
/// within the same second map to the same filename and the later write
/// wins; that overwrite is accepted.
pub fn store_snapshot(dir: &Path, data_uri: &str, timestamp: &str) -> Option<String> {
    let (_, payload) = data_uri.split_once(BASE64_MARKER)?;

    let bytes = match BASE64.decode(payload.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Snapshot base64 decode failed, ingesting without image: {}", e);
            return None;
        }
    };

    let filename = snapshot_filename(timestamp);
    let path = dir.join(&filename);

    let written = fs::create_dir_all(dir).and_then(|_| fs::write(&path, &bytes));
    if let Err(e) = written {
        tracing::warn!(
            "Snapshot write to {} failed, ingesting without image: {}",
            path.display(),
            e
        );
        return None;
    }

    tracing::debug!("Snapshot saved: {} ({} bytes)", path.display(), bytes.len());
    Some(format!("snapshots/{}", filename))
}

/// Derive a deterministic filename from the record timestamp: fractional
/// seconds dropped, `-`/`:`/`T`/`Z` stripped.
fn snapshot_filename(timestamp: &str) -> String {
    let base = timestamp.split('.').next().unwrap_or(timestamp);
    let compact: String = base
        .chars()
        .filter(|c| !matches!(c, '-' | ':' | 'T' | 'Z'))
        .collect();
    format!("img_{}.jpg", compact)
}
