//! Storage endpoints: folder listing, search, move, delete, upload.

use gloo_timers::future::TimeoutFuture;

use crate::app::Liveness;
use crate::config::{
    API_DIRECTORY, API_RESOURCE, API_RESOURCE_MOVE, API_RESOURCE_SEARCH, MOCK_API,
    MOCK_LATENCY_MS, api_url,
};
use crate::models::{EntryType, StorageEntry};

use super::error::ApiError;
use super::http;

/// Fetch the listing for `path` (empty = storage root).
pub async fn folder_content(live: Liveness, path: &str) -> Result<Vec<StorageEntry>, ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(mock_listing(path));
    }

    let normalized = if path.is_empty() { "/" } else { path };
    http::get_json_with_query(live, &api_url(API_DIRECTORY), &[("path", normalized)]).await
}

/// Search entries by name across the whole storage.
pub async fn search(live: Liveness, query: &str) -> Result<Vec<StorageEntry>, ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(mock_listing("")
            .into_iter()
            .filter(|entry| entry.name.contains(query))
            .collect());
    }

    http::get_json_with_query(live, &api_url(API_RESOURCE_SEARCH), &[("query", query)]).await
}

/// Move or rename a resource.
pub async fn move_resource(live: Liveness, from: &str, to: &str) -> Result<(), ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(());
    }

    let resp: serde_json::Value =
        http::get_json_with_query(live, &api_url(API_RESOURCE_MOVE), &[("from", from), ("to", to)])
            .await?;
    let _ = resp; // updated ResourceInfo; the caller reloads the listing
    Ok(())
}

/// Delete a resource (file or folder subtree).
pub async fn delete_resource(live: Liveness, path: &str) -> Result<(), ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(());
    }

    http::delete(live, &api_url(API_RESOURCE), &[("path", path)]).await
}

/// Upload files into `path` as one multipart request.
pub async fn upload(live: Liveness, path: &str, files: &[web_sys::File]) -> Result<(), ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(());
    }

    let form = web_sys::FormData::new().map_err(|_| {
        ApiError::Request("could not create form data".to_string())
    })?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|_| ApiError::Request(format!("could not attach file {}", file.name())))?;
    }

    http::post_form(live, &api_url(API_RESOURCE), &[("path", path)], &form).await
}

/// Canned listings served in mock mode.
fn mock_listing(path: &str) -> Vec<StorageEntry> {
    if path.is_empty() {
        vec![
            StorageEntry {
                path: String::new(),
                name: "mocked_file.txt".to_string(),
                size: Some(100),
                kind: EntryType::File,
            },
            StorageEntry {
                path: String::new(),
                name: "mocked_folder1/".to_string(),
                size: None,
                kind: EntryType::Directory,
            },
        ]
    } else {
        vec![StorageEntry {
            path: String::new(),
            name: "mocked_inner_file.txt".to_string(),
            size: Some(100),
            kind: EntryType::File,
        }]
    }
}
