//! Vault file operations
//!
//! Every call targets `/vault/<path>`, where `<path>` is the cleaned,
//! percent-encoded form of the caller's vault-relative path (see
//! [`clean_path`](super::paths::clean_path)). Writes replace or extend the
//! file on the server; this client never merges content locally.

use obsidian_rest_domain::constants::{MEDIA_TYPE_MARKDOWN, MEDIA_TYPE_NOTE_JSON, VAULT_SEGMENT};
use obsidian_rest_domain::{DirectoryListing, Note, ResourceKind, Result};
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use super::client::ObsidianClient;
use super::paths::vault_segments;
use super::request::{expect_empty, expect_json, ApiRequest, NotFound};

/// Vault operations
#[derive(Debug, Clone, Copy)]
pub struct VaultService<'a> {
    client: &'a ObsidianClient,
}

impl<'a> VaultService<'a> {
    pub(crate) fn new(client: &'a ObsidianClient) -> Self {
        Self { client }
    }

    /// Retrieve a file together with its parsed metadata
    ///
    /// # Arguments
    ///
    /// * `path` - Vault-relative file path (e.g. `"daily/2024-01-01.md"`)
    ///
    /// # Returns
    ///
    /// The note snapshot: content, frontmatter, tags and file stats
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::NotFound` naming `path` on 404,
    /// `ObsidianError::InvalidInput` if `path` is empty or escapes the vault
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get_file(&self, path: &str) -> Result<Note> {
        let request = ApiRequest::new(Method::GET, self.file_url(path)?)
            .header(ACCEPT, MEDIA_TYPE_NOTE_JSON);

        let response = self.client.send(request).await?;
        let note: Note = expect_json(
            response,
            StatusCode::OK,
            Some(NotFound { kind: ResourceKind::File, name: path }),
        )
        .await?;

        debug!(bytes = note.content.len(), tags = note.tags.len(), "File retrieved");
        Ok(note)
    }

    /// List the files and subdirectories of a directory
    ///
    /// # Arguments
    ///
    /// * `path` - Vault-relative directory path; `""` or `"/"` lists the
    ///   vault root. A trailing `/` is always sent.
    ///
    /// # Returns
    ///
    /// Entry names in server order; subdirectories end with `/`
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::NotFound` (directory) naming the cleaned path,
    /// or `/` for the vault root, on 404
    #[instrument(skip(self), fields(path = %path))]
    pub async fn list_directory(&self, path: &str) -> Result<DirectoryListing> {
        let mut segments = vault_segments(path, true)?;
        let name = if segments.is_empty() { "/".to_string() } else { segments.join("/") };
        segments.push(String::new());
        let url = self.client.endpoint(std::iter::once(VAULT_SEGMENT.to_string()).chain(segments))?;

        let response = self.client.send(ApiRequest::new(Method::GET, url)).await?;
        let listing: DirectoryListing = expect_json(
            response,
            StatusCode::OK,
            Some(NotFound { kind: ResourceKind::Directory, name: &name }),
        )
        .await?;

        debug!(entries = listing.files.len(), "Directory listed");
        Ok(listing)
    }

    /// Create a file, or replace the whole content of an existing one
    ///
    /// # Arguments
    ///
    /// * `path` - Vault-relative file path
    /// * `content` - New markdown content
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::UnexpectedStatus` for anything but 204
    #[instrument(skip(self, content), fields(path = %path, bytes = content.len()))]
    pub async fn create_or_update_file(&self, path: &str, content: &str) -> Result<()> {
        let request = ApiRequest::new(Method::PUT, self.file_url(path)?)
            .body(MEDIA_TYPE_MARKDOWN, content.as_bytes().to_vec());

        let response = self.client.send(request).await?;
        expect_empty(response, StatusCode::NO_CONTENT, None).await
    }

    /// Delete a file
    ///
    /// The file is not checked for existence first; a missing file is
    /// reported however the server chooses to report it.
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::UnexpectedStatus` for anything but 204
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete_file(&self, path: &str) -> Result<()> {
        let request = ApiRequest::new(Method::DELETE, self.file_url(path)?);

        let response = self.client.send(request).await?;
        expect_empty(response, StatusCode::NO_CONTENT, None).await
    }

    /// Append content to the end of a file
    ///
    /// # Arguments
    ///
    /// * `path` - Vault-relative file path
    /// * `content` - Markdown to append; the server concatenates it as-is
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::UnexpectedStatus` for anything but 204
    #[instrument(skip(self, content), fields(path = %path, bytes = content.len()))]
    pub async fn append_to_file(&self, path: &str, content: &str) -> Result<()> {
        let request = ApiRequest::new(Method::POST, self.file_url(path)?)
            .body(MEDIA_TYPE_MARKDOWN, content.as_bytes().to_vec());

        let response = self.client.send(request).await?;
        expect_empty(response, StatusCode::NO_CONTENT, None).await
    }

    fn file_url(&self, path: &str) -> Result<Url> {
        let segments = vault_segments(path, false)?;
        self.client.endpoint(std::iter::once(VAULT_SEGMENT.to_string()).chain(segments))
    }
}
