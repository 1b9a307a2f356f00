//! Pastebin Paste Provider
//!
//! Implements the `PasteProvider` port on top of Pastebin's form-encoded
//! `api_post.php` endpoint, plus the file and directory sharing helpers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use vss_domain::constants::{PASTE_BAD_REQUEST_PREFIX, PASTE_DEFAULT_DIRECTORY_EXTENSIONS};
use vss_domain::error::{Error, Result};
use vss_domain::ports::{FormFields, HttpGateway, PasteProvider};
use vss_domain::value_objects::{
    PasteExpiration, PastePrivacy, PasteRequest, PasteResponse, format_for_extension,
};

use crate::constants::{
    PASTEBIN_FIELD_CODE, PASTEBIN_FIELD_DEV_KEY, PASTEBIN_FIELD_EXPIRE_DATE,
    PASTEBIN_FIELD_FORMAT, PASTEBIN_FIELD_NAME, PASTEBIN_FIELD_OPTION, PASTEBIN_FIELD_PRIVATE,
    PASTEBIN_OPTION_PASTE, PASTEBIN_POST_ENDPOINT,
};
use crate::utils::{HttpResponseUtils, ensure_dir, ensure_file, file_name_of};

const PROVIDER_NAME: &str = "Pastebin";

/// Pastebin paste provider
///
/// Receives its gateway via constructor injection; the gateway's credential
/// is the Pastebin developer key.
///
/// ## Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use vss_domain::value_objects::PasteRequest;
/// use vss_providers::http::{HttpClientConfig, ReqwestHttpGateway};
/// use vss_providers::pastebin::PastebinClient;
///
/// async fn example() -> vss_domain::Result<()> {
///     let gateway = ReqwestHttpGateway::with_config(
///         "https://pastebin.com/api",
///         "dev-key",
///         &HttpClientConfig::default(),
///     )?;
///     let client = PastebinClient::new(Arc::new(gateway));
///     let paste = client
///         .create_paste(&PasteRequest::new("fn main() {}", "main.rs"))
///         .await?;
///     println!("{}", paste.url);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PastebinClient {
    gateway: Arc<dyn HttpGateway>,
}

impl fmt::Debug for PastebinClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PastebinClient")
            .field("base_url", &self.gateway.base_url())
            .finish_non_exhaustive()
    }
}

impl PastebinClient {
    /// Create a new Pastebin client
    pub fn new(gateway: Arc<dyn HttpGateway>) -> Self {
        Self { gateway }
    }

    /// Gateway this client posts through
    pub fn gateway(&self) -> &Arc<dyn HttpGateway> {
        &self.gateway
    }

    fn form_fields(&self, request: &PasteRequest) -> FormFields {
        vec![
            (PASTEBIN_FIELD_DEV_KEY.into(), self.gateway.credential().into()),
            (PASTEBIN_FIELD_OPTION.into(), PASTEBIN_OPTION_PASTE.into()),
            (PASTEBIN_FIELD_CODE.into(), request.content.clone()),
            (
                PASTEBIN_FIELD_PRIVATE.into(),
                request.privacy.code().to_string(),
            ),
            (
                PASTEBIN_FIELD_EXPIRE_DATE.into(),
                request.expiration.as_token().into(),
            ),
            (PASTEBIN_FIELD_NAME.into(), request.title.clone()),
            (PASTEBIN_FIELD_FORMAT.into(), request.format.clone()),
        ]
    }

    /// Create a paste
    ///
    /// Pastebin signals some failures with a 200 status and a body starting
    /// with `Bad API request`; both that and any non-2xx status are errors.
    pub async fn create_paste(&self, request: &PasteRequest) -> Result<PasteResponse> {
        info!(title = %request.title, "Creating paste");
        debug!(url = %self.gateway.build_url(PASTEBIN_POST_ENDPOINT), "Posting paste");

        let response = self
            .gateway
            .post_form(PASTEBIN_POST_ENDPOINT, self.form_fields(request))
            .await
            .inspect_err(|e| error!(title = %request.title, error = %e, "Failed to create paste"))?;

        debug!(status = response.status, body = %response.body, "Pastebin replied");
        HttpResponseUtils::ensure_success(&response, PROVIDER_NAME)?;

        if response.body.starts_with(PASTE_BAD_REQUEST_PREFIX) {
            error!(body = %response.body, "Pastebin rejected the paste");
            return Err(Error::api(
                response.status,
                format!("{PROVIDER_NAME} error: {}", response.body),
            ));
        }

        let paste = PasteResponse::from_url(response.body);
        info!(url = %paste.url, "Paste created successfully");
        Ok(paste)
    }

    /// Share one source file as a paste
    ///
    /// The title is the file name and the syntax format follows the
    /// extension.
    pub async fn share_file<P: AsRef<Path>>(
        &self,
        path: P,
        privacy: PastePrivacy,
        expiration: PasteExpiration,
    ) -> Result<PasteResponse> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Sharing file");

        if let Err(e) = ensure_file(path).await {
            error!(path = %path.display(), error = %e, "Source file not accessible");
            return Err(e);
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to read {}", path.display()), e)
        })?;
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();

        let request = PasteRequest::new(content, file_name_of(path))
            .with_privacy(privacy)
            .with_expiration(expiration)
            .with_format(format_for_extension(&extension));

        self.create_paste(&request).await
    }

    /// Share every matching file below `path`, one paste per file
    ///
    /// `extensions` defaults to `.cs`, `.csproj` and `.json`; entries may be
    /// given with or without the leading dot and match case-insensitively.
    /// Files that fail are logged and skipped, so the result holds only the
    /// successful pastes. Order follows directory enumeration.
    pub async fn share_directory<P: AsRef<Path>>(
        &self,
        path: P,
        extensions: Option<&[&str]>,
        privacy: PastePrivacy,
        expiration: PasteExpiration,
    ) -> Result<Vec<PasteResponse>> {
        let root = path.as_ref().to_path_buf();
        info!(path = %root.display(), "Sharing directory");
        ensure_dir(&root).await?;

        let allowed = normalize_extensions(extensions.unwrap_or(PASTE_DEFAULT_DIRECTORY_EXTENSIONS));
        let scan_root = root.clone();
        let files = tokio::task::spawn_blocking(move || collect_files(&scan_root, &allowed))
            .await
            .map_err(|e| Error::io_with_source("Directory scan aborted", e))?;

        info!(count = files.len(), "Found files to share");
        let mut responses = Vec::with_capacity(files.len());

        for file in &files {
            match self.share_file(file, privacy, expiration).await {
                Ok(response) => responses.push(response),
                Err(e) => warn!(path = %file.display(), error = %e, "Failed to share file"),
            }
        }

        info!(
            shared = responses.len(),
            total = files.len(),
            "Directory shared"
        );
        Ok(responses)
    }
}

fn normalize_extensions(extensions: &[&str]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn collect_files(root: &Path, allowed: &[String]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
                .is_some_and(|ext| allowed.contains(&ext))
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

#[async_trait]
impl PasteProvider for PastebinClient {
    async fn create_paste(&self, request: &PasteRequest) -> Result<PasteResponse> {
        PastebinClient::create_paste(self, request).await
    }

    fn provider_name(&self) -> &str {
        "pastebin"
    }
}
