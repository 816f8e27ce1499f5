//! Object-URL previews for files chosen in the uploader.

use platform_host::MediaPreviewService;

#[derive(Debug, Clone, PartialEq, Eq)]
/// File metadata plus the object URL created for its preview.
pub struct PreviewedFile {
    /// File name.
    pub name: String,
    /// Browser-reported MIME type (may be empty).
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// `blob:` URL; release it with [`MediaPreviewService::revoke_preview`].
    pub preview_url: String,
}

/// Creates a preview for the first file in `files`.
///
/// Returns `Ok(None)` when the list is missing or empty.
///
/// # Errors
///
/// Returns an error when the browser refuses to create the object URL.
pub fn preview_first_file(files: Option<web_sys::FileList>) -> Result<Option<PreviewedFile>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(file) = files.and_then(|files| files.get(0)) else {
            return Ok(None);
        };
        let preview_url = web_sys::Url::create_object_url_with_blob(&file)
            .map_err(|err| format!("failed to create preview url: {err:?}"))?;
        Ok(Some(PreviewedFile {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size().max(0.0) as u64,
            preview_url,
        }))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = files;
        Ok(None)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Releases `blob:` URLs through `URL.revokeObjectURL`.
pub struct WebMediaPreviewService;

impl MediaPreviewService for WebMediaPreviewService {
    fn revoke_preview(&self, url: &str) -> Result<(), String> {
        if !url.starts_with("blob:") {
            return Ok(());
        }

        #[cfg(target_arch = "wasm32")]
        {
            web_sys::Url::revoke_object_url(url)
                .map_err(|err| format!("failed to revoke preview url: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blob_urls_are_ignored() {
        assert_eq!(WebMediaPreviewService.revoke_preview("https://x/y.png"), Ok(()));
        assert_eq!(WebMediaPreviewService.revoke_preview("blob:abc"), Ok(()));
    }

    #[test]
    fn native_preview_yields_nothing() {
        assert_eq!(preview_first_file(None), Ok(None));
    }
}
