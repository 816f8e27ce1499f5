//! Media preview URL lifecycle contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service that releases preview URLs created for attached media.
pub trait MediaPreviewService {
    /// Releases `url`. Unknown or already released URLs are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the release.
    fn revoke_preview(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Preview service for hosts without object URLs.
pub struct NoopMediaPreviewService;

impl MediaPreviewService for NoopMediaPreviewService {
    fn revoke_preview(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Preview service that records released URLs.
pub struct MemoryMediaPreviewService {
    revoked: Rc<RefCell<Vec<String>>>,
}

impl MemoryMediaPreviewService {
    /// URLs released so far, oldest first.
    pub fn revoked(&self) -> Vec<String> {
        self.revoked.borrow().clone()
    }
}

impl MediaPreviewService for MemoryMediaPreviewService {
    fn revoke_preview(&self, url: &str) -> Result<(), String> {
        self.revoked.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_service_records_revocations_across_clones() {
        let service = MemoryMediaPreviewService::default();
        let handle: &dyn MediaPreviewService = &service.clone();
        handle.revoke_preview("blob:a").expect("revoke");
        handle.revoke_preview("blob:b").expect("revoke");
        assert_eq!(service.revoked(), vec!["blob:a", "blob:b"]);
    }
}
