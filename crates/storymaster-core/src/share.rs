//! Native share with clipboard fallback.

use std::future::Future;

use crate::{capability::Capability, error::PlatformError};

/// The platform share sheet.
pub trait ShareService {
    fn share(&self, title: &str, text: &str) -> impl Future<Output = Result<(), PlatformError>>;
}

/// The system clipboard.
pub trait ClipboardService {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), PlatformError>>;
}

/// What happened to a share request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share sheet accepted the content.
    Shared,
    /// The user dismissed the share sheet.
    Cancelled,
    /// The content was placed on the clipboard instead.
    Copied,
    /// Neither sharing nor copying worked.
    Failed,
}

/// Text placed on the clipboard when native sharing is not possible.
pub fn clipboard_text(title: &str, text: &str) -> String {
    format!("{title}: {text}")
}

/// Share through the platform sheet, falling back to the clipboard.
///
/// Never fails: every platform error ends in one of the [`ShareOutcome`]s.
pub async fn share_or_copy<S, C>(
    share: &Capability<S>,
    clipboard: &Capability<C>,
    title: &str,
    text: &str,
) -> ShareOutcome
where
    S: ShareService,
    C: ClipboardService,
{
    if let Some(share) = share.get() {
        match share.share(title, text).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(PlatformError::Cancelled) => {
                log::debug!("share dismissed by user");
                return ShareOutcome::Cancelled;
            }
            Err(err) => log::warn!("native share failed, falling back to clipboard: {err}"),
        }
    }

    let Some(clipboard) = clipboard.get() else {
        log::warn!("neither share nor clipboard is available");
        return ShareOutcome::Failed;
    };

    match clipboard.write_text(&clipboard_text(title, text)).await {
        Ok(()) => ShareOutcome::Copied,
        Err(err) => {
            log::warn!("clipboard write failed: {err}");
            ShareOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeShare {
        result: Result<(), PlatformError>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl FakeShare {
        fn new(result: Result<(), PlatformError>) -> Self {
            Self {
                result,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ShareService for FakeShare {
        async fn share(&self, title: &str, text: &str) -> Result<(), PlatformError> {
            self.calls.borrow_mut().push((title.to_string(), text.to_string()));
            self.result.clone()
        }
    }

    struct FakeClipboard {
        result: Result<(), PlatformError>,
        written: RefCell<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(result: Result<(), PlatformError>) -> Self {
            Self {
                result,
                written: RefCell::new(Vec::new()),
            }
        }
    }

    impl ClipboardService for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), PlatformError> {
            self.written.borrow_mut().push(text.to_string());
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_native_share_preferred() {
        let share = Capability::Available(FakeShare::new(Ok(())));
        let clipboard = Capability::Available(FakeClipboard::new(Ok(())));

        let outcome = share_or_copy(&share, &clipboard, "Build tension", "Add obstacles").await;

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(share.get().unwrap().calls.borrow().len(), 1);
        assert!(clipboard.get().unwrap().written.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_is_not_an_error() {
        let share = Capability::Available(FakeShare::new(Err(PlatformError::Cancelled)));
        let clipboard = Capability::Available(FakeClipboard::new(Ok(())));

        let outcome = share_or_copy(&share, &clipboard, "t", "x").await;

        assert_eq!(outcome, ShareOutcome::Cancelled);
        assert!(clipboard.get().unwrap().written.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_share_copies_formatted_text() {
        let share: Capability<FakeShare> = Capability::Unavailable;
        let clipboard = Capability::Available(FakeClipboard::new(Ok(())));

        let outcome = share_or_copy(&share, &clipboard, "StoryMaster", "Tell stories").await;

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(
            *clipboard.get().unwrap().written.borrow(),
            vec!["StoryMaster: Tell stories".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rejected_share_falls_back_to_clipboard() {
        let share = Capability::Available(FakeShare::new(Err(PlatformError::rejected("NotAllowedError"))));
        let clipboard = Capability::Available(FakeClipboard::new(Ok(())));

        let outcome = share_or_copy(&share, &clipboard, "a", "b").await;
        assert_eq!(outcome, ShareOutcome::Copied);
    }

    #[tokio::test]
    async fn test_clipboard_rejection_is_swallowed() {
        let share: Capability<FakeShare> = Capability::Unavailable;
        let clipboard = Capability::Available(FakeClipboard::new(Err(PlatformError::rejected("denied"))));

        let outcome = share_or_copy(&share, &clipboard, "a", "b").await;
        assert_eq!(outcome, ShareOutcome::Failed);
    }

    #[tokio::test]
    async fn test_nothing_available() {
        let share: Capability<FakeShare> = Capability::Unavailable;
        let clipboard: Capability<FakeClipboard> = Capability::Unavailable;

        assert_eq!(share_or_copy(&share, &clipboard, "a", "b").await, ShareOutcome::Failed);
    }
}
