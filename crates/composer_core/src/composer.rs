//! Composer actions, side-effect intents, and transition logic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::PlatformCatalog,
    config::ComposerConfig,
    identifier::PlatformId,
    media::{validate_media, MediaCandidate, PostMedia},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Post handed to the feed on submission.
pub struct Post {
    /// Caption text as entered.
    pub caption: String,
    /// Attached media, if any.
    pub media: Option<PostMedia>,
    /// Destination platforms in selection order.
    pub platforms: Vec<PlatformId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Composer lifecycle.
pub enum ComposerPhase {
    /// Accepting edits.
    #[default]
    Editing,
    /// A post was built and is waiting for the feed to take it.
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why the submit control is disabled.
pub enum SubmitBlocker {
    /// The caption is empty.
    EmptyCaption,
    /// No platform is selected.
    NoPlatforms,
    /// The previous submission has not been handled yet.
    InFlight,
}

impl std::fmt::Display for SubmitBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::EmptyCaption => "caption is empty",
            Self::NoPlatforms => "no platform selected",
            Self::InFlight => "submission in progress",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Composer form state.
pub struct ComposerState {
    /// Caption being edited.
    pub caption: String,
    /// Accepted attachment.
    pub media: Option<PostMedia>,
    /// Message from the last rejected attachment.
    pub media_error: Option<String>,
    /// Selected platforms in selection order.
    pub selected: Vec<PlatformId>,
    /// Platforms the user has connected.
    pub connected: BTreeSet<PlatformId>,
    /// Platform awaiting connect confirmation.
    pub pending_connection: Option<PlatformId>,
    /// Lifecycle phase.
    pub phase: ComposerPhase,
    /// Largest accepted attachment in bytes.
    pub max_media_bytes: u64,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new(&ComposerConfig::default())
    }
}

impl ComposerState {
    /// Empty form using the limits in `config`.
    pub fn new(config: &ComposerConfig) -> Self {
        Self {
            caption: String::new(),
            media: None,
            media_error: None,
            selected: Vec::new(),
            connected: BTreeSet::new(),
            pending_connection: None,
            phase: ComposerPhase::Editing,
            max_media_bytes: config.max_media_bytes,
        }
    }

    /// Returns whether `id` is connected.
    pub fn is_connected(&self, id: &PlatformId) -> bool {
        self.connected.contains(id)
    }

    /// Returns whether `id` is selected.
    pub fn is_selected(&self, id: &PlatformId) -> bool {
        self.selected.contains(id)
    }

    /// First reason the post cannot be submitted, if any.
    pub fn submit_blocker(&self) -> Option<SubmitBlocker> {
        if self.phase == ComposerPhase::Submitted {
            Some(SubmitBlocker::InFlight)
        } else if self.caption.is_empty() {
            Some(SubmitBlocker::EmptyCaption)
        } else if self.selected.is_empty() {
            Some(SubmitBlocker::NoPlatforms)
        } else {
            None
        }
    }

    /// Returns whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.submit_blocker().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_composer`].
pub enum ComposerAction {
    /// Replace the caption text.
    SetCaption(String),
    /// Attach a file, replacing any current media when it validates.
    SelectMedia(MediaCandidate),
    /// Detach the current media.
    RemoveMedia,
    /// Tile click: toggles a connected platform or asks to connect a disconnected one.
    ActivatePlatform(PlatformId),
    /// Toggle selection of a connected platform.
    ToggleSelection(PlatformId),
    /// Open the connect dialog for a platform.
    RequestConnection(PlatformId),
    /// Confirm the pending connection; the platform becomes connected and selected.
    ConfirmConnection,
    /// Dismiss the connect dialog.
    CancelConnection,
    /// Build a post from the current form.
    Submit,
    /// The feed accepted the submitted post; return to editing.
    SubmissionHandled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_composer`] for the runtime to execute.
pub enum ComposerEffect {
    /// Release a media preview URL.
    RevokeMediaPreview(String),
    /// Hand a new post to the feed.
    PublishPost(Post),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
pub enum ComposerError {
    /// The platform id is not in the catalog.
    #[error("unknown platform `{0}`")]
    UnknownPlatform(PlatformId),
    /// The platform must be connected before it can be selected.
    #[error("platform `{0}` is not connected")]
    NotConnected(PlatformId),
    /// No connect dialog is open.
    #[error("no pending platform connection")]
    NoPendingConnection,
    /// The submit gate is closed.
    #[error("cannot submit: {0}")]
    SubmitBlocked(SubmitBlocker),
}

/// Applies a [`ComposerAction`] and collects the resulting side effects.
///
/// A rejected attachment is reported through [`ComposerState::media_error`] and a
/// [`ComposerEffect::RevokeMediaPreview`] for its preview; it is not a reducer error and the
/// previously attached media stays in place.
///
/// # Errors
///
/// Returns [`ComposerError`] when the action references an unknown or disconnected platform,
/// confirms a connection that was never requested, or submits while the gate is closed.
pub fn reduce_composer(
    state: &mut ComposerState,
    catalog: &PlatformCatalog,
    action: ComposerAction,
) -> Result<Vec<ComposerEffect>, ComposerError> {
    let mut effects = Vec::new();
    match action {
        ComposerAction::SetCaption(caption) => {
            state.caption = caption;
        }
        ComposerAction::SelectMedia(candidate) => {
            let rejected_preview = candidate.preview_url.clone();
            match validate_media(candidate, state.max_media_bytes) {
                Ok(media) => {
                    if let Some(previous) = state.media.replace(media) {
                        effects.push(ComposerEffect::RevokeMediaPreview(previous.preview_url));
                    }
                    state.media_error = None;
                }
                Err(err) => {
                    state.media_error = Some(err.to_string());
                    if !rejected_preview.is_empty() {
                        effects.push(ComposerEffect::RevokeMediaPreview(rejected_preview));
                    }
                }
            }
        }
        ComposerAction::RemoveMedia => {
            if let Some(previous) = state.media.take() {
                effects.push(ComposerEffect::RevokeMediaPreview(previous.preview_url));
            }
            state.media_error = None;
        }
        ComposerAction::ActivatePlatform(id) => {
            ensure_known(catalog, &id)?;
            if state.is_connected(&id) {
                toggle_selection(state, id);
            } else {
                state.pending_connection = Some(id);
            }
        }
        ComposerAction::ToggleSelection(id) => {
            ensure_known(catalog, &id)?;
            if !state.is_connected(&id) {
                return Err(ComposerError::NotConnected(id));
            }
            toggle_selection(state, id);
        }
        ComposerAction::RequestConnection(id) => {
            ensure_known(catalog, &id)?;
            state.pending_connection = Some(id);
        }
        ComposerAction::ConfirmConnection => {
            let id = state
                .pending_connection
                .take()
                .ok_or(ComposerError::NoPendingConnection)?;
            state.connected.insert(id.clone());
            if !state.is_selected(&id) {
                state.selected.push(id);
            }
        }
        ComposerAction::CancelConnection => {
            state
                .pending_connection
                .take()
                .ok_or(ComposerError::NoPendingConnection)?;
        }
        ComposerAction::Submit => {
            if let Some(blocker) = state.submit_blocker() {
                return Err(ComposerError::SubmitBlocked(blocker));
            }
            let post = Post {
                caption: std::mem::take(&mut state.caption),
                media: state.media.take(),
                platforms: state.selected.clone(),
            };
            state.media_error = None;
            state.phase = ComposerPhase::Submitted;
            effects.push(ComposerEffect::PublishPost(post));
        }
        ComposerAction::SubmissionHandled => {
            state.phase = ComposerPhase::Editing;
        }
    }
    Ok(effects)
}

fn ensure_known(catalog: &PlatformCatalog, id: &PlatformId) -> Result<(), ComposerError> {
    if catalog.contains(id) {
        Ok(())
    } else {
        Err(ComposerError::UnknownPlatform(id.clone()))
    }
}

fn toggle_selection(state: &mut ComposerState, id: PlatformId) {
    if let Some(index) = state.selected.iter().position(|selected| selected == &id) {
        state.selected.remove(index);
    } else {
        state.selected.push(id);
    }
}
