//! Leptos view components for the composer surface.

mod composer_form;
mod file_uploader;
mod header;
mod insights_panel;
mod login;
mod platform_icon;
mod platform_picker;
mod preview_modal;
pub mod primitives;
mod recent_posts;
mod shell;

pub use composer_form::PostComposer;
pub use file_uploader::FileUploader;
pub use header::Header;
pub use insights_panel::CaptionInsightsPanel;
pub use login::LandingPage;
pub use platform_icon::PlatformIcon;
pub use platform_picker::PlatformPicker;
pub use preview_modal::{PostPreviewModal, PreviewLayout};
pub use recent_posts::RecentPosts;
pub use shell::ComposerShell;
