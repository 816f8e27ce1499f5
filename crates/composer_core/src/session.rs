//! Mock authentication model.

use serde::{Deserialize, Serialize};

/// Email used when the email sign-in is submitted without an address.
pub const DEFAULT_EMAIL: &str = "user@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Sign-in method.
pub enum AuthProvider {
    /// Google account.
    Google,
    /// Apple ID.
    Apple,
    /// Email address.
    Email,
}

impl AuthProvider {
    /// Label shown on the sign-in button.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Apple => "Apple",
            Self::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Signed-in user record persisted under the session key.
pub struct User {
    /// Opaque user id.
    pub id: String,
    /// Sign-in method used.
    pub provider: AuthProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Display name.
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Email address.
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Avatar URL.
    pub image: Option<String>,
}

impl User {
    /// Name shown in the header and profile dialog.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("User")
    }

    /// Single uppercase glyph used when no avatar is set.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .find(|ch| ch.is_alphanumeric())
            .map(|ch| ch.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Authentication state of the app.
pub enum AuthState {
    /// The session store has not been read yet.
    #[default]
    Loading,
    /// No user is signed in.
    SignedOut,
    /// A user is signed in.
    SignedIn(User),
}

impl AuthState {
    /// Signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// Synthesizes the user produced by a mock sign-in.
///
/// Google and Apple get fixed names and avatars. Email sign-in keeps the entered address and
/// falls back to [`DEFAULT_EMAIL`] when it is blank.
pub fn mock_user(provider: AuthProvider, email: Option<&str>, id: impl Into<String>) -> User {
    let email = email
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .unwrap_or(DEFAULT_EMAIL)
        .to_string();
    let (name, image) = match provider {
        AuthProvider::Google => (
            Some("Google User"),
            Some("https://randomuser.me/api/portraits/women/68.jpg"),
        ),
        AuthProvider::Apple => (
            Some("Apple User"),
            Some("https://randomuser.me/api/portraits/men/32.jpg"),
        ),
        AuthProvider::Email => (None, None),
    };
    User {
        id: id.into(),
        provider,
        name: name.map(str::to_string),
        email: Some(email),
        image: image.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn google_user_has_fixed_profile() {
        let user = mock_user(AuthProvider::Google, None, "u1");
        assert_eq!(user.name.as_deref(), Some("Google User"));
        assert_eq!(user.email.as_deref(), Some(DEFAULT_EMAIL));
        assert_eq!(user.initial(), "G");
    }

    #[test]
    fn email_user_keeps_entered_address() {
        let user = mock_user(AuthProvider::Email, Some(" ana@example.org "), "u2");
        assert_eq!(user.email.as_deref(), Some("ana@example.org"));
        assert_eq!(user.name, None);
        assert_eq!(user.display_name(), "ana@example.org");
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn user_json_uses_lowercase_provider_and_omits_missing_fields() {
        let user = mock_user(AuthProvider::Email, None, "u3");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":"u3","provider":"email","email":"user@example.com"}"#
        );
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn auth_state_exposes_user_only_when_signed_in() {
        assert_eq!(AuthState::default().user(), None);
        assert_eq!(AuthState::SignedOut.user(), None);
        let user = mock_user(AuthProvider::Apple, None, "u4");
        assert_eq!(AuthState::SignedIn(user.clone()).user(), Some(&user));
    }
}
