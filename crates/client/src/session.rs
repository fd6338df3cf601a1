use std::fmt;

use shared_types::SessionSettings;

/// Credentials every backend request is made with.
///
/// Handed to the view layer by whatever performed the sign-in; this crate
/// never issues or refreshes tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub id_token: String,
    pub user_id: String,
}

impl Session {
    pub fn new(id_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id_token: id_token.into(),
            user_id: user_id.into(),
        }
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.id_token)
    }
}

impl From<&SessionSettings> for Session {
    fn from(settings: &SessionSettings) -> Self {
        Self::new(settings.id_token.clone(), settings.user_id.clone())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id_token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}
