use crate::UserId;

use serde::{Deserialize, Serialize};

/// The user fields the board needs for avatars and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A project or task membership entry, sent as `{ "user": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user: UserSummary,
}

impl Member {
    pub fn user_id(&self) -> &UserId {
        &self.user.id
    }
}
