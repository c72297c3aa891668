use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub muscle_group: String,
    /// false = seeded catalog entry, true = created by the user.
    pub is_custom: bool,
}
