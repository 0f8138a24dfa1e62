use serde::{Deserialize, Serialize};

/// Row of the `industry` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryRead {
    pub id: i64,
    pub name: String,
}
