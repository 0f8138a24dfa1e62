use serde::{Deserialize, Serialize};

/// Row of the `location` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRead {
    pub id: i64,
    pub city: String,
    /// State or province, absent for many countries
    pub state: Option<String>,
    pub country: String,
}
