// 🏘️ HOA Entity - One homeowners association filing
//
// Identity: `id`, assigned before the record reaches persistence and never interpreted.
// Everything else is plain text scraped from the filing, persisted as-is.

use serde::{Deserialize, Serialize};

/// Written in place of a missing agent name
pub const UNAVAILABLE_AGENT: &str = "UNAVAILABLE";

/// Number of persisted columns
pub const COLUMN_COUNT: usize = 6;

/// Column holding `name`, the dedup key
pub const NAME_COLUMN: usize = 1;

// ============================================================================
// HOA DATA (before an identifier is assigned)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoaData {
    pub name: String,
    pub mailing_address: String,

    #[serde(default)]
    pub agent_name: Option<String>,

    pub status: String,
    pub formed_in: String,
}

// ============================================================================
// HOA ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hoa {
    /// Opaque identifier
    pub id: String,

    /// Association name (dedup key)
    pub name: String,

    pub mailing_address: String,

    /// Registered agent, when the filing lists one
    #[serde(default)]
    pub agent_name: Option<String>,

    pub status: String,

    /// Formation date as printed on the filing
    pub formed_in: String,
}

impl Hoa {
    /// Attach an identifier to scraped data
    pub fn from_data(id: String, data: HoaData) -> Self {
        Hoa {
            id,
            name: data.name,
            mailing_address: data.mailing_address,
            agent_name: data.agent_name,
            status: data.status,
            formed_in: data.formed_in,
        }
    }

    pub fn agent_name_or_sentinel(&self) -> &str {
        self.agent_name.as_deref().unwrap_or(UNAVAILABLE_AGENT)
    }

    /// Cells in persisted column order, unescaped:
    /// id, name, mailing address, agent name, status, formation date
    pub fn to_row(&self) -> [&str; COLUMN_COUNT] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.mailing_address.as_str(),
            self.agent_name_or_sentinel(),
            self.status.as_str(),
            self.formed_in.as_str(),
        ]
    }

    /// Name as compared during dedup
    pub fn dedup_key(&self) -> &str {
        self.name.trim()
    }
}
