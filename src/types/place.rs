//! Place structures.

use serde::Serialize;

/// A place: the display name, its comma-separated jurisdiction
/// hierarchy, and optional map coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    /// Jurisdiction components in source order (smallest first).
    pub hierarchy: Vec<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}
