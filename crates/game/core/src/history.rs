//! Generation history records consumed by the editor.

use crate::level::GameObject;

/// One successful generation, kept so the editor can re-import its objects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiHistoryEntry {
    /// Id of the level created from this generation.
    pub id: String,
    pub name: String,
    /// Prompt text the level was generated from.
    pub prompt: String,
    pub objects: Vec<GameObject>,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}
