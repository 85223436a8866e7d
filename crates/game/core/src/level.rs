//! Level records: placed objects, difficulty tiers, and identifier classes.
//!
//! Built-in levels use numeric ids (`"1"`, `"2"`); user-authored levels use a
//! `custom-` prefix and AI-generated ones `custom-ai-`. Only custom levels are
//! persisted or editable.

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Prefix shared by every user-authored or generated level id.
pub const CUSTOM_PREFIX: &str = "custom";
/// Prefix of levels produced by the generation workflow.
pub const AI_PREFIX: &str = "custom-ai-";

// ============================================================================
// Objects
// ============================================================================

/// Closed set of gameplay object kinds.
///
/// Serialized as the `SCREAMING_SNAKE_CASE` tags used by stored records
/// (`"BLOCK"`, `"PORTAL_SHIP"`, ...); any other tag is rejected.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ObjectKind {
    Block,
    Spike,
    PortalShip,
    PortalBall,
    PortalUfo,
    PortalWave,
    PortalRobot,
    PortalSpider,
    PortalSwing,
    PortalJetpack,
    PortalCube,
    Coin,
}

impl ObjectKind {
    /// Returns true for the mode-switching portals.
    pub const fn is_portal(&self) -> bool {
        !matches!(self, Self::Block | Self::Spike | Self::Coin)
    }

    /// Returns true for kinds that end the run on contact.
    pub const fn is_hazard(&self) -> bool {
        matches!(self, Self::Spike)
    }

    /// Returns true for kinds the player can stand on.
    pub const fn is_solid(&self) -> bool {
        matches!(self, Self::Block)
    }
}

/// A single object placed on the track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameObject {
    /// Unique within its level.
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ObjectKind,
    pub x: f64,
    pub y: f64,
}

impl GameObject {
    pub fn new(id: impl Into<String>, kind: ObjectKind, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
        }
    }
}

// ============================================================================
// Levels
// ============================================================================

/// Difficulty tier shown on the level card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Demon,
}

impl Difficulty {
    /// Single-letter badge used by compact listings.
    pub fn badge(&self) -> char {
        self.as_ref().chars().next().unwrap_or('?')
    }
}

/// A playable level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LevelData {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub objects: Vec<GameObject>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub best_score: Option<u32>,
}

impl LevelData {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        difficulty: Difficulty,
        objects: Vec<GameObject>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            difficulty,
            objects,
            best_score: None,
        }
    }

    /// Returns true for user-authored and generated levels.
    pub fn is_custom(&self) -> bool {
        is_custom_id(&self.id)
    }

    /// Returns true for levels produced by the generation workflow.
    pub fn is_ai_generated(&self) -> bool {
        self.id.starts_with(AI_PREFIX)
    }

    /// Right-most object edge, or 0 for an empty level.
    pub fn track_length(&self) -> f64 {
        self.objects
            .iter()
            .map(|object| object.x + crate::GameConfig::BLOCK_SIZE)
            .fold(0.0, f64::max)
    }

    /// Number of coins placed on the track.
    pub fn coin_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|object| object.kind == ObjectKind::Coin)
            .count()
    }

    /// Returns the first object id that appears more than once, if any.
    pub fn duplicate_object_id(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.objects
            .iter()
            .map(|object| object.id.as_str())
            .find(|id| !seen.insert(*id))
    }
}

/// Returns true if `id` names a custom (persisted, editable) level.
pub fn is_custom_id(id: &str) -> bool {
    id.starts_with(CUSTOM_PREFIX)
}

/// Builds the id of a user-authored level created at `timestamp_ms`.
pub fn custom_level_id(timestamp_ms: i64) -> String {
    format!("{CUSTOM_PREFIX}-{timestamp_ms}")
}

/// Builds the id of a generated level created at `timestamp_ms`.
pub fn ai_level_id(timestamp_ms: i64) -> String {
    format!("{AI_PREFIX}{timestamp_ms}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn id_classes() {
        assert!(is_custom_id(&custom_level_id(42)));
        assert!(is_custom_id(&ai_level_id(42)));
        assert!(!is_custom_id("1"));

        let level = LevelData::new(ai_level_id(7), "Gen", Difficulty::Medium, vec![]);
        assert_eq!(level.id, "custom-ai-7");
        assert!(level.is_custom());
        assert!(level.is_ai_generated());
    }

    #[test]
    fn object_kind_tags() {
        assert_eq!(ObjectKind::PortalShip.as_ref(), "PORTAL_SHIP");
        assert_eq!("COIN".parse::<ObjectKind>().ok(), Some(ObjectKind::Coin));
        assert!("LASER".parse::<ObjectKind>().is_err());
        assert_eq!(ObjectKind::iter().filter(ObjectKind::is_portal).count(), 9);
    }

    #[test]
    fn duplicate_ids_are_detected() {
        let level = LevelData::new(
            "custom-1",
            "Dup",
            Difficulty::Easy,
            vec![
                GameObject::new("a", ObjectKind::Block, 0.0, 360.0),
                GameObject::new("b", ObjectKind::Spike, 40.0, 360.0),
                GameObject::new("a", ObjectKind::Coin, 80.0, 300.0),
            ],
        );
        assert_eq!(level.duplicate_object_id(), Some("a"));
        assert_eq!(level.coin_count(), 1);
        assert_eq!(level.track_length(), 120.0);
    }

    #[test]
    fn difficulty_badges() {
        let badges: String = Difficulty::iter().map(|d| d.badge()).collect();
        assert_eq!(badges, "EMHD");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stored_record_shape() {
        let json = r#"{"id":"custom-9","name":"Stored","difficulty":"Hard",
            "objects":[{"id":"s1","type":"PORTAL_UFO","x":500,"y":360}],"bestScore":12}"#;
        let level: LevelData = serde_json::from_str(json).unwrap();
        assert_eq!(level.difficulty, Difficulty::Hard);
        assert_eq!(level.objects[0].kind, ObjectKind::PortalUfo);
        assert_eq!(level.best_score, Some(12));

        let unknown = r#"{"id":"x","name":"x","difficulty":"Easy",
            "objects":[{"id":"s1","type":"LASER","x":0,"y":0}]}"#;
        assert!(serde_json::from_str::<LevelData>(unknown).is_err());
    }
}
