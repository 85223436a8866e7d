//! Levels compiled into the game. Never persisted, never editable.

use crate::level::{Difficulty, GameObject, LevelData, ObjectKind};

/// Returns the built-in level list in display order.
pub fn builtin_levels() -> Vec<LevelData> {
    use ObjectKind::{Block, Spike};

    vec![
        LevelData::new(
            "1",
            "Puppet Genesis",
            Difficulty::Easy,
            objects(&[
                ("b1", Spike, 600.0, 360.0),
                ("b2", Spike, 900.0, 360.0),
                ("b3", Block, 1200.0, 320.0),
                ("b4", Block, 1240.0, 320.0),
                ("b5", Spike, 1400.0, 360.0),
                ("b6", Spike, 1440.0, 360.0),
                ("b7", Block, 1700.0, 280.0),
                ("b8", Block, 1740.0, 280.0),
                ("b9", Spike, 1780.0, 360.0),
            ]),
        ),
        LevelData::new(
            "2",
            "Neon Strings",
            Difficulty::Medium,
            objects(&[
                ("s1", Spike, 500.0, 360.0),
                ("s2", Spike, 540.0, 360.0),
                ("b1", Block, 800.0, 320.0),
                ("b2", Block, 840.0, 320.0),
                ("s3", Spike, 840.0, 280.0),
            ]),
        ),
    ]
}

fn objects(specs: &[(&str, ObjectKind, f64, f64)]) -> Vec<GameObject> {
    specs
        .iter()
        .map(|&(id, kind, x, y)| GameObject::new(id, kind, x, y))
        .collect()
}
