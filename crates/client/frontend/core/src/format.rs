//! Text formatting shared by frontends.

use game_core::{GameConfig, LevelData, UserSettings};
use runtime::{ActiveSession, SessionEnd};

/// Short origin tag shown on level cards.
pub fn level_origin(level: &LevelData) -> &'static str {
    if level.is_ai_generated() {
        "AI"
    } else if level.is_custom() {
        "CUSTOM"
    } else {
        "CORE"
    }
}

/// One-line summary of a level for listings.
pub fn level_summary(level: &LevelData) -> String {
    let mut summary = format!(
        "[{}] {} - {} objects",
        level.difficulty.badge(),
        level.name,
        level.objects.len()
    );
    if let Some(best) = level.best_score {
        summary.push_str(&format!(", best {best}"));
    }
    summary
}

pub fn speed_label(settings: &UserSettings) -> String {
    format!(
        "{:.1} ({:.0}-{:.0})",
        settings.speed,
        GameConfig::MIN_SPEED,
        GameConfig::MAX_SPEED
    )
}

pub fn volume_label(settings: &UserSettings) -> String {
    format!("{}%", settings.volume_percent())
}

/// Headline and coin line for the end-of-session overlay.
pub fn session_banner(session: &ActiveSession) -> Option<(&'static str, String)> {
    match session.end()? {
        SessionEnd::GameOver => Some(("STRINGS CUT", format!("{} COINS", session.coins()))),
        SessionEnd::Won => Some((
            "PUPPET MASTER",
            format!("{} COINS RETRIEVED", session.coins()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Difficulty, GameObject, ObjectKind, builtin_levels};

    #[test]
    fn level_tags_and_summary() {
        let builtin = &builtin_levels()[0];
        assert_eq!(level_origin(builtin), "CORE");
        assert_eq!(level_summary(builtin), "[E] Puppet Genesis - 9 objects");

        let mut custom = LevelData::new(
            "custom-ai-5",
            "Storm",
            Difficulty::Demon,
            vec![GameObject::new("a", ObjectKind::Coin, 0.0, 0.0)],
        );
        custom.best_score = Some(3);
        assert_eq!(level_origin(&custom), "AI");
        assert_eq!(level_summary(&custom), "[D] Storm - 1 objects, best 3");
    }

    #[test]
    fn settings_labels() {
        let settings = UserSettings::default();
        assert_eq!(speed_label(&settings), "5.0 (3-12)");
        assert_eq!(volume_label(&settings), "50%");
    }
}
