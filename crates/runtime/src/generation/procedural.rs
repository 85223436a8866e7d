//! Offline level generator.
//!
//! Derives a level deterministically from the SHA-256 digest of the prompt,
//! so the same prompt always yields the same track. Used when no remote
//! generation service is configured.

use std::time::Duration;

use async_trait::async_trait;
use game_core::{GameConfig, GameObject, ObjectKind};
use sha2::{Digest, Sha256};

use super::error::GenerationError;
use super::generator::{GeneratedLevel, LevelGenerator};

/// x of the first generated object; leaves a run-up before the first obstacle.
const FIRST_X: f64 = 600.0;
/// Minimum gap between two consecutive patterns.
const PATTERN_GAP: f64 = 200.0;
/// Top of an object resting on the ground.
const GROUND_ROW: f64 = GameConfig::GROUND_Y - GameConfig::BLOCK_SIZE;
/// Height coins float at.
const COIN_ROW: f64 = GROUND_ROW - 60.0;

const PORTALS: [ObjectKind; 9] = [
    ObjectKind::PortalShip,
    ObjectKind::PortalBall,
    ObjectKind::PortalUfo,
    ObjectKind::PortalWave,
    ObjectKind::PortalRobot,
    ObjectKind::PortalSpider,
    ObjectKind::PortalSwing,
    ObjectKind::PortalJetpack,
    ObjectKind::PortalCube,
];

/// Prompt-seeded generator with an artificial response latency.
#[derive(Clone, Debug)]
pub struct ProceduralGenerator {
    latency: Duration,
}

impl ProceduralGenerator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl LevelGenerator for ProceduralGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedLevel, GenerationError> {
        tokio::time::sleep(self.latency).await;
        compose(prompt)
    }
}

/// Build a level from `prompt` without any delay.
pub fn compose(prompt: &str) -> Result<GeneratedLevel, GenerationError> {
    if !prompt.chars().any(char::is_alphanumeric) {
        return Err(GenerationError::with_message(
            "The Puppet AI found no theme in that prompt. Describe the level you want.",
        ));
    }

    let seed = Sha256::digest(prompt.trim().to_lowercase().as_bytes());
    let mut builder = TrackBuilder::default();

    for &byte in seed.iter() {
        match byte % 6 {
            0 => builder.place(ObjectKind::Spike, 0.0, GROUND_ROW),
            1 => {
                builder.place(ObjectKind::Spike, 0.0, GROUND_ROW);
                builder.place(ObjectKind::Spike, GameConfig::BLOCK_SIZE, GROUND_ROW);
            }
            2 => {
                builder.place(ObjectKind::Block, 0.0, GROUND_ROW);
                builder.place(ObjectKind::Coin, 0.0, COIN_ROW);
            }
            3 => {
                builder.place(ObjectKind::Block, 0.0, GROUND_ROW);
                builder.place(ObjectKind::Block, GameConfig::BLOCK_SIZE, GROUND_ROW);
            }
            4 => builder.place(ObjectKind::Coin, 0.0, COIN_ROW),
            _ => {
                let portal = PORTALS[usize::from(byte / 6) % PORTALS.len()];
                builder.place(portal, 0.0, GROUND_ROW - GameConfig::BLOCK_SIZE);
            }
        }
        builder.advance(byte);
    }

    Ok(GeneratedLevel {
        name: title_from_prompt(prompt),
        objects: builder.objects,
    })
}

/// Title-cased first two words of the prompt.
fn title_from_prompt(prompt: &str) -> Option<String> {
    let words: Vec<String> = prompt
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .take(2)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect();

    (!words.is_empty()).then(|| words.join(" "))
}

#[derive(Default)]
struct TrackBuilder {
    objects: Vec<GameObject>,
    cursor: f64,
}

impl TrackBuilder {
    fn place(&mut self, kind: ObjectKind, offset: f64, y: f64) {
        let id = format!("g{}", self.objects.len() + 1);
        self.objects
            .push(GameObject::new(id, kind, FIRST_X + self.cursor + offset, y));
    }

    fn advance(&mut self, byte: u8) {
        self.cursor += PATTERN_GAP + f64::from(byte / 64) * GameConfig::BLOCK_SIZE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_prompt_same_level() {
        let a = compose("Neon storms at midnight").unwrap();
        let b = compose("  neon STORMS at midnight ").unwrap();
        assert_eq!(a.objects, b.objects);
        assert_eq!(a.name.as_deref(), Some("Neon Storms"));
    }

    #[test]
    fn generated_level_is_playable_shape() {
        let level = compose("crystal caverns").unwrap();
        assert!(level.objects.len() >= 32);
        assert_eq!(level.objects[0].x, FIRST_X);
        assert!(level.clone().validated().is_ok());
        assert!(
            level
                .objects
                .windows(2)
                .all(|pair| pair[0].x <= pair[1].x)
        );
    }

    #[test]
    fn prompt_without_theme_is_rejected() {
        let err = compose(" !? ").unwrap_err();
        assert!(err.message().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn generator_waits_for_latency() {
        let generator = ProceduralGenerator::new(Duration::from_millis(2400));
        let start = tokio::time::Instant::now();
        let level = generator.generate("lava").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2400));
        assert_eq!(level.name.as_deref(), Some("Lava"));
    }
}
