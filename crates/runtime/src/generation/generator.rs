//! Contract of the external level generation service.

use async_trait::async_trait;
use game_core::GameObject;
use serde::Deserialize;

use super::error::GenerationError;

/// Level content returned by a generator.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GeneratedLevel {
    /// Suggested level name; a name is synthesized from the prompt when absent.
    #[serde(default)]
    pub name: Option<String>,
    pub objects: Vec<GameObject>,
}

impl GeneratedLevel {
    /// Decode and validate a JSON response from a remote generator.
    ///
    /// Undecodable payloads (including unknown object kinds) are reported as
    /// unexplained failures.
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        let level: Self = serde_json::from_str(json).map_err(|e| {
            tracing::warn!("Generator returned an unreadable level: {}", e);
            GenerationError::unexplained()
        })?;
        level.validated()
    }

    /// Reject responses the game cannot play: no objects, or object ids
    /// that collide within the level.
    pub fn validated(self) -> Result<Self, GenerationError> {
        if self.objects.is_empty() {
            tracing::warn!("Generator returned a level without objects");
            return Err(GenerationError::unexplained());
        }

        let mut seen = std::collections::HashSet::new();
        if let Some(duplicate) = self
            .objects
            .iter()
            .find(|object| !seen.insert(object.id.as_str()))
        {
            tracing::warn!("Generator returned duplicate object id '{}'", duplicate.id);
            return Err(GenerationError::unexplained());
        }

        Ok(self)
    }

    /// The suggested name, or `"Puppet: <prompt>"` when none was given.
    pub fn name_or_default(&self, prompt: &str) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Puppet: {prompt}"),
        }
    }
}

/// External service that turns a natural-language prompt into a level.
///
/// Implementations may take arbitrarily long; the workflow never cancels a
/// call, it only stops listening for the result.
#[async_trait]
pub trait LevelGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedLevel, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_validates_shape() {
        let ok = r#"{"name":"Storm","objects":[{"id":"a","type":"SPIKE","x":600,"y":360}]}"#;
        let level = GeneratedLevel::from_json(ok).unwrap();
        assert_eq!(level.name.as_deref(), Some("Storm"));

        let nameless = r#"{"objects":[{"id":"a","type":"COIN","x":600,"y":300}]}"#;
        let level = GeneratedLevel::from_json(nameless).unwrap();
        assert_eq!(level.name_or_default("neon storms"), "Puppet: neon storms");

        assert!(GeneratedLevel::from_json(r#"{"objects":[]}"#).is_err());
        assert!(GeneratedLevel::from_json("null").is_err());

        let duplicate = r#"{"objects":[{"id":"a","type":"SPIKE","x":1,"y":1},
            {"id":"a","type":"BLOCK","x":2,"y":2}]}"#;
        assert_eq!(
            GeneratedLevel::from_json(duplicate),
            Err(GenerationError::unexplained())
        );
    }

    #[test]
    fn blank_names_fall_back_to_prompt() {
        let level = GeneratedLevel {
            name: Some("   ".into()),
            objects: vec![],
        };
        assert_eq!(level.name_or_default("x"), "Puppet: x");
    }
}
