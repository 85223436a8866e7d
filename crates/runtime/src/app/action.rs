//! User intents accepted by the view state machine.

use game_core::LevelData;
use strum::{AsRefStr, Display, EnumDiscriminants, EnumIter};

use crate::session::SessionId;

/// Top-level screens.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    #[default]
    Menu,
    Settings,
    LevelSelect,
    Play,
    Editor,
}

/// Everything a frontend (or a collaborator it hosts) can ask of [`App`].
///
/// Each variant has an [`ActionKind`] twin used to advertise which actions
/// the current view exposes.
///
/// [`App`]: super::App
#[derive(Clone, Debug, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(ActionKind))]
#[strum_discriminants(derive(Hash, AsRefStr, Display, EnumIter))]
pub enum AppAction {
    // Menu
    OpenLevelSelect,
    OpenWorkshop,
    OpenSettings,
    BackToMenu,

    // Settings
    SetSpeed(f64),
    NudgeSpeed(i32),
    SetVolume(f64),
    NudgeVolume(i32),
    SetPrimaryColor(String),
    SetSecondaryColor(String),
    FactoryReset,
    SaveSettings,

    // Level select
    Deploy { level_id: String },
    EditLevel { level_id: String },
    NewLevel,

    // Generation modal
    OpenAiModal,
    CloseAiModal,
    SetPrompt(String),
    SubmitPrompt,
    AbortGeneration,
    RetryGeneration,
    ReturnToBase,
    ExitAiToMenu,

    // Gameplay collaborator
    GameOver { session: SessionId, coins: u32 },
    Win { session: SessionId, coins: u32 },
    Restart,
    QuitPlay,

    // Editor collaborator
    SaveLevel(LevelData),
    ExitEditor,
}

impl AppAction {
    pub fn kind(&self) -> ActionKind {
        ActionKind::from(self)
    }
}
