//! Minimal editor collaborator.
//!
//! Places and removes objects on a block grid, and can import the objects
//! of a past generation from history. Produces the [`LevelData`] handed
//! back to the controller on save.

use game_core::{
    AiHistoryEntry, Difficulty, GameConfig, GameObject, LevelData, ObjectKind, custom_level_id,
};
use strum::IntoEnumIterator;

use crate::cursor::GridCursor;

/// Grid rows above the ground line.
pub const GRID_ROWS: i32 = (GameConfig::GROUND_Y / GameConfig::BLOCK_SIZE) as i32;
/// Grid columns available to the editor.
pub const GRID_COLUMNS: i32 = 240;

const DEFAULT_NAME: &str = "Untitled Puppet Stage";

#[derive(Clone, Debug)]
pub struct Workshop {
    id: String,
    name: String,
    difficulty: Difficulty,
    best_score: Option<u32>,
    objects: Vec<GameObject>,
    cursor: GridCursor,
    palette: ObjectKind,
    history: Vec<AiHistoryEntry>,
    /// Selected history entry while the browser is open.
    browsing: Option<usize>,
    next_object: usize,
}

impl Workshop {
    /// Opens `level` for editing, or a blank level id'd from `now_millis`.
    pub fn new(level: Option<&LevelData>, history: Vec<AiHistoryEntry>, now_millis: i64) -> Self {
        let (id, name, difficulty, best_score, objects) = match level {
            Some(level) => (
                level.id.clone(),
                level.name.clone(),
                level.difficulty,
                level.best_score,
                level.objects.clone(),
            ),
            None => (
                custom_level_id(now_millis),
                DEFAULT_NAME.to_string(),
                Difficulty::Easy,
                None,
                Vec::new(),
            ),
        };

        Self {
            id,
            name,
            difficulty,
            best_score,
            objects,
            cursor: GridCursor::new(0, GRID_ROWS - 1),
            palette: ObjectKind::Block,
            history,
            browsing: None,
            next_object: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn cursor(&self) -> GridCursor {
        self.cursor
    }

    pub fn palette(&self) -> ObjectKind {
        self.palette
    }

    pub fn history(&self) -> &[AiHistoryEntry] {
        &self.history
    }

    pub fn browsing(&self) -> Option<usize> {
        self.browsing
    }

    pub fn is_browsing(&self) -> bool {
        self.browsing.is_some()
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor.move_by(dx, dy, GRID_COLUMNS, GRID_ROWS);
    }

    /// Selects the next (or previous) object kind.
    pub fn cycle_palette(&mut self, forward: bool) {
        let kinds: Vec<ObjectKind> = ObjectKind::iter().collect();
        let current = kinds.iter().position(|k| *k == self.palette).unwrap_or(0);
        let next = if forward {
            (current + 1) % kinds.len()
        } else {
            (current + kinds.len() - 1) % kinds.len()
        };
        self.palette = kinds[next];
    }

    /// Object occupying the cursor cell, if any.
    pub fn object_at_cursor(&self) -> Option<&GameObject> {
        self.objects
            .iter()
            .find(|o| GridCursor::containing(o.x, o.y) == self.cursor)
    }

    /// Places the palette kind at the cursor, replacing whatever occupied the cell.
    pub fn place(&mut self) {
        self.remove();
        let (x, y) = self.cursor.to_world();
        let id = self.fresh_id();
        self.objects.push(GameObject::new(id, self.palette, x, y));
    }

    /// Removes the object at the cursor. Returns false if the cell was empty.
    pub fn remove(&mut self) -> bool {
        let cursor = self.cursor;
        let before = self.objects.len();
        self.objects
            .retain(|o| GridCursor::containing(o.x, o.y) != cursor);
        self.objects.len() != before
    }

    /// Opens or closes the history browser. Stays closed with no history.
    pub fn toggle_history(&mut self) {
        self.browsing = match self.browsing {
            Some(_) => None,
            None if self.history.is_empty() => None,
            None => Some(0),
        };
    }

    pub fn browse_history(&mut self, delta: i32) {
        if let Some(index) = self.browsing {
            let last = self.history.len().saturating_sub(1) as i32;
            self.browsing = Some((index as i32 + delta).clamp(0, last) as usize);
        }
    }

    /// Replaces the current objects with the selected history entry.
    pub fn import_selected(&mut self) -> bool {
        let Some(entry) = self.browsing.and_then(|i| self.history.get(i)) else {
            return false;
        };

        self.objects = entry.objects.clone();
        if self.name == DEFAULT_NAME {
            self.name = entry.name.clone();
        }
        self.browsing = None;
        tracing::debug!(entry = %entry.id, count = self.objects.len(), "Imported history objects");
        true
    }

    pub fn to_level(&self) -> LevelData {
        let mut objects = self.objects.clone();
        objects.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        LevelData {
            best_score: self.best_score,
            ..LevelData::new(self.id.clone(), self.name.clone(), self.difficulty, objects)
        }
    }

    /// Left edge of the visible window in world pixels, keeping the cursor in view.
    pub fn camera_x(&self, visible_width: f64) -> f64 {
        let (x, _) = self.cursor.to_world();
        (x + GameConfig::BLOCK_SIZE - visible_width).max(0.0)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("e{}", self.next_object);
            self.next_object += 1;
            if !self.objects.iter().any(|o| o.id == candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_entry() -> AiHistoryEntry {
        AiHistoryEntry {
            id: "custom-ai-7".into(),
            name: "Crystal Caverns".into(),
            prompt: "crystal caverns".into(),
            objects: vec![
                GameObject::new("e0", ObjectKind::Spike, 600.0, 360.0),
                GameObject::new("g1", ObjectKind::Coin, 800.0, 300.0),
            ],
            timestamp: 7,
        }
    }

    #[test]
    fn blank_level_gets_custom_id() {
        let workshop = Workshop::new(None, vec![], 1_234);
        let level = workshop.to_level();
        assert_eq!(level.id, "custom-1234");
        assert!(level.is_custom());
        assert!(level.objects.is_empty());
    }

    #[test]
    fn place_replaces_cell_and_remove_clears_it() {
        let mut workshop = Workshop::new(None, vec![], 1);
        workshop.move_cursor(3, 0);
        workshop.place();
        workshop.cycle_palette(true);
        workshop.place();

        assert_eq!(workshop.objects().len(), 1);
        let placed = &workshop.objects()[0];
        assert_eq!(placed.kind, ObjectKind::Spike);
        assert_eq!((placed.x, placed.y), (120.0, 360.0));

        assert!(workshop.remove());
        assert!(!workshop.remove());
        assert!(workshop.objects().is_empty());
    }

    #[test]
    fn palette_wraps_both_ways() {
        let mut workshop = Workshop::new(None, vec![], 1);
        workshop.cycle_palette(false);
        assert_eq!(workshop.palette(), ObjectKind::Coin);
        workshop.cycle_palette(true);
        assert_eq!(workshop.palette(), ObjectKind::Block);
    }

    #[test]
    fn editing_keeps_existing_id_and_best_score() {
        let level = LevelData {
            best_score: Some(12),
            ..LevelData::new(
                "custom-ai-9",
                "Storm",
                Difficulty::Hard,
                vec![GameObject::new("a", ObjectKind::Block, 40.0, 360.0)],
            )
        };
        let mut workshop = Workshop::new(Some(&level), vec![], 99);
        workshop.move_cursor(1, 0);
        assert_eq!(workshop.object_at_cursor().map(|o| o.id.as_str()), Some("a"));

        let saved = workshop.to_level();
        assert_eq!(saved.id, "custom-ai-9");
        assert_eq!(saved.difficulty, Difficulty::Hard);
        assert_eq!(saved.best_score, Some(12));
    }

    #[test]
    fn import_from_history_and_fresh_ids_avoid_collisions() {
        let mut workshop = Workshop::new(None, vec![history_entry()], 1);
        assert!(!workshop.import_selected());

        workshop.toggle_history();
        assert_eq!(workshop.browsing(), Some(0));
        workshop.browse_history(5);
        assert_eq!(workshop.browsing(), Some(0));

        assert!(workshop.import_selected());
        assert!(!workshop.is_browsing());
        assert_eq!(workshop.name(), "Crystal Caverns");
        assert_eq!(workshop.objects().len(), 2);

        workshop.place();
        let level = workshop.to_level();
        assert_eq!(level.duplicate_object_id(), None);
        assert_eq!(level.objects.len(), 3);
    }

    #[test]
    fn history_browser_needs_entries() {
        let mut workshop = Workshop::new(None, vec![], 1);
        workshop.toggle_history();
        assert!(!workshop.is_browsing());
    }
}
