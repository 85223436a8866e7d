//! Side-scrolling track view shared by play and the editor.
//!
//! Each terminal column covers half a block horizontally; the rows above
//! the ground line divide `0..GROUND_Y` evenly.

use game_core::{GameConfig, GameObject};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::cursor::GridCursor;
use crate::presentation::theme::PuppetTheme;

/// World pixels per terminal column.
pub const COLUMN_PX: f64 = GameConfig::BLOCK_SIZE / 2.0;
const BLOCK_COLUMNS: i64 = 2;

type Cell = (char, Style);

/// Everything drawn in one track frame.
pub struct TrackScene<'a> {
    pub title: String,
    pub objects: &'a [GameObject],
    /// World `x` at the left edge of the view.
    pub camera_x: f64,
    /// Player top-left in world pixels.
    pub player: Option<(f64, f64)>,
    pub cursor: Option<GridCursor>,
    /// Objects to leave out, such as collected coins.
    pub hidden: &'a dyn Fn(&GameObject) -> bool,
}

/// World pixels visible inside a bordered area of the given width.
pub fn visible_px(area_width: u16) -> f64 {
    f64::from(area_width.saturating_sub(2)) * COLUMN_PX
}

pub fn render(frame: &mut Frame, area: Rect, scene: &TrackScene, theme: &PuppetTheme) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let grid = rasterize(scene, inner_width, inner_height, theme);

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(glyph, style)| Span::styled(glyph.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(scene.title.clone(), theme.title())),
    );
    frame.render_widget(paragraph, area);
}

fn rasterize(scene: &TrackScene, width: usize, height: usize, theme: &PuppetTheme) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![(' ', Style::default()); width]; height];
    if width == 0 || height < 2 {
        return grid;
    }

    let ground_row = height - 1;
    let ground = theme.ground();
    grid[ground_row].fill(ground);

    let to_col = |x: f64| ((x - scene.camera_x) / COLUMN_PX).floor() as i64;
    let to_row = |y: f64| {
        let row = (y / GameConfig::GROUND_Y * ground_row as f64).floor() as i64;
        row.clamp(0, ground_row as i64 - 1) as usize
    };

    let paint = |grid: &mut Vec<Vec<Cell>>, col: i64, row: usize, cell: Cell| {
        for offset in 0..BLOCK_COLUMNS {
            let c = col + offset;
            if (0..width as i64).contains(&c) {
                grid[row][c as usize] = cell;
            }
        }
    };

    for object in scene.objects.iter().filter(|o| !(scene.hidden)(*o)) {
        paint(&mut grid, to_col(object.x), to_row(object.y), theme.object(object.kind));
    }

    if let Some((x, y)) = scene.player {
        let center = y + GameConfig::PLAYER_SIZE / 2.0;
        paint(&mut grid, to_col(x), to_row(center), theme.player());
    }

    if let Some(cursor) = scene.cursor {
        let (x, y) = cursor.to_world();
        let col = to_col(x);
        let row = to_row(y);
        for offset in 0..BLOCK_COLUMNS {
            let c = col + offset;
            if (0..width as i64).contains(&c) {
                let (glyph, style) = grid[row][c as usize];
                let glyph = if glyph == ' ' { '·' } else { glyph };
                grid[row][c as usize] = (glyph, style.add_modifier(Modifier::REVERSED));
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ObjectKind, UserSettings};

    fn theme() -> PuppetTheme {
        PuppetTheme::from_settings(&UserSettings::default())
    }

    fn glyphs(grid: &[Vec<Cell>]) -> Vec<String> {
        grid.iter()
            .map(|row| row.iter().map(|(g, _)| *g).collect())
            .collect()
    }

    #[test]
    fn objects_land_on_block_rows() {
        let objects = [
            GameObject::new("s", ObjectKind::Spike, 80.0, 360.0),
            GameObject::new("c", ObjectKind::Coin, 120.0, 0.0),
        ];
        let scene = TrackScene {
            title: "t".into(),
            objects: &objects,
            camera_x: 0.0,
            player: None,
            cursor: None,
            hidden: &|_| false,
        };
        let rows = glyphs(&rasterize(&scene, 10, 11, &theme()));

        assert_eq!(rows[0], "      oo  ");
        assert_eq!(rows[9], "    ▲▲    ");
        assert!(rows[10].chars().all(|c| c == '▔'));
    }

    #[test]
    fn camera_scrolls_and_hidden_objects_skip() {
        let objects = [
            GameObject::new("b", ObjectKind::Block, 400.0, 360.0),
            GameObject::new("c", ObjectKind::Coin, 440.0, 360.0),
        ];
        let scene = TrackScene {
            title: "t".into(),
            objects: &objects,
            camera_x: 400.0,
            player: Some((400.0, 364.0)),
            cursor: None,
            hidden: &|o: &GameObject| o.kind == ObjectKind::Coin,
        };
        let rows = glyphs(&rasterize(&scene, 6, 11, &theme()));
        assert_eq!(rows[9], "■■    ");
    }

    #[test]
    fn cursor_marks_empty_cells() {
        let scene = TrackScene {
            title: "t".into(),
            objects: &[],
            camera_x: 0.0,
            player: None,
            cursor: Some(GridCursor::new(1, 9)),
            hidden: &|_| false,
        };
        let grid = rasterize(&scene, 6, 11, &theme());
        assert_eq!(glyphs(&grid)[9], "  ··  ");
        assert!(grid[9][2].1.add_modifier.contains(Modifier::REVERSED));
    }
}
