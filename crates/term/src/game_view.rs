//! GameView: maps round state and fall positions into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_wordfall_core::RoundSnapshot;
use tui_wordfall_sim::WordPosition;
use tui_wordfall_types::{ResultEvent, ResultKind, FIELD_COLS, FIELD_ROWS, STARTING_LIVES};

use crate::fb::{FrameBuffer, Tint};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top bar height in rows (prompt, score, hearts)
const TOP_BAR_ROWS: u16 = 3;

/// A lightweight terminal renderer for the falling-word game.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render round state into a framebuffer.
    ///
    /// `positions` comes from the fall field; labels are joined to positions
    /// by word id through the snapshot. `flash` is the result currently being
    /// shown center-field, if any.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        positions: &[WordPosition],
        flash: Option<&ResultEvent>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = FIELD_COLS + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;

        self.draw_top_bar(&mut fb, snap, start_x, frame_w);
        self.draw_field(&mut fb, start_x, TOP_BAR_ROWS);
        self.draw_words(&mut fb, snap, positions, start_x, TOP_BAR_ROWS);

        if let Some(flash) = flash {
            self.draw_flash(&mut fb, flash, start_x, TOP_BAR_ROWS);
        }

        fb
    }

    fn draw_top_bar(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, x: u16, width: u16) {
        fb.fill_rect(x, 0, width, TOP_BAR_ROWS, ' ', Tint::Bar);

        if let Some(prompt) = snap.prompt() {
            fb.put_str(x + 2, 1, prompt, Tint::Bar);
        }

        let score = format!("score {}", snap.score);
        fb.put_str(x + width.saturating_sub(score.len() as u16 + 2), 0, &score, Tint::Bar);

        let hearts = Self::hearts_line(snap.lives);
        fb.put_str(
            x + width.saturating_sub(hearts.chars().count() as u16 + 2),
            2,
            &hearts,
            Tint::Bad,
        );
    }

    /// Filled hearts for remaining lives, hollow for lost ones.
    fn hearts_line(lives: u8) -> String {
        let mut line = String::new();
        for i in 0..STARTING_LIVES {
            if i > 0 {
                line.push(' ');
            }
            line.push(if i < lives { '♥' } else { '♡' });
        }
        line
    }

    fn draw_field(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let w = FIELD_COLS + 2;
        let h = FIELD_ROWS + 2;

        for dx in 1..w - 1 {
            fb.set(x + dx, y, '─', Tint::Dim);
            fb.set(x + dx, y + h - 1, '─', Tint::Dim);
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, '│', Tint::Dim);
            fb.set(x + w - 1, y + dy, '│', Tint::Dim);
        }
        fb.set(x, y, '┌', Tint::Dim);
        fb.set(x + w - 1, y, '┐', Tint::Dim);
        fb.set(x, y + h - 1, '└', Tint::Dim);
        fb.set(x + w - 1, y + h - 1, '┘', Tint::Dim);
    }

    fn draw_words(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        positions: &[WordPosition],
        x: u16,
        y: u16,
    ) {
        for pos in positions {
            let Some(index) = snap.active.iter().position(|w| w.id == pos.id) else {
                // Already resolved; the field just hasn't been told yet.
                continue;
            };
            if pos.row >= FIELD_ROWS {
                continue;
            }
            let label = format!("{}:{}", index + 1, snap.active[index].candidate);
            fb.put_str(x + 1 + pos.column, y + 1 + pos.row, &label, Tint::Accent);
        }
    }

    fn draw_flash(&self, fb: &mut FrameBuffer, flash: &ResultEvent, x: u16, y: u16) {
        let tint = match flash.kind {
            ResultKind::Correct => Tint::Good,
            ResultKind::Incorrect | ResultKind::GameOver => Tint::Bad,
        };
        let text_w = flash.text.chars().count() as u16;
        let cx = x + 1 + (FIELD_COLS.saturating_sub(text_w)) / 2;
        let cy = y + 1 + FIELD_ROWS / 2;
        fb.put_str(cx, cy, flash.text, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_wordfall_core::ActiveWordSnapshot;
    use tui_wordfall_types::WordId;

    fn viewport() -> Viewport {
        Viewport::new(60, 26)
    }

    fn snapshot_with_word() -> RoundSnapshot {
        let mut snap = RoundSnapshot::default();
        snap.active.push(ActiveWordSnapshot {
            id: WordId(1),
            source: "house".into(),
            candidate: "casa".into(),
        });
        snap
    }

    #[test]
    fn renders_prompt_score_and_hearts() {
        let snap = snapshot_with_word();
        let fb = GameView.render(&snap, &[], None, viewport());

        assert!(fb.contains_text("house"));
        assert!(fb.contains_text("score 0"));
        assert!(fb.contains_text("♥ ♥ ♥"));
    }

    #[test]
    fn lost_lives_render_hollow_hearts() {
        let mut snap = snapshot_with_word();
        snap.lives = 1;
        let fb = GameView.render(&snap, &[], None, viewport());
        assert!(fb.contains_text("♥ ♡ ♡"));
    }

    #[test]
    fn renders_candidate_label_at_position() {
        let snap = snapshot_with_word();
        let positions = [WordPosition {
            id: WordId(1),
            column: 4,
            row: 5,
        }];
        let fb = GameView.render(&snap, &positions, None, viewport());
        assert!(fb.contains_text("1:casa"));
    }

    #[test]
    fn skips_words_missing_from_snapshot() {
        let snap = RoundSnapshot::default();
        let positions = [WordPosition {
            id: WordId(9),
            column: 0,
            row: 0,
        }];
        let fb = GameView.render(&snap, &positions, None, viewport());
        assert!(!fb.contains_text(":"));
    }

    #[test]
    fn renders_result_flash() {
        let snap = snapshot_with_word();
        let flash = ResultEvent::game_over();
        let fb = GameView.render(&snap, &[], Some(&flash), viewport());
        assert!(fb.contains_text("game over"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = snapshot_with_word();
        let positions = [WordPosition {
            id: WordId(1),
            column: 30,
            row: 17,
        }];
        let flash = ResultEvent::correct();
        let _ = GameView.render(&snap, &positions, Some(&flash), Viewport::new(10, 4));
    }
}
