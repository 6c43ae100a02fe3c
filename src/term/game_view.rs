//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Game, Phase};
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{
    Feedback, Player, ANGLE_MAX, ANGLE_MIN, GRID_SIZE, POWER_MAX, SCORE_TO_WIN,
};

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

const CELL_W: u16 = 5;
const CELL_H: u16 = 1;
const GRID_W: u16 = GRID_SIZE as u16 * (CELL_W + 1) + 1;
const GRID_H: u16 = GRID_SIZE as u16 * (CELL_H + 1) + 1;
const METER_W: u16 = 26;

fn player_color(player: Player) -> Rgb {
    match player {
        Player::X => Rgb::new(90, 200, 250),
        Player::O => Rgb::new(250, 180, 80),
    }
}

fn style(fg: Rgb) -> Style {
    Style {
        fg,
        ..Style::default()
    }
}

fn bold(fg: Rgb) -> Style {
    Style {
        fg,
        bold: true,
        ..Style::default()
    }
}

/// A lightweight terminal presenter for the duel.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, game: &Game, commentary: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid_x = viewport.width.saturating_sub(GRID_W) / 2;
        let grid_y = 4;

        self.draw_title(&mut fb, viewport);
        self.draw_scores(&mut fb, game, viewport);
        self.draw_grid(&mut fb, game, grid_x, grid_y);
        self.draw_meters(&mut fb, game, viewport, grid_y + GRID_H + 1);
        self.draw_banner(&mut fb, game, viewport, grid_y + GRID_H + 5);
        self.draw_commentary(&mut fb, commentary, viewport);
        self.draw_help(&mut fb, game, viewport);

        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let title = bold(Rgb::new(240, 240, 240));
        fb.put_str_centered(0, 0, viewport.width, "H O O P   D U E L", title);
        fb.put_str_centered(
            0,
            1,
            viewport.width,
            &format!("first to {} points", SCORE_TO_WIN),
            style(Rgb::new(120, 120, 130)),
        );
    }

    fn draw_scores(&self, fb: &mut FrameBuffer, game: &Game, viewport: Viewport) {
        let ms = game.match_state();
        let active = ms.current_player();

        for (player, left) in [(Player::X, true), (Player::O, false)] {
            let label = format!(
                "PLAYER {}  {} pt",
                player.as_str(),
                ms.score(player)
            );
            let highlighted = ms.winner() == Some(player)
                || (ms.winner().is_none() && active == player);
            let st = if highlighted {
                bold(player_color(player))
            } else {
                style(Rgb::new(130, 130, 140))
            };
            let x = if left {
                2
            } else {
                viewport.width.saturating_sub(label.chars().count() as u16 + 2)
            };
            fb.put_str(x, 3, &label, st);
            if highlighted && ms.winner().is_none() {
                let marker_x = if left { 0 } else { viewport.width.saturating_sub(2) };
                fb.put_str(marker_x, 3, if left { "▶" } else { "◀" }, st);
            }
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, game: &Game, x0: u16, y0: u16) {
        let line = style(Rgb::new(90, 90, 100));
        let size = GRID_SIZE as u16;

        for gy in 0..=size {
            let y = y0 + gy * (CELL_H + 1);
            for gx in 0..=size {
                let x = x0 + gx * (CELL_W + 1);
                let ch = match (gy, gx) {
                    (0, 0) => '┌',
                    (0, g) if g == size => '┐',
                    (g, 0) if g == size => '└',
                    (gy, gx) if gy == size && gx == size => '┘',
                    (0, _) => '┬',
                    (g, _) if g == size => '┴',
                    (_, 0) => '├',
                    (_, g) if g == size => '┤',
                    _ => '┼',
                };
                fb.put_char(x, y, ch, line);
                if gx < size {
                    for dx in 1..=CELL_W {
                        fb.put_char(x + dx, y, '─', line);
                    }
                }
            }
            if gy < size {
                for dy in 1..=CELL_H {
                    for gx in 0..=size {
                        fb.put_char(x0 + gx * (CELL_W + 1), y + dy, '│', line);
                    }
                }
            }
        }

        let board = game.match_state().board();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let idx = row * GRID_SIZE + col;
                let cx = x0 + col as u16 * (CELL_W + 1) + 1;
                let cy = y0 + row as u16 * (CELL_H + 1) + 1;

                let flashing = game.clearing().contains(&idx);
                match board.get(idx) {
                    Some(player) => {
                        let st = if flashing {
                            Style {
                                fg: Rgb::new(20, 20, 20),
                                bg: Rgb::new(250, 230, 120),
                                bold: true,
                            }
                        } else {
                            bold(player_color(player))
                        };
                        let glyph = format!(" ({}) ", player.as_str());
                        fb.put_str(cx, cy, &glyph, st);
                    }
                    None => {
                        let st = if flashing {
                            Style {
                                fg: Rgb::new(20, 20, 20),
                                bg: Rgb::new(250, 230, 120),
                                bold: false,
                            }
                        } else {
                            style(Rgb::new(60, 60, 70))
                        };
                        fb.put_str(cx, cy, "  ·  ", st);
                    }
                }
            }
        }
    }

    fn draw_meters(&self, fb: &mut FrameBuffer, game: &Game, viewport: Viewport, y: u16) {
        let label = style(Rgb::new(130, 130, 140));
        let x0 = viewport.width.saturating_sub(METER_W + 8) / 2;
        let throw = game.throw();

        // Pending hoop type, frozen once the ring is in flight.
        let (hoop, hoop_color) = if game.phase() == Phase::Flying {
            if throw.split() {
                ("TWIN", Rgb::new(250, 120, 200))
            } else {
                ("STANDARD", Rgb::new(160, 160, 170))
            }
        } else if game.next_split() {
            ("TWIN", Rgb::new(250, 120, 200))
        } else {
            ("STANDARD", Rgb::new(160, 160, 170))
        };
        fb.put_str(x0, y, "HOOP ", label);
        fb.put_str(x0 + 7, y, hoop, bold(hoop_color));

        // Angle gauge: marker across [ANGLE_MIN, ANGLE_MAX].
        let angle = throw.angle();
        fb.put_str(x0, y + 1, "ANGLE", label);
        let span = ANGLE_MAX - ANGLE_MIN;
        let pos = (((angle - ANGLE_MIN) / span) * (METER_W - 1) as f32).round() as u16;
        for dx in 0..METER_W {
            let ch = if dx == pos.min(METER_W - 1) { '◆' } else { '─' };
            let st = if ch == '◆' {
                bold(Rgb::new(240, 240, 240))
            } else {
                style(Rgb::new(70, 70, 80))
            };
            fb.put_char(x0 + 7 + dx, y + 1, ch, st);
        }
        fb.put_str(
            x0 + 7 + METER_W + 1,
            y + 1,
            &format!("{:+.0}°", angle),
            label,
        );

        // Power bar, filled proportionally while charging.
        let power = throw.power();
        fb.put_str(x0, y + 2, "POWER", label);
        let filled = ((power / POWER_MAX) * METER_W as f32).round() as u16;
        for dx in 0..METER_W {
            let (ch, st) = if dx < filled {
                ('█', bold(Rgb::new(120, 230, 120)))
            } else {
                ('░', style(Rgb::new(60, 60, 70)))
            };
            fb.put_char(x0 + 7 + dx, y + 2, ch, st);
        }
        fb.put_str(
            x0 + 7 + METER_W + 1,
            y + 2,
            &format!("{:>3.0}%", power),
            label,
        );

        if let Some((x_pct, y_pct)) = throw.landing() {
            fb.put_str(
                x0,
                y + 3,
                &format!("LAST LANDING  x {:>3.0}%  y {:>3.0}%", x_pct, y_pct),
                style(Rgb::new(100, 100, 110)),
            );
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, game: &Game, viewport: Viewport, y: u16) {
        if let Some(winner) = game.match_state().winner() {
            let st = bold(player_color(winner));
            fb.put_str_centered(
                0,
                y,
                viewport.width,
                &format!("{} CHAMPION!", winner.as_str()),
                st,
            );
            fb.put_str_centered(
                0,
                y + 1,
                viewport.width,
                "press R for a new match",
                style(Rgb::new(130, 130, 140)),
            );
            return;
        }

        if let Some(feedback) = game.feedback() {
            let color = match feedback {
                Feedback::Miss => Rgb::new(200, 90, 90),
                Feedback::Win => Rgb::new(250, 230, 120),
                Feedback::Point(_) => Rgb::new(120, 230, 120),
                Feedback::DoubleHit => Rgb::new(250, 120, 200),
                Feedback::Steal => Rgb::new(250, 180, 80),
                Feedback::Hit => Rgb::new(200, 200, 210),
            };
            fb.put_str_centered(0, y, viewport.width, &feedback.label(), bold(color));
        }
    }

    fn draw_commentary(&self, fb: &mut FrameBuffer, commentary: &str, viewport: Viewport) {
        let y = viewport.height.saturating_sub(3);
        fb.put_str_centered(
            0,
            y,
            viewport.width,
            &format!("» {} «", commentary),
            style(Rgb::new(170, 150, 220)),
        );
    }

    fn draw_help(&self, fb: &mut FrameBuffer, game: &Game, viewport: Viewport) {
        let y = viewport.height.saturating_sub(1);
        let text = match game.phase() {
            Phase::RoundOver => "r new match   q quit",
            Phase::Charging => "release space to throw   ←/→ aim",
            _ => "hold space to charge   ←/→ aim   q quit",
        };
        fb.put_str_centered(0, y, viewport.width, text, style(Rgb::new(100, 100, 110)));
    }
}
