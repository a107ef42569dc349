//! Draws one frame of the game onto a [`Surface`]

use glam::Vec2;

use super::{Color, Sprite, Surface, TextAlign, TextStyle};
use crate::highscores::Leaderboard;
use crate::sim::World;
use crate::ui::{PANEL_FONT_PX, PanelLayout, Rect, restart_button};

const STATUS_FONT_PX: f32 = 40.0;
const BUTTON_FONT_PX: f32 = 20.0;
const FPS_FONT_PX: f32 = 16.0;
/// Offset of the white text over its gray shadow
const SHADOW_OFFSET: f32 = 2.0;

const GAME_OVER_TEXT: &str = "GAME OVER, try again!";
const GAME_OVER_Y: f32 = 150.0;

/// Overlay inputs that live outside the world
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    /// Shown once the run has ended
    pub leaderboard: Option<&'a Leaderboard>,
    pub fps: Option<u32>,
    pub show_hitboxes: bool,
}

/// Draw the full frame: entities first, then text and overlays
pub fn draw_frame(surface: &mut dyn Surface, world: &World, hud: &Hud) {
    let (w, h) = (world.width(), world.height());
    surface.clear(Rect::new(0.0, 0.0, w, h));

    draw_entities(surface, world);
    if hud.show_hitboxes {
        draw_hitboxes(surface, world);
    }

    draw_status(surface, world);

    if !world.session.is_running() {
        if let Some(leaderboard) = hud.leaderboard {
            draw_leaderboard(surface, leaderboard, w, h);
        }
        draw_shadowed(
            surface,
            GAME_OVER_TEXT,
            w / 2.0,
            GAME_OVER_Y,
            STATUS_FONT_PX,
            TextAlign::Center,
        );
        draw_restart_button(surface, w);
    }

    if let Some(fps) = hud.fps {
        surface.fill_text(
            &format!("FPS: {}", fps),
            10.0,
            h - 10.0,
            TextStyle::new(FPS_FONT_PX, Color::WHITE, TextAlign::Left),
        );
    }
}

fn draw_entities(surface: &mut dyn Surface, world: &World) {
    let backdrop = &world.backdrop;
    // Two copies side by side make the wraparound seamless
    for x in [backdrop.x, backdrop.x + backdrop.width] {
        surface.draw_image(
            Sprite::Backdrop,
            Rect::new(x, 0.0, backdrop.width, backdrop.height),
        );
    }

    let actor = &world.actor;
    surface.draw_image(
        Sprite::Actor,
        Rect::new(actor.pos.x, actor.pos.y, actor.size.x, actor.size.y),
    );

    for obstacle in &world.obstacles {
        surface.draw_image(
            Sprite::Obstacle,
            Rect::new(
                obstacle.pos.x,
                obstacle.pos.y,
                obstacle.size.x,
                obstacle.size.y,
            ),
        );
    }
}

fn draw_hitboxes(surface: &mut dyn Surface, world: &World) {
    let actor = world.actor.hitbox();
    surface.stroke_circle(actor.center, actor.radius, Color::WHITE);
    for obstacle in &world.obstacles {
        let hitbox = obstacle.hitbox();
        surface.stroke_circle(hitbox.center, hitbox.radius, Color::RED);
    }
}

/// Gray text with a white copy offset on top
fn draw_shadowed(
    surface: &mut dyn Surface,
    text: &str,
    x: f32,
    y: f32,
    size_px: f32,
    align: TextAlign,
) {
    surface.fill_text(text, x, y, TextStyle::new(size_px, Color::GRAY, align));
    surface.fill_text(
        text,
        x + SHADOW_OFFSET,
        y + SHADOW_OFFSET,
        TextStyle::new(size_px, Color::WHITE, align),
    );
}

fn draw_status(surface: &mut dyn Surface, world: &World) {
    let text = format!("Score: {}", world.session.display_score());
    draw_shadowed(surface, &text, 20.0, 50.0, STATUS_FONT_PX, TextAlign::Left);
}

fn draw_leaderboard(surface: &mut dyn Surface, leaderboard: &Leaderboard, w: f32, h: f32) {
    let layout = PanelLayout::new(w, h, leaderboard.len());
    surface.fill_rect(layout.rect, Color::GRAY);

    let style = TextStyle::new(PANEL_FONT_PX, Color::WHITE, TextAlign::Center);
    let title = "High Scores";
    let title_x = layout.rect.center_x();
    surface.fill_text(title, title_x, layout.title_y, style);

    let half = surface.measure_text(title, PANEL_FONT_PX) / 2.0;
    let underline_y = layout.underline_y();
    surface.stroke_line(
        Vec2::new(title_x - half, underline_y),
        Vec2::new(title_x + half, underline_y),
        Color::WHITE,
        2.0,
    );

    for (index, entry) in leaderboard.entries().iter().enumerate() {
        let row = format!("#{}: {} - {}", index + 1, entry.initials, entry.score);
        surface.fill_text(&row, title_x, layout.row_y(index), style);
    }
}

fn draw_restart_button(surface: &mut dyn Surface, world_width: f32) {
    let button = restart_button(world_width);
    surface.fill_rect(button, Color::GRAY);
    surface.fill_text(
        "Restart",
        button.center_x(),
        button.center_y() + 10.0,
        TextStyle::new(BUTTON_FONT_PX, Color::WHITE, TextAlign::Center),
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::renderer::NullSurface;
    use crate::sim::Obstacle;
    use crate::tuning::Tuning;

    /// Records every draw call for inspection
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub images: Vec<(Sprite, Rect)>,
        pub texts: Vec<(String, f32, f32, TextStyle)>,
        pub rects: Vec<(Rect, Color)>,
        pub lines: usize,
        pub circles: usize,
        pub clears: usize,
    }

    impl RecordingSurface {
        pub fn has_text(&self, text: &str) -> bool {
            self.texts.iter().any(|(t, ..)| t == text)
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _area: Rect) {
            self.clears += 1;
        }
        fn draw_image(&mut self, sprite: Sprite, dest: Rect) {
            self.images.push((sprite, dest));
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.rects.push((rect, color));
        }
        fn fill_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
            self.texts.push((text.to_string(), x, y, style));
        }
        fn measure_text(&mut self, text: &str, size_px: f32) -> f32 {
            NullSurface.measure_text(text, size_px)
        }
        fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _width: f32) {
            self.lines += 1;
        }
        fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
            self.circles += 1;
        }
    }

    #[test]
    fn test_running_frame() {
        let mut world = World::new(Tuning::default(), 1);
        world.obstacles.push(Obstacle::new(1, &world.tuning));
        world.session.accrue(2600.0);

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &world, &Hud::default());

        assert_eq!(surface.clears, 1);
        let sprites: Vec<_> = surface.images.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            sprites,
            vec![Sprite::Backdrop, Sprite::Backdrop, Sprite::Actor, Sprite::Obstacle]
        );
        assert_eq!(surface.images[1].1.x, 9000.0);

        assert!(surface.has_text("Score: 3"));
        assert!(!surface.has_text(GAME_OVER_TEXT));
        assert!(surface.rects.is_empty());
        assert_eq!(surface.circles, 0);
    }

    #[test]
    fn test_ended_frame_shows_overlay() {
        let mut world = World::new(Tuning::default(), 1);
        world.session.end();
        let mut board = Leaderboard::new();
        board.record(12, "ABC");
        board.record(7, "XY");

        let mut surface = RecordingSurface::default();
        let hud = Hud {
            leaderboard: Some(&board),
            ..Default::default()
        };
        draw_frame(&mut surface, &world, &hud);

        assert!(surface.has_text(GAME_OVER_TEXT));
        assert!(surface.has_text("High Scores"));
        assert!(surface.has_text("#1: ABC - 12"));
        assert!(surface.has_text("#2: XY - 7"));
        assert!(surface.has_text("Restart"));
        assert_eq!(surface.lines, 1);
        // Panel and restart button
        assert_eq!(surface.rects.len(), 2);
        assert_eq!(surface.rects[1].0, restart_button(800.0));
    }

    #[test]
    fn test_hitboxes_and_fps() {
        let mut world = World::new(Tuning::default(), 1);
        world.obstacles.push(Obstacle::new(1, &world.tuning));
        world.obstacles.push(Obstacle::new(2, &world.tuning));

        let mut surface = RecordingSurface::default();
        let hud = Hud {
            fps: Some(60),
            show_hitboxes: true,
            ..Default::default()
        };
        draw_frame(&mut surface, &world, &hud);

        assert_eq!(surface.circles, 3);
        assert!(surface.has_text("FPS: 60"));
    }
}
