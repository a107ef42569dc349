//! Screen layout for the HUD and game-over overlay

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict containment; points on the border are outside
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px > self.x && px < self.x + self.w && py > self.y && py < self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

pub const RESTART_BUTTON_WIDTH: f32 = 100.0;
pub const RESTART_BUTTON_HEIGHT: f32 = 50.0;
pub const RESTART_BUTTON_MARGIN: f32 = 20.0;

/// Restart button, pinned to the top-right corner
pub fn restart_button(world_width: f32) -> Rect {
    Rect::new(
        world_width - RESTART_BUTTON_WIDTH - RESTART_BUTTON_MARGIN,
        RESTART_BUTTON_MARGIN,
        RESTART_BUTTON_WIDTH,
        RESTART_BUTTON_HEIGHT,
    )
}

pub const PANEL_WIDTH: f32 = 300.0;
pub const PANEL_LINE_HEIGHT: f32 = 30.0;
pub const PANEL_FONT_PX: f32 = 20.0;

/// High score panel geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub rect: Rect,
    /// Baseline of the "High Scores" title
    pub title_y: f32,
}

impl PanelLayout {
    /// Centered panel with a title row plus one row per entry
    pub fn new(world_width: f32, world_height: f32, rows: usize) -> Self {
        let h = PANEL_LINE_HEIGHT * (rows as f32 + 1.0);
        let rect = Rect::new(
            world_width / 2.0 - PANEL_WIDTH / 2.0,
            world_height / 2.0 - h / 2.0,
            PANEL_WIDTH,
            h,
        );
        Self {
            rect,
            title_y: rect.y + PANEL_LINE_HEIGHT,
        }
    }

    /// Baseline of entry `index` (0-based)
    pub fn row_y(&self, index: usize) -> f32 {
        self.rect.y + PANEL_LINE_HEIGHT * (index as f32 + 2.0)
    }

    /// Baseline of the title underline
    pub fn underline_y(&self) -> f32 {
        self.title_y + 5.0
    }
}
