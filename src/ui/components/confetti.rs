use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::celebration::Celebration;
use crate::ui::theme::Theme;

/// Overlay that draws the active celebration particles on top of whatever
/// was rendered beneath it. Render last.
pub struct ConfettiOverlay<'a> {
    effect: &'a Celebration,
    theme: &'a Theme,
}

impl<'a> ConfettiOverlay<'a> {
    pub fn new(effect: &'a Celebration, theme: &'a Theme) -> Self {
        Self { effect, theme }
    }
}

impl Widget for ConfettiOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let colors = &self.theme.colors;

        for p in self.effect.particles() {
            if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let x = area.x + (p.x * area.width as f32) as u16;
            let y = area.y + (p.y * area.height as f32) as u16;
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            buf[(x, y)]
                .set_char(p.glyph)
                .set_fg(colors.confetti_color(p.color));
        }
    }
}
