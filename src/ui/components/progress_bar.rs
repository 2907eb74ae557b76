use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

pub struct ProgressBar<'a> {
    pub hidden: usize,
    pub total: usize,
    pub theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(hidden: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            hidden,
            total,
            theme,
        }
    }

    fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.hidden as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    fn percent(&self) -> u8 {
        (self.ratio() * 100.0).round() as u8
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Memorized ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio() * inner.width as f64) as u16;
        let label = format!("{}%", self.percent());

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds() {
        let theme = Theme::default();
        assert_eq!(ProgressBar::new(1, 3, &theme).percent(), 33);
        assert_eq!(ProgressBar::new(2, 3, &theme).percent(), 67);
        assert_eq!(ProgressBar::new(3, 3, &theme).percent(), 100);
    }

    #[test]
    fn test_empty_session_reads_zero() {
        let theme = Theme::default();
        let bar = ProgressBar::new(0, 0, &theme);
        assert_eq!(bar.percent(), 0);
        assert_eq!(bar.ratio(), 0.0);
    }
}
