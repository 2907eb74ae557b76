use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥70 cols: progress bar, full header detail, key hints
    Narrow, // <70 cols: verse only, compact header
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 70 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_progress_bar(&self, height: u16) -> bool {
        height >= 14 && *self == LayoutTier::Wide
    }

    pub fn show_word_detail(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            footer: vertical[2],
            tier,
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let target_w = (area.width.saturating_mul(percent_x.min(100)) / 100).min(area.width);
    let target_h = (area.height.saturating_mul(percent_y.min(100)) / 100).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 70, 24)), LayoutTier::Wide);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 69, 24)), LayoutTier::Narrow);
    }

    #[test]
    fn test_narrow_tier_drops_progress_bar() {
        assert!(LayoutTier::Wide.show_progress_bar(24));
        assert!(!LayoutTier::Wide.show_progress_bar(10));
        assert!(!LayoutTier::Narrow.show_progress_bar(24));
    }

    #[test]
    fn test_centered_rect_stays_inside_area() {
        let area = Rect::new(2, 3, 80, 24);
        let rect = centered_rect(50, 50, area);
        assert!(rect.x >= area.x && rect.y >= area.y);
        assert!(rect.right() <= area.right() && rect.bottom() <= area.bottom());
    }
}
