use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::session::WordCell;
use crate::ui::theme::Theme;

pub struct VerseArea<'a> {
    cells: &'a [WordCell],
    reference: &'a str,
    placeholder: char,
    theme: &'a Theme,
}

impl<'a> VerseArea<'a> {
    pub fn new(
        cells: &'a [WordCell],
        reference: &'a str,
        placeholder: char,
        theme: &'a Theme,
    ) -> Self {
        Self {
            cells,
            reference,
            placeholder,
            theme,
        }
    }
}

/// A concealed word renders as the placeholder glyph repeated once per
/// character, so the reader still sees the word's length.
fn display_word(cell: &WordCell, placeholder: char) -> String {
    if cell.hidden {
        std::iter::repeat(placeholder)
            .take(cell.word.chars().count())
            .collect()
    } else {
        cell.word.clone()
    }
}

impl Widget for VerseArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans: Vec<Span> = Vec::with_capacity(self.cells.len() * 2);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if cell.hidden {
                Style::default()
                    .fg(colors.text_hidden())
                    .bg(colors.text_hidden_bg())
            } else {
                Style::default()
                    .fg(colors.text_visible())
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(display_word(cell, self.placeholder), style));
        }

        let block = Block::bordered()
            .title(format!(" {} ", self.reference))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()))
            .padding(Padding::new(2, 2, 1, 1));

        let paragraph = Paragraph::new(Line::from(spans))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}
