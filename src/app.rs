use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::celebration::Celebration;
use crate::config::Config;
use crate::event::TICK_RATE;
use crate::session::{HideOutcome, MemorizeState, Verse};
use crate::ui::theme::Theme;

pub struct App {
    pub session: MemorizeState,
    pub celebration: Celebration,
    pub config: Config,
    pub theme: &'static Theme,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, verse: Verse) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        Self {
            session: MemorizeState::new(verse),
            celebration: Celebration::default(),
            config,
            theme,
            should_quit: false,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Conceal one more word. The hide that conceals the last word fires
    /// the celebration; once complete, further presses do nothing.
    pub fn advance(&mut self) {
        match self.session.hide_random_word(&mut self.rng) {
            HideOutcome::Completed { .. } => {
                if self.config.confetti {
                    self.celebration.burst(&mut self.rng);
                }
            }
            HideOutcome::Hidden { .. } | HideOutcome::NothingLeft => {}
        }
    }

    /// Start the same verse over from fully visible.
    pub fn restart(&mut self) {
        self.session.reset();
        self.celebration.clear();
    }

    pub fn on_tick(&mut self) {
        if self.celebration.is_active() {
            self.celebration.tick(TICK_RATE.as_secs_f32());
        }
    }

    pub fn cycle_theme(&mut self) {
        let themes = Theme::available_themes();
        if themes.is_empty() {
            return;
        }
        let next = match themes.iter().position(|t| *t == self.config.theme) {
            Some(idx) => (idx + 1) % themes.len(),
            None => 0,
        };
        self.config.theme = themes[next].clone();
        if let Some(new_theme) = Theme::load(&self.config.theme) {
            let theme: &'static Theme = Box::leak(Box::new(new_theme));
            self.theme = theme;
        }
        let _ = self.config.save();
    }
}
