use rand::Rng;

use crate::session::verse::Verse;

/// One word of the verse plus its concealment flag. Cells are rebuilt
/// wholesale on every reset; `original_index` is the word's position in the
/// source text and never changes within a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCell {
    pub word: String,
    pub hidden: bool,
    pub original_index: usize,
}

/// What a single hide attempt did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideOutcome {
    /// One more word was concealed; visible words remain.
    Hidden { index: usize },
    /// This hide concealed the last visible word. Fires at most once per
    /// session: afterwards every attempt is `NothingLeft` until a reset.
    Completed { index: usize },
    /// No visible words to conceal; state is unchanged.
    NothingLeft,
}

/// Memorization session over one verse. All mutation happens synchronously
/// through `hide_random_word` and `reset`; concealment is monotonic per word
/// until the next reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemorizeState {
    verse: Verse,
    cells: Vec<WordCell>,
    complete: bool,
}

impl MemorizeState {
    pub fn new(verse: Verse) -> Self {
        let cells = build_cells(&verse);
        Self {
            verse,
            cells,
            complete: false,
        }
    }

    /// Discard all concealment and start the same verse over.
    pub fn reset(&mut self) {
        self.cells = build_cells(&self.verse);
        self.complete = false;
    }

    /// Replace the verse entirely and start a fresh session on it.
    #[allow(dead_code)]
    pub fn replace_verse(&mut self, verse: Verse) {
        self.verse = verse;
        self.reset();
    }

    /// Conceal one word chosen uniformly from the still-visible ones.
    /// A session with no visible words left (already complete, or zero-word
    /// verse) is left untouched and reports `NothingLeft`.
    pub fn hide_random_word<R: Rng>(&mut self, rng: &mut R) -> HideOutcome {
        let visible: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.hidden)
            .map(|(i, _)| i)
            .collect();

        if visible.is_empty() {
            return HideOutcome::NothingLeft;
        }

        let index = visible[rng.gen_range(0..visible.len())];
        self.cells[index].hidden = true;

        if visible.len() == 1 {
            self.complete = true;
            HideOutcome::Completed { index }
        } else {
            HideOutcome::Hidden { index }
        }
    }

    pub fn verse(&self) -> &Verse {
        &self.verse
    }

    pub fn cells(&self) -> &[WordCell] {
        &self.cells
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.hidden).count()
    }

    pub fn total_count(&self) -> usize {
        self.cells.len()
    }

    pub fn progress(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.hidden_count() as f64 / self.cells.len() as f64
    }

    /// Rounded percentage of concealed words; 0 for a zero-word session.
    pub fn progress_percent(&self) -> u8 {
        (self.progress() * 100.0).round() as u8
    }
}

fn build_cells(verse: &Verse) -> Vec<WordCell> {
    verse
        .words()
        .into_iter()
        .enumerate()
        .map(|(i, word)| WordCell {
            word: word.to_string(),
            hidden: false,
            original_index: i,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session(text: &str) -> MemorizeState {
        MemorizeState::new(Verse::new("Test 1:1", text))
    }

    #[test]
    fn test_new_session_all_visible() {
        let state = session("in the beginning was the word");
        assert_eq!(state.total_count(), 6);
        assert_eq!(state.hidden_count(), 0);
        assert!(!state.is_complete());
        assert!(state.cells().iter().all(|c| !c.hidden));
    }

    #[test]
    fn test_cells_keep_source_order() {
        let state = session("a b c");
        let words: Vec<&str> = state.cells().iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
        for (i, cell) in state.cells().iter().enumerate() {
            assert_eq!(cell.original_index, i);
        }
    }

    #[test]
    fn test_hide_conceals_exactly_one_visible_word() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut state = session("one two three four");
        let outcome = state.hide_random_word(&mut rng);
        let index = match outcome {
            HideOutcome::Hidden { index } => index,
            other => panic!("unexpected outcome {other:?}"),
        };
        assert!(state.cells()[index].hidden);
        assert_eq!(state.hidden_count(), 1);
    }

    #[test]
    fn test_k_hides_yield_k_distinct_hidden_words() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut state = session("the quick brown fox jumps over the lazy dog");
        let total = state.total_count();
        for k in 1..=total {
            state.hide_random_word(&mut rng);
            assert_eq!(state.hidden_count(), k);
        }
        assert!(state.is_complete());
    }

    #[test]
    fn test_last_hide_reports_completed() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut state = session("love never fails");
        assert!(matches!(
            state.hide_random_word(&mut rng),
            HideOutcome::Hidden { .. }
        ));
        assert!(matches!(
            state.hide_random_word(&mut rng),
            HideOutcome::Hidden { .. }
        ));
        assert!(matches!(
            state.hide_random_word(&mut rng),
            HideOutcome::Completed { .. }
        ));
        assert!(state.is_complete());
    }

    #[test]
    fn test_completion_signals_only_once() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut state = session("be still and know");
        let mut completions = 0;
        for _ in 0..10 {
            if matches!(
                state.hide_random_word(&mut rng),
                HideOutcome::Completed { .. }
            ) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_hide_after_complete_is_identity() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut state = session("walk by faith");
        for _ in 0..3 {
            state.hide_random_word(&mut rng);
        }
        assert!(state.is_complete());

        let before = state.clone();
        assert_eq!(state.hide_random_word(&mut rng), HideOutcome::NothingLeft);
        assert_eq!(state, before);
    }

    #[test]
    fn test_zero_word_session_never_completes() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut state = session("   ");
        assert_eq!(state.total_count(), 0);
        assert_eq!(state.hide_random_word(&mut rng), HideOutcome::NothingLeft);
        assert!(!state.is_complete());
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn test_three_word_progression_percentages() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut state = session("Jesus loves you");
        assert_eq!(state.progress_percent(), 0);

        state.hide_random_word(&mut rng);
        assert_eq!(state.progress_percent(), 33);
        assert!(!state.is_complete());

        state.hide_random_word(&mut rng);
        assert_eq!(state.progress_percent(), 67);
        assert!(!state.is_complete());

        state.hide_random_word(&mut rng);
        assert_eq!(state.progress_percent(), 100);
        assert!(state.is_complete());
    }

    #[test]
    fn test_reset_discards_concealment() {
        let mut rng = SmallRng::seed_from_u64(21);
        let mut state = session("trust in the lord");
        state.hide_random_word(&mut rng);
        state.hide_random_word(&mut rng);
        assert_eq!(state.hidden_count(), 2);

        state.reset();
        assert_eq!(state.hidden_count(), 0);
        assert_eq!(state.total_count(), 4);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_replace_verse_starts_fresh_session() {
        let mut rng = SmallRng::seed_from_u64(13);
        let mut state = session("first verse here");
        state.hide_random_word(&mut rng);

        state.replace_verse(Verse::new("Test 2:2", "a different passage entirely now"));
        assert_eq!(state.total_count(), 5);
        assert_eq!(state.hidden_count(), 0);
        assert_eq!(state.verse().reference, "Test 2:2");
    }

    #[test]
    fn test_single_word_verse_completes_immediately() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut state = session("selah");
        assert_eq!(
            state.hide_random_word(&mut rng),
            HideOutcome::Completed { index: 0 }
        );
        assert_eq!(state.progress_percent(), 100);
    }
}
