pub mod confetti;
pub mod progress_bar;
pub mod verse_area;
