use std::iter::{repeat, repeat_n};

/// a labelled percentage bar.
pub struct Meter {
    pub label: &'static str,
    pub percent: f64,
    pub width: usize,
}

/// === impl Meter ===

impl Meter {
    const FILLED: char = '█';
    const EMPTY: char = ' ';

    /// renders the bar as a single line of text.
    ///
    /// out-of-range percentages are clamped to [0, 100].
    pub fn render(&self) -> String {
        let Self {
            label,
            percent,
            width,
        } = *self;
        let percent = percent.clamp(0.0, 100.0);

        let filled = (percent / 100.0 * width as f64) as usize;
        let bar = repeat_n(Self::FILLED, filled)
            .chain(repeat(Self::EMPTY))
            .take(width)
            .collect::<String>();

        format!("{label} │{bar}│ {percent:6.2}%")
    }
}
