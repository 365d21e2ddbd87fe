// Side-by-side word clouds for positive and negative reviews.
//
// Words are placed largest first along an Archimedean spiral from the panel
// center, taking the first position whose bounding box overlaps nothing
// already placed. Words that find no free spot are dropped.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ramp, sentiment_ramp, FONT};
use crate::corpus::review::Sentiment;

pub const SIZE: (u32, u32) = (1600, 500);

/// Words per cloud.
pub const MAX_WORDS: usize = 200;

const MIN_FONT: f64 = 10.0;
const MAX_FONT: f64 = 72.0;
const SPIRAL_STEP: f64 = 0.35;
const SPIRAL_SPACING: f64 = 2.5;

/// A word with its font size and top-left pixel position inside the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub font_size: f64,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Frequency relative to the most frequent word, in (0, 1]
    pub weight: f64,
}

impl PlacedWord {
    fn overlaps(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        x < self.x + self.width as i32
            && self.x < x + width as i32
            && y < self.y + self.height as i32
            && self.y < y + height as i32
    }
}

/// Font size for a word with the given relative frequency.
pub fn font_size(weight: f64) -> f64 {
    MIN_FONT + (MAX_FONT - MIN_FONT) * weight.clamp(0.0, 1.0)
}

/// Lay out up to `MAX_WORDS` words in a `width` x `height` panel.
///
/// `measure` returns the pixel extent of a word at a font size.
pub fn layout_words<F>(
    frequencies: &[(String, usize)],
    width: u32,
    height: u32,
    mut measure: F,
) -> Vec<PlacedWord>
where
    F: FnMut(&str, f64) -> (u32, u32),
{
    let Some(&(_, top)) = frequencies.first() else {
        return Vec::new();
    };
    let top = top.max(1) as f64;

    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let max_radius = cx.hypot(cy);

    let mut placed: Vec<PlacedWord> = Vec::new();
    for (word, count) in frequencies.iter().take(MAX_WORDS) {
        let weight = *count as f64 / top;
        let size = font_size(weight);
        let (w, h) = measure(word, size);
        if w > width || h > height {
            continue;
        }

        let mut theta: f64 = 0.0;
        loop {
            let r = SPIRAL_SPACING * theta;
            if r > max_radius {
                break;
            }
            let x = (cx + r * theta.cos() - f64::from(w) / 2.0).round() as i32;
            let y = (cy + r * theta.sin() - f64::from(h) / 2.0).round() as i32;

            let inside = x >= 0
                && y >= 0
                && x + w as i32 <= width as i32
                && y + h as i32 <= height as i32;
            if inside && !placed.iter().any(|p| p.overlaps(x, y, w, h)) {
                placed.push(PlacedWord {
                    word: word.clone(),
                    font_size: size,
                    x,
                    y,
                    width: w,
                    height: h,
                    weight,
                });
                break;
            }
            theta += SPIRAL_STEP;
        }
    }
    placed
}

/// Draw the positive cloud on the left and the negative cloud on the right.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    positive: &[(String, usize)],
    negative: &[(String, usize)],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    let sides = [
        (Sentiment::Positive, positive, "Most Frequent Words in Positive Reviews"),
        (Sentiment::Negative, negative, "Most Frequent Words in Negative Reviews"),
    ];
    for (panel, (sentiment, frequencies, title)) in panels.iter().zip(sides) {
        let area = panel.titled(title, (FONT, 24))?.margin(10, 10, 10, 10);
        draw_cloud(&area, frequencies, sentiment)?;
    }
    Ok(())
}

fn draw_cloud<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frequencies: &[(String, usize)],
    sentiment: Sentiment,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (width, height) = area.dim_in_pixel();

    // A word that cannot be measured is treated as too large to place
    let placed = layout_words(frequencies, width, height, |word, size| {
        area.estimate_text_size(word, &TextStyle::from((FONT, size).into_font()))
            .unwrap_or((u32::MAX, u32::MAX))
    });

    let colors = sentiment_ramp(sentiment);
    for word in &placed {
        let color = ramp(colors, 0.35 + 0.65 * word.weight);
        area.draw(&Text::new(
            word.word.clone(),
            (word.x, word.y),
            (FONT, word.font_size).into_font().color(&color),
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-width glyph metrics so layout can be tested without fonts.
    fn fake_measure(word: &str, size: f64) -> (u32, u32) {
        ((word.len() as f64 * size * 0.6).ceil() as u32, size.ceil() as u32)
    }

    fn freqs(words: &[(&str, usize)]) -> Vec<(String, usize)> {
        words.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_most_frequent_word_is_largest_and_centered() {
        let placed = layout_words(&freqs(&[("film", 10), ("plot", 5)]), 800, 400, fake_measure);
        assert_eq!(placed[0].word, "film");
        assert_eq!(placed[0].font_size, MAX_FONT);
        assert!(placed[1].font_size < placed[0].font_size);

        let center_x = placed[0].x + placed[0].width as i32 / 2;
        assert!((center_x - 400).abs() <= 1);
    }

    #[test]
    fn test_placed_words_never_overlap() {
        let words: Vec<(String, usize)> = (0..150)
            .map(|i| (format!("word{i}"), 300 - i))
            .collect();
        let placed = layout_words(&words, 800, 400, fake_measure);
        assert!(!placed.is_empty());

        for (i, a) in placed.iter().enumerate() {
            assert!(a.x >= 0 && a.y >= 0);
            assert!(a.x + a.width as i32 <= 800 && a.y + a.height as i32 <= 400);
            for b in &placed[i + 1..] {
                assert!(!a.overlaps(b.x, b.y, b.width, b.height), "{} overlaps {}", a.word, b.word);
            }
        }
    }

    #[test]
    fn test_caps_word_count() {
        let words: Vec<(String, usize)> = (0..500).map(|i| (format!("w{i}"), 1)).collect();
        let placed = layout_words(&words, 4000, 4000, |_, _| (2, 2));
        assert_eq!(placed.len(), MAX_WORDS);
    }

    #[test]
    fn test_empty_input_places_nothing() {
        assert!(layout_words(&[], 800, 400, fake_measure).is_empty());
    }
}
