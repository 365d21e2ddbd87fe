// Sentiment distribution pie chart.

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

use super::{FONT, PALETTE};
use crate::corpus::review::Sentiment;

pub const SIZE: (u32, u32) = (1000, 600);

/// Draw one slice per class with percentage labels, starting at the top.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    counts: &[(Sentiment, usize)],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let area = root.titled("Sentiment Distribution in Movie Reviews", (FONT, 30))?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.38;

    // Largest class first, as a value count would list them
    let mut slices: Vec<(Sentiment, usize)> = counts.iter().copied().filter(|(_, n)| *n > 0).collect();
    slices.sort_by(|a, b| b.1.cmp(&a.1));

    let sizes: Vec<f64> = slices.iter().map(|(_, n)| *n as f64).collect();
    let labels: Vec<&str> = slices.iter().map(|(s, _)| s.as_str()).collect();
    let colors: Vec<RGBColor> = PALETTE.iter().copied().take(slices.len()).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style((FONT, 22).into_font().color(&BLACK));
    pie.percentages((FONT, 20).into_font().color(&BLACK));
    area.draw(&pie)?;

    Ok(())
}
