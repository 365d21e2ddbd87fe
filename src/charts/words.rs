// Top word-frequency bar charts, positive reviews above negative ones.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ramp, sentiment_ramp, FONT};
use crate::corpus::review::Sentiment;

pub const SIZE: (u32, u32) = (1500, 1000);

/// Bars per chart.
pub const TOP_WORDS: usize = 15;

pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    positive: &[(String, usize)],
    negative: &[(String, usize)],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));

    let sides = [
        (Sentiment::Positive, positive, "Top 15 Words in Positive Reviews"),
        (Sentiment::Negative, negative, "Top 15 Words in Negative Reviews"),
    ];
    for (panel, (sentiment, frequencies, title)) in panels.iter().zip(sides) {
        let top = &frequencies[..frequencies.len().min(TOP_WORDS)];
        draw_bars(panel, top, sentiment, title)?;
    }
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    top: &[(String, usize)],
    sentiment: Sentiment,
    title: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let max = top.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as u32;
    let y_max = max + max / 10 + 1;
    let n = top.len().max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..y_max)?;

    let label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => top.get(*i).map(|(w, _)| w.clone()).unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&label)
        .x_desc("Word")
        .y_desc("Frequency")
        .axis_desc_style((FONT, 18))
        .label_style((FONT, 14))
        .draw()?;

    // Darkest bar for the most frequent word
    let colors = sentiment_ramp(sentiment);
    chart.draw_series(top.iter().enumerate().map(|(i, (_, count))| {
        let t = 1.0 - i as f64 / n as f64;
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0u32),
                (SegmentValue::Exact(i + 1), *count as u32),
            ],
            ramp(colors, 0.3 + 0.7 * t).filled(),
        );
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    Ok(())
}
