// Model accuracy comparison bar chart.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{FONT, PALETTE};
use crate::evaluate::ModelResults;

pub const SIZE: (u32, u32) = (1200, 600);

/// One bar per model in training order, y fixed to [0, 1], each bar labeled
/// with its accuracy to four decimals.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    results: &ModelResults,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let entries = results.in_training_order();
    let names: Vec<&str> = entries.iter().map(|(_, r)| r.model_name.as_str()).collect();
    let n = entries.len().max(1);

    let mut chart = ChartBuilder::on(root)
        .caption("Model Accuracy Comparison", (FONT, 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..1f64)?;

    let label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => names.get(*i).map(|s| s.to_string()).unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&label)
        .y_labels(11)
        .y_label_formatter(&|y: &f64| format!("{y:.1}"))
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .x_desc("Model")
        .y_desc("Accuracy")
        .axis_desc_style((FONT, 18))
        .label_style((FONT, 15))
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(i, (_, result))| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), result.accuracy),
            ],
            PALETTE[i % PALETTE.len()].filled(),
        );
        bar.set_margin(0, 0, 30, 30);
        bar
    }))?;

    let value_style = TextStyle::from((FONT, 18).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(entries.iter().enumerate().map(|(i, (_, result))| {
        Text::new(
            format!("{:.4}", result.accuracy),
            (SegmentValue::CenterOf(i), (result.accuracy + 0.01).min(1.0)),
            value_style.clone(),
        )
    }))?;

    Ok(())
}
