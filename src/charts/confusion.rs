// Confusion-matrix heatmaps, two models per row.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use super::{ramp, BLUE_RAMP, FONT};
use crate::corpus::review::Sentiment;
use crate::evaluate::metrics::ConfusionMatrix;
use crate::evaluate::ModelResults;

pub const COLUMNS: usize = 2;
const PANEL_SIZE: (u32, u32) = (750, 500);

/// Rows needed to show `n` heatmaps, at least one.
pub fn grid_rows(n: usize) -> usize {
    n.div_ceil(COLUMNS).max(1)
}

pub fn size_for(n: usize) -> (u32, u32) {
    (
        PANEL_SIZE.0 * COLUMNS as u32,
        PANEL_SIZE.1 * grid_rows(n) as u32,
    )
}

/// Cell color for `count` given the largest count in the matrix.
pub fn cell_color(count: u32, max: u32) -> RGBColor {
    if max == 0 {
        return BLUE_RAMP.0;
    }
    ramp(BLUE_RAMP, f64::from(count) / f64::from(max))
}

pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    results: &ModelResults,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let entries = results.in_training_order();
    let panels = root.split_evenly((grid_rows(entries.len()), COLUMNS));

    for (panel, (_, result)) in panels.iter().zip(&entries) {
        let title = format!("{} Confusion Matrix", result.model_name);
        let area = panel.titled(&title, (FONT, 22))?;
        draw_heatmap(&area, &result.confusion_matrix)?;
    }
    Ok(())
}

fn draw_heatmap<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    matrix: &ConfusionMatrix,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (width, height) = area.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);

    // Room on the left for the y tick labels and description, below for x
    let left = 150;
    let bottom = 80;
    let side = (width - left - 40).min(height - bottom - 10).max(2);
    let cell = side / 2;
    let x0 = left + (width - left - side) / 2 - 20;
    let y0 = 5;

    let max = matrix.iter().flatten().copied().max().unwrap_or(0);
    let centered = |size: i32| {
        TextStyle::from((FONT, size).into_font()).pos(Pos::new(HPos::Center, VPos::Center))
    };

    for (actual, row) in matrix.iter().enumerate() {
        for (predicted, &count) in row.iter().enumerate() {
            let cx = x0 + predicted as i32 * cell;
            let cy = y0 + actual as i32 * cell;
            let color = cell_color(count, max);
            area.draw(&Rectangle::new([(cx, cy), (cx + cell, cy + cell)], color.filled()))?;

            // Light text on dark cells
            let text_color = if max > 0 && f64::from(count) / f64::from(max) > 0.5 {
                WHITE
            } else {
                BLACK
            };
            area.draw(&Text::new(
                count.to_string(),
                (cx + cell / 2, cy + cell / 2),
                centered(28).color(&text_color),
            ))?;
        }
    }

    for class in Sentiment::ALL {
        let offset = class.label() * cell + cell / 2;
        area.draw(&Text::new(
            class.as_str(),
            (x0 + offset, y0 + 2 * cell + 18),
            centered(16),
        ))?;
        area.draw(&Text::new(
            class.as_str(),
            (x0 - 45, y0 + offset),
            centered(16),
        ))?;
    }

    area.draw(&Text::new(
        "Predicted label",
        (x0 + cell, y0 + 2 * cell + 50),
        centered(18),
    ))?;
    area.draw(&Text::new(
        "True label",
        (x0 - 110, y0 + cell),
        TextStyle::from((FONT, 18).into_font().transform(FontTransform::Rotate270))
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(0), 1);
        assert_eq!(grid_rows(1), 1);
        assert_eq!(grid_rows(2), 1);
        assert_eq!(grid_rows(3), 2);
    }

    #[test]
    fn test_size_grows_with_rows() {
        assert_eq!(size_for(3), (1500, 1000));
        assert_eq!(size_for(2), (1500, 500));
    }

    #[test]
    fn test_cell_color_scales_with_count() {
        assert_eq!(cell_color(0, 10), BLUE_RAMP.0);
        assert_eq!(cell_color(10, 10), BLUE_RAMP.1);
        assert_eq!(cell_color(5, 0), BLUE_RAMP.0);
    }
}
