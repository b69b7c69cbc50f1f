//! Per-hour bar chart comparing the two configured junctions.

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::HourlyCounts;
use crate::config::AnalyserConfig;

const SIZE: (u32, u32) = (800, 600);
const BAR_WIDTH: f64 = 0.4;
/// The y axis always covers at least this many vehicles.
const MIN_Y: usize = 100;

/// Renders the chart as an SVG document.
pub fn render_svg(
    hourly: &HourlyCounts,
    date_label: &str,
    config: &AnalyserConfig,
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        draw_histogram(&root, hourly, date_label, config)?;
        root.present()?;
    }
    Ok(svg)
}

/// Renders the chart and writes it to `path`.
pub fn write_chart(
    path: &Path,
    hourly: &HourlyCounts,
    date_label: &str,
    config: &AnalyserConfig,
) -> Result<()> {
    let svg = render_svg(hourly, date_label, config)?;
    std::fs::write(path, &svg)
        .with_context(|| format!("failed to write chart {}", path.display()))?;
    debug!(path = %path.display(), bytes = svg.len(), "Chart written");
    Ok(())
}

fn draw_histogram<DB>(
    root: &DrawingArea<DB, Shift>,
    hourly: &HourlyCounts,
    date_label: &str,
    config: &AnalyserConfig,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let y_max = hourly.max_count().max(MIN_Y) as f64;
    let [pr, pg, pb] = config.primary.color;
    let [sr, sg, sb] = config.secondary.color;
    let primary_color = RGBColor(pr, pg, pb);
    let secondary_color = RGBColor(sr, sg, sb);

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Histogram of Vehicle Frequency per Hour - {date_label}"),
            ("sans-serif", 22),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..24.0, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(25)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("Hour of day")
        .y_desc("Vehicles")
        .draw()?;

    chart
        .draw_series(hourly.iter().map(|(hour, counts)| {
            let x = hour as f64 + 0.1;
            Rectangle::new(
                [(x, 0.0), (x + BAR_WIDTH, counts.primary as f64)],
                primary_color.filled(),
            )
        }))?
        .label(config.primary.label.as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], primary_color.filled()));

    chart
        .draw_series(hourly.iter().map(|(hour, counts)| {
            let x = hour as f64 + 0.1 + BAR_WIDTH;
            Rectangle::new(
                [(x, 0.0), (x + BAR_WIDTH, counts.secondary as f64)],
                secondary_color.filled(),
            )
        }))?
        .label(config.secondary.label.as_str())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 20, y + 5)], secondary_color.filled())
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::hourly::group_by_hour;
    use crate::record::TrafficRecord;

    fn hourly() -> HourlyCounts {
        let data = vec![
            TrafficRecord::from_fields(["Elm Avenue/Rabbit Road", "d", "08:00", "N", "S"]),
            TrafficRecord::from_fields(["Hanley Highway/Westway", "d", "17:30", "E", "W"]),
        ];
        group_by_hour(&data, "Elm Avenue", "Hanley Highway")
    }

    #[test]
    fn test_render_svg_has_title_and_legend() {
        let svg = render_svg(&hourly(), "15/06/2024", &AnalyserConfig::default()).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Histogram of Vehicle Frequency per Hour - 15/06/2024"));
        assert!(svg.contains("Elm Avenue"));
        assert!(svg.contains("Hanley Highway"));
    }

    #[test]
    fn test_render_svg_with_empty_day() {
        let svg = render_svg(&HourlyCounts::default(), "01/01/2000", &AnalyserConfig::default());
        assert!(svg.is_ok());
    }

    #[test]
    fn test_write_chart_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histogram.svg");

        write_chart(&path, &hourly(), "15/06/2024", &AnalyserConfig::default()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("</svg>"));
    }
}
