//! Chart Specifications
//!
//! Pure builders that project dream data into drawable chart descriptions.
//! No DOM access here; the canvas adapter in `components::chart` consumes
//! the specs. Re-drawing a spec fully replaces whatever was on the surface.

use std::collections::HashMap;

use crate::state::global::{ordered_counts, DreamRecord};

pub const INDIGO: &str = "rgb(99, 102, 241)";
pub const INDIGO_FILL: &str = "rgba(99, 102, 241, 0.1)";
pub const INDIGO_SOFT: &str = "rgba(99, 102, 241, 0.5)";
pub const PURPLE: &str = "rgb(147, 51, 234)";
pub const PURPLE_FILL: &str = "rgba(147, 51, 234, 0.1)";
pub const PURPLE_SOFT: &str = "rgba(147, 51, 234, 0.5)";

/// Doughnut slice palette, applied positionally. Slices past the fourth
/// cycle back to the start, so distinct colors are only guaranteed for up
/// to four labels.
pub const PALETTE: [&str; 4] = [
    "rgba(99, 102, 241, 0.5)",
    "rgba(147, 51, 234, 0.5)",
    "rgba(236, 72, 153, 0.5)",
    "rgba(248, 113, 113, 0.5)",
];

/// Color for the doughnut slice at `index`
pub fn slice_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Chart shape understood by the canvas adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

/// One labeled data series
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<f64>,
    pub stroke: &'static str,
    pub fill: Option<&'static str>,
}

/// Y-axis scaling options
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct YAxis {
    pub begin_at_zero: bool,
    pub max: Option<f64>,
    /// Force tick spacing (integer counts use 1.0)
    pub step: Option<f64>,
}

/// A complete drawable chart description
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub y_axis: YAxis,
    pub legend: bool,
}

impl ChartSpec {
    /// Legend rows: (label, swatch color). Doughnuts legend their slices,
    /// everything else legends its series.
    pub fn legend_entries(&self) -> Vec<(String, &'static str)> {
        match self.kind {
            ChartKind::Doughnut => self
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| (label.clone(), slice_color(i)))
                .collect(),
            _ => self
                .series
                .iter()
                .map(|s| (s.name.clone(), s.stroke))
                .collect(),
        }
    }
}

/// Sentiment score and magnitude over time, in API insertion order
pub fn sentiment_chart(dreams: &[DreamRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        labels: dreams.iter().map(|d| d.date.to_string()).collect(),
        series: vec![
            Series {
                name: "Sentiment Score".to_string(),
                points: dreams.iter().map(|d| d.sentiment_score).collect(),
                stroke: INDIGO,
                fill: Some(INDIGO_FILL),
            },
            Series {
                name: "Sentiment Magnitude".to_string(),
                points: dreams.iter().map(|d| d.sentiment_magnitude).collect(),
                stroke: PURPLE,
                fill: Some(PURPLE_FILL),
            },
        ],
        y_axis: YAxis {
            begin_at_zero: true,
            ..Default::default()
        },
        legend: true,
    }
}

/// Lucidity level over time, in API insertion order
pub fn lucidity_chart(dreams: &[DreamRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: dreams.iter().map(|d| d.date.to_string()).collect(),
        series: vec![Series {
            name: "Lucidity Level".to_string(),
            points: dreams.iter().map(|d| d.lucidity_level).collect(),
            stroke: PURPLE,
            fill: Some(PURPLE_SOFT),
        }],
        y_axis: YAxis {
            begin_at_zero: true,
            max: Some(1.0),
            ..Default::default()
        },
        legend: false,
    }
}

/// Sleep position distribution as a doughnut
pub fn position_chart(position_counts: &HashMap<String, u64>) -> ChartSpec {
    let ordered = ordered_counts(position_counts);
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: ordered.iter().map(|(label, _)| label.clone()).collect(),
        series: vec![Series {
            name: "Positions".to_string(),
            points: ordered.iter().map(|(_, count)| *count as f64).collect(),
            stroke: INDIGO_SOFT,
            fill: None,
        }],
        y_axis: YAxis::default(),
        legend: true,
    }
}

/// Emotion frequency as integer-stepped bars, legend suppressed
pub fn emotion_chart(emotion_counts: &HashMap<String, u64>) -> ChartSpec {
    let ordered = ordered_counts(emotion_counts);
    ChartSpec {
        kind: ChartKind::Bar,
        labels: ordered.iter().map(|(label, _)| label.clone()).collect(),
        series: vec![Series {
            name: "Frequency".to_string(),
            points: ordered.iter().map(|(_, count)| *count as f64).collect(),
            stroke: INDIGO,
            fill: Some(INDIGO_SOFT),
        }],
        y_axis: YAxis {
            begin_at_zero: true,
            step: Some(1.0),
            ..Default::default()
        },
        legend: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dream(date: &str, score: f64, magnitude: f64, lucidity: f64) -> DreamRecord {
        DreamRecord {
            date: date.parse().unwrap(),
            title: "t".to_string(),
            content: "c".to_string(),
            mood: None,
            sentiment_score: score,
            sentiment_magnitude: magnitude,
            lucidity_level: lucidity,
        }
    }

    fn counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn sentiment_chart_keeps_insertion_order() {
        // Records arrive unsorted; the time charts must not resort them
        let dreams = vec![
            dream("2024-03-05", 0.5, 1.0, 0.2),
            dream("2024-01-01", -0.2, 0.4, 0.9),
            dream("2024-02-10", 0.0, 0.0, 0.5),
        ];
        let spec = sentiment_chart(&dreams);

        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.labels, ["2024-03-05", "2024-01-01", "2024-02-10"]);
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].points, [0.5, -0.2, 0.0]);
        assert_eq!(spec.series[1].points, [1.0, 0.4, 0.0]);
        assert!(spec.y_axis.begin_at_zero);
        assert_eq!(spec.y_axis.max, None);
    }

    #[test]
    fn lucidity_chart_clamps_axis_to_unit_interval() {
        let dreams = vec![dream("2024-01-01", 0.1, 0.1, 0.75)];
        let spec = lucidity_chart(&dreams);

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].points, [0.75]);
        assert!(spec.y_axis.begin_at_zero);
        assert_eq!(spec.y_axis.max, Some(1.0));
    }

    #[test]
    fn empty_dreams_produce_empty_specs() {
        let spec = sentiment_chart(&[]);
        assert!(spec.labels.is_empty());
        assert!(spec.series.iter().all(|s| s.points.is_empty()));
    }

    #[test]
    fn position_chart_orders_slices_deterministically() {
        let spec = position_chart(&counts(&[("back", 2), ("side", 5), ("fetal", 2)]));

        assert_eq!(spec.kind, ChartKind::Doughnut);
        assert_eq!(spec.labels, ["side", "back", "fetal"]);
        assert_eq!(spec.series[0].points, [5.0, 2.0, 2.0]);
    }

    #[test]
    fn doughnut_palette_cycles_past_four_slices() {
        let spec = position_chart(&counts(&[
            ("back", 9),
            ("side", 8),
            ("fetal", 7),
            ("stomach", 6),
            ("starfish", 5),
        ]));
        let legend = spec.legend_entries();

        assert_eq!(legend.len(), 5);
        assert_eq!(legend[0].1, PALETTE[0]);
        // Fifth slice wraps around to the first palette color
        assert_eq!(legend[4].1, PALETTE[0]);
    }

    #[test]
    fn emotion_chart_uses_integer_steps_without_legend() {
        let spec = emotion_chart(&counts(&[("joy", 3), ("fear", 1)]));

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels, ["joy", "fear"]);
        assert_eq!(spec.y_axis.step, Some(1.0));
        assert!(!spec.legend);
    }

    #[test]
    fn line_legend_names_its_series() {
        let spec = sentiment_chart(&[dream("2024-01-01", 0.0, 0.0, 0.0)]);
        let legend = spec.legend_entries();

        assert_eq!(legend[0], ("Sentiment Score".to_string(), INDIGO));
        assert_eq!(legend[1], ("Sentiment Magnitude".to_string(), PURPLE));
    }
}
