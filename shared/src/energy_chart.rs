//! Turns a day's raw generation mix into pie-chart segments.
//!
//! Everything here is pure: the same averages always produce the same
//! segments, in the same order, with the same colors.

use std::fmt;

use crate::{Averages, ChartDataError, DayMix, EnergyMixResponse};

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Drawn for sources that have no palette entry
pub const FALLBACK_COLOR: Rgb = Rgb(0xAD, 0xB5, 0xBD);

/// Fixed color per generation source
pub fn source_color(source: &str) -> Option<Rgb> {
    match source.to_lowercase().as_str() {
        "gas" => Some(Rgb(0xFF, 0x6B, 0x6B)),
        "coal" => Some(Rgb(0x4A, 0x4A, 0x4A)),
        "biomass" => Some(Rgb(0x51, 0xCF, 0x66)),
        "nuclear" => Some(Rgb(0x4D, 0xAB, 0xF7)),
        "hydro" => Some(Rgb(0x33, 0x9A, 0xF0)),
        "imports" => Some(Rgb(0xFF, 0xA9, 0x4D)),
        "other" => Some(Rgb(0x86, 0x8E, 0x96)),
        "wind" => Some(Rgb(0x94, 0xD8, 0x2D)),
        "solar" => Some(Rgb(0xFF, 0xD4, 0x3B)),
        _ => None,
    }
}

/// One slice of a day's pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    /// Share in percent, rounded to two decimals
    pub value: f64,
    pub color: Option<Rgb>,
}

impl ChartSegment {
    pub fn color_or_default(&self) -> Rgb {
        self.color.unwrap_or(FALLBACK_COLOR)
    }

    /// External label drawn next to the slice, e.g. `wind: 40.5%`
    pub fn caption(&self) -> String {
        format!("{}: {}%", self.label, self.value)
    }
}

/// Round to two decimal places from the exact stored value, ties away from
/// zero. `1.115` is stored as `1.11499...` and becomes `1.11`.
pub fn round_percent(value: f64) -> f64 {
    // Only multiples of 1/8 can sit exactly on a hundredths tie, and for
    // those the scaling by 100 is exact
    if (value * 8.0).fract() == 0.0 {
        return (value * 100.0).round() / 100.0;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Format a percentage with exactly two decimals, e.g. `40.00%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Build the ordered segment list for one day.
///
/// The clean-energy aggregate is skipped, values are rounded to two decimals
/// and anything that rounds to zero or below is not drawn. Wire order is kept.
pub fn to_segments(averages: &Averages) -> Vec<ChartSegment> {
    averages
        .sources()
        .filter_map(|(name, value)| {
            let value = round_percent(value);
            // NaN fails the comparison and is dropped too
            if !(value > 0.0) {
                return None;
            }
            Some(ChartSegment {
                label: name.to_string(),
                value,
                color: source_color(name),
            })
        })
        .collect()
}

/// Positional label: the service's first day is always today
pub fn day_label(index: usize) -> String {
    match index {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        2 => "Day After Tomorrow".to_string(),
        n => format!("In {} Days", n),
    }
}

/// Everything needed to draw and caption one day's chart
#[derive(Debug, Clone, PartialEq)]
pub struct DayChart {
    pub date: String,
    pub label: String,
    pub clean_energy_percent: f64,
    pub segments: Vec<ChartSegment>,
}

impl DayChart {
    pub fn from_day(index: usize, day: &DayMix) -> Result<Self, ChartDataError> {
        let averages = day.averages()?;
        let clean_energy_percent =
            averages
                .clean_energy_percent()
                .ok_or_else(|| ChartDataError::MissingCleanEnergy {
                    date: day.date.clone(),
                })?;

        Ok(Self {
            date: day.date.clone(),
            label: day_label(index),
            clean_energy_percent,
            segments: to_segments(&averages),
        })
    }

    /// `Today (2025-12-01)`
    pub fn title(&self) -> String {
        format!("{} ({})", self.label, self.date)
    }

    /// `Clean Energy: 44.75%`
    pub fn clean_energy_caption(&self) -> String {
        format!("Clean Energy: {}", format_percent(self.clean_energy_percent))
    }
}

impl EnergyMixResponse {
    /// Adapt every day in order. The first day that fails to adapt fails the
    /// whole response.
    pub fn day_charts(&self) -> Result<Vec<DayChart>, ChartDataError> {
        self.days
            .iter()
            .enumerate()
            .map(|(index, day)| DayChart::from_day(index, day))
            .collect()
    }
}
