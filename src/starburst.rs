//! Polar "starburst" chart: one angular sector per theme, colored by
//! domain, radial extent equal to the aggregated value.
//!
//! plotters has no native polar chart, so sectors are wedge polygons drawn
//! on a symmetric cartesian coordinate centered on the origin.

use std::f64::consts::PI;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::aggregate::Aggregate;
use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::taxonomy::{self, Domain, THEME_COUNT};

/// A fully resolved chart description: title plus one radial value per
/// angular slot. Themes absent from the aggregate keep their slot at zero
/// radius so charts for different subsets stay visually aligned.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub values: [f64; THEME_COUNT],
}

impl ChartSpec {
    pub fn from_aggregate(title: impl Into<String>, aggregate: &Aggregate) -> Self {
        let mut values = [0.0; THEME_COUNT];
        for (theme, &value) in aggregate {
            // Aggregate keys come from Record::theme(), which only yields
            // taxonomy names; anything else is a bug upstream.
            let slot = taxonomy::slot_of(theme)
                .unwrap_or_else(|| panic!("aggregate key {theme:?} is not a taxonomy theme"));
            values[slot] = value;
        }
        Self {
            title: title.into(),
            values,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.max_value() <= 0.0
    }
}

const SECTOR: f64 = 2.0 * PI / THEME_COUNT as f64;
const ARC_STEPS: usize = 12;
const LABEL_FONT: u32 = 13;

/// Renders the spec to a PNG. An all-zero spec produces a degenerate but
/// valid chart; only backend failures are errors.
pub fn render(path: &Path, spec: &ChartSpec, cfg: &ChartConfig) -> Result<()> {
    draw(path, spec, cfg).map_err(|e| Error::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw(
    path: &Path,
    spec: &ChartSpec,
    cfg: &ChartConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let axis_max = axis_range(spec);
    // Headroom outside the data circle for the theme labels.
    let extent = axis_max * 1.45;

    let root = BitMapBackend::new(path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&spec.title, ("sans-serif", 30))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    // Radial grid: unit-spaced rings up to the subset maximum, plus the
    // axis boundary.
    for tick in 1..=axis_max.floor() as usize {
        chart.draw_series(std::iter::once(PathElement::new(
            ring_points(tick as f64),
            BLACK.mix(0.12),
        )))?;
    }
    chart.draw_series(std::iter::once(PathElement::new(
        ring_points(axis_max),
        BLACK.mix(0.3),
    )))?;

    // One layer per domain, in fixed display order, restricted to that
    // domain's angular slots.
    let opacity = cfg.opacity;
    for domain in Domain::ALL {
        let color = domain.color();
        let mut wedges = Vec::new();
        let mut outlines = Vec::new();
        for slot in domain.slots() {
            let value = spec.values[slot];
            if value <= 0.0 {
                continue;
            }
            let points = wedge_points(slot, value);
            let mut outline = points.clone();
            outline.push(points[0]);
            wedges.push(Polygon::new(points, color.mix(opacity).filled()));
            outlines.push(PathElement::new(outline, BLACK.stroke_width(2)));
        }
        chart
            .draw_series(wedges)?
            .label(domain.label())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.mix(opacity).filled())
            });
        chart.draw_series(outlines)?;
    }

    // Theme labels around the rim, one per slot whether or not it has data.
    let label_style = ("sans-serif", LABEL_FONT)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series((0..THEME_COUNT).map(|slot| {
        let mid = mid_angle(slot);
        let r = axis_max * 1.18;
        Text::new(
            taxonomy::theme_name(slot),
            (r * mid.cos(), r * mid.sin()),
            label_style.clone(),
        )
    }))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Radial axis range: zero to the subset maximum. An all-zero chart still
/// needs a non-degenerate coordinate, so only that case gets a 1.0 range.
fn axis_range(spec: &ChartSpec) -> f64 {
    let max = spec.max_value();
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Sector start/end angles for a slot, clockwise from twelve o'clock.
fn sector_angles(slot: usize) -> (f64, f64) {
    let start = PI / 2.0 - slot as f64 * SECTOR;
    (start, start - SECTOR)
}

fn mid_angle(slot: usize) -> f64 {
    let (a0, a1) = sector_angles(slot);
    (a0 + a1) / 2.0
}

fn wedge_points(slot: usize, radius: f64) -> Vec<(f64, f64)> {
    let (a0, a1) = sector_angles(slot);
    let mut points = Vec::with_capacity(ARC_STEPS + 2);
    points.push((0.0, 0.0));
    for i in 0..=ARC_STEPS {
        let a = a0 + (a1 - a0) * (i as f64 / ARC_STEPS as f64);
        points.push((radius * a.cos(), radius * a.sin()));
    }
    points
}

fn ring_points(radius: f64) -> Vec<(f64, f64)> {
    let steps = 120;
    (0..=steps)
        .map(|i| {
            let a = 2.0 * PI * (i as f64 / steps as f64);
            (radius * a.cos(), radius * a.sin())
        })
        .collect()
}
