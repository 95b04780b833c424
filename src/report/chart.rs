use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::records::errors::Error;
use crate::records::metrics::Metrics;
use crate::records::Result;

const CHART_WIDTH: u32 = 600;
const CHART_HEIGHT: u32 = 400;
const MARGIN: i32 = 40;

/// Draws the status distribution as a PNG bar chart, overwriting `path`.
/// Bars are fixed in order and color: Passed (green), Failed (red),
/// Skipped (yellow).
pub fn render_status_chart(metrics: &Metrics, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| Error::ChartRender(e.to_string()))?;

    let bars: [(usize, RGBColor); 3] = [
        (metrics.passed, GREEN),
        (metrics.failed, RED),
        (metrics.skipped, YELLOW),
    ];
    // scale against the tallest bar; a floor of one keeps the all-zero
    // case from dividing by zero
    let tallest = bars.iter().map(|(count, _)| *count).max().unwrap_or(0).max(1);

    let baseline = CHART_HEIGHT as i32 - MARGIN;
    let plot_height = CHART_HEIGHT as i32 - 2 * MARGIN;
    let slot = (CHART_WIDTH as i32 - 2 * MARGIN) / bars.len() as i32;
    let bar_width = slot * 3 / 5;

    for (at, (count, color)) in bars.iter().enumerate() {
        let height = (plot_height as f64 * *count as f64 / tallest as f64) as i32;
        let left = MARGIN + at as i32 * slot + (slot - bar_width) / 2;
        let corners = [(left, baseline - height), (left + bar_width, baseline)];

        root.draw(&Rectangle::new(corners, color.filled()))
            .map_err(|e| Error::ChartRender(e.to_string()))?;
        root.draw(&Rectangle::new(corners, &BLACK))
            .map_err(|e| Error::ChartRender(e.to_string()))?;
    }

    root.draw(&PathElement::new(
        vec![(MARGIN, baseline), (CHART_WIDTH as i32 - MARGIN, baseline)],
        &BLACK,
    ))
    .map_err(|e| Error::ChartRender(e.to_string()))?;

    root.present()
        .map_err(|e| Error::ChartRender(e.to_string()))?;

    Ok(())
}

/// The rendered chart file, scoped to one report run. Both document
/// renderers read it; dropping the artifact removes the file again on every
/// exit path, success or error.
pub struct ChartArtifact {
    path: PathBuf,
}

impl ChartArtifact {
    pub fn create(metrics: &Metrics, path: PathBuf) -> Result<ChartArtifact> {
        render_status_chart(metrics, &path)?;
        Ok(ChartArtifact { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ChartArtifact {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod chart_tests;
