//! SVG visualization for coverage audit.
//!
//! Renders the occupancy grid and the planned path to SVG so a run can be
//! inspected by eye: blocked cells, the snaking sweep, and where the path
//! starts and ends.

use std::fmt::Write;
use std::path::Path;

use crate::core::{GridCoord, Waypoint};
use crate::grid::{CellState, OccupancyGrid};

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Free cell color
    pub free: &'static str,
    /// Blocked cell color
    pub blocked: &'static str,
    /// Path polyline color
    pub path: &'static str,
    /// Start marker color
    pub start: &'static str,
    /// End marker color
    pub end: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            free: "#FFFFFF",
            blocked: "#333333",
            path: "#2222AA",
            start: "#22AA22",
            end: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per meter
    pub scale: f64,
    /// Path line width
    pub path_width: f64,
    /// Start/end marker radius
    pub marker_radius: f64,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the map in pixels
    pub padding: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 50.0,
            path_width: 2.0,
            marker_radius: 4.0,
            colors: SvgColorScheme::default(),
            padding: 20.0,
        }
    }
}

/// SVG visualization builder
pub struct SvgVisualizer {
    config: SvgConfig,
    /// Grid to render
    grid: OccupancyGrid,
    /// Planned path
    path: Vec<Waypoint>,
    /// Title to display
    title: Option<String>,
}

impl SvgVisualizer {
    /// Create a new SVG visualizer
    pub fn new(grid: OccupancyGrid, config: SvgConfig) -> Self {
        Self {
            config,
            grid,
            path: Vec::new(),
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add the planned coverage path
    pub fn with_path(mut self, path: Vec<Waypoint>) -> Self {
        self.path = path;
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let scale = self.config.scale;
        let map_width_px = self.grid.width() as f64 * self.grid.resolution() * scale;
        let map_height_px = self.grid.height() as f64 * self.grid.resolution() * scale;

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };

        let width = map_width_px + 2.0 * padding;
        let height = map_height_px + 2.0 * padding + title_height;

        // SVG header
        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();

        // Background
        writeln!(
            &mut svg,
            r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##
        )
        .unwrap();

        // Title
        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )
            .unwrap();
        }

        // Map group with translation
        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        self.render_grid(&mut svg, map_height_px);
        self.render_path(&mut svg, map_height_px);

        writeln!(&mut svg, "  </g>").unwrap();
        writeln!(&mut svg, "</svg>").unwrap();

        svg
    }

    /// Render grid cells (free background, blocked cells on top)
    fn render_grid(&self, svg: &mut String, height_px: f64) {
        let cell_size = self.grid.resolution() * self.config.scale;

        writeln!(svg, r#"    <g id="grid">"#).unwrap();

        writeln!(
            svg,
            r##"      <rect width="{:.1}" height="{:.1}" fill="{}" stroke="#999" stroke-width="1"/>"##,
            self.grid.width() as f64 * cell_size,
            self.grid.height() as f64 * cell_size,
            self.config.colors.free
        )
        .unwrap();

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let coord = GridCoord::new(x as i32, y as i32);
                if self.grid.get(coord) != Some(CellState::Blocked) {
                    continue;
                }
                // World y runs up, SVG y runs down.
                let px = x as f64 * cell_size;
                let py = height_px - (y + 1) as f64 * cell_size;
                writeln!(
                    svg,
                    r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                    px, py, cell_size, cell_size, self.config.colors.blocked
                )
                .unwrap();
            }
        }

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render the path polyline with start/end markers
    fn render_path(&self, svg: &mut String, height_px: f64) {
        if self.path.is_empty() {
            return;
        }

        let scale = self.config.scale;
        let to_px = |wp: &Waypoint| (wp.x * scale, height_px - wp.y * scale);

        writeln!(svg, r#"    <g id="path">"#).unwrap();

        let points: Vec<String> = self
            .path
            .iter()
            .map(|wp| {
                let (px, py) = to_px(wp);
                format!("{:.1},{:.1}", px, py)
            })
            .collect();
        writeln!(
            svg,
            r#"      <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linejoin="round"/>"#,
            points.join(" "),
            self.config.colors.path,
            self.config.path_width
        )
        .unwrap();

        let (sx, sy) = to_px(&self.path[0]);
        writeln!(
            svg,
            r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            sx, sy, self.config.marker_radius, self.config.colors.start
        )
        .unwrap();

        let (ex, ey) = to_px(&self.path[self.path.len() - 1]);
        writeln!(
            svg,
            r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            ex, ey, self.config.marker_radius, self.config.colors.end
        )
        .unwrap();

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render and write to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }
}
