//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `initial_color`, `final_color`: Colors of the two compared profiles
/// - `series_colors`: Optional palette for snapshot evolution plots
/// - `show_means`: Draw a horizontal line at each profile's mean
///
/// # Example
///
/// ```rust
/// use advect_rs::output::visualization::PlotConfig;
///
/// let mut config = PlotConfig::comparison("nt=800, u=0.25");
/// config.width = 1920;
/// assert_eq!(config.xlabel, "Grid index");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    pub title: String,

    /// X-axis label (default: "Grid index")
    pub xlabel: String,

    /// Y-axis label (default: "q")
    pub ylabel: String,

    /// Initial profile color (default: BLUE)
    pub initial_color: RGBColor,

    /// Final profile color (default: RED)
    pub final_color: RGBColor,

    /// Optional colors for snapshot plots, one per snapshot
    ///
    /// If None, uses the default palette
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Draw mean lines in comparison plots (default: true)
    pub show_means: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Advection".to_string(),
            xlabel: "Grid index".to_string(),
            ylabel: "q".to_string(),
            initial_color: BLUE,
            final_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            show_means: true,
        }
    }
}

impl PlotConfig {
    /// Config for an initial-versus-final comparison
    pub fn comparison(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Config for a snapshot evolution plot
    pub fn evolution(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show_means: false,
            ..Default::default()
        }
    }

    /// Get color for snapshot at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if index < colors.len() {
                return colors[index];
            }
        }

        const PALETTE: [RGBColor; 8] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        PALETTE[index % PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
        assert!(config.show_means);
    }

    #[test]
    fn test_comparison_config() {
        let config = PlotConfig::comparison(format!("nt={}, u={}", 800, 0.25));
        assert_eq!(config.title, "nt=800, u=0.25");
        assert!(config.show_means);
    }

    #[test]
    fn test_evolution_config() {
        let config = PlotConfig::evolution("Snapshots");
        assert_eq!(config.title, "Snapshots");
        assert!(!config.show_means);
    }

    #[test]
    fn test_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.series_color(0), BLUE);
        assert_eq!(config.series_color(1), RED);
        assert_eq!(config.series_color(8), BLUE); // Wraparound
    }

    #[test]
    fn test_series_color_custom() {
        let mut config = PlotConfig::default();
        config.series_colors = Some(vec![GREEN, BLACK]);

        assert_eq!(config.series_color(0), GREEN);
        assert_eq!(config.series_color(1), BLACK);
        assert_eq!(config.series_color(2), GREEN); // falls back to palette index 2
    }
}
