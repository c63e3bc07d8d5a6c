/// Stroke width of every line series.
pub const LINE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesKind {
    Line { width: f32 },
    Scatter { radius: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend entry; unnamed series stay out of the legend.
    pub name: Option<String>,
    pub kind: SeriesKind,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn line(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: Some(name.into()),
            kind: SeriesKind::Line { width: LINE_WIDTH },
            points,
        }
    }

    pub fn scatter(radius: f32, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: None,
            kind: SeriesKind::Scatter { radius },
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything needed to draw one chart, independent of the display.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Fit the axes to the data extent without margins.
    pub tight_bounds: bool,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
            tight_bounds: false,
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_tight_bounds(mut self, tight: bool) -> Self {
        self.tight_bounds = tight;
        self
    }

    pub fn legend_entries(&self) -> Vec<&str> {
        self.series
            .iter()
            .filter_map(|s| s.name.as_deref())
            .collect()
    }
}
