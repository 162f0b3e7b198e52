//! Chart series for the progress page.

use chrono::TimeZone;

use crate::model::LogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMetric {
    #[default]
    Weight,
    Waist,
}

impl ChartMetric {
    pub fn label(self) -> &'static str {
        match self {
            ChartMetric::Weight => "Weight",
            ChartMetric::Waist => "Waist",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ChartMetric::Weight => "kg",
            ChartMetric::Waist => "cm",
        }
    }

    /// Headroom added above and below the data range on the y axis.
    fn padding(self) -> f64 {
        match self {
            ChartMetric::Weight => 1.0,
            ChartMetric::Waist => 2.0,
        }
    }

    fn value_of(self, entry: &LogEntry) -> f64 {
        match self {
            ChartMetric::Weight => entry.weight,
            ChartMetric::Waist => entry.waist,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Short local date, e.g. `"Mar 04"`.
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub metric: ChartMetric,
    pub points: Vec<ChartPoint>,
    /// `(min, max)` of the y axis, or `None` for an empty series.
    pub domain: Option<(f64, f64)>,
}

impl ChartSeries {
    /// Build a series from logs already filtered and sorted by the caller.
    pub fn build<'a, Tz, I>(metric: ChartMetric, logs: I, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let points: Vec<ChartPoint> = logs
            .into_iter()
            .map(|entry| ChartPoint {
                label: entry.date.with_timezone(tz).format("%b %d").to_string(),
                value: metric.value_of(entry),
            })
            .collect();

        let domain = points.iter().map(|p| p.value).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        });
        let pad = metric.padding();

        Self {
            metric,
            points,
            domain: domain.map(|(lo, hi)| (lo - pad, hi + pad)),
        }
    }

    /// SVG polyline coordinates for a `width` x `height` plot area.
    /// Points are spread evenly on x; larger values sit higher.
    pub fn polyline(&self, width: f64, height: f64) -> Vec<(f64, f64)> {
        let Some((lo, hi)) = self.domain else {
            return Vec::new();
        };
        let span = hi - lo;
        let step = if self.points.len() > 1 {
            width / (self.points.len() - 1) as f64
        } else {
            0.0
        };

        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = if self.points.len() > 1 { i as f64 * step } else { width / 2.0 };
                let y = height - (p.value - lo) / span * height;
                (x, y)
            })
            .collect()
    }
}
