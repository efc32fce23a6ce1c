use crate::record::Record;

/// Inner/outer band padding as a fraction of the band step.
const BAND_PADDING: f64 = 0.1;

/// Categorical scale: assigns each record name an equal-width horizontal
/// band across the range, with 10% padding between bands, in the order the
/// names were supplied.
#[derive(Debug, Clone)]
pub struct BandScale {
    names: Vec<String>,
    range: (f64, f64),
}

impl BandScale {
    pub fn new(names: Vec<String>, range: (f64, f64)) -> Self {
        Self { names, range }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Distance between the left edges of adjacent bands.
    pub fn step(&self) -> f64 {
        if self.names.is_empty() {
            return 0.0;
        }
        let span = self.range.1 - self.range.0;
        span / (self.names.len() as f64 + BAND_PADDING)
    }

    /// Width of one band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - BAND_PADDING)
    }

    /// Left edge of the band for `name`, or `None` for unknown names.
    pub fn position(&self, name: &str) -> Option<f64> {
        let idx = self.names.iter().position(|n| n == name)?;
        let step = self.step();
        Some(self.range.0 + step * BAND_PADDING + idx as f64 * step)
    }

    /// Horizontal center of the band for `name`.
    pub fn center(&self, name: &str) -> Option<f64> {
        self.position(name).map(|x| x + self.bandwidth() / 2.0)
    }
}

/// Numeric scale mapping `[domain.0, domain.1]` linearly onto the (inverted)
/// pixel range. A collapsed domain maps everything to the baseline instead of
/// dividing by zero.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Pixel coordinate of the domain baseline (`scale(domain.0)`).
    pub fn baseline(&self) -> f64 {
        self.range.0
    }

    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span.abs() < f64::EPSILON {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Nice tick values within the domain, at most `max_count` of them.
    pub fn ticks(&self, max_count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        if max_count == 0 || (max - min).abs() < f64::EPSILON {
            return vec![min];
        }
        let mut request = max_count;
        loop {
            let ticks: Vec<f64> = nice_ticks(min, max, request)
                .into_iter()
                .filter(|&v| v >= min - 1e-9 && v <= max + 1e-9)
                .collect();
            if ticks.len() <= max_count || request == 1 {
                return ticks;
            }
            request -= 1;
        }
    }
}

/// Build both scales for a render pass.
///
/// The numeric domain is `[0, max]` over every present (record, field) value;
/// records missing a field simply do not contribute. With no records or no
/// values the domain collapses to `[0, 0]`.
pub fn build_scales(
    records: &[&Record],
    fields: &[String],
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> (BandScale, LinearScale) {
    let names = records.iter().map(|r| r.name.clone()).collect();
    let band = BandScale::new(names, x_range);

    let mut max = 0.0_f64;
    for record in records {
        for field in fields {
            if let Some(v) = record.value(field) {
                if v > max {
                    max = v;
                }
            }
        }
    }

    (band, LinearScale::new((0.0, max), y_range))
}

fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let span = max - min;
    let step = nice_step(span / count.max(1) as f64);
    if step == 0.0 {
        return vec![min, max];
    }
    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;
    let n = ((stop - start) / step).round() as i64;
    (0..=n.max(0)).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
