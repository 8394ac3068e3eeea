//! Scales
//!
//! Band and linear scales mapping data coordinates onto pixels. The math
//! follows the usual charting conventions: bands are evenly spaced intervals
//! with a configurable gap fraction, linear scales interpolate between two
//! anchor pairs, and tick values snap to "nice" 1/2/5 steps.

/// Maps discrete categories to evenly spaced pixel bands.
///
/// The gap fraction applies both between bands and at the outer edges, with
/// the bands centered in the leftover space.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// One band per distinct value, in first-seen order
    pub fn new(values: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let mut domain: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !domain.contains(&value) {
                domain.push(value);
            }
        }

        let n = domain.len() as f64;
        let span = range.1 - range.0;
        let step = span / 1f64.max(n - padding + padding * 2.0);
        let start = range.0 + (span - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);
        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.domain
    }

    /// Left edge of the band at `index`
    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Horizontal center of the band at `index`
    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + self.bandwidth / 2.0
    }

    /// Band index of `label`, if it is part of the domain
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.iter().position(|d| d == label)
    }

    /// Band center of `label`, if it is part of the domain
    pub fn center_of(&self, label: &str) -> Option<f64> {
        self.index_of(label).map(|index| self.center(index))
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the left edges of adjacent bands
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Maps a continuous numeric domain onto a continuous pixel range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Map a domain value to its pixel position.
    ///
    /// A collapsed domain maps every value to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Tick values inside the domain at nice 1/2/5 steps.
    ///
    /// `count` is a request, not a guarantee; the result has roughly that
    /// many values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Nice tick values covering `[start, stop]`.
///
/// The step is the power of ten nearest to `(stop - start) / count`, scaled
/// by 1, 2 or 5 so ticks land on round numbers.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let step = tick_increment(lo, hi, count);
    if !step.is_finite() || step == 0.0 {
        return Vec::new();
    }

    let mut values = if step > 0.0 {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = (last - first + 1.0).max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) * step).collect::<Vec<_>>()
    } else {
        // Fractional step, carried as a negative inverse to avoid drift
        let inv = -step;
        let first = (lo * inv).ceil();
        let last = (hi * inv).floor();
        let n = (last - first + 1.0).max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) / inv).collect::<Vec<_>>()
    };

    if reverse {
        values.reverse();
    }
    values
}

/// Tick step for the span, positive for whole steps, negative inverse for
/// fractional ones
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    const E10: f64 = 7.071067811865476; // sqrt(50)
    const E5: f64 = 3.1622776601683795; // sqrt(10)
    const E2: f64 = std::f64::consts::SQRT_2;

    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_band_scale_two_bands() {
        let scale = BandScale::new(
            vec!["1월 1주".to_string(), "1월 2주".to_string()],
            (0.0, 520.0),
            0.1,
        );

        // step = span / (n + padding), bands centered in the leftover space
        assert!(close(scale.step(), 520.0 / 2.1));
        assert!(close(scale.bandwidth(), 520.0 / 2.1 * 0.9));

        // Symmetric layout: the two centers mirror around the midpoint
        assert!(close(scale.center(0) + scale.center(1), 520.0));
        assert!(scale.center(0) < scale.center(1));
    }

    #[test]
    fn test_band_scale_gap_fraction() {
        let scale = BandScale::new(
            (0..5).map(|i| i.to_string()).collect(),
            (0.0, 500.0),
            0.1,
        );

        // Gap between adjacent bands is the padding fraction of a step
        let gap = scale.position(1) - (scale.position(0) + scale.bandwidth());
        assert!(close(gap, scale.step() * 0.1));
    }

    #[test]
    fn test_band_scale_dedupes_repeated_values() {
        let scale = BandScale::new(
            vec![
                "1월 1주".to_string(),
                "1월 2주".to_string(),
                "1월 1주".to_string(),
            ],
            (0.0, 520.0),
            0.1,
        );

        // Two distinct bands; the repeat maps onto the first one
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.index_of("1월 1주"), Some(0));
        assert_eq!(scale.center_of("1월 1주"), Some(scale.center(0)));
        assert_eq!(scale.center_of("없는 주"), None);
    }

    #[test]
    fn test_band_scale_single_band() {
        let scale = BandScale::new(vec!["only".to_string()], (0.0, 100.0), 0.1);
        assert!(close(scale.center(0), 50.0));
        assert!(scale.bandwidth() > 0.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // Pixel y grows downward, so the domain max maps to the top
        let scale = LinearScale::new((0.0, 10.0), (320.0, 0.0));
        assert!(close(scale.scale(0.0), 320.0));
        assert!(close(scale.scale(10.0), 0.0));
        assert!(close(scale.scale(5.0), 160.0));
    }

    #[test]
    fn test_linear_scale_collapsed_domain() {
        let scale = LinearScale::new((3.59, 3.59), (320.0, 0.0));
        assert!(close(scale.scale(3.59), 160.0));
        assert!(close(scale.scale(99.0), 160.0));
    }

    #[test]
    fn test_ticks_nice_fractional_steps() {
        let values = ticks(3.54, 3.82, 4);
        let expected = [3.55, 3.60, 3.65, 3.70, 3.75, 3.80];
        assert_eq!(values.len(), expected.len());
        for (value, want) in values.iter().zip(expected) {
            assert!(close(*value, want), "{} != {}", value, want);
        }
    }

    #[test]
    fn test_ticks_unit_interval() {
        let values = ticks(0.0, 1.0, 10);
        assert_eq!(values.len(), 11);
        assert!(close(values[0], 0.0));
        assert!(close(values[10], 1.0));
        assert!(close(values[1] - values[0], 0.1));
    }

    #[test]
    fn test_ticks_whole_steps() {
        let values = ticks(0.0, 100.0, 4);
        // step 25 -> error 2.5 -> snaps to 20
        assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_ticks_degenerate_span() {
        assert_eq!(ticks(5.0, 5.0, 4), vec![5.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }
}
