//! Amplitude utilities shared by the demodulators and tests.

/// Largest absolute sample value, 0.0 for an empty signal.
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().fold(0.0f32, |m, &s| m.max(s.abs()))
}

/// Rescale so the largest absolute sample is exactly 1.0.
///
/// A silent signal is returned unchanged rather than divided by zero.
pub fn normalize_peak(mut signal: Vec<f32>) -> Vec<f32> {
    let p = peak(&signal);
    if p > 0.0 {
        for s in &mut signal {
            *s /= p;
        }
    }
    signal
}

/// Subtract the arithmetic mean in place (DC removal).
pub fn remove_mean(signal: &mut [f32]) {
    if signal.is_empty() {
        return;
    }
    let mean = signal.iter().map(|&s| s as f64).sum::<f64>() / signal.len() as f64;
    for s in signal.iter_mut() {
        *s = (*s as f64 - mean) as f32;
    }
}

/// Normalized cross-correlation of two equal-length signals, in [-1, 1].
///
/// Means are removed before correlating, so a recovered signal with a DC
/// offset still scores on shape alone. Returns 0.0 when either signal is
/// constant or the lengths differ.
pub fn correlation(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let n = a.len() as f64;
    let mean_a = a.iter().map(|&s| s as f64).sum::<f64>() / n;
    let mean_b = b.iter().map(|&s| s as f64).sum::<f64>() / n;

    let mut num = 0.0f64;
    let mut den_a = 0.0f64;
    let mut den_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let dx = x as f64 - mean_a;
        let dy = y as f64 - mean_b;
        num += dx * dy;
        den_a += dx * dx;
        den_b += dy * dy;
    }
    if den_a == 0.0 || den_b == 0.0 {
        return 0.0;
    }
    (num / (den_a * den_b).sqrt()) as f32
}
