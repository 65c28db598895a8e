//! Real-to-analytic signal conversion.
//!
//! Builds the complex analytic signal of a real sequence by zeroing the
//! negative-frequency half of its spectrum: forward FFT, double the
//! positive bins (DC and Nyquist stay at unity), inverse FFT. The
//! conversion runs once over the whole signal and has no group delay to
//! compensate.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Analytic signal of `input`: real part reproduces the input, imaginary
/// part is its Hilbert transform.
pub fn analytic_signal(input: &[f32]) -> Vec<Complex<f64>> {
    let n = input.len();
    if n < 2 {
        return input.iter().map(|&x| Complex::new(x as f64, 0.0)).collect();
    }

    let mut spectrum: Vec<Complex<f64>> = input
        .iter()
        .map(|&x| Complex::new(x as f64, 0.0))
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n).process(&mut spectrum);

    // One-sided spectrum: keep DC (and Nyquist for even n) at unity,
    // double the positive band, zero the negative band.
    let half = n / 2;
    if n % 2 == 0 {
        for bin in &mut spectrum[1..half] {
            *bin *= 2.0;
        }
        for bin in &mut spectrum[half + 1..] {
            *bin = Complex::new(0.0, 0.0);
        }
    } else {
        for bin in &mut spectrum[1..=half] {
            *bin *= 2.0;
        }
        for bin in &mut spectrum[half + 1..] {
            *bin = Complex::new(0.0, 0.0);
        }
    }

    planner.plan_fft_inverse(n).process(&mut spectrum);
    let scale = 1.0 / n as f64;
    for bin in &mut spectrum {
        *bin *= scale;
    }
    spectrum
}
