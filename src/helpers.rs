use std::f64::consts::PI;

// ================================================
// PUBLIC FUNCTIONS
// ================================================

/// Normal probability density at `x` for the given mean and standard deviation.
///
/// # Formula
/// ```text
/// φ(x; μ, σ) = exp(-(x - μ)² / 2σ²) / (σ·√(2π))
/// ```
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
