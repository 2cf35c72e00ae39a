use std::path::Path;

use anyhow::{Context, Result};

use spline_viewer::data::model::{Series, SplineOutput};
use spline_viewer::data::writer::save_output;

/// Smooth test signal standing in for a fitted curve.
fn signal(x: f64) -> f64 {
    (1.5 * x).sin() * (-0.15 * x).exp() + 0.2 * x
}

fn sample(from: f64, to: f64, step: f64) -> Vec<f64> {
    let n = ((to - from) / step).round() as usize;
    (0..=n).map(|i| from + i as f64 * step).collect()
}

fn main() -> Result<()> {
    env_logger::init();

    // Control points: 11 nodes on [0, 10]
    let xp = sample(0.0, 10.0, 1.0);
    let yp: Vec<f64> = xp.iter().map(|&x| signal(x)).collect();

    // Curve: same signal sampled every 0.01
    let xs = sample(0.0, 10.0, 0.01);
    let ys: Vec<f64> = xs.iter().map(|&x| signal(x)).collect();

    let output = SplineOutput::new(Series::new(xp, yp), Series::new(xs, ys));

    let output_path = Path::new("Output.txt");
    save_output(output_path, &output)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Wrote {} control points and {} curve points to {}",
        output.control.len(),
        output.spline_len(),
        output_path.display()
    );
    Ok(())
}
