use crate::core::data::complex::Complex;
use crate::core::data::iteration_budget::IterationBudget;

/// Squared escape radius. Once |z| exceeds 2 the orbit diverges.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape count for one point: a real value in `[0, max_iterations]`.
pub type EscapeResult = f64;

/// Iterates z ← z² + c from z = 0 and returns the number of steps taken before |z|²
/// exceeded 4, or exactly `max_iterations` when the orbit never escaped.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: IterationBudget) -> EscapeResult {
    let max_iterations = max_iterations.get();
    let mut z = Complex::default();

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return f64::from(iteration);
        }
        z = z.square() + c;
    }

    f64::from(max_iterations)
}
