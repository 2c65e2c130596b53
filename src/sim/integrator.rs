use nalgebra::SVector;

// ---------------------------------------------------------------------------
// Fixed-step explicit integrators over an arbitrary first-order ODE
// ---------------------------------------------------------------------------
//
// The right-hand-side is any f(t, y) -> dy/dt over a fixed-length state.
// Neither step validates h or intercepts numerical blow-up; a diverging
// integration carries NaN/Inf forward in the returned state.

/// Single explicit Euler step: `y + h·f(t, y)`.
///
/// First-order accurate. Kept as the reference integrator; the propagation
/// driver uses [`rk4_step`].
pub fn euler_step<const N: usize, F>(f: &F, t: f64, y: &SVector<f64, N>, h: f64) -> SVector<f64, N>
where
    F: Fn(f64, &SVector<f64, N>) -> SVector<f64, N>,
{
    y + f(t, y) * h
}

/// Single classical 4th-order Runge-Kutta step.
///
/// Four stage evaluations at `t`, `t + h/2` (twice), and `t + h`, combined
/// as `y + (h/6)(k1 + 2k2 + 2k3 + k4)`. Costs 4 RHS evaluations per step
/// but keeps truncation error low enough for fixed-step propagation.
pub fn rk4_step<const N: usize, F>(f: &F, t: f64, y: &SVector<f64, N>, h: f64) -> SVector<f64, N>
where
    F: Fn(f64, &SVector<f64, N>) -> SVector<f64, N>,
{
    let k1 = f(t, y);
    let k2 = f(t + 0.5 * h, &(y + k1 * (0.5 * h)));
    let k3 = f(t + 0.5 * h, &(y + k2 * (0.5 * h)));
    let k4 = f(t + h, &(y + k3 * h));

    y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
}
