//! Stand-in for the external `timeline_test` executable.
//!
//! Emits the same CSV contract on stdout: one `rot0,rot1` line per sample,
//! 300 samples of a Catmull-Rom interpolation through four keyframes at the
//! corners of the unit square.  Useful for exercising the viewer without
//! the native build tree present.

/// One keyframe of the animation timeline.
#[derive(Debug, Clone)]
struct Keyframe {
    time: f64,
    rotations: Vec<f64>,
}

struct Timeline {
    frames: Vec<Keyframe>,
    /// Per-frame tangent estimates, same shape as `frames[i].rotations`.
    derivatives: Vec<Vec<f64>>,
}

/// Weighted derivative estimate at the middle of three knots.
fn estimate_derivative(q0: f64, q1: f64, q2: f64, t0: f64, t1: f64, t2: f64) -> f64 {
    let dt1 = t1 - t0;
    let dt2 = t2 - t1;
    let dq1 = q1 - q0;
    let dq2 = q2 - q1;
    (dt1 / (dt1 + dt2)) * (dq1 / dt1 + dq2 / dt2) + dq1 / dt1
}

/// Cubic Hermite basis over u in [0, 1].
fn cubic_hermite(u: f64, q0: f64, q1: f64, qp0: f64, qp1: f64) -> f64 {
    let u2 = u * u;
    let u3 = u2 * u;
    let c1 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let c2 = u3 - 2.0 * u2 + u;
    let c3 = -2.0 * u3 + 3.0 * u2;
    let c4 = u3 - u2;
    c1 * q0 + c2 * qp0 + c3 * q1 + c4 * qp1
}

impl Timeline {
    /// Build a timeline from keyframes sorted by time (at least two).
    /// Tangents are one-sided differences at the ends and the weighted
    /// three-knot estimate in the interior.
    fn new(frames: Vec<Keyframe>) -> Self {
        assert!(frames.len() >= 2, "timeline needs at least two keyframes");
        let n = frames.len();
        let dims = frames[0].rotations.len();

        let mut derivatives = vec![vec![0.0; dims]; n];
        for d in 0..dims {
            derivatives[0][d] = frames[1].rotations[d] - frames[0].rotations[d];
            derivatives[n - 1][d] = frames[n - 1].rotations[d] - frames[n - 2].rotations[d];
            for i in 1..n - 1 {
                derivatives[i][d] = estimate_derivative(
                    frames[i - 1].rotations[d],
                    frames[i].rotations[d],
                    frames[i + 1].rotations[d],
                    frames[i - 1].time,
                    frames[i].time,
                    frames[i + 1].time,
                );
            }
        }

        Timeline {
            frames,
            derivatives,
        }
    }

    /// Interpolate the rotations at `time`, wrapping past the last keyframe.
    fn interpolate(&self, time: f64) -> Vec<f64> {
        let t = time.rem_euclid(self.frames.last().unwrap().time);

        // First frame with time strictly greater than t bounds the segment.
        let idx = self
            .frames
            .partition_point(|f| f.time <= t)
            .clamp(1, self.frames.len() - 1);
        let k0 = &self.frames[idx - 1];
        let k1 = &self.frames[idx];
        let u = (t - k0.time) / (k1.time - k0.time);

        (0..k0.rotations.len())
            .map(|d| {
                cubic_hermite(
                    u,
                    k0.rotations[d],
                    k1.rotations[d],
                    self.derivatives[idx - 1][d],
                    self.derivatives[idx][d],
                )
            })
            .collect()
    }
}

fn square_timeline() -> Timeline {
    Timeline::new(vec![
        Keyframe { time: 0.0, rotations: vec![0.0, 0.0] },
        Keyframe { time: 1.0, rotations: vec![0.0, 1.0] },
        Keyframe { time: 2.0, rotations: vec![1.0, 1.0] },
        Keyframe { time: 3.0, rotations: vec![1.0, 0.0] },
    ])
}

fn main() {
    let timeline = square_timeline();
    for i in 0..300 {
        let rotations = timeline.interpolate(i as f64 / 100.0);
        println!("{},{}", rotations[0], rotations[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_hits_the_keyframes() {
        let tl = square_timeline();
        assert_eq!(tl.interpolate(0.0), vec![0.0, 0.0]);
        assert_eq!(tl.interpolate(1.0), vec![0.0, 1.0]);
        assert_eq!(tl.interpolate(2.0), vec![1.0, 1.0]);
    }

    #[test]
    fn time_wraps_past_the_last_keyframe() {
        let tl = square_timeline();
        assert_eq!(tl.interpolate(3.0), tl.interpolate(0.0));
        assert_eq!(tl.interpolate(4.5), tl.interpolate(1.5));
    }

    #[test]
    fn hermite_endpoints_reproduce_the_knots() {
        assert_eq!(cubic_hermite(0.0, 2.0, 5.0, 1.0, -1.0), 2.0);
        assert_eq!(cubic_hermite(1.0, 2.0, 5.0, 1.0, -1.0), 5.0);
    }

    #[test]
    fn samples_stay_finite() {
        let tl = square_timeline();
        for i in 0..300 {
            let r = tl.interpolate(i as f64 / 100.0);
            assert_eq!(r.len(), 2);
            assert!(r.iter().all(|v| v.is_finite()));
        }
    }
}
