//! Timed animation of points and axis domains.
//!
//! A selection change does not jump the chart to its new positions;
//! it retargets a single shared transition that the draw loop samples
//! every frame. Retargeting while in flight starts from the currently
//! displayed positions, so a rapid second click supersedes the first
//! instead of racing it (last-click-wins on target state).

use std::time::{Duration, Instant};

/// How long axis and point movements take.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(1000);

/// A point position in virtual pixel coordinates.
pub type Position = (f64, f64);

/// In-flight interpolation of point positions and both axis domains.
#[derive(Debug, Clone)]
pub struct Transition {
    points_from: Vec<Position>,
    points_to: Vec<Position>,
    x_domain_from: (f64, f64),
    x_domain_to: (f64, f64),
    y_domain_from: (f64, f64),
    y_domain_to: (f64, f64),
    started: Instant,
}

impl Transition {
    /// A transition that is already at its target (the initial render).
    pub fn settled(points: Vec<Position>, x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        Self {
            points_from: points.clone(),
            points_to: points,
            x_domain_from: x_domain,
            x_domain_to: x_domain,
            y_domain_from: y_domain,
            y_domain_to: y_domain,
            started: Instant::now(),
        }
    }

    /// Start moving towards new targets from whatever is displayed at `now`.
    pub fn retarget(
        &mut self,
        now: Instant,
        points: Vec<Position>,
        x_domain: (f64, f64),
        y_domain: (f64, f64),
    ) {
        self.points_from = self.points_at(now);
        self.x_domain_from = self.x_domain_at(now);
        self.y_domain_from = self.y_domain_at(now);
        self.points_to = points;
        self.x_domain_to = x_domain;
        self.y_domain_to = y_domain;
        self.started = now;
    }

    /// Interpolated point positions at `now`.
    ///
    /// A finished transition returns its targets exactly, so repeated
    /// toggles land on bit-identical positions.
    pub fn points_at(&self, now: Instant) -> Vec<Position> {
        let t = ease(self.progress(now));
        if t >= 1.0 {
            return self.points_to.clone();
        }
        self.points_from
            .iter()
            .zip(&self.points_to)
            .map(|(&(x0, y0), &(x1, y1))| (lerp(x0, x1, t), lerp(y0, y1, t)))
            .collect()
    }

    /// Interpolated X-axis domain at `now`.
    pub fn x_domain_at(&self, now: Instant) -> (f64, f64) {
        let t = ease(self.progress(now));
        if t >= 1.0 {
            return self.x_domain_to;
        }
        let (from, to) = (self.x_domain_from, self.x_domain_to);
        (lerp(from.0, to.0, t), lerp(from.1, to.1, t))
    }

    /// Interpolated Y-axis domain at `now`.
    pub fn y_domain_at(&self, now: Instant) -> (f64, f64) {
        let t = ease(self.progress(now));
        if t >= 1.0 {
            return self.y_domain_to;
        }
        let (from, to) = (self.y_domain_from, self.y_domain_to);
        (lerp(from.0, to.0, t), lerp(from.1, to.1, t))
    }

    /// Final point positions.
    pub fn targets(&self) -> &[Position] {
        &self.points_to
    }

    /// Whether anything is still moving at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
            && (self.points_from != self.points_to
                || self.x_domain_from != self.x_domain_to
                || self.y_domain_from != self.y_domain_to)
    }

    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        (elapsed / TRANSITION_DURATION.as_secs_f64()).clamp(0.0, 1.0)
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Cubic in-out easing.
fn ease(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Instant {
        Instant::now()
    }

    #[test]
    fn ease_covers_its_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(0.5), 0.5);
        assert!(ease(0.25) < 0.25);
        assert!(ease(0.75) > 0.75);
    }

    #[test]
    fn settled_transition_sits_on_its_targets() {
        let transition = Transition::settled(vec![(1.0, 2.0)], (0.0, 10.0), (0.0, 20.0));
        let now = Instant::now();

        assert_eq!(transition.points_at(now), vec![(1.0, 2.0)]);
        assert_eq!(transition.x_domain_at(now), (0.0, 10.0));
        assert!(!transition.is_animating(now));
    }

    #[test]
    fn retarget_reaches_the_new_targets_after_the_duration() {
        let t0 = start();
        let mut transition = Transition::settled(vec![(0.0, 0.0)], (0.0, 10.0), (0.0, 10.0));
        transition.retarget(t0, vec![(100.0, 50.0)], (5.0, 20.0), (2.0, 8.0));

        assert!(transition.is_animating(t0 + Duration::from_millis(500)));

        let done = t0 + TRANSITION_DURATION;
        assert_eq!(transition.points_at(done), vec![(100.0, 50.0)]);
        assert_eq!(transition.x_domain_at(done), (5.0, 20.0));
        assert_eq!(transition.y_domain_at(done), (2.0, 8.0));
        assert!(!transition.is_animating(done));
    }

    #[test]
    fn halfway_sample_sits_between_start_and_target() {
        let t0 = start();
        let mut transition = Transition::settled(vec![(0.0, 0.0)], (0.0, 0.0), (0.0, 0.0));
        transition.retarget(t0, vec![(100.0, 200.0)], (0.0, 100.0), (0.0, 100.0));

        // ease(0.5) == 0.5, so the midpoint in time is the midpoint in space.
        let half = t0 + Duration::from_millis(500);
        let points = transition.points_at(half);
        assert!((points[0].0 - 50.0).abs() < 1e-9);
        assert!((points[0].1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn second_retarget_supersedes_the_first() {
        let t0 = start();
        let mut transition = Transition::settled(vec![(0.0, 0.0)], (0.0, 1.0), (0.0, 1.0));
        transition.retarget(t0, vec![(100.0, 0.0)], (0.0, 1.0), (0.0, 1.0));

        // A second click lands mid-flight; it takes over from the
        // displayed position, not from the stale target.
        let half = t0 + Duration::from_millis(500);
        let displayed = transition.points_at(half)[0];
        transition.retarget(half, vec![(0.0, 0.0)], (0.0, 1.0), (0.0, 1.0));

        assert_eq!(transition.points_at(half)[0], displayed);
        assert_eq!(transition.targets(), &[(0.0, 0.0)]);

        let done = half + TRANSITION_DURATION;
        assert_eq!(transition.points_at(done), vec![(0.0, 0.0)]);
    }
}
