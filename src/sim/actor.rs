//! The bird
//!
//! Vertical motion is evaluated in closed form from the last velocity reset
//! (`y = y0 + v0*t + g*t²/2`) rather than integrated step by step, so the
//! trajectory does not depend on frame timing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use crate::settings::Settings;

/// Everything a renderer needs to draw the bird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub center: Vec2,
    /// Top-left corner of the unrotated sprite
    pub top_left: Vec2,
    /// Degrees, positive is nose-up
    pub rotation: f32,
}

/// Player-controlled bird body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorBody {
    /// x stays fixed during flight; the world scrolls instead
    pub pos: Vec2,
    /// Vertical velocity at `reference_time` (pixels/s, positive is down)
    pub velocity: f32,
    /// y at the last velocity reset
    pub reference_y: f32,
    /// Clock time of the last velocity reset (seconds)
    pub reference_time: f64,
    /// Degrees, clamped to [min_rotation, max_rotation]
    pub rotation: f32,
    /// Grace counter before the nose starts to drop
    pub fall_decay: f32,
    pub half_size: Vec2,
}

impl ActorBody {
    pub fn new(pos: Vec2, settings: &Settings) -> Self {
        Self {
            pos,
            velocity: 0.0,
            reference_y: pos.y,
            reference_time: 0.0,
            rotation: 0.0,
            fall_decay: settings.fall_decay,
            half_size: Vec2::new(settings.actor_half_width(), settings.actor_half_height()),
        }
    }

    /// Bird at the start position: a third of the way across, vertically centered
    pub fn spawn(settings: &Settings) -> Self {
        Self::new(
            Vec2::new(settings.field_width / 3.0, settings.field_height / 2.0),
            settings,
        )
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.half_size.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_size.y
    }

    /// Flap: restart the trajectory from the current height with upward velocity
    pub fn jump(&mut self, now: f64, settings: &Settings) {
        self.velocity = settings.jump_velocity;
        self.reference_y = self.pos.y;
        self.reference_time = now;
        self.rotation = settings.max_rotation;
        self.fall_decay = settings.fall_decay;
    }

    /// Instantaneous vertical velocity at clock time `now`
    pub fn current_velocity(&self, now: f64, settings: &Settings) -> f32 {
        self.velocity + settings.gravity * self.elapsed(now)
    }

    /// Advance the flight trajectory to clock time `now`
    pub fn integrate(&mut self, now: f64, settings: &Settings) {
        let t = self.elapsed(now);
        self.pos.y = self.reference_y + self.velocity * t + 0.5 * settings.gravity * t * t;

        self.hit_ceiling(now, settings);

        // The grace counter drains by the time since the flap on every frame
        if self.fall_decay < 0.0 {
            self.tilt(settings.flight_tilt_rate * t, settings);
        } else {
            self.fall_decay -= t;
        }
    }

    /// Clamp against the ceiling. Contact stops all vertical motion and the
    /// bird restarts from rest at the ceiling.
    pub fn hit_ceiling(&mut self, now: f64, settings: &Settings) -> bool {
        let limit = settings.ceiling_y + self.half_size.y;
        if self.pos.y < limit {
            self.pos.y = limit;
            self.reference_y = limit;
            self.reference_time = now;
            self.velocity = 0.0;
            return true;
        }
        false
    }

    pub fn is_on_floor(&self, settings: &Settings) -> bool {
        self.bottom() >= settings.floor_y
    }

    /// Rest the bird on the floor line
    pub fn clamp_to_floor(&mut self, settings: &Settings) {
        self.pos.y = self.pos.y.min(settings.floor_y - self.half_size.y);
    }

    /// Axis-aligned test against every obstacle
    pub fn collides_with(&self, obstacles: &[Obstacle], settings: &Settings) -> bool {
        let tube_half_width = settings.obstacle_half_width();
        obstacles.iter().any(|tube| {
            tube.overlaps_horizontally(self.pos.x, self.half_size.x, tube_half_width)
                && tube.blocks_span(self.top(), self.bottom(), settings.gap_height)
        })
    }

    /// Points earned this frame: one for every obstacle whose center has
    /// reached the bird and that has not paid out yet. Each obstacle carries
    /// its own latch, so a long frame that carries a tube clean past the
    /// bird still scores it exactly once.
    pub fn check_and_consume_score(&self, obstacles: &mut [Obstacle]) -> u32 {
        let mut points = 0;
        for tube in obstacles.iter_mut().filter(|t| !t.cleared) {
            if tube.is_passed_by(self.pos.x) {
                tube.cleared = true;
                points += 1;
            }
        }
        points
    }

    /// Start the unpowered death fall from the current height
    pub fn begin_fall(&mut self, now: f64) {
        self.velocity = 0.0;
        self.reference_y = self.pos.y;
        self.reference_time = now;
    }

    /// Advance the death fall; returns true once the bird rests on the floor
    pub fn fall(&mut self, now: f64, settings: &Settings) -> bool {
        let t = self.elapsed(now);
        self.tilt(settings.death_tilt_rate * t, settings);
        self.pos.y = self.reference_y + 0.5 * settings.gravity * t * t;

        if self.is_on_floor(settings) {
            self.clamp_to_floor(settings);
            return true;
        }
        false
    }

    /// Idle bob on the start screen
    pub fn hover(&mut self, elapsed: f32, settings: &Settings) {
        self.pos.y =
            self.reference_y + settings.hover_amplitude * (settings.hover_frequency * elapsed).cos();
    }

    pub fn pose(&self) -> Pose {
        Pose {
            center: self.pos,
            top_left: self.pos - self.half_size,
            rotation: self.rotation,
        }
    }

    fn elapsed(&self, now: f64) -> f32 {
        (now - self.reference_time).max(0.0) as f32
    }

    fn tilt(&mut self, degrees: f32, settings: &Settings) {
        self.rotation = (self.rotation - degrees).clamp(settings.min_rotation, settings.max_rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bird_at(y: f32) -> (ActorBody, Settings) {
        let settings = Settings::default();
        (ActorBody::new(Vec2::new(96.0, y), &settings), settings)
    }

    #[test]
    fn test_jump_resets_kinematics() {
        let (mut bird, settings) = bird_at(240.0);
        bird.fall_decay = -3.0;
        bird.rotation = -45.0;
        bird.jump(2.0, &settings);

        assert_eq!(bird.velocity, -400.0);
        assert_eq!(bird.reference_y, 240.0);
        assert_eq!(bird.reference_time, 2.0);
        assert_eq!(bird.rotation, 20.0);
        assert_eq!(bird.fall_decay, 100.0);
    }

    #[test]
    fn test_jump_trajectory_at_tenth_of_second() {
        let (mut bird, settings) = bird_at(240.0);
        bird.jump(10.0, &settings);
        bird.integrate(10.1, &settings);
        // 240 - 40 + 7.5
        assert!((bird.pos.y - 207.5).abs() < 1e-3, "y = {}", bird.pos.y);
    }

    #[test]
    fn test_ceiling_contact_stops_motion() {
        let (mut bird, settings) = bird_at(20.0);
        bird.jump(0.0, &settings);
        bird.integrate(0.1, &settings);

        assert_eq!(bird.pos.y, 13.0);
        assert_eq!(bird.velocity, 0.0);
        assert_eq!(bird.reference_y, 13.0);
        assert_eq!(bird.reference_time, 0.1);

        // Falls from rest afterwards
        bird.integrate(0.2, &settings);
        assert!((bird.pos.y - (13.0 + 0.5 * 1500.0 * 0.01)).abs() < 1e-3);
    }

    #[test]
    fn test_floor_detection() {
        let settings = Settings::default();
        assert!(!bird_at(370.9).0.is_on_floor(&settings));
        assert!(bird_at(371.0).0.is_on_floor(&settings));
    }

    #[test]
    fn test_collision_with_gap_example() {
        // gap 142..242, bird bottom 253
        let (bird, settings) = bird_at(240.0);
        let overlapping = [Obstacle::new(100.0, 192.0)];
        assert!(bird.collides_with(&overlapping, &settings));

        let ahead = [Obstacle::new(96.0 + 44.5, 192.0)];
        assert!(!bird.collides_with(&ahead, &settings));
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let (bird, settings) = bird_at(192.0);
        assert!(!bird.collides_with(&[Obstacle::new(96.0, 192.0)], &settings));
    }

    #[test]
    fn test_score_latch_fires_once_per_obstacle() {
        let (bird, _) = bird_at(192.0);
        let mut tubes = [Obstacle::new(100.0, 192.0)];
        let mut points = 0;

        for _ in 0..200 {
            points += bird.check_and_consume_score(&mut tubes);
            tubes[0].scroll(1.0);
        }
        assert_eq!(points, 1);
        assert!(tubes[0].cleared);
    }

    #[test]
    fn test_score_survives_jump_over_band() {
        let (bird, _) = bird_at(192.0);
        // One long frame moved this tube from just right of the bird to
        // well behind it
        let mut tubes = [Obstacle::new(17.0, 192.0), Obstacle::new(264.0, 192.0)];
        assert_eq!(bird.check_and_consume_score(&mut tubes), 1);
        assert_eq!(bird.check_and_consume_score(&mut tubes), 0);
        assert!(!tubes[1].cleared);
    }

    #[test]
    fn test_fall_lands_on_floor() {
        let (mut bird, settings) = bird_at(200.0);
        bird.begin_fall(0.0);
        assert!(!bird.fall(0.1, &settings));
        assert!(bird.fall(1.0, &settings));
        assert_eq!(bird.bottom(), settings.floor_y);
        assert!(bird.rotation >= settings.min_rotation);
    }

    #[test]
    fn test_hover_bobs_around_reference() {
        let (mut bird, settings) = bird_at(240.0);
        bird.hover(0.0, &settings);
        assert_eq!(bird.pos.y, 247.0);
        bird.hover(std::f32::consts::PI / 5.0, &settings);
        assert!((bird.pos.y - 233.0).abs() < 1e-3);
    }

    #[test]
    fn test_nose_drops_after_grace() {
        let (mut bird, settings) = bird_at(240.0);
        bird.jump(0.0, &settings);
        bird.fall_decay = 0.05;
        bird.integrate(0.1, &settings);
        assert_eq!(bird.rotation, 20.0);
        bird.integrate(0.2, &settings);
        assert!((bird.rotation - (20.0 - 0.5 * 0.2)).abs() < 1e-4);
    }

    #[test]
    fn test_pose_anchor() {
        let (bird, _) = bird_at(240.0);
        let pose = bird.pose();
        assert_eq!(pose.top_left, Vec2::new(78.0, 227.0));
    }

    proptest! {
        #[test]
        fn prop_projectile_law(y0 in 150.0f32..300.0, t in 0.0f32..0.35) {
            let (mut bird, settings) = bird_at(y0);
            bird.jump(5.0, &settings);
            bird.integrate(5.0 + t as f64, &settings);
            let expected = y0 - 400.0 * t + 0.5 * 1500.0 * t * t;
            // Stays below the ceiling for this range, so the law is exact
            prop_assert!((bird.pos.y - expected).abs() < 1e-2);
        }

        #[test]
        fn prop_rotation_stays_clamped(
            deltas in proptest::collection::vec((0.0f64..0.5, any::<bool>()), 1..60)
        ) {
            let (mut bird, settings) = bird_at(240.0);
            let mut now = 0.0;
            for (dt, flap) in deltas {
                now += dt;
                if flap {
                    bird.jump(now, &settings);
                }
                bird.integrate(now, &settings);
                prop_assert!(bird.rotation >= -90.0 && bird.rotation <= 20.0);
            }
        }
    }
}
