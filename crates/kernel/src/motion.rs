use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use gridray_common::Pose;
use gridray_input::IntentSnapshot;
use serde::{Deserialize, Serialize};

/// Heading change per tick while a turn intent is held, in radians.
pub const ROTATION_RATE: f32 = PI / 60.0;

/// Vertical pan change per processed frame, in pixels.
pub const PAN_RATE: f32 = 20.0;

/// Lower vertical pan bound, in pixels.
pub const PAN_DOWN_LIMIT: f32 = -400.0;

/// Upper vertical pan bound, in pixels.
pub const PAN_UP_LIMIT: f32 = 500.0;

/// Walk speed in cells per tick.
pub const NORMAL_SPEED: f32 = 0.03;

/// Sprint speed in cells per tick.
pub const SPRINT_SPEED: f32 = 0.06;

/// Motion tuning constants.
///
/// All rates are per tick at the 60 Hz reference rate except `pan_rate`,
/// which applies once per processed frame regardless of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    pub rotation_rate: f32,
    pub pan_rate: f32,
    pub pan_down_limit: f32,
    pub pan_up_limit: f32,
    pub normal_speed: f32,
    pub sprint_speed: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            rotation_rate: ROTATION_RATE,
            pan_rate: PAN_RATE,
            pan_down_limit: PAN_DOWN_LIMIT,
            pan_up_limit: PAN_UP_LIMIT,
            normal_speed: NORMAL_SPEED,
            sprint_speed: SPRINT_SPEED,
        }
    }
}

/// Integrates one frame of input intents into a new pose.
///
/// `dt_ticks` is elapsed real time expressed in ticks at the 60 Hz
/// reference rate (1.0 = one reference frame), which keeps the per-tick
/// tuning constants frame-rate independent.
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    tuning: MotionTuning,
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        Self::new(MotionTuning::default())
    }
}

impl MotionIntegrator {
    pub fn new(tuning: MotionTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    /// Produce the pose after one frame of intents.
    ///
    /// Pure: no state beyond the returned value. Translation intents
    /// combine additively, so diagonal motion is faster than axis motion.
    pub fn integrate(&self, pose: Pose, intent: &IntentSnapshot, dt_ticks: f32) -> Pose {
        let t = &self.tuning;

        let heading = pose.heading + intent.turn_axis() * t.rotation_rate * dt_ticks;

        // Pan advances a fixed amount per frame, not per tick.
        let look_offset = (pose.look_offset + intent.pan_axis() * t.pan_rate)
            .clamp(t.pan_down_limit, t.pan_up_limit);

        let speed = if intent.sprint {
            t.sprint_speed
        } else {
            t.normal_speed
        };
        let step = speed * dt_ticks;
        let forward = Vec2::new(heading.cos(), heading.sin());
        // Strafe axis is the heading rotated a quarter turn.
        let strafe = Vec2::new((heading - FRAC_PI_2).cos(), (heading - FRAC_PI_2).sin());

        let mut position = pose.position;
        if intent.move_forward {
            position += forward * step;
        }
        if intent.move_back {
            position -= forward * step;
        }
        if intent.strafe_left {
            position += strafe * step;
        }
        if intent.strafe_right {
            position -= strafe * step;
        }

        Pose {
            position,
            heading,
            look_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> IntentSnapshot {
        IntentSnapshot::default()
    }

    #[test]
    fn idle_intents_leave_pose_unchanged() {
        let integrator = MotionIntegrator::default();
        for heading in [0.0, 0.7, PI, -2.3] {
            let pose = Pose::facing(3.0, 4.0, heading);
            let next = integrator.integrate(pose, &idle(), 1.0);
            assert_eq!(next, pose);
        }
    }

    #[test]
    fn turn_right_advances_heading_by_rate_times_dt() {
        let integrator = MotionIntegrator::default();
        let intent = IntentSnapshot {
            turn_right: true,
            ..Default::default()
        };
        for dt in [0.0, 0.5, 1.0, 2.5] {
            let next = integrator.integrate(Pose::at(2.0, 2.0), &intent, dt);
            assert!((next.heading - ROTATION_RATE * dt).abs() < 1e-6);
        }
    }

    #[test]
    fn turn_left_is_the_inverse_sign() {
        let integrator = MotionIntegrator::default();
        let intent = IntentSnapshot {
            turn_left: true,
            ..Default::default()
        };
        let next = integrator.integrate(Pose::at(2.0, 2.0), &intent, 1.5);
        assert!((next.heading + ROTATION_RATE * 1.5).abs() < 1e-6);
    }

    #[test]
    fn pan_stays_clamped_under_long_sequences() {
        let integrator = MotionIntegrator::default();
        let up = IntentSnapshot {
            look_up: true,
            ..Default::default()
        };
        let down = IntentSnapshot {
            look_down: true,
            ..Default::default()
        };

        let mut pose = Pose::at(2.0, 2.0);
        for _ in 0..200 {
            pose = integrator.integrate(pose, &up, 1.0);
            assert!(pose.look_offset <= PAN_UP_LIMIT);
        }
        assert_eq!(pose.look_offset, PAN_UP_LIMIT);

        for _ in 0..200 {
            pose = integrator.integrate(pose, &down, 1.0);
            assert!(pose.look_offset >= PAN_DOWN_LIMIT);
        }
        assert_eq!(pose.look_offset, PAN_DOWN_LIMIT);
    }

    #[test]
    fn pan_ignores_dt() {
        let integrator = MotionIntegrator::default();
        let up = IntentSnapshot {
            look_up: true,
            ..Default::default()
        };
        let slow = integrator.integrate(Pose::at(2.0, 2.0), &up, 0.25);
        let fast = integrator.integrate(Pose::at(2.0, 2.0), &up, 4.0);
        assert_eq!(slow.look_offset, fast.look_offset);
        assert_eq!(slow.look_offset, PAN_RATE);
    }

    #[test]
    fn forward_moves_along_heading() {
        let integrator = MotionIntegrator::default();
        let intent = IntentSnapshot {
            move_forward: true,
            ..Default::default()
        };
        let next = integrator.integrate(Pose::at(2.0, 2.0), &intent, 1.0);
        assert!((next.position.x - (2.0 + NORMAL_SPEED)).abs() < 1e-6);
        assert!((next.position.y - 2.0).abs() < 1e-6);

        let turned = Pose::facing(2.0, 2.0, FRAC_PI_2);
        let next = integrator.integrate(turned, &intent, 1.0);
        assert!((next.position.x - 2.0).abs() < 1e-6);
        assert!((next.position.y - (2.0 + NORMAL_SPEED)).abs() < 1e-6);
    }

    #[test]
    fn sprint_doubles_displacement() {
        let integrator = MotionIntegrator::default();
        let walk = IntentSnapshot {
            move_forward: true,
            ..Default::default()
        };
        let sprint = IntentSnapshot {
            move_forward: true,
            sprint: true,
            ..Default::default()
        };
        let walked = integrator.integrate(Pose::at(0.0, 0.0), &walk, 1.0);
        let sprinted = integrator.integrate(Pose::at(0.0, 0.0), &sprint, 1.0);
        assert!((sprinted.position.x - 2.0 * walked.position.x).abs() < 1e-6);
    }

    #[test]
    fn strafe_is_perpendicular_to_heading() {
        let integrator = MotionIntegrator::default();
        let intent = IntentSnapshot {
            strafe_left: true,
            ..Default::default()
        };
        // Facing +X, the left strafe axis is heading - 90 degrees: -Y.
        let next = integrator.integrate(Pose::at(2.0, 2.0), &intent, 1.0);
        assert!((next.position.x - 2.0).abs() < 1e-6);
        assert!((next.position.y - (2.0 - NORMAL_SPEED)).abs() < 1e-6);
    }

    #[test]
    fn intents_combine_additively() {
        let integrator = MotionIntegrator::default();
        let diagonal = IntentSnapshot {
            move_forward: true,
            strafe_left: true,
            ..Default::default()
        };
        let next = integrator.integrate(Pose::at(0.0, 0.0), &diagonal, 1.0);
        // Two full axis displacements, not a normalized diagonal.
        let expected = (2.0f32).sqrt() * NORMAL_SPEED;
        assert!((next.position.length() - expected).abs() < 1e-6);
    }

    #[test]
    fn opposing_moves_cancel() {
        let integrator = MotionIntegrator::default();
        let intent = IntentSnapshot {
            move_forward: true,
            move_back: true,
            ..Default::default()
        };
        let pose = Pose::at(5.0, 5.0);
        let next = integrator.integrate(pose, &intent, 1.0);
        assert!((next.position - pose.position).length() < 1e-6);
    }
}
