use serde::{Deserialize, Serialize};

/// One frame's worth of named input intents.
///
/// Whatever drives a session (window event loop, scripted walk, test)
/// flattens its input state into this snapshot once per frame. The kernel
/// never sees key codes or devices, so every driver shares the same motion
/// logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentSnapshot {
    pub turn_left: bool,
    pub turn_right: bool,
    pub look_up: bool,
    pub look_down: bool,
    pub move_forward: bool,
    pub move_back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub sprint: bool,
    /// Frame-exit signal. Consumed by the app shell, never by the kernel.
    pub exit: bool,
}

impl IntentSnapshot {
    /// Turn direction as -1, 0, or +1 (positive turns right).
    pub fn turn_axis(&self) -> f32 {
        (self.turn_right as i8 - self.turn_left as i8) as f32
    }

    /// Vertical pan direction as -1, 0, or +1 (positive looks up).
    pub fn pan_axis(&self) -> f32 {
        (self.look_up as i8 - self.look_down as i8) as f32
    }

    /// True if any translation intent is held.
    pub fn any_movement(&self) -> bool {
        self.move_forward || self.move_back || self.strafe_left || self.strafe_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let intent = IntentSnapshot::default();
        assert_eq!(intent.turn_axis(), 0.0);
        assert_eq!(intent.pan_axis(), 0.0);
        assert!(!intent.any_movement());
        assert!(!intent.exit);
    }

    #[test]
    fn turn_axis_signs() {
        let right = IntentSnapshot {
            turn_right: true,
            ..Default::default()
        };
        let left = IntentSnapshot {
            turn_left: true,
            ..Default::default()
        };
        assert_eq!(right.turn_axis(), 1.0);
        assert_eq!(left.turn_axis(), -1.0);
    }

    #[test]
    fn opposing_intents_cancel() {
        let both = IntentSnapshot {
            turn_left: true,
            turn_right: true,
            look_up: true,
            look_down: true,
            ..Default::default()
        };
        assert_eq!(both.turn_axis(), 0.0);
        assert_eq!(both.pan_axis(), 0.0);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let intent = IntentSnapshot {
            move_forward: true,
            sprint: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&intent).unwrap();
        let back: IntentSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, back);
    }
}
