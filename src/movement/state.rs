//! Movement domain: motion states and facing.

/// Motion classification of the actor, one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Walking,
    Running,
    Jumping,
    SpeedJumping,
}

impl MotionState {
    pub const ALL: [MotionState; 5] = [
        MotionState::Idle,
        MotionState::Walking,
        MotionState::Running,
        MotionState::Jumping,
        MotionState::SpeedJumping,
    ];

    /// Ground classification from horizontal speed.
    pub fn classify(vx: f32, max_speed: f32) -> Self {
        if vx == 0.0 {
            MotionState::Idle
        } else if vx.abs() >= max_speed {
            MotionState::Running
        } else {
            MotionState::Walking
        }
    }

    /// Jump variant chosen at the instant of the jump press.
    pub fn for_jump(vx: f32, max_speed: f32) -> Self {
        if vx.abs() >= max_speed {
            MotionState::SpeedJumping
        } else {
            MotionState::Jumping
        }
    }

    /// Jumping states are locked against speed-based reclassification.
    pub fn is_airborne(self) -> bool {
        matches!(self, MotionState::Jumping | MotionState::SpeedJumping)
    }

    /// State entered on landing; keeps the horizontal context of the jump.
    pub fn landed(self) -> Self {
        match self {
            MotionState::Jumping => MotionState::Walking,
            MotionState::SpeedJumping => MotionState::Running,
            other => other,
        }
    }

    /// Animation name in the sprite sheet.
    pub fn clip_name(self) -> &'static str {
        match self {
            MotionState::Idle => "idle",
            MotionState::Walking => "walk",
            MotionState::Running => "run",
            MotionState::Jumping => "jump",
            MotionState::SpeedJumping => "speedjump",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Left while moving left, or while Left is held so the sprite keeps
    /// facing left as it brakes to a stop.
    pub fn from_motion(vx: f32, left_held: bool) -> Self {
        if left_held || vx < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    pub fn is_mirrored(self) -> bool {
        self == Facing::Left
    }
}
