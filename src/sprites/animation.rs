//! Animation state machine and clip playback.
//!
//! Motion states select a clip of texture regions; playback loops on a
//! frame counter that advances once per controller tick.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::movement::MotionState;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationTuning {
    /// Controller frames each clip rectangle stays on screen.
    pub frames_per_step: u32,
    /// Sprite sheet file, relative to `assets/sprites/`.
    pub sheet: String,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            frames_per_step: 8,
            sheet: "plumber.json".to_string(),
        }
    }
}

/// Texture regions for each motion state. An empty clip holds the frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationClips {
    clips: HashMap<MotionState, Vec<Rect>>,
}

impl AnimationClips {
    pub fn insert(&mut self, state: MotionState, frames: Vec<Rect>) {
        self.clips.insert(state, frames);
    }

    pub fn get(&self, state: MotionState) -> Option<&[Rect]> {
        self.clips.get(&state).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Looping playback counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipPlayer {
    counter: u32,
    frames_per_step: u32,
}

impl ClipPlayer {
    pub fn new(frames_per_step: u32) -> Self {
        Self {
            counter: 0,
            frames_per_step: frames_per_step.max(1),
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Rectangle for the current counter, then advances one frame.
    /// Returns `None` for an empty clip without touching the counter.
    pub fn advance(&mut self, frames: &[Rect]) -> Option<Rect> {
        if frames.is_empty() {
            return None;
        }

        let span = self.frames_per_step * frames.len() as u32;
        if self.counter >= span {
            self.counter = 0;
        }
        let index = (self.counter / self.frames_per_step) as usize % frames.len();
        self.counter += 1;
        if self.counter >= span {
            self.counter = 0;
        }
        Some(frames[index])
    }
}

/// Selects the motion state and the texture region shown for it.
#[derive(Debug, Clone)]
pub struct AnimationStateMachine {
    state: MotionState,
    clips: AnimationClips,
    player: ClipPlayer,
    region: Option<Rect>,
}

impl AnimationStateMachine {
    pub fn new(clips: AnimationClips, frames_per_step: u32) -> Self {
        Self {
            state: MotionState::Idle,
            clips,
            player: ClipPlayer::new(frames_per_step),
            region: None,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Last selected texture region; `None` until a non-empty clip played.
    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    pub fn player(&self) -> &ClipPlayer {
        &self.player
    }

    /// Switches state, restarting playback when it actually changes.
    pub fn set_state(&mut self, state: MotionState) {
        if self.state != state {
            self.state = state;
            self.player.reset();
        }
    }

    /// Jump entry overrides speed classification for the frame of the press.
    pub fn enter_jump(&mut self, vx: f32, max_speed: f32) {
        self.set_state(MotionState::for_jump(vx, max_speed));
    }

    /// Speed-based classification; jumping states are left untouched.
    pub fn reclassify(&mut self, vx: f32, max_speed: f32) {
        if self.state.is_airborne() {
            return;
        }
        self.set_state(MotionState::classify(vx, max_speed));
    }

    /// Leaves a jumping state once grounded with the jump released.
    /// Returns whether a landing happened.
    pub fn land(&mut self, on_ground: bool, jumping: bool) -> bool {
        if !self.state.is_airborne() || !on_ground || jumping {
            return false;
        }
        self.set_state(self.state.landed());
        true
    }

    /// Advances playback of the active clip. A state without a clip, or an
    /// empty clip, keeps the current region.
    pub fn advance(&mut self) {
        let Some(frames) = self.clips.get(self.state) else {
            return;
        };
        if let Some(region) = self.player.advance(frames) {
            self.region = Some(region);
        }
    }
}
