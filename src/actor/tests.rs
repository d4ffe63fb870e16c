//! Actor domain: frame-order and end-to-end controller tests.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::systems::{dispatch_key_edges, tick_actors};
use super::{
    Actor, FrameHandler, InputHandler, InputReceiver, MotionStateChanged, RenderState, SpriteSink,
    SpriteTarget,
};
use crate::content::{LevelDef, PlumberDef};
use crate::core::{FrameSet, GameplayPaused, configure_frame_sets};
use crate::level::{CollisionResolver, CollisionTile, CollisionTuning, TileMap};
use crate::movement::systems::sample_input;
use crate::movement::{
    Facing, InputSnapshot, KeyBindings, KeyEdge, KeyState, KinematicBody, LogicalKey,
    MotionController, MotionState, MotionTuning,
};
use crate::sprites::{AnimationClips, AnimationStateMachine};

/// Floor whose top edge is at y = 100.
fn floor() -> Vec<CollisionTile> {
    vec![CollisionTile::solid(0.0, 100.0, 2000.0, 32.0)]
}

/// 32x32 actor standing flush on `floor()` at x = 200.
fn actor() -> Actor {
    Actor::new(
        KinematicBody::new(Vec2::new(200.0, 84.0), Vec2::new(32.0, 32.0)),
        MotionController::new(MotionTuning::default()),
        CollisionResolver::new(CollisionTuning::default()),
        AnimationStateMachine::new(AnimationClips::default(), 8),
    )
}

fn settled(tiles: &Vec<CollisionTile>) -> Actor {
    let mut actor = actor();
    actor.on_frame(&InputSnapshot::default(), tiles);
    actor
}

fn tick(actor: &mut Actor, keys: &[LogicalKey], tiles: &Vec<CollisionTile>, frames: usize) {
    let input = InputSnapshot::holding(keys);
    for _ in 0..frames {
        actor.on_frame(&input, tiles);
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

// -----------------------------------------------------------------------------
// Ground and horizontal motion
// -----------------------------------------------------------------------------

#[test]
fn test_actor_settles_on_floor() {
    let tiles = floor();
    let actor = settled(&tiles);

    assert!(actor.is_on_ground());
    assert_eq!(actor.body().position, Vec2::new(200.0, 84.0));
    assert_eq!(actor.body().velocity, Vec2::ZERO);
    assert_eq!(actor.state(), MotionState::Idle);
}

#[test]
fn test_actor_walks_then_runs() {
    let tiles = floor();
    let mut actor = settled(&tiles);

    tick(&mut actor, &[LogicalKey::Right], &tiles, 1);
    assert_eq!(actor.state(), MotionState::Walking);
    assert_eq!(actor.body().position.x, 202.0);

    tick(&mut actor, &[LogicalKey::Right], &tiles, 7);
    assert_eq!(actor.body().velocity.x, 16.0);
    assert_eq!(actor.state(), MotionState::Running);
    assert!(actor.is_on_ground());
}

#[test]
fn test_walking_into_wall_reclassifies_as_idle() {
    let mut tiles = floor();
    // Wall flush with the actor's right edge
    tiles.push(CollisionTile::solid(216.0, 68.0, 32.0, 32.0));
    let mut actor = settled(&tiles);

    tick(&mut actor, &[LogicalKey::Right], &tiles, 3);
    assert_eq!(actor.body().velocity.x, 0.0);
    assert_eq!(actor.body().position.x, 200.0);
    assert_eq!(actor.state(), MotionState::Idle);
}

// -----------------------------------------------------------------------------
// Jumping
// -----------------------------------------------------------------------------

#[test]
fn test_jump_from_ground_locks_state_until_landing() {
    let tiles = floor();
    let mut actor = settled(&tiles);

    actor.on_key_down(LogicalKey::Up);
    assert!(actor.is_jumping());
    assert_eq!(actor.state(), MotionState::Jumping);

    tick(&mut actor, &[LogicalKey::Up], &tiles, 1);
    assert_eq!(actor.body().velocity.y, -3.0);
    assert_eq!(actor.body().position.y, 81.0);
    assert!(!actor.is_on_ground());

    tick(&mut actor, &[LogicalKey::Up], &tiles, 10);
    assert_eq!(actor.state(), MotionState::Jumping);
    assert!(actor.body().position.y < 84.0);

    actor.on_key_up(LogicalKey::Up);
    assert!(!actor.is_jumping());

    let mut frames = 0;
    while !actor.is_on_ground() {
        tick(&mut actor, &[], &tiles, 1);
        frames += 1;
        assert!(frames < 200, "actor never landed");
        if !actor.is_on_ground() {
            assert_eq!(actor.state(), MotionState::Jumping);
        }
    }

    // Landing frame keeps the horizontal context of the jump
    assert_eq!(actor.state(), MotionState::Walking);
    assert_eq!(actor.body().position.y, 84.0);
    assert!(actor.just_landed());

    tick(&mut actor, &[], &tiles, 1);
    assert_eq!(actor.state(), MotionState::Idle);
    assert!(!actor.just_landed());
}

#[test]
fn test_jump_accepted_right_after_exact_landing() {
    let tiles = floor();
    let mut actor = actor();
    // Bottom edge 3 above the floor; gravity brings vy to exactly 3
    actor.body_mut().position.y = 81.0;
    actor.body_mut().velocity.y = 2.0;

    actor.on_frame(&InputSnapshot::default(), &tiles);
    assert_eq!(actor.body().position.y, 84.0);
    assert!(actor.is_on_ground());

    actor.on_key_down(LogicalKey::Up);
    assert!(actor.is_jumping());
    assert_eq!(actor.state(), MotionState::Jumping);
}

#[test]
fn test_held_jump_key_keeps_state_locked_after_landing() {
    let tiles = floor();
    let mut actor = settled(&tiles);

    actor.on_key_down(LogicalKey::Up);
    tick(&mut actor, &[LogicalKey::Up], &tiles, 120);

    assert!(actor.is_on_ground());
    assert!(actor.is_jumping());
    assert_eq!(actor.state(), MotionState::Jumping);

    actor.on_key_up(LogicalKey::Up);
    tick(&mut actor, &[], &tiles, 1);
    assert_eq!(actor.state(), MotionState::Walking);
}

#[test]
fn test_speed_jump_lands_running() {
    let tiles = floor();
    let mut actor = settled(&tiles);
    tick(&mut actor, &[LogicalKey::Right], &tiles, 8);

    actor.on_key_down(LogicalKey::Up);
    assert_eq!(actor.state(), MotionState::SpeedJumping);

    tick(&mut actor, &[LogicalKey::Right, LogicalKey::Up], &tiles, 3);
    actor.on_key_up(LogicalKey::Up);

    let mut frames = 0;
    while !actor.is_on_ground() {
        tick(&mut actor, &[LogicalKey::Right], &tiles, 1);
        frames += 1;
        assert!(frames < 200, "actor never landed");
    }
    assert_eq!(actor.state(), MotionState::Running);
}

#[test]
fn test_jump_ignored_while_airborne() {
    let tiles = floor();
    let mut actor = actor();
    actor.body_mut().position.y = 0.0;

    actor.on_frame(&InputSnapshot::default(), &tiles);
    assert!(!actor.is_on_ground());

    actor.on_key_down(LogicalKey::Up);
    assert!(!actor.is_jumping());
    assert_eq!(actor.state(), MotionState::Idle);
}

#[test]
fn test_horizontal_keys_are_not_edge_triggered() {
    let tiles = floor();
    let mut actor = settled(&tiles);

    actor.on_key_down(LogicalKey::Right);
    actor.on_key_down(LogicalKey::Left);
    assert_eq!(actor.body().velocity, Vec2::ZERO);
    assert!(!actor.is_jumping());
}

// -----------------------------------------------------------------------------
// Facing and rendering
// -----------------------------------------------------------------------------

#[test]
fn test_facing_mirrors_while_left_held() {
    let tiles = floor();
    let mut actor = settled(&tiles);

    tick(&mut actor, &[LogicalKey::Right], &tiles, 4);
    assert_eq!(actor.facing(), Facing::Right);

    // Still sliding right but facing the held direction
    tick(&mut actor, &[LogicalKey::Left], &tiles, 1);
    assert!(actor.body().velocity.x > 0.0);
    assert_eq!(actor.facing(), Facing::Left);
    assert!(actor.render_state().flip_x);
}

#[test]
fn test_facing_follows_negative_velocity_after_release() {
    let tiles = floor();
    let mut actor = settled(&tiles);

    tick(&mut actor, &[LogicalKey::Left], &tiles, 3);
    tick(&mut actor, &[], &tiles, 1);
    assert!(actor.body().velocity.x < 0.0);
    assert_eq!(actor.facing(), Facing::Left);

    tick(&mut actor, &[], &tiles, 10);
    assert_eq!(actor.body().velocity.x, 0.0);
    assert_eq!(actor.facing(), Facing::Right);
}

struct RecordingSink(Vec<RenderState>);

impl SpriteSink for RecordingSink {
    fn apply(&mut self, state: &RenderState) {
        self.0.push(*state);
    }
}

#[test]
fn test_render_state_reaches_sink() {
    let tiles = floor();
    let mut actor = settled(&tiles);
    let mut sink = RecordingSink(Vec::new());

    tick(&mut actor, &[LogicalKey::Right], &tiles, 2);
    sink.apply(&actor.render_state());

    assert_eq!(sink.0.len(), 1);
    assert_eq!(sink.0[0].position, Vec2::new(206.0, 84.0));
    assert_eq!(sink.0[0].size, Vec2::new(32.0, 32.0));
    assert!(!sink.0[0].flip_x);
    assert!(sink.0[0].region.is_none());
}

#[test]
fn test_sprite_target_flips_y_and_keeps_region_when_none() {
    let mut transform = Transform::from_xyz(0.0, 0.0, 3.0);
    let mut sprite = Sprite::default();
    let region = Rect::new(0.0, 0.0, 32.0, 32.0);

    let mut target = SpriteTarget {
        transform: &mut transform,
        sprite: &mut sprite,
    };
    target.apply(&RenderState {
        position: Vec2::new(10.0, 20.0),
        size: Vec2::new(32.0, 32.0),
        flip_x: true,
        region: Some(region),
    });
    target.apply(&RenderState {
        position: Vec2::new(12.0, 20.0),
        size: Vec2::new(32.0, 32.0),
        flip_x: true,
        region: None,
    });

    assert_eq!(transform.translation, Vec3::new(12.0, -20.0, 3.0));
    assert!(sprite.flip_x);
    assert_eq!(sprite.rect, Some(region));
    assert_eq!(sprite.custom_size, Some(Vec2::new(32.0, 32.0)));
}

// -----------------------------------------------------------------------------
// Randomized invariants
// -----------------------------------------------------------------------------

#[test]
fn test_random_input_keeps_speed_bounded_and_out_of_tiles() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let map = TileMap::from_def(&LevelDef::default());
    let def = PlumberDef::default();
    let max_speed = def.motion.max_speed;
    let mut actor = Actor::from_def(&def, AnimationClips::default());
    let mut input = InputSnapshot::default();

    for frame in 0..3000 {
        for key in LogicalKey::ALL {
            if rng.random_bool(0.08) {
                let held = !input.is_held(key);
                input.set(key, held);
                if held {
                    actor.on_key_down(key);
                } else {
                    actor.on_key_up(key);
                }
            }
        }

        actor.on_frame(&input, &map);

        let velocity = actor.body().velocity;
        assert!(velocity.x.abs() <= max_speed, "frame {}: vx {}", frame, velocity.x);
        assert!(velocity.y.abs() <= max_speed, "frame {}: vy {}", frame, velocity.y);
        assert!(actor.motion().jump_index() <= def.motion.jump_curve.len());
        for tile in &map.collision {
            assert!(
                !overlaps(actor.body().bounds(), tile.rect),
                "frame {}: actor entered tile at {:?}",
                frame,
                tile.rect.min
            );
        }
    }
}

// -----------------------------------------------------------------------------
// Bevy systems
// -----------------------------------------------------------------------------

#[test]
fn test_systems_drive_actor_from_keyboard() {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<InputSnapshot>()
        .init_resource::<KeyBindings>()
        .insert_resource(TileMap {
            tile_size: Vec2::splat(32.0),
            collision: floor(),
            decoration: Vec::new(),
        })
        .add_message::<KeyEdge>()
        .add_message::<MotionStateChanged>()
        .add_systems(Update, (sample_input, dispatch_key_edges, tick_actors).chain());

    let entity = app.world_mut().spawn((actor(), InputReceiver)).id();
    app.update();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);
    for _ in 0..8 {
        app.update();
    }

    let actor = app.world().get::<Actor>(entity).unwrap();
    assert_eq!(actor.body().velocity.x, 16.0);
    assert_eq!(actor.state(), MotionState::Running);
    assert!(app.world().resource::<InputSnapshot>().right);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();

    let actor = app.world().get::<Actor>(entity).unwrap();
    assert!(actor.is_jumping());
    assert_eq!(actor.state(), MotionState::SpeedJumping);
    assert!(!actor.is_on_ground());
}

#[test]
fn test_jump_released_during_pause_is_seen_on_resume() {
    let mut app = App::new();
    configure_frame_sets(&mut app)
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<InputSnapshot>()
        .init_resource::<KeyBindings>()
        .insert_resource(TileMap {
            tile_size: Vec2::splat(32.0),
            collision: floor(),
            decoration: Vec::new(),
        })
        .add_message::<KeyEdge>()
        .add_message::<MotionStateChanged>()
        .add_systems(Update, sample_input.in_set(FrameSet::Input))
        .add_systems(Update, dispatch_key_edges.in_set(FrameSet::Dispatch))
        .add_systems(Update, tick_actors.in_set(FrameSet::Tick));

    let entity = app.world_mut().spawn((actor(), InputReceiver)).id();
    app.update();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    for _ in 0..3 {
        app.update();
    }
    assert!(app.world().get::<Actor>(entity).unwrap().is_jumping());

    app.world_mut().resource_mut::<GameplayPaused>().pause("menu");
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::Space);
    for _ in 0..5 {
        app.update();
    }
    let paused = app.world().get::<Actor>(entity).unwrap();
    assert!(paused.is_jumping());
    assert!(app.world().resource::<InputSnapshot>().up);

    app.world_mut().resource_mut::<GameplayPaused>().unpause("menu");
    app.update();

    let actor = app.world().get::<Actor>(entity).unwrap();
    assert!(!actor.is_jumping());
    assert!(!app.world().resource::<InputSnapshot>().up);
}
