//! Actor domain: spawning, key dispatch, the frame tick and sprite sync.

use bevy::prelude::*;

use crate::actor::{
    Actor, FrameHandler, InputHandler, InputReceiver, MotionStateChanged, SpriteSink, SpriteTarget,
};
use crate::content::{PlumberDef, SpriteSheetDef};
use crate::core::world_to_render;
use crate::level::TileMap;
use crate::movement::{InputSnapshot, KeyEdge};

const FALLBACK_COLOR: Color = Color::srgb(0.85, 0.2, 0.2);

pub(crate) fn spawn_actor(
    mut commands: Commands,
    def: Res<PlumberDef>,
    sheet: Res<SpriteSheetDef>,
    asset_server: Res<AssetServer>,
) {
    let actor = Actor::from_def(&def, sheet.clips());
    let render = actor.render_state();

    let sprite = match sheet.image_path() {
        Some(path) => Sprite {
            image: asset_server.load(path),
            custom_size: Some(render.size),
            ..default()
        },
        None => Sprite::from_color(FALLBACK_COLOR, render.size),
    };

    info!(
        "Spawning plumber at ({}, {}), size {}x{}, max_speed={}",
        render.position.x, render.position.y, render.size.x, render.size.y, def.motion.max_speed
    );

    commands.spawn((
        actor,
        InputReceiver,
        sprite,
        Transform::from_translation(world_to_render(render.position).extend(1.0)),
    ));
}

/// Forwards key edges to every registered input handler.
pub(crate) fn dispatch_key_edges(
    mut edges: MessageReader<KeyEdge>,
    mut handlers: Query<&mut Actor, With<InputReceiver>>,
) {
    for edge in edges.read() {
        for mut actor in &mut handlers {
            if edge.pressed {
                actor.on_key_down(edge.key);
            } else {
                actor.on_key_up(edge.key);
            }
            debug!(
                "Key {:?} pressed={}: jumping={}, state={:?}",
                edge.key,
                edge.pressed,
                actor.is_jumping(),
                actor.state()
            );
        }
    }
}

pub(crate) fn tick_actors(
    input: Res<InputSnapshot>,
    tiles: Res<TileMap>,
    mut query: Query<(Entity, &mut Actor)>,
    mut changes: MessageWriter<MotionStateChanged>,
) {
    for (entity, mut actor) in &mut query {
        let from = actor.state();
        let was_on_ground = actor.is_on_ground();

        actor.on_frame(&*input, &*tiles);

        if actor.is_on_ground() != was_on_ground {
            debug!(
                "Ground contact: on_ground={}, position=({}, {})",
                actor.is_on_ground(),
                actor.body().position.x,
                actor.body().position.y
            );
        }

        let to = actor.state();
        if actor.just_landed() {
            debug!("Landed as {:?} at y={}", to, actor.body().position.y);
        }
        if from != to {
            changes.write(MotionStateChanged { entity, from, to });
        }
    }
}

pub(crate) fn sync_actor_sprites(mut query: Query<(&Actor, &mut Transform, &mut Sprite)>) {
    for (actor, mut transform, mut sprite) in &mut query {
        let mut target = SpriteTarget {
            transform: &mut transform,
            sprite: &mut sprite,
        };
        target.apply(&actor.render_state());
    }
}

pub(crate) fn log_motion_transitions(mut changes: MessageReader<MotionStateChanged>) {
    for change in changes.read() {
        debug!(
            "Motion state {:?}: {:?} -> {:?}",
            change.entity, change.from, change.to
        );
    }
}
