//! Movement domain: keyboard sampling into the input snapshot.

use bevy::prelude::*;

use crate::movement::{InputSnapshot, KeyBindings, KeyEdge};

/// Folds the raw keyboard into the snapshot and reports every held-state
/// change as a key edge. The latest state wins; nothing is queued.
pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut snapshot: ResMut<InputSnapshot>,
    mut edges: MessageWriter<KeyEdge>,
) {
    let next = bindings.snapshot(&keyboard);
    if next == *snapshot {
        return;
    }

    for (key, pressed) in next.changes_since(&snapshot) {
        edges.write(KeyEdge { key, pressed });
    }
    *snapshot = next;
}
