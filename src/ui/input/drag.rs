//! Maus-Bewegung waehrend gehaltener Taste und Loslassen.

use super::{screen_pos_to_device, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Emittiert Move-Intents solange die primaere Taste gehalten wird.
    ///
    /// Ob der Move einen Punkt bewegt, entscheidet der Drag-Automat der
    /// App-Schicht — hier wird nur gefiltert, dass ohne gehaltene Taste
    /// keine Events fliessen.
    pub(crate) fn handle_pointer_move(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if !self.primary_down {
            return;
        }

        let (pointer_delta, pointer_pos) =
            ctx.ui.input(|i| (i.pointer.delta(), i.pointer.latest_pos()));
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }
        let Some(pointer_pos) = pointer_pos else {
            return;
        };

        events.push(AppIntent::PointerMoved {
            device_pos: screen_pos_to_device(pointer_pos, ctx.response, ctx.viewport_size),
        });
    }

    /// Beendet einen aktiven Drag beim Loslassen einer Maustaste.
    pub(crate) fn handle_release(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let any_released = ctx.ui.input(|i| i.pointer.any_released());
        if !any_released {
            return;
        }

        self.primary_down = false;
        events.push(AppIntent::PointerReleased);
    }
}
