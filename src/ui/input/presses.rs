//! Tasten-Druck-Events: primaer (Drag starten / Punkt anlegen), sekundaer (Punkt loeschen).

use super::{screen_pos_to_device, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt Maus-Tastendruecke im Viewport und emittiert die Press-Intents.
    ///
    /// Der Automat reagiert auf den DRUCK-Zeitpunkt, nicht auf den Klick
    /// (= Loslassen): ein Drag muss sofort beim Druecken beginnen.
    pub(crate) fn handle_presses(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let (primary_pressed, secondary_pressed, pointer_pos) = ctx.ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.secondary_pressed(),
                i.pointer.latest_pos(),
            )
        });

        if !ctx.response.hovered() {
            return;
        }
        let Some(pointer_pos) = pointer_pos else {
            return;
        };

        if primary_pressed {
            self.primary_down = true;
            events.push(AppIntent::PrimaryPressed {
                device_pos: screen_pos_to_device(pointer_pos, ctx.response, ctx.viewport_size),
            });
        }

        if secondary_pressed {
            events.push(AppIntent::SecondaryPressed {
                device_pos: screen_pos_to_device(pointer_pos, ctx.response, ctx.viewport_size),
            });
        }
    }
}
