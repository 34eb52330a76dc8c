//! Viewport-Input-Handling: Maus-Events → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `presses` — Tasten-Druck-Events (primaer = Drag/Anlegen, sekundaer = Loeschen)
//! - `drag` — Maus-Bewegung waehrend gehaltener Taste und Loslassen

mod drag;
mod presses;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::DeviceSpace;

/// Buendelt die gemeinsamen Parameter fuer Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
}

/// Verwaltet den Input-Zustand fuer das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Ob die primaere Taste aktuell gehalten wird (fuer Move-Events)
    pub(crate) primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_down: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurueck.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg fuer Maus-
    /// Interaktionen im Viewport. Positionen werden hier von Fenster-Pixeln
    /// in Device-Koordinaten umgerechnet — die App-Schicht sieht nur noch
    /// den [-1,1]-Raum.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_presses(&ctx, &mut events);
        self.handle_pointer_move(&ctx, &mut events);
        self.handle_release(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Device-Koordinaten um.
pub(crate) fn screen_pos_to_device(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    DeviceSpace::new(viewport_size).screen_to_device(glam::Vec2::new(local.x, local.y))
}
