// src/app.rs
//
// Calculatrice Pro: module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + action.rs + vue.rs)
// - Ré-exporter AppCalc / Action
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter est géré dans vue.rs (quand le champ a le focus).
// - Ici, seulement le raccourci global ESC.

pub mod action;
pub mod etat;
pub mod vue;

pub use action::Action;
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = comme le bouton "C"
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.on_action(Action::Effacer);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
