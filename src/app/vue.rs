// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus) ; Backspace géré par TextEdit
// - Tactile : pavé 4 colonnes, focus redonné après clic (focus_entree)
// - Historique repliable "expr = résultat"
//
// Toute modification d’état passe par on_action (action.rs).

use eframe::egui;

use super::action::Action;
use super::etat::AppCalc;

/// Une touche du pavé : libellé affiché + action envoyée.
struct Touche {
    label: &'static str,
    action: fn() -> Action,
}

const fn touche(label: &'static str, action: fn() -> Action) -> Touche {
    Touche { label, action }
}

// Les glyphes × ÷ − sont affichés ; le texte inséré reste ASCII.
const PAVE: [[Touche; 4]; 6] = [
    [
        touche("C", || Action::Effacer),
        touche("(", || Action::Operateur("(".into())),
        touche(")", || Action::Operateur(")".into())),
        touche("÷", || Action::Operateur("/".into())),
    ],
    [
        touche("7", || Action::Chiffre("7".into())),
        touche("8", || Action::Chiffre("8".into())),
        touche("9", || Action::Chiffre("9".into())),
        touche("×", || Action::Operateur("*".into())),
    ],
    [
        touche("4", || Action::Chiffre("4".into())),
        touche("5", || Action::Chiffre("5".into())),
        touche("6", || Action::Chiffre("6".into())),
        touche("−", || Action::Operateur("-".into())),
    ],
    [
        touche("1", || Action::Chiffre("1".into())),
        touche("2", || Action::Chiffre("2".into())),
        touche("3", || Action::Chiffre("3".into())),
        touche("+", || Action::Operateur("+".into())),
    ],
    [
        touche(".", || Action::Chiffre(".".into())),
        touche("0", || Action::Chiffre("0".into())),
        touche("DEL", || Action::Supprimer),
        touche("=", || Action::Calculer),
    ],
    [
        touche("√", || Action::Operateur("√".into())),
        touche("^", || Action::Operateur("^".into())),
        touche("%", || Action::Operateur("%".into())),
        touche("H", || Action::BasculerHistorique),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                if self.historique_visible {
                    ui.add_space(8.0);
                    ui.separator();
                    self.ui_historique(ui);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)×4, √9, 200%50")
                .id_salt("expression_edit")
                .font(egui::TextStyle::Heading),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // singleline perd le focus sur Enter : on teste aussi lost_focus.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.on_action(Action::Calculer);
        }

        ui.add_space(4.0);

        let texte = if self.resultat.is_empty() {
            String::new()
        } else {
            format!("= {}", self.resultat)
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.heading(texte);
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in &PAVE {
                    for t in ligne {
                        let resp = ui.add_sized([72.0, 44.0], egui::Button::new(t.label));
                        if resp.clicked() {
                            self.on_action((t.action)());
                            self.focus_entree = true;
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Historique :");
            if ui.button("Vider").clicked() {
                self.on_action(Action::ViderHistorique);
            }
        });

        if self.historique.is_empty() {
            ui.monospace("(vide)");
            return;
        }
        for ligne in &self.historique {
            ui.monospace(ligne);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
