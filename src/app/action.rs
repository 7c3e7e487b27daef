//! src/app/action.rs
//!
//! Actions utilisateur -> état. Seul endroit de l’app qui appelle le noyau.

use tracing::{info, warn};

use super::etat::{AppCalc, Demarche};
use crate::noyau::{evaluate_detail, format_resultat};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Chiffre(String),
    Operateur(String),
    Effacer,
    Supprimer,
    Calculer,
    BasculerHistorique,
    ViderHistorique,
}

impl AppCalc {
    pub fn on_action(&mut self, action: Action) {
        match action {
            Action::Chiffre(c) => self.ajouter(&c),
            Action::Operateur(op) => self.ajouter(&op),
            Action::Effacer => self.effacer(),
            Action::Supprimer => self.supprimer(),
            Action::Calculer => self.calculer(),
            Action::BasculerHistorique => self.basculer_historique(),
            Action::ViderHistorique => self.vider_historique(),
        }
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn calculer(&mut self) {
        if self.expression.trim().is_empty() {
            return;
        }

        match evaluate_detail(&self.expression) {
            Ok(e) => {
                let formate = format_resultat(e.valeur);
                info!(expression = %self.expression, resultat = %formate, "calcul");
                let d_ui = Demarche {
                    jetons: e.demarche.jetons,
                    rpn: e.demarche.rpn,
                };
                self.set_resultat(formate, d_ui);
            }
            Err(err) => {
                // diagnostic en trace seulement, l’écran affiche "Error"
                warn!(expression = %self.expression, erreur = %err, "calcul impossible");
                self.set_erreur();
            }
        }
    }
}
