// src/noyau/erreur.rs
//
// Une seule erreur récupérable dans le noyau : un littéral numérique
// qui ne se convertit pas en f64 (ex: "1.2.3", ".").
// Tout le reste (parenthèses, opérandes manquants, /0, √ négatif) donne un nombre.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("nombre invalide: '{litteral}'")]
    NumericParse {
        litteral: String,
        #[source]
        source: ParseFloatError,
    },
}

impl EvaluationError {
    /// Littéral fautif (pour les traces, jamais pour l’affichage utilisateur).
    pub fn litteral(&self) -> &str {
        match self {
            EvaluationError::NumericParse { litteral, .. } => litteral,
        }
    }
}
