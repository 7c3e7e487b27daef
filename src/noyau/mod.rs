//! Noyau: évaluateur d’expressions (f64)
//!
//! Organisation interne :
//! - assainir.rs : glyphes d’affichage (× ÷ −) -> caractères canoniques
//! - jetons.rs   : tokenisation (moins unaire / binaire)
//! - rpn.rs      : shunting-yard -> RPN
//! - eval.rs     : pile de f64 + pipeline complet
//! - erreur.rs   : EvaluationError (littéral illisible, seul échec possible)
//! - format.rs   : affichage “#.########” pour l’app
//!
//! Tout est local à un appel : pas d’état partagé, appelable depuis plusieurs threads.

pub mod assainir;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{evaluate, evaluate_detail, Demarche, Evaluation};
pub use format::format_resultat;
