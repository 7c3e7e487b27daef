//! Calculatrice Pro
//!
//! - `noyau` : évaluateur d’expressions infixes -> f64 (`noyau::evaluate`)
//! - `app`   : état + actions + vue egui autour du noyau

pub mod app;
pub mod noyau;

pub use noyau::{evaluate, EvaluationError};

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice Pro";
