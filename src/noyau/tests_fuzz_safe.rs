//! Tests fuzz safe : robustesse + déterminisme sur des entrées arbitraires.
//!
//! - alphabet borné (chiffres, opérateurs, glyphes, blancs, lettres parasites)
//! - longueur bornée : l’algorithme est linéaire, aucun risque de gel
//! - invariant clé : erreur <=> au moins un littéral numérique illisible

use proptest::prelude::*;

use super::assainir::sanitize;
use super::evaluate;
use super::jetons::{tokenize, Tok};
use super::rpn::to_rpn;

/* ------------------------ Helpers ------------------------ */

/// Égalité bit à bit, NaN == NaN.
fn meme_valeur(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fn a_litteral_illisible(expr: &str) -> bool {
    tokenize(&sanitize(expr))
        .iter()
        .any(|t| matches!(t, Tok::Num(txt) if txt.parse::<f64>().is_err()))
}

const ALPHABET: &str = "[0-9.+\\-*/^%()√×÷− xa]{0,40}";

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn fuzz_erreur_ssi_litteral_illisible(expr in ALPHABET) {
        let illisible = a_litteral_illisible(&expr);
        match evaluate(&expr) {
            Ok(_) => prop_assert!(!illisible, "aucune erreur pour {:?}", expr),
            Err(e) => {
                prop_assert!(illisible, "erreur inattendue pour {:?}: {}", expr, e);
                prop_assert!(e.litteral().parse::<f64>().is_err());
            }
        }
    }

    #[test]
    fn fuzz_deterministe(expr in ALPHABET) {
        match (evaluate(&expr), evaluate(&expr)) {
            (Ok(a), Ok(b)) => prop_assert!(meme_valeur(a, b)),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "résultats divergents: {:?} / {:?}", a, b),
        }
    }

    #[test]
    fn fuzz_blancs_sans_effet(expr in ALPHABET) {
        let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
        match (evaluate(&expr), evaluate(&compact)) {
            (Ok(a), Ok(b)) => prop_assert!(meme_valeur(a, b)),
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "{:?} / {:?}", a, b),
        }
    }

    #[test]
    fn fuzz_glyphes_equivalents(expr in "[0-9+\\-*/()]{0,30}") {
        let glyphes = expr.replace('*', "×").replace('/', "÷").replace('-', "−");
        let a = evaluate(&expr).map_err(|e| e.to_string());
        let b = evaluate(&glyphes).map_err(|e| e.to_string());
        match (a, b) {
            (Ok(x), Ok(y)) => prop_assert!(meme_valeur(x, y)),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn fuzz_rpn_sans_parentheses(expr in ALPHABET) {
        let jetons = tokenize(&sanitize(&expr));
        let rpn = to_rpn(&jetons);

        prop_assert!(rpn.iter().all(|t| !matches!(t, Tok::LPar | Tok::RPar)));

        // mêmes nombres / opérateurs, seulement réordonnés
        let sans_par = jetons
            .iter()
            .filter(|t| !matches!(t, Tok::LPar | Tok::RPar))
            .count();
        prop_assert_eq!(rpn.len(), sans_par);
    }

    #[test]
    fn fuzz_entiers_additionnes(a in 0u32..100_000, b in 0u32..100_000) {
        let v = evaluate(&format!("{a} + {b}")).unwrap();
        prop_assert_eq!(v, f64::from(a) + f64::from(b));
    }

    #[test]
    fn fuzz_precedence_mul_add(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let v = evaluate(&format!("{a}+{b}×{c}")).unwrap();
        prop_assert_eq!(v, f64::from(a) + f64::from(b) * f64::from(c));
    }
}
