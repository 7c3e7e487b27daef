//! Tests de propriétés : comportement observable de `evaluate` de bout en bout.
//!
//! Précédence, associativité gauche, moins unaire, √, %, tolérances IEEE-754,
//! et l’unique erreur (littéral illisible).

use super::{evaluate, EvaluationError};

/* ------------------------ Helpers ------------------------ */

fn assert_val(expr: &str, attendu: f64) {
    match evaluate(expr) {
        Ok(v) => assert_eq!(v, attendu, "expr: {expr}"),
        Err(e) => panic!("expr: {expr} => erreur inattendue: {e}"),
    }
}

fn assert_nan(expr: &str) {
    let v = evaluate(expr).unwrap_or_else(|e| panic!("expr: {expr} => {e}"));
    assert!(v.is_nan(), "expr: {expr} => {v} (NaN attendu)");
}

/* ------------------------ Arithmétique de base ------------------------ */

#[test]
fn prop_addition_et_precedence() {
    assert_val("2+3", 5.0);
    assert_val("2+3*4", 14.0);
    assert_val("(2+3)*4", 20.0);
    assert_val("10-4/2", 8.0);
}

#[test]
fn prop_associativite_gauche() {
    assert_val("2^3^2", 64.0);
    assert_val("8-3-2", 3.0);
    assert_val("16/4/2", 2.0);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn prop_moins_unaire() {
    assert_val("-5+3", -2.0);
    assert_val("3*-2", -6.0);
    assert_val("--5", 5.0);
    assert_val("-(2+3)", -5.0);
    assert_val("5--3", 8.0);
}

#[test]
fn prop_moins_unaire_lie_avant_puissance() {
    // neg et ^ partagent le niveau 3, gauche d’abord : (-2)^2
    assert_val("-2^2", 4.0);
    assert_val("2^-1", 0.5);
}

/* ------------------------ √ et % ------------------------ */

#[test]
fn prop_racine() {
    assert_val("√9", 3.0);
    assert_val("√(9+16)", 5.0);
    assert_val("2*√4", 4.0);
    assert_nan("√-4");
}

#[test]
fn prop_pourcentage() {
    assert_val("200%50", 100.0);
    // formule littérale a × (b/100), pas “10 % de 50”
    assert_val("50+10%20", 52.0);
}

/* ------------------------ Tolérances ------------------------ */

#[test]
fn prop_division_par_zero() {
    assert_val("5/0", f64::INFINITY);
    assert_val("-5/0", f64::NEG_INFINITY);
    assert_nan("0/0");
}

#[test]
fn prop_operandes_manquants() {
    assert_val("+", 0.0);
    assert_val("", 0.0);
    assert_val("*3", 0.0);
    assert_val("3+", 3.0);
}

#[test]
fn prop_parentheses_desequilibrees() {
    assert_val("(1+2", 3.0);
    assert_val("1+2)*3", 9.0);
    assert_val("((4))", 4.0);
}

#[test]
fn prop_caracteres_ignores() {
    assert_val("2 + 3", 5.0);
    assert_val("2a+b3", 5.0);
}

/* ------------------------ Glyphes ------------------------ */

#[test]
fn prop_glyphes() {
    assert_val("6÷2", 3.0);
    assert_val("6/2", 3.0);
    assert_val("2×3−1", 5.0);
    assert_val("−4", -4.0);
}

/* ------------------------ Erreur ------------------------ */

#[test]
fn prop_litteral_illisible() {
    match evaluate("1.2.3+4") {
        Err(EvaluationError::NumericParse { litteral, .. }) => assert_eq!(litteral, "1.2.3"),
        autre => panic!("erreur attendue, obtenu {autre:?}"),
    }
    assert!(evaluate(".").is_err());
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn prop_idempotence() {
    for expr in ["2+3*4", "√2", "1/3", "2^0.5*√2", "5/0"] {
        let a = evaluate(expr).unwrap();
        let b = evaluate(expr).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "expr: {expr}");
    }
}

#[test]
fn prop_appels_concurrents() {
    let handles: Vec<_> = (0..4)
        .map(|k| std::thread::spawn(move || evaluate(&format!("{k}*10+√16")).unwrap()))
        .collect();
    for (k, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), k as f64 * 10.0 + 4.0);
    }
}
