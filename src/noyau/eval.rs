//! Noyau: évaluation (pipeline réel)
//!
//! sanitize -> tokenize -> RPN -> pile de f64
//!
//! Tolérance voulue : opérande manquant = 0.0, pile finale vide = 0.0,
//! /0 et √ négatif suivent IEEE-754 (∞, NaN). Seul un littéral illisible échoue.

use tracing::debug;

use super::assainir::sanitize;
use super::erreur::EvaluationError;
use super::jetons::{format_tokens, tokenize, Op, Tok};
use super::rpn::to_rpn;

/// Trace texte du pipeline (panneau “Démarche” de l’app).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub demarche: Demarche,
}

/// API publique : évalue une expression infixe en f64.
///
/// Accepte les glyphes d’affichage `× ÷ −`. Échoue uniquement sur un
/// littéral numérique illisible (`1.2.3+4`).
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    evaluate_detail(expression).map(|e| e.valeur)
}

/// Comme `evaluate`, mais garde aussi les jetons et la RPN en texte.
pub fn evaluate_detail(expression: &str) -> Result<Evaluation, EvaluationError> {
    // 1) Assainir
    let s = sanitize(expression);

    // 2) Jetons
    let jetons = tokenize(&s);
    let jetons_txt = format_tokens(&jetons);

    // 3) RPN
    let rpn = to_rpn(&jetons);
    let rpn_txt = format_tokens(&rpn);
    debug!(jetons = %jetons_txt, rpn = %rpn_txt, "expression convertie");

    // 4) Pile
    let valeur = eval_rpn(&rpn)?;
    debug!(valeur, "expression évaluée");

    Ok(Evaluation {
        valeur,
        demarche: Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    })
}

/// Évalue une suite RPN avec une pile de f64.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, EvaluationError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(txt) => st.push(parse_litteral(txt)?),

            Tok::Op(op) => {
                let v = match op {
                    Op::Neg => -depile_un(&mut st),
                    Op::Sqrt => depile_un(&mut st).sqrt(),
                    Op::Add => {
                        let (a, b) = depile_deux(&mut st);
                        a + b
                    }
                    Op::Sub => {
                        let (a, b) = depile_deux(&mut st);
                        a - b
                    }
                    Op::Mul => {
                        let (a, b) = depile_deux(&mut st);
                        a * b
                    }
                    Op::Div => {
                        let (a, b) = depile_deux(&mut st);
                        a / b
                    }
                    Op::Pow => {
                        let (a, b) = depile_deux(&mut st);
                        a.powf(b)
                    }
                    Op::Percent => {
                        let (a, b) = depile_deux(&mut st);
                        a * (b / 100.0)
                    }
                };
                st.push(v);
            }

            // to_rpn n’en émet jamais ; ignorées si une RPN “à la main” en contient
            Tok::LPar | Tok::RPar => {}
        }
    }

    Ok(st.pop().unwrap_or(0.0))
}

/// Opérande absent => 0.0.
fn depile_un(st: &mut Vec<f64>) -> f64 {
    st.pop().unwrap_or(0.0)
}

/// Retourne (a, b) pour `a op b` : on dépile b (droite) puis a (gauche).
fn depile_deux(st: &mut Vec<f64>) -> (f64, f64) {
    let b = depile_un(st);
    let a = depile_un(st);
    (a, b)
}

fn parse_litteral(txt: &str) -> Result<f64, EvaluationError> {
    txt.parse::<f64>()
        .map_err(|source| EvaluationError::NumericParse {
            litteral: txt.to_string(),
            source,
        })
}
