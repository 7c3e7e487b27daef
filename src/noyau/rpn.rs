// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfix)
//
// Règles:
// - Num : sortie directe
// - ( : empilé
// - ) : dépile jusqu’à '(' ; si la pile se vide avant, on s’arrête sans erreur
// - opérateur binaire : dépile tant que precedence(sommet) >= precedence(op)
//   (>= strict => associativité gauche pour tous, y compris ^ : 2^3^2 = (2^3)^2)
// - opérateur unaire préfixe (neg, √) : empilé sans rien dépiler,
//   il n’a pas d’opérande à gauche (--5 = 5, √-4 = NaN)
// - fin : on vide la pile ; les '(' orphelines sont jetées

use super::jetons::{Arite, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num("2"), Op(Add), Num("3"), Op(Mul), Num("4")]
///   rpn:    [Num("2"), Num("3"), Num("4"), Op(Mul), Op(Add)]
///
/// N’échoue jamais : la sortie contient les mêmes nombres/opérateurs, sans parenthèses.
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (consommée) ; pile vide => arrêt silencieux
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    out.push(top);
                }
            }

            Tok::Op(op) => {
                if op.arite() == Arite::Binaire {
                    while let Some(Tok::Op(top)) = ops.last() {
                        if top.precedence() >= op.precedence() {
                            out.push(Tok::Op(*top));
                            ops.pop();
                        } else {
                            break;
                        }
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if !matches!(top, Tok::LPar) {
            out.push(top);
        }
    }

    out
}
