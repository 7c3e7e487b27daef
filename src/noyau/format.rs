// src/noyau/format.rs
//
// Affichage d’un résultat f64 côté app (le noyau rend un f64 brut).
// Motif “#.########” : au plus 8 décimales, zéros finaux retirés.

/// Nombre maximal de décimales affichées.
pub const DECIMALES_AFFICHAGE: usize = 8;

pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let mut s = format!("{x:.prec$}", prec = DECIMALES_AFFICHAGE);

    // retire zéros finaux puis point orphelin
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // -0, ou petit négatif arrondi à zéro
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
