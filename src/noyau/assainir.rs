// src/noyau/assainir.rs
//
// Glyphes d’affichage -> caractères canoniques, avant tokenisation.
// Substitution pure : aucune validation ici.

/// `×`→`*`, `÷`→`/`, `−`→`-`, et suppression de tous les blancs.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            autre => autre,
        })
        .collect()
}
