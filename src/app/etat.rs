//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (expression, résultat, historique, démarche)
//! et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing) : voir action.rs.
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné (HISTORIQUE_MAX), plus récent en tête.

/// Garde-fou : nombre d’entrées gardées dans l’historique.
pub const HISTORIQUE_MAX: usize = 100;

/// Texte affiché quand l’évaluation échoue (aucun diagnostic exposé).
pub const RESULTAT_ERREUR: &str = "Error";

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sortie ---
    pub resultat: String, // déjà formaté, ou RESULTAT_ERREUR

    // --- historique "expr = résultat" ---
    pub historique: Vec<String>,
    pub historique_visible: bool,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: String::new(),
            historique: Vec::new(),
            historique_visible: false,
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Ajoute un chiffre / opérateur tel quel à la fin de l’expression.
    pub fn ajouter(&mut self, texte: &str) {
        self.expression.push_str(texte);
        self.focus_entree = true;
    }

    /// C : efface l’expression et le résultat (l’historique reste).
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.resultat.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// ⌫ : retire le dernier caractère (un glyphe compte pour un).
    pub fn supprimer(&mut self) {
        self.expression.pop();
        self.focus_entree = true;
    }

    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
    }

    pub fn vider_historique(&mut self) {
        self.historique.clear();
    }

    /// Utilitaire : déposer un résultat réussi + l’entrée d’historique.
    pub fn set_resultat(&mut self, formate: String, demarche: Demarche) {
        self.historique
            .insert(0, format!("{} = {}", self.expression, formate));
        self.historique.truncate(HISTORIQUE_MAX);

        self.resultat = formate;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Utilitaire : échec générique.
    ///
    /// On garde l’expression (l’utilisateur corrige) ; l’historique n’est pas touché.
    pub fn set_erreur(&mut self) {
        self.resultat = RESULTAT_ERREUR.to_string();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }
}
