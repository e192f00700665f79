//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat, erreur,
//! mode d'angle, décimales, démarche) et offrir des opérations simples
//! (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur les décimales affichées.

use crate::noyau::ModeAngle;

/// Nombre de décimales affichées par défaut.
const DECIMALES_DEFAUT: usize = 12;

/// Garde-fou : un f64 ne porte pas plus de 17 chiffres significatifs.
const DECIMALES_MAX: usize = 17;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,     // valeur formatée (décimales, indéfini, ∞)
    pub erreur: String,       // message d'erreur (si parsing/éval échoue)
    pub resultat_dispo: bool, // false si rien à afficher

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub decimales: usize,    // décimales affichées
    pub mode: ModeAngle,     // unité des fonctions trig

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            resultat_dispo: false, // au démarrage : rien à lire
            demarche: Demarche::default(),
            decimales: DECIMALES_DEFAUT,
            mode: ModeAngle::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + paramètres par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.mode = ModeAngle::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.resultat_dispo = false; // clair : il n'y a rien à lire
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas "effacer l'écran"
    ///   sur une faute.
    /// - On coupe la démarche (non fiable si l'évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur formatée + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.resultat_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite les décimales affichées.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.clamp(0, DECIMALES_MAX);
        self.focus_entree = true;
    }

    /// Bascule radians/degrés (les fonctions trig lisent ce mode).
    pub fn set_mode(&mut self, mode: ModeAngle) {
        self.mode = mode;
        self.focus_entree = true;
    }
}
