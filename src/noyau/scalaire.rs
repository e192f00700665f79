// src/noyau/scalaire.rs
//
// Opérations scalaires (cœur f64)
// -------------------------------
// Contrat:
// - Fonctions pures : chaque appel ne lit que ses entrées et produit
//   une nouvelle valeur (aucun état partagé, aucun effet de bord).
// - Les gardes de domaine sont vérifiées AVANT tout calcul.
// - `puissance` ne lève jamais d'erreur : les combinaisons indéfinies
//   suivent IEEE-754 (NaN / ±∞), comme la trig et la racine cubique
//   qui sont totales sur les réels.

use std::f64::consts::PI;

use super::erreur::ErreurCalcul;

/// Unité d'angle pour les fonctions trigonométriques.
/// En mode `Degres`, l'évaluateur convertit l'argument via
/// [`degres_vers_radians`] avant d'appliquer sin/cos/tan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Radians,
    Degres,
}

/* ------------------------ Arithmétique de base ------------------------ */

pub fn addition(a: f64, b: f64) -> f64 {
    a + b
}

pub fn soustraction(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiplication(a: f64, b: f64) -> f64 {
    a * b
}

/// Division gardée : refuse un dénominateur exactement nul (±0.0).
pub fn division(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    if b == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(a / b)
}

/* ------------------------ Racines ------------------------ */

/// Racine carrée gardée : domaine a >= 0.
pub fn racine_carree(a: f64) -> Result<f64, ErreurCalcul> {
    if a < 0.0 {
        return Err(ErreurCalcul::DomaineInvalide(
            "racine carrée d'un nombre négatif".into(),
        ));
    }
    Ok(a.sqrt())
}

/// Racine cubique : définie sur tous les réels (cbrt(-8) = -2).
pub fn racine_cubique(a: f64) -> f64 {
    a.cbrt()
}

/* ------------------------ Trigonométrie (radians) ------------------------ */

pub fn sinus(a: f64) -> f64 {
    a.sin()
}

pub fn cosinus(a: f64) -> f64 {
    a.cos()
}

pub fn tangente(a: f64) -> f64 {
    a.tan()
}

/* ------------------------ Puissance ------------------------ */

/// a^exposant, sémantique IEEE-754 : jamais d'erreur, NaN/∞ possibles
/// (ex: base négative avec exposant fractionnaire).
pub fn puissance(a: f64, exposant: f64) -> f64 {
    a.powf(exposant)
}

/* ------------------------ Logarithmes ------------------------ */

/// Logarithme décimal gardé : domaine a > 0.
pub fn log10(a: f64) -> Result<f64, ErreurCalcul> {
    if a <= 0.0 {
        return Err(ErreurCalcul::DomaineInvalide(
            "logarithme d'un nombre non strictement positif".into(),
        ));
    }
    Ok(a.log10())
}

/// Logarithme népérien gardé : domaine a > 0.
pub fn ln(a: f64) -> Result<f64, ErreurCalcul> {
    if a <= 0.0 {
        return Err(ErreurCalcul::DomaineInvalide(
            "logarithme d'un nombre non strictement positif".into(),
        ));
    }
    Ok(a.ln())
}

/* ------------------------ Conversions d'angle ------------------------ */

pub fn degres_vers_radians(a: f64) -> f64 {
    a * PI / 180.0
}

pub fn radians_vers_degres(a: f64) -> f64 {
    a * 180.0 / PI
}
