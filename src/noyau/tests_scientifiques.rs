//! Tests scientifiques (campagne) : contrat des opérations scalaires + pipeline.
//!
//! But : vérifier les propriétés observables du cœur sans faire chauffer la machine.
//! - gardes de domaine : échec EXACTEMENT quand la précondition est violée
//! - propriétés algébriques échantillonnées (commutativité, inverses)
//! - aller-retour degrés/radians
//! - sémantique IEEE-754 de `puissance` (NaN toléré, jamais d'erreur)
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - Les comparaisons f64 passent par une tolérance relative (assert_proche),
//!   sauf les cas exacts garantis par IEEE-754 (sqrt(4) == 2, cbrt(-8) == -2,
//!   puissance(2,10) == 1024 : tous représentables exactement).
//! - `division` refuse ±0.0 exactement ; un dénominateur minuscule mais non
//!   nul reste une division valide (pas de seuil caché).

use super::erreur::ErreurCalcul;
use super::scalaire::{
    addition, cosinus, degres_vers_radians, division, ln, log10, multiplication, puissance,
    racine_carree, racine_cubique, radians_vers_degres, sinus, soustraction, tangente,
};

// Tolérance relative à la magnitude des DEUX côtés : (a+b)-b perd des ulps
// proportionnels à |b|, pas à |a| (ex: a=1e-6, b=1e6).
fn assert_proche(a: f64, b: f64) {
    let tol = 1e-9 * a.abs().max(b.abs()).max(1.0);
    if (a - b).abs() > tol {
        panic!("diff: {a} vs {b}");
    }
}

/// Échantillon de valeurs finies "qui couvrent" (signes, magnitudes, zéro).
const ECHANTILLON: [f64; 9] = [
    0.0, 1.0, -1.0, 0.5, -2.5, 3.75, 1e6, -1e-6, 12345.6789,
];

/* ------------------------ Propriétés algébriques ------------------------ */

#[test]
fn sci_commutativite_addition_multiplication() {
    for &a in &ECHANTILLON {
        for &b in &ECHANTILLON {
            assert_eq!(addition(a, b), addition(b, a), "a={a} b={b}");
            assert_eq!(multiplication(a, b), multiplication(b, a), "a={a} b={b}");
        }
    }
}

#[test]
fn sci_soustraction_inverse_addition() {
    for &a in &ECHANTILLON {
        for &b in &ECHANTILLON {
            assert_proche(soustraction(addition(a, b), b), a);
        }
    }
}

#[test]
fn sci_division_inverse_multiplication() {
    for &a in &ECHANTILLON {
        for &b in &ECHANTILLON {
            if b == 0.0 {
                continue;
            }
            let q = division(a, b).unwrap_or_else(|e| panic!("a={a} b={b} err={e}"));
            assert_proche(q * b, a);
        }
    }
}

/* ------------------------ Gardes de domaine ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(division(10.0, 0.0), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(division(0.0, 0.0), Err(ErreurCalcul::DivisionParZero));
    // -0.0 == 0.0 en IEEE-754 : refusé aussi
    assert_eq!(division(1.0, -0.0), Err(ErreurCalcul::DivisionParZero));

    // dénominateur minuscule mais non nul : valide
    assert!(division(1.0, 1e-300).is_ok());
}

#[test]
fn sci_racine_carree_domaine() {
    assert!(matches!(
        racine_carree(-1.0),
        Err(ErreurCalcul::DomaineInvalide(_))
    ));
    assert!(matches!(
        racine_carree(-1e-12),
        Err(ErreurCalcul::DomaineInvalide(_))
    ));

    assert_eq!(racine_carree(4.0), Ok(2.0));
    assert_eq!(racine_carree(0.0), Ok(0.0));
    assert_proche(racine_carree(2.0).unwrap(), std::f64::consts::SQRT_2);
}

#[test]
fn sci_logarithmes_domaine() {
    for mauvais in [0.0, -1.0, -0.5] {
        assert!(matches!(
            log10(mauvais),
            Err(ErreurCalcul::DomaineInvalide(_))
        ));
        assert!(matches!(ln(mauvais), Err(ErreurCalcul::DomaineInvalide(_))));
    }

    assert_eq!(log10(100.0), Ok(2.0));
    assert_eq!(ln(1.0), Ok(0.0));
    assert_proche(ln(std::f64::consts::E).unwrap(), 1.0);
}

/* ------------------------ Fonctions totales ------------------------ */

#[test]
fn sci_racine_cubique_negatifs() {
    assert_eq!(racine_cubique(-8.0), -2.0);
    assert_eq!(racine_cubique(27.0), 3.0);
    assert_eq!(racine_cubique(0.0), 0.0);
}

#[test]
fn sci_trig_valeurs_connues() {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    assert_proche(sinus(FRAC_PI_2), 1.0);
    assert_proche(cosinus(PI), -1.0);
    assert_proche(tangente(FRAC_PI_4), 1.0);
    assert_proche(sinus(0.0), 0.0);

    // tan(π/2) n'est PAS une erreur en f64 : π/2 n'est pas représentable
    // exactement, le résultat est un flottant énorme mais fini
    assert!(tangente(FRAC_PI_2).is_finite());
}

#[test]
fn sci_puissance_ieee754() {
    assert_eq!(puissance(2.0, 10.0), 1024.0);

    for &a in &ECHANTILLON {
        if a != 0.0 {
            assert_eq!(puissance(a, 0.0), 1.0, "a={a}");
        }
    }

    // combinaisons indéfinies : NaN/∞, jamais une erreur
    assert!(puissance(-2.0, 0.5).is_nan());
    assert!(puissance(0.0, -1.0).is_infinite());
}

/* ------------------------ Conversions d'angle ------------------------ */

#[test]
fn sci_conversion_angles_aller_retour() {
    for &x in &ECHANTILLON {
        assert_proche(degres_vers_radians(radians_vers_degres(x)), x);
        assert_proche(radians_vers_degres(degres_vers_radians(x)), x);
    }

    assert_proche(degres_vers_radians(180.0), std::f64::consts::PI);
    assert_proche(radians_vers_degres(std::f64::consts::PI), 180.0);
}

/* ------------------------ Bout en bout (pipeline) ------------------------ */

#[test]
fn sci_bout_en_bout() {
    use super::erreur::ErreurExpression;
    use super::eval_expression;
    use super::scalaire::ModeAngle;

    let (v, _d) = eval_expression("2+3", ModeAngle::Radians).unwrap();
    assert_eq!(v, 5.0);

    assert_eq!(
        eval_expression("10/0", ModeAngle::Radians).unwrap_err(),
        ErreurExpression::Calcul(ErreurCalcul::DivisionParZero)
    );

    assert!(matches!(
        eval_expression("sqrt(-1)", ModeAngle::Radians).unwrap_err(),
        ErreurExpression::Calcul(ErreurCalcul::DomaineInvalide(_))
    ));

    let (v, _d) = eval_expression("cbrt(-8)", ModeAngle::Radians).unwrap();
    assert_eq!(v, -2.0);

    let (v, _d) = eval_expression("deg(pi)", ModeAngle::Radians).unwrap();
    assert_proche(v, 180.0);

    let (v, _d) = eval_expression("rad(180)", ModeAngle::Radians).unwrap();
    assert_proche(v, std::f64::consts::PI);

    let (v, _d) = eval_expression("2^10", ModeAngle::Radians).unwrap();
    assert_eq!(v, 1024.0);

    let (v, _d) = eval_expression("log(100)", ModeAngle::Radians).unwrap();
    assert_proche(v, 2.0);
}
