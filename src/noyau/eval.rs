//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN -> évaluation f64 (opérations scalaires)
//!
//! Remarque : la grammaire est fixe et auditée (précédence, moins unaire,
//! fonctions unaires). Aucun moteur de script, aucun jeton ignoré en silence :
//! tout symbole non reconnu est une erreur typée.

use super::erreur::ErreurExpression;
use super::jetons::{format_jetons, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use super::scalaire::ModeAngle;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// API publique : évalue une expression et retourne:
/// - la valeur f64 (NaN/∞ possibles via `puissance`, sémantique IEEE-754)
/// - Démarche (jetons, rpn, note)
///
/// Les fonctions trig lisent leur argument dans l'unité de `mode`.
pub fn eval_expression(
    expr_str: &str,
    mode: ModeAngle,
) -> Result<(f64, DemarcheNoyau), ErreurExpression> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurExpression::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_jetons(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);

    // 3) Évaluation f64 (opérations scalaires gardées)
    let valeur = eval_rpn(&rpn, mode)?;

    // 4) Démarche
    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
        note: "Pipeline: jetons -> RPN -> évaluation f64 (gardes de domaine avant calcul)."
            .into(),
    };

    Ok((valeur, d))
}

#[cfg(test)]
mod tests {
    use super::eval_expression;
    use crate::noyau::erreur::{ErreurCalcul, ErreurExpression};
    use crate::noyau::scalaire::ModeAngle;

    fn ok_rad(s: &str) -> f64 {
        let (v, _d) = eval_expression(s, ModeAngle::Radians)
            .unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"));
        v
    }

    fn err_rad(s: &str) -> ErreurExpression {
        match eval_expression(s, ModeAngle::Radians) {
            Ok((v, _)) => panic!("attendu une erreur pour {s:?}, obtenu {v}"),
            Err(e) => e,
        }
    }

    fn assert_proche(a: f64, b: f64) {
        let tol = 1e-12 * b.abs().max(1.0);
        if (a - b).abs() > tol {
            panic!("diff: {a} vs {b}");
        }
    }

    // --- Précédence / associativité ---

    #[test]
    fn precedence_mul_sur_add() {
        assert_proche(ok_rad("2+3*4"), 14.0);
        assert_proche(ok_rad("(2+3)*4"), 20.0);
    }

    #[test]
    fn caret_associatif_droite() {
        // 2^3^2 = 2^(3^2) = 512
        assert_proche(ok_rad("2^3^2"), 512.0);
    }

    #[test]
    fn moins_unaire() {
        assert_proche(ok_rad("-(1/2) + 1"), 0.5);
        assert_proche(ok_rad("-3 + 5"), 2.0);
        assert_proche(ok_rad("2*(-3)"), -6.0);
    }

    // --- Fonctions ---

    #[test]
    fn fonction_sur_expression() {
        assert_proche(ok_rad("sqrt(2)*sqrt(2)"), 2.0);
        assert_proche(ok_rad("1/2 + sin(pi/6)"), 1.0);
    }

    #[test]
    fn constantes_pi_e() {
        assert_proche(ok_rad("pi"), std::f64::consts::PI);
        assert_proche(ok_rad("ln(e)"), 1.0);
        assert_proche(ok_rad("2e3"), 2000.0);
    }

    #[test]
    fn mode_degres() {
        let (v, _d) = eval_expression("sin(90)", ModeAngle::Degres).unwrap();
        assert_proche(v, 1.0);
        let (v, _d) = eval_expression("cos(180)", ModeAngle::Degres).unwrap();
        assert_proche(v, -1.0);
    }

    #[test]
    fn espaces_et_majuscules() {
        assert_proche(ok_rad("  SIN ( PI / 2 ) "), 1.0);
    }

    // --- Erreurs ---

    #[test]
    fn entree_vide() {
        assert_eq!(err_rad("   "), ErreurExpression::EntreeVide);
    }

    #[test]
    fn parentheses_non_fermees() {
        assert_eq!(err_rad("(1+2"), ErreurExpression::ParenthesesNonFermees);
    }

    #[test]
    fn caractere_inattendu() {
        assert_eq!(err_rad("1 # 2"), ErreurExpression::CaractereInattendu('#'));
    }

    #[test]
    fn symbole_inconnu_jamais_ignore() {
        // un identifiant non reconnu doit produire une erreur typée,
        // jamais être sauté en silence
        assert_eq!(
            err_rad("foo"),
            ErreurExpression::SymboleInconnu("foo".into())
        );
    }

    #[test]
    fn fonction_sans_argument() {
        assert_eq!(
            err_rad("sin()"),
            ErreurExpression::FonctionSansArgument("sin".into())
        );
    }

    #[test]
    fn division_par_zero_via_pipeline() {
        assert_eq!(
            err_rad("10/0"),
            ErreurExpression::Calcul(ErreurCalcul::DivisionParZero)
        );
    }

    #[test]
    fn domaine_invalide_via_pipeline() {
        assert!(matches!(
            err_rad("sqrt(-1)"),
            ErreurExpression::Calcul(ErreurCalcul::DomaineInvalide(_))
        ));
        assert!(matches!(
            err_rad("log(0)"),
            ErreurExpression::Calcul(ErreurCalcul::DomaineInvalide(_))
        ));
    }

    // --- Démarche ---

    #[test]
    fn demarche_jetons_et_rpn() {
        let (_v, d) = eval_expression("sin(pi/2)", ModeAngle::Radians).unwrap();
        assert_eq!(d.jetons, "sin ( π / 2 )");
        assert_eq!(d.rpn, "π 2 / sin");
        assert!(!d.note.is_empty());
    }
}
