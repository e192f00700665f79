// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> évaluation f64
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis évaluer la RPN en appelant les opérations scalaires
//
// Règles:
// - Ident(nom):
//    - si nom ∈ FONCTIONS => fonction unaire (postfixée en RPN)
//    - si nom == "e"      => constante d'Euler
//    - sinon              => symbole inconnu (erreur, jamais ignoré en silence)
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, on injecte 0 : "-x" => "0 x -"
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs "collés" à leur argument
//   et sont sorties après la parenthèse fermante.

use super::erreur::ErreurExpression;
use super::jetons::Jeton;
use super::scalaire::{self, ModeAngle};

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Etoile | Jeton::Barre => 2,
        Jeton::Caret => 3,
        _ => 0,
    }
}

fn est_associatif_droite(j: &Jeton) -> bool {
    matches!(j, Jeton::Caret)
}

/// Identificateurs reconnus comme fonctions (unaires).
/// "log" = logarithme décimal, "ln" = népérien,
/// "rad" = degrés -> radians, "deg" = radians -> degrés.
fn est_fonction_ident(nom: &str) -> bool {
    matches!(
        nom,
        "sin" | "cos" | "tan" | "sqrt" | "cbrt" | "log" | "ln" | "rad" | "deg"
    )
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("sin"), ParG, Pi, Barre, Num(2), ParD]
///   rpn:    [Pi, Num(2), Barre, Ident("sin")]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurExpression> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prec_est_valeur = false;

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Num(_) | Jeton::Pi => {
                out.push(jeton);
                prec_est_valeur = true;
            }

            Jeton::Ident(nom) => {
                if est_fonction_ident(&nom) {
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    ops.push(Jeton::Ident(nom));
                    prec_est_valeur = false;
                } else {
                    // constante nommée ("e") ou symbole inconnu : sortie directe,
                    // l'évaluation tranchera
                    out.push(Jeton::Ident(nom));
                    prec_est_valeur = true;
                }
            }

            Jeton::ParG => {
                ops.push(jeton);
                prec_est_valeur = false;
            }

            Jeton::ParD => {
                // dépile jusqu'à '('
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::ParG) {
                        break;
                    }
                    out.push(haut);
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Jeton::Ident(nom)) = ops.last() {
                    if est_fonction_ident(nom.as_str()) {
                        out.push(ops.pop().unwrap());
                    }
                }

                prec_est_valeur = true;
            }

            Jeton::Plus | Jeton::Etoile | Jeton::Barre | Jeton::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(haut) = ops.last() {
                    if matches!(haut, Jeton::ParG) {
                        break;
                    }
                    if let Jeton::Ident(nom) = haut {
                        if est_fonction_ident(nom.as_str()) {
                            break;
                        }
                    }

                    let p_haut = precedence(haut);
                    let p_jeton = precedence(&jeton);

                    let doit_pop = if est_associatif_droite(&jeton) {
                        p_haut > p_jeton
                    } else {
                        p_haut >= p_jeton
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(jeton);
                prec_est_valeur = false;
            }

            Jeton::Moins => {
                // moins unaire : si pas de valeur avant, injecte 0
                if !prec_est_valeur {
                    out.push(Jeton::Num(0.0));
                }

                while let Some(haut) = ops.last() {
                    if matches!(haut, Jeton::ParG) {
                        break;
                    }
                    if let Jeton::Ident(nom) = haut {
                        if est_fonction_ident(nom.as_str()) {
                            break;
                        }
                    }
                    if precedence(haut) >= precedence(&Jeton::Moins) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Jeton::Moins);
                prec_est_valeur = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG) {
            return Err(ErreurExpression::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN en f64, en appelant les opérations scalaires.
///
/// - Ident(nom):
///     - fonction reconnue => application unaire (trig selon `mode`)
///     - "e"               => constante d'Euler
///     - sinon             => ErreurExpression::SymboleInconnu
pub fn eval_rpn(rpn: &[Jeton], mode: ModeAngle) -> Result<f64, ErreurExpression> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn.iter() {
        match jeton {
            Jeton::Num(v) => pile.push(*v),
            Jeton::Pi => pile.push(std::f64::consts::PI),

            Jeton::Plus | Jeton::Moins | Jeton::Etoile | Jeton::Barre | Jeton::Caret => {
                let b = pile.pop().ok_or(ErreurExpression::ExpressionInvalide)?;
                let a = pile.pop().ok_or(ErreurExpression::ExpressionInvalide)?;

                let v = match jeton {
                    Jeton::Plus => scalaire::addition(a, b),
                    Jeton::Moins => scalaire::soustraction(a, b),
                    Jeton::Etoile => scalaire::multiplication(a, b),
                    Jeton::Barre => scalaire::division(a, b)?,
                    Jeton::Caret => scalaire::puissance(a, b),
                    _ => unreachable!(),
                };

                pile.push(v);
            }

            Jeton::Ident(nom) => {
                if est_fonction_ident(nom.as_str()) {
                    let x = pile
                        .pop()
                        .ok_or_else(|| ErreurExpression::FonctionSansArgument(nom.clone()))?;
                    let v = appliquer_fonction(nom.as_str(), x, mode)?;
                    pile.push(v);
                } else if nom == "e" {
                    pile.push(std::f64::consts::E);
                } else {
                    return Err(ErreurExpression::SymboleInconnu(nom.clone()));
                }
            }

            Jeton::ParG | Jeton::ParD => return Err(ErreurExpression::ExpressionInvalide),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurExpression::ExpressionInvalide);
    }
    Ok(pile.pop().unwrap())
}

/// Application d'une fonction unaire reconnue.
/// Les fonctions trig reçoivent leur argument dans l'unité de `mode`.
fn appliquer_fonction(nom: &str, x: f64, mode: ModeAngle) -> Result<f64, ErreurExpression> {
    let angle = |x: f64| match mode {
        ModeAngle::Radians => x,
        ModeAngle::Degres => scalaire::degres_vers_radians(x),
    };

    let v = match nom {
        "sin" => scalaire::sinus(angle(x)),
        "cos" => scalaire::cosinus(angle(x)),
        "tan" => scalaire::tangente(angle(x)),
        "sqrt" => scalaire::racine_carree(x)?,
        "cbrt" => scalaire::racine_cubique(x),
        "log" => scalaire::log10(x)?,
        "ln" => scalaire::ln(x)?,
        "rad" => scalaire::degres_vers_radians(x),
        "deg" => scalaire::radians_vers_degres(x),
        _ => unreachable!(),
    };

    Ok(v)
}
