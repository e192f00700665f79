// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// Deux couches:
// - ErreurCalcul      : échecs des opérations scalaires (gardes de domaine)
// - ErreurExpression  : échecs du pipeline texte (jetons -> RPN -> éval),
//                       qui englobe ErreurCalcul via #[from]
//
// Politique : signalement synchrone à l'appelant immédiat, message lisible,
// aucune tentative de récupération dans le noyau (l'appelant décide).

use thiserror::Error;

/// Échec d'une opération scalaire gardée.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("hors domaine : {0}")]
    DomaineInvalide(String),
}

/// Échec du pipeline d'évaluation d'une expression texte.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurExpression {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("symbole inconnu: {0}")]
    SymboleInconnu(String),

    #[error("fonction sans argument: {0}")]
    FonctionSansArgument(String),

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error(transparent)]
    Calcul(#[from] ErreurCalcul),
}
