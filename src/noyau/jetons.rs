// src/noyau/jetons.rs

use super::erreur::ErreurExpression;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Num(f64),
    Pi,

    // Fonctions + constantes nommées (tout ce qui n'est pas pi / opérateur / nombre)
    // NOTE: l'évaluation RPN décidera si c'est une fonction (sin/cos/...) ou la constante e.
    Ident(String),

    Plus,
    Moins,
    Etoile,
    Barre,
    Caret, // ^

    ParG,
    ParD,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres f64 : entiers (12), décimaux (3.5), notation scientifique (2e3, 1.5e-2)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - π ou pi
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
/// - √ (équivaut à ident("sqrt"))
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurExpression> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Etoile);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Barre);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // π : "π" (le mot "pi" passe par la voie des identifiants)
        if c == 'π' {
            out.push(Jeton::Pi);
            i += 1;
            continue;
        }

        // Racine carrée unicode : √  => ident("sqrt")
        if c == '√' {
            out.push(Jeton::Ident("sqrt".to_string()));
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let debut = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();
            let m = mot.to_lowercase();

            // Normalisation : "pi" / "PI" devient Jeton::Pi
            if m == "pi" {
                out.push(Jeton::Pi);
            } else {
                out.push(Jeton::Ident(m));
            }
            continue;
        }

        // Nombre f64 : chiffres [. chiffres] [e[+-]chiffres]
        if c.is_ascii_digit() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            // partie décimale
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            // exposant scientifique : seulement si 'e' est suivi de chiffres
            // (sinon "2e" doit rester Num(2) puis Ident("e"))
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let sauve = i;
                i += 1;
                if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
                    i += 1;
                }
                if i < chars.len() && chars[i].is_ascii_digit() {
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                } else {
                    i = sauve; // on remet sur 'e'
                }
            }

            let txt: String = chars[debut..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurExpression::NombreInvalide(txt.clone()))?;
            out.push(Jeton::Num(v));
            continue;
        }

        return Err(ErreurExpression::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (debug/"démarche") : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    fn format_num(v: f64) -> String {
        if v == v.trunc() && v.abs() < 1e15 {
            format!("{}", v as i64)
        } else {
            format!("{v}")
        }
    }

    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Num(v) => format_num(*v),
            Jeton::Pi => "π".to_string(),
            Jeton::Ident(nom) => nom.clone(),

            Jeton::Plus => "+".to_string(),
            Jeton::Moins => "-".to_string(),
            Jeton::Etoile => "*".to_string(),
            Jeton::Barre => "/".to_string(),
            Jeton::Caret => "^".to_string(),

            Jeton::ParG => "(".to_string(),
            Jeton::ParD => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
