//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, hors domaine,
//!   caractère inattendu, etc.)
//! - invariant clé : jamais de panique ; Ok(v) est un f64 (NaN/∞ tolérés,
//!   ils viennent de `puissance` par construction IEEE-754)

use std::time::{Duration, Instant};

use super::erreur::{ErreurCalcul, ErreurExpression};
use super::eval_expression;
use super::scalaire::ModeAngle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(e: &ErreurExpression) -> bool {
    // Liste blanche : erreurs qui sont *normales* pour un fuzz,
    // parce que le générateur peut produire des dénominateurs nuls
    // ou des arguments hors domaine.
    matches!(
        e,
        ErreurExpression::Calcul(ErreurCalcul::DivisionParZero)
            | ErreurExpression::Calcul(ErreurCalcul::DomaineInvalide(_))
    )
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers et décimaux simples, incluant 0 (utile pour tester
    // la garde de division)
    let a = rng.pick(8);
    if rng.coin() {
        format!("{a}")
    } else {
        format!("{a}.{}", rng.pick(10))
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 => gen_nombre(rng),
        1 => "pi".to_string(),
        2 => "e".to_string(),
        3 => "sqrt(2)".to_string(),
        _ => "cbrt(3)".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 => gen_atome(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        3 => format!(
            "({}*{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        4 => format!(
            "({}/{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        5 => format!("sin({})", gen_expr(rng, profondeur - 1)),
        6 => format!("cos({})", gen_expr(rng, profondeur - 1)),
        7 => format!("tan({})", gen_expr(rng, profondeur - 1)),
        8 => format!("sqrt({})", gen_nombre(rng)), // argument >= 0 par construction
        _ => format!("({})^{}", gen_expr(rng, profondeur - 1), rng.pick(4)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut suivant = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                suivant.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                suivant.push(items[i].clone());
                i += 1;
            }
        }
        items = suivant;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_pas_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match eval_expression(&expr, ModeAngle::Radians) {
            Ok((v, _d)) => {
                // NaN/∞ tolérés (puissance IEEE-754), mais la valeur doit
                // être reproductible
                let (v2, _d2) = eval_expression(&expr, ModeAngle::Radians)
                    .unwrap_or_else(|e| panic!("non déterministe: expr={expr:?} err={e}"));
                assert!(
                    v == v2 || (v.is_nan() && v2.is_nan()),
                    "non déterministe: expr={expr:?} v={v} v2={v2}"
                );
                vus_ok += 1;
            }
            Err(e) => {
                // On accepte certaines erreurs attendues en fuzz
                // (le générateur peut produire un dénominateur nul).
                assert!(
                    est_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
            }
        }
    }

    // Si presque tout échoue, le fuzz ne "balaye" rien.
    assert!(vus_ok > 10, "trop peu de succès: {vus_ok}");
}

#[test]
fn fuzz_safe_erreurs_attendues_observables() {
    // Les gardes du cœur doivent rester visibles au travers du pipeline,
    // sous la forme exacte que la liste blanche accepte.
    for s in ["1/0", "(2+3)/(2-2)", "sqrt(0-4)", "log(0-1)", "ln(0)"] {
        let e = eval_expression(s, ModeAngle::Radians)
            .expect_err("la garde de domaine aurait dû refuser");
        assert!(est_erreur_attendue(&e), "expr={s:?} err={e}");
    }
}

#[test]
fn fuzz_safe_mode_degres_coherent() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);

    // sin(x en degrés) == sin(rad(x) en radians) : les deux chemins
    // passent par la même conversion scalaire
    for _ in 0..80 {
        budget(t0, max);

        let a = rng.pick(720) as f64 - 360.0;
        let en_degres = format!("sin({a})");
        let en_radians = format!("sin(rad({a}))");

        let (v1, _) = eval_expression(&en_degres, ModeAngle::Degres)
            .unwrap_or_else(|e| panic!("expr={en_degres:?} err={e}"));
        let (v2, _) = eval_expression(&en_radians, ModeAngle::Radians)
            .unwrap_or_else(|e| panic!("expr={en_radians:?} err={e}"));

        assert_eq!(v1, v2, "angle={a}");
    }
}

#[test]
fn fuzz_safe_entrees_degeneres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Entrées cassées : le pipeline doit répondre par une erreur typée,
    // jamais par une panique.
    let cassees = [
        "", "   ", "(", ")", "((1+2)", "1+", "*1", "1 2", "sin()", "sin", "foo", "1..2", "^",
        "pi pi", "sqrt(", "1/*2", "#", "2 +* 3", "e(", "--", "-",
    ];

    for s in cassees {
        budget(t0, max);
        // Ok ou Err, peu importe : l'absence de panique est le contrat testé.
        let _ = eval_expression(s, ModeAngle::Radians);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let (v, _d) =
        eval_expression(&expr, ModeAngle::Radians).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(0.5) = 400
    assert_eq!(v, 400.0);
}
