//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique ; toute erreur est l'un des six
//!   messages contractuels, rien d'autre.

use std::time::{Duration, Instant};

use super::eval_expression;

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

const MESSAGES_CONTRACTUELS: [&str; 6] = [
    "Invalid expression: Empty input or invalid characters.",
    "Invalid expression: Cannot start or end with an operator.",
    "Invalid expression: Consecutive operators are not allowed.",
    "Invalid expression: Mismatched parentheses.",
    "Division by zero",
    "Invalid expression: Unable to compute result.",
];

fn est_erreur_contractuelle(msg: &str) -> bool {
    MESSAGES_CONTRACTUELS.contains(&msg)
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(10), rng.pick(10)),
        2 => "π".to_string(),
        3 => "e+1".to_string(),
        4 => format!("-{}", 1 + rng.pick(9)),
        _ => format!("{}", 1 + rng.pick(99)),
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
        5 => format!(
            "({}%{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        6 => format!("({}^2)", gen_expr(rng, profondeur - 1)),
        7 => format!("sin({})", gen_expr(rng, profondeur - 1)),
        8 => format!("abs({})", gen_expr(rng, profondeur - 1)),
        _ => format!("√({})", gen_expr(rng, profondeur - 1)),
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
fn fuzz_safe_jamais_de_panique_et_erreurs_blanches() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = rng.coin();

        match eval_expression(&expr, mode) {
            Ok(_) => vus_ok += 1,
            Err(e) => {
                assert!(
                    est_erreur_contractuelle(&e),
                    "erreur hors contrat: expr={expr:?} err={e}"
                );
                vus_err += 1;
            }
        }
    }

    // la génération est bien formée : l'essentiel doit réussir,
    // mais /0 doit apparaître de temps en temps
    assert!(vus_ok > 100, "trop peu de succès: {vus_ok}");
    assert!(vus_err + vus_ok == 200);
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = rng.coin();

        let a = eval_expression(&expr, mode);
        let b = eval_expression(&expr, mode);

        match (a, b) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
            (Err(x), Err(y)) => assert_eq!(x, y, "expr={expr:?}"),
            (a, b) => panic!("résultats divergents: expr={expr:?} {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn fuzz_safe_saisie_brute_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // pool volontairement sale : lexique + déchets
    const POOL: [char; 24] = [
        '0', '1', '9', '+', '-', '*', '/', '%', '^', '(', ')', '.', 's', 'i', 'n', 'e', '!', 'π',
        '√', '$', '@', ' ', 'x', '²',
    ];

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let long = 1 + rng.pick(24) as usize;
        let expr: String = (0..long)
            .map(|_| POOL[rng.pick(POOL.len() as u32) as usize])
            .collect();

        // aucune panique tolérée ; erreur => message contractuel
        if let Err(e) = eval_expression(&expr, rng.coin()) {
            assert!(
                est_erreur_contractuelle(&e),
                "erreur hors contrat: expr={expr:?} err={e}"
            );
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = somme_balancee("1", 800);
    budget(t0, max);

    let v = eval_expression(&expr, false).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 800.0);
}

#[test]
fn fuzz_safe_chaine_longue_plate() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // chaîne plate (pas d'arbre) : la pile RPN est itérative, pas récursive
    let mut expr = String::from("1");
    for _ in 0..800 {
        expr.push_str("+1");
    }
    budget(t0, max);

    let v = eval_expression(&expr, false).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 801.0);
}
