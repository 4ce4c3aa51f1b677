//! Tests scientifiques (campagne) : modes degrés/radians, familles de
//! fonctions, erreurs contractuelles, quirks figés.
//!
//! Notes importantes (alignées avec l'état actuel du noyau) :
//! - '^' est associatif à gauche (comparaison >= dans le shunting-yard) ;
//!   2^3^2 vaut 64, et c'est volontaire.
//! - Une fonction empilée avant '(' ne sort qu'au vidage final : elle
//!   s'applique donc aussi aux opérateurs qui suivent la parenthèse
//!   ("√(16)+9" vaut 5). Quirk conservé, figé ici.
//! - NaN est un résultat valide, jamais une erreur.

use super::eval_expression;

const TOL: f64 = 1e-9;

fn eval_ok(expr: &str, mode_degres: bool) -> f64 {
    eval_expression(expr, mode_degres)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, mode_degres: bool, attendu: f64) {
    let v = eval_ok(expr, mode_degres);
    assert!(
        (v - attendu).abs() < TOL,
        "expr={expr:?} attendu={attendu} obtenu={v}"
    );
}

fn assert_erreur(expr: &str, message: &str) {
    match eval_expression(expr, false) {
        Ok(v) => panic!("expr={expr:?} aurait dû échouer, a donné {v}"),
        Err(e) => assert_eq!(e, message, "expr={expr:?}"),
    }
}

/* ------------------------ Modes degrés / radians ------------------------ */

#[test]
fn sci_trig_directe_en_degres() {
    assert_proche("sin(90)", true, 1.0);
    assert_proche("sin(30)", true, 0.5);
    assert_proche("cos(0)", true, 1.0);
    assert_proche("cos(60)", true, 0.5);
    assert_proche("tan(45)", true, 1.0);
}

#[test]
fn sci_trig_directe_en_radians() {
    assert_proche("sin(π/2)", false, 1.0);
    assert_proche("cos(π)", false, -1.0);
    assert_proche("tan(0)", false, 0.0);
    // la même saisie change de valeur avec le mode
    let deg = eval_ok("sin(1)", true);
    let rad = eval_ok("sin(1)", false);
    assert!((deg - rad).abs() > 0.5);
}

#[test]
fn sci_trig_inverse_reconvertit_le_resultat() {
    assert_proche("sin⁻¹(0.5)", true, 30.0);
    assert_proche("cos⁻¹(0.5)", true, 60.0);
    assert_proche("tan⁻¹(1)", true, 45.0);
    assert_proche("sin⁻¹(1)", false, std::f64::consts::FRAC_PI_2);
}

#[test]
fn sci_aller_retour_trig() {
    // sin⁻¹ appliqué au résultat de sin (quirk de portée : la fonction
    // externe sort en dernier, donc l'imbrication directe marche)
    assert_proche("sin⁻¹(sin(30))", true, 30.0);
}

/* ------------------------ Familles de fonctions ------------------------ */

#[test]
fn sci_log_et_exponentielles() {
    assert_proche("log(1000)", false, 3.0);
    assert_proche("ln(1)", false, 0.0);
    assert_proche("10^2", false, 100.0);
    assert_proche("e^(0)", false, 1.0);
}

#[test]
fn sci_puissances_et_racines() {
    assert_proche("3x²", false, 9.0);
    assert_proche("√(144)", false, 12.0);
    assert_proche("2^10", false, 1024.0);
}

#[test]
fn sci_abs_et_factorielle() {
    assert_proche("abs(-7.5)", false, 7.5);
    assert_proche("6!", false, 720.0);
    assert_proche("0!", false, 1.0);
    assert_proche("2+3!", false, 8.0);
}

#[test]
fn sci_constantes() {
    assert_proche("π", false, std::f64::consts::PI);
    assert_proche("e", false, std::f64::consts::E);
    assert_proche("2*π*3", false, 6.0 * std::f64::consts::PI);
}

/* ------------------------ Erreurs contractuelles ------------------------ */

#[test]
fn sci_messages_contractuels() {
    assert_erreur("", "Invalid expression: Empty input or invalid characters.");
    assert_erreur(
        "*2+3",
        "Invalid expression: Cannot start or end with an operator.",
    );
    assert_erreur(
        "2+3*",
        "Invalid expression: Cannot start or end with an operator.",
    );
    assert_erreur(
        "2+/3",
        "Invalid expression: Consecutive operators are not allowed.",
    );
    assert_erreur("((2+3)", "Invalid expression: Mismatched parentheses.");
    assert_erreur("5/0", "Division by zero");
    assert_erreur("2 3", "Invalid expression: Unable to compute result.");
}

#[test]
fn sci_division_par_zero_calculee() {
    assert_erreur("1/(5-5)", "Division by zero");
    // le modulo par zéro n'est PAS intercepté : NaN passe
    assert!(eval_ok("5%0", false).is_nan());
}

/* ------------------------ Quirks figés ------------------------ */

#[test]
fn sci_caret_gauche_fige() {
    assert_proche("2^3^2", false, 64.0);
    assert_proche("4^0.5^2", false, 4.0); // (4^0.5)^2, pas 4^(0.25)
}

#[test]
fn sci_portee_fonction_figee() {
    // la fonction sous la '(' s'applique au vidage final
    assert_proche("√(16)+9", false, 5.0);
    assert_proche("√(4)*9", false, 6.0);
}

#[test]
fn sci_non_finis_passent_en_nombre() {
    assert!(eval_ok("ln(-1)", false).is_nan());
    assert!(eval_ok("sin⁻¹(2)", false).is_nan());
    assert!(eval_ok("√(-9)", false).is_nan());
}

/* ------------------------ Pureté / déterminisme ------------------------ */

#[test]
fn sci_reentrance_sans_etat() {
    // alternance de modes : aucun état ne fuit entre les appels
    let a1 = eval_ok("sin(90)", true);
    let _ = eval_ok("sin(90)", false);
    let a2 = eval_ok("sin(90)", true);
    assert_eq!(a1.to_bits(), a2.to_bits());
}
