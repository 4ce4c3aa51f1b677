//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> fusion moins unaire -> valider -> RPN -> pile de valeurs
//!
//! Le contrat public tient en une ligne : toute entrée produit soit un
//! nombre, soit un message d'erreur descriptif — jamais de panique.
//! Les résultats non finis (log d'un négatif, √ d'un négatif, …) passent
//! tels quels : NaN est un nombre, pas une erreur.

use std::f64::consts::{E, PI};

use super::jetons::{fusion_moins_unaire, tokenize, Fonction, Tok};
use super::rpn::to_rpn;
use super::valider::valider;

const ERR_CALCUL: &str = "Invalid expression: Unable to compute result.";

/// API publique : évalue une expression infixe et retourne sa valeur.
///
/// `mode_degres` gouverne les fonctions trigonométriques : arguments en
/// degrés (et résultats des inverses en degrés) si vrai, radians sinon.
pub fn eval_expression(expression: &str, mode_degres: bool) -> Result<f64, String> {
    let bruts = tokenize(expression)?;
    let jetons = fusion_moins_unaire(bruts);
    valider(&jetons)?;
    let rpn = to_rpn(&jetons)?;
    eval_rpn(&rpn, mode_degres)
}

/// Évalue une suite RPN sur une pile de valeurs.
pub fn eval_rpn(rpn: &[Tok], mode_degres: bool) -> Result<f64, String> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(x) => pile.push(x),

            // constantes résolues ici, pas au lexique
            Tok::Pi => pile.push(PI),
            Tok::Euler => pile.push(E),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                let b = pile.pop().ok_or(ERR_CALCUL)?;
                let a = pile.pop().ok_or(ERR_CALCUL)?;

                if matches!(tok, Tok::Slash) && b == 0.0 {
                    return Err("Division by zero".into());
                }

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    // reste flottant, signe du dividende
                    Tok::Percent => a % b,
                    Tok::Caret => a.powf(b),
                    _ => unreachable!(),
                };
                pile.push(v);
            }

            Tok::Func(f) => {
                let a = pile.pop().ok_or(ERR_CALCUL)?;
                pile.push(applique_fonction(f, a, mode_degres));
            }

            // une parenthèse n'atteint jamais la RPN (to_rpn les consomme)
            Tok::LPar | Tok::RPar => {
                return Err("Invalid expression: Mismatched parentheses.".into())
            }
        }
    }

    if pile.len() != 1 {
        return Err(ERR_CALCUL.into());
    }
    Ok(pile[0])
}

fn applique_fonction(f: Fonction, a: f64, mode_degres: bool) -> f64 {
    match f {
        // trig directe : argument converti degrés -> radians si besoin
        Fonction::Sin => en_radians(a, mode_degres).sin(),
        Fonction::Cos => en_radians(a, mode_degres).cos(),
        Fonction::Tan => en_radians(a, mode_degres).tan(),

        // trig inverse : résultat reconverti radians -> degrés si besoin
        Fonction::ArcSin => depuis_radians(a.asin(), mode_degres),
        Fonction::ArcCos => depuis_radians(a.acos(), mode_degres),
        Fonction::ArcTan => depuis_radians(a.atan(), mode_degres),

        Fonction::Log => a.log10(),
        Fonction::DixPuiss => 10f64.powf(a),
        Fonction::Ln => a.ln(),
        Fonction::ExpE => a.exp(),
        Fonction::Carre => a * a,
        Fonction::Racine => a.sqrt(),
        Fonction::Fact => factorielle(a),
        Fonction::Abs => a.abs(),
    }
}

fn en_radians(a: f64, mode_degres: bool) -> f64 {
    if mode_degres {
        a * PI / 180.0
    } else {
        a
    }
}

fn depuis_radians(a: f64, mode_degres: bool) -> f64 {
    if mode_degres {
        a * 180.0 / PI
    } else {
        a
    }
}

/// Factorielle itérative sur f64.
///
/// - n négatif => NaN
/// - n ∈ {0, 1} => 1
/// - sinon produit 2 × 3 × … × n
///
/// Un n fractionnaire n'est PAS tronqué : la borne de boucle est comparée
/// en flottant, donc 3.5! == 6 (on s'arrête après i = 3). Comportement
/// historique, conservé tel quel.
pub fn factorielle(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }

    let mut resultat = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        resultat *= i;
        i += 1.0;
    }
    resultat
}
