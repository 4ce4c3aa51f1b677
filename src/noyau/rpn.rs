// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Nombres et constantes => sortie directe (π/e restent symboliques).
// - Opérateur binaire : dépile tant que le sommet est un opérateur de
//   précédence >= (comparaison >= pour TOUS, y compris '^' : le '^' est
//   donc associatif à gauche, 2^3^2 == (2^3)^2).
// - Fonctions (sin, !, abs, 10^, …) : empilées telles quelles. Elles ne
//   sont dépilées ni par un opérateur binaire ni par la ')' quand elles
//   sont sous la '(' : elles sortent au vidage final ou avec le contenu
//   d'une parenthèse qui les contient.
// - Moins unaire non fusionné (devant fonction ou parenthèse) : on
//   injecte un 0 en sortie, "-x" devient "0 x -".

use super::jetons::{est_operateur, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons (validée) en RPN.
///
/// Exemple:
///   jetons: [Func(Sin), LPar, Num(90), RPar]
///   rpn:    [Num(90), Func(Sin)]
pub fn to_rpn(jetons: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un nombre, une constante ou une parenthèse fermée.
    // Sert à détecter le moins unaire restant.
    let mut prec_valeur = false;

    for tok in jetons.iter().copied() {
        match tok {
            Tok::Num(_) | Tok::Pi | Tok::Euler => {
                out.push(tok);
                prec_valeur = true;
            }

            Tok::Func(_) => {
                // fonction : sur la pile, elle sortira plus tard
                ops.push(tok);
                prec_valeur = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prec_valeur = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '(' ; les deux parenthèses sont jetées
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Tok::LPar) {
                        break;
                    }
                    out.push(haut);
                }
                prec_valeur = true;
            }

            Tok::Minus if !prec_valeur => {
                // moins unaire résiduel : "-x" => "0 x -"
                out.push(Tok::Num(0.0));
                depile_precedence(&mut ops, &mut out, &tok);
                ops.push(tok);
                prec_valeur = false;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                depile_precedence(&mut ops, &mut out, &tok);
                ops.push(tok);
                prec_valeur = false;
            }
        }
    }

    // vidage final ; une parenthèse restante = déséquilibre
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err("Invalid expression: Mismatched parentheses.".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile vers `out` tant que le sommet est un opérateur binaire de
/// précédence >= celle de `tok`. S'arrête sur '(' ou sur une fonction.
fn depile_precedence(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, tok: &Tok) {
    while let Some(haut) = ops.last() {
        if !est_operateur(haut) {
            break;
        }
        if precedence(haut) >= precedence(tok) {
            out.push(ops.pop().expect("sommet vérifié"));
        } else {
            break;
        }
    }
}
