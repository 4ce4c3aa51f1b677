// src/noyau/valider.rs
//
// Contrôles structurels sur la suite de jetons, APRÈS fusion du moins
// unaire (un nombre négatif fusionné ne compte plus comme opérateur).
// Trois contrôles, chacun avec son message contractuel :
// - tête/queue : un opérateur en tête (sauf '-') ou en queue
// - deux opérateurs adjacents
// - solde de parenthèses négatif en cours de route, ou non nul à la fin

use super::jetons::{est_operateur, Tok};

/// Valide la suite de jetons. Premier contrôle en échec => son message.
pub fn valider(jetons: &[Tok]) -> Result<(), String> {
    // 1) tête/queue
    if let Some(premier) = jetons.first() {
        if est_operateur(premier) && !matches!(premier, Tok::Minus) {
            return Err("Invalid expression: Cannot start or end with an operator.".into());
        }
    }
    if let Some(dernier) = jetons.last() {
        if est_operateur(dernier) {
            return Err("Invalid expression: Cannot start or end with an operator.".into());
        }
    }

    // 2) opérateurs consécutifs
    for paire in jetons.windows(2) {
        if est_operateur(&paire[0]) && est_operateur(&paire[1]) {
            return Err("Invalid expression: Consecutive operators are not allowed.".into());
        }
    }

    // 3) équilibre des parenthèses
    let mut solde: i64 = 0;
    for t in jetons {
        match t {
            Tok::LPar => solde += 1,
            Tok::RPar => solde -= 1,
            _ => {}
        }
        if solde < 0 {
            return Err("Invalid expression: Mismatched parentheses.".into());
        }
    }
    if solde != 0 {
        return Err("Invalid expression: Mismatched parentheses.".into());
    }

    Ok(())
}
