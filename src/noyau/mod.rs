//! Noyau de calcul scientifique
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation + fusion du moins unaire
//! - valider.rs : contrôles structurels (tête/queue, adjacence, parenthèses)
//! - rpn.rs     : shunting-yard (infixe -> postfixe)
//! - eval.rs    : évaluation RPN + factorielle + pipeline complet
//!
//! Le noyau est pur : aucun état entre deux appels, le mode degrés/radians
//! est passé en paramètre à chaque évaluation.

pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod valider;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_expression, factorielle};
