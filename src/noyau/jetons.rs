// src/noyau/jetons.rs

/// Fonctions unaires et opérateurs postfixés reconnus par le lexique.
///
/// `DixPuiss` (10^), `ExpE` (e^), `Carre` (x²) et `Fact` (!) s'écrivent
/// avant ou après leur opérande dans la saisie, mais tous passent par la
/// pile d'opérateurs comme une fonction ordinaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    ArcSin,
    ArcCos,
    ArcTan,
    Log,
    DixPuiss,
    Ln,
    ExpE,
    Carre,
    Racine,
    Fact,
    Abs,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret, // ^

    LPar,
    RPar,

    Func(Fonction),

    // Constantes symboliques : résolues seulement à l'évaluation.
    Pi,
    Euler,
}

/// Vrai pour les six opérateurs binaires (+ - * / % ^).
pub fn est_operateur(t: &Tok) -> bool {
    matches!(
        t,
        Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret
    )
}

/// Mots-clés nommés, du plus long au plus court.
/// L'ordre est significatif : à une position donnée on prend le premier
/// qui correspond, donc "sin⁻¹" avant "sin", "e^" avant "e", "10^" avant
/// que la lecture de nombre ne voie le "10".
const MOTS_CLES: [(&str, Tok); 16] = [
    ("sin⁻¹", Tok::Func(Fonction::ArcSin)),
    ("cos⁻¹", Tok::Func(Fonction::ArcCos)),
    ("tan⁻¹", Tok::Func(Fonction::ArcTan)),
    ("10^", Tok::Func(Fonction::DixPuiss)),
    ("sin", Tok::Func(Fonction::Sin)),
    ("cos", Tok::Func(Fonction::Cos)),
    ("tan", Tok::Func(Fonction::Tan)),
    ("log", Tok::Func(Fonction::Log)),
    ("abs", Tok::Func(Fonction::Abs)),
    ("e^", Tok::Func(Fonction::ExpE)),
    ("x²", Tok::Func(Fonction::Carre)),
    ("ln", Tok::Func(Fonction::Ln)),
    ("√", Tok::Func(Fonction::Racine)),
    ("!", Tok::Func(Fonction::Fact)),
    ("π", Tok::Pi),
    ("e", Tok::Euler),
];

fn mot_cle(chars: &[char], i: usize) -> Option<(Tok, usize)> {
    for (mot, tok) in MOTS_CLES {
        let long = mot.chars().count();
        if i + long <= chars.len() && mot.chars().enumerate().all(|(k, c)| chars[i + k] == c) {
            return Some((tok, long));
        }
    }
    None
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, 2.) — pas d'exposant, pas de signe
/// - opérateurs + - * / % ^
/// - parenthèses ( )
/// - fonctions nommées : sin cos tan sin⁻¹ cos⁻¹ tan⁻¹ log 10^ ln e^ x² √ ! abs
/// - constantes π et e
///
/// Les caractères hors lexique (espaces compris) sont ignorés ; l'appel
/// échoue seulement si AUCUN jeton n'a pu être reconnu.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        // Mots-clés nommés d'abord (leftmost-longest).
        if let Some((tok, long)) = mot_cle(&chars, i) {
            out.push(tok);
            i += long;
            continue;
        }

        match chars[i] {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : chiffres, puis éventuellement '.' et d'autres chiffres.
        if chars[i].is_ascii_digit() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[debut..i].iter().collect();
            let x = txt
                .parse::<f64>()
                .map_err(|_| "Invalid expression: Empty input or invalid characters.".to_string())?;
            out.push(Tok::Num(x));
            continue;
        }

        // Hors lexique : ignoré (comportement historique du matcher).
        i += 1;
    }

    if out.is_empty() {
        return Err("Invalid expression: Empty input or invalid characters.".into());
    }

    Ok(out)
}

/// Fusionne un '-' contextuel avec le nombre qui le suit.
///
/// Le '-' est contextuel s'il est en tête, juste après '(' ou juste après
/// un autre opérateur (contexte jugé sur la suite BRUTE, avant fusion).
/// Si le jeton suivant n'est pas un nombre (ex: "-sin(…)", "-(…)"), le '-'
/// est conservé tel quel : to_rpn le traitera en négation (0 - x).
pub fn fusion_moins_unaire(jetons: Vec<Tok>) -> Vec<Tok> {
    let mut out = Vec::with_capacity(jetons.len());
    let mut i: usize = 0;

    while i < jetons.len() {
        let contexte_unaire =
            i == 0 || matches!(jetons[i - 1], Tok::LPar) || est_operateur(&jetons[i - 1]);

        if matches!(jetons[i], Tok::Minus) && contexte_unaire {
            if let Some(Tok::Num(x)) = jetons.get(i + 1) {
                out.push(Tok::Num(-x));
                i += 2;
                continue;
            }
        }

        out.push(jetons[i]);
        i += 1;
    }

    out
}
