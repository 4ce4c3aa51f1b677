//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (saisie, dernier résultat,
//! modes, historique, erreur) et offrir les actions des touches sans
//! logique d'affichage. Toute évaluation passe par le noyau, avec le mode
//! degrés/radians passé explicitement : aucun état global côté calcul.

/// Nombre maximum d'entrées conservées dans l'historique.
const HISTORIQUE_MAX: usize = 100;

/// Opérateurs binaires tels qu'ils apparaissent dans la saisie.
const OPERATEURS_SAISIE: [char; 5] = ['+', '-', '*', '/', '%'];

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- saisie utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub erreur: String,

    // --- modes ---
    pub mode_degres: bool,  // vrai = degrés (défaut), faux = radians
    pub mode_seconde: bool, // touches alternatives (sin⁻¹, x², 10^, e^)
    pub theme_sombre: bool,

    // --- historique ---
    pub historique: Vec<String>,
    pub historique_visible: bool,

    // --- enchaînement du '=' ---
    dernier_resultat: Option<f64>,
    derniere_expression: Option<String>,
    egal_presse: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à la saisie après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            erreur: String::new(),
            mode_degres: true,
            mode_seconde: false,
            theme_sombre: false,
            historique: Vec::new(),
            historique_visible: false,
            dernier_resultat: None,
            derniere_expression: None,
            egal_presse: false,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Touche de saisie ordinaire (chiffre, opérateur, parenthèse…).
    ///
    /// Deux opérateurs binaires d'affilée ne s'empilent pas : le nouveau
    /// remplace l'ancien en fin de saisie.
    pub fn saisir(&mut self, valeur: &str) {
        if self.egal_presse {
            self.egal_presse = false;
        }

        let nouveau_op = est_operateur_saisie(valeur);
        let dernier_op = self
            .entree
            .chars()
            .last()
            .is_some_and(|c| OPERATEURS_SAISIE.contains(&c));

        if nouveau_op && dernier_op {
            self.entree.pop();
        }
        self.entree.push_str(valeur);
        self.focus_entree = true;
    }

    /// AC : remise à zéro (saisie + enchaînement + erreur).
    pub fn effacer_tout(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.dernier_resultat = None;
        self.derniere_expression = None;
        self.egal_presse = false;
        self.focus_entree = true;
    }

    /// DEL : retire le dernier motif de la saisie.
    ///
    /// Les motifs multi-caractères insérés par les touches ("sin⁻¹(",
    /// "10^", "π", …) partent d'un coup, sinon un seul caractère.
    pub fn effacer_dernier(&mut self) {
        const MOTIFS: [&str; 13] = [
            "sin⁻¹(", "cos⁻¹(", "tan⁻¹(", "sin(", "cos(", "tan(", "log(", "abs(", "ln(", "10^",
            "e^", "√(", "π",
        ];

        for motif in MOTIFS {
            if self.entree.ends_with(motif) {
                self.entree.truncate(self.entree.len() - motif.len());
                self.focus_entree = true;
                return;
            }
        }

        self.entree.pop();
        self.focus_entree = true;
    }

    /* ------------------------ '=' et enchaînement ------------------------ */

    /// '=' : évalue la saisie via le noyau.
    ///
    /// - Ré-appuyer sur '=' ré-évalue la dernière expression.
    /// - Une saisie qui commence par un opérateur binaire (sauf '-') est
    ///   préfixée par le dernier résultat : "7", "=", "+3" enchaîne 7+3.
    pub fn egal(&mut self) {
        let repetition = self.egal_presse;

        let mut expr = self.entree.clone();
        if repetition {
            if let Some(d) = &self.derniere_expression {
                expr = d.clone();
            }
        } else {
            self.derniere_expression = Some(expr.clone());
        }

        if let Some(r) = self.dernier_resultat {
            if expr.starts_with(['+', '*', '/', '%']) {
                expr = format!("{}{}", formater_resultat(r), expr);
            }
        }

        match crate::noyau::eval_expression(&expr, self.mode_degres) {
            Ok(v) => {
                let fraiche =
                    !repetition || self.derniere_expression.as_deref() != Some(expr.as_str());
                self.dernier_resultat = Some(v);
                self.erreur.clear();

                let affichage = formater_resultat(v);
                if fraiche {
                    self.ajouter_historique(&expr, &affichage);
                }
                self.entree = affichage;
            }
            Err(msg) => self.set_erreur(msg),
        }

        self.egal_presse = true;
        self.focus_entree = true;
    }

    /* ------------------------ Modes ------------------------ */

    pub fn basculer_mode_angle(&mut self) {
        self.mode_degres = !self.mode_degres;
        self.focus_entree = true;
    }

    pub fn basculer_seconde(&mut self) {
        self.mode_seconde = !self.mode_seconde;
        self.focus_entree = true;
    }

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
    }

    /* ------------------------ Touches scientifiques ------------------------ */

    /// sin/cos/tan : insère la forme directe ou inverse selon le mode 2nd.
    pub fn touche_trig(&mut self, nom: &str) {
        let motif = if self.mode_seconde {
            format!("{nom}⁻¹(")
        } else {
            format!("{nom}(")
        };
        self.saisir(&motif);
    }

    pub fn touche_log(&mut self) {
        if self.mode_seconde {
            self.saisir("10^");
        } else {
            self.saisir("log(");
        }
    }

    pub fn touche_ln(&mut self) {
        if self.mode_seconde {
            self.saisir("e^");
        } else {
            self.saisir("ln(");
        }
    }

    /// √ / x² : applique directement si la saisie est un nombre simple,
    /// sinon insère le motif.
    pub fn touche_racine(&mut self) {
        if self.mode_seconde {
            let v: f64 = self.entree.parse().unwrap_or(0.0);
            self.entree = formater_resultat(v * v);
            self.focus_entree = true;
        } else if let Ok(v) = self.entree.parse::<f64>() {
            self.entree = formater_resultat(v.sqrt());
            self.focus_entree = true;
        } else {
            self.saisir("√(");
        }
    }

    pub fn touche_puissance(&mut self) {
        if self.entree.is_empty() {
            self.saisir("0^");
        } else {
            self.saisir("^");
        }
    }

    pub fn touche_factorielle(&mut self) {
        if self.entree.is_empty() {
            self.saisir("0!");
        } else {
            self.saisir("!");
        }
    }

    /// 1/x : inverse un nombre simple, sinon ouvre "1/(".
    pub fn touche_inverse(&mut self) {
        if let Ok(v) = self.entree.parse::<f64>() {
            self.entree = formater_resultat(1.0 / v);
            self.focus_entree = true;
        } else {
            self.saisir("1/(");
        }
    }

    /// abs : enveloppe la saisie courante, ou ouvre "abs(".
    pub fn touche_abs(&mut self) {
        if self.entree.is_empty() {
            self.saisir("abs(");
        } else {
            self.entree = format!("abs({})", self.entree);
            self.focus_entree = true;
        }
    }

    /* ------------------------ Historique ------------------------ */

    fn ajouter_historique(&mut self, expression: &str, resultat: &str) {
        self.historique.push(format!("{expression} = {resultat}"));
        if self.historique.len() > HISTORIQUE_MAX {
            let trop = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..trop);
        }
    }

    pub fn vider_historique(&mut self) {
        self.historique.clear();
    }

    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
    }

    /// Recharge l'historique persisté (une entrée par ligne).
    pub fn charger_historique(&mut self, brut: &str) {
        self.historique = brut
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
    }

    /* ------------------------ Erreur ------------------------ */

    /// Dépose une erreur. La saisie est conservée pour correction.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }
}

fn est_operateur_saisie(valeur: &str) -> bool {
    let mut chars = valeur.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if OPERATEURS_SAISIE.contains(&c)
    )
}

/// Affichage d'un résultat : entier sans décimales, sinon 4 décimales.
pub fn formater_resultat(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v}")
    } else {
        format!("{v:.4}")
    }
}
