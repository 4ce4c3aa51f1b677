// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Mode 2nd : les touches scientifiques changent d'étiquette
//   (sin -> sin⁻¹, √ -> x², log -> 10^, ln -> e^)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                self.ui_touches_scientifiques(ui);

                ui.add_space(8.0);
                self.ui_pave_numerique(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }

                ui.add_space(8.0);
                ui.separator();
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+2)*2, sin(90), √(144)+9")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus au champ
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.egal();
        }

        ui.add_space(6.0);

        // Barre de modes : AC / DEL / deg-rad / 2nd / thème / historique
        ui.horizontal(|ui| {
            if self
                .bouton(ui, "AC", "Remise à zéro (saisie + enchaînement)")
                .clicked()
            {
                self.effacer_tout();
            }
            if self
                .bouton(ui, "DEL", "Efface le dernier motif")
                .clicked()
            {
                self.effacer_dernier();
            }

            ui.separator();

            let etiquette_angle = if self.mode_degres { "deg" } else { "rad" };
            if self
                .bouton(ui, etiquette_angle, "Bascule degrés / radians")
                .clicked()
            {
                self.basculer_mode_angle();
            }

            if ui
                .selectable_label(self.mode_seconde, "2nd")
                .on_hover_text("Touches alternatives (sin⁻¹, x², 10^, e^)")
                .clicked()
            {
                self.basculer_seconde();
            }

            ui.separator();

            if ui.selectable_label(self.theme_sombre, "sombre").clicked() {
                self.basculer_theme();
            }
            if ui
                .selectable_label(self.historique_visible, "historique")
                .clicked()
            {
                self.basculer_historique();
            }
        });
    }

    fn ui_touches_scientifiques(&mut self, ui: &mut egui::Ui) {
        let seconde = self.mode_seconde;

        ui.horizontal_wrapped(|ui| {
            let trig = if seconde {
                [("sin⁻¹", "sin"), ("cos⁻¹", "cos"), ("tan⁻¹", "tan")]
            } else {
                [("sin", "sin"), ("cos", "cos"), ("tan", "tan")]
            };
            for (etiquette, nom) in trig {
                if self.bouton(ui, etiquette, "").clicked() {
                    self.touche_trig(nom);
                }
            }

            ui.separator();

            if self
                .bouton(ui, if seconde { "10^" } else { "log" }, "")
                .clicked()
            {
                self.touche_log();
            }
            if self
                .bouton(ui, if seconde { "e^" } else { "ln" }, "")
                .clicked()
            {
                self.touche_ln();
            }
            if self
                .bouton(ui, if seconde { "x²" } else { "√" }, "")
                .clicked()
            {
                self.touche_racine();
            }
        });

        ui.horizontal_wrapped(|ui| {
            if self.bouton(ui, "π", "").clicked() {
                self.saisir("π");
            }
            if self.bouton(ui, "e", "").clicked() {
                self.saisir("e");
            }
            if self.bouton(ui, "x^y", "").clicked() {
                self.touche_puissance();
            }
            if self.bouton(ui, "!", "").clicked() {
                self.touche_factorielle();
            }
            if self.bouton(ui, "1/x", "").clicked() {
                self.touche_inverse();
            }
            if self.bouton(ui, "abs", "").clicked() {
                self.touche_abs();
            }
            if self.bouton(ui, "%", "").clicked() {
                self.saisir("%");
            }
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_saisie(ui, "7");
                self.bouton_saisie(ui, "8");
                self.bouton_saisie(ui, "9");
                self.bouton_saisie(ui, "/");
                ui.end_row();

                self.bouton_saisie(ui, "4");
                self.bouton_saisie(ui, "5");
                self.bouton_saisie(ui, "6");
                self.bouton_saisie(ui, "*");
                ui.end_row();

                self.bouton_saisie(ui, "1");
                self.bouton_saisie(ui, "2");
                self.bouton_saisie(ui, "3");
                self.bouton_saisie(ui, "-");
                ui.end_row();

                self.bouton_saisie(ui, "0");
                self.bouton_saisie(ui, ".");
                self.bouton_saisie(ui, "(");
                self.bouton_saisie(ui, "+");
                ui.end_row();

                ui.label("");
                ui.label("");
                self.bouton_saisie(ui, ")");
                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    self.egal();
                }
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        if !self.historique_visible {
            return;
        }

        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("(vide)");
                } else {
                    // du plus récent au plus ancien
                    for ligne in self.historique.iter().rev() {
                        ui.monospace(ligne);
                    }
                }

                ui.add_space(4.0);
                if ui.button("Effacer l'historique").clicked() {
                    self.vider_historique();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, etiquette: &str, tip: &str) -> egui::Response {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(etiquette));
        if tip.is_empty() {
            resp
        } else {
            resp.on_hover_text(tip)
        }
    }

    fn bouton_saisie(&mut self, ui: &mut egui::Ui, valeur: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(valeur));
        if resp.clicked() {
            self.saisir(valeur);
        }
    }
}
