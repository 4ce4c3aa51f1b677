// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
// - Persister l'historique via eframe::Storage (équivalent localStorage)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Clé de persistance de l'historique (une entrée par ligne).
pub const CLE_HISTORIQUE: &str = "historique";

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Thème appliqué à chaque frame : la bascule vit dans l'état.
        ctx.set_visuals(if self.theme_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = remise à zéro (comme la touche "AC").
        //
        // Enter est géré dans vue.rs, quand le champ a le focus :
        // pas de double déclenchement côté web/mobile.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.effacer_tout();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(CLE_HISTORIQUE, self.historique.join("\n"));
    }
}
