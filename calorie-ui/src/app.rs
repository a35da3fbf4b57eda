use calorie_core::{Gender, IntensityLevel, estimate};
use egui::Context;
use tracing::info;

use crate::screens::CalorieFormScreen;
use crate::utils::parse_weight_kg;

/// Form state for the calorie estimate screen.
///
/// The weight field is kept as the raw text the user typed; it is parsed
/// only when the calculate action fires.
#[derive(Debug, Clone, Default)]
pub struct EstimateForm {
    pub weight: String,
    pub gender: Gender,
    pub intensity: IntensityLevel,
}

impl EstimateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current weight in whole kilograms; unparseable text is 0.
    pub fn weight_kg(&self) -> i32 {
        parse_weight_kg(&self.weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Main application state.
pub struct CalorieApp {
    pub form: EstimateForm,
    /// Last computed estimate in kilocalories. Stays 0 until the first
    /// calculate action and is only updated by [`CalorieApp::calculate`].
    pub result: i64,
    pub status_message: Option<(String, MessageType)>,
}

impl Default for CalorieApp {
    fn default() -> Self {
        Self {
            form: EstimateForm::new(),
            result: 0,
            status_message: None,
        }
    }
}

impl CalorieApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn show_message(&mut self, msg: impl Into<String>, msg_type: MessageType) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    /// Recomputes the estimate from the current form values.
    ///
    /// This is the only place the displayed result changes; editing the
    /// form alone leaves it untouched.
    pub fn calculate(&mut self) {
        let weight_kg = self.form.weight_kg();
        self.result = estimate(
            self.form.gender,
            weight_kg,
            self.form.intensity.multiplier(),
        );

        info!(
            gender = self.form.gender.label(),
            weight_kg,
            intensity = self.form.intensity.label(),
            calories = self.result,
            "calculated estimate"
        );
        self.show_message("Calculation complete", MessageType::Success);
    }

    /// Resets the form and result to their defaults.
    pub fn reset(&mut self) {
        self.form = EstimateForm::new();
        self.result = 0;
        self.clear_message();
    }
}

impl eframe::App for CalorieApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Estimate").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, msg_type)) = &self.status_message {
                    let color = match msg_type {
                        MessageType::Info => egui::Color32::GRAY,
                        MessageType::Success => egui::Color32::GREEN,
                        MessageType::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, msg);

                    if ui.small_button("✖").clicked() {
                        self.clear_message();
                    }
                }
            });
        });

        // Main content area: the single estimate screen
        egui::CentralPanel::default().show(ctx, |ui| CalorieFormScreen::show(self, ui));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn result_defaults_to_zero() {
        let app = CalorieApp::default();

        assert_eq!(app.result, 0);
    }

    #[test]
    fn form_defaults_to_male_light() {
        let form = EstimateForm::new();

        assert_eq!(form.gender, Gender::Male);
        assert_eq!(form.intensity, IntensityLevel::Light);
        assert_eq!(form.weight_kg(), 0);
    }

    #[test]
    fn calculate_uses_current_form_values() {
        let mut app = CalorieApp::default();
        app.form.weight = "70".to_string();

        app.calculate();

        // (879 + 10.2 * 70) * 1.3 = 2070.9 -> 2070
        assert_eq!(app.result, 2070);
    }

    #[test]
    fn unparseable_weight_is_treated_as_zero() {
        let mut app = CalorieApp::default();
        app.form.weight = "seventy".to_string();

        app.calculate();

        // 879 * 1.3 = 1142.7 -> 1142
        assert_eq!(app.result, 1142);
    }

    #[test]
    fn result_does_not_change_until_calculate_fires() {
        let mut app = CalorieApp::default();
        app.form.weight = "70".to_string();
        app.calculate();
        assert_eq!(app.result, 2070);

        // Editing every input leaves the displayed result untouched.
        app.form.weight = "90".to_string();
        app.form.gender = Gender::Female;
        app.form.intensity = IntensityLevel::VeryHard;
        assert_eq!(app.result, 2070);

        app.calculate();
        // (795 + 7.18 * 90) * 2.2 = 1441.2 * 2.2 = 3170.64 -> 3170
        assert_eq!(app.result, 3170);
    }

    #[test]
    fn calculate_sets_success_status() {
        let mut app = CalorieApp::default();

        app.calculate();

        assert_eq!(
            app.status_message,
            Some(("Calculation complete".to_string(), MessageType::Success))
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = CalorieApp::default();
        app.form.weight = "80".to_string();
        app.form.gender = Gender::Female;
        app.calculate();

        app.reset();

        assert_eq!(app.result, 0);
        assert_eq!(app.form.gender, Gender::Male);
        assert_eq!(app.form.weight, "");
        assert_eq!(app.status_message, None);
    }
}
