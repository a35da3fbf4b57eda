use calorie_core::{Gender, IntensityLevel};
use egui::Ui;

use crate::app::CalorieApp;

pub struct CalorieFormScreen;

impl CalorieFormScreen {
    /// Consistent group width for the form sections
    const GROUP_WIDTH: f32 = 360.0;
    /// Label column width for alignment
    const LABEL_WIDTH: f32 = 130.0;
    /// Weight input field width
    const INPUT_WIDTH: f32 = 100.0;

    pub fn show(app: &mut CalorieApp, ui: &mut Ui) {
        ui.heading("Calories");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let group_width = ui.available_width().min(Self::GROUP_WIDTH);

            // Body Section
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Body");
                    ui.add_space(5.0);

                    egui::Grid::new("body_grid")
                        .num_columns(2)
                        .spacing([10.0, 8.0])
                        .show(ui, |ui| {
                            // Weight text field
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.set_min_width(Self::LABEL_WIDTH);
                                    ui.label(egui::RichText::new("Weight (kg):").strong());
                                },
                            );
                            ui.add(
                                egui::TextEdit::singleline(&mut app.form.weight)
                                    .desired_width(Self::INPUT_WIDTH)
                                    .hint_text("kg"),
                            );
                            ui.end_row();

                            // Gender radio buttons
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.set_min_width(Self::LABEL_WIDTH);
                                    ui.label(egui::RichText::new("Gender:").strong());
                                },
                            );
                            ui.horizontal(|ui| {
                                for gender in Gender::all() {
                                    ui.radio_value(
                                        &mut app.form.gender,
                                        *gender,
                                        gender.label(),
                                    );
                                }
                            });
                            ui.end_row();
                        });
                });
            });

            ui.add_space(10.0);

            // Activity Section
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Activity");
                    ui.add_space(5.0);

                    egui::Grid::new("activity_grid")
                        .num_columns(2)
                        .spacing([10.0, 8.0])
                        .show(ui, |ui| {
                            // Intensity dropdown
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.set_min_width(Self::LABEL_WIDTH);
                                    ui.label(egui::RichText::new("Intensity:").strong());
                                },
                            );
                            egui::ComboBox::from_id_salt("intensity")
                                .width(140.0)
                                .selected_text(app.form.intensity.label())
                                .show_ui(ui, |ui| {
                                    for level in IntensityLevel::all() {
                                        ui.selectable_value(
                                            &mut app.form.intensity,
                                            *level,
                                            level.label(),
                                        );
                                    }
                                });
                            ui.end_row();
                        });
                });
            });

            ui.add_space(20.0);

            // Action Buttons
            ui.horizontal(|ui| {
                if ui.button("CALCULATE").clicked() {
                    app.calculate();
                }

                if ui.button("Clear Form").clicked() {
                    app.reset();
                }
            });

            // Result display; shows 0 kcal until the first calculation.
            ui.add_space(20.0);
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading(format!("Calories: {} kcal", app.result));
                });
            });

            ui.add_space(20.0);
        });
    }
}
