// ui.rs - Controls, board painting and the catalogue legend

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Vec2};

use crate::{GameOfLife, GameOfLifeInterface, to_color32};
use conway::patterns;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.randomize();
                }

                if ui.button("⟳ Reload").clicked() {
                    self.reload_seed();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }
            });

            ui.horizontal_wrapped(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.update_interval.as_secs_f32();
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval = Duration::from_secs_f32(1.0 / speed);
                }

                ui.separator();

                ui.label("Cell:");
                ui.add(egui::Slider::new(&mut self.cell_size, 2.0..=24.0).suffix(" px"));

                ui.separator();

                ui.label("Background:");
                ui.color_edit_button_srgba(&mut self.dead_color);
                ui.checkbox(&mut self.pause_on_repeat, "Pause on repeat");
            });

            if let Some(err) = self.load_error.clone() {
                ui.horizontal(|ui| {
                    ui.colored_label(Color32::RED, err);
                    if ui.small_button("✖").clicked() {
                        self.load_error = None;
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let sim = self.sim();
            let (live, total) = (sim.population(), sim.board().len().max(1));

            ui.horizontal_wrapped(|ui| {
                ui.label(format!("Generation: {}", sim.generation()));
                ui.label(format!("Live cells: {}", live));
                ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
                ui.label(format!("Board: {}x{}", sim.board().width(), sim.board().height()));
            });

            ui.horizontal_wrapped(|ui| {
                let catalogue = sim.catalogue();
                for entry in catalogue.entries() {
                    swatch(ui, to_color32(entry.color));
                    ui.label(entry.pattern.name());
                }
                swatch(ui, to_color32(catalogue.unmatched_color()));
                ui.label("Other");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let cols = (available.x / self.cell_size).floor() as usize;
            let rows = (available.y / self.cell_size).floor() as usize;
            self.handle_resize(cols, rows);

            let sim = self.sim();
            let board = sim.board();
            let size = Vec2::new(
                board.width() as f32 * self.cell_size,
                board.height() as f32 * self.cell_size,
            );
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            let overlay = sim.overlay();
            let catalogue = sim.catalogue();
            for y in 0..board.height() {
                for (x, _) in board.row(y).iter().enumerate().filter(|(_, alive)| **alive) {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(x as f32, y as f32) * self.cell_size,
                        Vec2::splat(self.cell_size),
                    );
                    let color = to_color32(catalogue.color_for_tag(overlay.tag(x, y)));
                    painter.rect_filled(rect, 0.0, color);
                }
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let cell = (pos - origin) / self.cell_size;
                    if cell.x >= 0.0 && cell.y >= 0.0 {
                        self.toggle_cell(cell.x as usize, cell.y as usize);
                    }
                }
            }
        });

        if self.is_running {
            ctx.request_repaint_after(
                self.update_interval.saturating_sub(self.last_update.elapsed()),
            );
        }
    }
}

fn swatch(ui: &mut egui::Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.painter()
        .rect_stroke(rect, 2.0, egui::Stroke::new(1.0, Color32::GRAY));
}
