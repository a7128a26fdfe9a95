// ui.rs - Controls, rule editor and board rendering for MatrixLife

use eframe::egui;
use egui::{Color32, Rect, RichText, Vec2};
use wolfram_life::{presets, Mode, Speed};

use crate::{MatrixLife, Zoom};

impl eframe::App for MatrixLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("MODE:");
                egui::ComboBox::from_id_source("mode_selector")
                    .selected_text(self.controls.mode.name())
                    .show_ui(ui, |ui| {
                        for mode in Mode::ALL {
                            ui.selectable_value(&mut self.controls.mode, mode, mode.name());
                        }
                    });

                ui.label("PRESET:");
                egui::ComboBox::from_id_source("preset_selector")
                    .selected_text(presets::label(self.controls.rule))
                    .show_ui(ui, |ui| {
                        for preset in presets::PRESETS {
                            ui.selectable_value(&mut self.controls.rule, preset.rule, preset.name);
                        }
                    });

                ui.label("ZOOM:");
                egui::ComboBox::from_id_source("zoom_selector")
                    .selected_text(self.zoom.name())
                    .show_ui(ui, |ui| {
                        for zoom in Zoom::ALL {
                            ui.selectable_value(&mut self.zoom, zoom, zoom.name());
                        }
                    });

                ui.label("SPEED:");
                egui::ComboBox::from_id_source("speed_selector")
                    .selected_text(self.controls.speed.name())
                    .show_ui(ui, |ui| {
                        for speed in Speed::ALL {
                            ui.selectable_value(&mut self.controls.speed, speed, speed.name());
                        }
                    });

                let button_text = if self.controls.paused { "PLAY" } else { "PAUSE" };
                if ui.button(button_text).clicked() {
                    self.toggle_paused();
                }

                ui.separator();
                ui.label(format!("Generation: {}", self.simulation().generation()));
            });

            // One button per pattern; clicking flips that pattern's output
            ui.horizontal(|ui| {
                ui.label("RULE:");
                let mut clicked = None;
                for entry in self.controls.pattern_entries() {
                    let marker = if entry.output.is_alive() { "■" } else { "□" };
                    let fill = if entry.output.is_alive() {
                        Color32::from_rgb(0, 90, 0)
                    } else {
                        Color32::BLACK
                    };
                    let text = RichText::new(format!("{}\n{}", entry.label(), marker)).monospace();
                    if ui.add(egui::Button::new(text).fill(fill)).clicked() {
                        clicked = Some(entry.index);
                    }
                }
                if let Some(pattern) = clicked {
                    self.toggle_pattern(pattern);
                }
            });
        });

        // Mode and preset pickers write straight into the controls
        self.apply_controls();

        egui::TopBottomPanel::bottom("stats").show(ctx, |ui| {
            let grid = self.simulation().grid();
            let total = grid.width() * grid.height();
            let live_cells = grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| self.draw_board(ui));
            });

        // Keep stepping and keep the glow moving
        ctx.request_repaint();
    }
}

impl MatrixLife {
    fn draw_board(&self, ui: &mut egui::Ui) {
        let grid = self.simulation().grid();
        let box_size = self.zoom.factor();
        let total_size = Vec2::new(grid.width() as f32, grid.height() as f32) * box_size;

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
        let start_pos = response.rect.min;
        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, self.dead_color);

        let time = self.started.elapsed().as_secs_f32();
        let cell_size = Vec2::splat((box_size - 0.2).max(0.8));
        for (y, row) in grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if !cell.is_alive() {
                    continue;
                }
                let pos = start_pos + Vec2::new(x as f32, y as f32) * box_size;
                painter.rect_filled(
                    Rect::from_min_size(pos, cell_size),
                    0.0,
                    self.glow(time, x, y),
                );
            }
        }
    }

    /// Live-cell color pulsing with time and position.
    fn glow(&self, time: f32, x: usize, y: usize) -> Color32 {
        let intensity = 0.7 + 0.3 * (time / 0.3 + x as f32 * 0.1 + y as f32 * 0.1).sin();
        let [r, g, b, _] = self.live_color.to_array();
        Color32::from_rgb(
            (r as f32 * intensity) as u8,
            (g as f32 * intensity) as u8,
            (b as f32 * intensity) as u8,
        )
    }
}
