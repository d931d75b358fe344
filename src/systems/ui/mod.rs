use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin}; // fps
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};

use crate::systems::street::{LayerVisibility, Seed, StreetParams};
use crate::systems::street::net::boundary::{Boundary, Spacing};
use crate::systems::street::network::StreetNetwork;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        assert!(app.is_plugin_added::<EguiPlugin>());
        app
            .add_systems(Update, key_input)
            .add_systems(EguiPrimaryContextPass, (ui_main, fps)); // UI rendering here
    }
}

fn key_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut layers: ResMut<LayerVisibility>,
) {
    if keyboard_input.just_pressed(KeyCode::Tab) {
        layers.nodes = !layers.nodes;
    }
}

// read-only summary of the generated network, plus layer toggles
fn ui_main(
    mut contexts: EguiContexts,
    seed: Res<Seed>,
    params: Res<StreetParams>,
    network: Res<StreetNetwork>,
    mut layers: ResMut<LayerVisibility>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("network_panel")
        .default_width(220.0)
        .resizable(true)
        .show(ctx, |ui| {
            // camera
            ui.label("Camera: ");
            ui.label("WASD - Move");
            ui.label("Scroll - Zoom");
            ui.label("MMB - Rotate");

            ui.separator();

            ui.label("Layer Visibility:");
            ui.checkbox(&mut layers.boundary, "Boundary");
            ui.checkbox(&mut layers.edges, "Streets");
            ui.checkbox(&mut layers.nodes, "Nodes")
                .on_hover_text("TAB to toggle");

            ui.separator();

            egui::CollapsingHeader::new("Parameters")
                .default_open(true)
                .show(ui, |ui| {
                    ui.label(format!("Seed: {}", seed.0));
                    match params.boundary {
                        Boundary::Circle { radius, .. } => ui.label(format!("Boundary: circle r = {radius:.0}")),
                        Boundary::Ellipse { radii, .. } => {
                            ui.label(format!("Boundary: ellipse {:.0} x {:.0}", radii.x, radii.y))
                        }
                    };
                    match params.spacing {
                        Spacing::Fixed(_) => ui.label(format!("Spacing: {:.1}", network.report.spacing)),
                        Spacing::TargetCount(count) => {
                            ui.label(format!("Spacing: {:.1} (~{count} nodes)", network.report.spacing))
                        }
                    };
                    ui.label(format!("Candidates per node: {}", params.fan_out));
                    ui.label(format!("Max degree: {}", params.rules.max_degree));
                    ui.label(format!("Parallel threshold: {:.2}", params.rules.parallel_threshold));
                });

            egui::CollapsingHeader::new("Generation")
                .default_open(true)
                .show(ui, |ui| {
                    let report = &network.report;
                    egui::Grid::new("report_grid").striped(true).show(ui, |ui| {
                        for (label, value) in [
                            ("Sampled nodes", report.sampled_nodes),
                            ("Street edges", report.street_edges),
                            ("Hull edges", report.hull_edges),
                            ("Pruned nodes", report.pruned_nodes),
                            ("Final nodes", report.final_nodes),
                            ("Final edges", report.final_edges),
                        ] {
                            ui.label(label);
                            ui.label(value.to_string());
                            ui.end_row();
                        }
                    });
                });
        });
}

fn fps(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Area::new(egui::Id::new("fps_counter"))
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-10.0, 10.0))
            .show(ctx, |ui| {
                if let Some(fps) = diagnostics
                    .get(&FrameTimeDiagnosticsPlugin::FPS)
                    .and_then(|d| d.smoothed())
                {
                    ui.label(egui::RichText::new(format!("{fps:.0}"))
                        .size(26.0)
                        .color(egui::Color32::WHITE));
                }
            });
    }
}
