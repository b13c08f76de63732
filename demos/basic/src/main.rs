use eframe::{run_native, App, CreationContext};
use egui::Context;
use egui_mission_panel::{toggle, MissionPanel, SettingsStyle};

const MISSION_TEXT: &str = "We believe great software is built in small, honest steps: \
understand the problem, ship the simplest thing that works, and keep improving it \
together with the people who use it.";

pub struct BasicApp {
    style: SettingsStyle,
}

impl BasicApp {
    fn new(_: &CreationContext<'_>) -> Self {
        Self {
            style: SettingsStyle {
                control_label: "Our mission".to_string(),
            },
        }
    }
}

impl App for BasicApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // External wiring: flips the panel without going through the control.
                if ui.button("Toggle mission panel").clicked() {
                    toggle(ui, None);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Acme Co.");
            ui.label("Click the control below to read about what drives us.");
            ui.add_space(10.);

            ui.add(
                MissionPanel::new(|ui| {
                    ui.heading("Our mission");
                    ui.label(MISSION_TEXT);
                })
                .with_styles(&self.style),
            );
        });
    }
}

fn main() {
    let native_options = eframe::NativeOptions::default();
    run_native(
        "egui_mission_panel_basic_demo",
        native_options,
        Box::new(|cc| Ok(Box::new(BasicApp::new(cc)))),
    )
    .unwrap();
}
