//! TripTactix desktop client: a trip-planning form wired to the itinerary
//! backend, with export and map-search side actions.

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::PlannerApp;

#[derive(Debug, Parser)]
#[command(about = "Desktop client for the TripTactix itinerary backend")]
struct Args {
    /// Base URL of the planner backend.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(args.server_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TripTactix")
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TripTactix",
        options,
        Box::new(move |_cc| Ok(Box::new(PlannerApp::new(cmd_tx, ui_rx, &args.server_url)))),
    )
}
