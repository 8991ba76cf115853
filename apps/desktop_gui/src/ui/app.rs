//! Application shell: trip form, generation state, summary panel, and the
//! export/map side actions.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use planner_client::maps_search_url;
use shared::{domain::inclusive_day_count, protocol::GenerateTripRequest};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{classify_generation_failure, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

pub const NO_SUMMARY_TEXT: &str = "No summary generated.";
pub const GENERATION_ERROR_TEXT: &str = "Error generating itinerary. Please try again.";
pub const MAP_LOOKUP_HINT: &str = "Please generate a plan first.";

const INTEREST_CHOICES: [&str; 8] = [
    "Adventure",
    "Culture",
    "Food",
    "History",
    "Nature",
    "Nightlife",
    "Relaxation",
    "Shopping",
];

/// Trip form field state. All values are kept as the raw text that gets
/// submitted; the backend owns numeric coercion.
pub struct TripFormState {
    pub destination: String,
    pub from_date: String,
    pub to_date: String,
    pub days: String,
    pub budget: String,
    pub interests: Vec<(String, bool)>,
}

impl TripFormState {
    fn new() -> Self {
        Self {
            destination: String::new(),
            from_date: String::new(),
            to_date: String::new(),
            days: String::new(),
            budget: String::new(),
            interests: INTEREST_CHOICES
                .iter()
                .map(|label| (label.to_string(), false))
                .collect(),
        }
    }

    /// Snapshot of the form as a wire request; interests keep their
    /// on-screen order.
    pub fn to_request(&self) -> GenerateTripRequest {
        GenerateTripRequest {
            destination: self.destination.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            days: self.days.clone(),
            budget: self.budget.clone(),
            interests: self
                .interests
                .iter()
                .filter(|(_, checked)| *checked)
                .map(|(label, _)| label.clone())
                .collect(),
        }
    }
}

/// Session-scoped context produced by the submit action and read by the
/// later map lookup. Lives exactly as long as the app.
#[derive(Default)]
pub struct SessionContext {
    pub last_destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Pending,
    Done(String),
}

impl GenerationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Text of the summary region; empty until a generation attempt
    /// completes.
    pub fn summary_text(&self) -> &str {
        match self {
            Self::Done(text) => text,
            Self::Idle | Self::Pending => "",
        }
    }
}

pub fn summary_display_text(summary: Option<String>) -> String {
    summary.unwrap_or_else(|| NO_SUMMARY_TEXT.to_string())
}

/// Map search target for the current session, or `None` when no plan has
/// been generated yet.
pub fn map_lookup_target(session: &SessionContext) -> Option<String> {
    (!session.last_destination.is_empty()).then(|| maps_search_url(&session.last_destination))
}

pub struct PlannerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    form: TripFormState,
    session: SessionContext,
    generation: GenerationState,
    export_page_url: String,

    status: String,

    // Last seen date-field values, for change detection between frames.
    last_dates: (String, String),
}

impl PlannerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: &str,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: TripFormState::new(),
            session: SessionContext::default(),
            generation: GenerationState::Idle,
            export_page_url: planner_client::export_page_url(server_url),
            status: "Ready".to_string(),
            last_dates: (String::new(), String::new()),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::TripGenerated { summary } => {
                    self.generation = GenerationState::Done(summary_display_text(summary));
                    self.status = "Itinerary ready".to_string();
                }
                UiEvent::Error(err) => {
                    if err.context() == UiErrorContext::GenerateTrip {
                        self.generation = GenerationState::Done(GENERATION_ERROR_TEXT.to_string());
                    }
                    self.status = classify_generation_failure(err.message());
                }
            }
        }
    }

    /// Recomputes the days field when either date field changed since the
    /// last frame. Missing, unparsable, or backwards ranges leave the field
    /// untouched.
    fn refresh_day_count(&mut self) {
        let current = (self.form.from_date.clone(), self.form.to_date.clone());
        if current == self.last_dates {
            return;
        }
        if let Some(days) = inclusive_day_count(&current.0, &current.1) {
            self.form.days = days.to_string();
        }
        self.last_dates = current;
    }

    fn submit_trip_form(&mut self) {
        let request = self.form.to_request();
        self.session.last_destination = request.destination.clone();
        self.generation = GenerationState::Pending;
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::GenerateTrip { request },
            &mut self.status,
        );
        if !queued {
            self.generation = GenerationState::Idle;
        }
    }

    fn open_map_search(&mut self) {
        match map_lookup_target(&self.session) {
            Some(url) => self.open_external_url(&url),
            None => {
                let _ = rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("TripTactix")
                    .set_description(MAP_LOOKUP_HINT)
                    .show();
            }
        }
    }

    fn open_export_page(&mut self) {
        let url = self.export_page_url.clone();
        self.open_external_url(&url);
    }

    fn open_external_url(&mut self, url: &str) {
        #[cfg(target_os = "windows")]
        let result = std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .spawn();

        #[cfg(target_os = "macos")]
        let result = std::process::Command::new("open").arg(url).spawn();

        #[cfg(all(unix, not(target_os = "macos")))]
        let result = std::process::Command::new("xdg-open").arg(url).spawn();

        match result {
            Ok(_) => tracing::debug!(%url, "opened url in system browser"),
            Err(err) => {
                self.status = format!("Failed to open browser: {err}");
            }
        }
    }

    fn show_planner(&mut self, ui: &mut egui::Ui) {
        ui.heading("TripTactix");
        ui.weak("Plan a trip and let the backend draft the itinerary.");
        ui.add_space(8.0);

        egui::Grid::new("trip_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Destination");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.destination)
                        .hint_text("e.g. Lisbon")
                        .desired_width(260.0),
                );
                ui.end_row();

                ui.label("From date");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.from_date)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(260.0),
                );
                ui.end_row();

                ui.label("To date");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.to_date)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(260.0),
                );
                ui.end_row();

                ui.label("Days");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.days).desired_width(260.0),
                );
                ui.end_row();

                ui.label("Budget (USD)");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.budget)
                        .hint_text("total for the trip")
                        .desired_width(260.0),
                );
                ui.end_row();
            });
        self.refresh_day_count();

        ui.add_space(6.0);
        ui.label("Interests");
        ui.horizontal_wrapped(|ui| {
            for (label, checked) in &mut self.form.interests {
                ui.checkbox(checked, label.as_str());
            }
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui
                .button(egui::RichText::new("Generate plan").strong())
                .clicked()
            {
                self.submit_trip_form();
            }
            if ui.button("Export…").clicked() {
                self.open_export_page();
            }
            if ui.button("Find attractions on the map").clicked() {
                self.open_map_search();
            }
        });

        ui.add_space(10.0);
        ui.separator();

        if self.generation.is_pending() {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Generating itinerary...");
            });
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(self.generation.summary_text());
            });
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if self.generation.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_planner(ui);
        });
    }
}
