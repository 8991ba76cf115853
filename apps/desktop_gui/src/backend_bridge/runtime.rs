//! Backend worker: a dedicated thread owning a tokio runtime and the planner
//! HTTP client, fed by the UI command queue.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use planner_client::PlannerClient;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = match PlannerClient::new(&server_url) {
                Ok(client) => client,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: {err}"),
                    )));
                    tracing::error!("rejected planner server URL '{server_url}': {err}");
                    return;
                }
            };
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::GenerateTrip { request } => {
                        match client.generate_trip(&request).await {
                            Ok(summary) => {
                                let _ = ui_tx.try_send(UiEvent::TripGenerated { summary });
                            }
                            Err(err) => {
                                tracing::error!("trip generation failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::GenerateTrip,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                }
            }
        });
    });
}
