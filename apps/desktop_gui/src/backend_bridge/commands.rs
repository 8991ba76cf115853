//! Backend commands queued from UI to backend worker.

use shared::protocol::GenerateTripRequest;

pub enum BackendCommand {
    GenerateTrip { request: GenerateTripRequest },
}
