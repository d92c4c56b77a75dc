use serde::{Deserialize, Serialize};

use crate::game::Participant;

/// Request payload for the registration form
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub group: String,
}

impl From<RegisterRequest> for Participant {
    fn from(request: RegisterRequest) -> Self {
        Participant::new(request.first_name, request.last_name, request.group)
    }
}

/// Request payload for picking a round length
#[derive(Debug, Deserialize)]
pub struct DurationRequest {
    pub seconds: u32,
}

/// A click on the target, in percent of the target box
#[derive(Debug, Deserialize)]
pub struct FireRequest {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
