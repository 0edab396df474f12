use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Online,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub status: ServiceState,
    pub service: &'static str,
    pub timestamp: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub test: &'static str,
    pub webhook: &'static str,
}

impl ServiceStatus {
    pub fn online(timestamp: String) -> Self {
        Self {
            status: ServiceState::Online,
            service: "Yape Webhook",
            timestamp,
            endpoints: Endpoints {
                test: "/test",
                webhook: "/webhook/yape",
            },
        }
    }
}
