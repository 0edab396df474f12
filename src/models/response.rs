use serde::{Deserialize, Serialize};

use crate::models::payment::Payment;

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    pub texto: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum WebhookStatus {
    Ignored,
    Success,
    PartialSuccess,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub status: WebhookStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monto: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enviado_telegram: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookResponse {
    pub fn ignored() -> Self {
        Self {
            status: WebhookStatus::Ignored,
            reason: Some("No se detectó un formato de pago de Yape".to_string()),
            nombre: None,
            monto: None,
            enviado_telegram: None,
            error: None,
        }
    }

    pub fn success(payment: Payment) -> Self {
        Self {
            status: WebhookStatus::Success,
            reason: None,
            nombre: Some(payment.sender_name),
            monto: Some(payment.amount),
            enviado_telegram: Some(true),
            error: None,
        }
    }

    pub fn partial_success(payment: Payment) -> Self {
        Self {
            status: WebhookStatus::PartialSuccess,
            reason: None,
            nombre: Some(payment.sender_name),
            monto: Some(payment.amount),
            enviado_telegram: Some(false),
            error: Some("No se pudo enviar a Telegram".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl TestResponse {
    pub fn success() -> Self {
        Self {
            status: "success",
            message: "Prueba exitosa",
        }
    }

    pub fn error() -> Self {
        Self {
            status: "error",
            message: "Error al enviar a Telegram",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
