use chrono::{DateTime, TimeZone};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    clients::telegram::TelegramClient,
    config::LogFormat,
    models::{
        payment::{ExtractionResult, Payment},
        telegram::DeliveryOutcome,
    },
    parser,
};

pub const TEST_MESSAGE: &str = "
🧪 <b>MENSAJE DE PRUEBA</b>

✅ El webhook está funcionando correctamente
🔐 API Key validado
📡 Conexión con Telegram exitosa

<i>Sistema listo para recibir notificaciones de Yape</i>
";

#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    Ignored,
    Delivered { payment: Payment },
    DeliveryFailed { payment: Payment, reason: String },
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

pub fn format_payment_alert<Tz>(payment: &Payment, received_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "
💰 <b>NUEVO PAGO RECIBIDO</b>

👤 <b>De:</b> {}
💵 <b>Monto:</b> S/ {}
🕐 <b>Hora:</b> {}

📱 <i>Notificación automática de Yape</i>
",
        payment.sender_name,
        payment.amount,
        received_at.format("%d/%m/%Y %H:%M:%S")
    )
}

/// Parse `text` and, when it describes a payment, forward one alert to Telegram.
pub async fn process_notification(text: &str, telegram: &TelegramClient) -> RelayOutcome {
    debug!(length = text.len(), "Parsing notification text");

    let payment = match parser::extract(text) {
        ExtractionResult::Matched(payment) => payment,
        ExtractionResult::NoMatch => {
            info!("Notification is not a Yape payment, ignoring");
            return RelayOutcome::Ignored;
        }
    };

    info!(
        sender = %payment.sender_name,
        amount = %payment.amount,
        "Yape payment detected"
    );

    let message = format_payment_alert(&payment, &chrono::Local::now());

    match telegram.send_message(&message).await {
        DeliveryOutcome::Delivered => RelayOutcome::Delivered { payment },
        DeliveryOutcome::Failed { reason } => {
            warn!(reason = %reason, "Payment alert could not be delivered");
            RelayOutcome::DeliveryFailed { payment, reason }
        }
    }
}
