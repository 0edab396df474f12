use anyhow::Result;
use chrono::{FixedOffset, TimeZone};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};
use yape_relay::{
    clients::telegram::TelegramClient,
    models::payment::Payment,
    utils::{RelayOutcome, format_payment_alert, process_notification},
};

use crate::{send_message_path, test_config};

fn create_payment(sender_name: &str, amount: &str) -> Payment {
    Payment {
        sender_name: sender_name.to_string(),
        amount: amount.to_string(),
    }
}

/// Test: Alert message carries sender, amount and local timestamp
#[test]
fn test_format_payment_alert() {
    let lima = FixedOffset::west_opt(5 * 3600).unwrap();
    let received_at = lima.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap();

    let message = format_payment_alert(&create_payment("Juan Perez", "1,500.50"), &received_at);

    assert!(message.contains("<b>NUEVO PAGO RECIBIDO</b>"));
    assert!(message.contains("<b>De:</b> Juan Perez"));
    assert!(message.contains("<b>Monto:</b> S/ 1,500.50"));
    assert!(message.contains("<b>Hora:</b> 07/03/2025 14:05:09"));
    assert!(message.contains("<i>Notificación automática de Yape</i>"));
}

/// Test: Non-payment texts never reach Telegram
#[tokio::test]
async fn test_unmatched_text_is_ignored_without_delivery() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = TelegramClient::new(&test_config(&server.uri()))?;

    let outcome = process_notification("Tu saldo es S/ 10.00", &client).await;

    assert_eq!(outcome, RelayOutcome::Ignored);

    Ok(())
}

/// Test: A recognized payment is forwarded exactly once
#[tokio::test]
async fn test_matched_payment_is_delivered_once() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .and(body_string_contains("Maria Lopez"))
        .and(body_string_contains("S/ 1,500.50"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramClient::new(&test_config(&server.uri()))?;

    let outcome = process_notification("Maria Lopez te envió S/ 1,500.50", &client).await;

    assert_eq!(
        outcome,
        RelayOutcome::Delivered {
            payment: create_payment("Maria Lopez", "1,500.50"),
        }
    );

    Ok(())
}

/// Test: Delivery failure keeps the extracted payment
#[tokio::test]
async fn test_delivery_failure_keeps_payment() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramClient::new(&test_config(&server.uri()))?;

    let outcome = process_notification("Recibiste S/ 99.99 de Carlos Ruiz", &client).await;

    match outcome {
        RelayOutcome::DeliveryFailed { payment, reason } => {
            assert_eq!(payment, create_payment("Carlos Ruiz", "99.99"));
            assert!(reason.contains("502"), "unexpected reason: {}", reason);
        }
        other => panic!("expected delivery failure, got {:?}", other),
    }

    Ok(())
}
