// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for revwatch.
//!
//! Implements [`ChannelAdapter`] for the Telegram Bot API via teloxide.
//! Messages go out as plain text, one `sendMessage` call each.

pub mod recipient;

use async_trait::async_trait;
use revwatch_config::model::TelegramConfig;
use revwatch_core::error::RevwatchError;
use revwatch_core::traits::{ChannelAdapter, PluginAdapter};
use revwatch_core::types::{AdapterType, HealthStatus, MessageId, OutboundMessage};
use teloxide::prelude::*;
use tracing::debug;

use crate::recipient::{fit_message, parse_recipient};

/// Telegram channel adapter implementing [`ChannelAdapter`].
pub struct TelegramChannel {
    bot: Bot,
}

impl TelegramChannel {
    /// Creates a new Telegram channel adapter.
    ///
    /// Requires `config.bot_token` to be set.
    pub fn new(config: &TelegramConfig) -> Result<Self, RevwatchError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            RevwatchError::Config("telegram.bot_token is required for the Telegram channel".into())
        })?;

        if token.trim().is_empty() {
            return Err(RevwatchError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        Ok(Self {
            bot: Bot::new(token.trim()),
        })
    }

    /// Points the bot at a different Bot API server.
    pub fn with_api_url(mut self, url: reqwest::Url) -> Self {
        self.bot = self.bot.set_api_url(url);
        self
    }
}

#[async_trait]
impl PluginAdapter for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, RevwatchError> {
        // getMe fails fast on a revoked or mistyped token.
        match self.bot.get_me().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "Telegram bot unreachable: {e}"
            ))),
        }
    }
}

#[async_trait]
impl ChannelAdapter for TelegramChannel {
    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, RevwatchError> {
        let recipient = parse_recipient(&msg.recipient)?;

        let sent = self
            .bot
            .send_message(recipient, fit_message(&msg.content))
            .await
            .map_err(|e| RevwatchError::Delivery {
                message: format!("failed to send message: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(message_id = sent.id.0, "telegram message sent");
        Ok(MessageId(sent.id.0.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(token: Option<&str>) -> TelegramConfig {
        TelegramConfig {
            bot_token: token.map(String::from),
            chat_id: Some("424242".into()),
        }
    }

    async fn channel_for(server: &MockServer) -> TelegramChannel {
        let url = reqwest::Url::parse(&server.uri()).unwrap();
        TelegramChannel::new(&config(Some("123456:TEST")))
            .unwrap()
            .with_api_url(url)
    }

    fn outbound(recipient: &str) -> OutboundMessage {
        OutboundMessage {
            recipient: recipient.into(),
            content: "Изменился статус проверки работы \"hw1\".".into(),
        }
    }

    #[test]
    fn new_requires_bot_token() {
        assert!(matches!(
            TelegramChannel::new(&config(None)),
            Err(RevwatchError::Config(_))
        ));
    }

    #[test]
    fn new_rejects_blank_token() {
        assert!(TelegramChannel::new(&config(Some("  "))).is_err());
    }

    #[test]
    fn new_accepts_valid_token() {
        let channel =
            TelegramChannel::new(&config(Some("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11")))
                .unwrap();
        assert_eq!(channel.name(), "telegram");
        assert_eq!(channel.adapter_type(), AdapterType::Channel);
    }

    #[tokio::test]
    async fn send_returns_message_id() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "ok": true,
            "result": {
                "message_id": 77,
                "date": 1_700_000_000,
                "from": {"id": 123456, "is_bot": true, "first_name": "revwatch"},
                "chat": {"id": 424242, "type": "private", "first_name": "Student"},
                "text": "Изменился статус проверки работы \"hw1\"."
            }
        });
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let channel = channel_for(&server).await;
        let id = channel.send(outbound("424242")).await.unwrap();
        assert_eq!(id, MessageId("77".into()));
    }

    #[tokio::test]
    async fn api_error_maps_to_delivery_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let channel = channel_for(&server).await;
        let err = channel.send(outbound("424242")).await.unwrap_err();
        assert!(matches!(err, RevwatchError::Delivery { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn invalid_recipient_fails_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let channel = channel_for(&server).await;
        let err = channel.send(outbound("not a chat")).await.unwrap_err();
        assert!(matches!(err, RevwatchError::Delivery { .. }));
    }

    #[tokio::test]
    async fn health_check_reports_rejected_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": 401,
                "description": "Unauthorized"
            })))
            .mount(&server)
            .await;

        let channel = channel_for(&server).await;
        assert!(matches!(
            channel.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));
    }
}
