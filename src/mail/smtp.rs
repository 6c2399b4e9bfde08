use std::time::Duration;

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use super::{CredentialEmail, CredentialMailer};
use crate::config::EmailConfig;
use crate::errors::{AppError, Result};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let host = config.smtp_host.as_str();
        let mut builder = match config.smtp_port {
            // 隐式 TLS
            465 => AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| AppError::email_delivery(format!("SMTP 配置错误: {e}")))?,
            // 本地中继，不加密
            25 | 1025 => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host),
            _ => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                .map_err(|e| AppError::email_delivery(format!("SMTP 配置错误: {e}")))?,
        }
        .port(config.smtp_port)
        .timeout(Some(Duration::from_secs(config.timeout)));

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        let from = config
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| AppError::email_delivery(format!("发件地址无效: {e}")))?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait::async_trait]
impl CredentialMailer for SmtpMailer {
    async fn send(&self, email: &CredentialEmail) -> Result<()> {
        let to = email
            .to
            .parse::<Mailbox>()
            .map_err(|e| AppError::email_delivery(format!("收件地址无效: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| AppError::email_delivery(format!("构建邮件失败: {e}")))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| AppError::email_delivery(format!("发送邮件失败: {e}")))?;

        debug!("SMTP response code: {}", response.code());
        Ok(())
    }
}
