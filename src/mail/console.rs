use tracing::info;

use super::{CredentialEmail, CredentialMailer};
use crate::errors::Result;

/// 开发环境使用：邮件内容只写入日志
pub struct ConsoleMailer;

#[async_trait::async_trait]
impl CredentialMailer for ConsoleMailer {
    async fn send(&self, email: &CredentialEmail) -> Result<()> {
        info!(
            to = %email.to,
            subject = %email.subject,
            "Console mail transport:\n{}",
            email.body
        );
        Ok(())
    }
}
