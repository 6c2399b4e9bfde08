use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::mail::{CredentialMailer, create_mailer};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<dyn CredentialMailer>,
}

/// 确保存在一条社团全局设置
async fn seed_club_settings(storage: &Arc<dyn Storage>) {
    match storage.ensure_club_settings().await {
        Ok(settings) => debug!(
            "Club settings ready (ID: {}, joining open: {})",
            settings.id, settings.is_joining_open
        ),
        // 读取时会再次尝试创建
        Err(e) => warn!("Failed to seed club settings: {e}"),
    }
}

/// 准备服务器启动的上下文
/// 包括存储与邮件发送器
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // lettre 与 sqlx 共用同一个 rustls provider
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| AppError::startup("Failed to install rustls crypto provider"))?;

    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_club_settings(&storage).await;

    let mailer = create_mailer(&config.email)?;
    info!("Credential mailer initialized ({})", config.email.transport);

    Ok(StartupContext { storage, mailer })
}
