//! 凭据邮件发送
//!
//! 支持 SMTP 和控制台两种后端，由 `email.transport` 配置选择。

pub mod console;
pub mod smtp;

use std::sync::Arc;

use crate::config::EmailConfig;
use crate::errors::{AppError, Result};
use crate::models::students::entities::Student;

/// 一封待发送的纯文本邮件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl CredentialEmail {
    /// 学生登录凭据邮件
    pub fn for_student(student: &Student, school_name: &str) -> Self {
        let subject = format!("Welcome to {school_name} - Your Login Credentials");
        let body = format!(
            "Dear {name},

Welcome to our educational platform! Your student account has been created successfully.

Login Details:
Student ID: {student_id}
Username: {username}
Email: {email}
Password: {password}

Please login to the student portal using these credentials and change your password immediately for security.

Best regards,
Academic Administration Team
",
            name = student.name,
            student_id = student.student_id,
            username = student.username,
            email = student.email,
            password = student.password.as_deref().unwrap_or_default(),
        );

        Self {
            to: student.email.clone(),
            subject,
            body,
        }
    }
}

#[async_trait::async_trait]
pub trait CredentialMailer: Send + Sync {
    async fn send(&self, email: &CredentialEmail) -> Result<()>;
}

/// 根据配置创建邮件后端
pub fn create_mailer(config: &EmailConfig) -> Result<Arc<dyn CredentialMailer>> {
    match config.transport.as_str() {
        "smtp" => Ok(Arc::new(smtp::SmtpMailer::new(config)?)),
        "console" => Ok(Arc::new(console::ConsoleMailer)),
        other => Err(AppError::email_delivery(format!(
            "Unknown email transport: {other} (expected smtp or console)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        let now = chrono::Utc::now();
        Student {
            id: 1,
            user_id: 1,
            student_id: "CS1234".to_string(),
            username: "jane_CS1234".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            cluster: 1,
            cluster_name: Some("Computer Science".to_string()),
            roll_number: Some("R001".to_string()),
            year_of_admission: 2024,
            current_semester: 1,
            password: Some("Ab12Cd34".to_string()),
            can_change_club: false,
            club_change_expires_at: None,
            is_active: true,
            credentials_sent: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_credential_email_content() {
        let email = CredentialEmail::for_student(&student(), "Springfield High");
        assert_eq!(email.to, "jane@example.com");
        assert_eq!(
            email.subject,
            "Welcome to Springfield High - Your Login Credentials"
        );
        assert!(email.body.starts_with("Dear Jane Doe,"));
        assert!(email.body.contains("Student ID: CS1234"));
        assert!(email.body.contains("Username: jane_CS1234"));
        assert!(email.body.contains("Password: Ab12Cd34"));
    }

    #[test]
    fn test_create_mailer_rejects_unknown_transport() {
        let config = EmailConfig {
            transport: "pigeon".to_string(),
            ..EmailConfig::default()
        };
        assert!(create_mailer(&config).is_err());
        assert!(create_mailer(&EmailConfig::default()).is_ok());
    }
}
