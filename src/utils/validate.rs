use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::FieldErrors;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";

pub fn max_length_message(max: usize) -> String {
    format!("Ensure this field has no more than {max} characters.")
}

/// 外键指向的记录不存在
pub fn invalid_pk_message(id: i64) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(())
}

/// 解析整数字段，允许 `2024.0` 这类表格导出的整值浮点
pub fn parse_integer(value: &str) -> Result<i32, &'static str> {
    let value = value.trim();
    if let Ok(v) = value.parse::<i32>() {
        return Ok(v);
    }
    match value.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) => {
            Ok(f as i32)
        }
        _ => Err(INVALID_INTEGER),
    }
}

/// 字段校验辅助：必填与长度
pub struct FieldValidator<'a> {
    errors: &'a mut FieldErrors,
}

impl<'a> FieldValidator<'a> {
    pub fn new(errors: &'a mut FieldErrors) -> Self {
        Self { errors }
    }

    /// 必填字符串（去除首尾空白后非空），并检查最大长度
    pub fn required(&mut self, field: &str, value: &str, max: usize) -> bool {
        if value.trim().is_empty() {
            self.errors.add(field, REQUIRED);
            return false;
        }
        self.max_length(field, value, max)
    }

    pub fn max_length(&mut self, field: &str, value: &str, max: usize) -> bool {
        if value.chars().count() > max {
            self.errors.add(field, max_length_message(max));
            return false;
        }
        true
    }

    /// 可选字符串，仅在有值时检查长度
    pub fn optional(&mut self, field: &str, value: Option<&str>, max: usize) -> bool {
        match value {
            Some(v) => self.max_length(field, v, max),
            None => true,
        }
    }

    pub fn email(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.errors.add(field, REQUIRED);
            return false;
        }
        if let Err(msg) = validate_email(value.trim()) {
            self.errors.add(field, msg);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane.doe@school.edu").is_ok());
        assert_eq!(validate_email("jane@"), Err(INVALID_EMAIL));
        assert_eq!(validate_email("not-an-email"), Err(INVALID_EMAIL));
    }

    #[test]
    fn test_invalid_pk_message() {
        assert_eq!(
            invalid_pk_message(42),
            "Invalid pk \"42\" - object does not exist."
        );
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("2024"), Ok(2024));
        assert_eq!(parse_integer(" 3 "), Ok(3));
        assert_eq!(parse_integer("2024.0"), Ok(2024));
        assert_eq!(parse_integer("2024.5"), Err(INVALID_INTEGER));
        assert_eq!(parse_integer("abc"), Err(INVALID_INTEGER));
        assert_eq!(parse_integer(""), Err(INVALID_INTEGER));
    }

    #[test]
    fn test_field_validator_collects_messages() {
        let mut errors = FieldErrors::new();
        let mut v = FieldValidator::new(&mut errors);
        assert!(!v.required("name", "   ", 100));
        assert!(!v.required("code", "ABCDEFGHIJK", 10));
        assert!(v.optional("phone", None, 15));
        assert!(!v.email("email", "bad"));
        assert!(v.email("other", "ok@example.com"));

        assert_eq!(errors.get("name").unwrap(), &vec![REQUIRED.to_string()]);
        assert_eq!(errors.get("code").unwrap(), &vec![max_length_message(10)]);
        assert_eq!(errors.get("email").unwrap(), &vec![INVALID_EMAIL.to_string()]);
        assert!(!errors.contains("phone"));
        assert!(!errors.contains("other"));
    }
}
