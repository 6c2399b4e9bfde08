use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

/// 字段级校验错误：`{ field: [messages] }`
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// 合并另一组错误，同名字段的消息追加在后
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// 单行文本形式，例如 `email: Email already exists.; roll_number: ...`
    pub fn to_line(&self) -> String {
        self.0
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_line_is_sorted_by_field() {
        let mut errors = FieldErrors::new();
        errors.add("roll_number", "Roll number already exists.");
        errors.add("email", "Email already exists.");
        assert_eq!(
            errors.to_line(),
            "email: Email already exists.; roll_number: Roll number already exists."
        );
    }

    #[test]
    fn test_merge_appends_messages() {
        let mut errors = FieldErrors::new();
        errors.add("year_of_admission", "A valid integer is required.");
        let mut other = FieldErrors::new();
        other.add("email", "Email already exists.");
        other.add("year_of_admission", "second");
        errors.merge(other);
        assert_eq!(errors.get("email").map(|m| m.len()), Some(1));
        assert_eq!(errors.get("year_of_admission").map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_serializes_as_map() {
        let mut errors = FieldErrors::new();
        errors.add("name", "This field is required.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["name"][0], "This field is required.");
    }
}
