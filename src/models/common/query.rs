//! 查询参数反序列化辅助

use serde::{Deserialize, Deserializer};

/// 布尔筛选：仅当值（忽略大小写）为 `true` 时为真，其余任意值为假
pub fn deserialize_bool_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().eq_ignore_ascii_case("true")))
}

/// ID 筛选：空字符串视为未提供
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id: '{v}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[derive(Debug, Deserialize)]
    struct Filters {
        #[serde(default, deserialize_with = "deserialize_bool_flag")]
        is_active: Option<bool>,
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        department: Option<i64>,
    }

    #[test]
    fn test_bool_flag_only_true_is_true() {
        let f = Query::<Filters>::from_query("is_active=TRUE").unwrap();
        assert_eq!(f.is_active, Some(true));
        let f = Query::<Filters>::from_query("is_active=yes").unwrap();
        assert_eq!(f.is_active, Some(false));
        let f = Query::<Filters>::from_query("").unwrap();
        assert_eq!(f.is_active, None);
    }

    #[test]
    fn test_optional_id() {
        let f = Query::<Filters>::from_query("department=4").unwrap();
        assert_eq!(f.department, Some(4));
        let f = Query::<Filters>::from_query("department=").unwrap();
        assert_eq!(f.department, None);
        assert!(Query::<Filters>::from_query("department=abc").is_err());
    }
}
