use rand::Rng;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// 默认初始密码长度
pub const PASSWORD_LENGTH: usize = 8;

/// 生成指定长度的字母数字随机串
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

/// 生成学生初始密码
pub fn generate_password() -> String {
    generate_random_code(PASSWORD_LENGTH)
}

/// 生成学号：学群代码 + 4 位随机数
pub fn generate_student_number(cluster_code: &str) -> String {
    let suffix: u32 = rand::rng().random_range(1000..=9999);
    format!("{cluster_code}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_shape() {
        let password = generate_password();
        assert_eq!(password.len(), PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_code_length() {
        assert_eq!(generate_random_code(0), "");
        assert_eq!(generate_random_code(32).len(), 32);
    }

    #[test]
    fn test_student_number_format() {
        for _ in 0..50 {
            let number = generate_student_number("CS");
            let suffix: u32 = number.strip_prefix("CS").unwrap().parse().unwrap();
            assert!((1000..=9999).contains(&suffix));
        }
    }
}
