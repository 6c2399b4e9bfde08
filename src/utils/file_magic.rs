/// 支持导入的表格文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    Xlsx,
    Xls,
}

impl SpreadsheetKind {
    /// 根据文件名后缀判断类型（不区分大小写）
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.trim().to_ascii_lowercase();
        if lower.ends_with(".xlsx") {
            Some(Self::Xlsx)
        } else if lower.ends_with(".xls") {
            Some(Self::Xls)
        } else {
            None
        }
    }
}

/// 验证文件内容的魔术字节是否与表格类型匹配
pub fn validate_magic_bytes(data: &[u8], kind: SpreadsheetKind) -> bool {
    if data.is_empty() {
        return false;
    }

    match kind {
        // OOXML (ZIP)
        SpreadsheetKind::Xlsx => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        // OLE Compound Document
        SpreadsheetKind::Xls => {
            data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(
            SpreadsheetKind::from_file_name("students.xlsx"),
            Some(SpreadsheetKind::Xlsx)
        );
        assert_eq!(
            SpreadsheetKind::from_file_name("STUDENTS.XLS"),
            Some(SpreadsheetKind::Xls)
        );
        assert_eq!(SpreadsheetKind::from_file_name("students.csv"), None);
        assert_eq!(SpreadsheetKind::from_file_name("students.xlsx.txt"), None);
        assert_eq!(SpreadsheetKind::from_file_name(""), None);
    }

    #[test]
    fn test_xlsx_magic() {
        let zip_header = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00];
        assert!(validate_magic_bytes(&zip_header, SpreadsheetKind::Xlsx));
        assert!(!validate_magic_bytes(&zip_header, SpreadsheetKind::Xls));
    }

    #[test]
    fn test_xls_magic() {
        let ole_header = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00];
        assert!(validate_magic_bytes(&ole_header, SpreadsheetKind::Xls));
        assert!(!validate_magic_bytes(&ole_header, SpreadsheetKind::Xlsx));
    }

    #[test]
    fn test_empty_or_text_data() {
        assert!(!validate_magic_bytes(&[], SpreadsheetKind::Xlsx));
        assert!(!validate_magic_bytes(b"name,email", SpreadsheetKind::Xlsx));
    }
}
