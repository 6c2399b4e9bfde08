//! 表格解析与逐行导入
//!
//! 每行独立校验并在各自事务中写入，失败行记录错误后继续处理后续行。

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use tracing::{info, warn};

use super::registration::register_student;
use super::validate::{StudentFields, check_student_fields};
use crate::errors::{AppError, Result};
use crate::models::clusters::entities::Cluster;
use crate::models::students::{
    entities::Student,
    requests::CreateStudentRequest,
    responses::{BulkUploadResponse, CreatedStudentSummary},
};
use crate::models::{ErrorCode, FieldErrors};
use crate::storage::Storage;
use crate::utils::random_code::generate_password;
use crate::utils::validate::{REQUIRED, parse_integer};

pub const REQUIRED_COLUMNS: [&str; 5] = [
    "name",
    "email",
    "roll_number",
    "year_of_admission",
    "current_semester",
];

/// 文件级解析错误，任何行被处理之前返回
#[derive(Debug)]
pub enum SheetError {
    Unreadable(String),
    MissingColumns(Vec<&'static str>),
}

impl SheetError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Unreadable(_) => ErrorCode::ImportFileParseFailed,
            Self::MissingColumns(_) => ErrorCode::ImportFileMissingColumn,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Unreadable(msg) => format!("Error processing file: {msg}"),
            Self::MissingColumns(columns) => {
                format!("Missing required columns: {}", columns.join(", "))
            }
        }
    }
}

/// 一行原始数据，数值列保留文本形式待校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    // 表格中的行号（表头为第 1 行）
    pub row_number: usize,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub roll_number: String,
    pub year_of_admission: String,
    pub current_semester: String,
}

/// 表头规范化：`Roll Number` -> `roll_number`
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        // 整值浮点按整数输出，避免 `2024.0`、`1234567890.0`
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// 解析第一个工作表，自动识别 xlsx/xls
pub fn parse_student_sheet(data: &[u8]) -> std::result::Result<Vec<StudentRow>, SheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data.to_vec()))
        .map_err(|e| SheetError::Unreadable(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::Unreadable("workbook has no worksheets".to_string()))?
        .map_err(|e| SheetError::Unreadable(e.to_string()))?;

    let start_row = range.start().map_or(0, |(row, _)| row as usize);
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(SheetError::MissingColumns(REQUIRED_COLUMNS.to_vec()));
    };

    let mut columns: HashMap<String, usize> = HashMap::new();
    for (index, cell) in header.iter().enumerate() {
        columns
            .entry(normalize_header(&cell_text(cell)))
            .or_insert(index);
    }

    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !columns.contains_key(*column))
        .collect();
    if !missing.is_empty() {
        return Err(SheetError::MissingColumns(missing));
    }

    let value = |row: &[Data], column: &str| -> String {
        columns
            .get(column)
            .and_then(|&index| row.get(index))
            .map(cell_text)
            .unwrap_or_default()
    };

    let mut parsed = Vec::new();
    for (offset, row) in rows.enumerate() {
        // 跳过整行空白
        if row.iter().all(|cell| cell_text(cell).is_empty()) {
            continue;
        }
        let phone = value(row, "phone");
        parsed.push(StudentRow {
            row_number: start_row + offset + 2,
            name: value(row, "name"),
            email: value(row, "email"),
            phone: (!phone.is_empty()).then_some(phone),
            roll_number: value(row, "roll_number"),
            year_of_admission: value(row, "year_of_admission"),
            current_semester: value(row, "current_semester"),
        });
    }

    Ok(parsed)
}

enum RowError {
    Invalid(FieldErrors),
    Failed(AppError),
}

impl From<AppError> for RowError {
    fn from(err: AppError) -> Self {
        RowError::Failed(err)
    }
}

fn required_text(errors: &mut FieldErrors, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
        return false;
    }
    true
}

fn required_integer(errors: &mut FieldErrors, field: &str, value: &str) -> Option<i32> {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    match parse_integer(value) {
        Ok(v) => Some(v),
        Err(msg) => {
            errors.add(field, msg);
            None
        }
    }
}

async fn import_row(
    storage: &Arc<dyn Storage>,
    cluster: &Cluster,
    row: StudentRow,
) -> std::result::Result<Student, RowError> {
    let mut errors = FieldErrors::new();
    let year = required_integer(&mut errors, "year_of_admission", &row.year_of_admission);
    let semester = required_integer(&mut errors, "current_semester", &row.current_semester);
    required_text(&mut errors, "roll_number", &row.roll_number);

    let fields = StudentFields {
        name: Some(&row.name),
        email: Some(&row.email),
        phone: row.phone.as_deref(),
        roll_number: Some(&row.roll_number),
        ..Default::default()
    };
    errors.merge(check_student_fields(storage, fields, None).await?);

    let (year_of_admission, current_semester) = match (year, semester) {
        (Some(year), Some(semester)) if errors.is_empty() => (year, semester),
        _ => return Err(RowError::Invalid(errors)),
    };

    let request = CreateStudentRequest {
        name: row.name,
        email: row.email,
        phone: row.phone,
        cluster: cluster.id,
        roll_number: Some(row.roll_number),
        year_of_admission,
        current_semester: Some(current_semester),
        password: Some(generate_password()),
        is_active: None,
        can_change_club: None,
    };

    Ok(register_student(storage, request, cluster).await?)
}

/// 导入全部行并更新导入记录，不发送凭据邮件
pub async fn import_students(
    storage: &Arc<dyn Storage>,
    cluster: &Cluster,
    file_name: &str,
    rows: Vec<StudentRow>,
) -> Result<BulkUploadResponse> {
    let upload = storage
        .create_bulk_upload(cluster.id, file_name, rows.len() as i32)
        .await?;

    let mut created_students = Vec::new();
    let mut errors = Vec::new();

    for row in rows {
        let row_number = row.row_number;
        match import_row(storage, cluster, row).await {
            Ok(student) => created_students.push(CreatedStudentSummary {
                name: student.name,
                email: student.email,
                roll_number: student.roll_number,
            }),
            Err(RowError::Invalid(field_errors)) => {
                errors.push(format!("Row {row_number}: {}", field_errors.to_line()));
            }
            Err(RowError::Failed(e)) => {
                warn!("Bulk upload {} row {row_number} failed: {e}", upload.id);
                errors.push(format!("Row {row_number}: {e}"));
            }
        }
    }

    let error_log = (!errors.is_empty()).then(|| errors.join("\n"));
    let upload = storage
        .finish_bulk_upload(
            upload.id,
            created_students.len() as i32,
            errors.len() as i32,
            error_log,
        )
        .await?;

    info!(
        "Bulk upload {} ({}) finished: {} created, {} failed",
        upload.id,
        file_name,
        created_students.len(),
        errors.len()
    );

    Ok(BulkUploadResponse {
        message: format!("Successfully created {} students", created_students.len()),
        created_students,
        errors,
        upload_id: upload.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn workbook(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(r as u32, c as u16, *value).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    const HEADER: &[&str] = &[
        "Name",
        "Email",
        "Phone",
        "Roll Number",
        "Year Of Admission",
        "current_semester",
    ];

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Roll Number "), "roll_number");
        assert_eq!(normalize_header("EMAIL"), "email");
    }

    #[test]
    fn test_missing_columns_are_listed() {
        let data = workbook(&[&["name", "email", "phone"], &["A", "a@x.io", ""]]);
        let err = parse_student_sheet(&data).unwrap_err();
        assert_eq!(
            err.message(),
            "Missing required columns: roll_number, year_of_admission, current_semester"
        );
        assert_eq!(err.error_code(), ErrorCode::ImportFileMissingColumn);
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let data = workbook(&[
            HEADER,
            &["Ann Lee", "ann@x.io", "", "R1", "2024", "1"],
            &["", "", "", "", "", ""],
            &["Bob Ray", "bob@x.io", "555", "R2", "2023", "3"],
        ]);
        let rows = parse_student_sheet(&data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].phone, None);
        assert_eq!(rows[1].row_number, 4);
        assert_eq!(rows[1].phone.as_deref(), Some("555"));
        assert_eq!(rows[1].current_semester, "3");
    }

    #[test]
    fn test_garbage_is_unreadable() {
        let err = parse_student_sheet(b"PK\x03\x04 definitely not a zip").unwrap_err();
        assert!(matches!(err, SheetError::Unreadable(_)));
        assert_eq!(err.error_code(), ErrorCode::ImportFileParseFailed);
    }

    #[test]
    fn test_required_integer() {
        let mut errors = FieldErrors::new();
        assert_eq!(required_integer(&mut errors, "year", "2024"), Some(2024));
        assert_eq!(required_integer(&mut errors, "year", ""), None);
        assert_eq!(required_integer(&mut errors, "semester", "two"), None);
        assert_eq!(errors.get("year").unwrap(), &[REQUIRED.to_string()]);
        assert!(errors.contains("semester"));
    }

    #[test]
    fn test_required_text() {
        let mut errors = FieldErrors::new();
        assert!(required_text(&mut errors, "roll_number", "R-01"));
        assert!(!required_text(&mut errors, "roll_number", "   "));
        assert_eq!(errors.get("roll_number").unwrap(), &[REQUIRED.to_string()]);
    }
}
