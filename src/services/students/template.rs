//! 批量导入模板

use actix_web::{HttpResponse, Result as ActixResult};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::error;

use crate::errors::Result;

pub const TEMPLATE_SHEET_NAME: &str = "Students Template";
pub const TEMPLATE_FILE_NAME: &str = "students_template.xlsx";
const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const MAX_COLUMN_WIDTH: usize = 50;

pub const TEMPLATE_COLUMNS: [&str; 6] = [
    "name",
    "email",
    "phone",
    "roll_number",
    "year_of_admission",
    "current_semester",
];

enum SampleCell {
    Text(&'static str),
    Number(i32),
}

impl SampleCell {
    fn display_len(&self) -> usize {
        match self {
            SampleCell::Text(s) => s.chars().count(),
            SampleCell::Number(n) => n.to_string().len(),
        }
    }
}

fn sample_rows() -> [[SampleCell; 6]; 2] {
    use SampleCell::{Number, Text};
    [
        [
            Text("John Doe"),
            Text("john@example.com"),
            Text("1234567890"),
            Text("ST001"),
            Number(2024),
            Number(1),
        ],
        [
            Text("Jane Smith"),
            Text("jane@example.com"),
            Text("9876543210"),
            Text("ST002"),
            Number(2024),
            Number(1),
        ],
    ]
}

/// `roll_number` -> `Roll Number`
fn title_case(column: &str) -> String {
    column
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 生成模板文件内容
pub fn build_template() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(TEMPLATE_SHEET_NAME)?;

    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);
    let rows = sample_rows();

    for (col, column) in TEMPLATE_COLUMNS.iter().enumerate() {
        let header = title_case(column);
        worksheet.write_string_with_format(0, col as u16, header.as_str(), &header_format)?;

        // 列宽取该列最长内容加 2，上限 50
        let max_len = rows
            .iter()
            .map(|row| row[col].display_len())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or_default();
        worksheet.set_column_width(col as u16, (max_len + 2).min(MAX_COLUMN_WIDTH) as f64)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = (index + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                SampleCell::Text(s) => worksheet.write_string(row_num, col as u16, *s)?,
                SampleCell::Number(n) => {
                    worksheet.write_number(row_num, col as u16, f64::from(*n))?
                }
            };
        }
    }

    Ok(workbook.save_to_buffer()?)
}

pub async fn download_template() -> ActixResult<HttpResponse> {
    let buffer = build_template().map_err(|e| {
        error!("Template generation failed: {}", e);
        actix_web::error::ErrorInternalServerError(format!("Template generation failed: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{TEMPLATE_FILE_NAME}\""),
        ))
        .body(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::students::import::parse_student_sheet;
    use crate::utils::{SpreadsheetKind, validate_magic_bytes};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("name"), "Name");
        assert_eq!(title_case("roll_number"), "Roll Number");
        assert_eq!(title_case("year_of_admission"), "Year Of Admission");
    }

    #[test]
    fn test_template_is_importable() {
        let data = build_template().unwrap();
        assert!(validate_magic_bytes(&data, SpreadsheetKind::Xlsx));

        let rows = parse_student_sheet(&data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].name, "John Doe");
        assert_eq!(rows[0].phone.as_deref(), Some("1234567890"));
        assert_eq!(rows[1].roll_number, "ST002");
        assert_eq!(rows[1].year_of_admission, "2024");
        assert_eq!(rows[1].current_semester, "1");
    }
}
