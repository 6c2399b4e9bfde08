#[macro_use]
mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, http::header, test};
use serde_json::{Value, json};

use campus_admin::utils::password::verify_password;
use common::{FailingMailer, TestContext, multipart_body, student_sheet};

const BOUNDARY: &str = "campus-test-boundary";

fn student_payload(email: &str, cluster: i64) -> Value {
    json!({
        "name": "Alice Liddell",
        "email": email,
        "cluster": cluster,
        "year_of_admission": 2024,
        "password": "secret123",
    })
}

#[actix_web::test]
async fn test_create_student_sends_credentials() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("alice@school.test", cluster.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;

    let student = &body["data"];
    let student_id = student["student_id"].as_str().unwrap();
    assert!(student_id.starts_with("SCI"));
    assert_eq!(student["username"], format!("alice_{student_id}"));
    assert_eq!(student["current_semester"], 1);
    assert_eq!(student["credentials_sent"], true);
    assert!(student.get("password").is_none());

    let sent = ctx.recorder.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "alice@school.test");
    assert!(sent[0].body.contains("Password: secret123"));
    assert!(sent[0].body.contains(student_id));
}

#[actix_web::test]
async fn test_mail_failure_keeps_student() {
    let ctx = TestContext::with_mailer(Arc::new(FailingMailer)).await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("bob@school.test", cluster.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["credentials_sent"], false);
    let id = body["data"]["id"].as_i64().unwrap();

    // 手动补发同样失败
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/students/{id}/send_credentials"))
        .peer_addr("10.1.0.1:40000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Failed to send email")
    );

    let student = ctx.storage.get_student_by_id(id).await.unwrap().unwrap();
    assert!(!student.credentials_sent);
}

#[actix_web::test]
async fn test_duplicate_email_creates_nothing() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("carol@school.test", cluster.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("carol@school.test", cluster.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"][0], "Email already exists.");

    let req = test::TestRequest::get().uri("/api/v1/students").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(ctx.recorder.sent().len(), 1);
}

#[actix_web::test]
async fn test_unknown_cluster_is_field_error() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("dave@school.test", 42))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["data"]["cluster"][0],
        "Invalid pk \"42\" - object does not exist."
    );
}

#[actix_web::test]
async fn test_reset_password_issues_new_credentials() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("erin@school.test", cluster.id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/students/{id}/reset_password"))
        .peer_addr("10.1.0.2:40000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let new_password = body["data"]["new_password"].as_str().unwrap().to_string();
    assert_eq!(new_password.len(), 8);
    assert_ne!(new_password, "secret123");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/students/{id}/send_credentials"))
        .peer_addr("10.1.0.2:40000".parse().unwrap())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let sent = ctx.recorder.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[1].body.contains(&format!("Password: {new_password}")));
}

#[actix_web::test]
async fn test_toggle_club_change_sets_window() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("frank@school.test", cluster.id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["can_change_club"], false);

    let uri = format!("/api/v1/students/{id}/toggle_club_change");
    let body: Value = test::read_body_json(
        test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await,
    )
    .await;
    assert_eq!(body["data"]["can_change_club"], true);
    assert!(body["data"]["club_change_expires_at"].is_string());

    let body: Value = test::read_body_json(
        test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await,
    )
    .await;
    assert_eq!(body["data"]["can_change_club"], false);
    assert!(body["data"]["club_change_expires_at"].is_null());
}

#[actix_web::test]
async fn test_bulk_upload_reports_row_errors() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("taken@school.test", cluster.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let sheet = student_sheet(&[
        ["Ann", "ann@school.test", "5550001", "R1", "2024", "1"],
        ["Ben", "taken@school.test", "", "R2", "2024", "1"],
        ["Cat", "cat@school.test", "", "R3", "2023", "3"],
        ["Dan", "ann@school.test", "", "R4", "2024", "1"],
    ]);
    let cluster_id = cluster.id.to_string();
    let body = multipart_body(
        BOUNDARY,
        Some(("students.xlsx", sheet.as_slice())),
        &[("cluster", &cluster_id)],
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/students/bulk_upload")
        .peer_addr("10.2.0.1:40000".parse().unwrap())
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;

    let result = &body["data"];
    assert_eq!(result["message"], "Successfully created 2 students");
    assert_eq!(result["created_students"].as_array().unwrap().len(), 2);
    let errors = result["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].as_str().unwrap().starts_with("Row 3:"));
    assert!(errors[1].as_str().unwrap().starts_with("Row 5:"));
    assert!(errors[1].as_str().unwrap().contains("Email already exists."));

    // 批量导入不发送邮件
    assert_eq!(ctx.recorder.sent().len(), 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/students/bulk_uploads?cluster={}", cluster.id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let upload = &body["data"]["items"][0];
    assert_eq!(upload["total_students"], 4);
    assert_eq!(upload["successful_uploads"], 2);
    assert_eq!(upload["failed_uploads"], 2);
    assert_eq!(upload["status"], "partial");
    assert_eq!(upload["file_name"], "students.xlsx");
}

#[actix_web::test]
async fn test_bulk_upload_rejects_bad_inputs() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);
    let cluster_id = cluster.id.to_string();

    let upload = |body: Vec<u8>| {
        test::TestRequest::post()
            .uri("/api/v1/students/bulk_upload")
            .peer_addr("10.2.0.2:40000".parse().unwrap())
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
            .to_request()
    };

    // 扩展名不合法
    let body = multipart_body(
        BOUNDARY,
        Some(("students.csv", &b"name,email\n"[..])),
        &[("cluster", &cluster_id)],
    );
    let resp = test::call_service(&app, upload(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Invalid file type. Please upload an Excel file."
    );

    // 缺少文件
    let body = multipart_body(BOUNDARY, None, &[("cluster", &cluster_id)]);
    let resp = test::call_service(&app, upload(body)).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No file provided");

    // 缺少学群
    let sheet = student_sheet(&[["Ann", "ann@school.test", "", "R1", "2024", "1"]]);
    let body = multipart_body(BOUNDARY, Some(("students.xlsx", sheet.as_slice())), &[]);
    let resp = test::call_service(&app, upload(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(
        ctx.storage
            .get_student_by_email("ann@school.test")
            .await
            .unwrap()
            .is_none()
    );
}

#[actix_web::test]
async fn test_template_download() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/students/template")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("students_template.xlsx"));

    let bytes = test::read_body(resp).await;
    assert!(bytes.starts_with(b"PK"));
}

#[actix_web::test]
async fn test_toggle_student_status_twice() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("gina@school.test", cluster.id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["is_active"], true);

    let uri = format!("/api/v1/students/{id}/toggle_status");
    let body: Value = test::read_body_json(
        test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await,
    )
    .await;
    assert_eq!(body["data"]["is_active"], false);

    let body: Value = test::read_body_json(
        test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await,
    )
    .await;
    assert_eq!(body["data"]["is_active"], true);
}

#[actix_web::test]
async fn test_duplicate_roll_number_creates_nothing() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let mut payload = student_payload("hank@school.test", cluster.id);
    payload["roll_number"] = json!("R1");
    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let mut payload = student_payload("iris@school.test", cluster.id);
    payload["roll_number"] = json!("R1");
    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["roll_number"][0], "Roll number already exists.");

    let req = test::TestRequest::get().uri("/api/v1/students").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_reset_password_updates_account_hash() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(student_payload("jack@school.test", cluster.id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/students/{id}/reset_password"))
        .peer_addr("10.1.0.3:40000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let new_password = body["data"]["new_password"].as_str().unwrap().to_string();

    let student = ctx.storage.get_student_by_id(id).await.unwrap().unwrap();
    let account = ctx
        .storage
        .get_account_by_id(student.user_id)
        .await
        .unwrap()
        .unwrap();
    assert!(verify_password(&new_password, &account.password_hash));
    assert!(!verify_password("secret123", &account.password_hash));
}

#[actix_web::test]
async fn test_bulk_upload_requires_roll_number() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let sheet = student_sheet(&[["Kim", "kim@school.test", "", "  ", "2024", "1"]]);
    let cluster_id = cluster.id.to_string();
    let body = multipart_body(
        BOUNDARY,
        Some(("students.xlsx", sheet.as_slice())),
        &[("cluster", &cluster_id)],
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/students/bulk_upload")
        .peer_addr("10.2.0.3:40000".parse().unwrap())
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;

    let errors = body["data"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    let line = errors[0].as_str().unwrap();
    assert!(line.starts_with("Row 2:"));
    assert!(line.contains("roll_number: This field is required."));
    assert_eq!(body["data"]["created_students"].as_array().unwrap().len(), 0);

    assert!(
        ctx.storage
            .get_student_by_email("kim@school.test")
            .await
            .unwrap()
            .is_none()
    );
}
