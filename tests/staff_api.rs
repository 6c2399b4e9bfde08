#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::TestContext;

fn staff_payload(staff_id: &str, email: &str, department: i64) -> Value {
    json!({
        "staff_id": staff_id,
        "name": "Grace Hopper",
        "email": email,
        "subject_expertise": "Compilers",
        "qualification": "PhD",
        "department": department,
    })
}

#[actix_web::test]
async fn test_create_staff_creates_login_account() {
    let ctx = TestContext::new().await;
    let department = ctx.department("Computing", "CS").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/staff")
        .set_json(staff_payload("T100", "grace@school.test", department.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["department_name"], "Computing");
    assert_eq!(body["data"]["mentor_access_enabled"], false);
    let account_id = body["data"]["user_id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/accounts/{account_id}"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["username"], "T100");
    assert_eq!(body["data"]["first_name"], "Grace");
    assert_eq!(body["data"]["last_name"], "Hopper");
    assert!(body["data"].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_duplicate_staff_and_unknown_department() {
    let ctx = TestContext::new().await;
    let department = ctx.department("Computing", "CS").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/staff")
        .set_json(staff_payload("T100", "grace@school.test", department.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/staff")
        .set_json(staff_payload("T100", "grace@school.test", 999))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["staff_id"][0], "Staff ID must be unique.");
    assert_eq!(body["data"]["email"][0], "Email must be unique.");
    assert_eq!(
        body["data"]["department"][0],
        "Invalid pk \"999\" - object does not exist."
    );
}

#[actix_web::test]
async fn test_disabling_mentor_access_clears_cluster() {
    let ctx = TestContext::new().await;
    let department = ctx.department("Computing", "CS").await;
    let cluster = ctx.cluster("Science", "SCI").await;
    let app = init_app!(ctx);

    let mut payload = staff_payload("T200", "ada@school.test", department.id);
    payload["mentor_access_enabled"] = json!(true);
    payload["mentor_cluster"] = json!(cluster.id);
    let req = test::TestRequest::post()
        .uri("/api/v1/staff")
        .set_json(payload)
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["mentor_cluster"], cluster.id);

    let uri = format!("/api/v1/staff/{id}/toggle_mentor_access");
    let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["mentor_access_enabled"], false);
    assert!(body["data"]["mentor_cluster"].is_null());

    // 重新开启不会恢复原学群
    let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["mentor_access_enabled"], true);
    assert!(body["data"]["mentor_cluster"].is_null());
}

#[actix_web::test]
async fn test_delete_staff_removes_account() {
    let ctx = TestContext::new().await;
    let department = ctx.department("Computing", "CS").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/staff")
        .set_json(staff_payload("T300", "alan@school.test", department.id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().unwrap();
    let account_id = body["data"]["user_id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/staff/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    assert!(ctx.storage.get_staff_by_id(id).await.unwrap().is_none());
    assert!(ctx.storage.get_account_by_id(account_id).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_toggle_staff_status_twice() {
    let ctx = TestContext::new().await;
    let department = ctx.department("Computing", "CS").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/staff")
        .set_json(staff_payload("T200", "ada@school.test", department.id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["is_active"], true);

    let uri = format!("/api/v1/staff/{id}/toggle_status");
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
