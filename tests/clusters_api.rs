#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::TestContext;

#[actix_web::test]
async fn test_cluster_crud_and_uniqueness() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/clusters")
        .set_json(json!({"cluster_name": "Science", "cluster_code": "SCI"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["is_active"], true);

    // 名称与代码都重复
    let req = test::TestRequest::post()
        .uri("/api/v1/clusters")
        .set_json(json!({"cluster_name": "Science", "cluster_code": "SCI"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["cluster_name"][0], "Cluster name must be unique.");
    assert_eq!(body["data"]["cluster_code"][0], "Cluster code must be unique.");

    // 更新为自身的名称不算冲突
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/clusters/{id}"))
        .set_json(json!({"cluster_name": "Science", "description": "Lab track"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["description"], "Lab track");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/clusters/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/clusters/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_toggle_twice_restores_status() {
    let ctx = TestContext::new().await;
    let cluster = ctx.cluster("Arts", "ART").await;
    let app = init_app!(ctx);

    let uri = format!("/api/v1/clusters/{}/toggle_status", cluster.id);
    let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["is_active"], false);

    // 停用的学群不出现在 active 列表
    let req = test::TestRequest::get()
        .uri("/api/v1/clusters/active_clusters")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["is_active"], true);
}

#[actix_web::test]
async fn test_list_filters_and_search() {
    let ctx = TestContext::new().await;
    ctx.cluster("Science", "SCI").await;
    let arts = ctx.cluster("Arts", "ART").await;
    ctx.storage.toggle_cluster_status(arts.id).await.unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/clusters?is_active=TRUE")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["cluster_code"], "SCI");

    let req = test::TestRequest::get()
        .uri("/api/v1/clusters?search=art")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["items"][0]["cluster_name"], "Arts");
}

#[actix_web::test]
async fn test_invalid_path_id_is_rejected() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/clusters/abc")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn test_status_endpoint() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/v1/status").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "success");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(
        body["data"]["message"]
            .as_str()
            .unwrap()
            .ends_with("API is running")
    );
}
