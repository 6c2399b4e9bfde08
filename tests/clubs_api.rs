#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::{Value, json};

use common::TestContext;

/// 依次调用服务并返回 (状态码, 响应体)
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

macro_rules! seed {
    ($app:expr, $ctx:expr) => {{
        let department = $ctx.department("Computing", "CS").await;
        let cluster = $ctx.cluster("Science", "SCI").await;
        let (_, staff) = call!(
            $app,
            test::TestRequest::post().uri("/api/v1/staff").set_json(json!({
                "staff_id": "T1",
                "name": "Grace Hopper",
                "email": "grace@school.test",
                "subject_expertise": "Compilers",
                "qualification": "PhD",
                "department": department.id,
            }))
        );
        let mut students = Vec::new();
        for name in ["amy", "ben", "cal"] {
            let (_, student) = call!(
                $app,
                test::TestRequest::post().uri("/api/v1/students").set_json(json!({
                    "name": name,
                    "email": format!("{name}@school.test"),
                    "cluster": cluster.id,
                    "year_of_admission": 2024,
                }))
            );
            students.push(student["data"]["id"].as_i64().unwrap());
        }
        (staff["data"]["id"].as_i64().unwrap(), students)
    }};
}

macro_rules! create_club {
    ($app:expr, $name:expr, $coordinator:expr, $max:expr) => {{
        let (status, body) = call!(
            $app,
            test::TestRequest::post().uri("/api/v1/clubs").set_json(json!({
                "name": $name,
                "coordinator": $coordinator,
                "max_members": $max,
            }))
        );
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_i64().unwrap()
    }};
}

macro_rules! open_joining {
    ($app:expr, $max_clubs:expr) => {{
        let (status, current) = call!(
            $app,
            test::TestRequest::get().uri("/api/v1/club-settings/current")
        );
        assert_eq!(status, StatusCode::OK);
        let id = current["data"]["id"].as_i64().unwrap();
        let (status, _) = call!(
            $app,
            test::TestRequest::patch()
                .uri(&format!("/api/v1/club-settings/{id}"))
                .set_json(json!({
                    "is_joining_open": true,
                    "max_clubs_per_student": $max_clubs,
                }))
        );
        assert_eq!(status, StatusCode::OK);
        id
    }};
}

#[actix_web::test]
async fn test_join_requires_open_period() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let (coordinator, students) = seed!(app, ctx);
    let club = create_club!(app, "Chess", coordinator, 10);

    let join = |student: i64| {
        test::TestRequest::post()
            .uri(&format!("/api/v1/clubs/{club}/join"))
            .set_json(json!({ "student": student }))
    };

    // 没有设置记录时视为关闭
    let (status, body) = call!(app, join(students[0]));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Club joining period is not active");

    // 开关打开但时间窗已过
    let settings_id = open_joining!(app, 1);
    let now = Utc::now();
    let (status, _) = call!(
        app,
        test::TestRequest::patch()
            .uri(&format!("/api/v1/club-settings/{settings_id}"))
            .set_json(json!({
                "student_join_period_start": now - Duration::days(2),
                "student_join_period_end": now - Duration::days(1),
            }))
    );
    assert_eq!(status, StatusCode::OK);
    let (_, current) = call!(
        app,
        test::TestRequest::get().uri("/api/v1/club-settings/current")
    );
    assert_eq!(current["data"]["is_joining_period_active"], false);
    let (status, _) = call!(app, join(students[0]));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 时间窗覆盖当前时间
    let (status, _) = call!(
        app,
        test::TestRequest::patch()
            .uri(&format!("/api/v1/club-settings/{settings_id}"))
            .set_json(json!({ "student_join_period_end": now + Duration::days(1) }))
    );
    assert_eq!(status, StatusCode::OK);
    let (status, body) = call!(app, join(students[0]));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["student"], students[0]);
    assert_eq!(body["data"]["is_active"], true);
}

#[actix_web::test]
async fn test_join_limits_and_duplicates() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let (coordinator, students) = seed!(app, ctx);
    let chess = create_club!(app, "Chess", coordinator, 10);
    let drama = create_club!(app, "Drama", coordinator, 10);
    open_joining!(app, 1);

    let join = |club: i64, student: i64| {
        test::TestRequest::post()
            .uri(&format!("/api/v1/clubs/{club}/join"))
            .set_json(json!({ "student": student }))
    };

    let (status, _) = call!(app, join(chess, students[0]));
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call!(app, join(chess, students[0]));
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = call!(app, join(drama, students[0]));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Students may join at most 1 club(s)");

    // 管理员添加不受每人上限约束
    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/clubs/{drama}/members"))
            .set_json(json!({ "student": students[0], "is_representative": true }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["is_representative"], true);

    let (status, _) = call!(app, join(chess, 9999));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_full_and_inactive_clubs_reject_members() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let (coordinator, students) = seed!(app, ctx);
    let club = create_club!(app, "Robotics", coordinator, 1);

    let add = |student: i64| {
        test::TestRequest::post()
            .uri(&format!("/api/v1/clubs/{club}/members"))
            .set_json(json!({ "student": student }))
    };

    let (status, _) = call!(app, add(students[0]));
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = call!(app, add(students[1]));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Club has reached its limit of 1 members");

    let (_, body) = call!(
        app,
        test::TestRequest::post().uri(&format!("/api/v1/clubs/{club}/toggle_status"))
    );
    assert_eq!(body["data"]["is_active"], false);
    let (status, body) = call!(app, add(students[2]));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Club is not active");

    // 停用的学生不能加入
    let (_, body) = call!(
        app,
        test::TestRequest::post().uri(&format!("/api/v1/clubs/{club}/toggle_status"))
    );
    assert_eq!(body["data"]["is_active"], true);
    ctx.storage.toggle_student_status(students[2]).await.unwrap();
    let (status, body) = call!(app, add(students[2]));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Student is not active");
}

#[actix_web::test]
async fn test_leave_and_rejoin() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let (coordinator, students) = seed!(app, ctx);
    let club = create_club!(app, "Debate", coordinator, 5);

    let (_, body) = call!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/clubs/{club}/members"))
            .set_json(json!({ "student": students[0] }))
    );
    let member = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri(&format!(
            "/api/v1/clubs/{club}/members/{member}/toggle_representative"
        ))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_representative"], true);

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri(&format!("/api/v1/clubs/{club}/members/{member}/leave"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_active"], false);
    assert!(body["data"]["left_at"].is_string());

    let (_, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/clubs/{club}/members?is_active=true"))
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // 重新加入复用原记录
    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/clubs/{club}/members"))
            .set_json(json!({ "student": students[0] }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], member);
    assert_eq!(body["data"]["is_active"], true);

    let stored = ctx.storage.get_club_member(club, member).await.unwrap().unwrap();
    assert!(stored.left_at.is_none());

    let (status, _) = call!(
        app,
        test::TestRequest::post().uri(&format!("/api/v1/clubs/{club}/members/9999/leave"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_club_and_settings_validation() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);
    let (coordinator, _) = seed!(app, ctx);

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/v1/clubs").set_json(json!({
            "name": "Chess",
            "coordinator": coordinator,
            "max_members": 0,
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["data"]["max_members"][0],
        "Ensure this value is greater than or equal to 1."
    );

    ctx.storage.toggle_staff_status(coordinator).await.unwrap();
    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/v1/clubs").set_json(json!({
            "name": "Chess",
            "coordinator": coordinator,
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["data"]["coordinator"][0],
        "Coordinator must be an active staff member."
    );

    let now = Utc::now();
    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/v1/club-settings").set_json(json!({
            "student_join_period_start": now,
            "student_join_period_end": now - Duration::hours(1),
            "max_clubs_per_student": 0,
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["student_join_period_end"].is_array());
    assert!(body["data"]["max_clubs_per_student"].is_array());
}
