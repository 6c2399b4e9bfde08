//! 按客户端 IP 计数的固定窗口限流。
//!
//! 计数保存在进程内的 moka 缓存里，条目写入 60 秒后过期，窗口随之重置。
//! 每个端点用自己的前缀，互不占用额度：
//!
//! ```rust,ignore
//! web::resource("/bulk_upload")
//!     .wrap(RateLimit::bulk_upload())
//!     .route(web::post().to(bulk_upload))
//! ```
//!
//! 超出额度的请求直接得到 429，并带 `Retry-After`。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

const WINDOW_SECS: u64 = 60;

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";

// "{prefix}:ip:{addr}" -> 本窗口内已放行次数
static HITS: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(WINDOW_SECS))
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 每个 IP 每分钟 5 次
    pub fn bulk_upload() -> Self {
        Self::new(5, WINDOW_SECS).with_prefix("bulk_upload")
    }

    /// 每个 IP 每分钟 10 次，凭据补发与密码重置共用
    pub fn credentials() -> Self {
        Self::new(10, WINDOW_SECS).with_prefix("credentials")
    }
}

fn limit_key(prefix: &str, client_ip: &str) -> String {
    if prefix.is_empty() {
        format!("ip:{client_ip}")
    } else {
        format!("{prefix}:ip:{client_ip}")
    }
}

/// 依次取对端地址、`X-Forwarded-For` 的第一项、`X-Real-IP`，只接受能解析成 IP 的值。
/// 转发头可被客户端伪造，只有在可信代理之后才有意义。
fn client_ip(req: &ServiceRequest) -> String {
    let peer = req
        .connection_info()
        .realip_remote_addr()
        .map(str::to_string);
    if let Some(ip) = peer.as_deref().filter(|ip| is_valid_ip(ip)) {
        return ip.to_string();
    }

    let from_header = |name: &str, first_only: bool| {
        let value = req.headers().get(name)?.to_str().ok()?;
        let value = if first_only {
            value.split(',').next()?
        } else {
            value
        };
        Some(value.trim().to_string()).filter(|ip| is_valid_ip(ip))
    };

    from_header("X-Forwarded-For", true)
        .or_else(|| from_header("X-Real-IP", false))
        .or(peer)
        .unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

fn too_many_requests(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header((REMAINING_HEADER, "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let RateLimit {
            max_requests,
            window_secs,
            key_prefix,
        } = self.limit.clone();

        Box::pin(async move {
            let key = limit_key(&key_prefix, &client_ip(&req));
            let used = HITS.get(&key).await.unwrap_or(0);

            if used >= max_requests {
                warn!("Rate limit hit for {key} ({used}/{max_requests})");
                return Ok(req.into_response(too_many_requests(window_secs).map_into_right_body()));
            }

            HITS.insert(key, used + 1).await;
            let remaining = max_requests - used - 1;

            let mut res = srv.call(req).await?;
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static(LIMIT_HEADER),
                HeaderValue::from(max_requests),
            );
            headers.insert(
                HeaderName::from_static(REMAINING_HEADER),
                HeaderValue::from(remaining),
            );
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as actix_test, web};

    #[test]
    fn test_rate_limit_presets() {
        let upload = RateLimit::bulk_upload();
        assert_eq!(upload.max_requests, 5);
        assert_eq!(upload.window_secs, 60);
        assert_eq!(upload.key_prefix, "bulk_upload");

        let credentials = RateLimit::credentials();
        assert_eq!(credentials.max_requests, 10);
        assert_eq!(credentials.key_prefix, "credentials");
    }

    #[test]
    fn test_is_valid_ip() {
        assert!(is_valid_ip("10.0.0.1"));
        assert!(is_valid_ip("::1"));
        assert!(!is_valid_ip("not-an-ip"));
    }

    #[test]
    fn test_limit_key() {
        assert_eq!(limit_key("", "10.0.0.1"), "ip:10.0.0.1");
        assert_eq!(
            limit_key("bulk_upload", "10.0.0.1"),
            "bulk_upload:ip:10.0.0.1"
        );
    }

    #[actix_web::test]
    async fn test_requests_over_limit_get_429() {
        let app = actix_test::init_service(
            App::new().service(
                web::resource("/limited")
                    .wrap(RateLimit::new(2, 60).with_prefix("unit_test_limited"))
                    .route(web::post().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let peer = "10.250.0.1:40000".parse().unwrap();
        for expected_remaining in ["1", "0"] {
            let req = actix_test::TestRequest::post()
                .uri("/limited")
                .peer_addr(peer)
                .to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert!(resp.status().is_success());
            assert_eq!(
                resp.headers().get("X-RateLimit-Remaining").unwrap(),
                expected_remaining
            );
        }

        let req = actix_test::TestRequest::post()
            .uri("/limited")
            .peer_addr(peer)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get("Retry-After").unwrap(), "60");

        // 其他 IP 不受影响
        let req = actix_test::TestRequest::post()
            .uri("/limited")
            .peer_addr("10.250.0.2:40000".parse().unwrap())
            .to_request();
        assert!(
            actix_test::call_service(&app, req)
                .await
                .status()
                .is_success()
        );
    }
}
