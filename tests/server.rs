//! End-to-end tests of the dispatch server.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use action_router::config::RouterConfig;
use action_router::{ActionPathResolver, HttpServer};

mod common;

use common::{action, action_with, client, registry, start_router};

#[tokio::test]
async fn test_resolves_action_over_http() {
    let router = start_router(
        RouterConfig::default(),
        registry(&[action("app.web.SeaAction"), action_with("app.web.sea.SeaLandAction", "index", 1)]),
    )
    .await;

    let res = client().get(router.url("/sea/land/3/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["action"], "sea_seaLandAction");
    assert_eq!(body["identity"], "app.web.sea.SeaLandAction");
    assert_eq!(body["execute"], "index");
    assert_eq!(body["parameters"], serde_json::json!(["3"]));
    assert_eq!(body["action_path"], "/sea/land/");
}

#[tokio::test]
async fn test_not_found_lists_expected_actions() {
    let router = start_router(RouterConfig::default(), registry(&[action("app.web.SeaAction")])).await;

    let res = client().get(router.url("/foo/bar/")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["path"], "/foo/bar/");
    assert_eq!(
        body["expected"],
        serde_json::json!([
            "foo.FooBarAction#index()",
            "foo.FooAction#bar()",
            "foo.bar.FooBarAction#index()"
        ])
    );
    assert!(body["message"].as_str().unwrap().contains("app.web.foo.FooBarAction#index()"));
}

#[tokio::test]
async fn test_registry_reload_takes_effect() {
    let router = start_router(RouterConfig::default(), registry(&[action("app.web.SeaAction")])).await;

    let res = client().get(router.url("/land/")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    router.updates.send(registry(&[action("app.web.LandAction")])).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let res = client().get(router.url("/land/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let res = client().get(router.url("/sea/")).send().await.unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_admin_requires_bearer_key() {
    let mut config = RouterConfig::default();
    config.admin.enabled = true;
    config.admin.api_key = "secret".into();
    let router = start_router(config, registry(&[action("app.web.sea.SeaLandAction")])).await;

    let res = client().get(router.url("/_admin/status")).send().await.unwrap();
    assert_eq!(res.status(), 401);

    let res = client()
        .get(router.url("/_admin/actions"))
        .bearer_auth("secret")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body[0]["name"], "sea_seaLandAction");
    assert_eq!(body[0]["action_path"], "/sea/land/");

    let res = client()
        .get(router.url("/_admin/url"))
        .query(&[("identity", "app.web.sea.SeaLandAction"), ("parts", "3"), ("redirect", "true")])
        .bearer_auth("secret")
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["url"], "/sea/land/3/?redirect=true");

    let res = client()
        .get(router.url("/_admin/url"))
        .query(&[("identity", "app.web.SeaAction"), ("params", "status")])
        .bearer_auth("secret")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn test_in_process_dispatch_with_prefix() {
    let mut config = RouterConfig::default();
    config.adjustment.request_path_prefix = Some("/api".into());
    let server = HttpServer::new(
        config.clone(),
        ActionPathResolver::from_config(&config),
        registry(&[action("app.web.RootAction"), action("app.web.SeaAction")]),
    );

    let res = server
        .router()
        .oneshot(Request::builder().uri("/api/sea/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = server
        .router()
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["action"], "rootAction");

    // admin is disabled, so /_admin paths go through resolution
    let res = server
        .router()
        .oneshot(Request::builder().uri("/_admin/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
