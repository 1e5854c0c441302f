//! End-to-end tests over a real TCP listener.

use std::fmt::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use param_router::{Context, RouteTable};
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_welcome() {
    let server = common::start_example_server().await;
    let res = common::client().get(server.url("/")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    assert_eq!(res.text().await.unwrap(), "Welcome!\n");
}

#[tokio::test]
async fn test_plus_and_power() {
    let server = common::start_example_server().await;
    let client = common::client();

    let body = client.get(server.url("/plus/2/5")).send().await.unwrap().text().await.unwrap();
    assert_eq!(body, "2 + 5 = 7");

    let body = client.get(server.url("/power/2/10")).send().await.unwrap().text().await.unwrap();
    assert_eq!(body, "2 ^ 10 = 1024");

    let body = client.get(server.url("/power/2/20")).send().await.unwrap().text().await.unwrap();
    assert_eq!(body, "2 ^ 20 = 1.048576e+06");

    let body = client.get(server.url("/plus/abc/3")).send().await.unwrap().text().await.unwrap();
    assert_eq!(body, "0 + 3 = 3");
}

#[tokio::test]
async fn test_not_found_for_path_and_method() {
    let server = common::start_example_server().await;
    let client = common::client();

    for res in [
        client.get(server.url("/plus/2")).send().await.unwrap(),
        client.get(server.url("/unknown")).send().await.unwrap(),
        client.post(server.url("/plus/2/5")).send().await.unwrap(),
        client.delete(server.url("/")).send().await.unwrap(),
    ] {
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()["x-content-type-options"], "nosniff");
        assert_eq!(res.text().await.unwrap(), "404 page not found\n");
    }
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = common::start_example_server().await;
    let client = common::client();

    let first = client.get(server.url("/")).send().await.unwrap();
    let second = client.get(server.url("/nowhere")).send().await.unwrap();

    let a = first.headers()["x-request-id"].to_str().unwrap().to_string();
    let b = second.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(!a.is_empty());
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_concurrent_requests_each_get_own_params() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let mut table = RouteTable::new();
    table.register("GET", "/echo/:value", move |ctx: &mut Context<'_>| {
        counter.fetch_add(1, Ordering::SeqCst);
        let value = ctx.param("value").unwrap_or_default().to_string();
        let _ = ctx.response().write_str(&value);
    });
    let server = common::start_server(table).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..32 {
        let client = client.clone();
        let url = server.url(&format!("/echo/{i}"));
        tasks.push(tokio::spawn(async move {
            let body = client.get(url).send().await.unwrap().text().await.unwrap();
            (i, body)
        }));
    }

    for task in tasks {
        let (i, body) = task.await.unwrap();
        assert_eq!(body, i.to_string());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 32);
}

#[tokio::test]
async fn test_shutdown_stops_server() {
    let server = common::start_example_server().await;
    let body = common::client().get(server.url("/")).send().await.unwrap().text().await.unwrap();
    assert_eq!(body, "Welcome!\n");

    server.shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop after shutdown")
        .unwrap();
}
