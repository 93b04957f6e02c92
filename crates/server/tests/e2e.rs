use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::routes;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = server::startup::build_state(&models::db::in_memory_config()).await?;
    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_item_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let item_url = format!("{}/items/1", app.base_url);

    let res = c.post(format!("{}/items", app.base_url)).json(&json!({"name": "Widget"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"id": 1, "name": "Widget", "description": ""}));

    let res = c.get(&item_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"id": 1, "name": "Widget", "description": ""}));

    let res = c.put(&item_url).json(&json!({"description": "new"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"id": 1, "name": "Widget", "description": "new"}));

    let res = c.delete(&item_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(&item_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Item not found");
    Ok(())
}

#[tokio::test]
async fn e2e_file_database_persists_across_restart() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("items-e2e-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let cfg = configs::DatabaseConfig {
        url: format!("sqlite://{}/items.db?mode=rwc", dir.display()),
        ..configs::DatabaseConfig::default()
    };

    let state = server::startup::build_state(&cfg).await?;
    let created = state
        .items
        .create(service::item::CreateItemInput { name: Some("kept".into()), description: None })
        .await?;
    drop(state);

    // second startup reuses the existing file and table
    let state = server::startup::build_state(&cfg).await?;
    let found = state.items.get(created.id).await?;
    assert_eq!(found.name, "kept");

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}
