mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn add_user_preserves_role_order() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let account = common::create_account(&client, &server.base_url, "users-roles-order").await?;
    let account_id = account["id"].as_str().unwrap();

    let res = client
        .post(format!(
            "{}/v3/accounts/{}/users",
            server.base_url, account_id
        ))
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@acme.com",
            "phone": "+15550100",
            "unique_id": "ext-42",
            "roles": ["admin", "viewer"]
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;

    assert_eq!(body["roles"], json!(["admin", "viewer"]));
    assert_eq!(body["account_id"], account["id"]);
    assert_eq!(body["created_by"], "system");
    assert_eq!(body["modified_by"], "system");
    assert!(!body["user_id"].as_str().unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
async fn list_users_returns_added_users() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let account = common::create_account(&client, &server.base_url, "users-list").await?;
    let account_id = account["id"].as_str().unwrap();

    for (name, email) in [("a", "a@acme.com"), ("b", "b@acme.com")] {
        let res = client
            .post(format!(
                "{}/v3/accounts/{}/users",
                server.base_url, account_id
            ))
            .json(&json!({
                "name": name,
                "email": email,
                "phone": "",
                "unique_id": name,
                "roles": ["viewer"]
            }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = client
        .get(format!(
            "{}/v3/accounts/{}/users",
            server.base_url, account_id
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let users = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(users.len(), 2);
    // No ordering guarantee across rows
    let mut emails: Vec<&str> = users.iter().filter_map(|u| u["email"].as_str()).collect();
    emails.sort_unstable();
    assert_eq!(emails, vec!["a@acme.com", "b@acme.com"]);
    Ok(())
}

#[tokio::test]
async fn list_users_empty_for_account_without_users() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let account = common::create_account(&client, &server.base_url, "users-empty").await?;
    let account_id = account["id"].as_str().unwrap();

    let res = client
        .get(format!(
            "{}/v3/accounts/{}/users",
            server.base_url, account_id
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Vec<serde_json::Value>>().await?.len(), 0);
    Ok(())
}

#[tokio::test]
async fn add_user_to_unknown_account_is_a_persistence_error() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Foreign-key violation surfaces as 500, never a silent success
    let res = client
        .post(format!(
            "{}/v3/accounts/{}/users",
            server.base_url,
            uuid::Uuid::new_v4()
        ))
        .json(&json!({
            "name": "orphan",
            "email": "orphan@acme.com",
            "phone": "",
            "unique_id": "orphan",
            "roles": []
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn list_users_of_unknown_account_is_empty() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/v3/accounts/{}/users",
            server.base_url,
            uuid::Uuid::new_v4()
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Vec<serde_json::Value>>().await?.len(), 0);
    Ok(())
}
