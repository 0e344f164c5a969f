//! API integration tests

use bookshelf_api::{api, repository::Repository, AppState};
use reqwest::Client;
use serde_json::{json, Value};

/// Serve a fresh, empty bookshelf on an ephemeral port and return its base URL
async fn spawn_app() -> String {
    let state = AppState::new(Repository::default());
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}", addr)
}

fn book(name: &str, page_count: u32, read_page: u32, reading: bool) -> Value {
    json!({
        "name": name,
        "year": 2010,
        "author": "John Doe",
        "summary": "Lorem ipsum dolor sit amet",
        "publisher": "Dicoding Indonesia",
        "pageCount": page_count,
        "readPage": read_page,
        "reading": reading
    })
}

async fn add_book(client: &Client, base: &str, payload: &Value) -> String {
    let response = client
        .post(format!("{}/books", base))
        .json(payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["bookId"]
        .as_str()
        .expect("No book ID")
        .to_string()
}

async fn list(client: &Client, base: &str, query: &str) -> Vec<Value> {
    let response = client
        .get(format!("{}/books{}", base, query))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    body["data"]["books"]
        .as_array()
        .expect("No book list")
        .clone()
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 0);
}

#[tokio::test]
async fn test_add_and_get_book() {
    let base = spawn_app().await;
    let client = Client::new();

    let id = add_book(&client, &base, &book("Dunia", 200, 200, false)).await;
    assert_eq!(id.len(), 16);

    let response = client
        .get(format!("{}/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    let stored = &body["data"]["book"];
    assert_eq!(stored["id"], id.as_str());
    assert_eq!(stored["name"], "Dunia");
    assert_eq!(stored["pageCount"], 200);
    assert_eq!(stored["readPage"], 200);
    assert_eq!(stored["finished"], true);
    assert_eq!(stored["reading"], false);
    assert_eq!(stored["insertedAt"], stored["updatedAt"]);
}

#[tokio::test]
async fn test_add_book_validation() {
    let base = spawn_app().await;
    let client = Client::new();

    add_book(&client, &base, &book("Dunia", 200, 200, false)).await;

    let response = client
        .post(format!("{}/books", base))
        .json(&book("Dunia2", 200, 250, false))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "Failed to add book. readPage must not be greater than pageCount"
    );

    let mut nameless = book("", 10, 1, false);
    nameless.as_object_mut().unwrap().remove("name");
    let response = client
        .post(format!("{}/books", base))
        .json(&nameless)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Failed to add book. Please provide the book name");

    assert_eq!(list(&client, &base, "").await.len(), 1);
}

#[tokio::test]
async fn test_add_book_with_null_fields() {
    let base = spawn_app().await;
    let client = Client::new();

    let payload = json!({
        "name": "Dunia",
        "author": null,
        "pageCount": 10,
        "readPage": 1,
        "reading": null
    });
    let id = add_book(&client, &base, &payload).await;

    let body: Value = client
        .get(format!("{}/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let stored = &body["data"]["book"];
    assert_eq!(stored["reading"], false);
    assert_eq!(stored["author"], "");
    assert_eq!(stored["finished"], false);
}

#[tokio::test]
async fn test_malformed_body() {
    let base = spawn_app().await;

    let response = Client::new()
        .post(format!("{}/books", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn test_list_books_with_filters() {
    let base = spawn_app().await;
    let client = Client::new();

    let first = add_book(&client, &base, &book("Dunia Sophie", 100, 100, true)).await;
    add_book(&client, &base, &book("Laskar Pelangi", 100, 20, true)).await;
    add_book(&client, &base, &book("Kisah DUNIA Kecil", 100, 5, false)).await;

    let all = list(&client, &base, "").await;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0]["id"], first.as_str());
    assert_eq!(all[0]["publisher"], "Dicoding Indonesia");
    assert!(all[0].get("pageCount").is_none());

    assert_eq!(list(&client, &base, "?name=dunia").await.len(), 2);
    assert_eq!(list(&client, &base, "?reading=1").await.len(), 2);
    assert_eq!(list(&client, &base, "?reading=0").await.len(), 1);
    assert_eq!(list(&client, &base, "?finished=1").await.len(), 1);

    let both = list(&client, &base, "?name=dunia&reading=1").await;
    assert_eq!(both.len(), 1);
    assert_eq!(both[0]["name"], "Dunia Sophie");

    assert!(list(&client, &base, "?name=harry").await.is_empty());
}

#[tokio::test]
async fn test_update_book() {
    let base = spawn_app().await;
    let client = Client::new();

    let id = add_book(&client, &base, &book("Dunia", 200, 10, false)).await;
    let url = format!("{}/books/{}", base, id);

    let before: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let response = client
        .put(&url)
        .json(&book("Dunia Sophie", 300, 300, true))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Book updated successfully");

    let after: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    let (before, after) = (&before["data"]["book"], &after["data"]["book"]);
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["insertedAt"], before["insertedAt"]);
    assert_ne!(after["updatedAt"], before["updatedAt"]);
    assert_eq!(after["name"], "Dunia Sophie");
    assert_eq!(after["pageCount"], 300);
    assert_eq!(after["finished"], true);
    assert_eq!(after["reading"], true);

    let response = client
        .put(&url)
        .json(&book("Dunia Sophie", 100, 150, true))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Failed to update book. readPage must not be greater than pageCount"
    );
}

#[tokio::test]
async fn test_unknown_id() {
    let base = spawn_app().await;
    let client = Client::new();
    let url = format!("{}/books/xxxxxxxxxxxxxxxx", base);

    let response = client.get(&url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Book not found");

    // Unknown id wins over an invalid payload
    let response = client
        .put(&url)
        .json(&book("", 1, 5, false))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Failed to update book. Id not found");

    let response = client.delete(&url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Failed to delete book. Id not found");
}

#[tokio::test]
async fn test_delete_book() {
    let base = spawn_app().await;
    let client = Client::new();

    let a = add_book(&client, &base, &book("A", 1, 0, false)).await;
    let b = add_book(&client, &base, &book("B", 1, 0, false)).await;
    let c = add_book(&client, &base, &book("C", 1, 0, false)).await;

    let response = client
        .delete(format!("{}/books/{}", base, b))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted successfully");

    let ids: Vec<_> = list(&client, &base, "")
        .await
        .iter()
        .map(|book| book["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, [a, c]);

    let response = client
        .get(format!("{}/books/{}", base, b))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}
