use blogstore::api::{self, AppState};
use blogstore::client::{print_titles_by_author, ClientError, EntrySource, HttpEntrySource};
use blogstore::db::init_db;
use blogstore::Repository;
use std::sync::Arc;
use tempfile::TempDir;

/// Serve the real router on an ephemeral port and return its base URL.
async fn spawn_server() -> (String, Arc<Repository>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("blog.sqlite")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));
    let app = api::create_router(AppState::new(repo.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), repo, temp_dir)
}

#[tokio::test]
async fn test_reader_lists_titles_from_live_api() {
    let (base_url, repo, _temp) = spawn_server().await;
    repo.insert_entry("Hi", "Hi how are you", "Karen", "Thoughts")
        .await
        .unwrap();
    repo.insert_entry("Hello", "Hello how are you", "Sam", "Stuff")
        .await
        .unwrap();
    repo.insert_entry("Again", "more", "Karen", "Stuff")
        .await
        .unwrap();

    let source = HttpEntrySource::new(base_url);
    let entries = source.fetch_entries().await.unwrap();
    assert_eq!(entries.len(), 3);

    let mut out = Vec::new();
    let printed = print_titles_by_author(&source, "Karen", &mut out)
        .await
        .unwrap();
    assert_eq!(printed, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Here are the entry titles associated with the author:\nHi\nAgain\n"
    );
}

#[tokio::test]
async fn test_client_error_on_wrong_path_is_permanent() {
    let (base_url, _repo, _temp) = spawn_server().await;
    let source = HttpEntrySource::new(format!("{}/nowhere", base_url));

    let err = source.fetch_entries().await.unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 404, .. }));
}
