use blogstore::db::init_db;
use blogstore::{AuthorId, EntryId, Repository, TopicId};
use tempfile::TempDir;

async fn setup_repo() -> (Repository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("blog.sqlite")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    (Repository::new(pool), temp_dir)
}

#[tokio::test]
async fn test_get_or_create_is_idempotent_for_many_names() {
    let (repo, _temp) = setup_repo().await;

    for name in ["Karen", "Sam", "Nathan", "", "  spaced  ", "Ünïcødé"] {
        let a1 = repo.insert_author(name).await.unwrap();
        let a2 = repo.insert_author(name).await.unwrap();
        assert_eq!(a1, a2, "author {:?}", name);

        let t1 = repo.insert_topic(name).await.unwrap();
        let t2 = repo.insert_topic(name).await.unwrap();
        assert_eq!(t1, t2, "topic {:?}", name);
    }

    assert_eq!(repo.get_all_authors().await.unwrap().len(), 6);
    assert_eq!(repo.get_all_topics().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_entry_count_tracks_inserts() {
    let (repo, _temp) = setup_repo().await;
    assert!(repo.get_all_entries().await.unwrap().is_empty());

    for i in 0..10 {
        let author = if i % 2 == 0 { "Karen" } else { "Sam" };
        let inserted = repo
            .insert_entry(&format!("title {}", i), "content", author, "Stuff")
            .await
            .unwrap();
        let fetched = repo.get_entry_by_id(inserted.entry_id).await.unwrap();
        assert_eq!(fetched, Some(inserted));
    }

    let entries = repo.get_all_entries().await.unwrap();
    assert_eq!(entries.len(), 10);
    assert!(entries.windows(2).all(|w| w[0].entry_id < w[1].entry_id));
}

#[tokio::test]
async fn test_delete_then_get_is_absent_for_each_kind() {
    let (repo, _temp) = setup_repo().await;

    let entry = repo
        .insert_entry("Hi", "Hi how are you", "Karen", "Thoughts")
        .await
        .unwrap();
    repo.delete_entry(entry.entry_id).await.unwrap();
    assert!(repo.get_entry_by_id(entry.entry_id).await.unwrap().is_none());

    // Author and topic are free once their only entry is gone.
    repo.delete_author(entry.author_id).await.unwrap();
    assert!(repo.get_author_by_id(entry.author_id).await.unwrap().is_none());

    repo.delete_topic(entry.topic_id).await.unwrap();
    assert!(repo.get_topic_by_id(entry.topic_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleting_unknown_ids_leaves_store_unchanged() {
    let (repo, _temp) = setup_repo().await;
    repo.insert_entry("Hi", "Hi how are you", "Karen", "Thoughts")
        .await
        .unwrap();
    let before = (
        repo.get_all_entries().await.unwrap(),
        repo.get_all_authors().await.unwrap(),
        repo.get_all_topics().await.unwrap(),
    );

    repo.delete_entry(EntryId::new(404)).await.unwrap();
    repo.delete_author(AuthorId::new(404)).await.unwrap();
    repo.delete_topic(TopicId::new(404)).await.unwrap();

    let after = (
        repo.get_all_entries().await.unwrap(),
        repo.get_all_authors().await.unwrap(),
        repo.get_all_topics().await.unwrap(),
    );
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("blog.sqlite")
        .to_string_lossy()
        .to_string();

    let repo = Repository::new(init_db(&db_path).await.unwrap());
    let entry = repo
        .insert_entry("Hi", "Hi how are you", "Karen", "Thoughts")
        .await
        .unwrap();
    drop(repo);

    let repo = Repository::new(init_db(&db_path).await.unwrap());
    assert_eq!(repo.get_entry_by_id(entry.entry_id).await.unwrap(), Some(entry));
}
