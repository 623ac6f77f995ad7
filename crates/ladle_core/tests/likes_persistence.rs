use ladle_core::db::open_db;
use ladle_core::{LikedRecipe, LikesRepository, LikesService, SqliteLikesRepository};
use rusqlite::params;
use tempfile::TempDir;

fn sample_like(id: &str) -> LikedRecipe {
    LikedRecipe {
        id: id.to_string(),
        title: format!("Recipe {id}"),
        author: "Test Kitchen".to_string(),
        image_url: format!("https://img.example/{id}.jpg"),
    }
}

#[test]
fn liked_set_survives_a_service_restart() {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("ladle.sqlite3");

    {
        let conn = open_db(&db_path).expect("open db");
        let mut service = LikesService::restore(SqliteLikesRepository::new(conn));
        service.add_like(sample_like("r1")).expect("like r1");
        service.add_like(sample_like("r2")).expect("like r2");
    }

    let conn = open_db(&db_path).expect("reopen db");
    let service = LikesService::restore(SqliteLikesRepository::new(conn));
    assert_eq!(service.num_likes(), 2);
    assert!(service.is_liked("r1"));
    assert!(service.is_liked("r2"));
}

#[test]
fn unlike_is_persisted_too() {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("ladle.sqlite3");

    {
        let conn = open_db(&db_path).expect("open db");
        let mut service = LikesService::restore(SqliteLikesRepository::new(conn));
        service.add_like(sample_like("r1")).expect("like r1");
        service.delete_like("r1").expect("unlike r1");
    }

    let conn = open_db(&db_path).expect("reopen db");
    let service = LikesService::restore(SqliteLikesRepository::new(conn));
    assert_eq!(service.num_likes(), 0);
    assert!(!service.is_liked("r1"));
}

#[test]
fn liking_the_same_id_twice_keeps_one_entry() {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("ladle.sqlite3");

    let conn = open_db(&db_path).expect("open db");
    let mut service = LikesService::restore(SqliteLikesRepository::new(conn));
    service.add_like(sample_like("r1")).expect("first like");
    let existing = service.add_like(sample_like("r1")).expect("second like");

    assert_eq!(existing.id, "r1");
    assert_eq!(service.num_likes(), 1);
    assert_eq!(service.likes().len(), 1);
}

#[test]
fn corrupt_payload_degrades_restore_to_an_empty_set() {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("ladle.sqlite3");

    {
        let conn = open_db(&db_path).expect("open db");
        conn.execute(
            "INSERT INTO kv_entries (namespace, payload) VALUES (?1, ?2);",
            params!["likes.v1", "{broken"],
        )
        .expect("seed corrupt payload");
    }

    let conn = open_db(&db_path).expect("reopen db");
    let mut service = LikesService::restore(SqliteLikesRepository::new(conn));
    assert_eq!(service.num_likes(), 0);

    // The degraded set is still usable; the next mutation rewrites the
    // namespaced entry wholesale.
    service.add_like(sample_like("r9")).expect("like after degrade");
    assert!(service.is_liked("r9"));
}

#[test]
fn persist_writes_the_full_set_for_direct_repository_readers() {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("ladle.sqlite3");

    let conn = open_db(&db_path).expect("open db");
    let mut service = LikesService::restore(SqliteLikesRepository::new(conn));
    service.add_like(sample_like("r1")).expect("like r1");
    service.add_like(sample_like("r2")).expect("like r2");
    service.persist().expect("explicit persist");

    let verify_conn = open_db(&db_path).expect("second connection");
    let repo = SqliteLikesRepository::new(verify_conn);
    let stored = repo.load_likes().expect("load stored set");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, "r1");
}
