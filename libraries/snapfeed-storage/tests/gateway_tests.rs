/// Integration tests for the document store gateway
///
/// Runs against `MemoryStore`; the MongoDB test only runs when
/// `SNAPFEED_TEST_MONGO_URI` points at a reachable server.
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use chrono::{TimeZone, Utc};
use snapfeed_core::{
    credentials::hash_password, Collection, CoreError, CreatePost, CreateUser, DocumentStore,
    Result,
};
use snapfeed_storage::{posts, users, Bounded, Deadlines, MemoryStore, MongoStore};
use std::time::Duration;

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: hash_password("password123"),
    }
}

/// Store whose every call hangs for a minute
struct StalledStore;

#[async_trait]
impl DocumentStore for StalledStore {
    async fn insert(&self, _collection: Collection, _document: Document) -> Result<ObjectId> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(ObjectId::new())
    }

    async fn find_by_id(&self, _collection: Collection, _id: ObjectId) -> Result<Document> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Document::new())
    }

    async fn find_all(&self, _collection: Collection) -> Result<Vec<Document>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_user_creation_and_retrieval() {
    let store = MemoryStore::new();

    let id = users::create(&store, &new_user("alice@example.com"))
        .await
        .expect("Failed to create user");

    let user = users::get(&store, id).await.expect("Failed to get user");
    assert_eq!(user.id, id);
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password, hash_password("password123"));
}

#[tokio::test]
async fn test_email_taken_is_exact_match() {
    let store = MemoryStore::new();
    users::create(&store, &new_user("bob@example.com")).await.unwrap();

    assert!(users::email_taken(&store, "bob@example.com").await.unwrap());
    assert!(!users::email_taken(&store, "Bob@example.com").await.unwrap());
    assert!(!users::email_taken(&store, "carol@example.com").await.unwrap());
}

#[tokio::test]
async fn test_get_nonexistent_user() {
    let store = MemoryStore::new();

    let result = users::get(&store, ObjectId::new()).await;
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_post_round_trip_keeps_fields() {
    let store = MemoryStore::new();
    let timestamp = Utc.with_ymd_and_hms(2021, 10, 9, 12, 30, 0).unwrap();

    let id = posts::create(
        &store,
        &CreatePost {
            caption: "hello".to_string(),
            image_url: "http://x/img.png".to_string(),
            timestamp,
        },
    )
    .await
    .unwrap();

    let post = posts::get(&store, id).await.unwrap();
    assert_eq!(post.caption, "hello");
    assert_eq!(post.image_url, "http://x/img.png");
    assert_eq!(post.timestamp, timestamp);
}

#[tokio::test]
async fn test_list_posts_empty() {
    let store = MemoryStore::new();

    let all = posts::list(&store).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_list_posts_returns_every_post() {
    let store = MemoryStore::new();
    for caption in ["one", "two", "three"] {
        posts::create(
            &store,
            &CreatePost {
                caption: caption.to_string(),
                image_url: format!("http://x/{caption}.png"),
                timestamp: Utc::now(),
            },
        )
        .await
        .unwrap();
    }

    let mut captions: Vec<String> = posts::list(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.caption)
        .collect();
    captions.sort();
    assert_eq!(captions, vec!["one", "three", "two"]);
}

#[tokio::test]
async fn test_malformed_document_is_serialization_error() {
    let store = MemoryStore::new();
    let id = store
        .insert(Collection::Users, doc! { "name": "no email" })
        .await
        .unwrap();

    let result = users::get(&store, id).await;
    assert!(matches!(result, Err(CoreError::Serialization(_))));
}

#[tokio::test(start_paused = true)]
async fn test_bounded_store_times_out() {
    let deadlines = Deadlines {
        operation: Duration::from_secs(15),
        scan: Duration::from_secs(10),
    };
    let store = Bounded::new(StalledStore, deadlines);

    let err = store.find_all(Collection::Posts).await.unwrap_err();
    match err {
        CoreError::Timeout { operation, after } => {
            assert_eq!(operation, "find_all");
            assert_eq!(after, Duration::from_secs(10));
        }
        other => panic!("expected timeout, got {other:?}"),
    }

    let err = store.insert(Collection::Users, Document::new()).await.unwrap_err();
    assert!(matches!(
        err,
        CoreError::Timeout { operation: "insert", .. }
    ));
}

#[tokio::test]
async fn test_bounded_store_passes_results_through() {
    let store = Bounded::new(MemoryStore::new(), Deadlines::default());

    let id = users::create(&store, &new_user("dave@example.com")).await.unwrap();
    assert_eq!(users::get(&store, id).await.unwrap().email, "dave@example.com");
    assert_eq!(store.inner().len(Collection::Users), 1);
}

/// Exercises the real driver; set `SNAPFEED_TEST_MONGO_URI` to enable
#[tokio::test]
async fn test_mongo_store_round_trip() {
    let Ok(uri) = std::env::var("SNAPFEED_TEST_MONGO_URI") else {
        eprintln!("SNAPFEED_TEST_MONGO_URI not set, skipping");
        return;
    };

    let database = format!("snapfeed_test_{}", ObjectId::new().to_hex());
    let store = MongoStore::connect(&uri, &database, Duration::from_secs(5))
        .await
        .expect("Failed to connect to MongoDB");
    store.ensure_indexes().await.unwrap();

    let id = users::create(&store, &new_user("eve@example.com")).await.unwrap();
    assert_eq!(users::get(&store, id).await.unwrap().email, "eve@example.com");

    let duplicate = users::create(&store, &new_user("eve@example.com")).await;
    assert!(matches!(duplicate, Err(CoreError::Conflict(_))));

    let missing = users::get(&store, ObjectId::new()).await;
    assert!(matches!(missing, Err(CoreError::NotFound { .. })));

    store.client().database(&database).drop(None).await.unwrap();
}
