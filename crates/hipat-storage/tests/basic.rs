use hipat_storage::prelude::*;
use hipat_types::prelude::MentorId;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
struct Card {
    id: String,
    mentor: MentorId,
    label: String,
}

impl Entity for Card {
    const TABLE: &'static str = "card";

    fn id(&self) -> &str {
        &self.id
    }

    fn mentor(&self) -> &MentorId {
        &self.mentor
    }
}

#[tokio::test]
async fn repository_roundtrip_with_simulated_latency() {
    let store = MemoryDatastore::new().with_latency_ms(5);
    let repo: InMemoryRepository<Card> = InMemoryRepository::new(&store);
    let mentor = MentorId("m1".into());

    let card = Card {
        id: "card-1".into(),
        mentor: mentor.clone(),
        label: "warmup".into(),
    };

    let started = std::time::Instant::now();
    repo.create(&mentor, &card).await.expect("create");
    assert!(started.elapsed().as_millis() >= 5);

    let fetched = repo.get(&mentor, "card-1").await.unwrap().unwrap();
    assert_eq!(fetched, card);

    let page = repo
        .select(&mentor, QueryParams::default())
        .await
        .expect("select");
    assert_eq!(page.items.len(), 1);

    repo.delete(&mentor, "card-1").await.expect("delete");
    assert!(repo.get(&mentor, "card-1").await.unwrap().is_none());
}

#[tokio::test]
async fn upsert_creates_when_absent() {
    let store = MemoryDatastore::new();
    let repo: InMemoryRepository<Card> = InMemoryRepository::new(&store);
    let mentor = MentorId("m2".into());

    let card = repo
        .upsert(&mentor, "card-9", json!({"label": "cooldown"}))
        .await
        .expect("upsert");
    assert_eq!(card.label, "cooldown");
    assert_eq!(card.mentor, mentor);
}
