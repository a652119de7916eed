use super::*;

#[tokio::test]
async fn deletes_giveaway_and_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (giveaway, _) = factory::GiveawayFactory::new(db, "g1")
        .item("Prize", Some("KEY"))
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);

    assert!(repo.delete(giveaway.id).await?);
    assert!(repo.find_by_id(giveaway.id).await?.is_none());
    assert!(!repo.delete(giveaway.id).await?);

    Ok(())
}
