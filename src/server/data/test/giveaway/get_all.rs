use super::*;

/// Expected: each giveaway carries only its own items
#[tokio::test]
async fn loads_items_per_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (first, _) = factory::GiveawayFactory::new(db, "g1")
        .item("A", None)
        .build()
        .await?;
    let (second, _) = factory::GiveawayFactory::new(db, "g1")
        .item("B", None)
        .item("C", None)
        .build()
        .await?;

    let giveaways = GiveawayRepository::new(db).get_all().await?;

    assert_eq!(giveaways.len(), 2);
    let first = giveaways.iter().find(|g| g.id == first.id).unwrap();
    let second = giveaways.iter().find(|g| g.id == second.id).unwrap();
    assert_eq!(first.items.len(), 1);
    assert_eq!(second.items.len(), 2);

    Ok(())
}
