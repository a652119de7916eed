use super::*;

#[tokio::test]
async fn creates_giveaway_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = GiveawayRepository::new(db)
        .create(CreateGiveawayParam {
            guild_id: "g1".to_string(),
            title: "Launch week".to_string(),
            description: Some("Two prizes".to_string()),
            date_end: Utc::now() + Duration::days(3),
            items: vec![item("Game", Some("AAAA-BBBB")), item("Sticker", None)],
        })
        .await?;

    assert_eq!(giveaway.items.len(), 2);
    assert_eq!(giveaway.items[0].key.as_deref(), Some("AAAA-BBBB"));

    let stored = GiveawayRepository::new(db)
        .find_by_id(giveaway.id)
        .await?
        .unwrap();
    assert_eq!(stored, giveaway);

    Ok(())
}
