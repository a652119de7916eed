use super::*;

/// Tests that updating replaces the item list instead of merging it.
///
/// Expected: only the new items remain
#[tokio::test]
async fn replaces_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (giveaway, _) = factory::GiveawayFactory::new(db, "g1")
        .item("Old prize", Some("OLD"))
        .item("Another", None)
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let updated = repo
        .update(
            giveaway.id,
            UpdateGiveawayParam {
                title: "Updated".to_string(),
                description: None,
                date_end: giveaway.date_end,
                items: vec![item("New prize", Some("NEW"))],
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].name, "New prize");
    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert_eq!(stored.items, updated.items);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GiveawayRepository::new(db)
        .update(
            99,
            UpdateGiveawayParam {
                title: "Nothing".to_string(),
                description: None,
                date_end: Utc::now(),
                items: Vec::new(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
