use super::*;

#[tokio::test]
async fn updates_name_and_icon() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let updated = GuildRepository::new(db)
        .update(
            &guild.id,
            UpdateGuildParam {
                name: "Renamed".to_string(),
                icon_url: Some("https://cdn.example/icon.png".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.icon_url.is_some());

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildRepository::new(db)
        .update(
            "missing",
            UpdateGuildParam {
                name: "Nothing".to_string(),
                icon_url: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
