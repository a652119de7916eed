use super::*;

/// Expected: guild created with a default settings row
#[tokio::test]
async fn creates_guild_with_default_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = GuildRepository::new(db)
        .create(CreateGuildParam {
            id: "g1".to_string(),
            name: "Nightwatch".to_string(),
            icon_url: None,
        })
        .await?;

    assert_eq!(guild.id, "g1");
    let settings = GuildSettingsRepository::new(db).get("g1").await?.unwrap();
    assert_eq!(settings.prefix, DEFAULT_GUILD_PREFIX);
    assert!(settings.welcome_message.is_none());

    Ok(())
}
