use super::*;

#[tokio::test]
async fn replaces_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .set(
            &guild.id,
            UpdateGuildSettingsParam {
                prefix: "?".to_string(),
                welcome_message: Some("Welcome!".to_string()),
                suggestions_channel_id: Some("123".to_string()),
                support_channel_id: None,
            },
        )
        .await?;

    assert_eq!(settings.prefix, "?");
    assert_eq!(repo.get(&guild.id).await?, Some(settings));

    Ok(())
}
