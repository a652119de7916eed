use super::*;

fn param(guild_id: &str, user_id: &str) -> CreateSuggestionParam {
    CreateSuggestionParam {
        guild_id: guild_id.to_string(),
        user_id: user_id.to_string(),
        content: "Add a music channel".to_string(),
    }
}

/// Expected: suggestion created pending review
#[tokio::test]
async fn creates_pending_suggestion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db).await?;

    let suggestion = GuildSuggestionRepository::new(db)
        .create(param(&guild.id, &user.id))
        .await?;

    assert_eq!(suggestion.guild_id, guild.id);
    assert!(suggestion.approved.is_none());

    Ok(())
}

/// Tests that nested lookups never cross guild boundaries.
///
/// Expected: find/update/delete through another guild all miss
#[tokio::test]
async fn scopes_lookups_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GuildSuggestionRepository::new(db);
    let suggestion = repo.create(param(&guild.id, &user.id)).await?;

    assert!(repo.find_in_guild(&other.id, suggestion.id).await?.is_none());
    assert!(repo
        .update(
            &other.id,
            suggestion.id,
            UpdateSuggestionParam {
                content: "hijacked".to_string(),
                approved: Some(true),
            },
        )
        .await?
        .is_none());
    assert!(!repo.delete(&other.id, suggestion.id).await?);
    assert!(repo.get_by_guild(&other.id).await?.is_empty());

    let stored = repo.find_in_guild(&guild.id, suggestion.id).await?.unwrap();
    assert_eq!(stored.content, "Add a music channel");

    Ok(())
}

#[tokio::test]
async fn approves_suggestion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GuildSuggestionRepository::new(db);
    let suggestion = repo.create(param(&guild.id, &user.id)).await?;

    let updated = repo
        .update(
            &guild.id,
            suggestion.id,
            UpdateSuggestionParam {
                content: suggestion.content.clone(),
                approved: Some(true),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.approved, Some(true));

    Ok(())
}
