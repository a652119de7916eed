use super::*;

/// Expected: guild removed along with its settings row
#[tokio::test]
async fn deletes_guild_and_cascades_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.create(CreateGuildParam {
        id: "g1".to_string(),
        name: "Nightwatch".to_string(),
        icon_url: None,
    })
    .await?;

    assert!(repo.delete("g1").await?);
    assert!(repo.find_by_id("g1").await?.is_none());
    assert!(entity::prelude::GuildSettings::find_by_id("g1")
        .one(db)
        .await?
        .is_none());
    assert!(!repo.delete("g1").await?);

    Ok(())
}
