use super::*;

#[tokio::test]
async fn adds_updates_and_removes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GuildMemberRepository::new(db);
    let member = repo
        .create(CreateGuildMemberParam {
            guild_id: guild.id.clone(),
            user_id: user.id.clone(),
            nickname: None,
        })
        .await?;
    assert_eq!(member.user_id, user.id);

    let renamed = repo
        .update_nickname(&guild.id, &user.id, Some("Watcher".to_string()))
        .await?
        .unwrap();
    assert_eq!(renamed.nickname.as_deref(), Some("Watcher"));

    assert!(repo.delete(&guild.id, &user.id).await?);
    assert!(repo.find(&guild.id, &user.id).await?.is_none());

    Ok(())
}
