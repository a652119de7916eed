use super::*;

#[tokio::test]
async fn opens_and_closes_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GuildSupportTicketRepository::new(db);
    let ticket = repo
        .create(CreateSupportTicketParam {
            guild_id: guild.id.clone(),
            user_id: user.id.clone(),
            subject: "Bot offline".to_string(),
            message: "The bot stopped responding".to_string(),
        })
        .await?;
    assert!(ticket.open);

    let closed = repo
        .update(
            &guild.id,
            ticket.id,
            UpdateSupportTicketParam {
                subject: ticket.subject.clone(),
                message: ticket.message.clone(),
                open: false,
            },
        )
        .await?
        .unwrap();

    assert!(!closed.open);
    assert_eq!(repo.get_by_guild(&guild.id).await?.len(), 1);

    Ok(())
}

/// Expected: ticket of another guild is not found or deleted
#[tokio::test]
async fn scopes_lookups_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GuildSupportTicketRepository::new(db);
    let ticket = repo
        .create(CreateSupportTicketParam {
            guild_id: guild.id.clone(),
            user_id: user.id.clone(),
            subject: "Help".to_string(),
            message: "Please".to_string(),
        })
        .await?;

    assert!(repo.find_in_guild(&other.id, ticket.id).await?.is_none());
    assert!(!repo.delete(&other.id, ticket.id).await?);
    assert!(repo.delete(&guild.id, ticket.id).await?);

    Ok(())
}
