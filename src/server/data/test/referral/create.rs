use super::*;

#[tokio::test]
async fn creates_referral() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Referral)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let guild = factory::create_guild(db).await?;

    let repo = ReferralRepository::new(db);
    let referral = repo
        .create(ReferralParam {
            user_id: user.id.clone(),
            guild_id: guild.id.clone(),
        })
        .await?;

    assert_eq!(referral.user_id, user.id);
    assert_eq!(referral.guild_id, guild.id);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Expected: Err due to the foreign key on the guild
#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Referral)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = ReferralRepository::new(db)
        .create(ReferralParam {
            user_id: user.id,
            guild_id: "missing".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
