use super::*;

/// Expected: referral returned with its user and guild
#[tokio::test]
async fn includes_user_and_guild() -> Result<(), DbErr> {
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

    let details = repo.find_details(referral.id).await?.unwrap();

    assert_eq!(details.referral, referral);
    assert_eq!(details.user.unwrap().name, user.name);
    assert_eq!(details.guild.unwrap().name, guild.name);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Referral)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ReferralRepository::new(db).find_details(42).await?.is_none());

    Ok(())
}
