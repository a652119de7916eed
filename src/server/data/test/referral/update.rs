use super::*;

#[tokio::test]
async fn moves_referral_to_another_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Referral)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;

    let repo = ReferralRepository::new(db);
    let referral = repo
        .create(ReferralParam {
            user_id: user.id.clone(),
            guild_id: guild.id.clone(),
        })
        .await?;

    let updated = repo
        .update(
            referral.id,
            ReferralParam {
                user_id: user.id.clone(),
                guild_id: other.id.clone(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.guild_id, other.id);
    assert!(repo.delete(referral.id).await?);
    assert!(repo
        .update(
            referral.id,
            ReferralParam {
                user_id: user.id,
                guild_id: other.id,
            },
        )
        .await?
        .is_none());

    Ok(())
}
