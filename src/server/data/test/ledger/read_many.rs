use super::*;

/// Expected: only existing accounts are returned
#[tokio::test]
async fn skips_missing_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::create_funded_user(db, 40).await?;

    let store = SeaOrmLedgerStore::new(db.clone());
    let accounts = store
        .read_many(&[user.id.clone(), "missing".to_string()])
        .await
        .unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, user.id);
    assert_eq!(accounts[0].balance, 40);
    assert_eq!(accounts[0].version, 0);

    Ok(())
}
