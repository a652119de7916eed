use super::*;

/// Tests that a unit whose versions all match is applied in full.
///
/// Expected: both rows updated and versions bumped by one
#[tokio::test]
async fn applies_all_writes_when_versions_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (a, _) = factory::create_funded_user(db, 50).await?;
    let (b, _) = factory::create_funded_user(db, 10).await?;

    let store = SeaOrmLedgerStore::new(db.clone());
    let accounts = store.read_many(&[a.id.clone(), b.id.clone()]).await.unwrap();
    let from = accounts.iter().find(|acc| acc.id == a.id).unwrap();
    let to = accounts.iter().find(|acc| acc.id == b.id).unwrap();

    store
        .commit_if(&[credit(from, -30), credit(to, 30)], None)
        .await
        .unwrap();

    let from_row = UserBalance::find_by_id(a.id.as_str()).one(db).await?.unwrap();
    let to_row = UserBalance::find_by_id(b.id.as_str()).one(db).await?.unwrap();
    assert_eq!(from_row.balance, 20);
    assert_eq!(to_row.balance, 40);
    assert_eq!(from_row.version, 1);
    assert_eq!(to_row.version, 1);

    Ok(())
}

/// Tests that one stale write discards the whole unit.
///
/// Expected: Err(Conflict) naming the stale account; the first row is unchanged
#[tokio::test]
async fn rejects_whole_unit_on_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (a, _) = factory::create_funded_user(db, 50).await?;
    let (b, _) = factory::create_funded_user(db, 10).await?;

    let store = SeaOrmLedgerStore::new(db.clone());
    let accounts = store.read_many(&[a.id.clone(), b.id.clone()]).await.unwrap();
    let from = accounts.iter().find(|acc| acc.id == a.id).unwrap().clone();
    let to = accounts.iter().find(|acc| acc.id == b.id).unwrap().clone();

    // Another writer bumps B first.
    store.commit_if(&[credit(&to, 5)], None).await.unwrap();

    let result = store
        .commit_if(&[credit(&from, -30), credit(&to, 30)], None)
        .await;

    match result {
        Err(LedgerError::Conflict { account }) => assert_eq!(account, b.id),
        other => panic!("expected conflict, got {:?}", other),
    }
    let from_row = UserBalance::find_by_id(a.id.as_str()).one(db).await?.unwrap();
    assert_eq!(from_row.balance, 50);
    assert_eq!(from_row.version, 0);
    let to_row = UserBalance::find_by_id(b.id.as_str()).one(db).await?.unwrap();
    assert_eq!(to_row.balance, 15);
    assert_eq!(to_row.version, 1);

    Ok(())
}

/// Expected: Err(Conflict) when the account does not exist
#[tokio::test]
async fn conflicts_on_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ghost = Account {
        id: "ghost".to_string(),
        balance: 0,
        net_worth: 0,
        version: 0,
        date_last_claimed_dailies: None,
    };

    let result = SeaOrmLedgerStore::new(db.clone())
        .commit_if(&[credit(&ghost, 10)], None)
        .await;

    assert!(matches!(result, Err(LedgerError::Conflict { .. })));

    Ok(())
}

/// Tests that the receipt is stored with the account writes.
///
/// Expected: a `ledger_transfer` row keyed by the idempotency key
#[tokio::test]
async fn stores_receipt_with_writes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (a, _) = factory::create_funded_user(db, 50).await?;
    let (b, _) = factory::create_funded_user(db, 10).await?;

    let store = SeaOrmLedgerStore::new(db.clone());
    let (from, to) = read_pair(&store, &a.id, &b.id).await;
    let receipt = receipt("t-1", &a.id, &b.id, 30);

    store
        .commit_if(&[credit(&from, -30), credit(&to, 30)], Some(&receipt))
        .await
        .unwrap();

    let row = LedgerTransfer::find_by_id("t-1").one(db).await?.unwrap();
    assert_eq!(row.from_user_id, a.id);
    assert_eq!(row.to_user_id, b.id);
    assert_eq!(row.amount, 30);

    Ok(())
}

/// Tests that a key with an existing receipt discards the whole unit.
///
/// Expected: Err(DuplicateReceipt); balances and versions unchanged
#[tokio::test]
async fn rejects_unit_with_duplicate_receipt() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (a, _) = factory::create_funded_user(db, 50).await?;
    let (b, _) = factory::create_funded_user(db, 10).await?;

    let store = SeaOrmLedgerStore::new(db.clone());
    let receipt = receipt("t-1", &a.id, &b.id, 10);
    let (from, to) = read_pair(&store, &a.id, &b.id).await;
    store
        .commit_if(&[credit(&from, -10), credit(&to, 10)], Some(&receipt))
        .await
        .unwrap();

    let (from, to) = read_pair(&store, &a.id, &b.id).await;
    let result = store
        .commit_if(&[credit(&from, -10), credit(&to, 10)], Some(&receipt))
        .await;

    assert!(matches!(result, Err(LedgerError::DuplicateReceipt { key }) if key == "t-1"));
    let from_row = UserBalance::find_by_id(a.id.as_str()).one(db).await?.unwrap();
    assert_eq!(from_row.balance, 40);
    assert_eq!(from_row.version, 1);

    Ok(())
}

/// Expected: a stale version leaves no receipt behind
#[tokio::test]
async fn discards_receipt_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (a, _) = factory::create_funded_user(db, 50).await?;
    let (b, _) = factory::create_funded_user(db, 10).await?;

    let store = SeaOrmLedgerStore::new(db.clone());
    let (from, to) = read_pair(&store, &a.id, &b.id).await;
    store.commit_if(&[credit(&from, -1)], None).await.unwrap();

    let result = store
        .commit_if(
            &[credit(&from, -10), credit(&to, 10)],
            Some(&receipt("t-1", &a.id, &b.id, 10)),
        )
        .await;

    assert!(matches!(result, Err(LedgerError::Conflict { .. })));
    assert!(LedgerTransfer::find_by_id("t-1").one(db).await?.is_none());

    Ok(())
}
