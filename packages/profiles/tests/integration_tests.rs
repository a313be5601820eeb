// ABOUTME: Integration tests for profile storage operations
// ABOUTME: Tests registration, profile edits, role checks, and vendor directory search

use vendorworld_profiles::{ProfileStorage, ProfileUpdateInput, RegisterInput, UserRole};
use vendorworld_storage::{connect_in_memory, StorageError};

async fn register(storage: &ProfileStorage, id: &str, role: UserRole, name: &str, company: &str) {
    storage
        .register(
            id,
            RegisterInput {
                role,
                full_name: Some(name.to_string()),
                company_name: Some(company.to_string()),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_creates_profile_and_role() {
    let storage = ProfileStorage::new(connect_in_memory().await.unwrap());

    let account = storage
        .register(
            "user-1",
            RegisterInput {
                role: UserRole::Client,
                full_name: Some("  Jane Doe ".to_string()),
                company_name: Some("   ".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(account.role, UserRole::Client);
    assert_eq!(account.profile.full_name.as_deref(), Some("Jane Doe"));
    assert!(account.profile.company_name.is_none());
}

#[tokio::test]
async fn test_register_twice_conflicts() {
    let storage = ProfileStorage::new(connect_in_memory().await.unwrap());
    register(&storage, "user-1", UserRole::Vendor, "Jane", "Acme").await;

    let result = storage
        .register(
            "user-1",
            RegisterInput {
                role: UserRole::Client,
                full_name: None,
                company_name: None,
            },
        )
        .await;

    assert!(matches!(result, Err(StorageError::Conflict(_))));
}

#[tokio::test]
async fn test_concurrent_register_one_conflicts() {
    let storage = ProfileStorage::new(connect_in_memory().await.unwrap());
    let input = |role| RegisterInput {
        role,
        full_name: Some("Jane".to_string()),
        company_name: None,
    };

    let (first, second) = tokio::join!(
        storage.register("user-1", input(UserRole::Vendor)),
        storage.register("user-1", input(UserRole::Client)),
    );

    let conflicts = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(StorageError::Conflict(_))))
        .count();
    assert_eq!(conflicts, 1);
    assert!(first.is_ok() || second.is_ok());

    // The losing registration leaves no partial rows behind
    let role = storage.get_role("user-1").await.unwrap();
    let winner = first.or(second).unwrap();
    assert_eq!(role, Some(winner.role));
}

#[tokio::test]
async fn test_update_profile_clears_blank_fields() {
    let storage = ProfileStorage::new(connect_in_memory().await.unwrap());
    register(&storage, "user-1", UserRole::Vendor, "Jane", "Acme").await;

    let profile = storage
        .update_profile(
            "user-1",
            ProfileUpdateInput {
                full_name: Some(" Janet ".to_string()),
                company_name: Some("".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(profile.full_name.as_deref(), Some("Janet"));
    assert!(profile.company_name.is_none());
}

#[tokio::test]
async fn test_update_missing_profile_is_not_found() {
    let storage = ProfileStorage::new(connect_in_memory().await.unwrap());

    let result = storage
        .update_profile("ghost", ProfileUpdateInput::default())
        .await;

    assert!(matches!(result, Err(StorageError::NotFound(_))));
}

#[tokio::test]
async fn test_require_role() {
    let storage = ProfileStorage::new(connect_in_memory().await.unwrap());
    register(&storage, "vendor-1", UserRole::Vendor, "Vic", "Globex").await;

    assert!(storage.require_role("vendor-1", UserRole::Vendor).await.is_ok());
    assert!(matches!(
        storage.require_role("vendor-1", UserRole::Client).await,
        Err(StorageError::Forbidden(_))
    ));
    assert!(matches!(
        storage.require_role("nobody", UserRole::Vendor).await,
        Err(StorageError::Forbidden(_))
    ));
}

#[tokio::test]
async fn test_list_vendors_filters_by_role_and_search() {
    let storage = ProfileStorage::new(connect_in_memory().await.unwrap());
    register(&storage, "client-1", UserRole::Client, "Carla", "Acme Buyers").await;
    register(&storage, "vendor-1", UserRole::Vendor, "Vic", "Acme Supply").await;
    register(&storage, "vendor-2", UserRole::Vendor, "Wanda", "Globex").await;

    let all = storage.list_vendors(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let acme = storage.list_vendors(Some("acme")).await.unwrap();
    assert_eq!(acme.len(), 1);
    assert_eq!(acme[0].id, "vendor-1");

    let by_name = storage.list_vendors(Some("WANDA")).await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "vendor-2");

    assert_eq!(storage.count_vendors().await.unwrap(), 2);
}
