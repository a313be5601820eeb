// ABOUTME: Integration tests for participant storage operations
// ABOUTME: Tests invitations, duplicate handling, removal, and available vendor search

use sqlx::SqlitePool;
use vendorworld_participants::{ParticipantStatus, ParticipantStorage};
use vendorworld_profiles::{ProfileStorage, RegisterInput, UserRole};
use vendorworld_rfqs::{Rfq, RfqCreateInput, RfqStatus, RfqStorage};
use vendorworld_storage::{connect_in_memory, StorageError};

struct Fixture {
    pool: SqlitePool,
    participants: ParticipantStorage,
    rfq: Rfq,
}

async fn register(pool: &SqlitePool, id: &str, role: UserRole, company: &str) {
    ProfileStorage::new(pool.clone())
        .register(
            id,
            RegisterInput {
                role,
                full_name: None,
                company_name: Some(company.to_string()),
            },
        )
        .await
        .unwrap();
}

async fn setup() -> Fixture {
    setup_with_status(RfqStatus::Open).await
}

async fn setup_with_status(status: RfqStatus) -> Fixture {
    let pool = connect_in_memory().await.unwrap();
    register(&pool, "client-1", UserRole::Client, "Buyer Inc").await;
    register(&pool, "vendor-1", UserRole::Vendor, "Acme Supplies").await;
    register(&pool, "vendor-2", UserRole::Vendor, "Globex").await;

    let rfq = RfqStorage::new(pool.clone())
        .create_rfq(
            "client-1",
            RfqCreateInput {
                title: "Office chairs".to_string(),
                description: None,
                due_date: None,
                status: Some(status),
            },
        )
        .await
        .unwrap();

    Fixture {
        participants: ParticipantStorage::new(pool.clone()),
        pool,
        rfq,
    }
}

#[tokio::test]
async fn test_invite_vendor_creates_invited_record() {
    let fx = setup().await;

    let participant = fx
        .participants
        .invite_vendor(&fx.rfq.id, "client-1", "vendor-1")
        .await
        .unwrap();

    assert_eq!(participant.status, ParticipantStatus::Invited);
    assert_eq!(participant.vendor_id, "vendor-1");

    let listed = fx.participants.list_participants(&fx.rfq.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].company_name.as_deref(), Some("Acme Supplies"));
}

#[tokio::test]
async fn test_duplicate_invitation_conflicts() {
    let fx = setup().await;
    fx.participants
        .invite_vendor(&fx.rfq.id, "client-1", "vendor-1")
        .await
        .unwrap();

    let again = fx
        .participants
        .invite_vendor(&fx.rfq.id, "client-1", "vendor-1")
        .await;

    assert!(matches!(again, Err(StorageError::Conflict(_))));
    assert_eq!(fx.participants.list_participants(&fx.rfq.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invite_requires_owner_and_vendor_role() {
    let fx = setup().await;

    let by_vendor = fx
        .participants
        .invite_vendor(&fx.rfq.id, "vendor-2", "vendor-1")
        .await;
    assert!(matches!(by_vendor, Err(StorageError::Forbidden(_))));

    let client_invitee = fx
        .participants
        .invite_vendor(&fx.rfq.id, "client-1", "client-1")
        .await;
    assert!(matches!(client_invitee, Err(StorageError::Validation(_))));
}

#[tokio::test]
async fn test_invite_to_draft_grants_visibility() {
    let fx = setup_with_status(RfqStatus::Draft).await;
    let rfqs = RfqStorage::new(fx.pool.clone());
    assert!(matches!(
        rfqs.get_visible_rfq(&fx.rfq.id, "vendor-1").await,
        Err(StorageError::NotFound(_))
    ));

    let participant = fx
        .participants
        .invite_vendor(&fx.rfq.id, "client-1", "vendor-1")
        .await
        .unwrap();

    assert_eq!(participant.status, ParticipantStatus::Invited);
    let visible = rfqs.get_visible_rfq(&fx.rfq.id, "vendor-1").await.unwrap();
    assert_eq!(visible.status, RfqStatus::Draft);
    assert!(matches!(
        rfqs.get_visible_rfq(&fx.rfq.id, "vendor-2").await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_invite_rejected_once_closed() {
    let fx = setup().await;
    RfqStorage::new(fx.pool.clone())
        .close(&fx.rfq.id, "client-1")
        .await
        .unwrap();

    let result = fx
        .participants
        .invite_vendor(&fx.rfq.id, "client-1", "vendor-1")
        .await;
    assert!(matches!(result, Err(StorageError::Forbidden(_))));
}

#[tokio::test]
async fn test_remove_participant_by_owner_only() {
    let fx = setup().await;
    let participant = fx
        .participants
        .invite_vendor(&fx.rfq.id, "client-1", "vendor-1")
        .await
        .unwrap();

    let denied = fx
        .participants
        .remove_participant(&participant.id, "vendor-1")
        .await;
    assert!(matches!(denied, Err(StorageError::Forbidden(_))));

    fx.participants
        .remove_participant(&participant.id, "client-1")
        .await
        .unwrap();
    assert!(fx.participants.list_participants(&fx.rfq.id).await.unwrap().is_empty());

    let missing = fx
        .participants
        .remove_participant(&participant.id, "client-1")
        .await;
    assert!(matches!(missing, Err(StorageError::NotFound(_))));
}

#[tokio::test]
async fn test_available_vendors_excludes_participants() {
    let fx = setup().await;
    fx.participants
        .invite_vendor(&fx.rfq.id, "client-1", "vendor-1")
        .await
        .unwrap();

    let available = fx
        .participants
        .available_vendors(&fx.rfq.id, None)
        .await
        .unwrap();
    let ids: Vec<&str> = available.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["vendor-2"]);

    let searched = fx
        .participants
        .available_vendors(&fx.rfq.id, Some("acme"))
        .await
        .unwrap();
    assert!(searched.is_empty());
}

#[tokio::test]
async fn test_participant_sees_rfq_after_it_closes() {
    let fx = setup().await;
    fx.participants
        .invite_vendor(&fx.rfq.id, "client-1", "vendor-1")
        .await
        .unwrap();

    let rfqs = RfqStorage::new(fx.pool.clone());
    rfqs.close(&fx.rfq.id, "client-1").await.unwrap();

    assert!(rfqs.get_visible_rfq(&fx.rfq.id, "vendor-1").await.is_ok());
    assert!(matches!(
        rfqs.get_visible_rfq(&fx.rfq.id, "vendor-2").await,
        Err(StorageError::NotFound(_))
    ));
}
