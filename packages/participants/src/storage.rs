// ABOUTME: Participant storage layer using SQLite
// ABOUTME: Handles invitations, removals, and listing participants with profile names

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use super::types::{Participant, ParticipantStatus, ParticipantWithProfile};
use vendorworld_core::generate_id;
use vendorworld_profiles::{Profile, ProfileStorage, UserRole};
use vendorworld_rfqs::{authorize, is_owner, RfqAction, RfqStorage};
use vendorworld_storage::StorageError;

pub struct ParticipantStorage {
    pool: SqlitePool,
    rfqs: RfqStorage,
    profiles: ProfileStorage,
}

impl ParticipantStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            rfqs: RfqStorage::new(pool.clone()),
            profiles: ProfileStorage::new(pool.clone()),
            pool,
        }
    }

    /// Invite a vendor to a draft or open RFQ. Inviting the same vendor twice is a conflict.
    pub async fn invite_vendor(
        &self,
        rfq_id: &str,
        owner_id: &str,
        vendor_id: &str,
    ) -> Result<Participant, StorageError> {
        let rfq = self.rfqs.get_rfq(rfq_id).await?;
        authorize(&rfq, owner_id, RfqAction::ManageParticipants)?;

        if self.profiles.get_role(vendor_id).await? != Some(UserRole::Vendor) {
            return Err(StorageError::Validation(format!(
                "User '{}' is not a vendor",
                vendor_id
            )));
        }

        let participant = Participant {
            id: generate_id("participant"),
            rfq_id: rfq_id.to_string(),
            vendor_id: vendor_id.to_string(),
            status: ParticipantStatus::Invited,
            invited_at: Utc::now(),
        };

        debug!("Inviting vendor {} to RFQ {}", vendor_id, rfq_id);

        // The unique (rfq_id, vendor_id) index settles concurrent invitations
        sqlx::query(
            r#"
            INSERT INTO rfq_participants (id, rfq_id, vendor_id, status, invited_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&participant.id)
        .bind(&participant.rfq_id)
        .bind(&participant.vendor_id)
        .bind(participant.status)
        .bind(participant.invited_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::conflict_on_unique(e, "Vendor is already a participant");
            if matches!(err, StorageError::Conflict(_)) {
                warn!("Duplicate invitation of {} to RFQ {}", vendor_id, rfq_id);
            }
            err
        })?;

        Ok(participant)
    }

    /// Remove a participant record. Only the RFQ owner may do this, in any status.
    pub async fn remove_participant(
        &self,
        participant_id: &str,
        owner_id: &str,
    ) -> Result<(), StorageError> {
        let participant = self.get_participant(participant_id).await?;
        let rfq = self.rfqs.get_rfq(&participant.rfq_id).await?;

        if !is_owner(&rfq, owner_id) {
            return Err(StorageError::Forbidden(
                "Only the RFQ owner can remove participants".to_string(),
            ));
        }

        debug!("Removing participant {} from RFQ {}", participant_id, rfq.id);

        sqlx::query("DELETE FROM rfq_participants WHERE id = ?")
            .bind(participant_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get_participant(&self, participant_id: &str) -> Result<Participant, StorageError> {
        sqlx::query_as::<_, Participant>("SELECT * FROM rfq_participants WHERE id = ?")
            .bind(participant_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found("Participant"))
    }

    pub async fn list_participants(
        &self,
        rfq_id: &str,
    ) -> Result<Vec<ParticipantWithProfile>, StorageError> {
        debug!("Listing participants for RFQ: {}", rfq_id);

        let participants = sqlx::query_as::<_, ParticipantWithProfile>(
            r#"
            SELECT rp.id, rp.rfq_id, rp.vendor_id, rp.status, rp.invited_at,
                   p.full_name, p.company_name
            FROM rfq_participants rp
            LEFT JOIN profiles p ON p.id = rp.vendor_id
            WHERE rp.rfq_id = ?
            ORDER BY rp.invited_at DESC
            "#,
        )
        .bind(rfq_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(participants)
    }

    /// Vendors matching `search` that have not been invited to the RFQ yet
    pub async fn available_vendors(
        &self,
        rfq_id: &str,
        search: Option<&str>,
    ) -> Result<Vec<Profile>, StorageError> {
        let invited: Vec<String> =
            sqlx::query_scalar("SELECT vendor_id FROM rfq_participants WHERE rfq_id = ?")
                .bind(rfq_id)
                .fetch_all(&self.pool)
                .await?;

        let vendors = self.profiles.list_vendors(search).await?;
        Ok(vendors
            .into_iter()
            .filter(|vendor| !invited.contains(&vendor.id))
            .collect())
    }
}
