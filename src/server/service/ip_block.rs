use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::{
        api::PaginationDto,
        ip_block::{IpBlockListDto, IpDebugDto},
    },
    server::{
        data::{
            business_member::BusinessMemberRepository, ip_block::IpBlockRepository,
            table::TableRepository, table_silence::TableSilenceRepository,
            waiter_call::WaiterCallRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            business::Membership,
            ip_block::{
                normalize_ip, parse_ip, BlockIpParam, BlockReason, CreateIpBlockParam, IpBlock,
            },
            silence::{CreateSilenceParam, SilenceReason},
        },
    },
};

/// Silence applied to the table of a call whose IP gets blocked.
const BLOCK_SILENCE_HOURS: i64 = 24;
/// Calls from the IP included in the debug view.
const DEBUG_RECENT_CALLS: u64 = 10;

/// Result of force-unblocking an IP.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceUnblockResult {
    pub unblocked_count: u64,
    pub still_blocked: bool,
}

/// Service for per-business bans of client IPs.
///
/// Calls from a blocked IP receive a fake success and are never stored, so the caller
/// cannot tell they were blocked.
pub struct IpBlockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IpBlockService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Blocks the IP a call was made from and silences the call's table.
    ///
    /// # Returns
    /// - `Ok((IpBlock, bool))` - The block and whether the table was silenced by it
    /// - `Err(AppError::NotFound)` - No such call
    /// - `Err(AppError::Forbidden)` - The call belongs to another waiter
    /// - `Err(AppError::BadRequest)` - The call has no recorded IP
    /// - `Err(AppError::Conflict)` - The IP is already blocked in the business
    pub async fn block(&self, user_id: i32, param: BlockIpParam) -> Result<(IpBlock, bool), AppError> {
        let now = Utc::now();

        let call = WaiterCallRepository::new(self.db)
            .find_by_id(param.call_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Call not found".to_string()))?;

        if call.waiter_id != Some(user_id) {
            return Err(AppError::Forbidden(
                "This call is not assigned to you".to_string(),
            ));
        }

        let Some(ip_address) = call.ip_address.as_deref().and_then(normalize_ip) else {
            return Err(AppError::BadRequest(
                "This call has no IP address to block".to_string(),
            ));
        };

        let txn = self.db.begin().await?;
        let block_repo = IpBlockRepository::new(&txn);

        if block_repo.is_blocked(call.business_id, &ip_address, now).await? {
            return Err(AppError::Conflict(
                "This IP is already blocked for the business".to_string(),
            ));
        }

        let block = block_repo
            .create(CreateIpBlockParam {
                business_id: call.business_id,
                ip_address: ip_address.clone(),
                blocked_by: Some(user_id),
                reason: param.reason,
                notes: param.notes,
                blocked_at: now,
                expires_at: Some(now + param.duration),
                metadata: Some(json!({
                    "call_id": call.id,
                    "table_id": call.table_id,
                    "user_agent": call.user_agent,
                })),
            })
            .await?;

        let silence_repo = TableSilenceRepository::new(&txn);
        let table_silenced = match TableRepository::new(&txn).find_by_id(call.table_id).await? {
            Some(table) if silence_repo.find_active_for_table(table.id, now).await?.is_none() => {
                silence_repo
                    .create(CreateSilenceParam {
                        table_id: table.id,
                        silenced_by: Some(user_id),
                        reason: SilenceReason::Manual,
                        notes: Some(format!("IP blocked: {}", param.reason.as_str())),
                        call_count: None,
                        silenced_at: now,
                        expires_at: Some(now + Duration::hours(BLOCK_SILENCE_HOURS)),
                    })
                    .await?;
                true
            }
            _ => false,
        };

        txn.commit().await?;

        tracing::info!(
            "User {} blocked IP {} in business {} ({})",
            user_id,
            ip_address,
            call.business_id,
            param.reason.as_str()
        );

        Ok((block, table_silenced))
    }

    /// Lifts the active block of an IP.
    ///
    /// # Returns
    /// - `Ok(())` - The IP is no longer blocked
    /// - `Err(AppError::Validation)` - Malformed IP
    /// - `Err(AppError::Forbidden)` - The user is not a member of the business
    /// - `Err(AppError::NotFound)` - The IP is not blocked
    pub async fn unblock(&self, user_id: i32, business_id: i32, ip_address: &str) -> Result<(), AppError> {
        let ip_address = parse_ip(ip_address)?;
        self.require_member(user_id, business_id).await?;

        let lifted = IpBlockRepository::new(self.db)
            .unblock(business_id, &ip_address, Utc::now())
            .await?;

        if lifted == 0 {
            return Err(AppError::NotFound("This IP is not blocked".to_string()));
        }

        tracing::info!("User {} unblocked IP {} in business {}", user_id, ip_address, business_id);

        Ok(())
    }

    /// Gets a page of a business's blocks, newest first.
    ///
    /// # Arguments
    /// - `page` - 1-based page number
    pub async fn get_paginated(
        &self,
        business_id: i32,
        active_only: bool,
        reason: Option<BlockReason>,
        page: u64,
        per_page: u64,
    ) -> Result<IpBlockListDto, AppError> {
        let now = Utc::now();
        let page = page.max(1);
        let per_page = per_page.clamp(1, 100);

        let (blocks, total) = IpBlockRepository::new(self.db)
            .get_paginated(business_id, active_only, reason, now, page - 1, per_page)
            .await?;

        Ok(IpBlockListDto {
            blocks: blocks.into_iter().map(|block| block.into_dto(now)).collect(),
            pagination: PaginationDto {
                current_page: page,
                last_page: total.div_ceil(per_page).max(1),
                per_page,
                total,
            },
        })
    }

    /// Gets every block record of an IP and its latest calls. Admins only.
    pub async fn debug(&self, user_id: i32, business_id: i32, ip_address: &str) -> Result<IpDebugDto, AppError> {
        let ip_address = parse_ip(ip_address)?;
        self.require_admin(user_id, business_id).await?;
        let now = Utc::now();

        let blocks = IpBlockRepository::new(self.db)
            .get_for_ip(business_id, &ip_address)
            .await?;
        let recent_calls = WaiterCallRepository::new(self.db)
            .get_recent_by_ip(business_id, &ip_address, DEBUG_RECENT_CALLS)
            .await?;

        let active_blocks = blocks.iter().filter(|block| block.is_active(now)).count() as u64;

        Ok(IpDebugDto {
            ip_address,
            business_id,
            is_blocked_now: active_blocks > 0,
            total_blocks: blocks.len() as u64,
            active_blocks,
            blocks: blocks.into_iter().map(|block| block.into_dto(now)).collect(),
            recent_calls: recent_calls
                .into_iter()
                .map(|call| call.into_dto(None, now))
                .collect(),
        })
    }

    /// Closes every open block record of an IP, including expired ones. Admins only.
    pub async fn force_unblock(
        &self,
        user_id: i32,
        business_id: i32,
        ip_address: &str,
    ) -> Result<ForceUnblockResult, AppError> {
        let ip_address = parse_ip(ip_address)?;
        self.require_admin(user_id, business_id).await?;
        let now = Utc::now();

        let repo = IpBlockRepository::new(self.db);
        let unblocked_count = repo.force_unblock(business_id, &ip_address, now).await?;
        let still_blocked = repo.is_blocked(business_id, &ip_address, now).await?;

        tracing::info!(
            "User {} force-unblocked IP {} in business {}: {} records closed",
            user_id,
            ip_address,
            business_id,
            unblocked_count
        );

        Ok(ForceUnblockResult {
            unblocked_count,
            still_blocked,
        })
    }

    async fn require_member(&self, user_id: i32, business_id: i32) -> Result<Membership, AppError> {
        BusinessMemberRepository::new(self.db)
            .find(business_id, user_id)
            .await?
            .ok_or_else(|| AppError::Forbidden("You do not belong to this business".to_string()))
    }

    async fn require_admin(&self, user_id: i32, business_id: i32) -> Result<Membership, AppError> {
        let membership = self.require_member(user_id, business_id).await?;

        if !membership.is_admin() {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("inspect IP blocks of business {} without admin role", business_id),
            )
            .into());
        }

        Ok(membership)
    }
}
