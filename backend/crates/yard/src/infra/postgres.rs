//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{GatewayId, YardId, ZoneId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    gateway::{Gateway, GatewayDetails},
    yard::{Yard, YardDetails},
    zone::{Zone, ZoneDetails},
};
use crate::domain::repository::{GatewayRepository, YardRepository, ZoneRepository};
use crate::domain::value_object::{
    capacity::Capacity, gateway_identifier::GatewayIdentifier, gateway_kind::GatewayKind,
    label::Label, page::Page,
};
use crate::error::{YardError, YardResult};

/// PostgreSQL-backed yard repository
#[derive(Clone)]
pub struct PgYardRepository {
    pool: PgPool,
}

impl PgYardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Foreign key violation on insert/update means the parent row is gone
fn map_zone_write_error(err: sqlx::Error) -> YardError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            YardError::YardNotFound
        }
        _ => YardError::Database(err),
    }
}

fn map_gateway_write_error(err: sqlx::Error) -> YardError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            YardError::DuplicateGatewayIdentifier
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            YardError::ZoneNotFound
        }
        _ => YardError::Database(err),
    }
}

const SELECT_YARD: &str = r#"
    SELECT
        yard_id,
        name,
        location,
        max_capacity,
        created_at,
        updated_at
    FROM yards
"#;

const SELECT_ZONE: &str = r#"
    SELECT
        zone_id,
        yard_id,
        name,
        created_at,
        updated_at
    FROM zones
"#;

const SELECT_GATEWAY: &str = r#"
    SELECT
        g.gateway_id,
        g.zone_id,
        g.identifier,
        g.kind,
        g.active,
        g.created_at,
        g.updated_at
    FROM gateways g
"#;

// ============================================================================
// Yard Repository Implementation
// ============================================================================

impl YardRepository for PgYardRepository {
    async fn create_yard(&self, yard: &Yard) -> YardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO yards (
                yard_id,
                name,
                location,
                max_capacity,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(yard.yard_id.as_uuid())
        .bind(yard.details.name.as_str())
        .bind(yard.details.location.as_str())
        .bind(yard.details.max_capacity.get())
        .bind(yard.created_at)
        .bind(yard.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_yard(&self, yard_id: &YardId) -> YardResult<Option<Yard>> {
        let row = sqlx::query_as::<_, YardRow>(&format!("{SELECT_YARD} WHERE yard_id = $1"))
            .bind(yard_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(YardRow::into_yard))
    }

    async fn list_yards(&self, page: Page) -> YardResult<Vec<Yard>> {
        let rows = sqlx::query_as::<_, YardRow>(&format!(
            "{SELECT_YARD} ORDER BY created_at, yard_id LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(YardRow::into_yard).collect())
    }

    async fn count_yards(&self) -> YardResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM yards")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn update_yard(&self, yard: &Yard) -> YardResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE yards SET
                name = $2,
                location = $3,
                max_capacity = $4,
                updated_at = $5
            WHERE yard_id = $1
            "#,
        )
        .bind(yard.yard_id.as_uuid())
        .bind(yard.details.name.as_str())
        .bind(yard.details.location.as_str())
        .bind(yard.details.max_capacity.get())
        .bind(yard.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_yard(&self, yard_id: &YardId) -> YardResult<bool> {
        let result = sqlx::query("DELETE FROM yards WHERE yard_id = $1")
            .bind(yard_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}

// ============================================================================
// Zone Repository Implementation
// ============================================================================

impl ZoneRepository for PgYardRepository {
    async fn create_zone(&self, zone: &Zone) -> YardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO zones (
                zone_id,
                yard_id,
                name,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(zone.zone_id.as_uuid())
        .bind(zone.details.yard_id.as_uuid())
        .bind(zone.details.name.as_str())
        .bind(zone.created_at)
        .bind(zone.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_zone_write_error)?;

        Ok(())
    }

    async fn find_zone(&self, zone_id: &ZoneId) -> YardResult<Option<Zone>> {
        let row = sqlx::query_as::<_, ZoneRow>(&format!("{SELECT_ZONE} WHERE zone_id = $1"))
            .bind(zone_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ZoneRow::into_zone))
    }

    async fn list_zones(&self, yard_id: Option<&YardId>) -> YardResult<Vec<Zone>> {
        let rows = sqlx::query_as::<_, ZoneRow>(&format!(
            "{SELECT_ZONE} WHERE ($1::uuid IS NULL OR yard_id = $1) ORDER BY created_at, zone_id"
        ))
        .bind(yard_id.map(|id| id.into_uuid()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ZoneRow::into_zone).collect())
    }

    async fn update_zone(&self, zone: &Zone) -> YardResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE zones SET
                yard_id = $2,
                name = $3,
                updated_at = $4
            WHERE zone_id = $1
            "#,
        )
        .bind(zone.zone_id.as_uuid())
        .bind(zone.details.yard_id.as_uuid())
        .bind(zone.details.name.as_str())
        .bind(zone.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_zone_write_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_zone(&self, zone_id: &ZoneId) -> YardResult<bool> {
        let result = sqlx::query("DELETE FROM zones WHERE zone_id = $1")
            .bind(zone_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}

// ============================================================================
// Gateway Repository Implementation
// ============================================================================

impl GatewayRepository for PgYardRepository {
    async fn create_gateway(&self, gateway: &Gateway) -> YardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO gateways (
                gateway_id,
                zone_id,
                identifier,
                kind,
                active,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(gateway.gateway_id.as_uuid())
        .bind(gateway.details.zone_id.as_uuid())
        .bind(gateway.details.identifier.as_str())
        .bind(gateway.details.kind.id())
        .bind(gateway.details.active)
        .bind(gateway.created_at)
        .bind(gateway.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_gateway_write_error)?;

        Ok(())
    }

    async fn find_gateway(&self, gateway_id: &GatewayId) -> YardResult<Option<Gateway>> {
        let row =
            sqlx::query_as::<_, GatewayRow>(&format!("{SELECT_GATEWAY} WHERE g.gateway_id = $1"))
                .bind(gateway_id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        row.map(GatewayRow::into_gateway).transpose()
    }

    async fn list_gateways(&self, zone_id: Option<&ZoneId>) -> YardResult<Vec<Gateway>> {
        let rows = sqlx::query_as::<_, GatewayRow>(&format!(
            "{SELECT_GATEWAY} WHERE ($1::uuid IS NULL OR g.zone_id = $1) ORDER BY g.created_at, g.gateway_id"
        ))
        .bind(zone_id.map(|id| id.into_uuid()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(GatewayRow::into_gateway).collect()
    }

    async fn list_gateways_in_yard(&self, yard_id: &YardId) -> YardResult<Vec<Gateway>> {
        let rows = sqlx::query_as::<_, GatewayRow>(&format!(
            "{SELECT_GATEWAY} JOIN zones z ON z.zone_id = g.zone_id WHERE z.yard_id = $1 ORDER BY g.created_at, g.gateway_id"
        ))
        .bind(yard_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(GatewayRow::into_gateway).collect()
    }

    async fn update_gateway(&self, gateway: &Gateway) -> YardResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE gateways SET
                zone_id = $2,
                identifier = $3,
                kind = $4,
                active = $5,
                updated_at = $6
            WHERE gateway_id = $1
            "#,
        )
        .bind(gateway.gateway_id.as_uuid())
        .bind(gateway.details.zone_id.as_uuid())
        .bind(gateway.details.identifier.as_str())
        .bind(gateway.details.kind.id())
        .bind(gateway.details.active)
        .bind(gateway.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_gateway_write_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_gateway(&self, gateway_id: &GatewayId) -> YardResult<bool> {
        let result = sqlx::query("DELETE FROM gateways WHERE gateway_id = $1")
            .bind(gateway_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct YardRow {
    yard_id: Uuid,
    name: String,
    location: String,
    max_capacity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl YardRow {
    fn into_yard(self) -> Yard {
        Yard {
            yard_id: YardId::from_uuid(self.yard_id),
            details: YardDetails {
                name: Label::from_db(self.name),
                location: Label::from_db(self.location),
                max_capacity: Capacity::from_db(self.max_capacity),
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ZoneRow {
    zone_id: Uuid,
    yard_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ZoneRow {
    fn into_zone(self) -> Zone {
        Zone {
            zone_id: ZoneId::from_uuid(self.zone_id),
            details: ZoneDetails {
                name: Label::from_db(self.name),
                yard_id: YardId::from_uuid(self.yard_id),
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GatewayRow {
    gateway_id: Uuid,
    zone_id: Uuid,
    identifier: String,
    kind: i16,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl GatewayRow {
    fn into_gateway(self) -> YardResult<Gateway> {
        let kind = GatewayKind::from_id(self.kind)
            .ok_or_else(|| YardError::Internal(format!("Invalid gateway kind: {}", self.kind)))?;

        Ok(Gateway {
            gateway_id: GatewayId::from_uuid(self.gateway_id),
            details: GatewayDetails {
                identifier: GatewayIdentifier::from_db(self.identifier),
                kind,
                active: self.active,
                zone_id: ZoneId::from_uuid(self.zone_id),
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
