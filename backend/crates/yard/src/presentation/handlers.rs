//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::id::{GatewayId, YardId, ZoneId};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::YardConfig;
use crate::application::{
    GatewayInput, GatewayUseCase, YardInput, YardUseCase, ZoneInput, ZoneUseCase,
};
use crate::domain::repository::{GatewayRepository, YardRepository, ZoneRepository};
use crate::error::YardResult;
use crate::presentation::dto::{
    GatewayFilter, GatewayRequest, GatewayResponse, PageQuery, YardLayoutResponse,
    YardPageResponse, YardRequest, YardResponse, ZoneFilter, ZoneLayoutResponse, ZoneRequest,
    ZoneResponse,
};

/// Shared state for yard handlers
#[derive(Clone)]
pub struct YardAppState<R>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<YardConfig>,
}

impl From<YardRequest> for YardInput {
    fn from(req: YardRequest) -> Self {
        Self {
            name: req.name,
            location: req.location,
            max_capacity: req.max_capacity,
        }
    }
}

impl From<ZoneRequest> for ZoneInput {
    fn from(req: ZoneRequest) -> Self {
        Self {
            name: req.name,
            yard_id: YardId::from_uuid(req.yard_id),
        }
    }
}

impl From<GatewayRequest> for GatewayInput {
    fn from(req: GatewayRequest) -> Self {
        Self {
            identifier: req.identifier,
            kind: req.kind,
            active: req.active,
            zone_id: ZoneId::from_uuid(req.zone_id),
        }
    }
}

// ============================================================================
// Yards
// ============================================================================

/// POST /api/yards/yards
pub async fn create_yard<R>(
    State(state): State<YardAppState<R>>,
    Json(req): Json<YardRequest>,
) -> YardResult<(StatusCode, Json<YardResponse>)>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let yard = YardUseCase::new(state.repo.clone(), state.config.clone())
        .create(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(YardResponse::from(&yard))))
}

/// GET /api/yards/yards?page=1&pageSize=10
pub async fn list_yards<R>(
    State(state): State<YardAppState<R>>,
    Query(query): Query<PageQuery>,
) -> YardResult<Json<YardPageResponse>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let page = YardUseCase::new(state.repo.clone(), state.config.clone())
        .list(query.page, query.page_size)
        .await?;

    Ok(Json(YardPageResponse::from(&page)))
}

/// GET /api/yards/yards/{id}
///
/// Includes zones and their gateways.
pub async fn get_yard<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
) -> YardResult<Json<YardLayoutResponse>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let layout = YardUseCase::new(state.repo.clone(), state.config.clone())
        .layout(&YardId::from_uuid(id))
        .await?;

    Ok(Json(YardLayoutResponse::from(&layout)))
}

/// PUT /api/yards/yards/{id}
pub async fn update_yard<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<YardRequest>,
) -> YardResult<Json<YardResponse>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let yard = YardUseCase::new(state.repo.clone(), state.config.clone())
        .update(&YardId::from_uuid(id), req.into())
        .await?;

    Ok(Json(YardResponse::from(&yard)))
}

/// DELETE /api/yards/yards/{id}
pub async fn delete_yard<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
) -> YardResult<StatusCode>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    YardUseCase::new(state.repo.clone(), state.config.clone())
        .delete(&YardId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Zones
// ============================================================================

/// POST /api/yards/zones
pub async fn create_zone<R>(
    State(state): State<YardAppState<R>>,
    Json(req): Json<ZoneRequest>,
) -> YardResult<(StatusCode, Json<ZoneResponse>)>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let zone = ZoneUseCase::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ZoneResponse::from(&zone))))
}

/// GET /api/yards/zones?yardId=...
pub async fn list_zones<R>(
    State(state): State<YardAppState<R>>,
    Query(filter): Query<ZoneFilter>,
) -> YardResult<Json<Vec<ZoneResponse>>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let yard_id = filter.yard_id.map(YardId::from_uuid);
    let zones = ZoneUseCase::new(state.repo.clone())
        .list(yard_id.as_ref())
        .await?;

    Ok(Json(zones.iter().map(ZoneResponse::from).collect()))
}

/// GET /api/yards/zones/{id}
///
/// Includes the zone's gateways.
pub async fn get_zone<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
) -> YardResult<Json<ZoneLayoutResponse>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let layout = ZoneUseCase::new(state.repo.clone())
        .layout(&ZoneId::from_uuid(id))
        .await?;

    Ok(Json(ZoneLayoutResponse::from(&layout)))
}

/// PUT /api/yards/zones/{id}
pub async fn update_zone<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ZoneRequest>,
) -> YardResult<Json<ZoneResponse>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let zone = ZoneUseCase::new(state.repo.clone())
        .update(&ZoneId::from_uuid(id), req.into())
        .await?;

    Ok(Json(ZoneResponse::from(&zone)))
}

/// DELETE /api/yards/zones/{id}
pub async fn delete_zone<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
) -> YardResult<StatusCode>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    ZoneUseCase::new(state.repo.clone())
        .delete(&ZoneId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Gateways
// ============================================================================

/// POST /api/yards/gateways
pub async fn create_gateway<R>(
    State(state): State<YardAppState<R>>,
    Json(req): Json<GatewayRequest>,
) -> YardResult<(StatusCode, Json<GatewayResponse>)>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let gateway = GatewayUseCase::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(GatewayResponse::from(&gateway))))
}

/// GET /api/yards/gateways?zoneId=...
pub async fn list_gateways<R>(
    State(state): State<YardAppState<R>>,
    Query(filter): Query<GatewayFilter>,
) -> YardResult<Json<Vec<GatewayResponse>>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let zone_id = filter.zone_id.map(ZoneId::from_uuid);
    let gateways = GatewayUseCase::new(state.repo.clone())
        .list(zone_id.as_ref())
        .await?;

    Ok(Json(gateways.iter().map(GatewayResponse::from).collect()))
}

/// GET /api/yards/gateways/{id}
pub async fn get_gateway<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
) -> YardResult<Json<GatewayResponse>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let gateway = GatewayUseCase::new(state.repo.clone())
        .get(&GatewayId::from_uuid(id))
        .await?;

    Ok(Json(GatewayResponse::from(&gateway)))
}

/// PUT /api/yards/gateways/{id}
pub async fn update_gateway<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<GatewayRequest>,
) -> YardResult<Json<GatewayResponse>>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let gateway = GatewayUseCase::new(state.repo.clone())
        .update(&GatewayId::from_uuid(id), req.into())
        .await?;

    Ok(Json(GatewayResponse::from(&gateway)))
}

/// DELETE /api/yards/gateways/{id}
pub async fn delete_gateway<R>(
    State(state): State<YardAppState<R>>,
    Path(id): Path<Uuid>,
) -> YardResult<StatusCode>
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    GatewayUseCase::new(state.repo.clone())
        .delete(&GatewayId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
