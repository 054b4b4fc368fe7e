//! Cross-layer tests for the yard crate

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use kernel::id::{GatewayId, YardId, ZoneId};

    use crate::domain::entity::{gateway::Gateway, yard::Yard, zone::Zone};
    use crate::domain::repository::{GatewayRepository, YardRepository, ZoneRepository};
    use crate::domain::value_object::page::Page;
    use crate::error::{YardError, YardResult};

    #[derive(Default)]
    struct State {
        yards: Vec<Yard>,
        zones: Vec<Zone>,
        gateways: Vec<Gateway>,
    }

    /// Insertion-ordered store with the same cascade and uniqueness rules as
    /// the database schema
    #[derive(Clone, Default)]
    pub struct MemoryYardRepository {
        state: Arc<Mutex<State>>,
    }

    impl MemoryYardRepository {
        pub fn counts(&self) -> (usize, usize, usize) {
            let state = self.state.lock().unwrap();
            (state.yards.len(), state.zones.len(), state.gateways.len())
        }
    }

    impl YardRepository for MemoryYardRepository {
        async fn create_yard(&self, yard: &Yard) -> YardResult<()> {
            self.state.lock().unwrap().yards.push(yard.clone());
            Ok(())
        }

        async fn find_yard(&self, yard_id: &YardId) -> YardResult<Option<Yard>> {
            let state = self.state.lock().unwrap();
            Ok(state.yards.iter().find(|y| &y.yard_id == yard_id).cloned())
        }

        async fn list_yards(&self, page: Page) -> YardResult<Vec<Yard>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .yards
                .iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }

        async fn count_yards(&self) -> YardResult<u64> {
            Ok(self.state.lock().unwrap().yards.len() as u64)
        }

        async fn update_yard(&self, yard: &Yard) -> YardResult<bool> {
            let mut state = self.state.lock().unwrap();
            match state.yards.iter_mut().find(|y| y.yard_id == yard.yard_id) {
                Some(stored) => {
                    *stored = yard.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_yard(&self, yard_id: &YardId) -> YardResult<bool> {
            let mut state = self.state.lock().unwrap();
            let before = state.yards.len();
            state.yards.retain(|y| &y.yard_id != yard_id);
            if state.yards.len() == before {
                return Ok(false);
            }

            let removed_zones: Vec<ZoneId> = state
                .zones
                .iter()
                .filter(|z| &z.details.yard_id == yard_id)
                .map(|z| z.zone_id)
                .collect();
            state.zones.retain(|z| &z.details.yard_id != yard_id);
            state
                .gateways
                .retain(|g| !removed_zones.contains(&g.details.zone_id));
            Ok(true)
        }
    }

    impl ZoneRepository for MemoryYardRepository {
        async fn create_zone(&self, zone: &Zone) -> YardResult<()> {
            let mut state = self.state.lock().unwrap();
            if !state.yards.iter().any(|y| y.yard_id == zone.details.yard_id) {
                return Err(YardError::YardNotFound);
            }
            state.zones.push(zone.clone());
            Ok(())
        }

        async fn find_zone(&self, zone_id: &ZoneId) -> YardResult<Option<Zone>> {
            let state = self.state.lock().unwrap();
            Ok(state.zones.iter().find(|z| &z.zone_id == zone_id).cloned())
        }

        async fn list_zones(&self, yard_id: Option<&YardId>) -> YardResult<Vec<Zone>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .zones
                .iter()
                .filter(|z| yard_id.is_none_or(|id| &z.details.yard_id == id))
                .cloned()
                .collect())
        }

        async fn update_zone(&self, zone: &Zone) -> YardResult<bool> {
            let mut state = self.state.lock().unwrap();
            match state.zones.iter_mut().find(|z| z.zone_id == zone.zone_id) {
                Some(stored) => {
                    *stored = zone.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_zone(&self, zone_id: &ZoneId) -> YardResult<bool> {
            let mut state = self.state.lock().unwrap();
            let before = state.zones.len();
            state.zones.retain(|z| &z.zone_id != zone_id);
            if state.zones.len() == before {
                return Ok(false);
            }
            state.gateways.retain(|g| &g.details.zone_id != zone_id);
            Ok(true)
        }
    }

    impl GatewayRepository for MemoryYardRepository {
        async fn create_gateway(&self, gateway: &Gateway) -> YardResult<()> {
            let mut state = self.state.lock().unwrap();
            if state
                .gateways
                .iter()
                .any(|g| g.details.identifier == gateway.details.identifier)
            {
                return Err(YardError::DuplicateGatewayIdentifier);
            }
            if !state.zones.iter().any(|z| z.zone_id == gateway.details.zone_id) {
                return Err(YardError::ZoneNotFound);
            }
            state.gateways.push(gateway.clone());
            Ok(())
        }

        async fn find_gateway(&self, gateway_id: &GatewayId) -> YardResult<Option<Gateway>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .gateways
                .iter()
                .find(|g| &g.gateway_id == gateway_id)
                .cloned())
        }

        async fn list_gateways(&self, zone_id: Option<&ZoneId>) -> YardResult<Vec<Gateway>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .gateways
                .iter()
                .filter(|g| zone_id.is_none_or(|id| &g.details.zone_id == id))
                .cloned()
                .collect())
        }

        async fn list_gateways_in_yard(&self, yard_id: &YardId) -> YardResult<Vec<Gateway>> {
            let state = self.state.lock().unwrap();
            let zones: Vec<ZoneId> = state
                .zones
                .iter()
                .filter(|z| &z.details.yard_id == yard_id)
                .map(|z| z.zone_id)
                .collect();
            Ok(state
                .gateways
                .iter()
                .filter(|g| zones.contains(&g.details.zone_id))
                .cloned()
                .collect())
        }

        async fn update_gateway(&self, gateway: &Gateway) -> YardResult<bool> {
            let mut state = self.state.lock().unwrap();
            if state.gateways.iter().any(|g| {
                g.gateway_id != gateway.gateway_id
                    && g.details.identifier == gateway.details.identifier
            }) {
                return Err(YardError::DuplicateGatewayIdentifier);
            }
            match state
                .gateways
                .iter_mut()
                .find(|g| g.gateway_id == gateway.gateway_id)
            {
                Some(stored) => {
                    *stored = gateway.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_gateway(&self, gateway_id: &GatewayId) -> YardResult<bool> {
            let mut state = self.state.lock().unwrap();
            let before = state.gateways.len();
            state.gateways.retain(|g| &g.gateway_id != gateway_id);
            Ok(state.gateways.len() != before)
        }
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::app_error::AppError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(YardError, StatusCode)> = vec![
            (YardError::YardNotFound, StatusCode::NOT_FOUND),
            (YardError::ZoneNotFound, StatusCode::NOT_FOUND),
            (YardError::GatewayNotFound, StatusCode::NOT_FOUND),
            (YardError::DuplicateGatewayIdentifier, StatusCode::CONFLICT),
            (
                YardError::Validation(AppError::bad_request("Name cannot be empty")),
                StatusCode::BAD_REQUEST,
            ),
            (
                YardError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                YardError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_validation_keeps_action_hint() {
        let err: YardError = AppError::bad_request("Unknown gateway kind: camera")
            .with_action("Use one of: entrance, exit, monitoring")
            .into();
        let app_err = err.to_app_error();

        assert_eq!(app_err.message(), "Unknown gateway kind: camera");
        assert_eq!(
            app_err.action(),
            Some("Use one of: entrance, exit, monitoring")
        );
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{YardId, ZoneId};

    use super::support::MemoryYardRepository;
    use crate::application::*;
    use crate::domain::value_object::gateway_kind::GatewayKind;
    use crate::error::YardError;

    fn yards(repo: &MemoryYardRepository) -> YardUseCase<MemoryYardRepository> {
        YardUseCase::new(Arc::new(repo.clone()), Arc::new(YardConfig::default()))
    }

    fn zones(repo: &MemoryYardRepository) -> ZoneUseCase<MemoryYardRepository> {
        ZoneUseCase::new(Arc::new(repo.clone()))
    }

    fn gateways(repo: &MemoryYardRepository) -> GatewayUseCase<MemoryYardRepository> {
        GatewayUseCase::new(Arc::new(repo.clone()))
    }

    fn yard_input(name: &str) -> YardInput {
        YardInput {
            name: name.to_string(),
            location: "Av. Paulista, 1000 - S\u{00E3}o Paulo".to_string(),
            max_capacity: 120,
        }
    }

    fn gateway_input(identifier: &str, zone_id: ZoneId) -> GatewayInput {
        GatewayInput {
            identifier: identifier.to_string(),
            kind: "entrance".to_string(),
            active: true,
            zone_id,
        }
    }

    #[tokio::test]
    async fn test_create_yard_validates() {
        let repo = MemoryYardRepository::default();

        let yard = yards(&repo).create(yard_input("  P\u{00E1}tio Centro ")).await.unwrap();
        assert_eq!(yard.details.name.as_str(), "P\u{00E1}tio Centro");

        let mut input = yard_input("Zero");
        input.max_capacity = 0;
        assert!(matches!(
            yards(&repo).create(input).await.unwrap_err(),
            YardError::Validation(_)
        ));

        let mut input = yard_input("No location");
        input.location = "   ".to_string();
        assert!(matches!(
            yards(&repo).create(input).await.unwrap_err(),
            YardError::Validation(_)
        ));

        assert_eq!(repo.counts().0, 1);
    }

    #[tokio::test]
    async fn test_list_yards_pages() {
        let repo = MemoryYardRepository::default();
        for i in 0..12 {
            yards(&repo).create(yard_input(&format!("P\u{00E1}tio {i}"))).await.unwrap();
        }

        let first = yards(&repo).list(None, None).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 12);
        assert_eq!(first.page.number(), 1);

        let second = yards(&repo).list(Some(2), None).await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[0].details.name.as_str(), "P\u{00E1}tio 10");

        let beyond = yards(&repo).list(Some(5), Some(5)).await.unwrap();
        assert!(beyond.items.is_empty());

        assert!(matches!(
            yards(&repo).list(Some(0), None).await.unwrap_err(),
            YardError::Validation(_)
        ));
        assert!(matches!(
            yards(&repo).list(None, Some(101)).await.unwrap_err(),
            YardError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_yard() {
        let repo = MemoryYardRepository::default();
        let missing = YardId::new();

        assert!(matches!(
            yards(&repo).update(&missing, yard_input("X")).await.unwrap_err(),
            YardError::YardNotFound
        ));
        assert!(matches!(
            yards(&repo).delete(&missing).await.unwrap_err(),
            YardError::YardNotFound
        ));
    }

    #[tokio::test]
    async fn test_zone_requires_yard() {
        let repo = MemoryYardRepository::default();

        let err = zones(&repo)
            .create(ZoneInput {
                name: "Zona A".to_string(),
                yard_id: YardId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, YardError::YardNotFound));

        let err = zones(&repo).list(Some(&YardId::new())).await.unwrap_err();
        assert!(matches!(err, YardError::YardNotFound));
    }

    #[tokio::test]
    async fn test_zone_moves_between_yards() {
        let repo = MemoryYardRepository::default();
        let north = yards(&repo).create(yard_input("Norte")).await.unwrap();
        let south = yards(&repo).create(yard_input("Sul")).await.unwrap();

        let zone = zones(&repo)
            .create(ZoneInput {
                name: "Zona A".to_string(),
                yard_id: north.yard_id,
            })
            .await
            .unwrap();

        let moved = zones(&repo)
            .update(
                &zone.zone_id,
                ZoneInput {
                    name: "Zona A2".to_string(),
                    yard_id: south.yard_id,
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.details.yard_id, south.yard_id);

        assert!(zones(&repo).list(Some(&north.yard_id)).await.unwrap().is_empty());
        assert_eq!(zones(&repo).list(Some(&south.yard_id)).await.unwrap().len(), 1);
        assert_eq!(zones(&repo).list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_gateway_identifier_unique() {
        let repo = MemoryYardRepository::default();
        let yard = yards(&repo).create(yard_input("Norte")).await.unwrap();
        let zone = zones(&repo)
            .create(ZoneInput {
                name: "Zona A".to_string(),
                yard_id: yard.yard_id,
            })
            .await
            .unwrap();

        let first = gateways(&repo)
            .create(gateway_input("GW-01", zone.zone_id))
            .await
            .unwrap();
        let second = gateways(&repo)
            .create(gateway_input("GW-02", zone.zone_id))
            .await
            .unwrap();

        let err = gateways(&repo)
            .create(gateway_input("GW-01", zone.zone_id))
            .await
            .unwrap_err();
        assert!(matches!(err, YardError::DuplicateGatewayIdentifier));

        let err = gateways(&repo)
            .update(&second.gateway_id, gateway_input("GW-01", zone.zone_id))
            .await
            .unwrap_err();
        assert!(matches!(err, YardError::DuplicateGatewayIdentifier));

        // Keeping its own identifier is not a conflict
        let mut input = gateway_input("GW-01", zone.zone_id);
        input.kind = "monitoring".to_string();
        input.active = false;
        let updated = gateways(&repo)
            .update(&first.gateway_id, input)
            .await
            .unwrap();
        assert_eq!(updated.details.kind, GatewayKind::Monitoring);
        assert!(!updated.details.active);
    }

    #[tokio::test]
    async fn test_gateway_requires_zone_and_kind() {
        let repo = MemoryYardRepository::default();

        let err = gateways(&repo)
            .create(gateway_input("GW-01", ZoneId::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, YardError::ZoneNotFound));

        let yard = yards(&repo).create(yard_input("Norte")).await.unwrap();
        let zone = zones(&repo)
            .create(ZoneInput {
                name: "Zona A".to_string(),
                yard_id: yard.yard_id,
            })
            .await
            .unwrap();

        let mut input = gateway_input("GW-01", zone.zone_id);
        input.kind = "camera".to_string();
        assert!(matches!(
            gateways(&repo).create(input).await.unwrap_err(),
            YardError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_layout_and_cascade() {
        let repo = MemoryYardRepository::default();
        let yard = yards(&repo).create(yard_input("Norte")).await.unwrap();
        let other = yards(&repo).create(yard_input("Sul")).await.unwrap();

        let mut zone_ids = Vec::new();
        for name in ["Zona A", "Zona B"] {
            let zone = zones(&repo)
                .create(ZoneInput {
                    name: name.to_string(),
                    yard_id: yard.yard_id,
                })
                .await
                .unwrap();
            zone_ids.push(zone.zone_id);
        }
        let other_zone = zones(&repo)
            .create(ZoneInput {
                name: "Zona C".to_string(),
                yard_id: other.yard_id,
            })
            .await
            .unwrap();

        gateways(&repo).create(gateway_input("GW-A1", zone_ids[0])).await.unwrap();
        gateways(&repo).create(gateway_input("GW-A2", zone_ids[0])).await.unwrap();
        gateways(&repo).create(gateway_input("GW-B1", zone_ids[1])).await.unwrap();
        gateways(&repo).create(gateway_input("GW-C1", other_zone.zone_id)).await.unwrap();

        let layout = yards(&repo).layout(&yard.yard_id).await.unwrap();
        assert_eq!(layout.zones.len(), 2);
        assert_eq!(layout.zones[0].gateways.len(), 2);
        assert_eq!(layout.zones[1].gateways.len(), 1);

        let zone_layout = zones(&repo).layout(&zone_ids[1]).await.unwrap();
        assert_eq!(zone_layout.gateways[0].details.identifier.as_str(), "GW-B1");

        yards(&repo).delete(&yard.yard_id).await.unwrap();
        assert_eq!(repo.counts(), (1, 1, 1));

        zones(&repo).delete(&other_zone.zone_id).await.unwrap();
        assert_eq!(repo.counts(), (1, 0, 0));
        assert!(matches!(
            zones(&repo).get(&other_zone.zone_id).await.unwrap_err(),
            YardError::ZoneNotFound
        ));
    }
}

#[cfg(test)]
mod http_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::support::MemoryYardRepository;
    use crate::application::config::YardConfig;
    use crate::presentation::router::yard_router_generic;

    fn app(repo: &MemoryYardRepository) -> Router {
        yard_router_generic(repo.clone(), YardConfig::default())
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(repo: &MemoryYardRepository, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app(repo).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, body)
    }

    async fn create_yard(repo: &MemoryYardRepository, name: &str) -> String {
        let (status, body) = send(
            repo,
            json_request(
                "POST",
                "/yards",
                serde_json::json!({ "name": name, "location": "Osasco", "maxCapacity": 80 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_yard_crud_over_http() {
        let repo = MemoryYardRepository::default();
        let yard_id = create_yard(&repo, "Norte").await;

        let (status, zone) = send(
            &repo,
            json_request(
                "POST",
                "/zones",
                serde_json::json!({ "name": "Zona A", "yardId": yard_id }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let zone_id = zone["id"].as_str().unwrap().to_string();

        let (status, gateway) = send(
            &repo,
            json_request(
                "POST",
                "/gateways",
                serde_json::json!({ "identifier": "GW-01", "kind": "exit", "zoneId": zone_id }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(gateway["kind"], "exit");
        assert_eq!(gateway["active"], true);

        let (status, layout) = send(
            &repo,
            Request::get(format!("/yards/{yard_id}")).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(layout["maxCapacity"], 80);
        assert_eq!(layout["zones"][0]["name"], "Zona A");
        assert_eq!(layout["zones"][0]["gateways"][0]["identifier"], "GW-01");

        let (status, updated) = send(
            &repo,
            json_request(
                "PUT",
                &format!("/yards/{yard_id}"),
                serde_json::json!({ "name": "Norte II", "location": "Barueri", "maxCapacity": 95 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Norte II");

        let (status, _) = send(
            &repo,
            Request::delete(format!("/yards/{yard_id}")).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(repo.counts(), (0, 0, 0));
    }

    #[tokio::test]
    async fn test_list_yards_query() {
        let repo = MemoryYardRepository::default();
        for name in ["A", "B", "C"] {
            create_yard(&repo, name).await;
        }

        let (status, body) = send(
            &repo,
            Request::get("/yards?page=2&pageSize=2").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["page"], 2);
        assert_eq!(body["pageSize"], 2);
        assert_eq!(body["items"][0]["name"], "C");

        let (status, body) = send(
            &repo,
            Request::get("/yards?pageSize=0").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_problem_details_for_missing_and_conflict() {
        let repo = MemoryYardRepository::default();
        let missing = uuid::Uuid::new_v4();

        let (status, body) = send(
            &repo,
            json_request(
                "POST",
                "/zones",
                serde_json::json!({ "name": "Zona A", "yardId": missing }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Yard not found");

        let yard_id = create_yard(&repo, "Norte").await;
        let (_, zone) = send(
            &repo,
            json_request(
                "POST",
                "/zones",
                serde_json::json!({ "name": "Zona A", "yardId": yard_id }),
            ),
        )
        .await;
        let gateway = serde_json::json!({
            "identifier": "GW-01",
            "kind": "entrance",
            "zoneId": zone["id"],
        });

        let (status, _) = send(&repo, json_request("POST", "/gateways", gateway.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = send(&repo, json_request("POST", "/gateways", gateway)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["action"].is_string());
    }
}
