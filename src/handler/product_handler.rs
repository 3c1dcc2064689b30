//! # Product Resource Handler
//!
//! One axum handler per route. Each handler decodes the request (identifier,
//! body, query), calls exactly one [`ProductUseCase`] operation and encodes the
//! outcome. Decode failures are answered with `400` before the use case is
//! reached; use-case failures are mapped by kind through [`ApiError`].

use crate::handler::dto::{CreateProductRequest, ProductResponse};
use crate::handler::error::ApiError;
use crate::handler::query::ListParams;
use crate::model::ProductId;
use crate::use_case::ProductUseCase;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Router state shared by every product handler.
pub type SharedUseCase = Arc<dyn ProductUseCase>;

fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse::<i64>()
        .map(ProductId)
        .map_err(|_| ApiError::bad_request("Invalid product ID"))
}

fn decode_body(body: &[u8]) -> Result<CreateProductRequest, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Body failed to decode");
        ApiError::bad_request("Invalid request payload")
    })
}

#[instrument(skip(use_case, body))]
pub async fn create_product(
    State(use_case): State<SharedUseCase>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request = decode_body(&body)?;
    let id = use_case.create_product(request.into_create()).await?;
    info!(product_id = %id, "Product created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(use_case))]
pub async fn get_product(
    State(use_case): State<SharedUseCase>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    match use_case.get_product(id).await? {
        Some(product) => Ok(Json(ProductResponse::from(product))),
        None => Err(ApiError::not_found("Product not found")),
    }
}

/// Full replacement. The identifier is checked before the body is decoded.
#[instrument(skip(use_case, body))]
pub async fn update_product(
    State(use_case): State<SharedUseCase>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let request = decode_body(&body)?;
    use_case.update_product(id, request.into_update()).await?;
    info!(product_id = %id, "Product replaced");
    Ok(StatusCode::OK)
}

#[instrument(skip(use_case))]
pub async fn delete_product(
    State(use_case): State<SharedUseCase>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    use_case.delete_product(id).await?;
    info!(product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all)]
pub async fn list_products(
    State(use_case): State<SharedUseCase>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let ListParams { filter, page } = ListParams::from_pairs(pairs)?;
    debug!(?filter, limit = page.limit, offset = page.offset, "Listing products");

    let products = use_case.list_products(filter, page).await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::error::ErrorBody;
    use crate::handler::product_routes;
    use crate::model::{Page, Product, ProductCreate, ProductFilter, ProductUpdate};
    use crate::product_actor::ProductError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, Response};
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Use case that counts calls and answers from fixed data.
    #[derive(Default)]
    struct StubUseCase {
        calls: AtomicUsize,
        stored: Option<Product>,
        failure: Option<ProductError>,
        last_list: Mutex<Option<(ProductFilter, Page)>>,
    }

    impl StubUseCase {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn record(&self) -> Result<(), ProductError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ProductUseCase for StubUseCase {
        async fn create_product(&self, _params: ProductCreate) -> Result<ProductId, ProductError> {
            self.record()?;
            Ok(ProductId(1))
        }

        async fn get_product(&self, _id: ProductId) -> Result<Option<Product>, ProductError> {
            self.record()?;
            Ok(self.stored.clone())
        }

        async fn update_product(
            &self,
            id: ProductId,
            update: ProductUpdate,
        ) -> Result<Product, ProductError> {
            self.record()?;
            let mut product = self.stored.clone().ok_or(ProductError::NotFound(id))?;
            product.replace(update);
            Ok(product)
        }

        async fn delete_product(&self, _id: ProductId) -> Result<(), ProductError> {
            self.record()
        }

        async fn list_products(
            &self,
            filter: ProductFilter,
            page: Page,
        ) -> Result<Vec<Product>, ProductError> {
            self.record()?;
            *self.last_list.lock().unwrap() = Some((filter, page));
            Ok(self.stored.clone().into_iter().collect())
        }
    }

    fn chair() -> Product {
        Product {
            id: ProductId(42),
            name: "Chair".to_string(),
            description: "Oak".to_string(),
            category: "furniture".to_string(),
            color: "brown".to_string(),
            price: 120.0,
            quantity: 4,
        }
    }

    const VALID_BODY: &str =
        r#"{"name":"Chair","description":"Oak","category":"furniture","color":"brown","price":120.0,"quantity":4}"#;

    async fn send(stub: &Arc<StubUseCase>, method: &str, uri: &str, body: &str) -> Response<Body> {
        let shared: SharedUseCase = stub.clone();
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        product_routes(shared).oneshot(request).await.unwrap()
    }

    async fn body_bytes(response: Response<Body>) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    async fn error_text(response: Response<Body>) -> String {
        let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
        body.error
    }

    #[tokio::test]
    async fn test_integer_id_is_accepted() {
        let stub = Arc::new(StubUseCase {
            stored: Some(chair()),
            ..Default::default()
        });

        let response = send(&stub, "GET", "/products/42", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        let product: ProductResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(product.id, 42);
        assert_eq!(product.name, "Chair");
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_non_integer_id_never_reaches_use_case() {
        let stub = Arc::new(StubUseCase::default());

        for (method, uri) in [
            ("GET", "/products/abc"),
            ("GET", "/products/1.5"),
            ("PUT", "/products/abc"),
            ("DELETE", "/products/abc"),
        ] {
            let response = send(&stub, method, uri, VALID_BODY).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
            assert_eq!(error_text(response).await, "Invalid product ID");
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_use_case() {
        let stub = Arc::new(StubUseCase::default());

        for (method, uri) in [("POST", "/products"), ("PUT", "/products/42")] {
            for body in ["{not json", r#"{"name":"Chair"}"#, ""] {
                let response = send(&stub, method, uri, body).await;
                assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {body}");
                assert_eq!(error_text(response).await, "Invalid request payload");
            }
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_update_checks_id_before_body() {
        let stub = Arc::new(StubUseCase::default());
        let response = send(&stub, "PUT", "/products/abc", "{not json").await;
        assert_eq!(error_text(response).await, "Invalid product ID");
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let stub = Arc::new(StubUseCase::default());

        let response = send(&stub, "GET", "/products/7", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_text(response).await, "Product not found");
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_success_statuses_and_empty_bodies() {
        let stub = Arc::new(StubUseCase {
            stored: Some(chair()),
            ..Default::default()
        });

        let response = send(&stub, "POST", "/products", VALID_BODY).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(body_bytes(response).await.is_empty());

        let response = send(&stub, "PUT", "/products/42", VALID_BODY).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());

        let response = send(&stub, "DELETE", "/products/42", "").await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_bytes(response).await.is_empty());

        assert_eq!(stub.calls(), 3);
    }

    #[tokio::test]
    async fn test_list_defaults() {
        let stub = Arc::new(StubUseCase::default());

        let response = send(&stub, "GET", "/products", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"[]");

        let (filter, page) = stub.last_list.lock().unwrap().clone().unwrap();
        assert!(filter.is_empty());
        assert_eq!(page, Page { limit: 10, offset: 0 });
    }

    #[tokio::test]
    async fn test_list_first_filter_value_wins() {
        let stub = Arc::new(StubUseCase {
            stored: Some(chair()),
            ..Default::default()
        });

        let response = send(
            &stub,
            "GET",
            "/products?limit=5&offset=2&color=red&color=blue",
            "",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let listed: Vec<ProductResponse> =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(listed.len(), 1);

        let (filter, page) = stub.last_list.lock().unwrap().clone().unwrap();
        assert_eq!(filter.color.as_deref(), Some("red"));
        assert_eq!(filter.name, None);
        assert_eq!(page, Page { limit: 5, offset: 2 });
    }

    #[tokio::test]
    async fn test_list_rejects_bad_query() {
        let stub = Arc::new(StubUseCase::default());

        for uri in ["/products?size=large", "/products?limit=many", "/products?offset=-3"] {
            let response = send(&stub, "GET", uri, "").await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_use_case_errors_map_by_kind() {
        let cases = [
            (ProductError::NotFound(ProductId(42)), StatusCode::NOT_FOUND),
            (ProductError::Conflict("stale".into()), StatusCode::CONFLICT),
            (
                ProductError::Unavailable("Actor closed".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ProductError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (failure, status) in cases {
            let expected = failure.to_string();
            let stub = Arc::new(StubUseCase {
                failure: Some(failure),
                ..Default::default()
            });
            let response = send(&stub, "DELETE", "/products/42", "").await;
            assert_eq!(response.status(), status);
            assert_eq!(error_text(response).await, expected);
            assert_eq!(stub.calls(), 1);
        }
    }
}
