//! Auth handlers. The by-id route is a placeholder that never reaches the
//! repository; incoming API keys are not validated anywhere.

use actix_web::{web, HttpResponse};

use crate::constants::STUB_AUTH_BY_ID;
use crate::errors::ApiError;
use crate::repositories::AuthRepository;

pub async fn get_auths_list(
    repository: web::Data<dyn AuthRepository>,
) -> Result<HttpResponse, ApiError> {
    let auths = repository
        .find_all()
        .await
        .map_err(|_| ApiError::BareBadRequest)?;

    Ok(HttpResponse::Ok().json(auths))
}

pub async fn get_auth(_path: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().body(STUB_AUTH_BY_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::models::Auth;

    struct FakeAuthRepo {
        auths: Vec<Auth>,
        fail: bool,
    }

    #[async_trait]
    impl AuthRepository for FakeAuthRepo {
        async fn create(&self, _auth: &Auth) -> Result<String, sqlx::Error> {
            Ok("1".to_string())
        }

        async fn find_all(&self) -> Result<Vec<Auth>, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            Ok(self.auths.clone())
        }

        async fn find_one(&self, _id: &str) -> Result<Auth, sqlx::Error> {
            Err(sqlx::Error::RowNotFound)
        }

        async fn update(&self, _auth: &Auth) -> Result<(), sqlx::Error> {
            Ok(())
        }

        async fn delete(&self, _id: &str) -> Result<(), sqlx::Error> {
            Ok(())
        }
    }

    macro_rules! service {
        ($repo:expr) => {{
            let repo: Arc<dyn AuthRepository> = Arc::new($repo);
            test::init_service(
                App::new()
                    .app_data(web::Data::from(repo))
                    .route("/auth", web::get().to(get_auths_list))
                    .route("/auth/{id}", web::get().to(get_auth)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_list_auth_records() {
        let app = service!(FakeAuthRepo {
            auths: vec![Auth {
                id: "1".to_string(),
                api_key: "key-123".to_string(),
            }],
            fail: false,
        });

        let resp = test::call_service(&app, test::TestRequest::get().uri("/auth").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let auths: Vec<Auth> = test::read_body_json(resp).await;
        assert_eq!(auths.len(), 1);
        assert_eq!(auths[0].api_key, "key-123");
    }

    #[actix_web::test]
    async fn test_list_failure_is_bare_400() {
        let app = service!(FakeAuthRepo {
            auths: Vec::new(),
            fail: true,
        });

        let resp = test::call_service(&app, test::TestRequest::get().uri("/auth").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_get_by_id_is_a_stub() {
        let app = service!(FakeAuthRepo {
            auths: Vec::new(),
            fail: false,
        });

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/auth/5").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "Auth ID");
    }
}
