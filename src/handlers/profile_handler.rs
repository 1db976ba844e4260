//! Profile handlers: list, fetch by username, and the one create route
//! this service exposes.

use actix_web::{web, HttpResponse};
use log::{debug, warn};
use serde_json::json;

use crate::constants::MSG_USER_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::Profile;
use crate::repositories::ProfileRepository;

pub async fn get_profiles_list(
    repository: web::Data<dyn ProfileRepository>,
) -> Result<HttpResponse, ApiError> {
    let profiles = repository
        .find_all()
        .await
        .map_err(|_| ApiError::BareBadRequest)?;

    Ok(HttpResponse::Ok().json(profiles))
}

pub async fn get_profile(
    repository: web::Data<dyn ProfileRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    debug!("Fetching profile for username: {}", username);

    let profile = repository
        .find_one(&username)
        .await
        .map_err(|err| match err {
            sqlx::Error::RowNotFound => {
                warn!("Profile not found for username: {}", username);
                ApiError::NotFound(MSG_USER_NOT_FOUND.to_string())
            }
            other => ApiError::BadRequest(other.to_string()),
        })?;

    let body =
        serde_json::to_string(&profile).map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// The body is decoded by hand so a malformed payload yields a 400 with an
/// error body rather than the framework's default rejection.
pub async fn create_profile(
    repository: web::Data<dyn ProfileRepository>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let profile: Profile =
        serde_json::from_slice(&body).map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let id = repository
        .create(&profile)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(HttpResponse::Created().json(json!({ "id": id })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct FakeProfileRepo {
        profiles: Mutex<Vec<Profile>>,
        fail: bool,
    }

    impl FakeProfileRepo {
        fn empty() -> Arc<Self> {
            Arc::new(Self {
                profiles: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                profiles: Mutex::new(Vec::new()),
                fail: true,
            })
        }
    }

    #[async_trait]
    impl ProfileRepository for FakeProfileRepo {
        async fn create(&self, profile: &Profile) -> Result<String, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            let mut profiles = self.profiles.lock().unwrap();
            let user_id = profiles.len() as i64 + 1;
            let mut stored = profile.clone();
            stored.user_id = user_id;
            profiles.push(stored);
            Ok(user_id.to_string())
        }

        async fn find_all(&self) -> Result<Vec<Profile>, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            Ok(self.profiles.lock().unwrap().clone())
        }

        async fn find_one(&self, username: &str) -> Result<Profile, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            self.profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.username == username)
                .cloned()
                .ok_or(sqlx::Error::RowNotFound)
        }

        async fn update(&self, profile: &Profile) -> Result<(), sqlx::Error> {
            let mut profiles = self.profiles.lock().unwrap();
            if let Some(existing) = profiles.iter_mut().find(|p| p.user_id == profile.user_id) {
                *existing = profile.clone();
            }
            Ok(())
        }

        async fn delete(&self, user_id: &str) -> Result<(), sqlx::Error> {
            self.profiles
                .lock()
                .unwrap()
                .retain(|p| p.user_id.to_string() != user_id);
            Ok(())
        }
    }

    macro_rules! service {
        ($repo:expr) => {{
            let repo: Arc<dyn ProfileRepository> = $repo;
            test::init_service(
                App::new()
                    .app_data(web::Data::from(repo))
                    .route("/profile", web::get().to(get_profiles_list))
                    .route("/profile/create", web::post().to(create_profile))
                    .route("/profile/{username}", web::get().to(get_profile)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_create_then_get_returns_equivalent_record() {
        let app = service!(FakeProfileRepo::empty());

        let payload = json!({
            "username": "dave",
            "firstname": "Dave",
            "lastname": "Jones",
            "phone": "555-0100",
            "address": "1 Main St",
            "city": "Springfield",
            "school": "Springfield High"
        });
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/profile/create")
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], "1");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/profile/dave").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let profile: Profile = test::read_body_json(resp).await;
        assert_eq!(profile.user_id, 1);
        assert_eq!(profile.username, "dave");
        assert_eq!(profile.first_name, "Dave");
        assert_eq!(profile.school, "Springfield High");
    }

    #[actix_web::test]
    async fn test_create_malformed_json_is_400_with_body() {
        let app = service!(FakeProfileRepo::empty());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/profile/create")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_repository_failure_is_500() {
        let app = service!(FakeProfileRepo::failing());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/profile/create")
                .set_json(json!({ "username": "erin" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_get_unknown_profile_is_404() {
        let app = service!(FakeProfileRepo::empty());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/profile/nobody").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "User not found");
    }

    #[actix_web::test]
    async fn test_list_failure_is_bare_400() {
        let app = service!(FakeProfileRepo::failing());

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/profile").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }
}
