// ═══════════════════════════════════════════════════════════════════
// API Tests: HTTP Client, Session Guard, Catalog, Portfolios, Accounts
// ═══════════════════════════════════════════════════════════════════

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;

use atlas_core::config::Config;
use atlas_core::errors::CoreError;
use atlas_core::models::analysis::AnalysisAssumptions;
use atlas_core::models::auth::{LoginCredentials, TokenPair};
use atlas_core::models::contact::ContactSubmission;
use atlas_core::models::feedback::FeedbackSubmission;
use atlas_core::models::filters::PropertyFilters;
use atlas_core::models::portfolio::{CreatePortfolio, UpdatePortfolio, UpdatePortfolioProperty};
use atlas_core::models::property::Property;
use atlas_core::services::catalog_service::{ViewState, EMPTY_MESSAGE, LOAD_FAILED_TITLE};
use atlas_core::{AnalysisMode, AtlasClient};

// ═══════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════

fn client_for(server: &ServerGuard) -> AtlasClient {
    AtlasClient::new(Config {
        api_url: server.url(),
        auth_url: server.url(),
        ..Config::default()
    })
    .unwrap()
}

fn logged_in(server: &ServerGuard) -> AtlasClient {
    let client = client_for(server);
    client
        .session()
        .store_tokens(&TokenPair::new("tok", "ref"))
        .unwrap();
    client
}

fn property_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "address": format!("Rua do Ouro {id}, Lisboa"),
        "coordinates": [-9.1368, 38.7104],
        "price": "250000.00",
        "size_sqm": "85.00",
        "property_type": "apartment",
        "bedrooms": 2,
        "bathrooms": "1.0",
        "region": { "id": 1, "name": "Lisboa", "code": "LIS", "avg_rent": "1400.00" }
    })
}

fn page_json(results: Vec<serde_json::Value>, count: u64) -> String {
    json!({ "count": count, "next": null, "previous": null, "results": results }).to_string()
}

fn portfolio_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "is_default": id == 1,
        "property_count": 0,
        "total_value": "0.00",
        "average_price": null,
        "properties": []
    })
}

// ═══════════════════════════════════════════════════════════════════
// Requests
// ═══════════════════════════════════════════════════════════════════

mod requests {
    use super::*;

    #[tokio::test]
    async fn test_list_sends_only_active_filters_anonymously() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/properties/")
            .match_query(Matcher::Exact("search=Lisbon&price__gte=100000".into()))
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json(vec![property_json(1)], 1))
            .create_async()
            .await;

        let client = client_for(&server);
        let filters = PropertyFilters {
            search: Some("Lisbon".into()),
            min_price: Some(100_000),
            ..Default::default()
        };
        let page = client.properties().list(&filters).await.unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].price, 250_000.0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/properties/7/")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(property_json(7).to_string())
            .create_async()
            .await;

        let client = logged_in(&server);
        let property = client.properties().get(7).await.unwrap();

        assert_eq!(property.id, 7);
        assert_eq!(property.bedrooms, Some(2));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_repeated_reads_hit_the_cache() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/properties/7/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(property_json(7).to_string())
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        client.properties().get(7).await.unwrap();
        client.properties().get(7).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_detail_is_surfaced() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/properties/404/")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"Not found."}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.properties().get(404).await.unwrap_err();

        assert!(matches!(
            &err,
            CoreError::Http { status: 404, detail: Some(d) } if d == "Not found."
        ));
        assert_eq!(err.user_message(), "Not found.");
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_server_error_is_retryable() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/properties/1/")
            .with_status(503)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.properties().get(1).await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = AtlasClient::new(Config {
            api_url: "http://127.0.0.1:1".into(),
            ..Config::default()
        })
        .unwrap();
        let err = client.properties().get(1).await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/portfolios/3/")
            .with_status(204)
            .create_async()
            .await;

        let client = logged_in(&server);
        client.portfolios().delete(3).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_validation_happens_before_sending() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = logged_in(&server);
        let feedback = FeedbackSubmission {
            rating: 6,
            comment: None,
            page_url: None,
        };
        assert!(matches!(
            client.feedback().submit_feedback(&feedback).await,
            Err(CoreError::ValidationError(_))
        ));

        let contact = ContactSubmission {
            property: 1,
            name: "Ana".into(),
            email: "not-an-email".into(),
            phone: None,
            message: "Is it still available?".into(),
        };
        assert!(matches!(
            client.contact().submit(&contact).await,
            Err(CoreError::ValidationError(_))
        ));

        assert!(client
            .portfolios()
            .create(&CreatePortfolio::named("  "))
            .await
            .is_err());
        mock.assert_async().await;
    }
}

// ═══════════════════════════════════════════════════════════════════
// Session Guard
// ═══════════════════════════════════════════════════════════════════

mod session_guard {
    use super::*;

    #[tokio::test]
    async fn test_unauthorized_on_protected_route_redirects_to_login() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/portfolios/")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"Given token not valid for any token type"}"#)
            .create_async()
            .await;

        let client = logged_in(&server);
        client.navigator().set_current("/portfolio");

        let err = client.portfolios().list().await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(!client.session().is_authenticated());
        assert_eq!(client.navigator().current_path(), "/login");
        assert_eq!(
            client.navigator().redirect_after_login().as_deref(),
            Some("/portfolio")
        );
    }

    #[tokio::test]
    async fn test_unauthorized_on_public_route_only_clears_tokens() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/properties/5/")
            .with_status(401)
            .create_async()
            .await;

        let client = logged_in(&server);
        client.navigator().set_current("/properties/5");

        client.properties().get(5).await.unwrap_err();

        assert!(!client.session().is_authenticated());
        assert_eq!(client.navigator().current_path(), "/properties/5");
        assert!(client.navigator().history().is_empty());
        assert_eq!(client.navigator().redirect_after_login(), None);
    }

    #[tokio::test]
    async fn test_forbidden_keeps_session() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/portfolios/9/")
            .with_status(403)
            .create_async()
            .await;

        let client = logged_in(&server);
        client.navigator().set_current("/portfolio");

        let err = client.portfolios().get(9).await.unwrap_err();

        assert!(err.is_forbidden());
        assert!(client.session().is_authenticated());
        assert_eq!(client.navigator().current_path(), "/portfolio");
        assert_eq!(
            err.user_message(),
            atlas_core::errors::MSG_FORBIDDEN.to_string()
        );
    }

    #[tokio::test]
    async fn test_unreadable_response_is_treated_as_session_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/portfolios/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>login</html>")
            .create_async()
            .await;

        let client = logged_in(&server);
        client.navigator().set_current("/dashboard");

        let err = client.portfolios().list().await.unwrap_err();

        assert!(matches!(err, CoreError::Parsing(_)));
        assert!(!client.session().is_authenticated());
        assert_eq!(client.navigator().current_path(), "/login");
    }

    #[tokio::test]
    async fn test_login_returns_to_recorded_route() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/portfolios/")
            .with_status(401)
            .create_async()
            .await;
        server
            .mock("POST", "/api/auth/login/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access":"a2","refresh":"r2"}"#)
            .create_async()
            .await;

        let client = logged_in(&server);
        client.navigator().set_current("/portfolio");
        client.portfolios().list().await.unwrap_err();

        let target = client
            .login(&LoginCredentials::new("ana@example.com", "s3cret-pass"))
            .await
            .unwrap();

        assert_eq!(target, "/portfolio");
        assert_eq!(client.navigator().current_path(), "/portfolio");
        assert_eq!(client.navigator().redirect_after_login(), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Accounts
// ═══════════════════════════════════════════════════════════════════

mod accounts {
    use super::*;

    #[tokio::test]
    async fn test_login_persists_tokens_and_lands_on_dashboard() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login/")
            .match_body(Matcher::Json(json!({
                "email": "ana@example.com",
                "password": "s3cret-pass"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access":"acc","refresh":"ref"}"#)
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let token_file = dir.path().join("session.json");
        let client = AtlasClient::new(Config {
            auth_url: server.url(),
            token_file: Some(token_file.clone()),
            ..Config::default()
        })
        .unwrap();

        let target = client
            .login(&LoginCredentials::new("ana@example.com", "s3cret-pass"))
            .await
            .unwrap();

        assert_eq!(target, "/dashboard");
        assert_eq!(client.session().access_token().as_deref(), Some("acc"));
        assert!(token_file.exists());
        mock.assert_async().await;

        // A new client on the same file resumes the session.
        let resumed = AtlasClient::new(Config {
            token_file: Some(token_file),
            ..Config::default()
        })
        .unwrap();
        assert!(resumed.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_uses_error_field() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/auth/login/")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Invalid credentials"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .login(&LoginCredentials::new("ana@example.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(!client.session().is_authenticated());
        assert_eq!(client.navigator().current_path(), "/");
    }

    #[tokio::test]
    async fn test_refresh_keeps_refresh_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/refresh/")
            .match_body(Matcher::Json(json!({ "refresh": "ref" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access":"fresh"}"#)
            .create_async()
            .await;

        let client = logged_in(&server);
        let access = client.auth().refresh_token().await.unwrap();

        assert_eq!(access, "fresh");
        assert_eq!(
            client.session().tokens(),
            Some(TokenPair::new("fresh", "ref"))
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_refresh_without_session_fails_locally() {
        let server = Server::new_async().await;
        let client = client_for(&server);
        assert!(matches!(
            client.auth().refresh_token().await,
            Err(CoreError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_logout_forgets_tokens_and_cache() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/auth/me/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":1,"email":"ana@example.com","first_name":"Ana","last_name":""}"#)
            .create_async()
            .await;

        let client = logged_in(&server);
        let user = client.auth().current_user().await.unwrap();
        assert_eq!(user.display_name(), "Ana");
        assert!(!client.cache().is_empty());

        client.logout().unwrap();

        assert!(!client.session().is_authenticated());
        assert!(client.cache().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════════════

mod catalog {
    use super::*;

    #[tokio::test]
    async fn test_empty_result_offers_reset() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/properties/")
            .match_query(Matcher::Exact("search=Atlantis".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json(vec![], 0))
            .create_async()
            .await;

        let client = client_for(&server);
        let filters = PropertyFilters {
            search: Some("Atlantis".into()),
            ..Default::default()
        };

        match client.browse_properties(&filters).await {
            ViewState::Empty {
                message,
                reset_visible,
                ..
            } => {
                assert_eq!(message, EMPTY_MESSAGE);
                assert!(reset_visible);
            }
            other => panic!("expected empty state, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_becomes_error_state() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/properties/")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server);
        match client.browse_properties(&PropertyFilters::default()).await {
            ViewState::Error { title, retryable, .. } => {
                assert_eq!(title, LOAD_FAILED_TITLE);
                assert!(retryable);
            }
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_successful_browse_is_remembered() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/properties/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json(vec![property_json(1), property_json(2)], 30))
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let client = AtlasClient::new(Config {
            api_url: server.url(),
            filter_file: Some(dir.path().join("filters.json")),
            ..Config::default()
        })
        .unwrap();
        let filters = PropertyFilters {
            page: Some(2),
            min_bedrooms: Some(2),
            ..Default::default()
        };

        let view = client.browse_properties(&filters).await;
        let ready = view.ready().expect("properties loaded");
        assert_eq!(ready.properties.len(), 2);
        assert_eq!(ready.page, 2);
        assert_eq!(ready.showing_from, 13);
        assert_eq!(ready.showing_to, 24);
        assert_eq!(ready.page_count, 3);
        assert!(ready.show_pagination);

        let restored = client.restore_filters();
        assert_eq!(restored.min_bedrooms, Some(2));
        assert_eq!(restored.page, None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Portfolios
// ═══════════════════════════════════════════════════════════════════

mod portfolios {
    use super::*;

    #[tokio::test]
    async fn test_create_refreshes_list() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/portfolios/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json(vec![portfolio_json(1, "Main")], 1))
            .expect(2)
            .create_async()
            .await;
        let create = server
            .mock("POST", "/portfolios/")
            .match_body(Matcher::Json(json!({ "name": "Porto flats" })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(2, "Porto flats").to_string())
            .create_async()
            .await;

        let client = logged_in(&server);
        assert_eq!(client.portfolios().list().await.unwrap().len(), 1);
        assert_eq!(client.portfolios().list().await.unwrap().len(), 1);

        let created = client
            .portfolios()
            .create(&CreatePortfolio::named("Porto flats"))
            .await
            .unwrap();
        assert_eq!(created.id, 2);

        client.portfolios().list().await.unwrap();
        list.assert_async().await;
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_removing_property_refreshes_portfolio() {
        let mut server = Server::new_async().await;
        let detail = server
            .mock("GET", "/portfolios/1/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(1, "Main").to_string())
            .expect(2)
            .create_async()
            .await;
        server
            .mock("POST", "/portfolios/1/remove-property/")
            .match_body(Matcher::Json(json!({ "property_id": 42 })))
            .with_status(204)
            .create_async()
            .await;

        let client = logged_in(&server);
        client.portfolios().get(1).await.unwrap();
        client.portfolios().remove_property(1, 42).await.unwrap();
        client.portfolios().get(1).await.unwrap();
        detail.assert_async().await;
    }
    #[tokio::test]
    async fn test_delete_forgets_detail_and_default() {
        let mut server = Server::new_async().await;
        let detail = server
            .mock("GET", "/portfolios/2/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(2, "Old").to_string())
            .expect(2)
            .create_async()
            .await;
        let default = server
            .mock("GET", "/portfolios/default/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(1, "Main").to_string())
            .expect(2)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/portfolios/2/")
            .with_status(204)
            .create_async()
            .await;

        let client = logged_in(&server);
        client.portfolios().get(2).await.unwrap();
        client.portfolios().get_default().await.unwrap();

        client.portfolios().delete(2).await.unwrap();

        client.portfolios().get(2).await.unwrap();
        client.portfolios().get_default().await.unwrap();
        detail.assert_async().await;
        default.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_switching_default_refreshes_every_portfolio() {
        let mut server = Server::new_async().await;
        let default = server
            .mock("GET", "/portfolios/default/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(1, "Main").to_string())
            .expect(2)
            .create_async()
            .await;
        let previous = server
            .mock("GET", "/portfolios/1/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(1, "Main").to_string())
            .expect(2)
            .create_async()
            .await;
        server
            .mock("PATCH", "/portfolios/3/")
            .match_body(Matcher::Json(json!({ "is_default": true })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(3, "Lisbon").to_string())
            .create_async()
            .await;

        let client = logged_in(&server);
        client.portfolios().get(1).await.unwrap();
        client.portfolios().get_default().await.unwrap();

        let update = UpdatePortfolio {
            is_default: Some(true),
            ..Default::default()
        };
        client.portfolios().update(3, &update).await.unwrap();

        client.portfolios().get_default().await.unwrap();
        client.portfolios().get(1).await.unwrap();
        default.assert_async().await;
        previous.assert_async().await;
    }

    #[tokio::test]
    async fn test_renaming_keeps_other_details_cached() {
        let mut server = Server::new_async().await;
        let other = server
            .mock("GET", "/portfolios/1/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(1, "Main").to_string())
            .expect(1)
            .create_async()
            .await;
        let renamed = server
            .mock("GET", "/portfolios/3/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(3, "Lisbon").to_string())
            .expect(2)
            .create_async()
            .await;
        server
            .mock("PATCH", "/portfolios/3/")
            .match_body(Matcher::Json(json!({ "name": "Lisbon flats" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(3, "Lisbon flats").to_string())
            .create_async()
            .await;

        let client = logged_in(&server);
        client.portfolios().get(1).await.unwrap();
        client.portfolios().get(3).await.unwrap();

        let update = UpdatePortfolio {
            name: Some("Lisbon flats".into()),
            ..Default::default()
        };
        client.portfolios().update(3, &update).await.unwrap();

        client.portfolios().get(1).await.unwrap();
        client.portfolios().get(3).await.unwrap();
        other.assert_async().await;
        renamed.assert_async().await;
    }

    #[tokio::test]
    async fn test_editing_saved_property_refreshes_portfolio() {
        let mut server = Server::new_async().await;
        let detail = server
            .mock("GET", "/portfolios/1/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(portfolio_json(1, "Main").to_string())
            .expect(2)
            .create_async()
            .await;
        server
            .mock("PATCH", "/portfolios/1/update-property/42/")
            .match_body(Matcher::Json(json!({ "notes": "Call the agent" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": 9,
                    "property_id": 42,
                    "property_address": "Rua do Ouro 42, Lisboa",
                    "property_price": "250000.00",
                    "property_type": "apartment",
                    "size_sqm": "85.00",
                    "notes": "Call the agent",
                    "target_price": null
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = logged_in(&server);
        client.portfolios().get(1).await.unwrap();

        let edit = UpdatePortfolioProperty {
            notes: Some("Call the agent".into()),
            ..Default::default()
        };
        let saved = client.portfolios().update_property(1, 42, &edit).await.unwrap();
        assert_eq!(saved.notes, "Call the agent");

        client.portfolios().get(1).await.unwrap();
        detail.assert_async().await;
    }
}

// ═══════════════════════════════════════════════════════════════════
// Subscriptions and Analysis
// ═══════════════════════════════════════════════════════════════════

mod subscriptions {
    use super::*;

    fn paid_subscription() -> String {
        json!({
            "id": 11,
            "tier": {
                "id": 2, "name": "Pro", "slug": "pro",
                "price_monthly": "29.00", "price_yearly": "290.00",
                "features_list": ["Advanced analytics"], "is_active": true
            },
            "status": "active",
            "current_period_start": "2026-10-01T00:00:00Z",
            "current_period_end": "2026-11-01T00:00:00Z",
            "cancel_at_period_end": false,
            "is_active": true,
            "is_trialing": false,
            "days_remaining": 16
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_anonymous_user_is_on_free_plan() {
        let server = Server::new_async().await;
        let client = client_for(&server);
        let status = client.subscription_status().await.unwrap();
        assert_eq!(status.tier_slug, "free");
        assert!(!status.is_paid());
    }

    #[tokio::test]
    async fn test_unsubscribed_answer_maps_to_free() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/subscriptions/current/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"No active subscription"}"#)
            .create_async()
            .await;

        let client = logged_in(&server);
        let status = client.subscription_status().await.unwrap();
        assert_eq!(status.tier_name, "Free");
        assert!(!status.has_active_subscription);
    }

    #[tokio::test]
    async fn test_paid_feature_access_with_usage() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/subscriptions/current/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(paid_subscription())
            .create_async()
            .await;
        server
            .mock("GET", "/api/subscriptions/usage/")
            .match_query(Matcher::UrlEncoded("feature".into(), "advanced_analytics".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([{
                    "id": 1,
                    "feature_name": "Advanced analytics",
                    "feature_slug": "advanced_analytics",
                    "count": 12,
                    "period_start": "2026-10-01T00:00:00Z",
                    "period_end": "2026-11-01T00:00:00Z",
                    "is_within_limit": true
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let client = logged_in(&server);
        let access = client.feature_access("advanced_analytics").await.unwrap();

        assert!(access.has_access);
        assert_eq!(access.usage_count, 12);
        assert!(access.is_within_limit);
        assert_eq!(access.usage_limit, None);
    }

    #[tokio::test]
    async fn test_cancel_and_resume_refetch_subscription() {
        let mut server = Server::new_async().await;
        let current = server
            .mock("GET", "/api/subscriptions/current/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(paid_subscription())
            .expect(3)
            .create_async()
            .await;
        let cancel = server
            .mock("POST", "/api/subscriptions/cancel/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Subscription will be cancelled at period end"}"#)
            .create_async()
            .await;
        let resume = server
            .mock("POST", "/api/subscriptions/resume/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Subscription resumed"}"#)
            .create_async()
            .await;

        let client = logged_in(&server);
        let subscriptions = client.subscriptions();
        subscriptions.current().await.unwrap();
        subscriptions.current().await.unwrap();

        let answer = subscriptions.cancel().await.unwrap();
        assert_eq!(answer.message, "Subscription will be cancelled at period end");
        subscriptions.current().await.unwrap();

        subscriptions.resume().await.unwrap();
        subscriptions.current().await.unwrap();

        current.assert_async().await;
        cancel.assert_async().await;
        resume.assert_async().await;
    }

    #[tokio::test]
    async fn test_blank_feature_requests_all_usage() {
        let mut server = Server::new_async().await;
        let usage = server
            .mock("GET", "/api/subscriptions/usage/")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let client = logged_in(&server);
        assert!(client.subscriptions().usage(Some("")).await.unwrap().is_empty());
        assert!(client.subscriptions().usage(None).await.unwrap().is_empty());
        usage.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_analysis() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/properties/7/analyze/")
            .match_body(Matcher::PartialJson(json!({ "monthly_rent": 1400.0 })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "property_id": 7,
                    "strategy": "rental",
                    "assumptions": {
                        "monthly_rent": 1400.0, "annual_expenses": 2000.0,
                        "vacancy_rate": 0.05, "down_payment_percent": 0.2,
                        "interest_rate": 0.045, "loan_term_years": 30
                    },
                    "metrics": {
                        "gross_yield": 6.72, "net_yield": 5.58,
                        "monthly_cash_flow": 102.0, "annual_cash_flow": 1224.0,
                        "payback_years": 17.9, "cap_rate": 5.58,
                        "cash_on_cash_return": 2.45
                    },
                    "financing": null
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = logged_in(&server);
        let property: Property = serde_json::from_value(property_json(7)).unwrap();
        let session = client.analysis_session(property, AnalysisMode::Server);
        assert_eq!(session.assumptions().monthly_rent, 1400.0);

        let result = session.refresh().await.unwrap();
        assert_eq!(result.metrics.gross_yield, 6.72);
        assert!(result.financing.is_none());
        mock.assert_async().await;

        let local = client.analysis_session(
            serde_json::from_value(property_json(7)).unwrap(),
            AnalysisMode::Local,
        );
        let computed = local
            .update(AnalysisAssumptions::default())
            .await
            .unwrap()
            .expect("local analysis is immediate");
        assert_eq!(computed.property_id, 7);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Contact Requests, Feedback and Support
// ═══════════════════════════════════════════════════════════════════

mod messages {
    use super::*;

    fn contact_json(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "property": 7,
            "property_address": "Rua do Ouro 7, Lisboa",
            "name": "Ana Costa",
            "email": "ana@example.pt",
            "phone": null,
            "message": "Is it still available?",
            "contacted": false,
            "created_at": "2026-10-10T09:30:00Z"
        })
    }

    #[tokio::test]
    async fn test_contact_requests_are_paginated() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/contact/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json(vec![contact_json(5)], 1))
            .create_async()
            .await;
        server
            .mock("GET", "/contact/5/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(contact_json(5).to_string())
            .create_async()
            .await;

        let client = logged_in(&server);
        client.navigator().set_current("/dashboard");

        let requests = client.contact().list().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].name, "Ana Costa");

        let one = client.contact().get(5).await.unwrap();
        assert_eq!(one.property_address, "Rua do Ouro 7, Lisboa");

        assert!(client.session().is_authenticated());
        assert_eq!(client.navigator().current_path(), "/dashboard");
    }

    #[tokio::test]
    async fn test_feedback_and_support_lists_are_paginated() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/feedback/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json(
                vec![json!({
                    "id": 1, "rating": 4, "comment": "Useful maps",
                    "page_url": "/properties", "created_at": "2026-10-11T10:00:00Z"
                })],
                1,
            ))
            .create_async()
            .await;
        server
            .mock("GET", "/support/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json(
                vec![json!({
                    "id": 3, "email": "rui@example.pt", "subject": "Billing",
                    "message": "My invoice shows the wrong VAT number.",
                    "page_url": null, "status": "open",
                    "created_at": "2026-10-12T08:15:00Z"
                })],
                1,
            ))
            .create_async()
            .await;

        let client = logged_in(&server);
        client.navigator().set_current("/dashboard");

        let feedback = client.feedback().list_feedback().await.unwrap();
        assert_eq!(feedback[0].rating, 4);
        let support = client.feedback().list_support_messages().await.unwrap();
        assert_eq!(support[0].status, "open");

        assert!(client.session().is_authenticated());
        assert_eq!(client.navigator().current_path(), "/dashboard");
    }

    #[tokio::test]
    async fn test_sending_feedback_refreshes_list() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/feedback/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json(vec![], 0))
            .expect(2)
            .create_async()
            .await;
        server
            .mock("POST", "/feedback/")
            .match_body(Matcher::Json(json!({ "rating": 5 })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                json!({ "id": 2, "rating": 5, "created_at": "2026-10-12T12:00:00Z" }).to_string(),
            )
            .create_async()
            .await;

        let client = logged_in(&server);
        assert!(client.feedback().list_feedback().await.unwrap().is_empty());

        let sent = FeedbackSubmission {
            rating: 5,
            comment: None,
            page_url: None,
        };
        client.feedback().submit_feedback(&sent).await.unwrap();

        client.feedback().list_feedback().await.unwrap();
        list.assert_async().await;
    }
}
