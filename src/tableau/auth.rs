//! Sign-in and sign-out

use log::debug;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::{Result, TableauError};
use crate::tableau::TableauClient;

/// Sign-in request body
#[derive(Serialize, Debug)]
struct SignInRequest<'a> {
    credentials: SignInCredentials<'a>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SignInCredentials<'a> {
    personal_access_token_name: &'a str,
    personal_access_token_secret: &'a str,
    site: SiteRef<'a>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SiteRef<'a> {
    content_url: &'a str,
}

/// Sign-in response body
#[derive(Deserialize, Debug)]
struct SignInResponse {
    credentials: SignedInCredentials,
}

#[derive(Deserialize, Debug)]
struct SignedInCredentials {
    token: String,
    site: SignedInSite,
}

#[derive(Deserialize, Debug)]
struct SignedInSite {
    id: String,
}

impl TableauClient {
    /// Sign in with the personal access token and store token and site id
    ///
    /// Any status other than 200 is an `Authentication` error and leaves the
    /// session signed out.
    pub async fn sign_in(&mut self) -> Result<()> {
        let url = self.api_url(api::SIGN_IN);
        debug!(
            "Signing in at {} as '{}' (site '{}')",
            url,
            self.credentials.name,
            self.site_content_url()
        );

        let payload = SignInRequest {
            credentials: SignInCredentials {
                personal_access_token_name: &self.credentials.name,
                personal_access_token_secret: &self.credentials.secret,
                site: SiteRef {
                    content_url: self.site_content_url(),
                },
            },
        };

        let response = self.post(&url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(TableauError::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        let signed_in: SignInResponse = serde_json::from_str(&body)?;
        debug!("Signed in to site id {}", signed_in.credentials.site.id);
        self.session
            .start(signed_in.credentials.token, signed_in.credentials.site.id);
        Ok(())
    }

    /// Sign out if a session is active
    ///
    /// Never fails: the local session is cleared whatever the server says.
    pub async fn sign_out(&mut self) {
        let Some(token) = self
            .session
            .token()
            .filter(|t| !t.is_empty())
            .map(str::to_string)
        else {
            debug!("No active session, skipping sign-out");
            self.session.clear();
            return;
        };

        let url = self.api_url(api::SIGN_OUT);
        debug!("Signing out at {}", url);

        match self.post(&url).header(api::AUTH_HEADER, token).send().await {
            Ok(response) => debug!("Sign-out returned {}", response.status()),
            Err(e) => debug!("Sign-out failed, ignoring: {}", e),
        }

        self.session.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sign_in_response(token: &str, site_id: &str) -> serde_json::Value {
        serde_json::json!({
            "credentials": {
                "token": token,
                "site": {"id": site_id, "contentUrl": "my-site"},
                "user": {"id": "u-1"}
            }
        })
    }

    #[tokio::test]
    async fn test_sign_in_success_sets_session() {
        let mock_server = MockServer::start().await;
        let mut client = TableauClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/3.19/auth/signin"))
            .and(body_json(serde_json::json!({
                "credentials": {
                    "personalAccessTokenName": "pat-name",
                    "personalAccessTokenSecret": "pat-secret",
                    "site": {"contentUrl": "my-site"}
                }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(sign_in_response("tok-123", "site-abc")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        client.sign_in().await.unwrap();

        assert!(client.session().is_signed_in());
        assert_eq!(client.session().token(), Some("tok-123"));
        assert_eq!(client.session().site_id(), Some("site-abc"));
    }

    #[tokio::test]
    async fn test_sign_in_rejected_is_authentication_error() {
        let mock_server = MockServer::start().await;
        let mut client = TableauClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/3.19/auth/signin"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Signin Error"))
            .mount(&mock_server)
            .await;

        let result = client.sign_in().await;

        match result {
            Err(TableauError::Authentication { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "Signin Error");
            }
            other => panic!("Expected Authentication, got {:?}", other),
        }
        assert!(!client.session().is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_in_malformed_body_leaves_session_empty() {
        let mock_server = MockServer::start().await;
        let mut client = TableauClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/3.19/auth/signin"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"credentials": {}})),
            )
            .mount(&mock_server)
            .await;

        let result = client.sign_in().await;

        assert!(matches!(result, Err(TableauError::Json(_))));
        assert!(!client.session().is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_out_sends_token_and_clears_session() {
        let mock_server = MockServer::start().await;
        let mut client = TableauClient::signed_in_test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/3.19/auth/signout"))
            .and(header("X-Tableau-Auth", "test-token"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.sign_out().await;

        assert!(!client.session().is_signed_in());
        assert!(client.session().token().is_none());
        assert!(client.session().site_id().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_without_session_is_noop() {
        let mock_server = MockServer::start().await;
        let mut client = TableauClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        client.sign_out().await;
        client.sign_out().await;

        assert!(!client.session().is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_out_with_empty_token_makes_no_request() {
        let mock_server = MockServer::start().await;
        let mut client = TableauClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/3.19/auth/signin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sign_in_response("", "s")))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/3.19/auth/signout"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        client.sign_in().await.unwrap();
        assert!(!client.session().is_signed_in());

        client.sign_out().await;

        assert!(client.session().token().is_none());
        assert!(client.session().site_id().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_server_error_still_clears_session() {
        let mock_server = MockServer::start().await;
        let mut client = TableauClient::signed_in_test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/3.19/auth/signout"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        client.sign_out().await;

        assert!(!client.session().is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_out_unreachable_server_still_clears_session() {
        // Nothing listens on port 9 of localhost
        let mut client = TableauClient::signed_in_test_client("http://127.0.0.1:9");

        client.sign_out().await;

        assert!(!client.session().is_signed_in());
    }
}
