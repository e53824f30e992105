//! HTTP client for the Task Manager Plus API.
//!
//! Wraps reqwest and provides one method per endpoint the suites exercise.
//! When API routes or request formats change, update only this file.

use crate::auth::TokenProvider;
use crate::config::SuiteConfig;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct ApiClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// Base URL of the deployment under test, including the API version
    pub base_url: String,
    auth: TokenProvider,
}

impl ApiClient {
    pub fn new(config: &SuiteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to build reqwest client");
        let auth = TokenProvider::new(client.clone(), config);

        Self {
            client,
            base_url: config.base_url.clone(),
            auth,
        }
    }

    /// Re-authenticates the client as the given user.
    ///
    /// Every following request carries the new user's token.
    pub async fn authenticate_as(&self, username: &str, password: &str) -> Option<String> {
        self.auth.authenticate_as(username, password).await
    }

    // ========================================================================
    // Task Endpoints
    // ========================================================================

    /// POST /tasks
    pub async fn create_task(
        &self,
        title: &str,
        description: &str,
        due_date: &str,
        completed: bool,
    ) -> Response {
        let body = json!({
            "title": title,
            "description": description,
            "dueDate": due_date,
            "completed": completed
        });
        self.auth
            .with_auth_header(self.client.post(format!("{}/tasks", self.base_url)))
            .await
            .json(&body)
            .send()
            .await
            .expect("Create task request failed")
    }

    /// GET /tasks/{id}
    pub async fn get_task(&self, id: i64) -> Response {
        self.auth
            .with_auth_header(self.client.get(format!("{}/tasks/{}", self.base_url, id)))
            .await
            .send()
            .await
            .expect("Get task request failed")
    }

    /// PUT /tasks/{id}
    pub async fn update_task(
        &self,
        id: i64,
        title: &str,
        description: &str,
        due_date: &str,
        completed: bool,
    ) -> Response {
        let body = json!({
            "id": id,
            "title": title,
            "description": description,
            "dueDate": due_date,
            "completed": completed
        });
        self.auth
            .with_auth_header(self.client.put(format!("{}/tasks/{}", self.base_url, id)))
            .await
            .json(&body)
            .send()
            .await
            .expect("Update task request failed")
    }

    /// DELETE /tasks/{id}
    pub async fn delete_task(&self, id: i64) -> Response {
        self.auth
            .with_auth_header(
                self.client
                    .delete(format!("{}/tasks/{}", self.base_url, id)),
            )
            .await
            .send()
            .await
            .expect("Delete task request failed")
    }

    /// GET /tasks with filter and pagination query parameters
    pub async fn list_tasks(&self, query: &[(&str, String)]) -> Response {
        self.auth
            .with_auth_header(self.client.get(format!("{}/tasks", self.base_url)))
            .await
            .query(query)
            .send()
            .await
            .expect("List tasks request failed")
    }

    /// GET /tasks/noPagination with filter query parameters
    pub async fn list_tasks_no_pagination(&self, query: &[(&str, String)]) -> Response {
        self.auth
            .with_auth_header(
                self.client
                    .get(format!("{}/tasks/noPagination", self.base_url)),
            )
            .await
            .query(query)
            .send()
            .await
            .expect("List tasks without pagination request failed")
    }

    /// GET /tasks/hello - unauthenticated smoke endpoint
    pub async fn hello(&self) -> Response {
        self.client
            .get(format!("{}/tasks/hello", self.base_url))
            .send()
            .await
            .expect("Hello request failed")
    }

    // ========================================================================
    // Province Endpoints
    // ========================================================================

    /// POST /provinces
    pub async fn create_province(&self, name: &str, abbreviation: &str) -> Response {
        let body = json!({ "name": name, "abbreviation": abbreviation });
        self.auth
            .with_auth_header(self.client.post(format!("{}/provinces", self.base_url)))
            .await
            .json(&body)
            .send()
            .await
            .expect("Create province request failed")
    }

    /// PUT /provinces/{id}
    pub async fn update_province(&self, id: i64, name: &str, abbreviation: &str) -> Response {
        let body = json!({ "id": id, "name": name, "abbreviation": abbreviation });
        self.auth
            .with_auth_header(
                self.client
                    .put(format!("{}/provinces/{}", self.base_url, id)),
            )
            .await
            .json(&body)
            .send()
            .await
            .expect("Update province request failed")
    }

    /// DELETE /provinces/{id}
    pub async fn delete_province(&self, id: i64) -> Response {
        self.auth
            .with_auth_header(
                self.client
                    .delete(format!("{}/provinces/{}", self.base_url, id)),
            )
            .await
            .send()
            .await
            .expect("Delete province request failed")
    }

    /// GET /provinces with filter and pagination query parameters
    pub async fn list_provinces(&self, query: &[(&str, String)]) -> Response {
        self.auth
            .with_auth_header(self.client.get(format!("{}/provinces", self.base_url)))
            .await
            .query(query)
            .send()
            .await
            .expect("List provinces request failed")
    }

    /// GET /provinces/noPagination with filter query parameters
    pub async fn list_provinces_no_pagination(&self, query: &[(&str, String)]) -> Response {
        self.auth
            .with_auth_header(
                self.client
                    .get(format!("{}/provinces/noPagination", self.base_url)),
            )
            .await
            .query(query)
            .send()
            .await
            .expect("List provinces without pagination request failed")
    }

    // ========================================================================
    // User Endpoints
    // ========================================================================
    // The server's route for users is spelled "usserrs".

    /// POST /usserrs
    pub async fn create_user(&self, name: &str, email: &str, password: &str) -> Response {
        let body = json!({ "name": name, "email": email, "password": password });
        self.auth
            .with_auth_header(self.client.post(format!("{}/usserrs", self.base_url)))
            .await
            .json(&body)
            .send()
            .await
            .expect("Create user request failed")
    }

    /// PUT /usserrs/{id}
    pub async fn update_user(&self, id: i64, name: &str, email: &str) -> Response {
        let body = json!({ "id": id, "name": name, "email": email });
        self.auth
            .with_auth_header(self.client.put(format!("{}/usserrs/{}", self.base_url, id)))
            .await
            .json(&body)
            .send()
            .await
            .expect("Update user request failed")
    }

    /// PUT /usserrs/{id}/password
    pub async fn change_user_password(
        &self,
        id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Response {
        let body = json!({
            "currentPassword": current_password,
            "newPassword": new_password
        });
        self.auth
            .with_auth_header(
                self.client
                    .put(format!("{}/usserrs/{}/password", self.base_url, id)),
            )
            .await
            .json(&body)
            .send()
            .await
            .expect("Change user password request failed")
    }

    /// GET /usserrs with filter query parameters
    pub async fn list_users(&self, query: &[(&str, String)]) -> Response {
        self.auth
            .with_auth_header(self.client.get(format!("{}/usserrs", self.base_url)))
            .await
            .query(query)
            .send()
            .await
            .expect("List users request failed")
    }
}
