use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use api_service::domain::auth::service::AuthService;
use api_service::domain::object_id::ObjectId;
use api_service::domain::user::models::User;
use api_service::domain::user::ports::UserRepository;
use api_service::domain::user::service::UserService;
use api_service::inbound::graphql::build_schema;
use api_service::inbound::http::router::create_router;
use api_service::user::errors::UserError;
use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use chrono::TimeZone;
use chrono::Utc;

pub const TEST_SECRET: &[u8] = b"test_secret_key_that_is_at_least_32_bytes";

/// User store kept in memory, counting every lookup it serves
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<ObjectId, User>>,
    lookups: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, UserError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub authenticator: Arc<Authenticator>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::default());
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&repository),
            Duration::from_secs(5),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_service),
            Arc::clone(&authenticator),
            None,
        ));

        let app = create_router(auth_service, build_schema(user_service));

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to start server");
        });

        Self {
            address,
            repository,
            authenticator,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Store a user with the given credentials and return it
    pub fn seed_user(&self, id: &str, email: &str, password: &str) -> User {
        let created_at = Utc.timestamp_millis_opt(1_500_000_000_000).unwrap();
        let user = User {
            id: ObjectId::parse_str(id).expect("Invalid test object id"),
            email: email.to_string(),
            password_hash: self
                .authenticator
                .hash_password(password)
                .expect("Failed to hash password"),
            created_at,
            updated_at: created_at,
        };

        self.repository.insert(user.clone());
        user
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Log in and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Send a GraphQL query with a bearer token
    pub async fn graphql(
        &self,
        token: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> reqwest::Response {
        self.post("/graphql")
            .bearer_auth(token)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
