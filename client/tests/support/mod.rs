//! In-process fake of the food API used by adapter and flow tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use food_delivery_client::outbound::http::HttpFoodApi;
use serde_json::Value;
use url::Url;

/// How the fake answers `GET /food`.
#[derive(Debug, Clone)]
pub enum FoodReply {
    /// 200 with the given JSON array of strings.
    Items(Vec<&'static str>),
    /// Given status with a raw body.
    Status(u16, &'static str),
}

/// How the fake answers `POST /auth/signup`.
#[derive(Debug, Clone)]
pub enum SignUpReply {
    /// 200 with `{"token": <token>}`.
    Token(&'static str),
    /// Given status with a raw body.
    Status(u16, &'static str),
    /// 200 with a raw body, for decode failures.
    Raw(&'static str),
    /// Sleep before answering with a token, for timeouts.
    Slow(Duration),
}

/// Request observed by the fake.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
    pub body: Option<Value>,
}

struct FakeState {
    food: FoodReply,
    sign_up: SignUpReply,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

/// Running fake server; stop it with [`FakeFoodServer::stop`].
pub struct FakeFoodServer {
    base_url: Url,
    handle: ServerHandle,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeFoodServer {
    /// Bind on an ephemeral loopback port and start serving.
    pub fn start(food: FoodReply, sign_up: SignUpReply) -> Self {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(FakeState {
            food,
            sign_up,
            recorded: Arc::clone(&recorded),
        });
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .route("/food", web::get().to(food_handler))
                .route("/auth/signup", web::post().to(sign_up_handler))
        })
        .workers(1)
        .shutdown_timeout(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake food server");
        let addr = *server.addrs().first().expect("bound address");
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            base_url: Url::parse(&format!("http://{addr}")).expect("loopback URL"),
            handle,
            recorded,
        }
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Adapter pointed at this server, bypassing any system proxy.
    pub fn api(&self, timeout: Duration) -> HttpFoodApi {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        HttpFoodApi::from_client(self.base_url(), client)
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().expect("recorded mutex").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn header(request: &HttpRequest, name: header::HeaderName) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn record(state: &FakeState, request: &HttpRequest, body: Option<Value>) {
    state.recorded.lock().expect("recorded mutex").push(Recorded {
        method: request.method().to_string(),
        path: request.path().to_owned(),
        accept: header(request, header::ACCEPT),
        user_agent: header(request, header::USER_AGENT),
        body,
    });
}

fn status_reply(code: u16, body: &'static str) -> HttpResponse {
    let status = StatusCode::from_u16(code).expect("valid status code");
    HttpResponse::build(status).body(body)
}

async fn food_handler(state: web::Data<FakeState>, request: HttpRequest) -> HttpResponse {
    record(&state, &request, None);
    match &state.food {
        FoodReply::Items(items) => HttpResponse::Ok().json(items),
        FoodReply::Status(code, body) => status_reply(*code, *body),
    }
}

async fn sign_up_handler(
    state: web::Data<FakeState>,
    request: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    record(&state, &request, Some(body.into_inner()));
    match &state.sign_up {
        SignUpReply::Token(token) => {
            HttpResponse::Ok().json(serde_json::json!({ "token": token }))
        }
        SignUpReply::Status(code, body) => status_reply(*code, *body),
        SignUpReply::Raw(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(*body),
        SignUpReply::Slow(delay) => {
            tokio::time::sleep(*delay).await;
            HttpResponse::Ok().json(serde_json::json!({ "token": "late" }))
        }
    }
}
