use std::{sync::Arc, net::{SocketAddr, IpAddr, Ipv4Addr}, str::FromStr};
use clap::Parser;
use axum::{routing::get, Router};
use axum::http::{Response, StatusCode};
use axum::body::{boxed, Body};
use handlebars::Handlebars;
use lookup::LookupState;
use services::github_lookup_service::GitHubLookupService;
use tokio::sync::Mutex;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use reqwest::Client;

pub mod models;
pub mod controllers;
pub mod errors;
pub mod lookup;
pub mod services;
pub mod mappers;
pub mod validators;

use controllers::{index, lookup as lookup_controller};


// Command line interface
#[derive(Parser, Debug)]
#[clap(name="smol-lookup-form", about="A smol GitHub user/repo lookup form!")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,
}

pub struct AppState {
    registry: Handlebars<'static>,
    lookup: Mutex<LookupState>,
    github_lookup_service: GitHubLookupService,
}

#[tokio::main]
async fn main() {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Enable console logging
    tracing_subscriber::fmt::init();

    // Register templates
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("template", include_str!("templates/template.hbs")).unwrap();
    handlebars.register_template_string("index", include_str!("templates/index.hbs")).unwrap();
    handlebars.register_template_string("errors/500", include_str!("templates/errors/500.hbs")).unwrap();

    // Create reqwest client
    let client = Client::new();

    // Setup services
    let github_lookup_service = GitHubLookupService {
        client: client.clone(),
    };

    // Setup controller routes and inject app state
    let app_state = Arc::new(AppState {
        registry: handlebars,
        lookup: Mutex::new(LookupState::new()),
        github_lookup_service,
    });
    let app = Router::new()
        .route("/", get(index::get_index))
        .route("/lookup", get(lookup_controller::get_index))
        .fallback_service(get(|req| async move {
            match ServeDir::new(opt.static_dir).oneshot(req).await {
                Ok(res) => res.map(boxed),
                Err(err) => Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(boxed(Body::from(format!("error: {err}"))))
                    .expect("error response"),
            }
        }))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port
    ));
    log::info!("Now listening on http://{}", sock_addr);

    axum::Server::bind(&sock_addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
