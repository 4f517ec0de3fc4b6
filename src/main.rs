#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{routing::post, Router};
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use messenger_auth::app::App;
    use messenger_auth::config::Config;
    use messenger_auth::fileserv::file_and_error_handler;
    use tower_http::trace::TraceLayer;

    let config = Config::init().expect("invalid configuration");

    tracing_subscriber::fmt()
        .with_max_level(config.environment.log_level())
        .init();

    messenger_auth::auth::init_upstream(config).expect("identity client initialized twice");
    tracing::info!("Forwarding auth requests to {}", config.identity_url);

    let conf = get_configuration(None)
        .await
        .expect("failed to read leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/api/*fn_name", post(leptos_axum::handle_server_fns))
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // client-side entry is `hydrate()` in lib.rs
}
