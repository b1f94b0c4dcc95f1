//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let state = backend::app_state();

        let warm_state = state.clone();
        tokio::spawn(async move {
            backend::api::pages::prewarm_pages(&warm_state.0).await;
        });

        Ok(dioxus::server::router(App).merge(backend::server_extra::router(state)))
    });
}
