//! Application root and wasm mount point.

use yew::prelude::*;

use crate::config::ApiConfig;
use crate::core::lifecycle::HealthSourceHandle;
use crate::features::home::view::HomePage;
use crate::services::api::ApiClient;

#[function_component(CicdlearnApp)]
fn cicdlearn_app() -> Html {
    let source = use_memo(
        |_| HealthSourceHandle::new(ApiClient::new(ApiConfig::from_build_env())),
        (),
    );
    html! { <HomePage source={(*source).clone()} /> }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CicdlearnApp>::with_root(root).render();
    } else {
        yew::Renderer::<CicdlearnApp>::new().render();
    }
}
