//! Home page view.

use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::core::health::{HEALTH_HEADING, HealthState, PAGE_DESCRIPTION, PAGE_TITLE, status_line};
use crate::core::lifecycle::{HealthSourceHandle, MountGuard, probe_health};

#[derive(Properties, PartialEq)]
pub(crate) struct HomePageProps {
    pub(crate) source: HealthSourceHandle,
}

#[function_component(HomePage)]
pub(crate) fn home_page(props: &HomePageProps) -> Html {
    let health = use_state(HealthState::default);

    {
        let health = health.clone();
        let source = props.source.clone();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::new();
                let task_guard = guard.clone();
                yew::platform::spawn_local(async move {
                    if let Some(settled) = probe_health(source.source(), &task_guard).await {
                        health.set(settled);
                    }
                });
                move || guard.release()
            },
            (),
        );
    }

    html! {
        <main class="home" style="padding: 2rem; max-width: 40rem; margin: 0 auto;">
            <h1>{PAGE_TITLE}</h1>
            <p class="muted">{PAGE_DESCRIPTION}</p>
            <section class="health" style="margin-top: 1.5rem;">
                <h2>{HEALTH_HEADING}</h2>
                <HealthStatusView state={(*health).clone()} />
            </section>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct HealthStatusViewProps {
    pub(crate) state: HealthState,
}

#[function_component(HealthStatusView)]
pub(crate) fn health_status_view(props: &HealthStatusViewProps) -> Html {
    let line = status_line(&props.state);
    let class = classes!("health-status", line.tone());
    html! {
        <p
            class={class}
            style={line.inline_style().map(AttrValue::Static)}
            role={line.role().map(AttrValue::Static)}
            aria-busy={line.busy().map(AttrValue::Static)}
            data-testid={line.test_id().map(AttrValue::Static)}
        >
            {line.text.clone()}
        </p>
    }
}
