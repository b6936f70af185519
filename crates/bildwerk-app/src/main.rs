// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bildwerk — desktop image editor with live camera capture.
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::editor::Editor;
use pages::settings::Settings;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Bildwerk starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(TabLayout)]
    #[route("/")]
    Editor {},
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    // Initialise backend services (config, camera handle)
    let svc = use_hook(AppServices::init);

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    let mut state = use_context_provider(|| Signal::new(state::EditorState::new(&svc)));

    // Optionally bring the live preview up immediately
    let svc_clone = svc.clone();
    use_hook(move || {
        if svc_clone.config().auto_start_preview {
            match svc_clone.start_camera() {
                Ok((width, height)) => {
                    tracing::info!(width, height, "camera preview auto-started");
                    state.write().camera_running = true;
                }
                Err(e) => tracing::warn!(error = %e, "auto-start camera failed"),
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent bottom tab layout wrapping all pages.
#[component]
fn TabLayout() -> Element {
    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }

            // Bottom tab bar
            nav { class: "tab-bar",
                style: "display: flex; justify-content: space-around; padding: 8px 0; border-top: 1px solid #e0e0e0; background: #fafafa;",
                TabButton { to: Route::Editor {}, label: "Editor", icon: "E" }
                TabButton { to: Route::Settings {}, label: "Settings", icon: "S" }
            }
        }
    }
}

#[component]
fn TabButton(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; text-decoration: none; color: #333; font-size: 12px;",
            span { style: "font-size: 20px;", "{icon}" }
            span { "{label}" }
        }
    }
}
