// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — persistent app configuration.

use dioxus::prelude::*;

use crate::services::app_services::AppServices;
use crate::state::EditorState;

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<EditorState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<String>::None);

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Camera" }
                NumberRow {
                    label: "Camera device index",
                    value: state.read().config.camera_index,
                    on_change: move |v: u32| { state.write().config.camera_index = v; },
                }
                NumberRow {
                    label: "Requested frame width",
                    value: state.read().config.camera_width,
                    on_change: move |v: u32| {
                        if v > 0 {
                            state.write().config.camera_width = v;
                        }
                    },
                }
                NumberRow {
                    label: "Requested frame height",
                    value: state.read().config.camera_height,
                    on_change: move |v: u32| {
                        if v > 0 {
                            state.write().config.camera_height = v;
                        }
                    },
                }
                SettingRow {
                    label: "Start live preview on launch",
                    checked: state.read().config.auto_start_preview,
                    on_toggle: move |v: bool| { state.write().config.auto_start_preview = v; },
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Export" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "JPEG quality (1-100)" }
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{state.read().config.jpeg_quality}",
                        onchange: move |evt| {
                            if let Ok(quality) = evt.value().parse::<u8>()
                                && (1..=100).contains(&quality)
                            {
                                state.write().config.jpeg_quality = quality;
                            }
                        },
                    }
                }
            }

            // Save button
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some("Settings saved.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Save failed: {e}")));
                            }
                        }
                    }
                },
                "Save Settings"
            }

            if let Some(msg) = save_msg.read().clone() {
                p { style: "text-align: center; color: #1a7f37; margin-top: 8px;", "{msg}" }
            }
        }
    }
}

#[component]
fn NumberRow(label: &'static str, value: u32, on_change: EventHandler<u32>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "number",
                style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                value: "{value}",
                onchange: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<u32>() {
                        on_change.call(parsed);
                    }
                },
            }
        }
    }
}

#[component]
fn SettingRow(label: &'static str, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| on_toggle.call(evt.checked()),
            }
        }
    }
}
