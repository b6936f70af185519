// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editor page — viewport, camera controls, channel preview, and the
// transform parameter form.
//
// The viewport shows either the live camera frame (pre-capture) or the
// session's current buffer, optionally through the display-only channel
// filter. Committing changes goes exclusively through `Session::apply`;
// nothing on the render path can touch the session.

use base64::Engine as _;
use dioxus::prelude::*;

use bildwerk_core::human_errors::Severity;
use bildwerk_core::types::{Channel, TransformParams};
use bildwerk_image::{channel, PixelBuffer, Session};

use crate::services::app_services::AppServices;
use crate::state::{EditorState, StatusLine};

#[component]
pub fn Editor() -> Element {
    let mut state = use_context::<Signal<EditorState>>();
    let svc = use_context::<AppServices>();

    let mut width_input = use_signal(String::new);
    let mut height_input = use_signal(String::new);
    let mut brightness_input = use_signal(String::new);
    let mut center_x_input = use_signal(String::new);
    let mut center_y_input = use_signal(String::new);
    let mut radius_input = use_signal(String::new);

    // Live preview loop, ~30 fps while the camera runs. A dropped frame is
    // skipped silently so a transient device hiccup never interrupts the
    // stream.
    let svc_preview = svc.clone();
    let _preview = use_resource(move || {
        let svc = svc_preview.clone();
        async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(33)).await;
                if !state.read().camera_running {
                    continue;
                }
                match svc.grab_frame() {
                    Ok(frame) => state.write().live_frame = Some(frame),
                    Err(e) => tracing::debug!(error = %e, "dropped camera frame"),
                }
            }
        }
    });

    let session_ready =
        state.read().session.is_some() && !state.read().camera_running;

    rsx! {
        div {
            h1 { "Editor" }

            // Viewport: aspect-preserving scale-to-fit, no cropping.
            div {
                style: "width: 100%; height: 480px; display: flex; align-items: center; justify-content: center; background: #111; border-radius: 8px; overflow: hidden;",
                if let Some(src) = viewport_src(&state.read()) {
                    img {
                        src: "{src}",
                        style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                    }
                } else {
                    p { style: "color: #888;", "No image loaded. Open a file or start the camera." }
                }
            }

            // Source controls
            div { style: "display: flex; gap: 8px; margin: 12px 0;",
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
                                .pick_file()
                            {
                                match svc.load_image(&path) {
                                    Ok(buffer) => {
                                        svc.stop_camera();
                                        let (w, h) = buffer.dimensions();
                                        let mut st = state.write();
                                        st.session = Some(Session::load(buffer));
                                        st.camera_running = false;
                                        st.live_frame = None;
                                        st.status = Some(StatusLine::info(format!("Image loaded ({w}x{h}).")));
                                    }
                                    // Prior session state stays untouched.
                                    Err(e) => state.write().status = Some(StatusLine::error(&e)),
                                }
                            }
                        }
                    },
                    "Open Image"
                }
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            if state.read().camera_running {
                                svc.stop_camera();
                                let mut st = state.write();
                                st.camera_running = false;
                                st.live_frame = None;
                                st.status = Some(StatusLine::info("Camera stopped."));
                            } else {
                                match svc.start_camera() {
                                    Ok((w, h)) => {
                                        let mut st = state.write();
                                        st.camera_running = true;
                                        st.status = Some(StatusLine::info(format!("Camera started ({w}x{h}).")));
                                    }
                                    Err(e) => state.write().status = Some(StatusLine::error(&e)),
                                }
                            }
                        }
                    },
                    if state.read().camera_running { "Stop Camera" } else { "Start Camera" }
                }
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white;",
                    disabled: !state.read().camera_running,
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            // Capture is a user action, so unlike the preview
                            // loop a failed grab is surfaced.
                            match svc.grab_frame() {
                                Ok(frame) => {
                                    svc.stop_camera();
                                    let (w, h) = frame.dimensions();
                                    let mut st = state.write();
                                    st.session = Some(Session::load(frame));
                                    st.camera_running = false;
                                    st.live_frame = None;
                                    st.status = Some(StatusLine::info(format!("Photo captured ({w}x{h}).")));
                                }
                                Err(e) => state.write().status = Some(StatusLine::error(&e)),
                            }
                        }
                    },
                    "Capture Photo"
                }
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    disabled: !session_ready,
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let default_name = format!(
                                "bildwerk-{}.png",
                                chrono::Local::now().format("%Y%m%d-%H%M%S")
                            );
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("PNG", &["png"])
                                .add_filter("JPEG", &["jpg", "jpeg"])
                                .set_file_name(default_name)
                                .save_file()
                            {
                                let current = state.read().session.as_ref().map(|s| s.current().clone());
                                if let Some(buffer) = current {
                                    match svc.export_image(&buffer, &path) {
                                        Ok(()) => state.write().status = Some(StatusLine::info(
                                            format!("Saved to {}.", path.display()),
                                        )),
                                        Err(e) => state.write().status = Some(StatusLine::error(&e)),
                                    }
                                }
                            }
                        }
                    },
                    "Export"
                }
            }

            // Display-only channel selector — re-renders the viewport without
            // touching the transform pipeline.
            select {
                style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 8px; margin-bottom: 12px;",
                value: state.read().channel.label(),
                onchange: move |evt| {
                    if let Some(selected) = Channel::from_label(&evt.value()) {
                        state.write().channel = selected;
                    }
                },
                for choice in Channel::ALL_OPTIONS {
                    option { value: choice.label(), {choice.label()} }
                }
            }

            // Transform parameters
            div { style: "display: flex; gap: 8px; margin-bottom: 8px;",
                ParamInput { placeholder: "Target width", value: width_input }
                ParamInput { placeholder: "Target height", value: height_input }
                ParamInput { placeholder: "Darken by", value: brightness_input }
            }
            div { style: "display: flex; gap: 8px; margin-bottom: 12px;",
                ParamInput { placeholder: "Circle centre X", value: center_x_input }
                ParamInput { placeholder: "Circle centre Y", value: center_y_input }
                ParamInput { placeholder: "Circle radius", value: radius_input }
            }

            // Actions
            div { style: "display: flex; gap: 8px;",
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                    disabled: !session_ready,
                    onclick: move |_| {
                        if state.read().session.is_none() {
                            state.write().status = Some(StatusLine::action(
                                "No image to edit.",
                                "Open a file or capture a photo before applying changes.",
                            ));
                            return;
                        }

                        let parsed = TransformParams::from_fields(
                            &width_input.read(),
                            &height_input.read(),
                            &brightness_input.read(),
                            &center_x_input.read(),
                            &center_y_input.read(),
                            &radius_input.read(),
                        );
                        let params = match parsed {
                            Ok(params) => params,
                            Err(e) => {
                                state.write().status = Some(StatusLine::error(&e));
                                return;
                            }
                        };

                        let result = state
                            .write()
                            .session
                            .as_mut()
                            .map(|session| session.apply(&params));
                        match result {
                            Some(Ok(())) => {
                                width_input.set(String::new());
                                height_input.set(String::new());
                                brightness_input.set(String::new());
                                center_x_input.set(String::new());
                                center_y_input.set(String::new());
                                radius_input.set(String::new());
                                state.write().status = Some(StatusLine::info("Changes applied."));
                            }
                            Some(Err(e)) => state.write().status = Some(StatusLine::error(&e)),
                            None => {}
                        }
                    },
                    "Apply"
                }
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #ccc; background: white; font-size: 16px;",
                    disabled: !session_ready,
                    onclick: move |_| {
                        let mut st = state.write();
                        if let Some(ref mut session) = st.session {
                            session.reset();
                            st.status = Some(StatusLine::info("Reverted to original."));
                        }
                    },
                    "Reset"
                }
            }

            // Status line
            if let Some(status) = state.read().status.clone() {
                StatusBanner { status: status }
            }
        }
    }
}

#[component]
fn StatusBanner(status: StatusLine) -> Element {
    let colour = status_colour(&status);
    rsx! {
        div {
            style: "margin-top: 12px; padding: 12px; border-radius: 8px; background: #f6f6f6; border-left: 4px solid {colour};",
            p { style: "margin: 0; font-weight: 600;", "{status.message}" }
            if let Some(ref suggestion) = status.suggestion {
                p { style: "margin: 4px 0 0; color: #555;", "{suggestion}" }
            }
        }
    }
}

#[component]
fn ParamInput(placeholder: &'static str, value: Signal<String>) -> Element {
    let mut value = value;
    rsx! {
        input {
            r#type: "text",
            style: "flex: 1; padding: 8px; border: 1px solid #ccc; border-radius: 8px;",
            placeholder: placeholder,
            value: "{value}",
            oninput: move |evt| value.set(evt.value()),
        }
    }
}

/// Encode the buffer the viewport should show as a data URI.
///
/// The live preview uses JPEG (cheap to encode thirty times a second); a
/// committed still uses lossless PNG. Both paths render a *view* — the
/// channel filter is applied to a copy and the session buffers are never
/// touched.
fn viewport_src(state: &EditorState) -> Option<String> {
    let buffer = state.displayed()?;

    let filtered;
    let view: &PixelBuffer = match state.channel {
        Channel::All => buffer,
        selected => {
            filtered = channel::isolate(buffer, selected);
            &filtered
        }
    };

    let (bytes, mime) = if state.camera_running {
        (view.to_jpeg_bytes(state.config.jpeg_quality).ok()?, "image/jpeg")
    } else {
        (view.to_png_bytes().ok()?, "image/png")
    };

    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Some(format!("data:{mime};base64,{encoded}"))
}

fn status_colour(status: &StatusLine) -> &'static str {
    match status.severity {
        None => "#1a7f37",
        Some(Severity::Transient) => "#b85c00",
        Some(Severity::ActionRequired) => "#0969da",
        Some(Severity::Permanent) => "#c62828",
    }
}
