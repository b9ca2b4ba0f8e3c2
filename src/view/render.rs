//! HTML rendering for the widget screens.
//!
//! Everything is rendered server-side from a [`WidgetView`]. The widget shell
//! carries a small script that posts the host's tool output back to the
//! render endpoint and wires up the viewer controls.

use serde_json::Value;

use super::models::{ProjectView, WidgetView};
use super::viewer::{PanZoom, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

const STYLE: &str = r#"<style>
body{margin:0;font-family:ui-sans-serif,system-ui,sans-serif;color:#0f172a}
.landing{display:flex;flex-direction:column;gap:2rem;align-items:center;padding:2rem}
.notice{background:#eff6ff;border:1px solid #bfdbfe;border-radius:.5rem;padding:.75rem 1rem;font-size:.875rem}
.error{margin:2rem auto;max-width:42rem;background:#fef2f2;border:1px solid #fecaca;border-radius:.5rem;padding:1rem 1.5rem}
.error h3{margin:0 0 .25rem;color:#7f1d1d}.error p{margin:0;color:#991b1b;font-size:.875rem}
.viewer{position:relative;height:600px;background:#f8fafc;border-radius:.5rem;overflow:hidden}
.viewer .stage{width:100%;height:100%;display:flex;align-items:center;justify-content:center;overflow:hidden}
.viewer img{max-width:100%;max-height:100%;object-fit:contain;transform-origin:center center}
.controls{position:absolute;top:1rem;left:1rem;z-index:10;display:flex;gap:.5rem;align-items:center;background:#fff;border-radius:.5rem;padding:.5rem}
.badge{position:absolute;top:1rem;right:1rem;z-index:10;background:#fff;border-radius:.5rem;padding:.5rem .75rem;font-size:.875rem}
.edit{position:fixed;bottom:1.5rem;right:1.5rem;z-index:20;background:#2563eb;color:#fff;border:0;border-radius:9999px;padding:.75rem 1.5rem;cursor:pointer}
.empty{padding:2rem;text-align:center;background:#f8fafc;border-radius:.5rem}
.fullscreen{position:fixed;top:1rem;right:1rem;z-index:50;border-radius:9999px;padding:.5rem .75rem}
</style>"#;

const BOOTSTRAP_SCRIPT: &str = r#"<script>
(function () {
  var endpoint = __RENDER_ENDPOINT__;
  function bindViewer() {
    var fs = document.querySelector("[data-action=fullscreen]");
    if (fs) fs.onclick = function () {
      if (window.openai && window.openai.requestDisplayMode) window.openai.requestDisplayMode({ mode: "fullscreen" });
    };
    var edit = document.querySelector("[data-action=edit]");
    if (edit) edit.onclick = function () {
      var link = edit.getAttribute("data-link");
      if (window.openai && window.openai.openExternal) window.openai.openExternal({ href: link });
      else window.open(link, "_blank");
    };
    var viewer = document.querySelector("[data-viewer]");
    if (!viewer) return;
    var min = parseFloat(viewer.dataset.minZoom), max = parseFloat(viewer.dataset.maxZoom), step = parseFloat(viewer.dataset.zoomStep);
    var zoom = 1, x = 0, y = 0, anchor = null;
    var img = viewer.querySelector("img"), label = viewer.querySelector("[data-zoom-label]");
    var zin = viewer.querySelector("[data-action=zoom-in]"), zout = viewer.querySelector("[data-action=zoom-out]");
    var stage = viewer.querySelector(".stage");
    function apply() {
      img.style.transform = "scale(" + zoom + ") translate(" + x / zoom + "px, " + y / zoom + "px)";
      label.textContent = Math.round(zoom * 100) + "%";
      zin.disabled = zoom >= max;
      zout.disabled = zoom <= min;
      stage.style.cursor = zoom > 1 ? (anchor ? "grabbing" : "grab") : "default";
    }
    zin.onclick = function () { zoom = Math.min(zoom + step, max); apply(); };
    zout.onclick = function () { zoom = Math.max(zoom - step, min); apply(); };
    viewer.querySelector("[data-action=reset]").onclick = function () { zoom = 1; x = 0; y = 0; anchor = null; apply(); };
    function start(px, py) { if (zoom > 1) { anchor = { x: px - x, y: py - y }; apply(); } }
    function move(px, py) { if (anchor && zoom > 1) { x = px - anchor.x; y = py - anchor.y; apply(); } }
    function end() { anchor = null; apply(); }
    stage.onmousedown = function (e) { start(e.clientX, e.clientY); };
    stage.onmousemove = function (e) { move(e.clientX, e.clientY); };
    stage.onmouseleave = end;
    window.addEventListener("mouseup", end);
    stage.ontouchstart = function (e) { if (e.touches.length === 1) start(e.touches[0].clientX, e.touches[0].clientY); };
    stage.ontouchmove = function (e) { if (e.touches.length === 1) move(e.touches[0].clientX, e.touches[0].clientY); };
    stage.ontouchend = end;
    apply();
  }
  function render(props) {
    fetch(endpoint, { method: "POST", headers: { "Content-Type": "application/json" }, body: JSON.stringify(props || {}) })
      .then(function (r) { return r.text(); })
      .then(function (html) { document.getElementById("root").innerHTML = html; bindViewer(); });
  }
  if (window.openai) render(window.openai.toolOutput);
  window.addEventListener("openai:set_globals", function () { if (window.openai) render(window.openai.toolOutput); });
  bindViewer();
})();
</script>"#;

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the HTML fragment for one screen.
pub fn render_view(view: &WidgetView) -> String {
    match view {
        WidgetView::Project(project) => render_project(project),
        WidgetView::Error { message } => render_error(message),
        WidgetView::Landing {
            name,
            host_detected,
        } => render_landing(name.as_deref(), *host_detected),
    }
}

/// Renders a complete standalone page for the given host props.
pub fn render_page(props: Option<&Value>) -> String {
    let body = render_view(&WidgetView::from_props(props));
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Rocketium ChatGPT Widget</title>{}</head><body><div id=\"root\">{}</div></body></html>",
        STYLE, body
    )
}

/// Renders the widget document served as an MCP resource, minus the outer
/// `<html>` element.
pub fn render_widget_shell(render_endpoint: &str) -> String {
    let endpoint = serde_json::to_string(render_endpoint).unwrap_or_else(|_| "\"/render\"".into());
    let landing = render_landing(None, false);
    format!(
        "<head><meta charset=\"utf-8\">{}</head><body><div id=\"root\">{}</div>{}</body>",
        STYLE,
        landing,
        BOOTSTRAP_SCRIPT.replace("__RENDER_ENDPOINT__", &endpoint)
    )
}

fn fullscreen_button() -> &'static str {
    r#"<button class="fullscreen" data-action="fullscreen" aria-label="Enter fullscreen">&#x26F6;</button>"#
}

fn render_project(project: &ProjectView) -> String {
    let Some(asset) = project.primary_preview() else {
        return format!(
            r#"<div class="empty"><div>No preview available</div><div>Project ID: {}</div></div>"#,
            escape_html(&project.project_id)
        );
    };

    let image_url = asset.display_url().unwrap_or_default();
    let state = PanZoom::new();
    let disabled = |enabled: bool| if enabled { "" } else { " disabled" };

    format!(
        concat!(
            "{fullscreen}",
            r#"<div class="viewer" data-viewer data-project-id="{project_id}" data-min-zoom="{min}" data-max-zoom="{max}" data-zoom-step="{step}">"#,
            r#"<div class="controls">"#,
            r#"<button data-action="zoom-in" aria-label="Zoom in"{zin}>+</button>"#,
            r#"<button data-action="zoom-out" aria-label="Zoom out"{zout}>&minus;</button>"#,
            r#"<button data-action="reset" aria-label="Reset zoom">&#x21BA;</button>"#,
            r#"<span data-zoom-label>{percent}%</span>"#,
            r#"</div>"#,
            r#"<div class="badge">{dimension}</div>"#,
            r#"<div class="stage"><img src="{src}" alt="Project preview" draggable="false" style="transform: {transform}"></div>"#,
            r#"<button class="edit" data-action="edit" data-link="{link}">Edit in Rocketium</button>"#,
            r#"</div>"#
        ),
        fullscreen = fullscreen_button(),
        project_id = escape_html(&project.project_id),
        min = MIN_ZOOM,
        max = MAX_ZOOM,
        step = ZOOM_STEP,
        zin = disabled(state.can_zoom_in()),
        zout = disabled(state.can_zoom_out()),
        percent = state.percent(),
        dimension = escape_html(&asset.dimension),
        src = escape_html(image_url),
        transform = state.css_transform(),
        link = escape_html(&project.project_link),
    )
}

fn render_error(message: &str) -> String {
    format!(
        r#"<div class="error" role="alert"><h3>Error Creating Project</h3><p>{}</p></div>"#,
        escape_html(message)
    )
}

fn render_landing(name: Option<&str>, host_detected: bool) -> String {
    let notice = if host_detected {
        String::new()
    } else {
        concat!(
            r#"<div class="notice"><p>This app relies on data from a ChatGPT session.</p>"#,
            r#"<p>No <a href="https://developers.openai.com/apps-sdk/reference" target="_blank" rel="noopener noreferrer"><code>window.openai</code></a> property detected</p></div>"#
        )
        .to_string()
    };
    let fullscreen = if host_detected { fullscreen_button() } else { "" };

    format!(
        concat!(
            "{fullscreen}",
            r#"<main class="landing">{notice}<ol>"#,
            "<li>Welcome to the Rocketium ChatGPT Widget</li>",
            "<li>Name returned from tool call: {name}</li>",
            "<li>MCP server path: /mcp</li>",
            "<li>Try: &quot;Create a project about summer sales&quot;</li>",
            "</ol></main>"
        ),
        fullscreen = fullscreen,
        notice = notice,
        name = escape_html(name.unwrap_or("...")),
    )
}
