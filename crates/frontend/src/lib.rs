pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

/// Id of the element the application mounts into
pub const MOUNT_POINT_ID: &str = "root";

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available, cannot start the application");
        return;
    };

    match document
        .get_element_by_id(MOUNT_POINT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        Some(root) => leptos::mount::mount_to(root, app::App).forget(),
        None => {
            log::error!("Mount point #{} not found", MOUNT_POINT_ID);
            if let Some(body) = document.body() {
                body.set_inner_html(
                    "<div class=\"fatal-error\">\
                     <h1>Aplikasi gagal dimuat</h1>\
                     <p>Elemen #root tidak ditemukan di halaman.</p>\
                     </div>",
                );
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
