mod app;
mod components;
mod logging;
mod pages;
mod state;
mod storage;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(&sanamana_core::default_config().logging.filter);
    leptos::mount::mount_to_body(App);
}
