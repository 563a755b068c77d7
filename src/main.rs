//! Browser entry point.

use leptos::mount::mount_to_body;
use todo_client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
