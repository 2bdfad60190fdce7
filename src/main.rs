//! Reorderable List Frontend Entry Point

use dnd_list_ui::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
