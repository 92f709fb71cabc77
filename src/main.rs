// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use launchpad_client::bootstrap;
use launchpad_client::config::LaunchConfig;
use launchpad_client::dom;
use launchpad_client::error::error_message_view;

const PAGE_TITLE: &str = "Launchpad";

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let config = LaunchConfig::deployed();
	if config.has_placeholder_credentials() {
		log::warn!("The deployment credentials are still the placeholder values; replace them before deploying");
	}

	dom::set_page_title(PAGE_TITLE);

	match bootstrap::launch(config) {
		Ok(handle) => {
			log::info!("Mounted the application under #{}", handle.mount_element().id());
		}
		Err(error) => {
			log::error!("Failed to start the application: {}", error);
			sycamore::render(|ctx| {
				error_message_view(
					ctx,
					String::from("Unable to load/operate: Failed to start the application"),
					Some(error),
				)
			});
		}
	}
}
