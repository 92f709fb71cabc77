// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::LaunchConfig;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct AppProps {
	pub config: LaunchConfig,
}

/// The root component of the application. The bootstrap constructs one of these per
/// mount element; the launch configuration is published to the component context so
/// the rest of the shell can read it. The secret key is never rendered.
#[component]
pub fn App<G: Html>(ctx: Scope, props: AppProps) -> View<G> {
	log::debug!("Activating application shell for application {}", props.config.app_id);
	provide_context(ctx, props.config);

	view! {
		ctx,
		div(class="app") {
			header(id="app_header") {
				h1 {
					"Launchpad"
				}
				AppIdentity {}
			}
			div(id="app_content") {}
		}
	}
}

#[component]
fn AppIdentity<G: Html>(ctx: Scope) -> View<G> {
	let config: &LaunchConfig = use_context(ctx);
	let app_id = config.app_id.clone();

	view! {
		ctx,
		span(class="app_identity") {
			"Application: "
			(app_id)
		}
	}
}
