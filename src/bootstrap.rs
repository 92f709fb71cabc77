// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::app::App;
use crate::config::{LaunchConfig, MOUNT_ELEMENT_ID};
use crate::dom;
use crate::error::LaunchError;
use sycamore::prelude::*;
use web_sys::Element;

/// A mounted application instance.
///
/// Dropping the handle leaves the instance mounted; `unmount` exists for outer tooling
/// such as hot reload harnesses, and is never invoked by the application itself.
pub struct AppHandle {
	mount: Element,
	config: LaunchConfig,
}

impl AppHandle {
	/// The element the instance was mounted under.
	pub fn mount_element(&self) -> &Element {
		&self.mount
	}

	/// The configuration the instance was constructed with.
	pub fn config(&self) -> &LaunchConfig {
		&self.config
	}

	/// Removes the instance's rendered content from the document.
	pub fn unmount(self) {
		log::debug!("Unmounting the application instance under #{}", self.mount.id());
		dom::clear_children(&self.mount);
	}
}

/// Mounts the application under the well-known mount element.
///
/// # Errors
///
/// Fails when the document is inaccessible or when no element in it carries the
/// expected mount ID.
pub fn launch(config: LaunchConfig) -> Result<AppHandle, LaunchError> {
	launch_in(MOUNT_ELEMENT_ID, config)
}

/// Mounts an application instance under the element with the given ID. Each call
/// constructs an independent instance; launching against two different elements yields
/// two instances with no shared state.
///
/// # Errors
///
/// Fails when the document is inaccessible or when no element in it carries the given
/// mount ID.
pub fn launch_in(mount_id: &str, config: LaunchConfig) -> Result<AppHandle, LaunchError> {
	let document = dom::document().ok_or(LaunchError::DocumentUnavailable)?;
	let mount = document
		.get_element_by_id(mount_id)
		.ok_or_else(|| LaunchError::MountTargetNotFound(String::from(mount_id)))?;

	dom::clear_children(&mount);

	let render_config = config.clone();
	sycamore::render_to(|ctx| view! { ctx, App(config=render_config) }, &mount);
	log::debug!("Mounted an application instance under #{}", mount_id);

	Ok(AppHandle { mount, config })
}
