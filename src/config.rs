// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The ID of the element the host document provides for the application to mount under.
pub const MOUNT_ELEMENT_ID: &str = "app";

// Deployment credentials. Replace both values with the ones issued for your deployment
// before building.
pub const DEPLOY_APP_ID: &str = "PASTE_YOUR_APPLICATION_ID_HERE";
pub const DEPLOY_SECRET_KEY: &str = "PASTE_YOUR_SECRET_KEY_HERE";

/// The credentials handed to the root component when an application instance is
/// constructed. Built once at startup and never modified afterward.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchConfig {
	pub app_id: String,
	pub secret_key: String,
}

impl LaunchConfig {
	pub fn new(app_id: String, secret_key: String) -> Self {
		Self { app_id, secret_key }
	}

	/// The configuration as shipped with this build.
	pub fn deployed() -> Self {
		Self::new(String::from(DEPLOY_APP_ID), String::from(DEPLOY_SECRET_KEY))
	}

	/// Whether either credential is still a placeholder value that was never replaced
	/// for deployment.
	pub fn has_placeholder_credentials(&self) -> bool {
		self.app_id == DEPLOY_APP_ID || self.secret_key == DEPLOY_SECRET_KEY
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deployed_config_carries_the_shipped_credentials() {
		let config = LaunchConfig::deployed();
		assert_eq!(config.app_id, DEPLOY_APP_ID);
		assert_eq!(config.secret_key, DEPLOY_SECRET_KEY);
	}

	#[test]
	fn placeholder_credentials_are_detected() {
		assert!(LaunchConfig::deployed().has_placeholder_credentials());

		let replaced = LaunchConfig::new(String::from("a1b2c3d4"), String::from("0p9o8i7u"));
		assert!(!replaced.has_placeholder_credentials());

		let partially_replaced = LaunchConfig::new(String::from("a1b2c3d4"), String::from(DEPLOY_SECRET_KEY));
		assert!(partially_replaced.has_placeholder_credentials());
	}
}
