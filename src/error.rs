// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::fmt::Display;
use sycamore::prelude::*;

/// Failures that can occur while bootstrapping the application into the host document.
///
/// Failures raised by the root component itself during construction aren't represented
/// here; those propagate unchanged through the panic hook.
#[derive(Debug)]
pub enum LaunchError {
	DocumentUnavailable,
	MountTargetNotFound(String),
}

impl Display for LaunchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DocumentUnavailable => write!(f, "The browser document is unavailable"),
			Self::MountTargetNotFound(mount_id) => {
				write!(f, "No element with the ID \"{}\" exists in the document", mount_id)
			}
		}
	}
}

/// Renders the full-page message shown when the application cannot start.
pub fn error_message_view<G: Html>(ctx: Scope<'_>, message: String, error: Option<impl Display>) -> View<G> {
	if let Some(error) = error {
		let error_display = format!("{}", error);
		view! {
			ctx,
			div(id="app_error") {
				(message)
				br {}
				(error_display)
			}
		}
	} else {
		view! {
			ctx,
			div(id="app_error") {
				(message)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_names_the_unresolved_mount_id() {
		let error = LaunchError::MountTargetNotFound(String::from("app"));
		assert_eq!(
			format!("{}", error),
			"No element with the ID \"app\" exists in the document"
		);
	}

	#[test]
	fn display_reports_a_missing_document() {
		assert_eq!(
			format!("{}", LaunchError::DocumentUnavailable),
			"The browser document is unavailable"
		);
	}
}
