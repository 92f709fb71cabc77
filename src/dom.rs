// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::{Document, Element};

/// Gets the host document, if the execution environment provides one.
pub fn document() -> Option<Document> {
	web_sys::window().and_then(|window| window.document())
}

/// Removes all element children below the given element. Host pages commonly ship
/// static placeholder markup under the mount element; the bootstrap clears it before
/// the application renders there.
pub fn clear_children(element: &Element) {
	while let Some(child) = element.first_element_child() {
		child.remove();
	}
}

pub fn set_page_title(new_title: &str) {
	if let Some(document) = document() {
		document.set_title(new_title);
	}
}
