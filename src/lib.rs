// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod app;
pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod error;

pub use bootstrap::{launch, launch_in, AppHandle};
pub use config::LaunchConfig;
pub use error::LaunchError;
