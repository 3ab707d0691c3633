// SPDX-License-Identifier: MPL-2.0
pub mod many_options_button;

pub use many_options_button::ManyOptionsButton;
