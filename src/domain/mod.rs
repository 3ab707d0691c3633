// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure types and rules with no dependency on event delivery.

pub mod button;
