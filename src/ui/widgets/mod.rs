// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod slide_strip;
pub mod wheel_gate;

pub use slide_strip::slide_strip;
pub use wheel_gate::wheel_gate;
