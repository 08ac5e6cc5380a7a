// SPDX-License-Identifier: MPL-2.0
pub mod design_tokens;
pub mod widgets;
