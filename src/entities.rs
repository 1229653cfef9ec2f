// SPDX-License-Identifier: GPL-3.0-only

pub mod named;
pub mod pokemon;
pub mod responses;
