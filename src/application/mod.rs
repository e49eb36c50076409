// SPDX-License-Identifier: MPL-2.0
//! Application layer: the ports the page components are written against.

pub mod port;
