// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Browser front end: a single query field plus the rendered answer
pub mod http_server;

pub use http_server::{router, start_server, HealthResponse};
