// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog lookups: the remote service interface, background fetching, and
//! the staleness-bounded result cache.

pub mod cache;
pub mod fetch;
pub mod http;
pub mod provider;
pub mod sample;
