/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Query a DynamoDB table by partition key while acting as an assumed IAM role.
//!
//! The flow is two calls:
//!
//! 1. [`client::create`] builds a DynamoDB client whose credentials come from STS `AssumeRole`.
//!    Nothing is sent yet; the role is assumed lazily when the first request is signed.
//! 2. [`query::query`] sends a single `Query` with one equality condition on the partition key
//!    and hands back the response untouched.
//!
//! ```no_run
//! use dynamo_assume_role::{client, query::{self, QueryRequest}};
//!
//! # async fn docs() -> Result<(), dynamo_assume_role::Error> {
//! let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let client = client::create(&config, "arn:aws:iam::123456789012:role/example-role").await?;
//! let request = QueryRequest::new("Orders", "searchString", "abc123");
//! let result = query::query(&client, &request).await?;
//! println!("{} items", result.count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod query;
pub mod render;

pub use error::{ConfigLoadError, Error};

/// Sets up a tracing subscriber that prints to stderr.
///
/// `RUST_LOG` takes precedence; otherwise this crate logs at `info`, or `debug` when `verbose` is
/// set, and everything else at `warn`.
pub fn setup_tracing_subscriber(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("warn,dynamo_assume_role={level}").into());

    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
