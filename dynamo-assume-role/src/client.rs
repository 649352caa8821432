/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Construction of DynamoDB clients that sign with assumed role credentials.

use std::time::Duration;

use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_dynamodb::config::timeout::TimeoutConfig;
use aws_types::SdkConfig;

use crate::credentials::{self, AssumeRoleOptions, RoleIdentifier};
use crate::error::{ConfigLoadError, Error};

/// DynamoDB client settings applied on top of the ambient configuration.
///
/// These apply to every client built here, whatever provides its credentials. Parameters of the
/// role exchange itself live in [`AssumeRoleOptions`].
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    /// Send DynamoDB requests here instead of the regional endpoint.
    pub endpoint_url: Option<String>,
    /// Upper bound on a whole operation, including credential resolution.
    pub operation_timeout: Option<Duration>,
}

/// Creates a DynamoDB client that acts as `role`.
///
/// No request is sent here: the role is assumed when the returned client signs its first
/// request, which is also when an invalid role surfaces as an error.
pub async fn create(
    config: &SdkConfig,
    role: impl Into<RoleIdentifier>,
) -> Result<aws_sdk_dynamodb::Client, Error> {
    create_with_options(
        config,
        role,
        &AssumeRoleOptions::default(),
        &ClientOptions::default(),
    )
    .await
}

/// Like [`create`], with explicit role exchange parameters and client options.
pub async fn create_with_options(
    config: &SdkConfig,
    role: impl Into<RoleIdentifier>,
    assume_role: &AssumeRoleOptions,
    options: &ClientOptions,
) -> Result<aws_sdk_dynamodb::Client, Error> {
    validate(config)?;
    let provider = credentials::assume_role_provider(config, role, assume_role).await?;
    Ok(build(config, provider, options))
}

/// Creates a DynamoDB client that signs with an arbitrary credentials `provider`.
///
/// The provider is only invoked when a request is signed. The client caches what it returns
/// and asks again shortly before the credentials expire. Unlike [`create`], no base credentials
/// are required in `config`.
pub fn create_with_provider(
    config: &SdkConfig,
    provider: impl ProvideCredentials + 'static,
    options: &ClientOptions,
) -> Result<aws_sdk_dynamodb::Client, Error> {
    require_region(config)?;
    Ok(build(config, provider, options))
}

fn build(
    config: &SdkConfig,
    provider: impl ProvideCredentials + 'static,
    options: &ClientOptions,
) -> aws_sdk_dynamodb::Client {
    let mut builder =
        aws_sdk_dynamodb::config::Builder::from(config).credentials_provider(provider);
    if let Some(endpoint_url) = &options.endpoint_url {
        builder = builder.endpoint_url(endpoint_url);
    }
    if let Some(timeout) = options.operation_timeout {
        builder =
            builder.timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build());
    }
    aws_sdk_dynamodb::Client::from_conf(builder.build())
}

fn require_region(config: &SdkConfig) -> Result<(), ConfigLoadError> {
    match config.region() {
        Some(_) => Ok(()),
        None => Err(ConfigLoadError::MissingRegion),
    }
}

fn validate(config: &SdkConfig) -> Result<(), ConfigLoadError> {
    require_region(config)?;
    if config.credentials_provider().is_none() {
        return Err(ConfigLoadError::MissingCredentials);
    }
    Ok(())
}
