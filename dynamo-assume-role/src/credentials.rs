/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Delegated credentials obtained through STS `AssumeRole`.
//!
//! The provider returned by [`assume_role_provider`] is the SDK's own
//! [`AssumeRoleProvider`], so the DynamoDB client treats it like any other credentials provider:
//! nothing is fetched until the first request is signed, and the client's identity cache holds on
//! to the temporary credentials until they near expiry.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use aws_config::sts::AssumeRoleProvider;
use aws_types::SdkConfig;

use crate::error::ConfigLoadError;

/// Shortest session STS will issue, in seconds.
pub const MIN_SESSION_SECONDS: u64 = 900;
/// Longest session STS will issue for any role, in seconds.
pub const MAX_SESSION_SECONDS: u64 = 43_200;

/// Opaque name of the identity to assume, typically an IAM role ARN.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoleIdentifier(String);

impl RoleIdentifier {
    /// Wraps the given role name or ARN.
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    /// Returns the role as passed to STS.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleIdentifier {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

impl From<String> for RoleIdentifier {
    fn from(role: String) -> Self {
        Self(role)
    }
}

/// Parameters of the `AssumeRole` call.
#[derive(Clone, Debug, Default)]
pub struct AssumeRoleOptions {
    /// Role session name. Defaults to `dynamo-assume-role-<unix millis>`.
    pub session_name: Option<String>,
    /// External ID required by the role's trust policy, if any.
    pub external_id: Option<String>,
    /// Requested lifetime of the credentials. STS applies its default of one hour when unset.
    pub duration: Option<Duration>,
}

/// Builds a provider that exchanges `role` for temporary credentials.
///
/// The STS client behind the provider is built from `config`, so its region, HTTP client and
/// base credentials all come from the ambient configuration. Nothing is sent to STS here.
pub async fn assume_role_provider(
    config: &SdkConfig,
    role: impl Into<RoleIdentifier>,
    options: &AssumeRoleOptions,
) -> Result<AssumeRoleProvider, ConfigLoadError> {
    let role = role.into();
    let session_name = options
        .session_name
        .clone()
        .unwrap_or_else(default_session_name);

    let mut builder = AssumeRoleProvider::builder(role.as_str())
        .session_name(&session_name)
        .configure(config);
    if let Some(external_id) = &options.external_id {
        builder = builder.external_id(external_id);
    }
    if let Some(duration) = options.duration {
        builder = builder.session_length(checked_session_length(duration)?);
    }

    tracing::debug!(%role, session = %session_name, "configured assume role provider");
    Ok(builder.build().await)
}

// STS takes the duration as a 32-bit integer; anything outside its accepted range is rejected
// here instead of being wrapped or clamped.
fn checked_session_length(duration: Duration) -> Result<Duration, ConfigLoadError> {
    let seconds = duration.as_secs();
    if (MIN_SESSION_SECONDS..=MAX_SESSION_SECONDS).contains(&seconds) {
        Ok(Duration::from_secs(seconds))
    } else {
        Err(ConfigLoadError::InvalidSessionDuration(seconds))
    }
}

fn default_session_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("dynamo-assume-role-{millis}")
}
