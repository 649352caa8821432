/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Command line settings and loading of the ambient SDK configuration.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_types::SdkConfig;
use clap::{Parser, ValueEnum};

use crate::client::ClientOptions;
use crate::credentials::{
    AssumeRoleOptions, RoleIdentifier, MAX_SESSION_SECONDS, MIN_SESSION_SECONDS,
};
use crate::query::QueryRequest;

/// Attribute name the lookup uses when none is given.
pub const DEFAULT_PARTITION_KEY_NAME: &str = "searchString";

/// How a query result is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The response structure as reported by the SDK.
    #[default]
    Debug,
    /// Count, scanned count and items as plain JSON.
    Json,
}

#[derive(Clone, Debug, Parser)]
#[command(
    name = "dynamo-assume-role",
    about = "Query a DynamoDB table by partition key using credentials from an assumed IAM role",
    version
)]
pub struct Settings {
    /// ARN of the role to assume
    #[arg(long, env = "ROLE_ARN")]
    pub role_arn: String,

    /// Table to query
    #[arg(short, long, env = "TABLE_NAME")]
    pub table: String,

    /// Name of the partition key attribute
    #[arg(long, env = "PARTITION_KEY_NAME", default_value = DEFAULT_PARTITION_KEY_NAME)]
    pub key_name: String,

    /// Partition key value to look up, sent as a string attribute
    #[arg(long, env = "PARTITION_KEY_VALUE")]
    pub key_value: String,

    /// Region override; falls back to the environment and shared config
    #[arg(short, long)]
    pub region: Option<String>,

    /// Named profile from the shared config files
    #[arg(long)]
    pub profile: Option<String>,

    /// Custom DynamoDB endpoint, e.g. http://localhost:8000 for DynamoDB Local
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Role session name reported to STS
    #[arg(long)]
    pub session_name: Option<String>,

    /// External ID required by the role's trust policy
    #[arg(long)]
    pub external_id: Option<String>,

    /// Lifetime of the assumed role credentials in seconds
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(MIN_SESSION_SECONDS..=MAX_SESSION_SECONDS)
    )]
    pub duration_seconds: Option<u64>,

    /// Abort the query if it has not completed within this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Debug)]
    pub format: Format,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Settings {
    pub fn role(&self) -> RoleIdentifier {
        RoleIdentifier::new(&self.role_arn)
    }

    pub fn query_request(&self) -> QueryRequest {
        QueryRequest::new(&self.table, &self.key_name, &self.key_value)
    }

    pub fn assume_role_options(&self) -> AssumeRoleOptions {
        AssumeRoleOptions {
            session_name: self.session_name.clone(),
            external_id: self.external_id.clone(),
            duration: self.duration_seconds.map(Duration::from_secs),
        }
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            endpoint_url: self.endpoint_url.clone(),
            operation_timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Loads the shared SDK configuration from the environment and config files.
///
/// A region or profile given in `settings` takes precedence over the environment. The result is
/// not validated here; [`create`](crate::client::create) rejects configuration it cannot use.
pub async fn load_sdk_config(settings: &Settings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    loader.load().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Settings {
        Settings::try_parse_from(std::iter::once("dynamo-assume-role").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn key_name_defaults_to_search_string() {
        let settings = parse(&[
            "--role-arn",
            "arn:aws:iam::123456789012:role/example-role",
            "--table",
            "Orders",
            "--key-value",
            "abc123",
        ]);
        let request = settings.query_request();
        assert_eq!(request.table_name(), "Orders");
        assert_eq!(request.key_name(), "searchString");
        assert_eq!(request.key_value(), "abc123");
        assert_eq!(settings.format, Format::Debug);
        assert_eq!(
            settings.role().as_str(),
            "arn:aws:iam::123456789012:role/example-role"
        );
    }

    #[test]
    fn optional_flags_flow_into_client_options() {
        let settings = parse(&[
            "--role-arn",
            "role",
            "-t",
            "Orders",
            "--key-name",
            "customerId",
            "--key-value",
            "c-1",
            "--endpoint-url",
            "http://localhost:8000",
            "--timeout-ms",
            "2500",
            "--duration-seconds",
            "900",
            "--external-id",
            "partner-42",
            "--format",
            "json",
        ]);
        assert_eq!(settings.query_request().key_name(), "customerId");
        assert_eq!(settings.format, Format::Json);

        let options = settings.client_options();
        assert_eq!(options.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(options.operation_timeout, Some(Duration::from_millis(2500)));

        let assume_role = settings.assume_role_options();
        assert_eq!(assume_role.duration, Some(Duration::from_secs(900)));
        assert_eq!(assume_role.external_id.as_deref(), Some("partner-42"));
        assert_eq!(assume_role.session_name, None);
    }

    #[test]
    fn key_value_is_required() {
        let command = Settings::command();
        let key_value = command
            .get_arguments()
            .find(|arg| arg.get_id() == "key_value")
            .expect("key_value argument");
        assert!(key_value.is_required_set());
    }

    #[test]
    fn duration_outside_sts_range_is_rejected() {
        for seconds in ["4294968196", "899", "43201"] {
            let result = Settings::try_parse_from([
                "dynamo-assume-role",
                "--role-arn",
                "role",
                "--table",
                "Orders",
                "--key-value",
                "abc123",
                "--duration-seconds",
                seconds,
            ]);
            assert!(result.is_err(), "{seconds} should be rejected");
        }
    }

    #[tokio::test]
    async fn region_flag_overrides_the_environment() {
        let settings = parse(&[
            "--role-arn",
            "role",
            "--table",
            "Orders",
            "--key-value",
            "abc123",
            "--region",
            "eu-central-1",
        ]);
        let config = load_sdk_config(&settings).await;
        assert_eq!(config.region(), Some(&Region::new("eu-central-1")));
    }
}
