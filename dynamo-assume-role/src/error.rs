/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error types returned by client construction and queries.

use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::query::QueryError;
use thiserror::Error;

/// The ambient SDK configuration is unusable for building a client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigLoadError {
    /// No region was configured through the environment, profile, or override.
    #[error("no region configured; set AWS_REGION or pass --region")]
    MissingRegion,

    /// No base credentials provider is available to sign the `AssumeRole` call.
    #[error("no credentials provider configured to assume the role with")]
    MissingCredentials,

    /// The requested session duration is outside what STS accepts.
    #[error("session duration of {0}s is outside the 900..=43200 second range STS accepts")]
    InvalidSessionDuration(u64),
}

/// Errors surfaced by [`create`](crate::client::create) and [`query`](crate::query::query).
///
/// Both variants wrap the underlying failure without classifying it further.
#[derive(Debug, Error)]
pub enum Error {
    /// Ambient configuration could not be loaded.
    #[error("unable to load SDK config, {0}")]
    ConfigLoad(#[from] ConfigLoadError),

    /// The query request failed, including failures to resolve the assumed role credentials.
    #[error("failed to query items")]
    Query(#[source] SdkError<QueryError, HttpResponse>),
}

impl Error {
    /// Returns true if the query was aborted by a client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Query(SdkError::TimeoutError(_)))
    }
}

impl From<SdkError<QueryError, HttpResponse>> for Error {
    fn from(err: SdkError<QueryError, HttpResponse>) -> Self {
        Error::Query(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_smithy_types::error::display::DisplayErrorContext;

    #[test]
    fn config_load_message_names_the_problem() {
        let err = Error::from(ConfigLoadError::MissingRegion);
        assert_eq!(
            err.to_string(),
            "unable to load SDK config, no region configured; set AWS_REGION or pass --region"
        );
        assert!(!err.is_timeout());
    }

    #[test]
    fn query_error_keeps_its_source() {
        let err = Error::from(SdkError::<QueryError, HttpResponse>::timeout_error(
            "took too long",
        ));
        assert!(err.is_timeout());
        let message = format!("{}", DisplayErrorContext(&err));
        assert!(
            message.contains("failed to query items") && message.contains("took too long"),
            "unexpected message: {message}"
        );
    }
}
