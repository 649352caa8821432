/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Single partition key lookups.

use aws_sdk_dynamodb::operation::query::QueryOutput;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::error::Error;

/// Placeholder bound to the partition key attribute name.
pub const KEY_NAME_PLACEHOLDER: &str = "#pk";
/// Placeholder bound to the partition key value.
pub const KEY_VALUE_PLACEHOLDER: &str = ":value";

/// A lookup of every item whose partition key equals a string value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryRequest {
    table_name: String,
    key_name: String,
    key_value: String,
}

impl QueryRequest {
    pub fn new(
        table_name: impl Into<String>,
        key_name: impl Into<String>,
        key_value: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            key_name: key_name.into(),
            key_value: key_value.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn key_value(&self) -> &str {
        &self.key_value
    }

    /// The key condition expression sent with the query.
    ///
    /// The attribute name goes through a placeholder so that key names which collide with
    /// DynamoDB reserved words (`year`, `name`, ...) still work.
    pub fn key_condition_expression(&self) -> String {
        format!("{KEY_NAME_PLACEHOLDER} = {KEY_VALUE_PLACEHOLDER}")
    }
}

/// Sends one `Query` for `request` and returns the response as DynamoDB reported it.
///
/// Only the first page is returned; `last_evaluated_key` is passed through untouched. An empty
/// result is not an error. Any failure, including failing to resolve the client's credentials,
/// comes back as [`Error::Query`].
#[tracing::instrument(
    skip_all,
    fields(table = %request.table_name(), key = %request.key_name())
)]
pub async fn query(
    client: &aws_sdk_dynamodb::Client,
    request: &QueryRequest,
) -> Result<QueryOutput, Error> {
    tracing::debug!("sending query");
    let output = client
        .query()
        .table_name(request.table_name())
        .key_condition_expression(request.key_condition_expression())
        .expression_attribute_names(KEY_NAME_PLACEHOLDER, request.key_name())
        .expression_attribute_values(
            KEY_VALUE_PLACEHOLDER,
            AttributeValue::S(request.key_value().to_string()),
        )
        .send()
        .await?;
    tracing::debug!(
        count = output.count(),
        more = output.last_evaluated_key().is_some(),
        "query complete"
    );
    Ok(output)
}
