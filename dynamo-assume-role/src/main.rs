/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::process;

use aws_smithy_types::error::display::DisplayErrorContext;
use clap::Parser;
use dynamo_assume_role::config::{self, Settings};
use dynamo_assume_role::{client, query, render, setup_tracing_subscriber};

#[tokio::main]
async fn main() {
    let settings = Settings::parse();
    setup_tracing_subscriber(settings.verbose);

    let sdk_config = config::load_sdk_config(&settings).await;
    tracing::debug!(region = ?sdk_config.region(), role = %settings.role_arn, "loaded SDK config");

    let client = match client::create_with_options(
        &sdk_config,
        settings.role(),
        &settings.assume_role_options(),
        &settings.client_options(),
    )
    .await
    {
        Ok(client) => client,
        Err(e) => {
            println!("Failed to create DynamoDB client: {}", DisplayErrorContext(&e));
            process::exit(1);
        }
    };

    match query::query(&client, &settings.query_request()).await {
        Ok(output) => println!("{}", render::render(&output, settings.format)),
        Err(e) => {
            println!("Failed to query DynamoDB: {}", DisplayErrorContext(&e));
            process::exit(1);
        }
    }
}
