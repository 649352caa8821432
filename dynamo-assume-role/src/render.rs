/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_sdk_dynamodb::operation::query::QueryOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use crate::config::Format;

/// Renders `output` for printing.
pub fn render(output: &QueryOutput, format: Format) -> String {
    match format {
        Format::Debug => format!("Query result: {output:#?}"),
        Format::Json => format!("{:#}", output_to_json(output)),
    }
}

/// Converts a query response to plain JSON, dropping DynamoDB's type tags.
pub fn output_to_json(output: &QueryOutput) -> Value {
    let mut json = Map::new();
    json.insert("count".into(), output.count().into());
    json.insert("scannedCount".into(), output.scanned_count().into());
    json.insert(
        "items".into(),
        Value::Array(output.items().iter().map(item_to_json).collect()),
    );
    if let Some(key) = output.last_evaluated_key() {
        json.insert("lastEvaluatedKey".into(), item_to_json(key));
    }
    Value::Object(json)
}

pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Value {
    Value::Object(
        item.iter()
            .map(|(name, value)| (name.clone(), attribute_to_json(value)))
            .collect(),
    )
}

fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(aws_smithy_types::base64::encode(blob)),
        AttributeValue::L(list) => Value::Array(list.iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => item_to_json(map),
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => {
            Value::Array(set.iter().map(String::as_str).map(number_to_json).collect())
        }
        AttributeValue::Bs(set) => Value::Array(
            set.iter()
                .map(|blob| Value::String(aws_smithy_types::base64::encode(blob)))
                .collect(),
        ),
        _ => Value::Null,
    }
}

// DynamoDB numbers carry up to 38 digits of precision. Integers that overflow 64 bits are kept as
// the number string rather than rounded through f64.
fn number_to_json(n: &str) -> Value {
    if let Ok(i) = n.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(u) = n.parse::<u64>() {
        return Value::from(u);
    }
    let is_integer = n.trim_start_matches(['-', '+']).bytes().all(|b| b.is_ascii_digit());
    match n.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(number) if !is_integer => Value::Number(number),
        _ => Value::String(n.to_string()),
    }
}
