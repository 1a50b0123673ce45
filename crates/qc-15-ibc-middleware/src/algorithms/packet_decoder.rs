//! # Transfer Packet Decoder
//!
//! Parses ICS-20 `FungibleTokenPacketData` JSON into a [`TransferRecord`].
//!
//! ```text
//! {"denom":"transfer/channel-0/usat","amount":"1000","sender":"nomic1..","receiver":"osmo1..","memo":""}
//! ```
//!
//! Unknown fields are ignored. `amount` is accepted as a decimal string or, for
//! the legacy v1 encoding, as a JSON unsigned integer.

use crate::domain::{Amount, DecodeError, DenomTrace, TransferRecord};
use serde_json::{Map, Value};

/// Decode a transfer packet payload.
pub fn decode_transfer_packet(data: &[u8]) -> Result<TransferRecord, DecodeError> {
    let value: Value =
        serde_json::from_slice(data).map_err(|e| DecodeError::InvalidEncoding(e.to_string()))?;
    let fields = match value {
        Value::Object(map) => map,
        other => {
            return Err(DecodeError::InvalidEncoding(format!(
                "expected JSON object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let denom = non_blank_string(&fields, "denom")?;
    let amount = parse_amount(&fields)?;
    let sender = required_string(&fields, "sender")?;
    let receiver = non_blank_string(&fields, "receiver")?;
    let memo = optional_string(&fields, "memo")?;

    Ok(TransferRecord {
        denom: DenomTrace::new(denom),
        amount,
        sender,
        receiver,
        memo,
    })
}

fn required_string(fields: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::InvalidFieldType {
            field,
            expected: "a string",
        }),
    }
}

fn non_blank_string(fields: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
    let value = required_string(fields, field)?;
    if value.trim().is_empty() {
        return Err(DecodeError::EmptyField { field });
    }
    Ok(value)
}

fn optional_string(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::InvalidFieldType {
            field,
            expected: "a string",
        }),
    }
}

fn parse_amount(fields: &Map<String, Value>) -> Result<Amount, DecodeError> {
    match fields.get("amount") {
        None | Some(Value::Null) => Err(DecodeError::MissingField { field: "amount" }),
        Some(Value::String(s)) => parse_decimal_amount(s),
        Some(Value::Number(n)) => n.as_u64().map(Amount::from).ok_or_else(|| {
            DecodeError::InvalidAmount {
                amount: n.to_string(),
                reason: "not a non-negative integer".to_string(),
            }
        }),
        Some(_) => Err(DecodeError::InvalidFieldType {
            field: "amount",
            expected: "a decimal string",
        }),
    }
}

fn parse_decimal_amount(raw: &str) -> Result<Amount, DecodeError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidAmount {
            amount: raw.to_string(),
            reason: "not a decimal integer".to_string(),
        });
    }
    Amount::from_dec_str(raw).map_err(|_| DecodeError::InvalidAmount {
        amount: raw.to_string(),
        reason: "exceeds 256 bits".to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
