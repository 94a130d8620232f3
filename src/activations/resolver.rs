//! Resolution of activation identifiers.
//!
//! An identifier is a name, a JSON config, or an [`Activation`] that has
//! already been resolved. `None` resolves to [`Activation::Linear`].

use serde_json::Value;

use super::functions::Activation;
use crate::error::{ActivationError, Result};

/// Anything [`get`] can resolve.
#[derive(Clone, Debug, PartialEq)]
pub enum Identifier<'a> {
    Name(&'a str),
    Config(&'a Value),
    Resolved(Activation),
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(name: &'a str) -> Self {
        Identifier::Name(name)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(name: &'a String) -> Self {
        Identifier::Name(name.as_str())
    }
}

impl<'a> From<&'a Value> for Identifier<'a> {
    fn from(config: &'a Value) -> Self {
        Identifier::Config(config)
    }
}

impl From<Activation> for Identifier<'_> {
    fn from(activation: Activation) -> Self {
        Identifier::Resolved(activation)
    }
}

/// Resolve an identifier to an activation.
///
/// # Errors
///
/// [`ActivationError::UnknownIdentifier`] for names outside the table and
/// [`ActivationError::InvalidConfig`] for configs that do not parse.
pub fn get(identifier: Option<Identifier<'_>>) -> Result<Activation> {
    let activation = match identifier {
        None => Activation::Linear,
        Some(Identifier::Name(name)) => name.parse::<Activation>().map_err(|err| {
            log::debug!("failed to resolve activation name '{}'", name);
            err
        })?,
        Some(Identifier::Config(config)) => deserialize(config)?,
        Some(Identifier::Resolved(activation)) => activation,
    };
    log::debug!("resolved activation '{}'", activation.name());
    Ok(activation)
}

/// Serialize an activation into its JSON config.
pub fn serialize(activation: &Activation) -> Result<Value> {
    Ok(serde_json::to_value(activation)?)
}

/// Build an activation from a JSON config: either a bare name or an object
/// carrying a `class_name` and optional parameters.
///
/// `swish` is accepted as a `class_name` and stored as `silu`. Fields the
/// activation does not take are rejected rather than ignored.
pub fn deserialize(config: &Value) -> Result<Activation> {
    match config {
        Value::String(name) => name.parse(),
        Value::Object(fields) => {
            let class_name = fields
                .get("class_name")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    ActivationError::InvalidConfig("missing string field 'class_name'".to_string())
                })?;
            let canonical = match class_name {
                "swish" => "silu",
                name => name,
            };
            if !Activation::NAMES.contains(&canonical) {
                log::debug!("unknown activation class_name '{}' in config", class_name);
                return Err(ActivationError::unknown_identifier(class_name));
            }

            let mut fields = fields.clone();
            fields.insert("class_name".to_string(), Value::from(canonical));
            let activation: Activation = serde_json::from_value(Value::Object(fields.clone()))?;

            let accepted = activation.parameter_names();
            if let Some(unexpected) = fields
                .keys()
                .find(|key| *key != "class_name" && !accepted.contains(&key.as_str()))
            {
                log::debug!("rejecting field '{}' for activation '{}'", unexpected, canonical);
                return Err(ActivationError::InvalidConfig(format!(
                    "unexpected field '{}' for activation '{}'",
                    unexpected, canonical
                )));
            }
            Ok(activation)
        }
        other => Err(ActivationError::InvalidConfig(format!(
            "expected a name or an object, got {}",
            other
        ))),
    }
}
