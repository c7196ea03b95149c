//! Arguments passed along with a dispatched event.

use crate::callback::error::CallbackError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Ordered arguments supplied to `fire_with` and handed to transition actions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventArgs {
    values: Vec<Value>,
}

impl EventArgs {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Decode the argument at `index` into a concrete type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::EventArgs;
    /// use serde_json::json;
    ///
    /// let args = EventArgs::from(vec![json!(3), json!("fast")]);
    ///
    /// let floors: u32 = args.decode(0).unwrap();
    /// let speed: String = args.decode(1).unwrap();
    ///
    /// assert_eq!(floors, 3);
    /// assert_eq!(speed, "fast");
    /// assert!(args.decode::<u32>(2).is_err());
    /// ```
    pub fn decode<T>(&self, index: usize) -> Result<T, CallbackError>
    where
        T: DeserializeOwned,
    {
        let value = self
            .values
            .get(index)
            .ok_or(CallbackError::MissingArgument { index })?;

        T::deserialize(value).map_err(|source| CallbackError::InvalidArgument { index, source })
    }
}

impl From<Vec<Value>> for EventArgs {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl<const N: usize> From<[Value; N]> for EventArgs {
    fn from(values: [Value; N]) -> Self {
        Self {
            values: values.into(),
        }
    }
}

impl From<()> for EventArgs {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

impl FromIterator<Value> for EventArgs {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Passenger {
        name: String,
        floor: u8,
    }

    #[test]
    fn decode_reads_structured_arguments() {
        let args = EventArgs::from([json!({ "name": "ada", "floor": 4 })]);

        let passenger: Passenger = args.decode(0).unwrap();

        assert_eq!(
            passenger,
            Passenger {
                name: "ada".to_string(),
                floor: 4,
            }
        );
    }

    #[test]
    fn decode_reports_missing_argument() {
        let args = EventArgs::new();

        let result = args.decode::<u8>(0);

        assert!(matches!(
            result,
            Err(CallbackError::MissingArgument { index: 0 })
        ));
    }

    #[test]
    fn decode_reports_type_mismatch() {
        let args: EventArgs = vec![json!("not a number")].into();

        let result = args.decode::<u8>(0);

        assert!(matches!(
            result,
            Err(CallbackError::InvalidArgument { index: 0, .. })
        ));
    }

    #[test]
    fn unit_converts_to_empty_arguments() {
        let args = EventArgs::from(());
        assert!(args.is_empty());
        assert_eq!(args.len(), 0);
    }
}
