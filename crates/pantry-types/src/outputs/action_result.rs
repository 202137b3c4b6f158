use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, DeserializeOwned},
    ser::SerializeStruct,
};

/// Outcome of a recipe action, the only value presentation code receives.
///
/// On the wire it is the tagged union
/// `{"success": true, "data": …}` | `{"success": false, "error": "…"}`.
/// The error text is always a short sentence meant for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult<T> {
    Success(T),
    Failure(String),
}

impl<T> ActionResult<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(message) => Err(message),
        }
    }
}

impl<T: Serialize> Serialize for ActionResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ActionResult", 2)?;
        match self {
            Self::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure(message) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", message)?;
            }
        }
        state.end()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ActionResult<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire<T> {
            success: bool,
            data: Option<T>,
            error: Option<String>,
        }

        let wire = Wire::<T>::deserialize(deserializer)?;
        match (wire.success, wire.data, wire.error) {
            (true, Some(data), _) => Ok(Self::Success(data)),
            (false, _, Some(message)) => Ok(Self::Failure(message)),
            (true, None, _) => Err(de::Error::missing_field("data")),
            (false, _, None) => Err(de::Error::missing_field("error")),
        }
    }
}
