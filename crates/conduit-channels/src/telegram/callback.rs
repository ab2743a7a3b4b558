//! Callback data encoding for card actions
//!
//! Card buttons echo their callback data back through inbound updates. The
//! action variant is prefixed so the inbound side can tell a postback from a
//! say action.

use conduit_core::ActionKind;

/// Intent recovered from echoed callback data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackIntent {
    /// Internal event with its value
    Postback(String),
    /// User-visible text to replay as if typed
    Say(String),
    /// Data that carries no known prefix
    Plain(String),
}

impl CallbackIntent {
    /// Encode an action value as callback data, e.g. `postback:<value>`
    #[must_use]
    pub fn encode(kind: ActionKind, value: &str) -> String {
        format!("{}:{}", kind.as_str(), value)
    }

    /// Decode callback data produced by [`CallbackIntent::encode`]
    #[must_use]
    pub fn parse(data: &str) -> Self {
        match data.split_once(':') {
            Some(("postback", value)) => Self::Postback(value.to_string()),
            Some(("say", value)) => Self::Say(value.to_string()),
            _ => Self::Plain(data.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(CallbackIntent::encode(ActionKind::Postback, "buy"), "postback:buy");
        assert_eq!(CallbackIntent::encode(ActionKind::Say, "hello"), "say:hello");
    }

    #[test]
    fn test_parse_keeps_colons_in_value() {
        assert_eq!(
            CallbackIntent::parse("postback:order:42"),
            CallbackIntent::Postback("order:42".to_string())
        );
        assert_eq!(CallbackIntent::parse("say:hi"), CallbackIntent::Say("hi".to_string()));
        assert_eq!(
            CallbackIntent::parse("approve:yes"),
            CallbackIntent::Plain("approve:yes".to_string())
        );
    }
}
