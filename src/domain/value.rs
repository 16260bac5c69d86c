use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How the gateway interprets message text.
pub enum TextMode {
    /// Text is sent as-is.
    #[default]
    Normal,
    /// Markdown-like markers (`*bold*`, `_italic_`, ...) are turned into styles.
    Styled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Receipt kind sent with `receipts`.
pub enum ReceiptType {
    Read,
    Viewed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Identity trust policy for an account.
pub enum TrustMode {
    /// Trust the first identity key seen, then require manual verification.
    OnFirstUse,
    /// Trust every new identity key.
    Always,
    /// Never trust new identity keys automatically.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Who may perform a group action.
pub enum GroupPermission {
    OnlyAdmins,
    EveryMember,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Group invite-link state.
pub enum GroupLinkState {
    Disabled,
    Enabled,
    EnabledWithApproval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_gateway() {
        assert_eq!(serde_json::to_string(&TextMode::Styled).unwrap(), r#""styled""#);
        assert_eq!(serde_json::to_string(&ReceiptType::Viewed).unwrap(), r#""viewed""#);
        assert_eq!(
            serde_json::to_string(&TrustMode::OnFirstUse).unwrap(),
            r#""on-first-use""#
        );
        assert_eq!(
            serde_json::to_string(&GroupPermission::EveryMember).unwrap(),
            r#""every-member""#
        );
        assert_eq!(
            serde_json::to_string(&GroupLinkState::EnabledWithApproval).unwrap(),
            r#""enabled-with-approval""#
        );
    }

    #[test]
    fn text_mode_defaults_to_normal() {
        assert_eq!(TextMode::default(), TextMode::Normal);
    }
}
