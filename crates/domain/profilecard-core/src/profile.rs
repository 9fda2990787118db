use serde::Deserialize;

pub type ProfileId = i32;

pub const ACTIVE_NOW_LABEL: &str = "Active now";
pub const OFFLINE_LABEL: &str = "Offline";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: ProfileId,
    pub name: String,
    /// URL or local path, resolved by the avatar loader.
    pub avatar_reference: String,
    pub online_status: bool,
}

impl ProfileRecord {
    pub fn new(
        id: ProfileId,
        name: impl Into<String>,
        avatar_reference: impl Into<String>,
        online_status: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_reference: avatar_reference.into(),
            online_status,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.online_status {
            ACTIVE_NOW_LABEL
        } else {
            OFFLINE_LABEL
        }
    }

    /// First visible character of the name, upper-cased. Used by the avatar fallback.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_follows_online_flag() {
        let online = ProfileRecord::new(1, "Alice", "a.png", true);
        let offline = ProfileRecord::new(2, "Bob", "b.png", false);

        assert_eq!(online.status_label(), "Active now");
        assert_eq!(offline.status_label(), "Offline");
    }

    #[test]
    fn initial_falls_back_for_blank_names() {
        assert_eq!(ProfileRecord::new(1, "  émile", "", true).initial(), "É");
        assert_eq!(ProfileRecord::new(2, "   ", "", true).initial(), "?");
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let json = r#"{ "id": 7, "name": "Eve", "avatarReference": "eve.png", "onlineStatus": true }"#;
        let record: ProfileRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record, ProfileRecord::new(7, "Eve", "eve.png", true));
    }
}
