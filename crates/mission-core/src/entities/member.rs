//! Member entity - a registered user of the mission community

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progress;
use crate::value_objects::Snowflake;

/// Social login provider that issued the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginProvider {
    Kakao,
    Naver,
    Google,
}

impl LoginProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kakao => "kakao",
            Self::Naver => "naver",
            Self::Google => "google",
        }
    }

    /// Parse from the stored provider tag
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kakao" => Some(Self::Kakao),
            "naver" => Some(Self::Naver),
            "google" => Some(Self::Google),
            _ => None,
        }
    }
}

impl std::fmt::Display for LoginProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Snowflake,
    /// Unique, user-chosen handle
    pub nickname: String,
    /// Display name from the social provider
    pub username: String,
    pub profile_image: Option<String>,
    pub level: i32,
    pub exp: i32,
    /// Secret profiles are hidden from everyone but their owner
    pub is_secret: bool,
    pub login_provider: LoginProvider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member at level 1 with no experience
    pub fn new(
        id: Snowflake,
        nickname: String,
        username: String,
        login_provider: LoginProvider,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            nickname,
            username,
            profile_image: None,
            level: 1,
            exp: 0,
            is_secret: false,
            login_provider,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the nickname
    pub fn update_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.updated_at = Utc::now();
    }

    /// Replace the profile image URL
    pub fn change_profile_image(&mut self, url: String) {
        self.profile_image = Some(url);
        self.updated_at = Utc::now();
    }

    /// Flip the privacy flag, returning the new value
    pub fn toggle_secret(&mut self) -> bool {
        self.is_secret = !self.is_secret;
        self.updated_at = Utc::now();
        self.is_secret
    }

    /// Grant experience, advancing the level when the threshold is reached.
    pub fn gain_exp(&mut self, amount: i32) {
        self.exp += amount;
        let mut needed = progress::needed_exp_for_level(self.level);
        while self.exp >= needed {
            self.exp -= needed;
            self.level += 1;
            needed = progress::needed_exp_for_level(self.level);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_member() -> Member {
        Member::new(
            Snowflake::new(1),
            "turtle".to_string(),
            "Kim Turtle".to_string(),
            LoginProvider::Kakao,
        )
    }

    #[test]
    fn test_member_starts_at_level_one() {
        let member = test_member();
        assert_eq!(member.level, 1);
        assert_eq!(member.exp, 0);
        assert!(!member.is_secret);
    }

    #[test]
    fn test_toggle_secret() {
        let mut member = test_member();
        assert!(member.toggle_secret());
        assert!(!member.toggle_secret());
    }

    #[test]
    fn test_gain_exp_levels_up() {
        let mut member = test_member();
        member.gain_exp(5);
        assert_eq!(member.level, 2);
        assert_eq!(member.exp, 0);

        // Level 2 needs 5 more; granting 7 leaves 2 over at level 3
        member.gain_exp(7);
        assert_eq!(member.level, 3);
        assert_eq!(member.exp, 2);
    }

    #[test]
    fn test_login_provider_parse() {
        assert_eq!(LoginProvider::parse("kakao"), Some(LoginProvider::Kakao));
        assert_eq!(LoginProvider::parse("google"), Some(LoginProvider::Google));
        assert_eq!(LoginProvider::parse("github"), None);
    }
}
