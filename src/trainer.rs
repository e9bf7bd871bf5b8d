use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayerGender {
    Male,
    Female,
}

impl PlayerGender {
    pub fn from_byte(data: u8) -> Option<Self> {
        match data {
            0x00 => Some(PlayerGender::Male),
            0x01 => Some(PlayerGender::Female),
            _ => {
                log::warn!("Invalid player gender: 0x{data:x}");
                None
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimePlayed {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimePlayed {
    /// `H:MM:SS`, the way the GBA trainer card shows it.
    pub fn padded(&self) -> String {
        format!("{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }

    /// `H:M:S` with no padding at all.
    pub fn unpadded(&self) -> String {
        format!("{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerProfile {
    pub name: String,
    /// Five digit public trainer id.
    pub id: String,
    pub money: String,
    pub time: String,
    /// Earned badges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<PlayerGender>,
}
