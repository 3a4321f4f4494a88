use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// 可识别的手势标签
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Up,
    Down,
    Left,
    Right,
    Unknown,
}

impl Gesture {
    pub const ALL: [Gesture; 5] = [
        Gesture::Up,
        Gesture::Down,
        Gesture::Left,
        Gesture::Right,
        Gesture::Unknown,
    ];

    /// 与汇编示例中 R0 返回值一致的编号
    pub fn id(&self) -> u8 {
        match self {
            Gesture::Unknown => 0,
            Gesture::Up => 1,
            Gesture::Down => 2,
            Gesture::Left => 3,
            Gesture::Right => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Up => "up",
            Gesture::Down => "down",
            Gesture::Left => "left",
            Gesture::Right => "right",
            Gesture::Unknown => "unknown",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Gesture::Up => "Up",
            Gesture::Down => "Down",
            Gesture::Left => "Left",
            Gesture::Right => "Right",
            Gesture::Unknown => "Unknown",
        }
    }

    /// 结果卡片中代替图标的符号
    pub fn symbol(&self) -> &'static str {
        match self {
            Gesture::Up => "⬆",
            Gesture::Down => "⬇",
            Gesture::Left => "⬅",
            Gesture::Right => "➡",
            Gesture::Unknown => "❓",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized gesture type: '{0}'")]
pub struct ParseGestureError(pub String);

impl FromStr for Gesture {
    type Err = ParseGestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Gesture::ALL
            .into_iter()
            .find(|g| g.as_str() == normalized)
            .ok_or_else(|| ParseGestureError(s.to_string()))
    }
}

/// 数据生成类型：随机，或偏向某个指定手势
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    #[default]
    Random,
    Up,
    Down,
    Left,
    Right,
    Unknown,
}

impl GenerationType {
    pub const ALL: [GenerationType; 6] = [
        GenerationType::Random,
        GenerationType::Up,
        GenerationType::Down,
        GenerationType::Left,
        GenerationType::Right,
        GenerationType::Unknown,
    ];

    /// 指定的目标手势，随机模式返回 None
    pub fn target(&self) -> Option<Gesture> {
        match self {
            GenerationType::Random => None,
            GenerationType::Up => Some(Gesture::Up),
            GenerationType::Down => Some(Gesture::Down),
            GenerationType::Left => Some(Gesture::Left),
            GenerationType::Right => Some(Gesture::Right),
            GenerationType::Unknown => Some(Gesture::Unknown),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.target() {
            None => "random",
            Some(gesture) => gesture.as_str(),
        }
    }

    /// 下拉框里显示的文字
    pub fn label(&self) -> &'static str {
        match self {
            GenerationType::Random => "Random Gesture",
            GenerationType::Up => "Up Motion",
            GenerationType::Down => "Down Motion",
            GenerationType::Left => "Left Motion",
            GenerationType::Right => "Right Motion",
            GenerationType::Unknown => "Unknown (Noise)",
        }
    }
}

impl From<Gesture> for GenerationType {
    fn from(gesture: Gesture) -> Self {
        match gesture {
            Gesture::Up => GenerationType::Up,
            Gesture::Down => GenerationType::Down,
            Gesture::Left => GenerationType::Left,
            Gesture::Right => GenerationType::Right,
            Gesture::Unknown => GenerationType::Unknown,
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationType {
    type Err = ParseGestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(GenerationType::Random);
        }
        s.parse::<Gesture>()
            .map(GenerationType::from)
            .map_err(|_| ParseGestureError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_ids_match_assembly_listing() {
        assert_eq!(Gesture::Unknown.id(), 0);
        assert_eq!(Gesture::Up.id(), 1);
        assert_eq!(Gesture::Down.id(), 2);
        assert_eq!(Gesture::Left.id(), 3);
        assert_eq!(Gesture::Right.id(), 4);
    }

    #[test]
    fn test_parse_gesture_is_case_insensitive() {
        assert_eq!("UP".parse::<Gesture>(), Ok(Gesture::Up));
        assert_eq!(" left ".parse::<Gesture>(), Ok(Gesture::Left));
        assert!("shake".parse::<Gesture>().is_err());
    }

    #[test]
    fn test_parse_generation_type() {
        assert_eq!("random".parse::<GenerationType>(), Ok(GenerationType::Random));
        assert_eq!("Right".parse::<GenerationType>(), Ok(GenerationType::Right));
        assert_eq!(
            "sideways".parse::<GenerationType>(),
            Err(ParseGestureError("sideways".to_string()))
        );
    }

    #[test]
    fn test_generation_type_target() {
        assert_eq!(GenerationType::Random.target(), None);
        assert_eq!(GenerationType::Unknown.target(), Some(Gesture::Unknown));
        for gesture in Gesture::ALL {
            assert_eq!(GenerationType::from(gesture).target(), Some(gesture));
        }
    }

    #[test]
    fn test_gesture_serializes_lowercase() {
        let json = serde_json::to_string(&Gesture::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let parsed: GenerationType = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(parsed, GenerationType::Unknown);
    }
}
