//! 포지션 코드
//!
//! 공격 포지션(VF, VB, PM, HB, HF, ST)과 수비 포지션(1~6) 두 가지 고정 집합만 허용합니다.
//! 선수 포지션 테이블은 enum 컬럼으로, 훈련 과제 포지션은 문자열 코드로 저장되므로
//! 과제 쪽은 [`PositionCode::parse`]로 검증합니다.

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 공격 포지션
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum OffensivePosition {
    /// 왼쪽 윙 (venstre fløj)
    #[sea_orm(string_value = "VF")]
    #[serde(rename = "VF")]
    LeftWing,
    /// 왼쪽 백 (venstre back)
    #[sea_orm(string_value = "VB")]
    #[serde(rename = "VB")]
    LeftBack,
    /// 플레이메이커
    #[sea_orm(string_value = "PM")]
    #[serde(rename = "PM")]
    Playmaker,
    /// 오른쪽 백 (højre back)
    #[sea_orm(string_value = "HB")]
    #[serde(rename = "HB")]
    RightBack,
    /// 오른쪽 윙 (højre fløj)
    #[sea_orm(string_value = "HF")]
    #[serde(rename = "HF")]
    RightWing,
    /// 피봇 (stregspiller)
    #[sea_orm(string_value = "ST")]
    #[serde(rename = "ST")]
    Pivot,
}

impl OffensivePosition {
    pub const ALL: [OffensivePosition; 6] = [
        OffensivePosition::LeftWing,
        OffensivePosition::LeftBack,
        OffensivePosition::Playmaker,
        OffensivePosition::RightBack,
        OffensivePosition::RightWing,
        OffensivePosition::Pivot,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OffensivePosition::LeftWing => "VF",
            OffensivePosition::LeftBack => "VB",
            OffensivePosition::Playmaker => "PM",
            OffensivePosition::RightBack => "HB",
            OffensivePosition::RightWing => "HF",
            OffensivePosition::Pivot => "ST",
        }
    }
}

/// 수비 포지션 (1 = 바깥쪽, 3/4 = 중앙)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum DefensivePosition {
    #[sea_orm(string_value = "1")]
    #[serde(rename = "1")]
    One,
    #[sea_orm(string_value = "2")]
    #[serde(rename = "2")]
    Two,
    #[sea_orm(string_value = "3")]
    #[serde(rename = "3")]
    Three,
    #[sea_orm(string_value = "4")]
    #[serde(rename = "4")]
    Four,
    #[sea_orm(string_value = "5")]
    #[serde(rename = "5")]
    Five,
    #[sea_orm(string_value = "6")]
    #[serde(rename = "6")]
    Six,
}

impl DefensivePosition {
    pub const ALL: [DefensivePosition; 6] = [
        DefensivePosition::One,
        DefensivePosition::Two,
        DefensivePosition::Three,
        DefensivePosition::Four,
        DefensivePosition::Five,
        DefensivePosition::Six,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DefensivePosition::One => "1",
            DefensivePosition::Two => "2",
            DefensivePosition::Three => "3",
            DefensivePosition::Four => "4",
            DefensivePosition::Five => "5",
            DefensivePosition::Six => "6",
        }
    }
}

impl fmt::Display for OffensivePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for DefensivePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 알 수 없는 포지션 코드
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ukendt positionskode '{0}'")]
pub struct UnknownPosition(pub String);

impl FromStr for OffensivePosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

impl FromStr for DefensivePosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

/// 공격/수비 구분이 붙은 포지션 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionCode {
    Offensive(OffensivePosition),
    Defensive(DefensivePosition),
}

impl PositionCode {
    /// `is_offensive`에 맞는 집합에서 코드를 찾음
    pub fn parse(code: &str, is_offensive: bool) -> Result<Self, UnknownPosition> {
        if is_offensive {
            code.parse().map(PositionCode::Offensive)
        } else {
            code.parse().map(PositionCode::Defensive)
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PositionCode::Offensive(p) => p.code(),
            PositionCode::Defensive(p) => p.code(),
        }
    }

    pub fn is_offensive(&self) -> bool {
        matches!(self, PositionCode::Offensive(_))
    }
}
