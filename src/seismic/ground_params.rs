//! EN 1998-1 응답스펙트럼 파라미터 테이블.
//! - Table 3.2 / 3.3: 수평 탄성 스펙트럼 (S, T_B, T_C, T_D)
//! - Table 3.4: 수직 탄성 스펙트럼 (a_vg/a_g, T_B, T_C, T_D)
//! - 말레이시아 NA(MS EN 1998-1) 지반 분류 R/SS/FS 및 수직 스펙트럼 값

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 파라미터 조회 실패. 테이블에 없는 키는 기본값으로 대체하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterLookupError {
    #[error("알 수 없는 지반 분류 '{label}' ({annex})")]
    UnknownGroundType { label: String, annex: NationalAnnex },
    #[error("알 수 없는 스펙트럼 타입 {0} (1 또는 2만 허용)")]
    UnknownSpectrumType(u8),
    #[error("{annex}에는 {spectrum_type} 수직 스펙트럼 값이 없습니다")]
    NotTabulated {
        annex: NationalAnnex,
        spectrum_type: SpectrumType,
    },
}

/// 적용 국가부속서.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NationalAnnex {
    /// EN 1998-1 권장값
    Recommended,
    /// MS EN 1998-1 말레이시아 NDP
    Malaysia,
}

impl fmt::Display for NationalAnnex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NationalAnnex::Recommended => write!(f, "EN 1998-1 권장값"),
            NationalAnnex::Malaysia => write!(f, "말레이시아 NA"),
        }
    }
}

impl FromStr for NationalAnnex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recommended" | "ec8" | "en" => Ok(NationalAnnex::Recommended),
            "malaysia" | "ms" | "my" => Ok(NationalAnnex::Malaysia),
            other => Err(format!("알 수 없는 국가부속서: {other}")),
        }
    }
}

/// 스펙트럼 종류(식 타입). 1 = 고지진(Ms > 5.5), 2 = 저지진.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectrumType {
    Type1,
    Type2,
}

impl SpectrumType {
    pub fn number(self) -> u8 {
        match self {
            SpectrumType::Type1 => 1,
            SpectrumType::Type2 => 2,
        }
    }
}

impl TryFrom<u8> for SpectrumType {
    type Error = ParameterLookupError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SpectrumType::Type1),
            2 => Ok(SpectrumType::Type2),
            other => Err(ParameterLookupError::UnknownSpectrumType(other)),
        }
    }
}

impl fmt::Display for SpectrumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type {}", self.number())
    }
}

/// EN 1998-1 지반 분류 A~E.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundType {
    A,
    B,
    C,
    D,
    E,
}

/// 말레이시아 NA 지반 분류: R(암반), SS(견고 지반), FS(연약 지반).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalaysiaGroundType {
    R,
    SS,
    FS,
}

/// 수평 스펙트럼 계수 한 행. 순서는 테이블과 동일하다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumParams {
    /// 지반계수 S
    pub s: f64,
    /// 일정 가속도 구간 하한(s)
    pub t_b: f64,
    /// 일정 가속도 구간 상한(s)
    pub t_c: f64,
    /// 일정 변위 구간 시작(s)
    pub t_d: f64,
}

/// 수직 스펙트럼 계수 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalSpectrumParams {
    /// a_vg / a_g
    pub avg_ratio: f64,
    pub t_b: f64,
    pub t_c: f64,
    pub t_d: f64,
}

const fn sp(s: f64, t_b: f64, t_c: f64, t_d: f64) -> SpectrumParams {
    SpectrumParams { s, t_b, t_c, t_d }
}

const fn vp(avg_ratio: f64, t_b: f64, t_c: f64, t_d: f64) -> VerticalSpectrumParams {
    VerticalSpectrumParams {
        avg_ratio,
        t_b,
        t_c,
        t_d,
    }
}

impl GroundType {
    pub const ALL: [GroundType; 5] = [
        GroundType::A,
        GroundType::B,
        GroundType::C,
        GroundType::D,
        GroundType::E,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GroundType::A => "A",
            GroundType::B => "B",
            GroundType::C => "C",
            GroundType::D => "D",
            GroundType::E => "E",
        }
    }

    /// Table 3.2(Type 1) / Table 3.3(Type 2)
    pub fn params(self, spectrum_type: SpectrumType) -> SpectrumParams {
        match (spectrum_type, self) {
            (SpectrumType::Type1, GroundType::A) => sp(1.0, 0.15, 0.4, 2.0),
            (SpectrumType::Type1, GroundType::B) => sp(1.2, 0.15, 0.5, 2.0),
            (SpectrumType::Type1, GroundType::C) => sp(1.15, 0.20, 0.6, 2.0),
            (SpectrumType::Type1, GroundType::D) => sp(1.35, 0.20, 0.8, 2.0),
            (SpectrumType::Type1, GroundType::E) => sp(1.4, 0.15, 0.5, 2.0),
            (SpectrumType::Type2, GroundType::A) => sp(1.0, 0.05, 0.25, 1.2),
            (SpectrumType::Type2, GroundType::B) => sp(1.35, 0.05, 0.25, 1.2),
            (SpectrumType::Type2, GroundType::C) => sp(1.5, 0.10, 0.25, 1.2),
            (SpectrumType::Type2, GroundType::D) => sp(1.8, 0.10, 0.30, 1.2),
            (SpectrumType::Type2, GroundType::E) => sp(1.6, 0.05, 0.25, 1.2),
        }
    }
}

impl fmt::Display for GroundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GroundType {
    type Err = ParameterLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(GroundType::A),
            "B" => Ok(GroundType::B),
            "C" => Ok(GroundType::C),
            "D" => Ok(GroundType::D),
            "E" => Ok(GroundType::E),
            _ => Err(ParameterLookupError::UnknownGroundType {
                label: s.trim().to_string(),
                annex: NationalAnnex::Recommended,
            }),
        }
    }
}

impl MalaysiaGroundType {
    pub const ALL: [MalaysiaGroundType; 3] = [
        MalaysiaGroundType::R,
        MalaysiaGroundType::SS,
        MalaysiaGroundType::FS,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MalaysiaGroundType::R => "R",
            MalaysiaGroundType::SS => "SS",
            MalaysiaGroundType::FS => "FS",
        }
    }

    /// 말레이시아 NA 는 식 타입과 무관하게 단일 테이블을 쓴다.
    pub fn params(self) -> SpectrumParams {
        match self {
            MalaysiaGroundType::R => sp(1.0, 0.15, 0.4, 2.0),
            MalaysiaGroundType::SS => sp(1.2, 0.15, 0.5, 2.0),
            MalaysiaGroundType::FS => sp(1.15, 0.20, 0.6, 2.0),
        }
    }
}

impl fmt::Display for MalaysiaGroundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MalaysiaGroundType {
    type Err = ParameterLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" => Ok(MalaysiaGroundType::R),
            "SS" => Ok(MalaysiaGroundType::SS),
            "FS" => Ok(MalaysiaGroundType::FS),
            _ => Err(ParameterLookupError::UnknownGroundType {
                label: s.trim().to_string(),
                annex: NationalAnnex::Malaysia,
            }),
        }
    }
}

/// Table 3.4 수직 스펙트럼 계수. 말레이시아 NA 는 Type 2 만 정의한다.
pub fn vertical_params(
    annex: NationalAnnex,
    spectrum_type: SpectrumType,
) -> Result<VerticalSpectrumParams, ParameterLookupError> {
    match (annex, spectrum_type) {
        (NationalAnnex::Recommended, SpectrumType::Type1) => Ok(vp(0.9, 0.05, 0.15, 1.0)),
        (NationalAnnex::Recommended, SpectrumType::Type2) => Ok(vp(0.45, 0.05, 0.15, 1.0)),
        (NationalAnnex::Malaysia, SpectrumType::Type2) => Ok(vp(0.70, 0.05, 0.15, 1.0)),
        (NationalAnnex::Malaysia, SpectrumType::Type1) => Err(ParameterLookupError::NotTabulated {
            annex,
            spectrum_type,
        }),
    }
}

/// 지반 라벨 문자열과 식 타입 번호로 수평 스펙트럼 계수를 조회한다.
pub fn horizontal_params(
    annex: NationalAnnex,
    label: &str,
    equation_type: u8,
) -> Result<SpectrumParams, ParameterLookupError> {
    let spectrum_type = SpectrumType::try_from(equation_type)?;
    match annex {
        NationalAnnex::Recommended => Ok(label.parse::<GroundType>()?.params(spectrum_type)),
        NationalAnnex::Malaysia => Ok(label.parse::<MalaysiaGroundType>()?.params()),
    }
}

/// 해당 국가부속서에서 사용할 수 있는 지반 라벨 목록.
pub fn ground_labels(annex: NationalAnnex) -> Vec<&'static str> {
    match annex {
        NationalAnnex::Recommended => GroundType::ALL.iter().map(|g| g.label()).collect(),
        NationalAnnex::Malaysia => MalaysiaGroundType::ALL.iter().map(|g| g.label()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(" b ".parse::<GroundType>(), Ok(GroundType::B));
        assert_eq!("fs".parse::<MalaysiaGroundType>(), Ok(MalaysiaGroundType::FS));
    }

    #[test]
    fn unknown_label_is_reported_without_surrounding_whitespace() {
        let err = "Z\n".parse::<GroundType>().unwrap_err();
        assert_eq!(
            err,
            ParameterLookupError::UnknownGroundType {
                label: "Z".to_string(),
                annex: NationalAnnex::Recommended,
            }
        );
        assert!(!err.to_string().contains('\n'));
        let err = " xx ".parse::<MalaysiaGroundType>().unwrap_err();
        assert!(err.to_string().contains("'xx'"), "{err}");
    }

    #[test]
    fn malaysia_labels_do_not_leak_into_recommended() {
        let err = horizontal_params(NationalAnnex::Recommended, "SS", 2).unwrap_err();
        assert!(matches!(err, ParameterLookupError::UnknownGroundType { .. }));
    }

    #[test]
    fn breakpoints_are_ordered() {
        for st in [SpectrumType::Type1, SpectrumType::Type2] {
            for g in GroundType::ALL {
                let p = g.params(st);
                assert!(p.t_b < p.t_c && p.t_c < p.t_d, "{g} {st}");
            }
        }
    }
}
