use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::seismic::{MalaysiaGroundType, NationalAnnex, SpectrumOptions, SpectrumParams};
use crate::units::*;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 각 물리량별 표시 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub stress: StressUnit,
    pub acceleration: AccelerationUnit,
    pub length: LengthUnit,
    pub mass: MassUnit,
    pub force: ForceUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            stress: StressUnit::MegaPascal,
            acceleration: AccelerationUnit::MeterPerSecondSquared,
            length: LengthUnit::Meter,
            mass: MassUnit::Tonne,
            force: ForceUnit::KiloNewton,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub national_annex: NationalAnnex,
    /// 말레이시아 NA 선택 시 사용하는 지반 분류
    #[serde(default = "default_malaysia_ground")]
    pub malaysia_ground: MalaysiaGroundType,
    /// 스펙트럼 계산 기본 입력값
    pub spectrum: SpectrumOptions,
    #[serde(default)]
    pub units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            national_annex: NationalAnnex::Recommended,
            malaysia_ground: default_malaysia_ground(),
            spectrum: SpectrumOptions::default(),
            units: DefaultUnits::default(),
        }
    }
}

fn default_malaysia_ground() -> MalaysiaGroundType {
    MalaysiaGroundType::SS
}

impl Config {
    /// 현재 국가부속서 기준 수평 스펙트럼 계수.
    pub fn spectrum_params(&self) -> SpectrumParams {
        match self.national_annex {
            NationalAnnex::Recommended => self.spectrum.params(),
            NationalAnnex::Malaysia => self.malaysia_ground.params(),
        }
    }

    /// 현재 국가부속서 기준 지반 라벨.
    pub fn ground_label(&self) -> &'static str {
        match self.national_annex {
            NationalAnnex::Recommended => self.spectrum.ground_type.label(),
            NationalAnnex::Malaysia => self.malaysia_ground.label(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(io_error(path))?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정된 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_error(path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_spectrum_defaults() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("ground_type = \"B\""));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn units_section_is_optional() {
        let text = r#"
national_annex = "Malaysia"

[spectrum]
ground_type = "C"
spectrum_type = "Type1"
damping_ratio_pct = 2.0
behaviour_factor = 3.9
lower_bound_factor = 0.2
"#;
        let cfg: Config = toml::from_str(text).unwrap();
        assert_eq!(cfg.national_annex, NationalAnnex::Malaysia);
        assert_eq!(cfg.units, DefaultUnits::default());
        assert_eq!(cfg.malaysia_ground, MalaysiaGroundType::SS);
        assert_eq!(cfg.spectrum_params(), MalaysiaGroundType::SS.params());
    }
}
