use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::seismic::{ParameterLookupError, SpectrumError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("파라미터 조회 오류: {0}")]
    Lookup(#[from] ParameterLookupError),
    #[error("스펙트럼 계산 오류: {0}")]
    Spectrum(#[from] SpectrumError),
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// 입출력/설정 오류는 대화형 세션을 끝낸다. 나머지는 메뉴로 돌아간다.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Config(_))
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    info!(path = %config_path.display(), "interactive session started");
    loop {
        let choice = ui_cli::main_menu()?;
        let outcome = match choice {
            MenuChoice::Concrete => ui_cli::handle_concrete(config),
            MenuChoice::Spectrum => ui_cli::handle_spectrum(config),
            MenuChoice::SpectrumCurve => ui_cli::handle_spectrum_curve(config),
            MenuChoice::BaseShear => ui_cli::handle_base_shear(config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(config),
            MenuChoice::Geometry => ui_cli::handle_geometry(config),
            MenuChoice::Settings => ui_cli::handle_settings(config)
                .and_then(|()| config.save(config_path).map_err(AppError::from)),
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => println!("오류: {err}"),
        }
    }
    Ok(())
}
