//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 스프레드시트 연동 등 다른 호출 측도 쉽게 붙인다.

pub mod app;
pub mod concrete;
pub mod config;
pub mod conversion;
pub mod geometry;
pub mod logging;
pub mod plot_data;
pub mod quantity;
pub mod seismic;
pub mod sheet_functions;
pub mod ui_cli;
pub mod units;
