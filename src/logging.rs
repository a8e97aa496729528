//! tracing 구독자 초기화.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 로그 필터를 읽는 환경 변수. 예: `TOOLBOX_LOG=structural_code_toolbox=debug`
pub const LOG_ENV: &str = "TOOLBOX_LOG";
const DEFAULT_FILTER: &str = "structural_code_toolbox=info";

static INIT: Once = Once::new();

/// 표준 에러로 로그를 내보내는 구독자를 한 번만 설치한다.
/// `verbose` 가 참이고 환경 변수가 없으면 debug 수준으로 올린다.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "structural_code_toolbox=debug"
        } else {
            DEFAULT_FILTER
        };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
