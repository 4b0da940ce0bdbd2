use tracing_subscriber::EnvFilter;

/// tracing 구독자를 초기화한다. `RUST_LOG`가 없으면 지정 레벨을 사용한다.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 이미 초기화된 경우(테스트 등)는 무시한다.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
