use chrono::Utc;
use chrono_tz::Tz;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 按指定时区格式化日志时间，时区由 LOG_TIMEZONE 指定（默认 UTC）
struct ZoneTime(Tz);

impl FormatTime for ZoneTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Utc::now().with_timezone(&self.0);
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn log_timezone() -> Tz {
    std::env::var("LOG_TIMEZONE")
        .ok()
        .and_then(|name| name.trim().parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let tz = log_timezone();

    // 控制台输出层（始终启用）
    let console_layer = fmt::layer()
        .with_timer(ZoneTime(tz))
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    let log_to_file = std::env::var("LOG_TO_FILE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    if log_to_file {
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());

        // 按天轮转日志文件
        let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "reading-percent.log");

        let file_layer = fmt::layer()
            .with_timer(ZoneTime(tz))
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }
}
