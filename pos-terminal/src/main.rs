use clap::Parser;
use pos_terminal::cli::{self, Cli};
use pos_terminal::{Config, PosError, init_logger_with_file};
use shared::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境变量 (.env 可选)
    dotenv::dotenv().ok();

    // 2. 解析命令行，加载配置
    let cli = Cli::parse();
    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);

    // 3. 日志
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::debug!(work_dir = %config.work_dir.display(), "POS terminal starting");

    // 4. 执行命令
    if let Err(e) = cli::run(cli, config).await {
        // 终端错误统一带上错误码
        let e = match e.downcast::<PosError>() {
            Ok(pos) => {
                let app = AppError::from(pos);
                tracing::error!(code = %app.code, kind = app.code.message(), "Command failed: {}", app);
                anyhow::Error::new(app)
            }
            Err(other) => {
                tracing::error!("Command failed: {:#}", other);
                other
            }
        };
        return Err(e);
    }
    Ok(())
}
