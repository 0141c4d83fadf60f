// ==========================================
// 牙科智能配对系统 - 命令行入口
// ==========================================
// 用法:
//   dental-match <date> <treatment_id[,treatment_id...]> [patient_name]
//
// 名册与说明服务由配置文件 / 环境变量提供 (见 config::config_keys)
// ==========================================

use anyhow::Context;
use dental_match::api::MatchRequest;
use dental_match::app::AppState;
use dental_match::config::ConfigManager;
use dental_match::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let date = args
        .next()
        .context("用法: dental-match <date> <treatment_id[,...]> [patient_name]")?;
    let treatment_ids: Vec<String> = args
        .next()
        .map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();
    let patient_name = args.next();

    tracing::info!("{} v{}", dental_match::APP_NAME, dental_match::VERSION);

    let config = ConfigManager::load_default()?;
    let state = AppState::new(config)?;

    let response = state
        .match_api
        .submit(MatchRequest {
            date,
            treatment_ids,
            patient_name,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
