use crate::{cmd::TargetWindow, modules::contests::fetcher::ContestFetcher};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use contest_dashboard_libs::clist::core::ClistCore;
use std::env;

#[derive(Debug, Args)]
pub struct FetchArgs {
    window: TargetWindow,
    #[arg(long)]
    pretty: bool,
}

/// 指定したウィンドウの1ページ目をそのまま標準出力へ書き出す動作確認用コマンド
pub async fn run(args: FetchArgs) -> Result<()> {
    let api_url =
        env::var("CLIST_API_URL").unwrap_or(String::from("https://clist.by/api/v4"));
    let username = env::var("CLIST_USERNAME").with_context(|| {
        let message = "CLIST_USERNAME environment variable must be set";
        tracing::error!(message);
        format!("{}", message)
    })?;
    let api_key = env::var("CLIST_API_KEY").with_context(|| {
        let message = "CLIST_API_KEY environment variable must be set";
        tracing::error!(message);
        format!("{}", message)
    })?;

    let core = ClistCore::new(&api_url, &username, &api_key)?;
    let fetcher = ContestFetcher::new(&core);

    tracing::info!("Fetch {} contests page", args.window);
    let page = fetcher.fetch(args.window.into(), Utc::now()).await?;

    let serialized = if args.pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    println!("{}", serialized);

    Ok(())
}
