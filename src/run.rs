/// Run orchestration
///
/// load inputs -> check proxies -> resolve decimals -> fetch prices ->
/// check wallets -> build and print the report
use crate::config::Config;
use crate::constants::SUI_SYMBOL;
use crate::http::{HttpRouter, RetryPolicy};
use crate::inputs::Inputs;
use crate::logger::{self, LogTag};
use crate::pricing::{fetch_price_book, token_symbol, CoinGeckoClient, CoinIdMap, PriceBook, PriceProvider};
use crate::proxy::{check_proxies, parse_proxy_lines, HealthReport, HttpProxyProbe, ProxyEndpoint, ProxyPool, ProxyProbe};
use crate::report::{ReportOptions, ReportTable};
use crate::rpc::{resolve_decimals, ChainDataProvider, SuiRpcClient};
use crate::wallet::{WalletChecker, WalletReport};
use anyhow::{bail, Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Providers and settings for one run
pub struct RunContext<'a> {
    pub config: &'a Config,
    pub chain: &'a dyn ChainDataProvider,
    pub prices: &'a dyn PriceProvider,
    pub probe: &'a dyn ProxyProbe,
    pub show_progress: bool,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub reports: Vec<WalletReport>,
    pub health: HealthReport,
    pub prices: PriceBook,
    pub table: ReportTable,
}

fn progress_bar(len: usize, message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message(message.to_string());
    bar
}

fn status(enabled: bool, message: &str) {
    if enabled {
        eprintln!("{}", message.dimmed());
    }
}

/// Print the non-working proxy list
pub fn print_health(health: &HealthReport) {
    if !health.failed.is_empty() {
        println!("\n{}", "Non-working proxies:".bright_red().bold());
        for proxy in &health.failed {
            println!("- {}", proxy);
        }
    }
    if health.all_failed() {
        println!(
            "\n{}",
            "No working proxies, continuing without proxy.".bright_yellow()
        );
    }
}

/// Health-check the proxies and build the pool of working ones
pub async fn prepare_pool(
    probe: &dyn ProxyProbe,
    proxies: &[ProxyEndpoint],
    policy: &RetryPolicy,
    show_progress: bool,
) -> (ProxyPool, HealthReport) {
    if proxies.is_empty() {
        return (ProxyPool::direct(), HealthReport::default());
    }

    let progress = progress_bar(proxies.len(), "Checking proxies", show_progress);
    let health = check_proxies(probe, proxies, policy, &progress).await;
    print_health(&health);

    if health.all_failed() {
        logger::warning(LogTag::Proxy, "No working proxies, continuing without proxy");
    }
    (ProxyPool::new(health.working.clone()), health)
}

/// Run the checker on already loaded inputs
pub async fn run_with(
    ctx: &RunContext<'_>,
    inputs: &Inputs,
    proxies: &[ProxyEndpoint],
) -> Result<RunOutcome> {
    let config = ctx.config;
    if inputs.wallets.is_empty() {
        logger::error(LogTag::Inputs, "No wallets to check");
        bail!("no wallets to check.");
    }

    let policy = RetryPolicy::from(&config.retry);
    let (pool, health) = prepare_pool(ctx.probe, proxies, &policy, ctx.show_progress).await;
    let routes = pool.routes();

    status(ctx.show_progress, "Caching token decimals...");
    let decimals = resolve_decimals(ctx.chain, &inputs.tokens, &routes).await;

    status(ctx.show_progress, "Fetching token prices...");
    let mut symbols = vec![SUI_SYMBOL.to_string()];
    for coin_type in &inputs.tokens {
        let symbol = token_symbol(coin_type).to_string();
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    let ids = CoinIdMap::with_overrides(&config.prices.coin_ids);
    let prices = fetch_price_book(ctx.prices, &symbols, &ids, &routes).await;

    status(
        ctx.show_progress,
        &format!("Checking {} wallets...", inputs.wallets.len()),
    );
    let checker = WalletChecker::new(ctx.chain, &inputs.tokens, &decimals, &pool, &prices)
        .with_address_format(config.display.address_prefix, config.display.address_suffix);

    let progress = progress_bar(inputs.wallets.len(), "Checking wallets", ctx.show_progress);
    let mut reports = Vec::with_capacity(inputs.wallets.len());
    for (i, address) in inputs.wallets.iter().enumerate() {
        reports.push(checker.check_wallet(i + 1, address).await);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let options = ReportOptions {
        min_token_value: config.display.min_token_value,
        address_prefix: config.display.address_prefix,
        address_suffix: config.display.address_suffix,
    };
    let table = ReportTable::build(&inputs.tokens, &reports, &prices, &options);
    logger::info(
        LogTag::Report,
        &format!(
            "Checked {} wallets, total value {:.2} USD",
            reports.len(),
            table.total_value_usd
        ),
    );

    Ok(RunOutcome {
        reports,
        health,
        prices,
        table,
    })
}

/// Full run against the live Sui node and CoinGecko
pub async fn run_checker(config: &Config, show_progress: bool) -> Result<RunOutcome> {
    let proxies_path = config
        .proxy
        .enabled
        .then(|| Path::new(&config.files.proxies));
    let inputs = Inputs::load(
        Path::new(&config.files.wallets),
        Path::new(&config.files.tokens),
        proxies_path,
    );

    let proxies = parse_proxy_lines(&inputs.proxies);
    if config.proxy.enabled && proxies.is_empty() {
        logger::warning(
            LogTag::Proxy,
            "Proxy list is empty, missing or invalid. Working without proxies",
        );
    }

    let router = Arc::new(HttpRouter::new(&proxies).context("Failed to build HTTP clients")?);
    let policy = RetryPolicy::from(&config.retry);

    let chain = SuiRpcClient::new(
        router.clone(),
        config.rpc.url.clone(),
        Duration::from_secs(config.rpc.timeout_secs),
        policy.clone(),
    );
    let prices = CoinGeckoClient::new(
        router.clone(),
        config.prices.api_url.clone(),
        Duration::from_secs(config.prices.timeout_secs),
        policy,
    );
    let probe = HttpProxyProbe::new(
        router,
        config.proxy.check_url.clone(),
        Duration::from_secs(config.proxy.check_timeout_secs),
    );

    let ctx = RunContext {
        config,
        chain: &chain,
        prices: &prices,
        probe: &probe,
        show_progress,
    };
    let outcome = run_with(&ctx, &inputs, &proxies).await?;
    outcome.table.print();
    Ok(outcome)
}
