use anyhow::Context;
use dish_review::{Config, Dish, DishStore};

#[derive(serde::Serialize)]
struct Snapshot<'a> {
    count: usize,
    list: &'a [Dish],
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("fail to read config from env")?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_ansi(true)
        .with_file(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let store = DishStore::from_config(&config);
    tracing::info!(
        policy = ?store.policy(),
        count = store.count(),
        "dish store ready"
    );

    let snapshot = Snapshot {
        count: store.count(),
        list: store.list(),
    };
    let json = serde_json::to_string_pretty(&snapshot).context("fail to serialize dish list")?;
    println!("{json}");

    Ok(())
}
